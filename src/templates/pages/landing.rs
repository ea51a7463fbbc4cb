// templates/pages/landing.rs

use crate::content::{
    routes, Stat, UseCase, CLIENT_LOGO_SLOTS, DEMO_STEPS, DEMO_THUMBNAIL, FEATURES, HERO_IMAGE,
    INTERACTIVE_DEMO_IMAGE, STATS, USE_CASES,
};
use crate::templates::components::{icons, Size, Variant};
use crate::templates::{button, card, desktop_layout, link_button, placeholder_image};
use maud::{html, Markup};

const FILL_IMAGE: &str = "absolute inset-0 h-full w-full object-cover";
const PURPLE_TINT: &str = "absolute inset-0 bg-gradient-to-tr from-purple-600/20 to-transparent";

/// The whole landing page. Output depends only on `year`.
pub fn landing_page(year: i32) -> Markup {
    desktop_layout(
        "LocalCV | Train Computer Vision Models Locally",
        year,
        html! {
            (hero())
            (demo_video())
            (use_cases())
            (interactive_demo())
            (stats())
            (features())
            (clients())
            (call_to_action())
        },
    )
}

fn hero() -> Markup {
    html! {
        section id="hero" class="pt-32 pb-24 px-4 bg-gradient-to-b from-purple-50 to-white" {
            div class="container mx-auto" {
                div class="grid lg:grid-cols-2 gap-12 items-center" {
                    div {
                        h1 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight text-gray-900 mb-6" {
                            "Train Computer Vision Models Using Your Local Hardware"
                        }
                        p class="text-xl text-gray-600 mb-8" {
                            "Build, train, and deploy computer vision models using your own GPU. "
                            "Perfect for teams that need data privacy and cost-effective solutions."
                        }
                        div class="flex flex-col sm:flex-row gap-4" {
                            (link_button(routes::GET_STARTED, "Get Started", Variant::Primary, Size::Large, "bg-purple-600 hover:bg-purple-700"))
                            (link_button(routes::DEMO, "Request a Demo", Variant::Outline, Size::Large, ""))
                        }
                    }
                    div class="relative h-[400px] rounded-lg overflow-hidden shadow-2xl" {
                        (placeholder_image(HERO_IMAGE, "AI Model Training Visualization", FILL_IMAGE))
                        div class=(PURPLE_TINT) {}
                    }
                }
            }
        }
    }
}

fn demo_video() -> Markup {
    html! {
        section id="demo-video" class="py-24 px-4 bg-gray-50" {
            div class="container mx-auto" {
                div class="text-center mb-12" {
                    h2 class="text-3xl font-bold mb-4" { "See it in Action" }
                    p class="text-xl text-gray-600" { "Watch how easy it is to train and deploy your models" }
                }
                div class="relative max-w-4xl mx-auto" {
                    div class="aspect-video bg-gray-900 rounded-lg overflow-hidden shadow-2xl" {
                        div class="absolute inset-0 flex items-center justify-center" {
                            (button(
                                "Watch Demo",
                                Some(icons::play("h-6 w-6 mr-2")),
                                Variant::Outline,
                                Size::Large,
                                "bg-white/10 hover:bg-white/20",
                            ))
                        }
                        (placeholder_image(DEMO_THUMBNAIL, "Product Demo Video Thumbnail", "object-cover opacity-50"))
                    }
                }
            }
        }
    }
}

fn use_case_card(use_case: &UseCase) -> Markup {
    html! {
        div class="use-case-card group relative overflow-hidden rounded-lg shadow-lg" {
            (placeholder_image(
                use_case.image,
                use_case.title,
                "object-cover w-full h-64 transition-transform group-hover:scale-105",
            ))
            div class="absolute inset-0 bg-gradient-to-t from-gray-900 to-transparent opacity-80" {}
            div class="absolute bottom-0 p-6" {
                h3 class="text-xl font-bold text-white mb-2" { (use_case.title) }
                p class="text-gray-200" { (use_case.description) }
            }
        }
    }
}

fn use_cases() -> Markup {
    html! {
        section id="use-cases" class="py-24 px-4" {
            div class="container mx-auto" {
                h2 class="text-3xl font-bold text-center mb-12" { "Real-World Applications" }
                div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8" {
                    @for use_case in &USE_CASES {
                        (use_case_card(use_case))
                    }
                }
            }
        }
    }
}

fn interactive_demo() -> Markup {
    html! {
        section id="interactive-demo" class="py-24 px-4 bg-gray-900 text-white" {
            div class="container mx-auto" {
                div class="grid lg:grid-cols-2 gap-12 items-center" {
                    div {
                        h2 class="text-3xl font-bold mb-6" { "Try Our Interactive Demo" }
                        p class="text-xl text-gray-300 mb-8" {
                            "Upload your own images and see our computer vision models in action. No account required."
                        }
                        div class="space-y-4" {
                            @for (i, step) in DEMO_STEPS.iter().enumerate() {
                                div class="demo-step flex items-center gap-4" {
                                    div class="h-12 w-12 rounded-full bg-purple-600 flex items-center justify-center" {
                                        (i + 1)
                                    }
                                    p { (step) }
                                }
                            }
                        }
                    }
                    div class="relative h-[500px] rounded-lg overflow-hidden" {
                        (placeholder_image(INTERACTIVE_DEMO_IMAGE, "Interactive Demo Interface", FILL_IMAGE))
                        div class=(PURPLE_TINT) {}
                    }
                }
            }
        }
    }
}

fn stat_callout(stat: &Stat) -> Markup {
    html! {
        div class="stat text-center" {
            div class="text-5xl font-bold text-purple-600 mb-4" { (stat.number) }
            div class="text-xl font-semibold mb-2" { (stat.label) }
            div class="text-gray-600" { (stat.sublabel) }
        }
    }
}

fn stats() -> Markup {
    html! {
        section id="stats" class="py-24 px-4" {
            div class="container mx-auto" {
                div class="grid md:grid-cols-3 gap-12" {
                    @for stat in &STATS {
                        (stat_callout(stat))
                    }
                }
            }
        }
    }
}

fn features() -> Markup {
    html! {
        section id="features" class="py-16 px-4 bg-gray-50" {
            div class="container mx-auto" {
                h2 class="text-3xl font-bold text-center mb-12" { "Everything you need for Computer Vision" }
                div class="grid grid-cols-1 md:grid-cols-3 gap-8" {
                    @for feature in &FEATURES {
                        (card(feature.title, html! {
                            p class="text-gray-600" { (feature.description) }
                        }))
                    }
                }
            }
        }
    }
}

fn clients() -> Markup {
    html! {
        section id="clients" class="py-16 px-4" {
            div class="container mx-auto" {
                div class="text-center mb-12" {
                    p class="text-gray-600" { "Trusted by leading companies" }
                }
                div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-8 items-center justify-items-center opacity-60" {
                    @for _ in 0..CLIENT_LOGO_SLOTS {
                        div class="client-logo h-12 w-24 bg-gray-200 rounded animate-pulse" {}
                    }
                }
            }
        }
    }
}

fn call_to_action() -> Markup {
    html! {
        section id="cta" class="py-16 px-4 bg-purple-600" {
            div class="container mx-auto text-center" {
                h2 class="text-3xl font-bold text-white mb-6" { "Start Training Your Models Today" }
                p class="text-purple-100 mb-8 max-w-2xl mx-auto" {
                    "Join thousands of developers who are building the future of computer vision"
                }
                (link_button(routes::GET_STARTED, "Get Started for Free", Variant::Secondary, Size::Large, ""))
            }
        }
    }
}
