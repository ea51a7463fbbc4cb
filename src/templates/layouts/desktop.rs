use crate::content::{copyright_line, routes, FooterColumn, BRAND, FOOTER_COLUMNS};
use crate::templates::components::{icons, link_button, Size, Variant};
use maud::{html, Markup, DOCTYPE};

const NAV_LINK: &str = "p-2 text-sm text-gray-600 hover:text-gray-900";

pub fn desktop_layout(title: &str, year: i32, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="/favicon.ico";
                script src="https://cdn.tailwindcss.com" {}
            }
            body {
                div class="min-h-screen bg-white" {
                    (site_header())
                    (content)
                    (site_footer(year))
                }
            }
        }
    }
}

fn site_header() -> Markup {
    html! {
        header class="fixed top-0 w-full bg-white/80 backdrop-blur-sm border-b z-50" {
            div class="container mx-auto px-4" {
                div class="flex h-16 items-center justify-between" {
                    div class="flex items-center" {
                        a href=(routes::HOME) class="text-xl font-bold text-purple-600" { (BRAND) }
                        nav class="hidden md:ml-8 md:flex md:gap-6" {
                            @for menu in ["Products", "Solutions"] {
                                div class="relative group" {
                                    button type="button" class="flex items-center gap-1 p-2 text-sm text-gray-600 hover:text-gray-900" {
                                        (menu) " " (icons::chevron_down("h-4 w-4"))
                                    }
                                }
                            }
                            a href=(routes::DOCS) class=(NAV_LINK) { "Docs" }
                            a href=(routes::BLOG) class=(NAV_LINK) { "Blog" }
                        }
                    }
                    div class="flex items-center gap-4" {
                        a href=(routes::SIGN_IN) class="hidden md:inline-block text-sm text-gray-600 hover:text-gray-900" {
                            "Sign In"
                        }
                        (link_button(routes::DEMO, "Book a demo", Variant::Outline, Size::Default, "hidden md:inline-flex"))
                        (link_button(
                            routes::GET_STARTED,
                            "Get Started",
                            Variant::Primary,
                            Size::Default,
                            "hidden md:inline-flex bg-purple-600 hover:bg-purple-700",
                        ))
                        button type="button" class="md:hidden p-2" aria-label="Open menu" {
                            (icons::menu("h-6 w-6"))
                        }
                    }
                }
            }
        }
    }
}

fn footer_column(column: &FooterColumn) -> Markup {
    html! {
        div class="footer-column" {
            h3 class="text-white font-semibold mb-4" { (column.heading) }
            ul class="space-y-2" {
                @for link in &column.links {
                    li {
                        a href=(link.href) class="text-gray-400 hover:text-white" { (link.label) }
                    }
                }
            }
        }
    }
}

fn site_footer(year: i32) -> Markup {
    html! {
        footer class="py-12 px-4 bg-gray-900" {
            div class="container mx-auto" {
                div class="grid grid-cols-2 md:grid-cols-4 gap-8" {
                    @for column in &FOOTER_COLUMNS {
                        (footer_column(column))
                    }
                }
                div class="mt-12 pt-8 border-t border-gray-800 text-center text-gray-400" {
                    p class="copyright" { (copyright_line(year)) }
                }
            }
        }
    }
}
