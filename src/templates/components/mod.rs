use crate::content::Placeholder;
use maud::{html, Markup};

pub mod error;
pub mod icons;

pub use error::error_page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Outline,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Size {
    Default,
    Large,
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap \
    rounded-md text-sm font-medium transition-colors focus-visible:outline-none \
    focus-visible:ring-2 focus-visible:ring-gray-400";

fn button_class(variant: Variant, size: Size, extra: &str) -> String {
    let variant = match variant {
        Variant::Primary => "bg-gray-900 text-white hover:bg-gray-800",
        Variant::Outline => "border border-gray-200 bg-white hover:bg-gray-100 hover:text-gray-900",
        Variant::Secondary => "bg-gray-100 text-gray-900 hover:bg-gray-200",
    };
    let size = match size {
        Size::Default => "h-10 px-4 py-2",
        Size::Large => "h-11 px-8",
    };

    if extra.is_empty() {
        format!("{BUTTON_BASE} {variant} {size}")
    } else {
        format!("{BUTTON_BASE} {variant} {size} {extra}")
    }
}

/// Anchor styled as a button.
pub fn link_button(href: &str, label: &str, variant: Variant, size: Size, extra: &str) -> Markup {
    html! {
        a href=(href) class=(button_class(variant, size, extra)) { (label) }
    }
}

/// Decorative button with no attached action.
pub fn button(label: &str, icon: Option<Markup>, variant: Variant, size: Size, extra: &str) -> Markup {
    html! {
        button type="button" class=(button_class(variant, size, extra)) {
            @if let Some(icon) = icon {
                (icon)
            }
            (label)
        }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="feature-card bg-white p-6 rounded-lg shadow-lg" {
            h3 class="text-xl font-semibold mb-4" { (title) }
            (body)
        }
    }
}

pub fn placeholder_image(image: Placeholder, alt: &str, class: &str) -> Markup {
    html! {
        img
            src=(image.src())
            alt=(alt)
            width=(image.width)
            height=(image.height)
            class=(class);
    }
}
