// Inline SVG icons (lucide outlines).
use maud::{html, Markup};

fn outline_icon(class: &str, body: Markup) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=(class)
            aria-hidden="true"
        {
            (body)
        }
    }
}

pub fn chevron_down(class: &str) -> Markup {
    outline_icon(class, html! { path d="m6 9 6 6 6-6" {} })
}

pub fn menu(class: &str) -> Markup {
    outline_icon(
        class,
        html! {
            line x1="4" x2="20" y1="12" y2="12" {}
            line x1="4" x2="20" y1="6" y2="6" {}
            line x1="4" x2="20" y1="18" y2="18" {}
        },
    )
}

pub fn play(class: &str) -> Markup {
    outline_icon(class, html! { polygon points="6 3 20 12 6 21 6 3" {} })
}
