use dioxus::prelude::*;
use festival::page::is_scrolled;
use festival::{EventIcon, NavSection};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Fixed header; turns opaque once the page scrolls past the threshold.
#[component]
pub fn Navbar() -> Element {
    let scroll_y = crate::use_scroll_y();
    let scrolled = is_scrolled(scroll_y());
    rsx! { NavbarView { scrolled } }
}

#[component]
pub fn NavbarView(scrolled: bool) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav { class: if scrolled { "site_nav scrolled" } else { "site_nav" },
            div { class: "site_nav_inner",
                AnimatedLogo {}
                div { class: "nav_links",
                    for section in NavSection::ALL {
                        a {
                            key: "{section.id()}",
                            class: "nav_link",
                            href: section.anchor(),
                            "{section.label()}"
                            span { class: "nav_underline" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AnimatedLogo() -> Element {
    rsx! {
        div { class: "logo",
            div { class: "logo_mark",
                crate::Icon { icon: EventIcon::Circuit, size: 32 }
            }
            h1 { class: "logo_name", "TechFest 2025" }
        }
    }
}
