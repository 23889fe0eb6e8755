use dioxus::prelude::*;
use festival::motion::{hero_style, HeroTransform, PointerOffset};
use festival::particles::{scatter, PARTICLE_COUNT};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let scroll_y = crate::use_scroll_y();
    let pointer = crate::use_pointer();
    let transform = HeroTransform::from_scroll(scroll_y());

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div { id: "home", class: "hero",
            HeroStage { transform, pointer: pointer() }
            Particles {}
        }
    }
}

/// Title block, moved by scroll and tilted toward the pointer.
#[component]
pub fn HeroStage(transform: HeroTransform, pointer: PointerOffset) -> Element {
    rsx! {
        div { class: "hero_stage", style: hero_style(&transform, &pointer),
            h1 { class: "hero_title",
                span { class: "rise", style: "animation-delay: 0.2s;", "TANT" }
                span { class: "rise accent", style: "animation-delay: 0.4s;", "RAZ" }
                span { class: "rise year", style: "animation-delay: 0.6s;", "2025" }
            }
            div { class: "hero_body",
                p { class: "hero_tagline", "Innovate • Create • Transform" }
                a { class: "btn primary sweep", href: "#events",
                    span { class: "btn_label", "Explore Events" }
                }
            }
        }
    }
}

#[component]
pub fn Particles() -> Element {
    let viewport = crate::use_viewport();
    let particles = use_memo(move || scatter(PARTICLE_COUNT, viewport(), &mut rand::thread_rng()));
    let particles = particles();

    rsx! {
        div { class: "particles",
            for (i, particle) in particles.iter().enumerate() {
                div { key: "{i}", class: "particle", style: particle.style() }
            }
        }
    }
}
