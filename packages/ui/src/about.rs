use dioxus::prelude::*;
use festival::about_features;
use festival::motion::delay_style;

const ABOUT_CSS: Asset = asset!("/assets/styling/about.css");

/// Stagger between the about panel's children, in seconds.
const STAGGER: f64 = 0.2;

#[component]
pub fn About() -> Element {
    let in_view = crate::use_in_view("about-panel".to_string());
    let features = about_features();

    rsx! {
        document::Link { rel: "stylesheet", href: ABOUT_CSS }

        section { id: "about", class: "about_section",
            div { class: "container",
                div {
                    id: "about-panel",
                    class: if in_view() { "about_panel in_view" } else { "about_panel" },
                    div { class: "about_glow" }
                    div { class: "about_content",
                        h2 { class: "stagger", style: delay_style(0, STAGGER), "About TechFest" }
                        div { class: "about_grid",
                            div { class: "stagger", style: delay_style(1, STAGGER),
                                p {
                                    "TechFest is our college's premier technology festival, bringing together the brightest minds and latest innovations. Our mission is to inspire, educate, and showcase the future of technology."
                                }
                                p {
                                    "Join us for an unforgettable experience of workshops, competitions, and demonstrations that will push the boundaries of what's possible in technology."
                                }
                            }
                            div { class: "feature_list",
                                for (i, feature) in features.iter().enumerate() {
                                    div {
                                        key: "{i}",
                                        class: "feature stagger",
                                        style: delay_style(i + 2, STAGGER),
                                        div { class: "icon_badge spin_on_hover",
                                            crate::Icon { icon: feature.icon }
                                        }
                                        div {
                                            h3 { "{feature.title}" }
                                            p { "{feature.desc}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
