use dioxus::prelude::*;
use festival::motion::delay_style;
use festival::{EventIcon, EventRecord, Selection};

const EVENTS_CSS: Asset = asset!("/assets/styling/events.css");

/// Grid of event cards plus the detail overlay for the selected one.
#[component]
pub fn EventCatalog() -> Element {
    let selection = use_signal(Selection::default);
    rsx! { EventCatalogView { selection } }
}

/// Catalog markup driven by an externally owned selection.
#[component]
pub fn EventCatalogView(selection: Signal<Selection>) -> Element {
    let catalog = match festival::catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::warn!("events: catalog unavailable: {err}");
            return rsx! {
                document::Link { rel: "stylesheet", href: EVENTS_CSS }
                section { id: "events", class: "events_section",
                    p { class: "error", "Error: {err}" }
                }
            };
        }
    };

    let open = selection().record(catalog).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: EVENTS_CSS }

        section { id: "events", class: "events_section",
            div { class: "container",
                h2 { class: "section_title", "Events" }
                div { class: "event_grid",
                    for (index, event) in catalog.iter().enumerate() {
                        EventCard {
                            key: "{index}",
                            index,
                            event: event.clone(),
                            on_select: move |index: usize| open_event(selection, index),
                        }
                    }
                }
            }
            if let Some(event) = open {
                EventDetailModal {
                    event,
                    on_close: move |_| close_event(selection),
                }
            }
        }
    }
}

fn open_event(mut selection: Signal<Selection>, index: usize) {
    tracing::debug!("events: open #{index}");
    selection.with_mut(|s| s.select(index));
}

fn close_event(mut selection: Signal<Selection>) {
    tracing::debug!("events: close overlay");
    selection.with_mut(|s| s.close());
}

#[component]
pub fn EventCard(index: usize, event: EventRecord, on_select: EventHandler<usize>) -> Element {
    let element_id = format!("event-card-{index}");
    let in_view = crate::use_in_view(element_id.clone());

    rsx! {
        div {
            id: "{element_id}",
            class: if in_view() { "event_card in_view" } else { "event_card" },
            style: delay_style(index, 0.1),
            "data-index": "{index}",
            onclick: move |_| on_select.call(index),
            div { class: "event_thumb",
                img { src: "{event.image}", alt: "{event.title}" }
                div { class: "event_reveal",
                    h3 { "{event.title}" }
                    p { "{event.description}" }
                }
            }
        }
    }
}

#[component]
pub fn EventDetailModal(event: EventRecord, on_close: EventHandler<()>) -> Element {
    let date = event.display_date();
    let timings = event.display_timings();

    rsx! {
        div { class: "modal_backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal_panel",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "modal_close",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }

                div { class: "modal_image",
                    img { src: "{event.image}", alt: "{event.title}" }
                }

                div { class: "modal_heading",
                    div { class: "icon_badge spin_on_hover",
                        crate::Icon { icon: event.icon }
                    }
                    h2 { "{event.title}" }
                }
                p { class: "modal_description", "{event.description}" }

                if event.has_schedule() {
                    div { class: "modal_meta",
                        if let Some(date) = date {
                            MetaRow { icon: EventIcon::Calendar, delay: 0.3, text: date }
                        }
                        if let Some(timings) = timings {
                            MetaRow { icon: EventIcon::Clock, delay: 0.4, text: timings }
                        }
                        if let Some(venue) = event.venue.clone() {
                            MetaRow { icon: EventIcon::MapPin, delay: 0.5, text: venue }
                        }
                    }
                }

                if !event.rules.is_empty() {
                    div { class: "modal_rules rise", style: "animation-delay: 0.6s;",
                        h3 {
                            crate::Icon { icon: EventIcon::ScrollText, size: 20 }
                            "Rules & Guidelines"
                        }
                        ul {
                            for (i, rule) in event.rules.iter().enumerate() {
                                li { key: "{i}", "{rule}" }
                            }
                        }
                    }
                }

                a {
                    class: "btn primary block sweep",
                    href: "{event.form_link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    span { class: "btn_label", "Register Now" }
                }
            }
        }
    }
}

#[component]
fn MetaRow(icon: EventIcon, delay: f64, text: String) -> Element {
    rsx! {
        div { class: "meta_row slide_in", style: "animation-delay: {delay}s;",
            crate::Icon { icon, size: 20 }
            span { "{text}" }
        }
    }
}
