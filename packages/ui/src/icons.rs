use dioxus::prelude::*;
use festival::EventIcon;

/// Stroke outlines on a 24x24 grid.
fn outline(icon: EventIcon) -> &'static [&'static str] {
    match icon {
        EventIcon::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
        EventIcon::Robot => &[
            "M12 8V4H8",
            "M4 8h16v12H4z",
            "M2 14h2",
            "M20 14h2",
            "M15 13v2",
            "M9 13v2",
        ],
        EventIcon::Brain => &[
            "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
            "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
            "M12 5v13",
        ],
        EventIcon::Wifi => &[
            "M12 20h.01",
            "M2 8.82a15 15 0 0 1 20 0",
            "M5 12.859a10 10 0 0 1 14 0",
            "M8.5 16.429a5 5 0 0 1 7 0",
        ],
        EventIcon::Cloud => &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"],
        EventIcon::Cpu => &[
            "M4 4h16v16H4z",
            "M9 9h6v6H9z",
            "M15 2v2",
            "M15 20v2",
            "M2 15h2",
            "M2 9h2",
            "M20 15h2",
            "M20 9h2",
            "M9 2v2",
            "M9 20v2",
        ],
        EventIcon::Smartphone => &[
            "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M12 18h.01",
        ],
        EventIcon::Laptop => &[
            "M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16",
        ],
        EventIcon::Database => &[
            "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
            "M3 5v14a9 3 0 0 0 18 0V5",
            "M3 12a9 3 0 0 0 18 0",
        ],
        EventIcon::Rocket => &[
            "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
            "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
            "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
            "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
        ],
        EventIcon::Circuit => &[
            "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
            "M12 5v13",
            "M12 13h4",
            "M12 18h6a2 2 0 0 1 2 2v1",
            "M12 8h8",
            "M16 8V5a2 2 0 0 1 2-2",
        ],
        EventIcon::Monitor => &["M2 3h20v14H2z", "M8 21h8", "M12 17v4"],
        EventIcon::Calendar => &["M8 2v4", "M16 2v4", "M3 4h18v18H3z", "M3 10h18"],
        EventIcon::Clock => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 6v6l4 2"],
        EventIcon::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
        ],
        EventIcon::ScrollText => &[
            "M15 12h-5",
            "M15 8h-5",
            "M19 17V5a2 2 0 0 0-2-2H4",
            "M8 21h12a2 2 0 0 0 2-2v-1a1 1 0 0 0-1-1H11a1 1 0 0 0-1 1v1a2 2 0 1 1-4 0V5a2 2 0 1 0-4 0v2a1 1 0 0 0 1 1h3",
        ],
    }
}

#[component]
pub fn Icon(
    icon: EventIcon,
    #[props(default = 24)] size: u32,
    #[props(default)] class: String,
) -> Element {
    rsx! {
        svg {
            class: "icon icon_{icon.as_str()} {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in outline(icon).iter() {
                path { d: "{d}" }
            }
        }
    }
}
