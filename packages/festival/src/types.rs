use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Decorative glyph shown next to an event or feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventIcon {
    Code,
    Robot,
    Brain,
    Wifi,
    Cloud,
    Cpu,
    Smartphone,
    Laptop,
    Database,
    Rocket,
    Circuit,
    Monitor,
    Calendar,
    Clock,
    MapPin,
    ScrollText,
}

impl EventIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventIcon::Code => "code",
            EventIcon::Robot => "robot",
            EventIcon::Brain => "brain",
            EventIcon::Wifi => "wifi",
            EventIcon::Cloud => "cloud",
            EventIcon::Cpu => "cpu",
            EventIcon::Smartphone => "smartphone",
            EventIcon::Laptop => "laptop",
            EventIcon::Database => "database",
            EventIcon::Rocket => "rocket",
            EventIcon::Circuit => "circuit",
            EventIcon::Monitor => "monitor",
            EventIcon::Calendar => "calendar",
            EventIcon::Clock => "clock",
            EventIcon::MapPin => "map_pin",
            EventIcon::ScrollText => "scroll_text",
        }
    }
}

/// Start and end of an event on its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    /// `10:00 AM - 6:00 PM`
    pub fn display(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%-I:%M %p"),
            self.end.format("%-I:%M %p")
        )
    }
}

/// One festival activity. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub icon: EventIcon,
    pub description: String,
    pub image: String,
    pub form_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timings: Option<TimeWindow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

impl EventRecord {
    /// `March 15, 2024`
    pub fn display_date(&self) -> Option<String> {
        self.date.map(|d| d.format("%B %-d, %Y").to_string())
    }

    pub fn display_timings(&self) -> Option<String> {
        self.timings.as_ref().map(TimeWindow::display)
    }

    pub fn has_schedule(&self) -> bool {
        self.date.is_some() || self.timings.is_some() || self.venue.is_some()
    }
}

/// Entry of the about-section feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureHighlight {
    pub icon: EventIcon,
    pub title: &'static str,
    pub desc: &'static str,
}

/// In-page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Home,
    Events,
    About,
}

impl NavSection {
    pub const ALL: [NavSection; 3] = [NavSection::Home, NavSection::Events, NavSection::About];

    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Events => "Events",
            NavSection::About => "About",
        }
    }

    /// Element id of the section.
    pub fn id(&self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::Events => "events",
            NavSection::About => "about",
        }
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.id())
    }
}
