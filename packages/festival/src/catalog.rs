use std::sync::OnceLock;

use thiserror::Error;

use crate::types::{EventIcon, EventRecord, FeatureHighlight};

const EVENTS_JSON: &str = include_str!("../data/events.json");

/// Form link used by events whose registration is not open yet.
pub const PLACEHOLDER_LINK: &str = "#";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("event list is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("event list is empty")]
    Empty,
    #[error("event #{index} has an empty title")]
    MissingTitle { index: usize },
    #[error("event `{title}` has a non-absolute image url: {url}")]
    ImageUrl { title: String, url: String },
    #[error("event `{title}` has an invalid form link: {url}")]
    FormLink { title: String, url: String },
}

/// The festival's events, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    events: Vec<EventRecord>,
}

impl Catalog {
    /// Parse the compiled-in event list.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(EVENTS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let events: Vec<EventRecord> = serde_json::from_str(json)?;
        Self::new(events)
    }

    pub fn new(events: Vec<EventRecord>) -> Result<Self, CatalogError> {
        if events.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, event) in events.iter().enumerate() {
            validate(index, event)?;
        }
        tracing::debug!("catalog: loaded {} events", events.len());
        Ok(Self { events })
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EventRecord> {
        self.events.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.events.iter()
    }
}

fn validate(index: usize, event: &EventRecord) -> Result<(), CatalogError> {
    if event.title.trim().is_empty() {
        return Err(CatalogError::MissingTitle { index });
    }
    if !is_absolute_url(&event.image) {
        return Err(CatalogError::ImageUrl {
            title: event.title.clone(),
            url: event.image.clone(),
        });
    }
    if event.form_link != PLACEHOLDER_LINK && !is_absolute_url(&event.form_link) {
        return Err(CatalogError::FormLink {
            title: event.title.clone(),
            url: event.form_link.clone(),
        });
    }
    Ok(())
}

fn is_absolute_url(url: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme))
}

/// The process-wide catalog, parsed on first access.
pub fn catalog() -> Result<&'static Catalog, &'static CatalogError> {
    static CATALOG: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
    CATALOG.get_or_init(Catalog::load).as_ref()
}

pub fn about_features() -> [FeatureHighlight; 3] {
    [
        FeatureHighlight {
            icon: EventIcon::Rocket,
            title: "Innovation Hub",
            desc: "Showcase your groundbreaking ideas",
        },
        FeatureHighlight {
            icon: EventIcon::Brain,
            title: "Learning Experience",
            desc: "Learn from industry experts",
        },
        FeatureHighlight {
            icon: EventIcon::Circuit,
            title: "Hands-on Workshops",
            desc: "Get practical experience",
        },
    ]
}
