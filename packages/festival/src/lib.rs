//! Platform-independent core of the festival site: the event catalog and the
//! state and motion math behind the page's components.

pub mod catalog;
pub mod config;
pub mod motion;
pub mod page;
pub mod particles;
pub mod types;


pub use catalog::{about_features, catalog, Catalog, CatalogError};
pub use config::{ConfigError, SiteConfig};
pub use page::Selection;
pub use types::{EventIcon, EventRecord, FeatureHighlight, NavSection, TimeWindow};
