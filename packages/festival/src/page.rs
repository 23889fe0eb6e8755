//! Transient UI state of the page.

use crate::catalog::Catalog;
use crate::types::EventRecord;

/// Scroll offset past which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Which event, if any, is open in the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection(Option<usize>);

impl Selection {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn at(index: usize) -> Self {
        Self(Some(index))
    }

    pub fn select(&mut self, index: usize) {
        self.0 = Some(index);
    }

    pub fn close(&mut self) {
        self.0 = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.0
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }

    pub fn record<'a>(&self, catalog: &'a Catalog) -> Option<&'a EventRecord> {
        self.0.and_then(|index| catalog.get(index))
    }
}
