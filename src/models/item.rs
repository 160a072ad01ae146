//! Content item model.
//!
//! An item is the smallest schedulable unit of content, such as one
//! video or one chapter. Items are never reordered or split: the
//! allocator consumes them strictly in input order.

use serde::{Deserialize, Serialize};

/// One schedulable unit of content.
///
/// The `id` is opaque to the engine and only carried through to the
/// output; `title` is display-only and never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Caller-defined identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Content duration in minutes. Non-negative; may be fractional.
    pub duration_minutes: f64,
}

impl Item {
    /// Creates a new item with the given ID and duration in minutes.
    pub fn new(id: impl Into<String>, duration_minutes: f64) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            duration_minutes,
        }
    }

    /// Creates an item from a duration in whole seconds.
    ///
    /// Catalog sources commonly report durations as integer seconds;
    /// the conversion to minutes happens here, before the allocator
    /// ever sees the item.
    pub fn from_seconds(id: impl Into<String>, duration_seconds: u64) -> Self {
        Self::new(id, duration_seconds as f64 / 60.0)
    }

    /// Sets the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
