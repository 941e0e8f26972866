//! Per-document deduplication of due items.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::trace;

use crate::models::due_item::DueItem;

type DedupKey = (String, NaiveDate, Option<String>);

/// Accumulates due items for one document, keeping first-seen order.
///
/// The key is `(name, due_date)`; the range annotation joins it only when
/// built with [`DueItemCollector::including_range`].
#[derive(Debug, Default)]
pub struct DueItemCollector {
    seen: HashSet<DedupKey>,
    items: Vec<DueItem>,
    include_range: bool,
}

impl DueItemCollector {
    /// Collector keyed on `(name, due_date)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collector keyed on `(name, due_date, range_annotation)`.
    pub fn including_range() -> Self {
        Self {
            include_range: true,
            ..Self::default()
        }
    }

    /// Append `item` unless its key was already seen. Returns whether it was kept.
    pub fn push(&mut self, item: DueItem) -> bool {
        let range = if self.include_range {
            item.range_annotation().map(str::to_string)
        } else {
            None
        };
        let key = (item.name().to_string(), item.due_date(), range);

        if !self.seen.insert(key) {
            trace!("Duplicate due item dropped: {} {}", item.name(), item.due_date());
            return false;
        }

        self.items.push(item);
        true
    }

    /// Number of distinct items collected.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn into_items(self) -> Vec<DueItem> {
        self.items
    }
}
