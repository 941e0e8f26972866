//! Extracted survey due records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::survey::Strategy;

/// One extracted survey due record.
///
/// Fields are private so an item cannot change after a strategy emits it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DueItem {
    name: String,
    due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range_annotation: Option<String>,
}

impl DueItem {
    /// Create an item without a range annotation.
    pub fn new(name: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            due_date,
            range_annotation: None,
        }
    }

    /// Attach a display-only window such as `"01-Jan-2026 ~ 30-Jun-2026"`.
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range_annotation = Some(range.into());
        self
    }

    /// Survey name as cleaned by the emitting strategy.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calendar due date.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Raw range text, when the source line carried two dates.
    pub fn range_annotation(&self) -> Option<&str> {
        self.range_annotation.as_deref()
    }

    /// Days from `today` until the item is due (negative when overdue).
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }
}

/// Extraction outcome for a single document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Document identifier (usually the file name).
    pub document_id: String,
    /// Strategy chosen for the document.
    pub strategy: Strategy,
    /// Number of lines scanned.
    pub line_count: usize,
    /// Items in first-seen order.
    pub items: Vec<DueItem>,
}

impl DocumentReport {
    /// Keep only items due between `today` and `today + days` inclusive.
    pub fn retain_within(&mut self, today: NaiveDate, days: i64) {
        self.items.retain(|item| {
            let remaining = item.days_remaining(today);
            (0..=days).contains(&remaining)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_remaining() {
        let item = DueItem::new("Annual Survey", date(2026, 5, 1));
        assert_eq!(item.days_remaining(date(2026, 4, 21)), 10);
        assert_eq!(item.days_remaining(date(2026, 5, 3)), -2);
    }

    #[test]
    fn test_retain_within_window() {
        let mut report = DocumentReport {
            document_id: "abs_report.pdf".to_string(),
            strategy: Strategy::PairWise,
            line_count: 4,
            items: vec![
                DueItem::new("Annual Survey", date(2026, 5, 1)),
                DueItem::new("Boiler Survey", date(2027, 1, 1)),
                DueItem::new("Tailshaft Survey", date(2026, 3, 1)),
            ],
        };

        report.retain_within(date(2026, 4, 1), 60);

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].name(), "Annual Survey");
    }

    #[test]
    fn test_serialize_skips_missing_range() {
        let item = DueItem::new("Annual Survey", date(2026, 5, 1));
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"Annual Survey","due_date":"2026-05-01"}"#);

        let ranged = item.with_range("01-Feb-2026 ~ 01-Aug-2026");
        let json = serde_json::to_string(&ranged).unwrap();
        assert!(json.contains(r#""range_annotation":"01-Feb-2026 ~ 01-Aug-2026""#));
    }
}
