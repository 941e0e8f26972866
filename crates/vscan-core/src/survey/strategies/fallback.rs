//! Last-resort parser: every date pairs with the line before it.

use tracing::trace;

use crate::models::due_item::DueItem;
use crate::models::lines::LineSequence;
use crate::survey::collect::DueItemCollector;
use crate::survey::rules::{clean_name, find_dates, parse_date};
use crate::survey::Vocabulary;

use super::DueDateParser;

/// Name used when a date appears on the first line of a document.
pub const UNKNOWN_ITEM: &str = "Unknown Item";

/// Generic regex parser for layouts no other strategy recognizes.
pub struct FallbackRegexParser<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> FallbackRegexParser<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Scan one line, naming each date after `previous`.
    pub fn scan_line(
        &self,
        previous: Option<&str>,
        line: &str,
        collector: &mut DueItemCollector,
    ) {
        let dates = find_dates(line);
        if dates.is_empty() {
            return;
        }

        let name = clean_name(previous.map(str::trim).unwrap_or(UNKNOWN_ITEM));
        for found in dates {
            let Some(due_date) = parse_date(found.as_str()) else {
                trace!("Unparseable date '{}' dropped", found.as_str());
                continue;
            };
            if !self.vocabulary.is_meaningful(&name) {
                trace!("Candidate '{}' rejected by name filter", name);
                continue;
            }
            collector.push(DueItem::new(name.clone(), due_date));
        }
    }
}

impl DueDateParser for FallbackRegexParser<'_> {
    fn parse_into(&self, lines: &LineSequence, collector: &mut DueItemCollector) {
        let mut previous: Option<&str> = None;
        for line in lines.iter() {
            self.scan_line(previous, line, collector);
            previous = Some(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::VscanConfig;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn vocabulary() -> Vocabulary {
        VscanConfig::default().compile().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_pairs_with_previous_line() {
        let vocab = vocabulary();
        let lines: LineSequence = ["Boiler Survey", "2025-12-31"].into_iter().collect();

        let items = FallbackRegexParser::new(&vocab).parse(&lines);
        assert_eq!(items, vec![DueItem::new("Boiler Survey", date(2025, 12, 31))]);
    }

    #[test]
    fn test_previous_line_is_cleaned() {
        let vocab = vocabulary();
        let lines: LineSequence = ["Tailshaft Survey -- Due", "Next: 2026.03.15"].into_iter().collect();

        let items = FallbackRegexParser::new(&vocab).parse(&lines);
        assert_eq!(items, vec![DueItem::new("Tailshaft Survey", date(2026, 3, 15))]);
    }

    #[test]
    fn test_first_line_uses_placeholder() {
        let vocab = vocabulary();
        let lines: LineSequence = ["2026-01-01"].into_iter().collect();

        let items = FallbackRegexParser::new(&vocab).parse(&lines);
        assert_eq!(items, vec![DueItem::new(UNKNOWN_ITEM, date(2026, 1, 1))]);
    }

    #[test]
    fn test_noise_and_bad_dates_dropped() {
        let vocab = vocabulary();
        let lines: LineSequence = [
            "Status Report",
            "2026-01-01",
            "Annual Survey",
            "31-Feb-2026",
            "15/07/2026",
        ]
        .into_iter()
        .collect();

        let items = FallbackRegexParser::new(&vocab).parse(&lines);
        // "31-Feb-2026" itself becomes the name for the next line and cleans to empty.
        assert!(items.is_empty(), "{items:?}");
    }

    #[test]
    fn test_every_date_on_a_line_is_tried() {
        let vocab = vocabulary();
        let lines: LineSequence = ["Load Line Survey", "01-Jan-2026 2026/06/30"].into_iter().collect();

        let items = FallbackRegexParser::new(&vocab).parse(&lines);
        assert_eq!(
            items,
            vec![
                DueItem::new("Load Line Survey", date(2026, 1, 1)),
                DueItem::new("Load Line Survey", date(2026, 6, 30)),
            ]
        );
    }

    #[test]
    fn test_empty_sequence() {
        let vocab = vocabulary();
        assert!(FallbackRegexParser::new(&vocab).parse(&LineSequence::default()).is_empty());
    }
}
