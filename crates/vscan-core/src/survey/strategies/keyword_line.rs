//! Single-line parser for reports that print a survey name and its dates
//! together, optionally followed by the port where it was credited.

use tracing::trace;

use crate::models::due_item::DueItem;
use crate::models::lines::LineSequence;
use crate::survey::collect::DueItemCollector;
use crate::survey::rules::{find_dates, parse_date, strip_markers};
use crate::survey::Vocabulary;

use super::{is_survey_name, DueDateParser};

/// Emits the last date of each survey-keyword line. No state crosses lines.
pub struct KeywordLineParser<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> KeywordLineParser<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    fn scan_line(&self, line: &str, collector: &mut DueItemCollector) {
        if !self.vocabulary.has_major(line) {
            return;
        }

        let dates = find_dates(line);
        let Some(last) = dates.last() else {
            return;
        };
        let Some(due_date) = parse_date(last.as_str()) else {
            trace!("Unparseable date '{}' dropped", last.as_str());
            return;
        };

        let stripped = strip_markers(line);
        let name = self.vocabulary.strip_locations(&stripped);
        if !is_survey_name(self.vocabulary, &name) {
            trace!("Candidate '{}' is not a survey name", name);
            return;
        }

        collector.push(DueItem::new(name.into_owned(), due_date));
    }
}

impl DueDateParser for KeywordLineParser<'_> {
    fn parse_into(&self, lines: &LineSequence, collector: &mut DueItemCollector) {
        for line in lines.iter() {
            self.scan_line(line, collector);
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

    fn lines(raw: &[&str]) -> LineSequence {
        raw.iter().copied().collect()
    }

    #[test]
    fn test_last_date_wins() {
        let vocab = vocabulary();
        let doc = lines(&["Annual Survey 2025-03-01 2026-03-01"]);

        let items = KeywordLineParser::new(&vocab).parse(&doc);
        assert_eq!(items, vec![DueItem::new("Annual Survey", date(2026, 3, 1))]);
    }

    #[test]
    fn test_location_names_stripped() {
        let vocab = vocabulary();
        let doc = lines(&[
            "Special Survey Kaohsiung 2021/04/12 2026/04/11",
            "Docking Survey Hong Kong 12-Aug-2024 11-Aug-2026",
        ]);

        let items = KeywordLineParser::new(&vocab).parse(&doc);
        assert_eq!(
            items,
            vec![
                DueItem::new("Special Survey", date(2026, 4, 11)),
                DueItem::new("Docking Survey", date(2026, 8, 11)),
            ]
        );
    }

    #[test]
    fn test_no_context_between_lines() {
        let vocab = vocabulary();
        let doc = lines(&["Boiler Survey", "2026-07-01", "Load Line Annual 2026-09-30"]);

        let items = KeywordLineParser::new(&vocab).parse(&doc);
        assert_eq!(items, vec![DueItem::new("Load Line Annual", date(2026, 9, 30))]);
    }

    #[test]
    fn test_unparseable_last_date_discards_line() {
        let vocab = vocabulary();
        let doc = lines(&["Bottom Survey 2026-01-01 31-Feb-2026"]);

        assert!(KeywordLineParser::new(&vocab).parse(&doc).is_empty());
    }

    #[test]
    fn test_empty_sequence() {
        let vocab = vocabulary();
        assert!(KeywordLineParser::new(&vocab).parse(&LineSequence::default()).is_empty());
    }
}
