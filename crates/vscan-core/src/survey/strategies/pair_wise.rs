//! Context-pairing parser for reports that print the survey name on one
//! line and its due date (or due window) on a later one.

use tracing::trace;

use crate::models::due_item::DueItem;
use crate::models::lines::LineSequence;
use crate::survey::collect::DueItemCollector;
use crate::survey::rules::{find_dates, parse_date, strip_markers};
use crate::survey::Vocabulary;

use super::{is_survey_name, DueDateParser};

/// Pairs the most recent survey-name line with later date-only lines.
pub struct PairWiseParser<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> PairWiseParser<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    fn emit(
        &self,
        source: &str,
        raw_date: &str,
        range: Option<String>,
        collector: &mut DueItemCollector,
    ) {
        let Some(due_date) = parse_date(raw_date) else {
            trace!("Unparseable date '{}' dropped", raw_date);
            return;
        };

        let name = strip_markers(source);
        if !is_survey_name(self.vocabulary, &name) {
            trace!("Candidate '{}' is not a survey name", name);
            return;
        }

        let item = DueItem::new(name, due_date);
        collector.push(match range {
            Some(range) => item.with_range(range),
            None => item,
        });
    }
}

impl DueDateParser for PairWiseParser<'_> {
    fn parse_into(&self, lines: &LineSequence, collector: &mut DueItemCollector) {
        // Not cleared after use: one name line may pair with several date lines.
        let mut context_name: Option<&str> = None;

        for line in lines.iter() {
            let dates = find_dates(line);
            let has_major = self.vocabulary.has_major(line);

            match (has_major, dates.as_slice()) {
                (true, [first, second]) => {
                    let range = format!("{} ~ {}", first.as_str(), second.as_str());
                    self.emit(line, first.as_str(), Some(range), collector);
                    context_name = Some(line);
                }
                (true, [only]) => {
                    self.emit(line, only.as_str(), None, collector);
                    context_name = Some(line);
                }
                (true, _) => {
                    context_name = Some(line);
                }
                (false, [only]) => {
                    if let Some(context) = context_name {
                        self.emit(context, only.as_str(), None, collector);
                    }
                }
                (false, _) => {}
            }
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
    fn test_name_line_then_due_line() {
        let vocab = vocabulary();
        let doc = lines(&["Class Annual Survey", "Due Date: 01-Jan-2026"]);

        let items = PairWiseParser::new(&vocab).parse(&doc);
        assert_eq!(items, vec![DueItem::new("Class Annual Survey", date(2026, 1, 1))]);
    }

    #[test]
    fn test_two_dates_make_a_range() {
        let vocab = vocabulary();
        let doc = lines(&["Intermediate Survey - Hull   01-Mar-2026   01-Sep-2026"]);

        let items = PairWiseParser::new(&vocab).parse(&doc);
        assert_eq!(
            items,
            vec![DueItem::new("Intermediate Survey Hull", date(2026, 3, 1))
                .with_range("01-Mar-2026 ~ 01-Sep-2026")]
        );
    }

    #[test]
    fn test_name_and_date_on_same_line() {
        let vocab = vocabulary();
        let doc = lines(&["Boiler Survey Due: 15-Jun-2026"]);

        let items = PairWiseParser::new(&vocab).parse(&doc);
        assert_eq!(items, vec![DueItem::new("Boiler Survey", date(2026, 6, 15))]);
    }

    #[test]
    fn test_context_reused_for_later_dates() {
        let vocab = vocabulary();
        let doc = lines(&[
            "Continuous Survey Machinery",
            "Item 1 postponed to 10-Feb-2026",
            "Range: 2026-02-10 2026-05-10",
            "Last visit 12-Dec-2026",
        ]);

        let items = PairWiseParser::new(&vocab).parse(&doc);
        // The two-date line carries no survey keyword and is skipped.
        assert_eq!(
            items,
            vec![
                DueItem::new("Continuous Survey Machinery", date(2026, 2, 10)),
                DueItem::new("Continuous Survey Machinery", date(2026, 12, 12)),
            ]
        );
    }

    #[test]
    fn test_dates_before_any_context_ignored() {
        let vocab = vocabulary();
        let doc = lines(&["Report date 01-Jan-2026", "ABS Survey Manager"]);

        assert!(PairWiseParser::new(&vocab).parse(&doc).is_empty());
    }

    #[test]
    fn test_unparseable_date_still_sets_context() {
        let vocab = vocabulary();
        let doc = lines(&["Tailshaft Survey 31-Feb-2026", "Due Date: 01-Apr-2026"]);

        let items = PairWiseParser::new(&vocab).parse(&doc);
        assert_eq!(items, vec![DueItem::new("Tailshaft Survey", date(2026, 4, 1))]);
    }

    #[test]
    fn test_duplicate_pairs_collapse() {
        let vocab = vocabulary();
        let doc = lines(&[
            "Annual Survey",
            "Due Date: 01-Jan-2026",
            "Annual Survey",
            "Due Date: 01-Jan-2026",
        ]);

        assert_eq!(PairWiseParser::new(&vocab).parse(&doc).len(), 1);
    }

    #[test]
    fn test_empty_sequence() {
        let vocab = vocabulary();
        assert!(PairWiseParser::new(&vocab).parse(&LineSequence::default()).is_empty());
    }
}
