//! Line parsers, one per report layout.

mod fallback;
mod keyword_line;
mod pair_wise;
mod table;

pub use fallback::{FallbackRegexParser, UNKNOWN_ITEM};
pub use keyword_line::KeywordLineParser;
pub use pair_wise::PairWiseParser;
pub use table::TableModeParser;

use crate::models::due_item::DueItem;
use crate::models::lines::LineSequence;

use super::collect::DueItemCollector;

/// Trait for due-date parsers.
///
/// A parser consumes the sequence once, front to back, and never fails:
/// candidates that do not validate are dropped.
pub trait DueDateParser {
    /// Feed every accepted item into `collector`.
    fn parse_into(&self, lines: &LineSequence, collector: &mut DueItemCollector);

    /// Parse into a fresh `(name, due_date)`-keyed collector.
    fn parse(&self, lines: &LineSequence) -> Vec<DueItem> {
        let mut collector = DueItemCollector::new();
        self.parse_into(lines, &mut collector);
        collector.into_items()
    }
}

/// Survey-name check shared by the pair-wise and keyword-line parsers.
fn is_survey_name(vocabulary: &super::Vocabulary, name: &str) -> bool {
    name.chars().count() > 2 && vocabulary.has_major(name)
}
