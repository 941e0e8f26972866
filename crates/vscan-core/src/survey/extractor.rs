//! Document-level extraction facade.

use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::VscanConfig;
use crate::models::due_item::{DocumentReport, DueItem};
use crate::models::lines::LineSequence;

use super::collect::DueItemCollector;
use super::select::{FilenamePolicy, StrategyPolicy};
use super::strategies::{
    DueDateParser, FallbackRegexParser, KeywordLineParser, PairWiseParser, TableModeParser,
};
use super::{Strategy, Vocabulary};

/// Extracts survey due items from one document at a time.
///
/// Holds only read-only state, so one extractor can serve many documents
/// concurrently.
pub struct SurveyExtractor {
    vocabulary: Vocabulary,
    policy: Box<dyn StrategyPolicy>,
    include_range: bool,
}

impl SurveyExtractor {
    /// Build an extractor with filename routing from `config.selection`.
    pub fn new(config: &VscanConfig) -> Result<Self> {
        Ok(Self {
            vocabulary: config.compile()?,
            policy: Box::new(FilenamePolicy::from_config(&config.selection)),
            include_range: config.dedup.include_range,
        })
    }

    /// Replace the strategy selection policy.
    pub fn with_policy(mut self, policy: impl StrategyPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Compiled vocabulary in use.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Strategy the policy picks for `document_id`.
    pub fn select(&self, document_id: &str) -> Strategy {
        self.policy.select(document_id)
    }

    /// Extract due items using the policy's strategy.
    pub fn extract(&self, document_id: &str, lines: &LineSequence) -> Vec<DueItem> {
        self.extract_report(document_id, lines).items
    }

    /// Extract due items and report which strategy ran.
    pub fn extract_report(&self, document_id: &str, lines: &LineSequence) -> DocumentReport {
        let strategy = self.select(document_id);
        debug!("Document '{}' routed to {}", document_id, strategy);

        let items = self.extract_with(strategy, lines);
        info!(
            "Extracted {} due items from '{}' ({} lines, {})",
            items.len(),
            document_id,
            lines.len(),
            strategy
        );

        DocumentReport {
            document_id: document_id.to_string(),
            strategy,
            line_count: lines.len(),
            items,
        }
    }

    /// Extract due items with an explicit strategy, bypassing the policy.
    pub fn extract_with(&self, strategy: Strategy, lines: &LineSequence) -> Vec<DueItem> {
        let mut collector = if self.include_range {
            DueItemCollector::including_range()
        } else {
            DueItemCollector::new()
        };

        let vocabulary = &self.vocabulary;
        let parser: Box<dyn DueDateParser + '_> = match strategy {
            Strategy::TableMode => Box::new(TableModeParser::new(vocabulary)),
            Strategy::PairWise => Box::new(PairWiseParser::new(vocabulary)),
            Strategy::KeywordLine => Box::new(KeywordLineParser::new(vocabulary)),
            Strategy::Fallback => Box::new(FallbackRegexParser::new(vocabulary)),
        };
        parser.parse_into(lines, &mut collector);

        collector.into_items()
    }
}
