//! Survey due-date extraction.
//!
//! One [`Strategy`] runs per document. The [`StrategyPolicy`] picks it, the
//! strategy streams the document's lines through the shared date and name
//! rules, and a [`DueItemCollector`] keeps the first occurrence of each item.

mod collect;
mod extractor;
pub mod rules;
mod select;
pub mod strategies;
mod vocabulary;

pub use collect::DueItemCollector;
pub use extractor::SurveyExtractor;
pub use select::{FilenamePolicy, FixedPolicy, StrategyPolicy};
pub use vocabulary::Vocabulary;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parsing strategy applied to a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Header-delimited tables, with the regex fallback outside tables.
    TableMode,
    /// Survey name line paired with a later date-only line (ABS layout).
    PairWise,
    /// Name and dates on the same line (CCS/CR layout).
    KeywordLine,
    /// Any date paired with the preceding line.
    Fallback,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 4] = [
        Strategy::TableMode,
        Strategy::PairWise,
        Strategy::KeywordLine,
        Strategy::Fallback,
    ];

    /// Stable snake_case name, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::TableMode => "table_mode",
            Strategy::PairWise => "pair_wise",
            Strategy::KeywordLine => "keyword_line",
            Strategy::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown strategy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy '{0}' (expected table_mode, pair_wise, keyword_line or fallback)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == normalized)
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}
