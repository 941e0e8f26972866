//! Strategy selection policies.

use std::path::Path;

use crate::models::config::SelectionConfig;

use super::Strategy;

/// Chooses the parsing strategy for a document.
pub trait StrategyPolicy: Send + Sync {
    /// Strategy for the document named `document_id`.
    fn select(&self, document_id: &str) -> Strategy;
}

/// Always selects the same strategy.
#[derive(Debug, Clone, Copy)]
pub struct FixedPolicy(pub Strategy);

impl StrategyPolicy for FixedPolicy {
    fn select(&self, _document_id: &str) -> Strategy {
        self.0
    }
}

/// Routes documents by their file name, case-insensitively.
///
/// Keyword-line rules are checked first, then pair-wise markers; anything
/// else gets the configured default.
#[derive(Debug, Clone)]
pub struct FilenamePolicy {
    keyword_line_prefixes: Vec<String>,
    keyword_line_markers: Vec<String>,
    pair_wise_markers: Vec<String>,
    default_strategy: Strategy,
    force: Option<Strategy>,
}

impl FilenamePolicy {
    pub fn from_config(config: &SelectionConfig) -> Self {
        Self {
            keyword_line_prefixes: lowercase(&config.keyword_line_prefixes),
            keyword_line_markers: lowercase(&config.keyword_line_markers),
            pair_wise_markers: lowercase(&config.pair_wise_markers),
            default_strategy: config.default_strategy,
            force: config.force,
        }
    }
}

impl Default for FilenamePolicy {
    fn default() -> Self {
        Self::from_config(&SelectionConfig::default())
    }
}

impl StrategyPolicy for FilenamePolicy {
    fn select(&self, document_id: &str) -> Strategy {
        if let Some(strategy) = self.force {
            return strategy;
        }

        let file_name = Path::new(document_id)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(document_id)
            .to_lowercase();

        let keyword_line = self
            .keyword_line_prefixes
            .iter()
            .any(|p| file_name.starts_with(p.as_str()))
            || self
                .keyword_line_markers
                .iter()
                .any(|m| file_name.contains(m.as_str()));
        if keyword_line {
            return Strategy::KeywordLine;
        }

        if self
            .pair_wise_markers
            .iter()
            .any(|m| file_name.contains(m.as_str()))
        {
            return Strategy::PairWise;
        }

        self.default_strategy
    }
}

fn lowercase(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routing() {
        let policy = FilenamePolicy::default();

        assert_eq!(policy.select("MV_OCEAN_ABS_status.pdf"), Strategy::PairWise);
        assert_eq!(policy.select("WH123_survey.pdf"), Strategy::KeywordLine);
        assert_eq!(policy.select("vessel_CCS_2026.pdf"), Strategy::KeywordLine);
        assert_eq!(policy.select("Sea_Star_CR.pdf"), Strategy::KeywordLine);
        assert_eq!(policy.select("dnv_status.pdf"), Strategy::Fallback);
    }

    #[test]
    fn test_keyword_line_checked_before_pair_wise() {
        let policy = FilenamePolicy::default();
        assert_eq!(policy.select("ccs_and_abs.pdf"), Strategy::KeywordLine);
    }

    #[test]
    fn test_only_file_name_is_considered() {
        let policy = FilenamePolicy::default();
        assert_eq!(policy.select("/data/abs/dnv_status.pdf"), Strategy::Fallback);
        assert_eq!(policy.select("/data/wh/dnv_status.pdf"), Strategy::Fallback);
    }

    #[test]
    fn test_default_and_force_overrides() {
        let config = SelectionConfig {
            default_strategy: Strategy::TableMode,
            ..SelectionConfig::default()
        };
        let policy = FilenamePolicy::from_config(&config);
        assert_eq!(policy.select("dnv_status.pdf"), Strategy::TableMode);
        assert_eq!(policy.select("abs.pdf"), Strategy::PairWise);

        let config = SelectionConfig {
            force: Some(Strategy::Fallback),
            ..SelectionConfig::default()
        };
        let policy = FilenamePolicy::from_config(&config);
        assert_eq!(policy.select("abs.pdf"), Strategy::Fallback);
    }

    #[test]
    fn test_fixed_policy() {
        let policy = FixedPolicy(Strategy::TableMode);
        assert_eq!(policy.select("anything_abs.pdf"), Strategy::TableMode);
    }
}
