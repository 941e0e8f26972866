//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::survey::{Strategy, Vocabulary};

/// Main configuration for vscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VscanConfig {
    /// Survey, noise and location phrase sets.
    pub keywords: KeywordConfig,

    /// Column labels recognized in table headers.
    pub table: TableHeaderSpec,

    /// Strategy routing by document identifier.
    pub selection: SelectionConfig,

    /// Deduplication settings.
    pub dedup: DedupConfig,
}

/// Phrase sets used to classify candidate names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Survey-type phrases that mark a line worth tracking.
    pub major: Vec<String>,

    /// Noise phrases that disqualify a candidate name.
    pub ignore: Vec<String>,

    /// Place names stripped from keyword-line labels.
    pub locations: Vec<String>,

    /// Match location names case-sensitively.
    pub locations_case_sensitive: bool,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            major: to_strings(&[
                "Annual Survey",
                "Intermediate Survey",
                "Special Survey",
                "Renewal Survey",
                "Class Renewal",
                "Docking Survey",
                "Bottom Survey",
                "Boiler Survey",
                "Tailshaft Survey",
                "Propeller Shaft",
                "Continuous Survey",
                "Machinery Survey",
                "Load Line",
                "Safety Equipment",
                "Safety Construction",
                "Safety Radio",
                "IOPP",
                "IAPP",
                "ISPP",
                "Ballast Water",
            ]),
            ignore: to_strings(&[
                "Status",
                "Report",
                "ABS",
                "Survey Manager",
                "Page",
                "Printed",
                "Vessel Name",
                "IMO No",
                "Class No",
                "Remarks",
            ]),
            locations: to_strings(&[
                "Kaohsiung",
                "Keelung",
                "Taichung",
                "Hualien",
                "Taipei",
                "Singapore",
                "Hong Kong",
                "Shanghai",
                "Busan",
            ]),
            locations_case_sensitive: true,
        }
    }
}

/// Recognized header labels for the name and due-date columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableHeaderSpec {
    /// Labels of the survey name column.
    pub name_labels: Vec<String>,

    /// Labels of the due date column.
    pub due_labels: Vec<String>,
}

impl Default for TableHeaderSpec {
    fn default() -> Self {
        Self {
            name_labels: to_strings(&["Survey Description", "檢驗名稱"]),
            due_labels: to_strings(&["Next Survey Date", "到期日"]),
        }
    }
}

/// Filename routing for strategy selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Filename prefixes routed to the keyword-line strategy.
    pub keyword_line_prefixes: Vec<String>,

    /// Filename substrings routed to the keyword-line strategy.
    pub keyword_line_markers: Vec<String>,

    /// Filename substrings routed to the pair-wise strategy.
    pub pair_wise_markers: Vec<String>,

    /// Strategy for documents matching no rule.
    pub default_strategy: Strategy,

    /// Strategy applied to every document, ignoring the rules above.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<Strategy>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            keyword_line_prefixes: to_strings(&["wh"]),
            keyword_line_markers: to_strings(&["ccs", "cr"]),
            pair_wise_markers: to_strings(&["abs"]),
            default_strategy: Strategy::Fallback,
            force: None,
        }
    }
}

/// Deduplication settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// Treat items differing only in range annotation as distinct.
    pub include_range: bool,
}

impl VscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::File {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Invalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Invalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|source| ConfigError::File {
            path: path.display().to_string(),
            source,
        })
    }

    /// Validate the phrase sets and build the shared vocabulary.
    pub fn compile(&self) -> Result<Vocabulary, ConfigError> {
        Vocabulary::new(&self.keywords, &self.table)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "selection": { "default_strategy": "table_mode" } }"#;
        let config: VscanConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.selection.default_strategy, Strategy::TableMode);
        assert_eq!(config.selection.pair_wise_markers, vec!["abs".to_string()]);
        assert_eq!(config.table, TableHeaderSpec::default());
        assert!(!config.dedup.include_range);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = VscanConfig::default();
        config.keywords.locations.push("Kobe".to_string());
        config.selection.force = Some(Strategy::KeywordLine);
        config.save(&path).unwrap();

        let loaded = VscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = VscanConfig::from_file(Path::new("/nonexistent/vscan.json")).unwrap_err();
        assert!(matches!(err, ConfigError::File { .. }));
    }

    #[test]
    fn test_compile_rejects_empty_labels() {
        let mut config = VscanConfig::default();
        config.table.due_labels.clear();
        assert!(matches!(config.compile(), Err(ConfigError::EmptySet("table.due_labels"))));
    }
}
