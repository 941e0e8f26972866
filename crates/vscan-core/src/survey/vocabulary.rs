//! Compiled, read-only phrase sets shared by the strategies.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};

use crate::error::ConfigError;
use crate::models::config::{KeywordConfig, TableHeaderSpec};

use super::rules::names;

/// Immutable vocabulary built once from configuration.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    major_lower: Vec<String>,
    ignore_lower: Vec<String>,
    locations: Option<Regex>,
    name_labels: Vec<String>,
    due_labels: Vec<String>,
}

impl Vocabulary {
    /// Build the vocabulary, rejecting empty required sets.
    pub fn new(keywords: &KeywordConfig, table: &TableHeaderSpec) -> Result<Self, ConfigError> {
        let major_lower = lowercase_non_empty(&keywords.major);
        if major_lower.is_empty() {
            return Err(ConfigError::EmptySet("keywords.major"));
        }

        let name_labels = non_empty(&table.name_labels);
        if name_labels.is_empty() {
            return Err(ConfigError::EmptySet("table.name_labels"));
        }

        let due_labels = non_empty(&table.due_labels);
        if due_labels.is_empty() {
            return Err(ConfigError::EmptySet("table.due_labels"));
        }

        Ok(Self {
            major_lower,
            ignore_lower: lowercase_non_empty(&keywords.ignore),
            locations: build_location_pattern(
                &keywords.locations,
                keywords.locations_case_sensitive,
            )?,
            name_labels,
            due_labels,
        })
    }

    /// Whether `text` mentions any survey-type phrase (case-insensitive).
    pub fn has_major(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.major_lower.iter().any(|k| lower.contains(k.as_str()))
    }

    /// Whether `name` passes the noise filter.
    pub fn is_meaningful(&self, name: &str) -> bool {
        names::is_meaningful(name, &self.ignore_lower)
    }

    /// Remove configured place names, collapsing the leftover whitespace.
    pub fn strip_locations<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.locations {
            Some(pattern) if pattern.is_match(text) => {
                Cow::Owned(names::collapse_whitespace(&pattern.replace_all(text, " ")))
            }
            _ => Cow::Borrowed(text),
        }
    }

    /// Whether `token` contains a name-column label.
    pub fn is_name_label(&self, token: &str) -> bool {
        self.name_labels.iter().any(|l| token.contains(l.as_str()))
    }

    /// Whether `token` contains a due-column label.
    pub fn is_due_label(&self, token: &str) -> bool {
        self.due_labels.iter().any(|l| token.contains(l.as_str()))
    }
}

fn non_empty(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn lowercase_non_empty(items: &[String]) -> Vec<String> {
    non_empty(items).into_iter().map(|s| s.to_lowercase()).collect()
}

fn build_location_pattern(
    locations: &[String],
    case_sensitive: bool,
) -> Result<Option<Regex>, ConfigError> {
    let mut names = non_empty(locations);
    if names.is_empty() {
        return Ok(None);
    }

    // Longer names first so "Hong Kong Harbour" wins over "Hong Kong".
    names.sort_by_key(|n| std::cmp::Reverse(n.chars().count()));
    names.dedup();

    let alternation = names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
        .case_insensitive(!case_sensitive)
        .build()
        .map(Some)
        .map_err(|e| ConfigError::Pattern {
            set: "keywords.locations",
            reason: e.to_string(),
        })
}
