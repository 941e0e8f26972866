//! Header-delimited table parser.
//!
//! A header line naming both a survey-name column and a due-date column
//! opens a table; rows are split on runs of two or more spaces (or tabs) and
//! read at the header's column indices. A blank line, a section title such as
//! `"Statutory Surveys"`, or a `"Label:"` line closes the table.

use tracing::{debug, trace};

use crate::models::due_item::DueItem;
use crate::models::lines::LineSequence;
use crate::survey::collect::DueItemCollector;
use crate::survey::rules::patterns::{COLUMN_SPLIT, SECTION_LABEL, SECTION_TITLE};
use crate::survey::rules::{find_dates, parse_date};
use crate::survey::Vocabulary;

use super::{DueDateParser, FallbackRegexParser};

/// Table parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableState {
    Seeking,
    InTable { name_col: usize, due_col: usize },
}

/// State-machine parser for tabular survey status reports.
pub struct TableModeParser<'a> {
    vocabulary: &'a Vocabulary,
    fallback: Option<FallbackRegexParser<'a>>,
}

impl<'a> TableModeParser<'a> {
    /// Table parser with the regex fallback applied outside tables.
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            fallback: Some(FallbackRegexParser::new(vocabulary)),
        }
    }

    /// Only emit rows from recognized tables.
    pub fn without_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    fn is_header(&self, line: &str) -> bool {
        self.vocabulary.is_name_label(line) && self.vocabulary.is_due_label(line)
    }

    fn resolve_columns(&self, header: &str) -> Option<(usize, usize)> {
        let mut name_col = None;
        let mut due_col = None;

        for (idx, token) in COLUMN_SPLIT.split(header).enumerate() {
            if self.vocabulary.is_name_label(token) {
                name_col = Some(idx);
            }
            if self.vocabulary.is_due_label(token) {
                due_col = Some(idx);
            }
        }

        name_col.zip(due_col)
    }

    fn is_table_end(line: &str) -> bool {
        line.is_empty() || SECTION_TITLE.is_match(line) || SECTION_LABEL.is_match(line)
    }

    fn parse_row(
        &self,
        line: &str,
        name_col: usize,
        due_col: usize,
        collector: &mut DueItemCollector,
    ) {
        let columns: Vec<&str> = COLUMN_SPLIT.split(line).collect();

        let (name, due_str) = if columns.len() > name_col.max(due_col) {
            (columns[name_col].trim(), columns[due_col].trim())
        } else {
            // Too few columns: the last date on the line is the due date and
            // everything before it is the name.
            let dates = find_dates(line);
            let Some(last) = dates.last() else {
                return;
            };
            (line[..last.start()].trim(), last.as_str())
        };

        let Some(due_date) = parse_date(due_str) else {
            trace!("Row '{}' has no parseable due date", line);
            return;
        };
        if !self.vocabulary.is_meaningful(name) {
            trace!("Row name '{}' rejected by name filter", name);
            return;
        }

        collector.push(DueItem::new(name, due_date));
    }
}

impl DueDateParser for TableModeParser<'_> {
    fn parse_into(&self, lines: &LineSequence, collector: &mut DueItemCollector) {
        let mut state = TableState::Seeking;
        let mut previous: Option<&str> = None;

        for raw in lines.iter() {
            let line = raw.trim();

            if self.is_header(line) {
                state = match self.resolve_columns(line) {
                    Some((name_col, due_col)) => {
                        debug!(
                            "Table header recognized: name column {}, due column {}",
                            name_col, due_col
                        );
                        TableState::InTable { name_col, due_col }
                    }
                    None => {
                        debug!("Table header columns could not be resolved: '{}'", line);
                        TableState::Seeking
                    }
                };
                previous = Some(raw);
                continue;
            }

            match state {
                TableState::InTable { .. } if Self::is_table_end(line) => {
                    debug!("Table closed at '{}'", line);
                    state = TableState::Seeking;
                }
                TableState::InTable { name_col, due_col } => {
                    self.parse_row(line, name_col, due_col, collector);
                }
                TableState::Seeking => {
                    if let Some(fallback) = &self.fallback {
                        fallback.scan_line(previous, raw, collector);
                    }
                }
            }

            previous = Some(raw);
        }
    }
}
