//! Date normalization for survey reports.

use chrono::NaiveDate;
use regex::Match;

use super::patterns::DATE_ANY;

/// Formats tried in priority order; the first successful parse wins.
pub const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", // 2026-05-01
    "%d-%b-%Y", // 01-May-2026
    "%d/%m/%Y", // 01/05/2026
    "%Y/%m/%d", // 2026/05/01
    "%d%b%Y",   // 01May2026
    "%Y.%m.%d", // 2026.05.01
];

/// Parse a date-like substring into a calendar date.
///
/// Returns `None` when no format matches; callers discard the candidate.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// All date-like substrings of `line`, left to right.
///
/// Matches are shape-only: `31-Feb-2026` is found here and rejected later
/// by [`parse_date`].
pub fn find_dates(line: &str) -> Vec<Match<'_>> {
    DATE_ANY.find_iter(line).collect()
}
