//! Common regex patterns for survey report lines.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Any date-like substring: YYYY-MM-DD, DD-Mon-YYYY, DD/MM/YYYY,
    // YYYY/MM/DD, YYYY.MM.DD and the compact DDMonYYYY form.
    pub static ref DATE_ANY: Regex = Regex::new(
        r"\d{4}-\d{2}-\d{2}|\d{2}-[A-Za-z]{3}-\d{4}|\d{2}/\d{2}/\d{4}|\d{4}/\d{2}/\d{2}|\d{4}\.\d{2}\.\d{2}|\d{2}[A-Za-z]{3}\d{4}"
    ).unwrap();

    // Date shapes removed from candidate names
    pub static ref NAME_DATE_SHAPES: Regex = Regex::new(
        r"\d{2}-[A-Za-z]{3}-\d{4}|\d{4}-\d{2}-\d{2}"
    ).unwrap();

    pub static ref DASH_OR_SPACE_RUN: Regex = Regex::new(r"-+|\s{2,}").unwrap();

    pub static ref TRAILING_NOT_DUE: Regex = Regex::new(r"\s*\bNot Due$").unwrap();

    pub static ref TRAILING_DUE: Regex = Regex::new(r"(?i)\s*\bdue$").unwrap();

    // A 1-2 digit run not preceded by another digit
    pub static ref TRAILING_DIGITS: Regex = Regex::new(r"(^|\D)\d{1,2}$").unwrap();

    // Markers stripped by the survey-name strategies
    pub static ref DUE_DATE_PHRASE: Regex = Regex::new(
        r"(?i)\bDue\s+Date\s*:\s*\d{2}-[A-Za-z]{3}-\d{4}"
    ).unwrap();

    pub static ref NOT_DUE: Regex = Regex::new(r"(?i)\bNot\s+Due\b").unwrap();

    pub static ref DUE_WORD: Regex = Regex::new(r"(?i)\bDue\b").unwrap();

    pub static ref MARKER_CHARS: Regex = Regex::new(r"[-/:]").unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Table layout
    pub static ref COLUMN_SPLIT: Regex = Regex::new(r"\s{2,}|\t+").unwrap();

    pub static ref SECTION_TITLE: Regex = Regex::new(r"^[A-Za-z ]+Surveys?$").unwrap();

    pub static ref SECTION_LABEL: Regex = Regex::new(r"^[A-Za-z ]+:").unwrap();
}
