//! Error types for the vscan-core library.
//!
//! Extraction itself never fails: malformed lines are dropped, not reported.
//! These errors cover the edges around it (configuration and PDF input).

use thiserror::Error;

/// Main error type for the vscan library.
#[derive(Error, Debug)]
pub enum VscanError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to configuration loading and compilation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A keyword set produced an invalid pattern.
    #[error("invalid pattern for {set}: {reason}")]
    Pattern { set: &'static str, reason: String },

    /// A phrase or label set that must not be empty is empty.
    #[error("{0} must not be empty")]
    EmptySet(&'static str),

    /// The configuration file could not be read or written.
    #[error("config file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for this schema.
    #[error("invalid config file {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// Result type for the vscan library.
pub type Result<T> = std::result::Result<T, VscanError>;
