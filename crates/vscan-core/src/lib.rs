//! Core library for vessel survey due-date extraction.
//!
//! This crate provides:
//! - Line sequences built from already-extracted report text
//! - Four parsing strategies for classification society report layouts
//!   (table mode, pair-wise, keyword line, regex fallback)
//! - Date and name normalization shared by every strategy
//! - Per-document deduplication of extracted due items
//! - A thin PDF text reader (feature `pdf`)

pub mod error;
pub mod models;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod survey;

pub use error::{ConfigError, Result, VscanError};
pub use models::config::VscanConfig;
pub use models::due_item::{DocumentReport, DueItem};
pub use models::lines::LineSequence;
#[cfg(feature = "pdf")]
pub use pdf::{PageTextSource, PdfReader};
pub use survey::{
    FilenamePolicy, FixedPolicy, Strategy, StrategyPolicy, SurveyExtractor, Vocabulary,
};
