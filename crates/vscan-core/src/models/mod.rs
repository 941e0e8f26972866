//! Data models for documents, extracted items and configuration.

pub mod config;
pub mod due_item;
pub mod lines;
