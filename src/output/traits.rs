//! Output writer traits and types
//!
//! This module defines the trait interface for record writers and the
//! error type shared by all persistence formats.

use crate::record::ArticleRecord;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A persistence format for harvested records
pub trait RecordWriter {
    /// File extension, without the dot
    fn extension(&self) -> &'static str;

    /// Serializes every record to the writer
    ///
    /// # Arguments
    ///
    /// * `records` - The records, in output order
    /// * `out` - Destination of the serialized bytes
    fn write_records(&self, records: &[ArticleRecord], out: &mut dyn Write) -> OutputResult<()>;
}
