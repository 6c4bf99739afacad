//! Error types for the lexsim analysis pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for lexsim operations.
#[derive(Error, Debug)]
pub enum LexsimError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Word-list resource missing or unreadable.
    #[error("Word list not found: {}", .0.display())]
    WordListNotFound(PathBuf),

    /// A word-list record whose first tab-separated field is empty.
    #[error("Empty word field at line {line}")]
    EmptyRecord {
        /// 1-based line number in the word list.
        line: usize,
    },

    /// Empty input.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A matrix entry that must exist by construction was not found.
    #[error("Missing matrix entry for '{first}' and '{second}'")]
    MissingDistance {
        /// First word of the failed lookup.
        first: String,
        /// Second word of the failed lookup.
        second: String,
    },

    /// Error while writing a report.
    #[error("Failed to write {report} report: {source}")]
    ReportWrite {
        /// Which report was being written.
        report: &'static str,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for lexsim operations.
pub type Result<T> = std::result::Result<T, LexsimError>;
