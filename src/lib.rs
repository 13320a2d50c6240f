//! Vina Processor Library
//!
//! A Rust library for summarising AutoDock Vina docking runs: it extracts the
//! best-mode result line from Vina log output and aggregates scores across
//! many files into a single tabular report.
//!
//! This library provides tools for:
//! - Decoding log bytes robustly (UTF-8 with a Latin-1 fallback)
//! - Locating the results table across known Vina layout variants
//! - Extracting the best-mode affinity and RMSD bounds as typed values
//! - Aggregating whole batches of logs, directories, and zip archives
//! - Rendering reports as an aligned table, CSV, or JSON

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod log_parser;
        pub mod report;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BatchReport, LogDocument, ParseError, ParseOutcome, ResultRow};

/// Result type alias for the Vina processor
pub type Result<T> = std::result::Result<T, Error>;

/// Operational error types for Vina log processing
///
/// These are the errors that fail a command outright. Per-document parse
/// failures are not represented here; they travel through
/// [`app::models::ParseOutcome`] so a batch always runs to completion.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Zip archive could not be opened or expanded
    #[error("Archive error in '{file}': {message}")]
    Archive { file: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report rendering or export error
    #[error("Report error: {message}")]
    Report { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an archive error with context
    pub fn archive(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Archive {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(error: zip::result::ZipError) -> Self {
        Self::Archive {
            file: "unknown".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Report {
            message: format!("JSON serialization failed: {}", error),
        }
    }
}
