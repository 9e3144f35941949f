//! Error types for loading and generating neighborhood input files.
//!
//! The search itself cannot fail; everything here is reported before a
//! search starts (or while writing a generated file).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for candyrun operations
#[derive(Error, Debug)]
pub enum CandyError {
    /// I/O failure while reading or writing `path`
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("File '{}' not found", .path.display())]
    FileNotFound { path: PathBuf },

    /// Fewer than the two header values (home count and capacity)
    #[error("Not enough data in the file: expected at least 2 header values, found {found}")]
    MissingHeader { found: usize },

    /// A line that is not a non-negative integer
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Declared home count disagrees with the number of candy lines
    #[error("Home count mismatch: header declares {declared} homes but {found} were listed")]
    CountMismatch { declared: usize, found: usize },
}

/// Type alias for Results using CandyError
pub type Result<T> = std::result::Result<T, CandyError>;

impl CandyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
