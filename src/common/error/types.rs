//! Unified error types for calendar generation.
use thiserror::Error;

use crate::ooxml::error::OoxmlError;

/// Main error type for calendar operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A (year, month, day) triple that is not a calendar date
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Month outside 1..=12
    #[error("Invalid month: {0} (expected 1..=12)")]
    InvalidMonth(u32),

    /// The holiday source has no data for the requested year
    #[error("No holiday data for year {0}")]
    UnsupportedYear(i32),

    /// The holiday source does not know the requested language tag
    #[error("Unsupported language tag: {0}")]
    UnsupportedLanguage(String),

    /// Configuration document could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Presentation writer error
    #[error("Presentation error: {0}")]
    Ooxml(OoxmlError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, Error>;
