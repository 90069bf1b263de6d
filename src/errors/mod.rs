//! Error handling utilities for the diarium2dayone application.
//!
//! This module provides the central error type `AppError` which represents all
//! conditions that abort a conversion run, as well as the convenience type alias
//! `AppResult` for functions that can return these errors.
//!
//! Only two kinds of malformed input are fatal: JSON that cannot be decoded and
//! entry dates that match neither the standard nor the padded-fraction shape.
//! Everything else (odd sun text, malformed locations, unreadable media folders)
//! is handled where it happens and never surfaces here.

use std::io;
use thiserror::Error;

/// An entry date that could not be parsed in either accepted shape.
///
/// The `source` is the error of the primary (standard) parse attempt, not of the
/// padded-fraction fallback.
///
/// # Examples
///
/// ```
/// use diarium2dayone::journal_core::timestamp::parse_entry_timestamp;
///
/// let error = parse_entry_timestamp("yesterday").unwrap_err();
/// assert_eq!(error.input, "yesterday");
/// assert!(format!("{}", error).contains("yesterday"));
/// ```
#[derive(Debug, Error)]
#[error("Invalid entry date '{input}': {source}")]
pub struct TimestampError {
    /// The date string exactly as it appeared in the export
    pub input: String,
    /// The underlying chrono error from the primary parse attempt
    #[source]
    pub source: chrono::ParseError,
}

/// Represents all errors that can abort a conversion run.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use diarium2dayone::errors::AppError;
///
/// let error = AppError::Config("Media directory path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Media directory path is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use diarium2dayone::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Error in the converter configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the export or writing the import file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The export is not a JSON array of Diarium entries.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry date matched neither accepted shape.
    #[error("Entry date error: {0}")]
    Timestamp(#[from] TimestampError),
}

/// A type alias for `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
