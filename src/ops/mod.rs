//! High-level conversion operations.
//!
//! This module provides the user-facing operation that orchestrates a run:
//! reading the Diarium export, locating media, converting every entry and
//! writing the Day One import.

pub mod convert;

// Re-export commonly used functions
pub use convert::{convert_entries, run_conversion, ConversionReport};
