/*!
# diarium2dayone

Converts a Diarium JSON export into a Day One JSON import file. Each Diarium
entry becomes one Day One entry, in the same order, with:

- the creation date normalized to `YYYY-MM-DDTHH:MM:SSZ`
- the HTML body flattened into plain text and a single-line rich-text document
- sunrise/sunset and moon phase annotations mapped onto a weather record
- coordinates mapped onto a location record with placeholder place names
- media files discovered from date-named folders below `diarium-json/media`

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Placeholder values and the media directory
- `errors`: Error handling infrastructure
- `diarium` / `dayone`: Source and destination schemas
- `journal_core`: Pure per-entry conversion
- `media`: Media folder discovery
- `journal_io`: Reading the export and writing the import
- `ops`: The batch conversion run

## Usage Example

```rust,no_run
use diarium2dayone::{ops, Config};
use chrono::Local;
use std::path::Path;

fn main() -> diarium2dayone::AppResult<()> {
    let config = Config::default();
    let report = ops::run_conversion(
        &config,
        Path::new("diarium-json/diarium-json.json"),
        Path::new("dayone_import.json"),
        Local::now().date_naive(),
    )?;
    println!("Converted {} entries", report.entries_converted);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration and placeholder values
pub mod config;
/// Application-wide constants
pub mod constants;
/// Day One import schema
pub mod dayone;
/// Diarium export schema
pub mod diarium;
/// Error types and utilities for error handling
pub mod errors;
/// Per-entry conversion logic without I/O
pub mod journal_core;
/// Reading and writing journal files
pub mod journal_io;
/// Media folder discovery
pub mod media;
/// Batch conversion operations
pub mod ops;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::EntryBuilder;
