//! Diarium to Day One batch conversion.

use crate::config::Config;
use crate::dayone::{DayOneEntry, DayOneExport};
use crate::diarium::DiariumEntry;
use crate::errors::AppResult;
use crate::journal_core::EntryBuilder;
use crate::journal_io;
use crate::media;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Report of a completed conversion run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Number of entries written to the import file
    pub entries_converted: usize,
    /// Number of media references attached over all entries
    pub media_references: usize,
    /// Media directory used for the run, if it existed
    pub media_dir: Option<PathBuf>,
    /// Files found below the media directory, if it existed
    pub media_files_in_dir: Option<usize>,
    /// Duration of the whole run
    pub duration: Duration,
}

/// Converts entries in order.
///
/// With a `media_root`, each entry's media folders are located below it;
/// without one no entry gets media. Progress is logged every
/// `progress_interval` entries.
///
/// # Errors
///
/// Fails on the first entry whose date cannot be parsed. No other per-entry
/// problem aborts the batch.
pub fn convert_entries(
    entries: &[DiariumEntry],
    media_root: Option<&Path>,
    builder: &EntryBuilder<'_>,
    progress_interval: usize,
) -> AppResult<Vec<DayOneEntry>> {
    let total = entries.len();
    let progress_interval = progress_interval.max(1);

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| -> AppResult<DayOneEntry> {
            if index % progress_interval == 0 {
                info!("Processing entry {}/{}...", index + 1, total);
            }

            let media_files = match media_root {
                Some(root) => media::find_media_files(&entry.date, root)?,
                None => Vec::new(),
            };
            builder.build(entry, &media_files)
        })
        .collect()
}

/// Runs a full conversion from `input` to `output`.
///
/// The media directory from `config` is probed once; if it is missing, media
/// lookup is skipped for the whole run. Nothing is written unless every entry
/// converts.
///
/// # Flow
///
/// 1. Read and decode the Diarium export
/// 2. Resolve the media directory
/// 3. Convert every entry
/// 4. Write the Day One import atomically
///
/// # Errors
///
/// Returns an error if the export cannot be read or decoded, an entry date is
/// invalid, or the import file cannot be written.
pub fn run_conversion(
    config: &Config,
    input: &Path,
    output: &Path,
    run_date: NaiveDate,
) -> AppResult<ConversionReport> {
    let start_time = Instant::now();
    config.validate()?;

    info!("Reading Diarium data from {}...", input.display());
    let entries = journal_io::read_diarium_entries(input)?;

    let media_root = config.resolve_media_root();

    info!("Converting {} entries...", entries.len());
    let builder = EntryBuilder::new(config, run_date);
    let converted = convert_entries(&entries, media_root, &builder, config.progress_interval)?;
    let export = DayOneExport::new(converted);

    info!(
        "Writing {} entries to {}...",
        export.entries.len(),
        output.display()
    );
    journal_io::write_dayone_export(output, &export)?;

    let media_files_in_dir = media_root.map(journal_io::count_files);
    let duration = start_time.elapsed();
    debug!("Conversion took {:?}", duration);

    Ok(ConversionReport {
        entries_converted: export.entries.len(),
        media_references: export.media_reference_count(),
        media_dir: media_root.map(Path::to_path_buf),
        media_files_in_dir,
        duration,
    })
}
