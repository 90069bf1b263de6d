//! Media file discovery.
//!
//! Diarium exports attachments into one folder per entry below a media root,
//! named after the entry's date or date-time in one of several conventions
//! (`2020-01-01`, `2020-01-01_100000123`, `20200101_100000`, ...). An entry
//! collects every file below every top-level folder whose name starts with one
//! of its candidate prefixes.
//!
//! Known issue: candidates overlap (`2020-01-01` is a prefix of
//! `2020-01-01_100000`), so a folder matching several candidates contributes its
//! files once per matching candidate. Media references are not de-duplicated.

use crate::errors::TimestampError;
use crate::journal_core::timestamp::parse_entry_timestamp;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Folder name formats, from coarsest to finest.
const FOLDER_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%Y-%m-%d_%H%M%S%3f",
    "%Y-%m-%d_%H%M%S",
    "%Y%m%d",
    "%Y%m%d_%H%M%S",
];

/// The five folder-name prefixes an entry's media folder may start with.
///
/// # Examples
///
/// ```
/// use diarium2dayone::media::candidate_prefixes;
/// use chrono::NaiveDateTime;
///
/// let timestamp = NaiveDateTime::parse_from_str("2020-01-01T10:00:00.123456", "%Y-%m-%dT%H:%M:%S%.f").unwrap();
/// assert_eq!(
///     candidate_prefixes(&timestamp),
///     [
///         "2020-01-01",
///         "2020-01-01_100000123",
///         "2020-01-01_100000",
///         "20200101",
///         "20200101_100000",
///     ]
/// );
/// ```
pub fn candidate_prefixes(timestamp: &NaiveDateTime) -> [String; 5] {
    FOLDER_FORMATS.map(|format| timestamp.format(format).to_string())
}

/// Finds the media files of the entry dated `entry_date` below `media_root`.
///
/// Every candidate prefix is checked against every immediate subdirectory of
/// `media_root`; for each match all files below that subdirectory are
/// collected recursively. Subdirectories and files are visited in file-name
/// order. Unreadable folders are logged and skipped.
///
/// # Errors
///
/// Returns a [`TimestampError`] if `entry_date` cannot be parsed.
pub fn find_media_files(entry_date: &str, media_root: &Path) -> Result<Vec<PathBuf>, TimestampError> {
    let timestamp = parse_entry_timestamp(entry_date)?;
    Ok(find_media_files_at(&timestamp, media_root))
}

/// Like [`find_media_files`] for an already parsed timestamp.
pub fn find_media_files_at(timestamp: &NaiveDateTime, media_root: &Path) -> Vec<PathBuf> {
    let folders = list_folders(media_root);
    let mut media_files = Vec::new();

    for prefix in candidate_prefixes(timestamp) {
        for (name, folder) in &folders {
            if name.starts_with(&prefix) {
                debug!("Media folder {:?} matches prefix {}", folder, prefix);
                media_files.extend(files_below(folder));
            }
        }
    }

    media_files
}

/// Immediate subdirectories of `media_root` with their names, sorted by name.
fn list_folders(media_root: &Path) -> Vec<(String, PathBuf)> {
    let read_dir = match fs::read_dir(media_root) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            warn!("Cannot read media directory {:?}: {}", media_root, e);
            return Vec::new();
        }
    };

    let mut folders: Vec<(String, PathBuf)> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            Some((name, path))
        })
        .collect();
    folders.sort();
    folders
}

fn files_below(folder: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(folder)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable media path: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
}
