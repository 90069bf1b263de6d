//! Journal file I/O.
//!
//! Reading the Diarium export, writing the Day One import file and counting the
//! media files for the final report. The conversion itself never touches these
//! files.

use crate::dayone::DayOneExport;
use crate::diarium::DiariumEntry;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;
use walkdir::WalkDir;

/// Mode of the written import; temporary files are created owner-only.
#[cfg(unix)]
const OUTPUT_FILE_MODE: u32 = 0o644;

/// Reads a Diarium JSON export.
///
/// # Errors
///
/// Returns:
/// - `AppError::Io` if the file cannot be read or is not valid UTF-8
/// - `AppError::Json` if it is not a JSON array of Diarium entries
pub fn read_diarium_entries(path: &Path) -> AppResult<Vec<DiariumEntry>> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read Diarium export {}: {}", path.display(), e),
        ))
    })?;

    let entries: Vec<DiariumEntry> = serde_json::from_str(&content)?;
    debug!("Decoded {} entries from {:?}", entries.len(), path);
    Ok(entries)
}

/// Writes the Day One import file as pretty-printed UTF-8 JSON.
///
/// The document is written to a temporary file next to `path` and then moved
/// into place, so `path` is either left untouched or holds the complete export.
///
/// # Errors
///
/// Returns `AppError::Io` if the temporary file cannot be created, written or
/// persisted, and `AppError::Json` if serialization fails.
pub fn write_dayone_export(path: &Path, export: &DayOneExport) -> AppResult<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp_file = NamedTempFile::new_in(directory).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!(
                "Failed to create temporary file in {}: {}",
                directory.display(),
                e
            ),
        ))
    })?;

    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, export)?;
        writer.flush()?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp_file
            .as_file()
            .set_permissions(fs::Permissions::from_mode(OUTPUT_FILE_MODE))?;
    }

    temp_file.persist(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.error.kind(),
            format!("Failed to write Day One import {}: {}", path.display(), e.error),
        ))
    })?;

    debug!("Wrote {} entries to {:?}", export.entries.len(), path);
    Ok(())
}

/// Counts the files below `dir`, at any depth.
pub fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dayone::{DayOneEntry, WeatherRecord};
    use serde_json::Value;
    use tempfile::tempdir;

    fn entry(text: &str) -> DayOneEntry {
        DayOneEntry {
            creation_date: "2020-01-01T10:00:00Z".to_string(),
            creation_os_version: "15.5".to_string(),
            is_all_day: false,
            creation_device: "Diarium Import".to_string(),
            duration: 0,
            weather: WeatherRecord::default(),
            is_pinned: false,
            time_zone: "America/New_York".to_string(),
            starred: false,
            creation_device_type: "Unknown".to_string(),
            rich_text: String::new(),
            modified_date: "2020-01-01T10:00:00Z".to_string(),
            text: text.to_string(),
            editing_time: 0,
            location: None,
            tags: None,
            media: None,
        }
    }

    #[test]
    fn test_read_entries() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("diarium.json");
        fs::write(
            &path,
            r#"[{"date": "2020-01-01T10:00:00", "html": "<p>Ünïcödé</p>"}, {"date": "2020-01-02T10:00:00"}]"#,
        )
        .unwrap();

        let entries = read_diarium_entries(&path).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].html(), "<p>Ünïcödé</p>");
        assert_eq!(entries[1].date, "2020-01-02T10:00:00");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempdir().unwrap();

        let result = read_diarium_entries(&temp_dir.path().join("missing.json"));

        match result {
            Err(AppError::Io(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert!(e.to_string().contains("missing.json"));
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_malformed_json() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("diarium.json");
        fs::write(&path, r#"[{"date": "2020-01-01T10:00:00"},"#).unwrap();

        assert!(matches!(read_diarium_entries(&path), Err(AppError::Json(_))));
    }

    #[test]
    fn test_read_top_level_object_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("diarium.json");
        fs::write(&path, r#"{"entries": []}"#).unwrap();

        assert!(matches!(read_diarium_entries(&path), Err(AppError::Json(_))));
    }

    #[test]
    fn test_write_export_pretty_utf8() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("dayone.json");
        let export = DayOneExport::new(vec![entry("Café → Straße")]);

        write_dayone_export(&path, &export).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Café → Straße"));
        assert!(written.starts_with("{\n  \"metadata\": {\n    \"version\": \"1.0\"\n  },"));
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_write_export_replaces_existing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("dayone.json");
        fs::write(&path, "stale").unwrap();

        write_dayone_export(&path, &DayOneExport::new(Vec::new())).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["entries"], Value::Array(Vec::new()));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_export_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("dayone.json");

        write_dayone_export(&path, &DayOneExport::new(vec![entry("x")])).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_write_export_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("no/such/dir/dayone.json");

        let result = write_dayone_export(&path, &DayOneExport::new(Vec::new()));

        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_count_files() {
        let temp_dir = tempdir().unwrap();
        let media = temp_dir.path().join("media");
        fs::create_dir_all(media.join("2020-01-01/nested")).unwrap();
        fs::create_dir_all(media.join("empty")).unwrap();
        fs::write(media.join("2020-01-01/a.jpg"), b"a").unwrap();
        fs::write(media.join("2020-01-01/nested/b.jpg"), b"b").unwrap();

        assert_eq!(count_files(&media), 2);
        assert_eq!(count_files(&temp_dir.path().join("missing")), 0);
    }
}
