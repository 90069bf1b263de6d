//! Core conversion logic without I/O operations.
//!
//! This module turns one Diarium entry into one Day One entry. Everything that
//! touches the filesystem (reading the export, locating media) happens outside;
//! the builder receives the already located media paths.

pub mod location;
pub mod rich_text;
pub mod timestamp;
pub mod weather;

use crate::config::Config;
use crate::dayone::{DayOneEntry, MediaReference};
use crate::diarium::DiariumEntry;
use crate::errors::AppResult;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Builds Day One entries from Diarium entries.
///
/// # Examples
///
/// ```
/// use diarium2dayone::journal_core::EntryBuilder;
/// use diarium2dayone::diarium::DiariumEntry;
/// use diarium2dayone::Config;
/// use chrono::NaiveDate;
///
/// let config = Config::default();
/// let builder = EntryBuilder::new(&config, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
///
/// let source: DiariumEntry = serde_json::from_str(
///     r#"{"date": "2023-05-01T08:30:00", "heading": "Morning", "html": "<p>Coffee</p>"}"#,
/// ).unwrap();
/// let entry = builder.build(&source, &[]).unwrap();
///
/// assert_eq!(entry.creation_date, "2023-05-01T08:30:00Z");
/// assert_eq!(entry.text, "Morning\n\nCoffee");
/// assert!(entry.media.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct EntryBuilder<'a> {
    config: &'a Config,
    run_date: NaiveDate,
}

impl<'a> EntryBuilder<'a> {
    /// Creates a builder.
    ///
    /// `run_date` is the date sunrise and sunset times are anchored to.
    pub fn new(config: &'a Config, run_date: NaiveDate) -> Self {
        EntryBuilder { config, run_date }
    }

    /// Converts one entry.
    ///
    /// `media_files` are the files located for this entry, in order; each
    /// becomes a media reference numbered from zero.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Timestamp` if the entry date cannot be parsed and
    /// `AppError::Json` if the rich-text document cannot be serialized.
    pub fn build(&self, source: &DiariumEntry, media_files: &[PathBuf]) -> AppResult<DayOneEntry> {
        let created = timestamp::parse_entry_timestamp(&source.date)?;
        let creation_date = timestamp::format_dayone_timestamp(&created);

        let body = rich_text::html_to_text(source.html());
        let text = match source.heading() {
            Some(heading) => format!("{}\n\n{}", heading, body),
            None => body,
        };

        let rich_text = rich_text::html_to_rich_text(source.html())?;
        let weather = weather::parse_weather(source.sun(), source.lunar(), self.run_date);
        let location = source.coordinates().map(|(latitude, longitude)| {
            location::map_location(latitude, longitude, &self.config.location)
        });

        let media = if media_files.is_empty() {
            None
        } else {
            Some(
                media_files
                    .iter()
                    .enumerate()
                    .map(|(index, path)| MediaReference::for_file(index, path))
                    .collect(),
            )
        };

        let metadata = &self.config.entry;
        Ok(DayOneEntry {
            creation_date: creation_date.clone(),
            creation_os_version: metadata.creation_os_version.clone(),
            is_all_day: false,
            creation_device: metadata.creation_device.clone(),
            duration: 0,
            weather,
            is_pinned: false,
            time_zone: metadata.time_zone.clone(),
            starred: false,
            creation_device_type: metadata.creation_device_type.clone(),
            rich_text,
            modified_date: creation_date,
            text,
            editing_time: 0,
            location,
            tags: source.tags().map(<[String]>::to_vec),
            media,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn source(json: &str) -> DiariumEntry {
        serde_json::from_str(json).unwrap()
    }

    fn keys(entry: &DayOneEntry) -> Vec<String> {
        match serde_json::to_value(entry).unwrap() {
            Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("Expected an object, got {}", other),
        }
    }

    #[test]
    fn test_minimal_entry_has_only_mandatory_fields() {
        let config = Config::default();
        let builder = EntryBuilder::new(&config, run_date());

        let entry = builder
            .build(&source(r#"{"date": "2020-01-01T10:00:00", "html": "<p>Hi</p>"}"#), &[])
            .unwrap();

        let mut expected = vec![
            "creationDate",
            "creationDevice",
            "creationDeviceType",
            "creationOSVersion",
            "duration",
            "editingTime",
            "isAllDay",
            "isPinned",
            "modifiedDate",
            "richText",
            "starred",
            "text",
            "timeZone",
            "weather",
        ];
        expected.sort_unstable();
        let mut actual = keys(&entry);
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_constant_metadata() {
        let config = Config::default();
        let builder = EntryBuilder::new(&config, run_date());

        let entry = builder
            .build(&source(r#"{"date": "2020-01-01T10:00:00"}"#), &[])
            .unwrap();

        assert_eq!(entry.creation_device, "Diarium Import");
        assert_eq!(entry.creation_os_version, "15.5");
        assert_eq!(entry.creation_device_type, "Unknown");
        assert_eq!(entry.time_zone, "America/New_York");
        assert_eq!(entry.duration, 0);
        assert_eq!(entry.editing_time, 0);
        assert!(!entry.starred);
        assert!(!entry.is_pinned);
        assert!(!entry.is_all_day);
        assert_eq!(entry.modified_date, entry.creation_date);
    }

    #[test]
    fn test_empty_html_gives_empty_text_and_rich_text() {
        let config = Config::default();
        let builder = EntryBuilder::new(&config, run_date());

        let entry = builder
            .build(&source(r#"{"date": "2020-01-01T10:00:00"}"#), &[])
            .unwrap();

        assert_eq!(entry.text, "");
        assert_eq!(entry.rich_text, "");
    }

    #[test]
    fn test_heading_is_prepended_to_text_only() {
        let config = Config::default();
        let builder = EntryBuilder::new(&config, run_date());

        let entry = builder
            .build(
                &source(r#"{"date": "2020-01-01T10:00:00", "heading": "Title", "html": "<p>Body</p>"}"#),
                &[],
            )
            .unwrap();

        assert_eq!(entry.text, "Title\n\nBody");
        let rich_text: Value = serde_json::from_str(&entry.rich_text).unwrap();
        assert_eq!(rich_text["contents"][0]["text"], "Body");
    }

    #[test]
    fn test_short_fraction_creation_date() {
        let config = Config::default();
        let builder = EntryBuilder::new(&config, run_date());

        let entry = builder
            .build(&source(r#"{"date": "2010-10-26T15:47:53.48828"}"#), &[])
            .unwrap();

        assert_eq!(entry.creation_date, "2010-10-26T15:47:53Z");
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let config = Config::default();
        let builder = EntryBuilder::new(&config, run_date());

        let result = builder.build(&source(r#"{"date": "last tuesday"}"#), &[]);

        assert!(matches!(result, Err(AppError::Timestamp(_))));
    }

    #[test]
    fn test_location_tags_and_weather() {
        let config = Config::default();
        let builder = EntryBuilder::new(&config, run_date());

        let entry = builder
            .build(
                &source(
                    r#"{
                        "date": "2020-01-01T10:00:00",
                        "sun": "Sunrise: 7:16 AM Sunset: 7:56 PM",
                        "lunar": "Waning gibbous",
                        "location": [41.4993, -81.6944],
                        "tags": ["home", "winter"]
                    }"#,
                ),
                &[],
            )
            .unwrap();

        let location = entry.location.unwrap();
        assert_eq!(location.latitude, 41.4993);
        assert_eq!(location.longitude, -81.6944);
        assert_eq!(entry.tags, Some(vec!["home".to_string(), "winter".to_string()]));
        assert_eq!(entry.weather.sunrise_date.as_deref(), Some("2026-10-16T07:16:00Z"));
        assert_eq!(entry.weather.moon_phase_code.as_deref(), Some("waning-gibbous"));
    }

    #[test]
    fn test_media_references_are_numbered() {
        let config = Config::default();
        let builder = EntryBuilder::new(&config, run_date());
        let files = vec![
            PathBuf::from("/media/2020-01-01_a/IMG_0001.jpg"),
            PathBuf::from("/media/2020-01-01_a/clip.MOV"),
            PathBuf::from("/media/2020-01-01_b/scan"),
        ];

        let entry = builder
            .build(&source(r#"{"date": "2020-01-01T10:00:00"}"#), &files)
            .unwrap();

        let filenames: Vec<_> = entry
            .media
            .unwrap()
            .into_iter()
            .map(|reference| reference.filename)
            .collect();
        assert_eq!(filenames, vec!["media_0000.jpg", "media_0001.MOV", "media_0002"]);
    }
}
