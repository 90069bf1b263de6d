//! Configuration management for the diarium2dayone application.
//!
//! The converter has no configuration file and reads no environment variables.
//! `Config` exists so the placeholder values stamped onto every Day One entry
//! (device name, time zone, location placeholders) and the media directory are
//! gathered in one structure instead of being scattered through the conversion
//! code. `Config::default()` reproduces the fixed values from
//! [`constants`](crate::constants).

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Constant metadata written onto every converted entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryMetadata {
    pub creation_device: String,
    pub creation_os_version: String,
    pub creation_device_type: String,
    pub time_zone: String,
}

impl Default for EntryMetadata {
    fn default() -> Self {
        EntryMetadata {
            creation_device: constants::CREATION_DEVICE.to_string(),
            creation_os_version: constants::CREATION_OS_VERSION.to_string(),
            creation_device_type: constants::CREATION_DEVICE_TYPE.to_string(),
            time_zone: constants::ENTRY_TIME_ZONE.to_string(),
        }
    }
}

/// Administrative fields attached to every location record.
///
/// Diarium only stores coordinates, so these are placeholders rather than the
/// result of a reverse-geocoding lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationDefaults {
    pub locality_name: String,
    pub place_name: String,
    pub country: String,
    pub time_zone_name: String,
    pub administrative_area: String,
    pub region_radius: u32,
}

impl Default for LocationDefaults {
    fn default() -> Self {
        LocationDefaults {
            locality_name: constants::LOCATION_LOCALITY_NAME.to_string(),
            place_name: constants::LOCATION_PLACE_NAME.to_string(),
            country: constants::LOCATION_COUNTRY.to_string(),
            time_zone_name: constants::LOCATION_TIME_ZONE_NAME.to_string(),
            administrative_area: constants::LOCATION_ADMINISTRATIVE_AREA.to_string(),
            region_radius: constants::LOCATION_REGION_RADIUS,
        }
    }
}

/// Configuration for a conversion run.
///
/// # Examples
///
/// ```
/// use diarium2dayone::Config;
/// use std::path::PathBuf;
///
/// let config = Config::default();
/// assert_eq!(config.media_dir, PathBuf::from("diarium-json/media"));
/// assert_eq!(config.location.country, "United States");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding per-entry media folders, relative to the working directory.
    pub media_dir: PathBuf,

    /// Number of entries between two progress log lines.
    pub progress_interval: usize,

    /// Constant entry metadata.
    pub entry: EntryMetadata,

    /// Location placeholders.
    pub location: LocationDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            media_dir: PathBuf::from(constants::DEFAULT_MEDIA_DIR),
            progress_interval: constants::PROGRESS_INTERVAL,
            entry: EntryMetadata::default(),
            location: LocationDefaults::default(),
        }
    }
}

impl Config {
    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the media directory path is empty, the
    /// progress interval or region radius is zero, or any placeholder string
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use diarium2dayone::Config;
    ///
    /// let mut config = Config::default();
    /// config.progress_interval = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.media_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Media directory path is empty".to_string()));
        }

        if self.progress_interval == 0 {
            return Err(AppError::Config(
                "Progress interval must be greater than zero".to_string(),
            ));
        }

        if self.location.region_radius == 0 {
            return Err(AppError::Config(
                "Location region radius must be greater than zero".to_string(),
            ));
        }

        let placeholders = [
            ("creation device", &self.entry.creation_device),
            ("creation OS version", &self.entry.creation_os_version),
            ("creation device type", &self.entry.creation_device_type),
            ("entry time zone", &self.entry.time_zone),
            ("locality name", &self.location.locality_name),
            ("place name", &self.location.place_name),
            ("country", &self.location.country),
            ("location time zone", &self.location.time_zone_name),
            ("administrative area", &self.location.administrative_area),
        ];
        for (name, value) in placeholders {
            if value.trim().is_empty() {
                return Err(AppError::Config(format!("The {} cannot be empty", name)));
            }
        }

        Ok(())
    }

    /// Probes the media directory once for the whole run.
    ///
    /// Returns the directory when it exists. Otherwise logs a warning and returns
    /// `None`, which disables media lookup for every entry of the run.
    pub fn resolve_media_root(&self) -> Option<&Path> {
        if self.media_dir.is_dir() {
            debug!("Media directory: {:?}", self.media_dir);
            Some(self.media_dir.as_path())
        } else {
            warn!(
                "Media directory {:?} not found, proceeding without media files",
                self.media_dir
            );
            None
        }
    }
}
