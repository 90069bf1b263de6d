//! Day One import schema.
//!
//! These types serialize to the JSON layout Day One expects inside an import
//! archive. Optional members are skipped entirely when absent; Day One treats a
//! missing key differently from `null` or an empty list.

use crate::constants;
use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

/// The top-level import document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayOneExport {
    pub metadata: ExportMetadata,
    pub entries: Vec<DayOneEntry>,
}

impl DayOneExport {
    pub fn new(entries: Vec<DayOneEntry>) -> Self {
        DayOneExport {
            metadata: ExportMetadata::default(),
            entries,
        }
    }

    /// Number of media references over all entries.
    pub fn media_reference_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.media.as_ref().map_or(0, Vec::len))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportMetadata {
    pub version: String,
}

impl Default for ExportMetadata {
    fn default() -> Self {
        ExportMetadata {
            version: constants::EXPORT_METADATA_VERSION.to_string(),
        }
    }
}

/// A single Day One entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOneEntry {
    pub creation_date: String,
    #[serde(rename = "creationOSVersion")]
    pub creation_os_version: String,
    pub is_all_day: bool,
    pub creation_device: String,
    pub duration: u64,
    pub weather: WeatherRecord,
    pub is_pinned: bool,
    pub time_zone: String,
    pub starred: bool,
    pub creation_device_type: String,
    /// Serialized rich-text document, or an empty string for an empty body
    pub rich_text: String,
    pub modified_date: String,
    pub text: String,
    pub editing_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<MediaReference>>,
}

/// Weather attached to an entry.
///
/// `Default` is the fixed clear-sky baseline; sunrise, sunset and moon phase are
/// only present when they could be derived from the Diarium text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub weather_code: String,
    pub weather_service_name: String,
    pub temperature_celsius: f64,
    pub wind_bearing: u32,
    pub conditions_description: String,
    #[serde(rename = "pressureMB")]
    pub pressure_mb: f64,
    #[serde(rename = "visibilityKM")]
    pub visibility_km: f64,
    pub relative_humidity: u32,
    #[serde(rename = "windSpeedKPH")]
    pub wind_speed_kph: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moon_phase_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moon_phase: Option<f64>,
}

impl Default for WeatherRecord {
    fn default() -> Self {
        WeatherRecord {
            weather_code: constants::WEATHER_CODE.to_string(),
            weather_service_name: constants::WEATHER_SERVICE_NAME.to_string(),
            temperature_celsius: constants::WEATHER_TEMPERATURE_CELSIUS,
            wind_bearing: constants::WEATHER_WIND_BEARING,
            conditions_description: constants::WEATHER_CONDITIONS_DESCRIPTION.to_string(),
            pressure_mb: constants::WEATHER_PRESSURE_MB,
            visibility_km: constants::WEATHER_VISIBILITY_KM,
            relative_humidity: constants::WEATHER_RELATIVE_HUMIDITY,
            wind_speed_kph: constants::WEATHER_WIND_SPEED_KPH,
            sunrise_date: None,
            sunset_date: None,
            moon_phase_code: None,
            moon_phase: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub center: Coordinate,
    pub radius: u32,
}

/// A Day One location.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub region: Region,
    pub locality_name: String,
    pub country: String,
    pub time_zone_name: String,
    pub administrative_area: String,
    pub longitude: f64,
    pub place_name: String,
    pub latitude: f64,
}

/// A media attachment reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaReference {
    /// Upper-case UUID without hyphens
    pub identifier: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub filename: String,
}

impl MediaReference {
    /// Creates the reference for the `index`-th media file of an entry.
    ///
    /// The original file name is discarded; only its extension survives.
    ///
    /// # Examples
    ///
    /// ```
    /// use diarium2dayone::dayone::MediaReference;
    /// use std::path::Path;
    ///
    /// let reference = MediaReference::for_file(3, Path::new("media/2020-01-01/IMG_1234.JPG"));
    /// assert_eq!(reference.filename, "media_0003.JPG");
    /// assert_eq!(reference.media_type, "image");
    /// assert_eq!(reference.identifier.len(), 32);
    /// ```
    pub fn for_file(index: usize, path: &Path) -> Self {
        let suffix = path
            .extension()
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        MediaReference {
            identifier: Uuid::new_v4().simple().to_string().to_uppercase(),
            media_type: constants::MEDIA_TYPE_IMAGE.to_string(),
            filename: format!("{}{:04}{}", constants::MEDIA_FILENAME_PREFIX, index, suffix),
        }
    }
}
