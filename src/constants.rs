//! Constants used throughout the application.
//!
//! This module contains all constants used by the converter, organized into
//! logical groups. Every hardcoded value of the Day One output lives here so that
//! `Config::default()` can be built from a single place.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "diarium2dayone";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Convert a Diarium JSON export to Day One JSON format with media support";

// Logging Configuration
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "diarium2dayone";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// File System Parameters
/// Relative directory probed once per run for per-entry media folders.
pub const DEFAULT_MEDIA_DIR: &str = "diarium-json/media";
/// Entries between two progress log lines.
pub const PROGRESS_INTERVAL: usize = 100;

// Export Envelope
/// Version written into the export `metadata` object.
pub const EXPORT_METADATA_VERSION: &str = "1.0";
/// Format of `creationDate`, `modifiedDate`, `sunriseDate` and `sunsetDate`.
pub const DAYONE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// Entry Metadata
pub const CREATION_DEVICE: &str = "Diarium Import";
pub const CREATION_OS_VERSION: &str = "15.5";
pub const CREATION_DEVICE_TYPE: &str = "Unknown";
pub const ENTRY_TIME_ZONE: &str = "America/New_York";

// Location Placeholders
// No reverse geocoding happens, every location gets these.
pub const LOCATION_LOCALITY_NAME: &str = "Unknown";
pub const LOCATION_PLACE_NAME: &str = "Unknown";
pub const LOCATION_COUNTRY: &str = "United States";
pub const LOCATION_TIME_ZONE_NAME: &str = "America/New_York";
pub const LOCATION_ADMINISTRATIVE_AREA: &str = "OH";
/// Radius of the generated location region.
pub const LOCATION_REGION_RADIUS: u32 = 75;

// Rich Text Envelope
pub const RICH_TEXT_PLATFORM: &str = "com.bloombuilt.dayone-mac";
pub const RICH_TEXT_PLATFORM_VERSION: u32 = 1667;
pub const RICH_TEXT_SCHEMA_VERSION: u32 = 1;

// Weather Baseline
pub const WEATHER_CODE: &str = "clear";
pub const WEATHER_SERVICE_NAME: &str = "WeatherKit";
pub const WEATHER_TEMPERATURE_CELSIUS: f64 = 20.0;
pub const WEATHER_WIND_BEARING: u32 = 0;
pub const WEATHER_CONDITIONS_DESCRIPTION: &str = "Clear";
pub const WEATHER_PRESSURE_MB: f64 = 1013.0;
pub const WEATHER_VISIBILITY_KM: f64 = 10.0;
pub const WEATHER_RELATIVE_HUMIDITY: u32 = 50;
pub const WEATHER_WIND_SPEED_KPH: f64 = 0.0;

// Moon Phase
/// Code used when the lunar text names no recognized phase.
pub const FALLBACK_MOON_PHASE_CODE: &str = "waxing-gibbous";
/// Fraction used when the lunar text names no recognized phase.
pub const FALLBACK_MOON_PHASE_FRACTION: f64 = 0.37;

// Media
/// Type tag of every media reference.
pub const MEDIA_TYPE_IMAGE: &str = "image";
/// Prefix of synthesized media filenames (`media_0000.jpg`, ...).
pub const MEDIA_FILENAME_PREFIX: &str = "media_";
