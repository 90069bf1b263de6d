//! Coordinates to Day One location records.

use crate::config::LocationDefaults;
use crate::dayone::{Coordinate, LocationRecord, Region};

/// Builds a location record from a `(latitude, longitude)` pair.
///
/// The administrative fields come from `defaults`; there is no reverse
/// geocoding, so every location carries the same placeholder names.
///
/// # Examples
///
/// ```
/// use diarium2dayone::config::LocationDefaults;
/// use diarium2dayone::journal_core::location::map_location;
///
/// let location = map_location(41.49, -81.69, &LocationDefaults::default());
/// assert_eq!(location.region.center.latitude, 41.49);
/// assert_eq!(location.region.radius, 75);
/// assert_eq!(location.administrative_area, "OH");
/// ```
pub fn map_location(latitude: f64, longitude: f64, defaults: &LocationDefaults) -> LocationRecord {
    LocationRecord {
        region: Region {
            center: Coordinate {
                longitude,
                latitude,
            },
            radius: defaults.region_radius,
        },
        locality_name: defaults.locality_name.clone(),
        country: defaults.country.clone(),
        time_zone_name: defaults.time_zone_name.clone(),
        administrative_area: defaults.administrative_area.clone(),
        longitude,
        place_name: defaults.place_name.clone(),
        latitude,
    }
}
