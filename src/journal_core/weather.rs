//! Weather and moon phase parsing.
//!
//! Diarium keeps no structured weather, only two free-text annotations: a
//! sunrise/sunset line and a moon phase line. Both are parsed best-effort on top
//! of the fixed [`WeatherRecord`] baseline. Nothing here can fail a conversion;
//! text that does not parse simply contributes no fields.

use crate::constants;
use crate::dayone::WeatherRecord;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

static SUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Sunrise: (\d+):(\d+)\s*(AM|PM).*Sunset: (\d+):(\d+)\s*(AM|PM)")
        .expect("valid sunrise/sunset regex")
});

/// Moon phases recognized in Diarium's lunar text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoonPhase {
    WaxingGibbous,
    WaningGibbous,
    ThirdQuarter,
    NewMoon,
    FullMoon,
    /// Lunar text is present but names none of the phases above.
    Unrecognized,
}

impl MoonPhase {
    /// Phrases searched for in the lunar text, first match wins.
    const PHRASES: [(&'static str, MoonPhase); 5] = [
        ("Waxing gibbous", MoonPhase::WaxingGibbous),
        ("Waning gibbous", MoonPhase::WaningGibbous),
        ("Third quarter", MoonPhase::ThirdQuarter),
        ("New moon", MoonPhase::NewMoon),
        ("Full moon", MoonPhase::FullMoon),
    ];

    /// Reads the phase from lunar text. Empty text has no phase.
    ///
    /// # Examples
    ///
    /// ```
    /// use diarium2dayone::journal_core::weather::MoonPhase;
    ///
    /// assert_eq!(MoonPhase::from_lunar_text("Full moon tonight"), Some(MoonPhase::FullMoon));
    /// assert_eq!(MoonPhase::from_lunar_text("Something unexpected"), Some(MoonPhase::Unrecognized));
    /// assert_eq!(MoonPhase::from_lunar_text(""), None);
    /// ```
    pub fn from_lunar_text(lunar: &str) -> Option<Self> {
        if lunar.is_empty() {
            return None;
        }

        let phase = Self::PHRASES
            .iter()
            .find(|(phrase, _)| lunar.contains(phrase))
            .map_or(MoonPhase::Unrecognized, |&(_, phase)| phase);
        Some(phase)
    }

    /// Day One `moonPhaseCode`.
    pub fn code(self) -> &'static str {
        match self {
            MoonPhase::WaxingGibbous => "waxing-gibbous",
            MoonPhase::WaningGibbous => "waning-gibbous",
            MoonPhase::ThirdQuarter => "third-quarter",
            MoonPhase::NewMoon => "new-moon",
            MoonPhase::FullMoon => "full-moon",
            MoonPhase::Unrecognized => constants::FALLBACK_MOON_PHASE_CODE,
        }
    }

    /// Day One `moonPhase` fraction.
    pub fn fraction(self) -> f64 {
        match self {
            MoonPhase::WaxingGibbous => 0.75,
            MoonPhase::WaningGibbous => 0.25,
            MoonPhase::ThirdQuarter => 0.5,
            MoonPhase::NewMoon => 0.0,
            MoonPhase::FullMoon => 1.0,
            MoonPhase::Unrecognized => constants::FALLBACK_MOON_PHASE_FRACTION,
        }
    }
}

/// Sunrise and sunset read from a Diarium sun annotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
}

impl SunTimes {
    /// Parses `Sunrise: H:MM AM ... Sunset: H:MM PM`.
    ///
    /// Returns `None` when the text does not match or either time is not a valid
    /// clock time. A failure in one time discards both.
    ///
    /// # Examples
    ///
    /// ```
    /// use diarium2dayone::journal_core::weather::SunTimes;
    /// use chrono::Timelike;
    ///
    /// let times = SunTimes::parse("☀️ Sunrise: 7:16 AM Sunset: 7:56 PM").unwrap();
    /// assert_eq!(times.sunrise.hour(), 7);
    /// assert_eq!(times.sunset.hour(), 19);
    /// assert!(SunTimes::parse("Sunrise: 7:16 AM").is_none());
    /// ```
    pub fn parse(sun: &str) -> Option<Self> {
        let captures = SUN_RE.captures(sun)?;
        let sunrise = clock_time(&captures, 1)?;
        let sunset = clock_time(&captures, 4)?;
        Some(SunTimes { sunrise, sunset })
    }
}

/// Reads a 12-hour clock time from three consecutive capture groups.
fn clock_time(captures: &Captures<'_>, first_group: usize) -> Option<NaiveTime> {
    let hour: u32 = captures[first_group].parse().ok()?;
    let minute: u32 = captures[first_group + 1].parse().ok()?;
    let is_pm = &captures[first_group + 2] == "PM";

    NaiveTime::from_hms_opt(to_24_hour(hour, is_pm), minute, 0)
}

/// 12 PM stays 12, 12 AM becomes 0.
fn to_24_hour(hour: u32, is_pm: bool) -> u32 {
    match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (hour, true) => hour.saturating_add(12),
        (hour, false) => hour,
    }
}

/// Builds the weather record for an entry.
///
/// Sunrise and sunset carry only a time of day, so they are anchored to
/// `anchor_date` (the date of the conversion run, not of the entry).
///
/// # Examples
///
/// ```
/// use diarium2dayone::journal_core::weather::parse_weather;
/// use chrono::NaiveDate;
///
/// let run_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let weather = parse_weather("Sunrise: 6:45 AM Sunset: 6:10 PM", "New moon", run_date);
/// assert_eq!(weather.sunrise_date.as_deref(), Some("2024-03-01T06:45:00Z"));
/// assert_eq!(weather.sunset_date.as_deref(), Some("2024-03-01T18:10:00Z"));
/// assert_eq!(weather.moon_phase_code.as_deref(), Some("new-moon"));
/// ```
pub fn parse_weather(sun: &str, lunar: &str, anchor_date: NaiveDate) -> WeatherRecord {
    let mut weather = WeatherRecord::default();

    if !sun.is_empty() {
        match SunTimes::parse(sun) {
            Some(times) => {
                weather.sunrise_date = Some(anchored(anchor_date, times.sunrise));
                weather.sunset_date = Some(anchored(anchor_date, times.sunset));
            }
            None => debug!("Sun annotation not recognized: {:?}", sun),
        }
    }

    if let Some(phase) = MoonPhase::from_lunar_text(lunar) {
        weather.moon_phase_code = Some(phase.code().to_string());
        weather.moon_phase = Some(phase.fraction());
    }

    weather
}

fn anchored(date: NaiveDate, time: NaiveTime) -> String {
    NaiveDateTime::new(date, time)
        .format(constants::DAYONE_TIMESTAMP_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use pretty_assertions::assert_eq;

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_sun_times_morning_and_evening() {
        let times = SunTimes::parse("Sunrise: 7:16 AM Sunset: 7:56 PM").unwrap();
        assert_eq!((times.sunrise.hour(), times.sunrise.minute()), (7, 16));
        assert_eq!((times.sunset.hour(), times.sunset.minute()), (19, 56));
    }

    #[test]
    fn test_sun_times_midnight_and_noon() {
        let times = SunTimes::parse("Sunrise: 12:00 AM Sunset: 12:00 PM").unwrap();
        assert_eq!(times.sunrise.hour(), 0);
        assert_eq!(times.sunset.hour(), 12);
    }

    #[test]
    fn test_sun_times_without_space_before_meridiem() {
        let times = SunTimes::parse("Sunrise: 5:02AM, Sunset: 9:30PM").unwrap();
        assert_eq!(times.sunrise.hour(), 5);
        assert_eq!(times.sunset.hour(), 21);
    }

    #[test]
    fn test_sun_times_missing_sunset() {
        assert!(SunTimes::parse("Sunrise: 7:16 AM").is_none());
    }

    #[test]
    fn test_sun_times_out_of_range_discards_both() {
        assert!(SunTimes::parse("Sunrise: 7:16 AM Sunset: 13:56 PM").is_none());
        assert!(SunTimes::parse("Sunrise: 7:75 AM Sunset: 7:56 PM").is_none());
    }

    #[test]
    fn test_sun_times_huge_numbers() {
        assert!(SunTimes::parse("Sunrise: 99999999999:00 AM Sunset: 7:56 PM").is_none());
    }

    #[test]
    fn test_weather_sunrise_sunset_anchored_to_run_date() {
        let weather = parse_weather("☀️ Sunrise: 7:16 AM Sunset: 7:56 PM", "", run_date());

        assert_eq!(weather.sunrise_date.as_deref(), Some("2026-10-16T07:16:00Z"));
        assert_eq!(weather.sunset_date.as_deref(), Some("2026-10-16T19:56:00Z"));
        assert_eq!(weather.moon_phase_code, None);
        assert_eq!(weather.moon_phase, None);
    }

    #[test]
    fn test_weather_malformed_sun_keeps_baseline() {
        let weather = parse_weather("Sunrise: 7:16 AM, no sunset today", "", run_date());

        assert_eq!(weather, WeatherRecord::default());
        let value = serde_json::to_value(&weather).unwrap();
        assert!(value.get("sunriseDate").is_none());
        assert!(value.get("sunsetDate").is_none());
    }

    #[test]
    fn test_weather_empty_inputs_are_baseline() {
        assert_eq!(parse_weather("", "", run_date()), WeatherRecord::default());
    }

    #[test]
    fn test_moon_phase_mapping() {
        let cases = [
            ("Waxing gibbous", "waxing-gibbous", 0.75),
            ("Waning gibbous moon", "waning-gibbous", 0.25),
            ("🌗 Third quarter", "third-quarter", 0.5),
            ("New moon", "new-moon", 0.0),
            ("Full moon tonight", "full-moon", 1.0),
        ];

        for (lunar, code, fraction) in cases {
            let weather = parse_weather("", lunar, run_date());
            assert_eq!(weather.moon_phase_code.as_deref(), Some(code), "{}", lunar);
            assert_eq!(weather.moon_phase, Some(fraction), "{}", lunar);
        }
    }

    #[test]
    fn test_moon_phase_fallback() {
        let weather = parse_weather("", "Something unexpected", run_date());

        assert_eq!(weather.moon_phase_code.as_deref(), Some("waxing-gibbous"));
        assert_eq!(weather.moon_phase, Some(0.37));
    }

    #[test]
    fn test_moon_phase_is_case_sensitive() {
        assert_eq!(
            MoonPhase::from_lunar_text("full moon"),
            Some(MoonPhase::Unrecognized)
        );
    }

    #[test]
    fn test_moon_phase_first_phrase_wins() {
        assert_eq!(
            MoonPhase::from_lunar_text("Full moon after Waxing gibbous"),
            Some(MoonPhase::WaxingGibbous)
        );
    }
}
