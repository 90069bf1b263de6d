//! Diarium export schema.
//!
//! A Diarium JSON export is a top-level array of entry objects. Only the fields
//! the converter uses are modelled; anything else in an entry is ignored.

use serde::Deserialize;
use tracing::warn;

/// One entry of a Diarium JSON export.
///
/// # Examples
///
/// ```
/// use diarium2dayone::diarium::DiariumEntry;
///
/// let entry: DiariumEntry = serde_json::from_str(
///     r#"{"date": "2023-05-01T08:30:00", "html": "<p>Hi</p>", "tags": ["trip"]}"#,
/// ).unwrap();
/// assert_eq!(entry.date, "2023-05-01T08:30:00");
/// assert_eq!(entry.heading(), None);
/// assert_eq!(entry.tags(), Some(&["trip".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DiariumEntry {
    /// ISO-8601 local date-time, possibly with an irregular fraction
    pub date: String,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    /// Free text such as "Sunrise: 7:16 AM Sunset: 7:56 PM"
    #[serde(default)]
    pub sun: Option<String>,
    /// Free text naming the moon phase
    #[serde(default)]
    pub lunar: Option<String>,
    /// `[latitude, longitude]`
    #[serde(default)]
    pub location: Option<Vec<f64>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl DiariumEntry {
    /// The heading, when present and non-empty.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref().filter(|heading| !heading.is_empty())
    }

    /// The HTML body, or an empty string.
    pub fn html(&self) -> &str {
        self.html.as_deref().unwrap_or("")
    }

    pub fn sun(&self) -> &str {
        self.sun.as_deref().unwrap_or("")
    }

    pub fn lunar(&self) -> &str {
        self.lunar.as_deref().unwrap_or("")
    }

    /// The tag list, when present and non-empty.
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref().filter(|tags| !tags.is_empty())
    }

    /// The `(latitude, longitude)` pair.
    ///
    /// An absent or empty array yields `None`. Any other array that is not a
    /// pair is logged and treated as absent.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match self.location.as_deref() {
            None | Some([]) => None,
            Some(&[latitude, longitude]) => Some((latitude, longitude)),
            Some(other) => {
                warn!(
                    "Ignoring location of entry {} with {} values, expected [latitude, longitude]",
                    self.date,
                    other.len()
                );
                None
            }
        }
    }
}
