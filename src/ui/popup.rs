//! Marker popups
//!
//! Popups are view-models: structured fields the host renders however it
//! likes, with a plain-text fallback for headless use. Building the content
//! lazily keeps the marker layer cheap to construct for large feeds.

use chrono::{TimeZone, Utc};

/// Data behind an earthquake marker's popup
#[derive(Debug, Clone, PartialEq)]
pub struct QuakePopup {
    pub place: String,
    pub magnitude: f64,
    /// Origin time in milliseconds since the Unix epoch
    pub time_ms: i64,
}

/// Rendered popup lines: a heading, the magnitude, and the origin time
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub heading: String,
    pub magnitude_line: String,
    pub time_line: String,
}

impl QuakePopup {
    pub fn new(place: &str, magnitude: f64, time_ms: i64) -> Self {
        Self {
            place: place.to_string(),
            magnitude,
            time_ms,
        }
    }

    /// Produces the structured popup content
    pub fn content(&self) -> PopupContent {
        PopupContent {
            heading: self.place.clone(),
            magnitude_line: format!("{} magnitude", self.magnitude),
            time_line: self.format_time(),
        }
    }

    /// Joins the content into a plain-text popup
    pub fn to_text(&self) -> String {
        let content = self.content();
        format!(
            "{}\n{}\n{}",
            content.heading, content.magnitude_line, content.time_line
        )
    }

    fn format_time(&self) -> String {
        match Utc.timestamp_millis_opt(self.time_ms).single() {
            Some(time) => time.format("%a %b %e %Y %H:%M:%S UTC").to_string(),
            None => format!("invalid timestamp ({} ms)", self.time_ms),
        }
    }
}
