use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calendar::image::LocalImage;

pub const DEFAULT_TITLE: &str = "New Event";
pub const DEFAULT_COLOR: &str = "#3788d8";

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: String,
    pub image: Option<EventImage>,
}

/// Image attached to an event.
///
/// `Saved` is a reference that can be displayed as-is. `Local` holds the raw
/// bytes of a file picked during editing; it needs a transient preview
/// reference before it can be shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventImage {
    Saved(String),
    Local(LocalImage),
}

impl EventImage {
    pub fn label(&self) -> String {
        match self {
            EventImage::Saved(reference) => reference.clone(),
            EventImage::Local(image) => image.file_name.clone(),
        }
    }
}

impl Event {
    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_local_date(&self.start)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_local_date(&self.end)
    }
}

/// Parses a `datetime-local` style timestamp. A bare date is read as midnight.
pub fn parse_local_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

pub fn parse_local_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

pub fn is_date_only(value: &str) -> bool {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_event(id: &str, start: &str, end: &str) -> Event {
        Event {
            id: id.to_string(),
            title: "Standup".to_string(),
            start: start.to_string(),
            end: end.to_string(),
            color: DEFAULT_COLOR.to_string(),
            image: None,
        }
    }

    #[test]
    fn parses_minute_precision_timestamp() {
        let parsed = parse_local_timestamp("2024-06-01T10:00").unwrap();
        assert_eq!(parsed.format("%H:%M").to_string(), "10:00");
    }

    #[test]
    fn parses_second_precision_timestamp() {
        assert!(parse_local_timestamp("2024-06-01T10:00:30").is_some());
    }

    #[test]
    fn bare_date_parses_as_midnight() {
        let parsed = parse_local_timestamp("2024-06-01").unwrap();
        assert_eq!(parsed.format("%H:%M").to_string(), "00:00");
    }

    #[test]
    fn garbage_does_not_parse() {
        assert!(parse_local_timestamp("tomorrow-ish").is_none());
        assert!(parse_local_timestamp("").is_none());
    }

    #[test]
    fn start_date_reads_day_from_timestamp() {
        let event = create_test_event("1", "2024-06-01T10:00", "2024-06-02T11:00");
        assert_eq!(event.start_date(), NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(event.end_date(), NaiveDate::from_ymd_opt(2024, 6, 2));
    }

    #[test]
    fn start_date_is_none_for_malformed_start() {
        let event = create_test_event("1", "06/01/2024", "");
        assert_eq!(event.start_date(), None);
    }

    #[test]
    fn date_only_detection() {
        assert!(is_date_only("2024-06-01"));
        assert!(!is_date_only("2024-06-01T10:00"));
    }

    #[test]
    fn saved_image_label_is_reference() {
        let image = EventImage::Saved("https://example.com/cat.png".to_string());
        assert_eq!(image.label(), "https://example.com/cat.png");
    }
}
