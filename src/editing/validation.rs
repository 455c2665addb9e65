use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::calendar::{Event, EventImage, is_date_only, parse_local_timestamp};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeField {
    Start,
    End,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Start => write!(f, "start"),
            TimeField::End => write!(f, "end"),
        }
    }
}

/// Problems worth pointing out to the user. None of them block saving.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    EmptyTitle,
    UnreadableTime { field: TimeField, value: String },
    EndBeforeStart,
    InvalidColor(String),
    UnsupportedImageType { file_name: String, mime: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::EmptyTitle => write!(f, "title is empty"),
            ValidationWarning::UnreadableTime { field, value } if value.trim().is_empty() => {
                write!(f, "{} time is missing", field)
            }
            ValidationWarning::UnreadableTime { field, value } => {
                write!(f, "{} time '{}' is not YYYY-MM-DDTHH:MM", field, value)
            }
            ValidationWarning::EndBeforeStart => write!(f, "end is before start"),
            ValidationWarning::InvalidColor(color) => {
                write!(f, "color '{}' is not #rrggbb", color)
            }
            ValidationWarning::UnsupportedImageType { file_name, mime } => {
                write!(f, "{} is not an image ({})", file_name, mime)
            }
        }
    }
}

pub fn is_hex_color(value: &str) -> bool {
    static HEX_COLOR_RE: OnceLock<Regex> = OnceLock::new();
    HEX_COLOR_RE
        .get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("invalid hex color regex"))
        .is_match(value.trim())
}

pub fn validate(event: &Event) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if event.title.trim().is_empty() {
        warnings.push(ValidationWarning::EmptyTitle);
    }

    let start = parse_local_timestamp(&event.start);
    let end = parse_local_timestamp(&event.end);

    if start.is_none() {
        warnings.push(ValidationWarning::UnreadableTime {
            field: TimeField::Start,
            value: event.start.clone(),
        });
    }
    if end.is_none() {
        warnings.push(ValidationWarning::UnreadableTime {
            field: TimeField::End,
            value: event.end.clone(),
        });
    }
    if let (Some(start), Some(end)) = (start, end)
        && ends_before_start(&event.start, start, &event.end, end)
    {
        warnings.push(ValidationWarning::EndBeforeStart);
    }

    if !is_hex_color(&event.color) {
        warnings.push(ValidationWarning::InvalidColor(event.color.clone()));
    }

    if let Some(EventImage::Local(image)) = &event.image
        && !image.is_supported()
    {
        warnings.push(ValidationWarning::UnsupportedImageType {
            file_name: image.file_name.clone(),
            mime: image.mime.clone(),
        });
    }

    warnings
}

/// A date-only side covers the whole day, so compare by date when either side has no time.
fn ends_before_start(start_raw: &str, start: NaiveDateTime, end_raw: &str, end: NaiveDateTime) -> bool {
    if is_date_only(start_raw) || is_date_only(end_raw) {
        end.date() < start.date()
    } else {
        end < start
    }
}

pub fn summarize(warnings: &[ValidationWarning]) -> String {
    warnings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
