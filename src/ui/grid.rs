use chrono::NaiveDate;

use crate::calendar::{Event, EventImage, event::is_date_only, parse_local_timestamp};

const GRID_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Data the grid carries along untouched so it can be handed back on click.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridPayload {
    pub image: Option<EventImage>,
}

/// One renderable entry for the calendar grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: String,
    pub payload: GridPayload,
}

impl GridEvent {
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            start: grid_timestamp(&event.start),
            end: grid_timestamp(&event.end),
            color: event.color.clone(),
            payload: GridPayload {
                image: event.image.clone(),
            },
        }
    }

    pub fn into_event(self) -> Event {
        Event {
            id: self.id,
            title: self.title,
            start: self.start,
            end: self.end,
            color: self.color,
            image: self.payload.image,
        }
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        crate::calendar::event::parse_local_date(&self.start)
    }
}

/// Normalizes timestamps the way the grid reports them back. Values the grid
/// cannot read pass through untouched.
fn grid_timestamp(value: &str) -> String {
    if is_date_only(value) {
        return value.trim().to_string();
    }
    parse_local_timestamp(value)
        .map(|ts| ts.format(GRID_TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridView {
    Month,
}

/// Everything the grid needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRequest {
    pub view: GridView,
    pub focus: NaiveDate,
    pub today: NaiveDate,
    pub selected_event: Option<String>,
    pub events: Vec<GridEvent>,
}

/// What the grid reports back to the core.
#[derive(Debug, Clone, PartialEq)]
pub enum GridOccurrence {
    DateActivated(String),
    EventActivated(GridEvent),
}

#[cfg_attr(test, mockall::automock)]
pub trait GridAdapter {
    fn render(&mut self, request: &GridRequest);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::LocalImage;
    use pretty_assertions::assert_eq;

    fn event_with(start: &str, end: &str) -> Event {
        Event {
            id: "42".to_string(),
            title: "Dentist".to_string(),
            start: start.to_string(),
            end: end.to_string(),
            color: "#aa0000".to_string(),
            image: Some(EventImage::Local(LocalImage::new("x.png", vec![9]))),
        }
    }

    #[test]
    fn payload_carries_image_through_round_trip() {
        let event = event_with("2024-06-01T10:00", "2024-06-01T11:00");
        let round_tripped = GridEvent::from_event(&event).into_event();
        assert_eq!(round_tripped, event);
    }

    #[test]
    fn seconds_are_dropped_by_the_grid() {
        let event = event_with("2024-06-01T10:00:45", "2024-06-01T11:00:00");
        let grid = GridEvent::from_event(&event);
        assert_eq!(grid.start, "2024-06-01T10:00");
        assert_eq!(grid.end, "2024-06-01T11:00");
    }

    #[test]
    fn date_only_and_unreadable_values_pass_through() {
        let event = event_with("2024-06-01", "later");
        let grid = GridEvent::from_event(&event);
        assert_eq!(grid.start, "2024-06-01");
        assert_eq!(grid.end, "later");
    }

    #[test]
    fn grid_event_knows_its_day() {
        let grid = GridEvent::from_event(&event_with("2024-06-01T10:00", ""));
        assert_eq!(grid.start_date(), NaiveDate::from_ymd_opt(2024, 6, 1));
    }
}
