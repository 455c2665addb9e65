pub mod app;
pub mod calendar;
pub mod editing;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::{AppState, Intent, Mode, ViewMode, update};
pub use calendar::{Event, EventImage, EventStore};
pub use editing::{EditSession, FieldUpdate};

pub use input::{command_mode, insert_mode, normal_mode};
