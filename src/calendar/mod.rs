pub mod event;
pub mod id;
pub mod image;
pub mod store;

pub use event::{Event, EventImage, DEFAULT_COLOR, DEFAULT_TITLE, is_date_only, parse_local_timestamp};
pub use id::EventIdGenerator;
pub use image::{ImageError, LocalImage};
pub use store::EventStore;
