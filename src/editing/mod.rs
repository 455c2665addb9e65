pub mod session;
pub mod validation;

pub use session::{Draft, DraftOrigin, EditSession, EventDefaults, FieldUpdate};
pub use validation::{ValidationWarning, validate};
