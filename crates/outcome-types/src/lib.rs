pub mod error;
pub mod event;
pub mod severity;
pub mod status;

pub use error::{MappingFailure, MissingArgument, OutcomeError};
pub use event::{Event, EventBuilder};
pub use severity::Severity;
pub use status::Status;
