pub mod error;
pub mod record;

pub use error::RecordError;
pub use record::{MailRecord, RecordSnapshot};
