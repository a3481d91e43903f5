//! Split an RFC 5322 message read from a byte stream into its header
//! section and a body stream.
//!
//! Only the framing of the message is handled here: header fields are
//! unfolded and kept as raw text, the body is left untouched in the
//! underlying reader.

pub mod error;
pub mod field;
pub mod header;
pub mod message;

pub use error::ParseError;
pub use header::{HeaderCollection, HeaderField};
pub use message::Message;
