use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("unable to read email body")]
    BodyRead(#[source] io::Error),
    #[error("unable to encode email")]
    Encode(#[source] io::Error),
}
