use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use s2f_message::{Message, ParseError};
use s2f_record::{MailRecord, RecordError};

use crate::config::DeliveryConfig;

/// Owner and group may read and write, others get nothing.
pub const FILE_MODE: u32 = 0o660;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("unable to open file {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to parse email")]
    Parse(#[from] ParseError),
    #[error("unable to read email body")]
    BodyRead(#[source] io::Error),
    #[error("unable to encode email to {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The append-only file receiving the records. The handle is closed when
/// the value is dropped.
#[derive(Debug)]
pub struct Destination {
    path: PathBuf,
    file: File,
    sync: bool,
}

impl Destination {
    pub fn open(path: &Path, sync: bool) -> Result<Self, DeliveryError> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let file = options.open(path).map_err(|source| DeliveryError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "destination opened");

        Ok(Self {
            path: path.to_path_buf(),
            file,
            sync,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, returns the number of bytes written.
    pub fn append<B: Read>(&mut self, record: MailRecord<B>) -> Result<usize, DeliveryError> {
        let written = record.encode(&mut self.file).map_err(|e| match e {
            RecordError::BodyRead(source) => DeliveryError::BodyRead(source),
            RecordError::Encode(source) => DeliveryError::Encode {
                path: self.path.clone(),
                source,
            },
        })?;

        if self.sync {
            self.file
                .sync_data()
                .map_err(|source| DeliveryError::Encode {
                    path: self.path.clone(),
                    source,
                })?;
        }

        Ok(written)
    }
}

/// Read one email from `input` and append it to the configured file.
pub fn deliver<R: BufRead>(config: &DeliveryConfig, input: R) -> Result<usize, DeliveryError> {
    let mut destination = Destination::open(&config.file, config.sync)?;

    let message = Message::parse(input)?;
    let record = MailRecord::from_message(message);
    debug!(
        from = record.from(),
        to = record.to(),
        subject = record.subject(),
        "email received"
    );

    let written = destination.append(record)?;
    info!(path = %destination.path().display(), bytes = written, "email appended");

    Ok(written)
}
