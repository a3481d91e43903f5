use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use s2f_message::{HeaderCollection, Message};

use crate::error::RecordError;

/// One received email, as it will be appended to the destination file.
///
/// The body is still a stream at this point. It is drained when the
/// record is turned into a [`RecordSnapshot`], which consumes the record:
/// a record can be serialized only once.
#[derive(Debug)]
pub struct MailRecord<B> {
    from: String,
    to: String,
    subject: String,
    body: B,
}

/// Serializable view of a [`MailRecord`] whose body has been read.
/// Empty fields are left out of the JSON object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RecordSnapshot {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subject: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
}

fn first_value(headers: &HeaderCollection, name: &str) -> String {
    headers.get(name).unwrap_or_default().to_string()
}

impl<B: Read> MailRecord<B> {
    pub fn new(headers: &HeaderCollection, body: B) -> Self {
        Self {
            from: first_value(headers, "From"),
            to: first_value(headers, "To"),
            subject: first_value(headers, "Subject"),
            body,
        }
    }

    pub fn from_message(message: Message<B>) -> Self {
        let (headers, body) = message.into_parts();
        Self::new(&headers, body)
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Drain the body stream. Nothing read so far is kept if the stream
    /// fails.
    pub fn snapshot(mut self) -> Result<RecordSnapshot, RecordError> {
        let mut raw = Vec::new();
        self.body
            .read_to_end(&mut raw)
            .map_err(RecordError::BodyRead)?;

        let body = match String::from_utf8(raw) {
            Ok(body) => body,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        debug!(body_len = body.len(), "read email body");

        Ok(RecordSnapshot {
            from: self.from,
            to: self.to,
            subject: self.subject,
            body,
        })
    }

    /// Read the body, then write the whole record to `sink` as one line.
    /// Returns the number of bytes written.
    pub fn encode<W: Write>(self, sink: &mut W) -> Result<usize, RecordError> {
        self.snapshot()?.write_to(sink)
    }
}

impl RecordSnapshot {
    /// Compact JSON terminated by a newline.
    pub fn to_line(&self) -> Result<Vec<u8>, RecordError> {
        let mut line = serde_json::to_vec(self).map_err(|e| RecordError::Encode(e.into()))?;
        line.push(b'\n');
        Ok(line)
    }

    /// The line is built in memory first and handed to the sink in a
    /// single `write_all`, so a failure never leaves half a record behind
    /// an append-mode file.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<usize, RecordError> {
        let line = self.to_line()?;
        sink.write_all(&line).map_err(RecordError::Encode)?;
        sink.flush().map_err(RecordError::Encode)?;
        Ok(line.len())
    }
}
