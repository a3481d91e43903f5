use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::field;
use crate::header::HeaderCollection;

/// A parsed message: its header section and a reader positioned on the
/// first byte of the body.
#[derive(Debug)]
pub struct Message<R> {
    headers: HeaderCollection,
    body: R,
}

// Field being accumulated while its continuation lines are read.
struct Pending {
    name: String,
    value: Vec<u8>,
}

impl Pending {
    fn fold(&mut self, line: &[u8]) {
        let line = field::trim_wsp(line);
        if line.is_empty() {
            return;
        }
        if !self.value.is_empty() {
            self.value.push(field::SP);
        }
        self.value.extend_from_slice(line);
    }

    fn finish(self, headers: &mut HeaderCollection) {
        let value = String::from_utf8_lossy(&self.value).into_owned();
        headers.push(self.name, value);
    }
}

impl<R: BufRead> Message<R> {
    /// Read the header section from `reader`, up to and including the
    /// blank line that separates it from the body. The body itself is
    /// not read.
    pub fn parse(mut reader: R) -> Result<Self, ParseError> {
        let mut headers = HeaderCollection::default();
        let mut pending: Option<Pending> = None;
        let mut line = Vec::new();
        let mut lineno = 0;

        loop {
            line.clear();
            let read = reader.read_until(field::LF, &mut line)?;
            if read == 0 {
                return match lineno {
                    0 => Err(ParseError::Empty),
                    _ => Err(ParseError::Truncated { line: lineno }),
                };
            }
            lineno += 1;

            // Stream ended in the middle of a line
            if line.last() != Some(&field::LF) {
                return Err(ParseError::Truncated { line: lineno });
            }

            let content = field::strip_eol(&line);
            if content.is_empty() {
                break;
            }

            if field::is_continuation(content) {
                match pending.as_mut() {
                    Some(current) => current.fold(content),
                    None => return Err(ParseError::Continuation { line: lineno }),
                }
                continue;
            }

            let (_, (name, value)) =
                field::header_line(content).map_err(|_| ParseError::Malformed { line: lineno })?;
            if let Some(done) = pending.take() {
                done.finish(&mut headers);
            }
            trace!(line = lineno, "header field");
            pending = Some(Pending {
                name: String::from_utf8_lossy(name).into_owned(),
                value: field::trim_wsp(value).to_vec(),
            });
        }

        if let Some(done) = pending {
            done.finish(&mut headers);
        }
        debug!(fields = headers.len(), lines = lineno, "parsed header section");

        Ok(Self {
            headers,
            body: reader,
        })
    }
}

impl<R> Message<R> {
    pub fn headers(&self) -> &HeaderCollection {
        &self.headers
    }

    pub fn body_mut(&mut self) -> &mut R {
        &mut self.body
    }

    pub fn into_parts(self) -> (HeaderCollection, R) {
        (self.headers, self.body)
    }
}
