use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("message is empty")]
    Empty,
    #[error("header section is not terminated by a blank line (stream ended after line {line})")]
    Truncated { line: usize },
    #[error("malformed header field on line {line}")]
    Malformed { line: usize },
    #[error("line {line} is a continuation but no header field precedes it")]
    Continuation { line: usize },
    #[error("unable to read header section")]
    Io(#[from] std::io::Error),
}
