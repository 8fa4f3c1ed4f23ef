use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("state dump must contain exactly one accounts marker, found {0} sections")]
    SectionCount(usize),
    #[error("malformed account line {line}: {reason}")]
    MalformedAccountLine { line: usize, reason: String },
    #[error("malformed storage line {line}: `{content}`")]
    MalformedStorageLine { line: usize, content: String },
    #[error("invalid address on line {line}: `{value}`")]
    InvalidAddress { line: usize, value: String },
}
