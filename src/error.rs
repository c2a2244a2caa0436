use thiserror::Error;

/// Errors returned by the fallible text helpers.
///
/// Entity decoding is total and never produces one of these.
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Index {index} is out of bounds for text of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("Invalid range {start}..{end}")]
    InvalidRange { start: usize, end: usize },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, TextError>;
