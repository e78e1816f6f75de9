use std::io;
use thiserror::Error;

/// Failures of the input source itself, surfaced to the caller at
/// `parse_*` invocation time.
///
/// Content-level problems (malformed markup, bad nesting, unclosed
/// tags) never take this path: they are absorbed by the state machine
/// and reported through the [`InvalidEnd`](crate::Event::InvalidEnd)
/// status event.
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("failed to read input source: {0}")]
    Io(#[from] io::Error),
    #[error("input is not valid UTF-8")]
    NonUtf8Input,
}
