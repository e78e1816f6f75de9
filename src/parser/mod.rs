mod open_tag_stack;
mod tag_scanner;

pub use self::tag_scanner::{EventSink, TagScanner};

/// Scan states of the tag recognition machine.
///
/// `ValidTagEnd` is transient: it marks that the last consumed
/// character was a `>` completing a well-formed construct, and the
/// machine resumes text handling on the next character.
/// `InvalidTagEnd` is terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TagState {
    Start,
    Text,
    TagOpenName,
    TagCloseName,
    TagSinglePending,
    ValidTagEnd,
    InvalidTagEnd,
}
