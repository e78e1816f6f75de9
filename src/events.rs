use bitflags::bitflags;
use std::fmt::{self, Debug};

/// Lexical units and end-of-parse statuses reported by the scanner.
///
/// The set is closed: the dispatcher relies on `Event` being densely
/// indexable to back its handler table with a fixed-size array.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    Start,
    OpenTag,
    CloseTag,
    SingleTag,
    TextValue,
    ValidEnd,
    InvalidEnd,
}

impl Event {
    pub(crate) const KIND_COUNT: usize = 7;

    #[inline]
    pub(crate) const fn idx(self) -> usize {
        self as usize
    }
}

bitflags! {
    /// Subscriber mask kept by the dispatcher, one bit per event kind.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct EventFlags: u8 {
        const START = 1 << 0;
        const OPEN_TAG = 1 << 1;
        const CLOSE_TAG = 1 << 2;
        const SINGLE_TAG = 1 << 3;
        const TEXT_VALUE = 1 << 4;
        const VALID_END = 1 << 5;
        const INVALID_END = 1 << 6;
    }
}

impl From<Event> for EventFlags {
    #[inline]
    fn from(event: Event) -> Self {
        EventFlags::from_bits_truncate(1 << event.idx())
    }
}

/// A finished tag name. Constructed only once the closing `>` of the
/// construct has been consumed, so the name is never partial.
#[derive(Clone, PartialEq, Eq)]
pub struct TagElement {
    name: String,
}

impl TagElement {
    #[inline]
    pub(crate) fn new(name: String) -> Self {
        TagElement { name }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Debug for TagElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagElement({:?})", self.name)
    }
}

/// A finished text run, or the descriptive payload of a status event.
#[derive(Clone, PartialEq, Eq)]
pub struct TextElement {
    content: String,
}

impl TextElement {
    #[inline]
    pub(crate) fn new(content: String) -> Self {
        TextElement { content }
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Debug for TextElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextElement({:?})", self.content)
    }
}

/// The value delivered to handlers: one recognized lexical unit.
///
/// `Tag` accompanies `OpenTag`, `CloseTag` and `SingleTag` events,
/// `Text` accompanies `TextValue` and the two status events.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Element {
    Tag(TagElement),
    Text(TextElement),
}

impl Element {
    #[inline]
    pub(crate) fn tag(name: String) -> Self {
        Element::Tag(TagElement::new(name))
    }

    #[inline]
    pub(crate) fn text(content: impl Into<String>) -> Self {
        Element::Text(TextElement::new(content.into()))
    }

    /// Tag name, if this element describes a tag.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        match self {
            Element::Tag(tag) => Some(tag.name()),
            Element::Text(_) => None,
        }
    }

    /// Text content, if this element carries a text run or a status.
    #[inline]
    pub fn content(&self) -> Option<&str> {
        match self {
            Element::Tag(_) => None,
            Element::Text(text) => Some(text.content()),
        }
    }
}
