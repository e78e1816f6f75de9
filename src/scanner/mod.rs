mod builder;
mod handlers_dispatcher;

use crate::errors::ParsingError;
use crate::events::{Element, Event};
use crate::parser::{TagScanner, TagState};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use self::builder::ScannerBuilder;
pub use self::handlers_dispatcher::{EventDispatcher, EventHandler};

/// The parse driver. Owns the handler registry and is reusable: every
/// `parse_*` call runs a fresh state machine over one input, sharing
/// only the registry.
///
/// There is no return value describing the parse outcome — register
/// `on_end`/`on_error` handlers to observe it. The `Result` returned
/// by `parse_file` and `parse_reader` covers the input source only.
pub struct Scanner<'h> {
    dispatcher: EventDispatcher<'h>,
}

impl<'h> Scanner<'h> {
    pub fn new(dispatcher: EventDispatcher<'h>) -> Self {
        Scanner { dispatcher }
    }

    #[inline]
    pub fn builder() -> ScannerBuilder<'h> {
        ScannerBuilder::default()
    }

    /// Scans an in-memory text payload.
    pub fn parse(&mut self, input: &str) {
        self.scan(input);
    }

    /// Scans the contents of a file. A missing or unreadable file is
    /// reported to the caller here, not through the event channel.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<(), ParsingError> {
        self.parse_reader(File::open(path)?)
    }

    /// Scans a generic byte source. The bytes must form valid UTF-8.
    pub fn parse_reader(&mut self, mut reader: impl Read) -> Result<(), ParsingError> {
        let mut bytes = Vec::new();

        reader.read_to_end(&mut bytes)?;

        let input = String::from_utf8(bytes).map_err(|_| ParsingError::NonUtf8Input)?;

        self.scan(&input);

        Ok(())
    }

    // One character-at-a-time pass, strictly forward. Stops feeding as
    // soon as the machine reports `InvalidTagEnd`; the final status is
    // derived from the last observed state and the open-tag stack.
    fn scan(&mut self, input: &str) {
        self.dispatcher
            .dispatch(Event::Start, &Element::text("Parsing started"));

        let mut machine = TagScanner::new(&mut self.dispatcher);
        let mut last_state = TagState::Start;

        for ch in input.chars() {
            last_state = machine.advance(ch);

            if last_state == TagState::InvalidTagEnd {
                break;
            }
        }

        let stack_empty = machine.is_stack_empty();

        let (event, status) = match (last_state, stack_empty) {
            (TagState::ValidTagEnd, true) => (Event::ValidEnd, "Parsing success"),
            (TagState::ValidTagEnd, false) => (Event::InvalidEnd, "Some tags aren't closed"),
            _ => (Event::InvalidEnd, "Incorrect XML code"),
        };

        self.dispatcher.dispatch(event, &Element::text(status));
    }
}
