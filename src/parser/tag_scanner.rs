use super::open_tag_stack::OpenTagStack;
use super::TagState;
use crate::events::{Element, Event};

/// Sink for events produced while scanning. Implemented by the
/// handlers dispatcher; tests plug in recording sinks.
pub trait EventSink {
    fn emit(&mut self, event: Event, element: &Element);
}

/// The per-character tag recognition state machine.
///
/// One instance per parse: it owns the token buffer and the stack of
/// currently-open tag names, and borrows the event sink for the
/// duration of the pass. There is no lookahead — every decision is
/// made on the single character handed to `advance`, so consumed
/// input is never re-examined.
pub struct TagScanner<'s, S: EventSink> {
    state: TagState,
    buffer: String,
    open_tag_stack: OpenTagStack,
    sink: &'s mut S,
}

#[inline]
fn is_name_char(ch: char) -> bool {
    !ch.is_whitespace() && !matches!(ch, '<' | '>' | '/')
}

impl<'s, S: EventSink> TagScanner<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        TagScanner {
            state: TagState::Start,
            buffer: String::new(),
            open_tag_stack: OpenTagStack::default(),
            sink,
        }
    }

    /// Consumes one character and returns the state it left the
    /// machine in. Emits at most one event per call, synchronously.
    ///
    /// `TagState::InvalidTagEnd` is terminal: the driver must stop
    /// feeding once it observes it. Further calls are tolerated and
    /// keep returning `InvalidTagEnd`.
    pub fn advance(&mut self, ch: char) -> TagState {
        trace!(@chars "advance", ch);

        self.state = match self.state {
            TagState::Start | TagState::Text | TagState::ValidTagEnd => self.on_text_char(ch),
            TagState::TagOpenName => self.on_open_name_char(ch),
            TagState::TagCloseName => self.on_close_name_char(ch),
            TagState::TagSinglePending => self.on_single_pending_char(ch),
            TagState::InvalidTagEnd => TagState::InvalidTagEnd,
        };

        trace!(@state self.state);

        self.state
    }

    #[inline]
    pub fn state(&self) -> TagState {
        self.state
    }

    #[inline]
    pub fn is_stack_empty(&self) -> bool {
        self.open_tag_stack.is_empty()
    }

    #[inline]
    pub fn open_tag_count(&self) -> usize {
        self.open_tag_stack.depth()
    }

    // `Start` and `ValidTagEnd` share the text entry transition: both
    // are positions between constructs where either a text run or a
    // new tag may begin.
    fn on_text_char(&mut self, ch: char) -> TagState {
        if ch == '<' {
            if !self.buffer.is_empty() {
                let text = self.take_buffer();
                self.emit(Event::TextValue, &Element::text(text));
            }

            TagState::TagOpenName
        } else {
            self.buffer.push(ch);

            TagState::Text
        }
    }

    fn on_open_name_char(&mut self, ch: char) -> TagState {
        match ch {
            // `/` as the very first character after `<` disambiguates
            // a closing tag; after a name it announces self-closing.
            '/' if self.buffer.is_empty() => TagState::TagCloseName,
            '/' => TagState::TagSinglePending,
            '>' if !self.buffer.is_empty() => {
                let name = self.take_buffer();

                self.open_tag_stack.push(name.clone());
                self.emit(Event::OpenTag, &Element::tag(name));

                TagState::ValidTagEnd
            }
            ch if is_name_char(ch) => {
                self.buffer.push(ch);

                TagState::TagOpenName
            }
            // `<>`, whitespace inside a name, a stray `<`.
            _ => TagState::InvalidTagEnd,
        }
    }

    fn on_close_name_char(&mut self, ch: char) -> TagState {
        match ch {
            '>' if !self.buffer.is_empty() => {
                let name = self.take_buffer();

                if self.open_tag_stack.pop_matching(&name) {
                    self.emit(Event::CloseTag, &Element::tag(name));

                    TagState::ValidTagEnd
                } else {
                    // Nesting violation. No event is emitted here: the
                    // driver reports it through the final status.
                    TagState::InvalidTagEnd
                }
            }
            ch if is_name_char(ch) => {
                self.buffer.push(ch);

                TagState::TagCloseName
            }
            _ => TagState::InvalidTagEnd,
        }
    }

    fn on_single_pending_char(&mut self, ch: char) -> TagState {
        if ch == '>' {
            let name = self.take_buffer();

            // A self-closing tag never nests: no stack traffic.
            self.emit(Event::SingleTag, &Element::tag(name));

            TagState::ValidTagEnd
        } else {
            TagState::InvalidTagEnd
        }
    }

    #[inline]
    fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    #[inline]
    fn emit(&mut self, event: Event, element: &Element) {
        trace!(@emit event, element);

        self.sink.emit(event, element);
    }
}
