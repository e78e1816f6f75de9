use super::handlers_dispatcher::EventDispatcher;
use super::Scanner;
use crate::events::{Element, Event};

/// Chained registration API for assembling a handler registry.
///
/// ```
/// use tagscan::Scanner;
///
/// let mut opened = Vec::new();
///
/// let mut scanner = Scanner::builder()
///     .on_open_tag(|el| opened.push(el.name().unwrap().to_string()))
///     .build();
///
/// scanner.parse("<a><b/></a>");
/// drop(scanner);
///
/// assert_eq!(opened, ["a"]);
/// ```
#[derive(Default)]
pub struct ScannerBuilder<'h> {
    dispatcher: EventDispatcher<'h>,
}

macro_rules! impl_registration {
    ( $( $(#[$doc:meta])* $name:ident => $event:ident ),+ $(,)? ) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(mut self, handler: impl FnMut(&Element) + 'h) -> Self {
                self.dispatcher.register(Event::$event, Box::new(handler));

                self
            }
        )+
    };
}

impl<'h> ScannerBuilder<'h> {
    impl_registration! {
        /// Runs once per parse, before the first character.
        on_start => Start,
        on_open_tag => OpenTag,
        on_close_tag => CloseTag,
        on_single_tag => SingleTag,
        on_text => TextValue,
        /// Runs when a parse finishes well-formed.
        on_end => ValidEnd,
        /// Runs when a parse finishes malformed or with unclosed tags.
        on_error => InvalidEnd,
    }

    #[inline]
    pub fn build(self) -> Scanner<'h> {
        Scanner::new(self.dispatcher)
    }
}
