//! Streaming, event-driven markup-tag scanner.
//!
//! Consumes a character stream incrementally and, without building a
//! document tree, recognizes tag opens, tag closes, self-closing tags
//! and text runs, reporting each as an event to caller-registered
//! handlers while enforcing well-formed nesting.
//!
//! ```
//! use tagscan::Scanner;
//!
//! let mut outcome = None;
//!
//! let mut scanner = Scanner::builder()
//!     .on_end(|el| outcome = Some(el.content().unwrap().to_string()))
//!     .build();
//!
//! scanner.parse("<greeting>hello</greeting>");
//! drop(scanner);
//!
//! assert_eq!(outcome.as_deref(), Some("Parsing success"));
//! ```
//!
//! Attributes, comments, CDATA, entities and processing instructions
//! are out of scope: a tag is `<name>`, `</name>` or `<name/>`, and
//! everything between tags is a text run.

#[macro_use]
mod debug_trace;

mod errors;
mod events;
mod parser;
mod scanner;

pub use self::errors::ParsingError;
pub use self::events::{Element, Event, EventFlags, TagElement, TextElement};
pub use self::parser::{EventSink, TagScanner, TagState};
pub use self::scanner::{EventDispatcher, EventHandler, Scanner, ScannerBuilder};
