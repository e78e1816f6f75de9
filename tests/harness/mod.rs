use std::cell::RefCell;
use std::rc::Rc;
use tagscan::{Element, Event, Scanner};

pub type EventLog = Rc<RefCell<Vec<(Event, String)>>>;

fn payload(element: &Element) -> String {
    match element {
        Element::Tag(tag) => tag.name().to_string(),
        Element::Text(text) => text.content().to_string(),
    }
}

/// A scanner with a recording handler on every event kind, plus the
/// shared log it records into.
pub fn recording_scanner() -> (Scanner<'static>, EventLog) {
    let log: EventLog = Rc::default();

    let recorder = |event: Event, log: &EventLog| {
        let log = Rc::clone(log);

        move |element: &Element| log.borrow_mut().push((event, payload(element)))
    };

    let scanner = Scanner::builder()
        .on_start(recorder(Event::Start, &log))
        .on_open_tag(recorder(Event::OpenTag, &log))
        .on_close_tag(recorder(Event::CloseTag, &log))
        .on_single_tag(recorder(Event::SingleTag, &log))
        .on_text(recorder(Event::TextValue, &log))
        .on_end(recorder(Event::ValidEnd, &log))
        .on_error(recorder(Event::InvalidEnd, &log))
        .build();

    (scanner, log)
}

pub fn scan_events(input: &str) -> Vec<(Event, String)> {
    let (mut scanner, log) = recording_scanner();

    scanner.parse(input);
    drop(scanner);

    Rc::try_unwrap(log).unwrap().into_inner()
}

pub fn kinds(events: &[(Event, String)]) -> Vec<Event> {
    events.iter().map(|(event, _)| *event).collect()
}
