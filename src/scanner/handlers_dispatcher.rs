use crate::events::{Element, Event, EventFlags};
use crate::parser::EventSink;

/// A registered callback. Invoked with the element of every dispatched
/// event of the kind it was registered for.
pub type EventHandler<'h> = Box<dyn FnMut(&Element) + 'h>;

/// Handler registry: a fixed-size table indexed by event kind.
///
/// Built up front (by `ScannerBuilder` or directly via `register`) and
/// then treated as immutable by the scan: dispatching only needs `&mut`
/// to run the `FnMut` handlers, never to change the registration.
///
/// Handlers for one kind run in registration order. A kind with no
/// subscribers dispatches as a no-op; the `EventFlags` mask makes that
/// case a single bit test.
pub struct EventDispatcher<'h> {
    table: [Vec<EventHandler<'h>>; Event::KIND_COUNT],
    subscribed: EventFlags,
}

impl Default for EventDispatcher<'_> {
    fn default() -> Self {
        EventDispatcher {
            table: Default::default(),
            subscribed: EventFlags::empty(),
        }
    }
}

impl<'h> EventDispatcher<'h> {
    pub fn register(&mut self, event: Event, handler: EventHandler<'h>) {
        self.table[event.idx()].push(handler);
        self.subscribed |= EventFlags::from(event);
    }

    pub fn dispatch(&mut self, event: Event, element: &Element) {
        if !self.subscribed.contains(EventFlags::from(event)) {
            return;
        }

        for handler in &mut self.table[event.idx()] {
            handler(element);
        }
    }

    #[inline]
    pub fn has_subscribers(&self, event: Event) -> bool {
        self.subscribed.contains(EventFlags::from(event))
    }
}

impl EventSink for EventDispatcher<'_> {
    #[inline]
    fn emit(&mut self, event: Event, element: &Element) {
        self.dispatch(event, element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn dispatch_without_subscribers_is_a_no_op() {
        let mut dispatcher = EventDispatcher::default();

        assert!(!dispatcher.has_subscribers(Event::OpenTag));

        // Must not panic or invoke anything.
        dispatcher.dispatch(Event::OpenTag, &Element::tag("a".into()));
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let seen = RefCell::new(Vec::new());
        let mut dispatcher = EventDispatcher::default();

        dispatcher.register(Event::TextValue, Box::new(|_| seen.borrow_mut().push(1)));
        dispatcher.register(Event::TextValue, Box::new(|_| seen.borrow_mut().push(2)));

        dispatcher.dispatch(Event::TextValue, &Element::text("x"));

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn dispatch_only_reaches_the_registered_kind() {
        let count = RefCell::new(0);
        let mut dispatcher = EventDispatcher::default();

        dispatcher.register(Event::OpenTag, Box::new(|_| *count.borrow_mut() += 1));

        dispatcher.dispatch(Event::CloseTag, &Element::tag("a".into()));
        dispatcher.dispatch(Event::OpenTag, &Element::tag("a".into()));

        assert_eq!(*count.borrow(), 1);
    }
}
