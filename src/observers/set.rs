//! # Ordered fan-out of events to observers.
//!
//! [`ObserverSet`] holds the observers registered on a dispatcher and
//! delivers each event to every observer, in registration order, on the
//! dispatcher thread.
//!
//! ## Rules
//! - **Synchronous delivery**: no queues and no worker threads. The spawn
//!   loop forks between emissions, and only the calling thread survives in
//!   a child, so background delivery machinery would be lost or wedged
//!   mid-state there.
//! - **Parent only**: children never emit; the set is simply never touched
//!   on the child side of the fork.

use std::sync::Arc;

use crate::events::Event;
use crate::observers::Observe;

/// The dispatcher's registered observers.
#[derive(Clone, Default)]
pub struct ObserverSet {
    observers: Vec<Arc<dyn Observe>>,
}

impl ObserverSet {
    /// Creates a set from the given observers, preserving order.
    pub fn new(observers: Vec<Arc<dyn Observe>>) -> Self {
        Self { observers }
    }

    /// Appends an observer at the end of the delivery order.
    pub fn push(&mut self, observer: Arc<dyn Observe>) {
        self.observers.push(observer);
    }

    /// Delivers `event` to every observer in registration order.
    pub fn emit(&self, event: &Event) {
        for obs in &self.observers {
            obs.on_event(event);
        }
    }

    /// Returns `true` when no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use std::sync::Mutex;

    struct Recorder {
        tag: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Observe for Recorder {
        fn on_event(&self, _event: &Event) {
            self.seen.lock().unwrap().push(self.tag);
        }
    }

    #[test]
    fn test_emit_reaches_all_observers_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let set = ObserverSet::new(vec![
            Arc::new(Recorder {
                tag: "first",
                seen: seen.clone(),
            }),
            Arc::new(Recorder {
                tag: "second",
                seen: seen.clone(),
            }),
        ]);

        set.emit(&Event::new(EventKind::WorkerForked));
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_empty_set_emits_to_nobody() {
        let set = ObserverSet::default();
        assert!(set.is_empty());
        set.emit(&Event::new(EventKind::WorkerExited));
    }
}
