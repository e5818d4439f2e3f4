//! # Dispatch lifecycle events.
//!
//! The [`EventKind`] enum classifies what happened; the [`Event`] struct
//! carries the metadata (worker id, OS pid, reason, timestamp, sequence).
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Events are emitted by the dispatcher thread only (never
//! by forked children), so for a single run `seq` order is emission order.
//!
//! ## Example
//! ```rust
//! use taskfan::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::WorkerForked).with_worker(1).with_pid(4242);
//!
//! assert_eq!(ev.kind, EventKind::WorkerForked);
//! assert_eq!(ev.worker, Some(1));
//! assert_eq!(ev.pid, Some(4242));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of dispatch events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A worker process has been forked.
    ///
    /// Sets:
    /// - `worker`: 1-based worker id
    /// - `pid`: OS pid of the child
    WorkerForked,

    /// A worker process has exited and was reaped by the dispatcher.
    ///
    /// Sets:
    /// - `worker`: 1-based worker id
    /// - `pid`: OS pid of the child
    WorkerExited,

    /// The OS rejected a fork; the run is aborting.
    ///
    /// Sets:
    /// - `worker`: 1-based id of the worker that could not be forked
    /// - `reason`: errno description
    SpawnFailed,
}

/// A single dispatch event with metadata.
///
/// Construct with [`Event::new`] and attach fields with the `with_*`
/// builders. `at` and `seq` are stamped at construction.
#[derive(Debug, Clone)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// 1-based worker id, when the event concerns a specific worker.
    pub worker: Option<usize>,
    /// OS pid of the worker process, when known.
    pub pid: Option<i32>,
    /// Free-form detail (e.g., errno description for [`EventKind::SpawnFailed`]).
    pub reason: Option<String>,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
}

impl Event {
    /// Creates an event of the given kind, stamping `at` and `seq`.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            worker: None,
            pid: None,
            reason: None,
            at: SystemTime::now(),
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
        }
    }

    /// Attaches the 1-based worker id.
    pub fn with_worker(mut self, worker: usize) -> Self {
        self.worker = Some(worker);
        self
    }

    /// Attaches the OS pid.
    pub fn with_pid(mut self, pid: i32) -> Self {
        self.pid = Some(pid);
        self
    }

    /// Attaches a free-form reason string.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_numbers_increase() {
        let a = Event::new(EventKind::WorkerForked);
        let b = Event::new(EventKind::WorkerExited);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_builders_attach_fields() {
        let ev = Event::new(EventKind::SpawnFailed)
            .with_worker(2)
            .with_reason("EAGAIN");
        assert_eq!(ev.worker, Some(2));
        assert_eq!(ev.pid, None);
        assert_eq!(ev.reason.as_deref(), Some("EAGAIN"));
    }
}
