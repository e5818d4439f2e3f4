//! # Simple logging observer for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format. It is
//! the observer wired in by [`Config::debug`](crate::Config), and is
//! primarily useful for development and the demo binaries.
//!
//! ## Output format
//! ```text
//! [forked] worker=1 pid=51234
//! [forked] worker=2 pid=51235
//! [exited] worker=1 pid=51234
//! [spawn-failed] worker=3 reason="EAGAIN: Resource temporarily unavailable"
//! ```

use crate::events::{Event, EventKind};
use crate::observers::Observe;

/// Simple stdout logging observer.
///
/// Wired in automatically when `Config::debug` is set. Prints one line per
/// event for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Observe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

impl Observe for LogWriter {
    fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::WorkerForked => {
                if let (Some(worker), Some(pid)) = (e.worker, e.pid) {
                    println!("[forked] worker={worker} pid={pid}");
                }
            }
            EventKind::WorkerExited => {
                if let (Some(worker), Some(pid)) = (e.worker, e.pid) {
                    println!("[exited] worker={worker} pid={pid}");
                }
            }
            EventKind::SpawnFailed => {
                println!(
                    "[spawn-failed] worker={:?} reason={:?}",
                    e.worker, e.reason
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
