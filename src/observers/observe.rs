//! # Core observer trait
//!
//! `Observe` is the extension point for plugging custom event handlers into
//! the dispatcher. Observers are invoked synchronously on the dispatcher
//! thread, in registration order, by the
//! [`ObserverSet`](crate::observers::ObserverSet).
//!
//! ## Contract
//! - Implementations run on the dispatch path: a slow observer delays the
//!   spawn/wait loop. Keep handlers short.
//! - Handlers must not fork or spawn threads; the dispatcher forks between
//!   emissions and only the calling thread survives in children.
//!
//! ## Example
//! ```rust
//! use taskfan::{Event, EventKind, Observe};
//!
//! struct ExitCounter(std::sync::atomic::AtomicUsize);
//!
//! impl Observe for ExitCounter {
//!     fn on_event(&self, event: &Event) {
//!         if event.kind == EventKind::WorkerExited {
//!             self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "exit-counter" }
//! }
//! ```

use crate::events::Event;

/// Contract for dispatch event observers.
///
/// Called synchronously from the dispatcher thread for every emitted event.
pub trait Observe: Send + Sync {
    /// Handle a single event.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    fn on_event(&self, event: &Event);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
