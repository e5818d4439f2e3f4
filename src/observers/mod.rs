//! # Event observers for the dispatcher.
//!
//! This module provides the [`Observe`] trait, the [`ObserverSet`] fan-out,
//! and the built-in [`LogWriter`] used by the debug flag.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Dispatcher ── emit(&Event) ──► ObserverSet (ordered, synchronous)
//!                                      │
//!                                 ┌────┴────┬─────────┐
//!                                 ▼         ▼         ▼
//!                             LogWriter  Metrics   Custom ...
//! ```
//!
//! Delivery is synchronous on the dispatcher thread: the spawn loop forks
//! between emissions, so queued/threaded delivery is off the table (only
//! the forking thread survives in children).
//!
//! ## Implementing custom observers
//! ```rust
//! use taskfan::{Event, EventKind, Observe};
//!
//! struct Metrics;
//!
//! impl Observe for Metrics {
//!     fn on_event(&self, event: &Event) {
//!         if event.kind == EventKind::SpawnFailed {
//!             // increment failure counter
//!         }
//!     }
//! }
//! ```

mod log;
mod observe;
mod set;

pub use log::LogWriter;
pub use observe::Observe;
pub use set::ObserverSet;
