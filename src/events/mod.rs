//! Dispatch events: the data model for run observability.
//!
//! This module groups the event **data model** consumed by observers
//! registered on the dispatcher.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] — event classification and payload metadata
//!
//! ## Quick reference
//! - **Publisher**: the dispatcher (parent process only; forked children
//!   never emit events).
//! - **Consumers**: observers registered via
//!   [`DispatcherBuilder::with_observers`](crate::DispatcherBuilder::with_observers),
//!   fanned out synchronously by [`ObserverSet`](crate::ObserverSet).

mod event;

pub use event::{Event, EventKind};
