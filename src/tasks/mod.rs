//! # Task inputs: sources, callbacks, and the per-run workload bundle.
//!
//! This module provides the types a caller assembles before dispatching:
//! - [`TaskSource`] - explicit list, synthesized `1..=n`, or unbounded ids
//! - [`ProcessCallback`] / [`TaskCallback`] - the two worker capabilities
//! - [`Callbacks`] - the optional pair (at least one required)
//! - [`Workload`] - context + source + callbacks + cancellation token

mod callbacks;
mod source;
mod workload;

pub use callbacks::{
    Callbacks, ProcessCallback, ProcessCallbackRef, TaskCallback, TaskCallbackRef,
};
pub use source::TaskSource;
pub use workload::Workload;

pub(crate) use source::SourceKind;
