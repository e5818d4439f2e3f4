//! # taskfan
//!
//! **taskfan** distributes an ordered batch of work items across a fixed
//! number of isolated OS-level worker processes, then blocks until every
//! worker has finished.
//!
//! It targets batch-style fan-out (e.g., firing the same request with many
//! tokens) where workers need no inter-process communication — only a
//! private slice of the input and a shared read-only context value.
//!
//! ## Architecture
//! ```text
//!   Workload { context, TaskSource, Callbacks, cancel }
//!                        │
//!                        ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (single-threaded orchestrator)                  │
//! │  - validates callbacks (at least one required)              │
//! │  - resolves TaskSource (list / count / unbounded)           │
//! │  - partition(): balanced, order-preserving split            │
//! │  - fork loop: one child per worker id 1..=N                 │
//! │  - waitpid loop in spawn order                              │
//! │  - ObserverSet: forked / exited / spawn-failed events       │
//! └───────┬──────────────────┬──────────────────┬───────────────┘
//!     fork()             fork()             fork()
//!         ▼                  ▼                  ▼
//!   ┌───────────┐      ┌───────────┐      ┌───────────┐
//!   │ worker 1  │      │ worker 2  │      │ worker N  │
//!   └───────────┘      └───────────┘      └───────────┘
//!   process callback (sees the FULL partition set),
//!   then the worker's own slice through the task callback,
//!   then exit — a child never returns to the spawn loop.
//! ```
//!
//! After spawning, the dispatcher waits for every child in spawn order, so
//! the run returns when the slowest worker is done.
//!
//! ## Features
//! | Area           | Description                                              | Key types                                  |
//! |----------------|----------------------------------------------------------|--------------------------------------------|
//! | **Dispatch**   | Fork N workers, wait for all, strict parent/child split. | [`Dispatcher`], [`DispatcherBuilder`]      |
//! | **Tasks**      | Explicit list, synthesized `1..=n`, or unbounded ids.    | [`TaskSource`], [`Workload`]               |
//! | **Callbacks**  | Per-process and per-task hooks, closures or trait impls. | [`ProcessCallback`], [`TaskCallback`]      |
//! | **Partition**  | Balanced, order-preserving split of the batch.           | [`partition()`]                            |
//! | **Observers**  | Dispatch lifecycle events, stdout writer via `debug`.    | [`Observe`], [`ObserverSet`], [`LogWriter`]|
//! | **Errors**     | Typed fatal errors, no retries.                          | [`ConfigError`], [`DispatchError`]         |
//!
//! ## Example
//! ```no_run
//! use taskfan::{Config, Dispatcher, TaskSource, Workload};
//!
//! fn main() -> Result<(), taskfan::DispatchError> {
//!     let mut cfg = Config::default();
//!     cfg.debug = true;
//!     cfg.workers = 4;
//!
//!     let load = Workload::new("/v1/resource", TaskSource::count(100))
//!         .on_process(|uri: &&str, worker: usize, parts: &[Vec<u64>]| {
//!             println!("worker {worker} for {uri}: {} tasks", parts[worker - 1].len());
//!         })
//!         .on_task(|uri: &&str, worker, task: &u64| {
//!             println!("worker {worker}: request {uri} with task {task}");
//!         });
//!
//!     Dispatcher::new(cfg).run(load)
//! }
//! ```
//!
//! ## Caveats
//! - Unix only: the engine is built on `fork(2)`/`waitpid(2)`.
//! - The dispatcher must run on a single thread; `fork()` duplicates only
//!   the calling thread. Do not call [`Dispatcher::run`] from inside a
//!   multi-threaded runtime.
//! - A failed fork aborts the run and leaves already-spawned workers
//!   running unsupervised (see [`Dispatcher::run`]).

mod config;
mod core;
mod error;
mod events;
mod observers;
mod partition;
mod tasks;

// ---- Public re-exports ----

pub use config::Config;
pub use core::{Dispatcher, DispatcherBuilder};
pub use error::{ConfigError, DispatchError};
pub use events::{Event, EventKind};
pub use observers::{LogWriter, Observe, ObserverSet};
pub use partition::partition;
pub use tasks::{
    Callbacks, ProcessCallback, ProcessCallbackRef, TaskCallback, TaskCallbackRef, TaskSource,
    Workload,
};
