//! # Workload: everything one dispatch run needs.
//!
//! [`Workload`] bundles the opaque context value, the task source, the
//! callback set, and the cancellation token gating unbounded generation.
//!
//! A workload is built fluently and handed to
//! [`Dispatcher::run`](crate::Dispatcher::run):
//!
//! ```rust
//! use taskfan::{TaskSource, Workload};
//!
//! let load = Workload::new("shared", TaskSource::list(vec!["a", "b", "c"]))
//!     .on_task(|ctx: &&str, worker, task: &&str| {
//!         let _ = (ctx, worker, task);
//!     });
//! ```
//!
//! ## Context semantics
//! The context is copied into each worker by `fork` (copy-on-write), so
//! worker-side mutations are never visible to the parent or to siblings.

use tokio_util::sync::CancellationToken;

use crate::tasks::callbacks::{Callbacks, ProcessCallback, TaskCallback};
use crate::tasks::source::TaskSource;

/// One dispatch run's input: context, tasks, callbacks, cancellation.
pub struct Workload<C, T> {
    context: C,
    source: TaskSource<T>,
    callbacks: Callbacks<C, T>,
    cancel: CancellationToken,
}

impl<C, T> Workload<C, T> {
    /// Creates a workload with no callbacks attached yet.
    ///
    /// At least one of [`on_process`](Workload::on_process) /
    /// [`on_task`](Workload::on_task) must be attached before the workload
    /// passes validation.
    pub fn new(context: C, source: TaskSource<T>) -> Self {
        Self {
            context,
            source,
            callbacks: Callbacks::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Attaches the process-level callback.
    pub fn on_process(mut self, cb: impl ProcessCallback<C, T> + 'static) -> Self {
        self.callbacks = self.callbacks.with_process(cb);
        self
    }

    /// Attaches the task-level callback.
    pub fn on_task(mut self, cb: impl TaskCallback<C, T> + 'static) -> Self {
        self.callbacks = self.callbacks.with_task(cb);
        self
    }

    /// Replaces the whole callback set.
    pub fn with_callbacks(mut self, callbacks: Callbacks<C, T>) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Wires an external cancellation token.
    ///
    /// The token is the cancellation point of the unbounded generation
    /// loop, checked before every minted task. A fresh (never cancelled)
    /// token — the default — means the loop runs until the worker process
    /// is signaled externally.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// The callback set.
    pub fn callbacks(&self) -> &Callbacks<C, T> {
        &self.callbacks
    }

    /// The task source.
    pub fn source(&self) -> &TaskSource<T> {
        &self.source
    }

    /// Splits the workload into its parts for the dispatch run.
    pub(crate) fn into_parts(self) -> (C, TaskSource<T>, Callbacks<C, T>, CancellationToken) {
        (self.context, self.source, self.callbacks, self.cancel)
    }
}
