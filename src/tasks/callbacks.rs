//! # Worker callbacks: the two narrow capabilities a workload can carry.
//!
//! A worker does its work through at most two hooks:
//!
//! - [`ProcessCallback`] — invoked **once per worker**, before any task
//!   iteration, with the *entire* partition set (every sibling's slice, not
//!   just the worker's own). This deliberately lets a worker introspect the
//!   whole run, e.g. for reporting.
//! - [`TaskCallback`] — invoked **once per task** of the worker's own
//!   slice, in slice order (or once per minted id in unbounded mode).
//!
//! Both are object-safe traits with blanket impls for plain closures, so
//! `|ctx, worker, task| …` works anywhere a callback is expected. The
//! shared handle types are [`ProcessCallbackRef`] / [`TaskCallbackRef`].
//!
//! At least one of the two must be present in a [`Callbacks`] set; a
//! workload with neither fails validation before anything is forked.

use std::sync::Arc;

use crate::error::ConfigError;

/// Per-worker hook: runs once in each worker process.
///
/// Receives the opaque context, the worker's 1-based id, and the full
/// partition set (empty in unbounded mode).
pub trait ProcessCallback<C, T>: Send + Sync {
    /// Invoked exactly once per worker, before task iteration.
    fn call(&self, context: &C, worker: usize, partitions: &[Vec<T>]);
}

/// Per-task hook: runs once for every task handed to a worker.
pub trait TaskCallback<C, T>: Send + Sync {
    /// Invoked once per task, in slice order.
    fn call(&self, context: &C, worker: usize, task: &T);
}

impl<C, T, F> ProcessCallback<C, T> for F
where
    F: Fn(&C, usize, &[Vec<T>]) + Send + Sync,
{
    fn call(&self, context: &C, worker: usize, partitions: &[Vec<T>]) {
        self(context, worker, partitions)
    }
}

impl<C, T, F> TaskCallback<C, T> for F
where
    F: Fn(&C, usize, &T) + Send + Sync,
{
    fn call(&self, context: &C, worker: usize, task: &T) {
        self(context, worker, task)
    }
}

/// Shared handle to a process-level callback.
pub type ProcessCallbackRef<C, T> = Arc<dyn ProcessCallback<C, T>>;

/// Shared handle to a task-level callback.
pub type TaskCallbackRef<C, T> = Arc<dyn TaskCallback<C, T>>;

/// The callback set of a workload: either, or both — never neither.
pub struct Callbacks<C, T> {
    process: Option<ProcessCallbackRef<C, T>>,
    task: Option<TaskCallbackRef<C, T>>,
}

impl<C, T> Default for Callbacks<C, T> {
    fn default() -> Self {
        Self {
            process: None,
            task: None,
        }
    }
}

impl<C, T> Callbacks<C, T> {
    /// An empty set. Invalid until at least one callback is attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the process-level callback.
    pub fn with_process(mut self, cb: impl ProcessCallback<C, T> + 'static) -> Self {
        self.process = Some(Arc::new(cb));
        self
    }

    /// Attaches the task-level callback.
    pub fn with_task(mut self, cb: impl TaskCallback<C, T> + 'static) -> Self {
        self.task = Some(Arc::new(cb));
        self
    }

    /// The process-level callback, if set.
    pub fn process(&self) -> Option<&ProcessCallbackRef<C, T>> {
        self.process.as_ref()
    }

    /// The task-level callback, if set.
    pub fn task(&self) -> Option<&TaskCallbackRef<C, T>> {
        self.task.as_ref()
    }

    /// Fails with [`ConfigError::NoCallbacks`] when neither hook is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.process.is_none() && self.task.is_none() {
            return Err(ConfigError::NoCallbacks);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neither_callback_fails_validation() {
        let cbs: Callbacks<(), u64> = Callbacks::new();
        assert_eq!(cbs.validate().unwrap_err(), ConfigError::NoCallbacks);
    }

    #[test]
    fn test_single_callback_is_valid() {
        let cbs: Callbacks<(), u64> = Callbacks::new().with_task(|_: &(), _, _: &u64| {});
        assert!(cbs.validate().is_ok());
        assert!(cbs.process().is_none());
        assert!(cbs.task().is_some());
    }

    #[test]
    fn test_closures_are_callable_through_the_trait() {
        let cbs: Callbacks<String, u64> = Callbacks::new()
            .with_process(|ctx: &String, worker, parts: &[Vec<u64>]| {
                assert_eq!(ctx, "ctx");
                assert_eq!(worker, 1);
                assert_eq!(parts.len(), 2);
            })
            .with_task(|ctx: &String, worker, task: &u64| {
                assert_eq!(ctx, "ctx");
                assert_eq!(worker, 1);
                assert_eq!(*task, 42);
            });

        let ctx = "ctx".to_string();
        cbs.process().unwrap().call(&ctx, 1, &[vec![42], vec![]]);
        cbs.task().unwrap().call(&ctx, 1, &42);
    }
}
