//! Error types used by the taskfan dispatcher.
//!
//! This module defines two main error enums:
//!
//! - [`ConfigError`] — invalid workload or partition input, caught before
//!   any process is forked.
//! - [`DispatchError`] — failures of a dispatch run itself (configuration,
//!   fork, wait).
//!
//! Both types provide `as_label` for logging/metrics. Every failure is
//! fatal: the dispatcher stops immediately and never retries.

use nix::errno::Errno;
use thiserror::Error;

/// # Errors detected while validating a workload.
///
/// These are raised before any process is forked; a run that fails with a
/// `ConfigError` has spawned nothing.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a process-level nor a task-level callback was supplied.
    #[error("no callback configured: set at least one of process/task")]
    NoCallbacks,

    /// A partition into zero parts was requested.
    #[error("cannot partition tasks into zero parts")]
    ZeroParts,
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskfan::ConfigError;
    ///
    /// assert_eq!(ConfigError::NoCallbacks.as_label(), "config_no_callbacks");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::NoCallbacks => "config_no_callbacks",
            ConfigError::ZeroParts => "config_zero_parts",
        }
    }
}

/// # Errors produced by a dispatch run.
///
/// These represent fatal failures of the run: an invalid workload, a fork
/// that the OS rejected mid-loop, or a wait that could not complete. There
/// is no recoverable variant — the dispatcher never retries.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The workload failed validation (nothing was forked).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The OS process-duplication call failed mid-loop.
    ///
    /// Workers forked in earlier iterations are left running unsupervised;
    /// the run does not wait on or terminate them.
    #[error("failed to fork worker {worker}: {source}")]
    Spawn {
        /// 1-based id of the worker whose fork failed.
        worker: usize,
        /// The errno reported by the OS.
        source: Errno,
    },

    /// Waiting on a forked worker failed.
    #[error("failed to wait on worker {worker}: {source}")]
    Wait {
        /// 1-based id of the worker whose wait failed.
        worker: usize,
        /// The errno reported by the OS.
        source: Errno,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskfan::{ConfigError, DispatchError};
    ///
    /// let err = DispatchError::Config(ConfigError::NoCallbacks);
    /// assert_eq!(err.as_label(), "config_no_callbacks");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::Config(e) => e.as_label(),
            DispatchError::Spawn { .. } => "dispatch_spawn_failed",
            DispatchError::Wait { .. } => "dispatch_wait_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::Config(e) => e.to_string(),
            DispatchError::Spawn { worker, source } => {
                format!("fork failed for worker {worker}: {source}")
            }
            DispatchError::Wait { worker, source } => {
                format!("wait failed for worker {worker}: {source}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent_in_dispatch_error() {
        let err = DispatchError::from(ConfigError::NoCallbacks);
        assert_eq!(
            err.to_string(),
            "no callback configured: set at least one of process/task"
        );
    }

    #[test]
    fn test_spawn_label_and_message_name_the_worker() {
        let err = DispatchError::Spawn {
            worker: 3,
            source: Errno::EAGAIN,
        };
        assert_eq!(err.as_label(), "dispatch_spawn_failed");
        assert!(err.as_message().contains("worker 3"));
    }
}
