//! # Logical-CPU probe for the default worker count.
//!
//! [`CoreProbe`] resolves the host's logical processor count once and
//! caches it for the life of the dispatcher instance. Detection failure
//! yields 1. The probe is dispatcher-instance state (not a process-global
//! singleton), and the detection function is injectable so tests and
//! embedders can pin the result.

use std::sync::OnceLock;

/// Instance-cached logical processor probe.
pub(crate) struct CoreProbe {
    cached: OnceLock<usize>,
    detect: fn() -> usize,
}

impl CoreProbe {
    /// A probe backed by [`std::thread::available_parallelism`].
    pub(crate) fn new() -> Self {
        Self::with_detect(detect_available_parallelism)
    }

    /// A probe backed by a custom detection function.
    pub(crate) fn with_detect(detect: fn() -> usize) -> Self {
        Self {
            cached: OnceLock::new(),
            detect,
        }
    }

    /// The logical processor count, detected once and cached.
    pub(crate) fn cores(&self) -> usize {
        *self.cached.get_or_init(self.detect)
    }
}

fn detect_available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
