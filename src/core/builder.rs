//! Builder for constructing a [`Dispatcher`] with optional features.

use std::sync::Arc;

use crate::config::Config;
use crate::core::dispatcher::Dispatcher;
use crate::core::probe::CoreProbe;
use crate::observers::{LogWriter, Observe, ObserverSet};

/// Builder for constructing a [`Dispatcher`].
pub struct DispatcherBuilder {
    cfg: Config,
    observers: Vec<Arc<dyn Observe>>,
    detect: Option<fn() -> usize>,
}

impl DispatcherBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            observers: Vec::new(),
            detect: None,
        }
    }

    /// Sets event observers.
    ///
    /// Observers receive dispatch lifecycle events (forked, exited,
    /// spawn-failed) synchronously on the dispatcher thread, in
    /// registration order. They receive events regardless of `cfg.debug`.
    pub fn with_observers(mut self, observers: Vec<Arc<dyn Observe>>) -> Self {
        self.observers = observers;
        self
    }

    /// Replaces the core-count detection function.
    ///
    /// The default probes [`std::thread::available_parallelism`]. Override
    /// to pin the autodetected worker count in tests or embeddings.
    pub fn with_core_probe(mut self, detect: fn() -> usize) -> Self {
        self.detect = Some(detect);
        self
    }

    /// Builds the dispatcher.
    ///
    /// When `cfg.debug` is set, the built-in [`LogWriter`] is appended to
    /// the observer set so every run prints its lifecycle to stdout.
    pub fn build(self) -> Dispatcher {
        let mut observers = ObserverSet::new(self.observers);
        if self.cfg.debug {
            observers.push(Arc::new(LogWriter));
        }

        let probe = match self.detect {
            Some(detect) => CoreProbe::with_detect(detect),
            None => CoreProbe::new(),
        };

        Dispatcher {
            cfg: self.cfg,
            observers,
            probe,
        }
    }
}
