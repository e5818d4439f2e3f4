//! # Dispatcher configuration.
//!
//! Provides [`Config`], the settings record consumed by
//! [`Dispatcher`](crate::Dispatcher).
//!
//! ## Sentinel values
//! - `workers = 0` → autodetect (number of logical processors on the host)
//!
//! The effective worker count is always coerced to at least 1, whatever the
//! probe reports.

/// Configuration for a dispatch run.
///
/// ## Field semantics
/// - `debug`: wire the built-in [`LogWriter`](crate::LogWriter) into the
///   observer set at build time; explicitly registered observers receive
///   events regardless of this flag.
/// - `workers`: number of worker processes to fork (`0` = autodetect).
///
/// ## Notes
/// All fields are public for flexibility. Prefer [`Config::worker_count`]
/// over reading `workers` directly to avoid sprinkling sentinel checks
/// across the codebase.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Print dispatch lifecycle events to stdout.
    ///
    /// When set, [`DispatcherBuilder::build`](crate::DispatcherBuilder::build)
    /// appends a [`LogWriter`](crate::LogWriter) to the observer set.
    pub debug: bool,

    /// Number of worker processes to fork.
    ///
    /// - `0` = autodetect from the host's logical processor count
    /// - `n > 0` = exactly `n` workers
    pub workers: usize,
}

impl Config {
    /// Resolves the effective worker count.
    ///
    /// `detected` is the probed logical processor count, consulted only when
    /// `workers` is the autodetect sentinel. The result is never below 1.
    ///
    /// # Example
    /// ```
    /// use taskfan::Config;
    ///
    /// let mut cfg = Config::default();
    /// assert_eq!(cfg.worker_count(8), 8);   // sentinel → probe result
    ///
    /// cfg.workers = 3;
    /// assert_eq!(cfg.worker_count(8), 3);   // explicit wins
    /// ```
    #[inline]
    pub fn worker_count(&self, detected: usize) -> usize {
        let n = if self.workers == 0 {
            detected
        } else {
            self.workers
        };
        n.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `debug = false` (no stdout writer)
    /// - `workers = 0` (autodetect)
    fn default() -> Self {
        Self {
            debug: false,
            workers: 0,
        }
    }
}
