//! # Task sources: where a run's work items come from.
//!
//! [`TaskSource`] is the typed rendition of the three-way input contract:
//! an explicit ordered list, a synthesized `1..=n` sequence, or unbounded
//! per-worker generation. Exactly one interpretation applies per run, and
//! the enum makes that statically true.
//!
//! ## Synthesis
//! [`TaskSource::count`] materializes task ids eagerly, so the dispatcher
//! partitions a plain list and carries no conversion bound itself. The
//! conversion (`T: From<u64>`) is captured here, at construction.
//!
//! A count of zero produces no finite tasks and collapses to unbounded
//! mode. An explicit empty *list* does not: it stays a finite empty batch
//! (every worker gets an empty slice), because arbitrary task types cannot
//! be minted from a counter.

/// Where the tasks of a [`Workload`](crate::Workload) come from.
///
/// Build one with [`TaskSource::list`], [`TaskSource::count`],
/// [`TaskSource::unbounded`], or [`TaskSource::unbounded_with`].
pub struct TaskSource<T> {
    pub(crate) kind: SourceKind<T>,
}

/// Resolved interpretation of a task source.
pub(crate) enum SourceKind<T> {
    /// A concrete ordered batch, to be partitioned across workers.
    List(Vec<T>),
    /// No finite batch: each worker mints task ids 1, 2, 3, … itself.
    Unbounded { mint: fn(u64) -> T },
}

impl<T> TaskSource<T> {
    /// An explicit ordered task list.
    ///
    /// An empty list is a finite empty batch: every worker receives an
    /// empty slice and the task callback is never invoked.
    pub fn list(tasks: Vec<T>) -> Self {
        Self {
            kind: SourceKind::List(tasks),
        }
    }

    /// Unbounded generation with an explicit mint function.
    ///
    /// Each worker independently produces `mint(1), mint(2), mint(3), …`
    /// until its process is signaled or the workload's cancellation token
    /// fires. Prefer [`TaskSource::unbounded`] when `T: From<u64>`.
    pub fn unbounded_with(mint: fn(u64) -> T) -> Self {
        Self {
            kind: SourceKind::Unbounded { mint },
        }
    }

    /// Returns `true` for the unbounded-generation interpretation.
    pub fn is_unbounded(&self) -> bool {
        matches!(self.kind, SourceKind::Unbounded { .. })
    }

    /// Number of tasks in the finite interpretation, `None` if unbounded.
    pub fn len(&self) -> Option<usize> {
        match &self.kind {
            SourceKind::List(tasks) => Some(tasks.len()),
            SourceKind::Unbounded { .. } => None,
        }
    }

    /// Returns `true` for a finite source with no tasks.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

impl<T: From<u64>> TaskSource<T> {
    /// Synthesizes the task ids `1..=n` as a finite list.
    ///
    /// `count(0)` produces no finite tasks and is treated as
    /// [`unbounded`](TaskSource::unbounded) mode.
    ///
    /// # Example
    /// ```
    /// use taskfan::TaskSource;
    ///
    /// let src: TaskSource<u64> = TaskSource::count(5);
    /// assert_eq!(src.len(), Some(5));
    ///
    /// let src: TaskSource<u64> = TaskSource::count(0);
    /// assert!(src.is_unbounded());
    /// ```
    pub fn count(n: u64) -> Self {
        if n == 0 {
            return Self::unbounded();
        }
        Self {
            kind: SourceKind::List((1..=n).map(T::from).collect()),
        }
    }

    /// Unbounded generation of task ids minted via `T::from`.
    pub fn unbounded() -> Self {
        Self::unbounded_with(T::from)
    }
}
