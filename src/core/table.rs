//! # Process table: the dispatcher's registry of forked workers.
//!
//! One [`ProcessRecord`] per successful fork, in spawn order. The table is
//! owned exclusively by the dispatch run: records are created in the spawn
//! loop, marked [`Exited`](ProcessState::Exited) in the wait loop, and
//! dropped when the run returns.

use nix::unistd::Pid;

/// Lifecycle state of a forked worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessState {
    /// Forked, not yet reaped.
    Spawned,
    /// Reaped by a successful wait.
    Exited,
}

/// One forked worker process.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProcessRecord {
    /// 1-based worker id.
    pub(crate) worker: usize,
    /// OS pid of the child.
    pub(crate) pid: Pid,
    /// Current lifecycle state.
    pub(crate) state: ProcessState,
}

/// Spawn-ordered registry of this run's workers.
#[derive(Debug, Default)]
pub(crate) struct ProcessTable {
    records: Vec<ProcessRecord>,
}

impl ProcessTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a freshly forked worker.
    pub(crate) fn record(&mut self, worker: usize, pid: Pid) {
        self.records.push(ProcessRecord {
            worker,
            pid,
            state: ProcessState::Spawned,
        });
    }

    /// Marks the record at `idx` (spawn order) as exited.
    pub(crate) fn mark_exited(&mut self, idx: usize) {
        if let Some(rec) = self.records.get_mut(idx) {
            rec.state = ProcessState::Exited;
        }
    }

    /// Records in spawn order.
    pub(crate) fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_keep_spawn_order() {
        let mut table = ProcessTable::new();
        table.record(1, Pid::from_raw(100));
        table.record(2, Pid::from_raw(101));

        let workers: Vec<usize> = table.records().iter().map(|r| r.worker).collect();
        assert_eq!(workers, vec![1, 2]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_mark_exited_flips_state() {
        let mut table = ProcessTable::new();
        table.record(1, Pid::from_raw(100));
        assert_eq!(table.records()[0].state, ProcessState::Spawned);

        table.mark_exited(0);
        assert_eq!(table.records()[0].state, ProcessState::Exited);
    }
}
