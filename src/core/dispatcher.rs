//! # Dispatcher: validates, partitions, forks, and waits.
//!
//! The [`Dispatcher`] owns the run configuration, the observer set, and the
//! core-count probe. [`Dispatcher::run`] is the single entry operation of
//! the crate.
//!
//! ## Run pipeline
//! ```text
//! Workload<C, T>
//!   │ validate: at least one callback          → ConfigError::NoCallbacks
//!   │ workers:  cfg.worker_count(probe.cores())  (always ≥ 1)
//!   │ resolve:  List → partition(tasks, workers) → WorkerPlan::Finite
//!   │           Unbounded                        → WorkerPlan::Unbounded
//!   ▼
//! spawn loop (worker id 1..=N):
//!   fork() ──► parent: table.record(worker, pid), emit WorkerForked, next
//!         └──► child:  run_worker(...), process::exit(0)   — never loops
//!   fork error: emit SpawnFailed, return DispatchError::Spawn
//!               (earlier children keep running, unsupervised)
//!   ▼
//! wait loop (spawn order):
//!   waitpid(pid) ──► mark Exited, emit WorkerExited
//!   ▼
//! Ok(()) once every record has been reaped
//! ```
//!
//! Wait order is spawn order, not exit order: each `waitpid` targets one
//! specific pid and returns as soon as that pid is done, so the overall run
//! completes with the slowest worker regardless of order — only the
//! ordering of `WorkerExited` events is affected.

use std::process;

use nix::sys::wait::waitpid;
use nix::unistd::{fork, ForkResult};

use crate::config::Config;
use crate::core::builder::DispatcherBuilder;
use crate::core::probe::CoreProbe;
use crate::core::table::{ProcessState, ProcessTable};
use crate::core::worker::{run_worker, WorkerPlan};
use crate::error::DispatchError;
use crate::events::{Event, EventKind};
use crate::observers::ObserverSet;
use crate::partition::partition;
use crate::tasks::{SourceKind, Workload};

/// Forks a batch of worker processes and waits for all of them.
///
/// Construct with [`Dispatcher::new`] (config only) or
/// [`Dispatcher::builder`] (observers, probe injection). The dispatcher is
/// re-entrant: `run` holds no state between calls beyond the cached core
/// probe.
pub struct Dispatcher {
    pub(crate) cfg: Config,
    pub(crate) observers: ObserverSet,
    pub(crate) probe: CoreProbe,
}

impl Dispatcher {
    /// Creates a dispatcher with the given configuration and no observers
    /// beyond what `cfg.debug` wires in.
    pub fn new(cfg: Config) -> Self {
        Self::builder(cfg).build()
    }

    /// Starts a builder for attaching observers or a custom core probe.
    pub fn builder(cfg: Config) -> DispatcherBuilder {
        DispatcherBuilder::new(cfg)
    }

    /// The dispatcher's configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Dispatches the workload and blocks until every worker has exited.
    ///
    /// Forks one process per worker id `1..=N` and waits for each in spawn
    /// order. Inside each child, the process-level callback runs once with
    /// the full partition set, then the task-level callback walks the
    /// child's own slice (or mints unbounded ids); the child then exits and
    /// never returns here.
    ///
    /// # Errors
    /// - [`DispatchError::Config`] — neither callback set; nothing forked.
    /// - [`DispatchError::Spawn`] — the OS rejected a fork mid-loop. The
    ///   run stops immediately; workers forked in earlier iterations are
    ///   left running and are **not** waited on or terminated.
    /// - [`DispatchError::Wait`] — `waitpid` failed for a forked worker.
    ///
    /// # Caveats
    /// Must be called from a single-threaded process: `fork` duplicates
    /// only the calling thread, and any other thread's locks stay frozen
    /// in the children.
    pub fn run<C, T>(&self, load: Workload<C, T>) -> Result<(), DispatchError> {
        load.callbacks().validate()?;

        let workers = self.cfg.worker_count(self.probe.cores());
        let (context, source, callbacks, cancel) = load.into_parts();

        let plan = match source.kind {
            SourceKind::List(tasks) => WorkerPlan::Finite(partition(tasks, workers)?),
            SourceKind::Unbounded { mint } => WorkerPlan::Unbounded { mint },
        };

        let mut table = ProcessTable::new();

        for worker in 1..=workers {
            // SAFETY: the dispatcher is single-threaded by contract and the
            // child arm calls nothing but the workload callbacks before
            // exiting, so no lock or allocator state from other threads can
            // be inherited mid-transition.
            match unsafe { fork() } {
                Ok(ForkResult::Parent { child }) => {
                    table.record(worker, child);
                    self.observers.emit(
                        &Event::new(EventKind::WorkerForked)
                            .with_worker(worker)
                            .with_pid(child.as_raw()),
                    );
                }
                Ok(ForkResult::Child) => {
                    run_worker(&context, worker, &plan, &callbacks, &cancel);
                    // The child must never re-enter the spawn loop.
                    process::exit(0);
                }
                Err(errno) => {
                    self.observers.emit(
                        &Event::new(EventKind::SpawnFailed)
                            .with_worker(worker)
                            .with_reason(errno.desc()),
                    );
                    return Err(DispatchError::Spawn {
                        worker,
                        source: errno,
                    });
                }
            }
        }

        for idx in 0..table.len() {
            let rec = table.records()[idx];
            if rec.state == ProcessState::Exited {
                continue;
            }
            match waitpid(rec.pid, None) {
                Ok(_status) => {
                    table.mark_exited(idx);
                    self.observers.emit(
                        &Event::new(EventKind::WorkerExited)
                            .with_worker(rec.worker)
                            .with_pid(rec.pid.as_raw()),
                    );
                }
                Err(errno) => {
                    return Err(DispatchError::Wait {
                        worker: rec.worker,
                        source: errno,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::observers::Observe;
    use crate::tasks::TaskSource;
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_no_callbacks_fails_before_any_fork() {
        let kinds = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = Dispatcher::builder(Config {
            debug: false,
            workers: 2,
        })
        .with_observers(vec![Arc::new(KindRecorder(kinds.clone()))])
        .build();
        let load: Workload<(), u64> = Workload::new((), TaskSource::count(4));

        let err = dispatcher.run(load).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Config(ConfigError::NoCallbacks)
        ));
        // Nothing was forked: no process events of any kind.
        assert!(kinds.lock().unwrap().is_empty());
    }

    #[test]
    fn test_workers_fall_back_to_the_injected_probe() {
        let dispatcher = Dispatcher::builder(Config::default())
            .with_core_probe(|| 3)
            .build();
        assert_eq!(dispatcher.cfg.worker_count(dispatcher.probe.cores()), 3);
    }

    // The fork tests below exercise the real spawn/wait path. Children
    // communicate with the asserting parent through per-worker files.

    #[test]
    fn test_each_worker_processes_exactly_its_slice() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();

        let dispatcher = Dispatcher::new(Config {
            debug: false,
            workers: 3,
        });
        let load = Workload::new(root.clone(), TaskSource::count(9)).on_task(
            |root: &std::path::PathBuf, worker, task: &u64| {
                let mut f = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(root.join(format!("worker-{worker}")))
                    .unwrap();
                write!(f, "{task},").unwrap();
            },
        );

        dispatcher.run(load).unwrap();

        let read = |w: usize| std::fs::read_to_string(root.join(format!("worker-{w}"))).unwrap();
        assert_eq!(read(1), "1,2,3,");
        assert_eq!(read(2), "4,5,6,");
        assert_eq!(read(3), "7,8,9,");
    }

    struct KindRecorder(Arc<Mutex<Vec<EventKind>>>);

    impl Observe for KindRecorder {
        fn on_event(&self, event: &Event) {
            self.0.lock().unwrap().push(event.kind);
        }
    }

    #[test]
    fn test_forked_events_precede_exited_events() {
        let kinds = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = Dispatcher::builder(Config {
            debug: false,
            workers: 2,
        })
        .with_observers(vec![Arc::new(KindRecorder(kinds.clone()))])
        .build();

        let load: Workload<(), u64> =
            Workload::new((), TaskSource::count(2)).on_task(|_: &(), _, _: &u64| {});
        dispatcher.run(load).unwrap();

        assert_eq!(
            *kinds.lock().unwrap(),
            vec![
                EventKind::WorkerForked,
                EventKind::WorkerForked,
                EventKind::WorkerExited,
                EventKind::WorkerExited,
            ]
        );
    }
}
