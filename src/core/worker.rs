//! # Worker runtime: what runs inside a forked child.
//!
//! [`run_worker`] drives one worker through the two-callback protocol:
//!
//! 1. The process-level callback, if set, runs exactly once with the
//!    **entire** partition set — every sibling's slice, not just this
//!    worker's. In unbounded mode the set is empty.
//! 2. The task-level callback, if set, then runs once per task of this
//!    worker's own slice, in slice order — or, in unbounded mode, once per
//!    minted id `1, 2, 3, …` until the cancellation token fires.
//!
//! The function itself is plain and returns normally; the dispatcher's
//! child arm exits the process immediately after it. Keeping exit out of
//! here lets tests drive the protocol in-process.

use tokio_util::sync::CancellationToken;

use crate::tasks::Callbacks;

/// The resolved work handed to every worker.
pub(crate) enum WorkerPlan<T> {
    /// Partitioned batch: one slice per worker, in worker-id order.
    Finite(Vec<Vec<T>>),
    /// No finite batch: mint task ids until cancelled or killed.
    Unbounded { mint: fn(u64) -> T },
}

impl<T> WorkerPlan<T> {
    /// The full partition set (empty in unbounded mode).
    pub(crate) fn partitions(&self) -> &[Vec<T>] {
        match self {
            WorkerPlan::Finite(parts) => parts,
            WorkerPlan::Unbounded { .. } => &[],
        }
    }
}

/// Executes one worker's callback protocol.
///
/// `worker` is the 1-based id; `plan` is shared by all workers of the run
/// (each child holds its own fork-copied instance).
pub(crate) fn run_worker<C, T>(
    context: &C,
    worker: usize,
    plan: &WorkerPlan<T>,
    callbacks: &Callbacks<C, T>,
    cancel: &CancellationToken,
) {
    if let Some(cb) = callbacks.process() {
        cb.call(context, worker, plan.partitions());
    }

    let Some(cb) = callbacks.task() else {
        return;
    };

    match plan {
        WorkerPlan::Finite(parts) => {
            if let Some(slice) = parts.get(worker - 1) {
                for task in slice {
                    cb.call(context, worker, task);
                }
            }
        }
        WorkerPlan::Unbounded { mint } => {
            let mut id: u64 = 1;
            while !cancel.is_cancelled() {
                let task = mint(id);
                cb.call(context, worker, &task);
                id += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn three_by_nine() -> WorkerPlan<u64> {
        WorkerPlan::Finite(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])
    }

    #[test]
    fn test_task_callback_walks_own_slice_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let callbacks = {
            let seen = seen.clone();
            Callbacks::<(), u64>::new().with_task(move |_: &(), worker, task: &u64| {
                seen.lock().unwrap().push((worker, *task));
            })
        };

        run_worker(&(), 2, &three_by_nine(), &callbacks, &CancellationToken::new());
        assert_eq!(*seen.lock().unwrap(), vec![(2, 4), (2, 5), (2, 6)]);
    }

    #[test]
    fn test_process_callback_sees_every_siblings_slice() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let callbacks = {
            let seen = seen.clone();
            Callbacks::<(), u64>::new().with_process(move |_: &(), worker, parts: &[Vec<u64>]| {
                seen.lock().unwrap().push((worker, parts.to_vec()));
            })
        };

        run_worker(&(), 2, &three_by_nine(), &callbacks, &CancellationToken::new());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "process callback runs exactly once");
        let (worker, parts) = &seen[0];
        assert_eq!(*worker, 2);
        // Full partition set, including worker 1's and worker 3's slices.
        assert_eq!(
            *parts,
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]
        );
    }

    #[test]
    fn test_process_callback_runs_before_task_iteration() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let callbacks = {
            let for_process = order.clone();
            let for_task = order.clone();
            Callbacks::<(), u64>::new()
                .with_process(move |_: &(), _, _: &[Vec<u64>]| {
                    for_process.lock().unwrap().push("process");
                })
                .with_task(move |_: &(), _, _: &u64| {
                    for_task.lock().unwrap().push("task");
                })
        };

        run_worker(&(), 1, &three_by_nine(), &callbacks, &CancellationToken::new());
        assert_eq!(
            *order.lock().unwrap(),
            vec!["process", "task", "task", "task"]
        );
    }

    #[test]
    fn test_worker_with_empty_slice_invokes_nothing() {
        let hits = Arc::new(AtomicUsize::new(0));
        let callbacks = {
            let hits = hits.clone();
            Callbacks::<(), u64>::new().with_task(move |_: &(), _, _: &u64| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        // Worker 4 of a 5-way split over 2 tasks gets an empty slice.
        let plan = WorkerPlan::Finite(vec![vec![1], vec![2], vec![], vec![], vec![]]);
        run_worker(&(), 4, &plan, &callbacks, &CancellationToken::new());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unbounded_mints_a_strictly_increasing_sequence() {
        let token = CancellationToken::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let callbacks = {
            let token = token.clone();
            let seen = seen.clone();
            Callbacks::<(), u64>::new().with_task(move |_: &(), _, task: &u64| {
                seen.lock().unwrap().push(*task);
                // Bound the loop from inside the callback.
                if *task == 5 {
                    token.cancel();
                }
            })
        };

        let plan = WorkerPlan::<u64>::Unbounded { mint: u64::from };
        run_worker(&(), 1, &plan, &callbacks, &token);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unbounded_with_only_process_callback_terminates() {
        let hits = Arc::new(AtomicUsize::new(0));
        let callbacks = {
            let hits = hits.clone();
            Callbacks::<(), u64>::new().with_process(move |_: &(), _, parts: &[Vec<u64>]| {
                assert!(parts.is_empty(), "unbounded mode has no partitions");
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        let plan = WorkerPlan::<u64>::Unbounded { mint: u64::from };
        // No task callback: the generation loop must not start.
        run_worker(&(), 3, &plan, &callbacks, &CancellationToken::new());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_pre_cancelled_token_skips_generation_entirely() {
        let token = CancellationToken::new();
        token.cancel();

        let hits = Arc::new(AtomicUsize::new(0));
        let callbacks = {
            let hits = hits.clone();
            Callbacks::<(), u64>::new().with_task(move |_: &(), _, _: &u64| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        let plan = WorkerPlan::<u64>::Unbounded { mint: u64::from };
        run_worker(&(), 1, &plan, &callbacks, &token);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
