//! Unbounded generation mode, bounded here through the cancellation seam.
//!
//! With no finite task source, every worker mints task ids 1, 2, 3, …
//! indefinitely. Real deployments stop such workers with an OS signal;
//! this demo cancels the workload token from inside the callback instead,
//! so each of the two workers stops after ten tasks.

use tokio_util::sync::CancellationToken;

use taskfan::{Config, Dispatcher, TaskSource, Workload};

fn main() {
    let cfg = Config {
        debug: true,
        workers: 2,
    };

    // Each forked worker holds its own copy of the token, so the cancel
    // below bounds that worker only.
    let token = CancellationToken::new();
    let for_callback = token.clone();

    let load = Workload::new((), TaskSource::<u64>::unbounded())
        .with_cancellation(token)
        .on_task(move |_: &(), worker, task: &u64| {
            println!("worker {worker}: generated task {task}");
            if *task >= 10 {
                for_callback.cancel();
            }
        });

    if let Err(e) = Dispatcher::new(cfg).run(load) {
        eprintln!("{}", e.as_message());
        std::process::exit(1);
    }
}
