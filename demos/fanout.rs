//! Fan out a batch of request tokens across four worker processes.
//!
//! Run with an integer to synthesize that many task ids instead of the
//! built-in token list:
//!
//! ```text
//! cargo run --example fanout        # literal token list
//! cargo run --example fanout 20    # tasks 1..=20
//! ```

use taskfan::{Config, Dispatcher, TaskSource, Workload};

#[derive(Clone)]
struct Token(String);

impl From<u64> for Token {
    fn from(id: u64) -> Self {
        Token(id.to_string())
    }
}

fn main() {
    let source = match std::env::args().nth(1) {
        Some(arg) => {
            let n: u64 = arg.parse().expect("argument must be a task count");
            TaskSource::count(n)
        }
        None => TaskSource::list(
            ["R4NEJ1", "F5KH83", "K9DWV0"]
                .into_iter()
                .map(|t| Token(t.to_string()))
                .collect(),
        ),
    };

    let cfg = Config {
        debug: true,
        workers: 4,
    };

    let load = Workload::new("/v1/resource".to_string(), source)
        .on_process(|_uri: &String, worker, parts: &[Vec<Token>]| {
            let own = parts.get(worker - 1).map(Vec::len).unwrap_or(0);
            println!("tasks in forked process {worker}: {own} of {} total", parts.len());
        })
        .on_task(|uri: &String, worker, task: &Token| {
            println!("forked process {worker}: request to {uri} with token {}", task.0);
        });

    if let Err(e) = Dispatcher::new(cfg).run(load) {
        eprintln!("{}", e.as_message());
        std::process::exit(1);
    }
}
