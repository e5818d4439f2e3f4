//! # Balanced, order-preserving task partitioning.
//!
//! [`partition`] splits an ordered batch into `parts` contiguous
//! sub-sequences whose sizes differ by at most one, with the larger sizes
//! assigned to the earliest partitions. Concatenating the result in order
//! reproduces the input exactly.
//!
//! The dispatcher computes the partition once per run, before any fork, and
//! hands every worker the full set (the process-level callback contract).

use crate::error::ConfigError;

/// Splits `tasks` into `parts` ordered sub-sequences.
///
/// Every partition receives `len / parts` items; the remainder
/// (`len % parts`) is distributed one extra item each to the first
/// `remainder` partitions.
///
/// ## Contract
/// - The result has exactly `parts` entries.
/// - Concatenating all entries in order reproduces `tasks` exactly
///   (no loss, no duplication, order preserved).
/// - `max(sizes) - min(sizes) <= 1`.
/// - Empty `tasks` yields `parts` empty vectors; `parts > tasks.len()`
///   yields empty trailing partitions.
///
/// `parts == 0` is an input error.
///
/// # Example
/// ```
/// use taskfan::partition;
///
/// let parts = partition((1..=10).collect::<Vec<_>>(), 3).unwrap();
/// assert_eq!(parts, vec![vec![1, 2, 3, 4], vec![5, 6, 7], vec![8, 9, 10]]);
/// ```
pub fn partition<T>(mut tasks: Vec<T>, parts: usize) -> Result<Vec<Vec<T>>, ConfigError> {
    if parts == 0 {
        return Err(ConfigError::ZeroParts);
    }

    let base = tasks.len() / parts;
    let remainder = tasks.len() % parts;

    let mut out = Vec::with_capacity(parts);
    for idx in 0..parts {
        let take = if idx < remainder { base + 1 } else { base };
        let rest = tasks.split_off(take);
        out.push(std::mem::replace(&mut tasks, rest));
    }
    Ok(out)
}
