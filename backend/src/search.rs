use crate::error::SearchError;
use crate::lucas_lehmer;
use crate::partition;
use crate::progress::{Progress, ProgressUpdate};
use crate::sieve;
use crossbeam::channel::Sender;
use std::sync::Arc;
use std::thread;

/// The only even prime exponent; 2^2 - 1 = 3. Injected at aggregation so
/// the sieve and the workers only ever deal with odd exponents.
const EVEN_EXPONENT: u32 = 2;

pub struct SearchConfig {
    pub workers: usize,
}

impl Default for SearchConfig {
    /// 4x the available hardware parallelism. The work is pure computation
    /// with no I/O wait, so a modest oversubscription smooths out the cost
    /// variance between chunks. Tunable, not a correctness constraint.
    fn default() -> Self {
        let cores = thread::available_parallelism().map_or(1, |n| n.get());
        SearchConfig { workers: 4 * cores }
    }
}

/// Finds every exponent p in [2, bound] for which 2^p - 1 is prime.
///
/// The candidate exponents are sieved, shuffled and split into one chunk
/// per worker. Each worker owns its chunk exclusively, runs Lucas-Lehmer
/// over it, collects hits privately, then adds its fixed share to the
/// shared progress total and emits one `ProgressUpdate` with the new
/// cumulative percentage. Sends are fire-and-forget; the consumer may have
/// gone away.
///
/// Blocks until every worker has joined. A worker that dies mid-chunk
/// aborts the whole run with `WorkerInterrupted`: its exponents were never
/// tested, and a partial list would silently claim they are composite.
pub fn run(
    bound: u32,
    config: &SearchConfig,
    progress_tx: Sender<ProgressUpdate>,
) -> Result<Vec<u32>, SearchError> {
    if bound < 2 {
        return Err(SearchError::BoundTooSmall(bound));
    }
    if config.workers == 0 {
        return Err(SearchError::NoWorkers);
    }

    let candidates = sieve::odd_primes_up_to(bound);
    let chunks = partition::shuffle_and_chunk(candidates, config.workers);

    let progress = Arc::new(Progress::new());
    let share = 100.0 / config.workers as f64;

    let mut handles = Vec::with_capacity(chunks.len());
    for (worker, chunk) in chunks.into_iter().enumerate() {
        let progress = Arc::clone(&progress);
        let tx = progress_tx.clone();

        handles.push(thread::spawn(move || {
            let mut hits = Vec::new();
            for p in chunk {
                if lucas_lehmer::is_mersenne_prime(p) {
                    hits.push(p);
                }
            }
            let percent = progress.add(share);
            let _ = tx.send(ProgressUpdate { worker, percent });
            hits
        }));
    }

    let mut found = vec![EVEN_EXPONENT];
    for (worker, handle) in handles.into_iter().enumerate() {
        let mut hits = handle
            .join()
            .map_err(|_| SearchError::WorkerInterrupted(worker))?;
        found.append(&mut hits);
    }
    found.sort_unstable();
    Ok(found)
}
