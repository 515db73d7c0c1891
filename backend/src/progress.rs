use std::sync::atomic::{AtomicU64, Ordering};

/// Cumulative percentage of the run that has finished, shared by every
/// worker. Stored as raw f64 bits in an atomic so workers can add their
/// share lock-free; addition commutes, so the order in which workers finish
/// never changes the final total.
pub struct Progress {
    percent_bits: AtomicU64,
}

impl Progress {
    pub fn new() -> Self {
        Progress {
            percent_bits: AtomicU64::new(0f64.to_bits()),
        }
    }

    /// Atomically adds `share` percent and returns the new cumulative total.
    pub fn add(&self, share: f64) -> f64 {
        let previous = self
            .percent_bits
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |bits| {
                Some((f64::from_bits(bits) + share).to_bits())
            })
            .unwrap(); // the closure always returns Some
        f64::from_bits(previous) + share
    }

    pub fn percent(&self) -> f64 {
        f64::from_bits(self.percent_bits.load(Ordering::SeqCst))
    }
}

impl Default for Progress {
    fn default() -> Self {
        Progress::new()
    }
}

/// One event per finished worker, carrying the cumulative total after that
/// worker added its share.
#[derive(Clone, Copy, Debug)]
pub struct ProgressUpdate {
    pub worker: usize,
    pub percent: f64,
}
