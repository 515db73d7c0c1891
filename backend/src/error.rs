use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The exponent ceiling must be at least 2, the smallest prime.
    #[error("bound must be at least 2, got {0}")]
    BoundTooSmall(u32),

    /// At least one worker is needed to make any progress.
    #[error("worker count must be at least 1")]
    NoWorkers,

    /// A worker died before finishing its chunk. Its exponents were never
    /// tested, so any combined result would silently misreport them.
    #[error("worker {0} was interrupted before finishing its chunk")]
    WorkerInterrupted(usize),
}
