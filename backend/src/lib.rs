pub mod error;
pub mod lucas_lehmer;
pub mod partition;
pub mod progress;
pub mod search;
pub mod sieve;
