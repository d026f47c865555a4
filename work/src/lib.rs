//! Leading-zero proof-of-work search.
//!
//! Finds the smallest nonce whose SHA-256 hex digest of
//! `witness || decimal(nonce)` starts with a required count of `'0'`
//! characters. Expected work grows as `16^leading_zeros` digest
//! computations, so single-digit difficulty levels already demonstrate
//! the mechanic.

pub mod error;
pub mod parallel;
pub mod searcher;
pub mod validator;

pub use error::WorkError;
pub use parallel::ParallelSearcher;
pub use searcher::WorkSearcher;
pub use validator::{meets_difficulty, validate_nonce};

use std::time::Duration;

/// The result of a completed search.
///
/// Immutable once produced; only used for reporting.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// The smallest satisfying nonce (for the sequential engine; the
    /// parallel engine reports the smallest its workers published).
    pub nonce: u64,
    /// The full candidate input, `witness || decimal(nonce)`.
    pub input: String,
    /// The 64-character lowercase hex digest of the candidate input.
    pub digest_hex: String,
    /// Wall-clock time from just before the scan to just after the match.
    pub elapsed: Duration,
}
