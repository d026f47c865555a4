//! Sequential nonce scan (the baseline contract).

use std::time::Instant;

use zerochase_crypto::sha256_hex;

use crate::SearchOutcome;

/// Scans nonces in increasing order on the calling thread.
pub struct WorkSearcher;

impl WorkSearcher {
    /// Find the smallest nonce whose digest meets the difficulty.
    ///
    /// Tries nonce 0, 1, 2, … without bound, so the first match is the
    /// smallest satisfying nonce by construction. A `leading_zeros` above
    /// the digest's hex length (64) can never match and the scan never
    /// returns; callers are responsible for sane difficulty values.
    pub fn search(&self, witness: &str, leading_zeros: usize) -> SearchOutcome {
        let target = "0".repeat(leading_zeros);
        let started = Instant::now();

        let mut nonce: u64 = 0;
        loop {
            let input = format!("{witness}{nonce}");
            let digest_hex = sha256_hex(input.as_bytes());
            if digest_hex.starts_with(&target) {
                return SearchOutcome {
                    nonce,
                    input,
                    digest_hex,
                    elapsed: started.elapsed(),
                };
            }
            nonce += 1;
        }
    }
}
