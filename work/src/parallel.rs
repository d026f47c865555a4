//! Parallel nonce scan (multi-threaded CPU).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use rayon::prelude::*;

use zerochase_crypto::sha256_hex;

use crate::{SearchOutcome, WorkError};

/// Batch size per worker before checking the found flag.
const BATCH_SIZE: u64 = 4096;

/// Scans the nonce space across all available CPU cores.
pub struct ParallelSearcher;

impl ParallelSearcher {
    /// Find a nonce meeting the difficulty using all CPU cores.
    ///
    /// Splits the nonce space into disjoint strides, one per rayon worker.
    /// The first worker to find a valid nonce publishes it and the others
    /// stop at their next batch boundary. Racing finders resolve to the
    /// smallest published nonce, which is not necessarily the smallest
    /// satisfying nonce overall; [`crate::WorkSearcher`] keeps that
    /// guarantee. Like the sequential scan, a `leading_zeros` above 64
    /// never returns.
    pub fn search(
        &self,
        witness: &str,
        leading_zeros: usize,
    ) -> Result<SearchOutcome, WorkError> {
        let started = Instant::now();

        if leading_zeros == 0 {
            let input = format!("{witness}0");
            let digest_hex = sha256_hex(input.as_bytes());
            return Ok(SearchOutcome {
                nonce: 0,
                input,
                digest_hex,
                elapsed: started.elapsed(),
            });
        }

        let target = "0".repeat(leading_zeros);
        let found = AtomicU64::new(u64::MAX);
        let num_threads = rayon::current_num_threads().max(1);

        (0..num_threads).into_par_iter().for_each(|worker| {
            let mut nonce = worker as u64;
            let stride = num_threads as u64;

            loop {
                if found.load(Ordering::Relaxed) != u64::MAX {
                    return;
                }

                let end = nonce.saturating_add(BATCH_SIZE * stride);
                while nonce < end {
                    let input = format!("{witness}{nonce}");
                    if sha256_hex(input.as_bytes()).starts_with(&target) {
                        found.fetch_min(nonce, Ordering::Relaxed);
                        return;
                    }
                    nonce = nonce.wrapping_add(stride);
                }
            }
        });

        let nonce = found.load(Ordering::Relaxed);
        if nonce == u64::MAX {
            return Err(WorkError::Cancelled);
        }

        let input = format!("{witness}{nonce}");
        let digest_hex = sha256_hex(input.as_bytes());
        Ok(SearchOutcome {
            nonce,
            input,
            digest_hex,
            elapsed: started.elapsed(),
        })
    }
}
