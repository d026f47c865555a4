//! Single-shot validation of search results.

use zerochase_crypto::sha256_hex;

/// Check that a hex digest starts with `leading_zeros` `'0'` characters.
///
/// A requirement longer than the digest itself can never be met.
pub fn meets_difficulty(digest_hex: &str, leading_zeros: usize) -> bool {
    if leading_zeros > digest_hex.len() {
        return false;
    }
    digest_hex.as_bytes()[..leading_zeros].iter().all(|&b| b == b'0')
}

/// Recompute the digest of `witness || decimal(nonce)` and check the prefix.
///
/// Verification helper for reported results, not the hot loop.
pub fn validate_nonce(witness: &str, nonce: u64, leading_zeros: usize) -> bool {
    let input = format!("{witness}{nonce}");
    meets_difficulty(&sha256_hex(input.as_bytes()), leading_zeros)
}
