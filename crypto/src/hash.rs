//! SHA-256 hashing for candidate inputs.

use sha2::{Digest, Sha256};

/// Length of a SHA-256 digest rendered as hex characters.
pub const DIGEST_HEX_LEN: usize = 64;

/// Compute a SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// SHA-256 digest rendered as 64 lowercase hex characters.
///
/// Every byte becomes exactly two digits, zero-padded (0x0a -> "0a").
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}
