//! Cryptographic primitives for zerochase.
//!
//! - **SHA-256** for candidate digests, rendered as lowercase hex
//!
//! The search loop computes one full digest per candidate, so these
//! functions are the hot path of the whole program.

pub mod hash;

pub use hash::{sha256, sha256_hex, DIGEST_HEX_LEN};
