use proptest::prelude::*;

use zerochase_work::{meets_difficulty, validate_nonce, ParallelSearcher, WorkSearcher};

proptest! {
    // Each case runs a real search; keep difficulty low so the scan stays
    // in the hundreds-of-hashes range.
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A found nonce always passes independent validation.
    #[test]
    fn found_nonce_always_validates(
        witness in "[a-zA-Z0-9 !,]{0,16}",
        leading_zeros in 0usize..=2,
    ) {
        let outcome = WorkSearcher.search(&witness, leading_zeros);
        prop_assert!(
            validate_nonce(&witness, outcome.nonce, leading_zeros),
            "nonce {} must satisfy difficulty {}",
            outcome.nonce,
            leading_zeros
        );
    }

    /// The sequential scan returns the smallest satisfying nonce.
    #[test]
    fn sequential_result_is_minimal(
        witness in "[a-zA-Z0-9 !,]{0,16}",
        leading_zeros in 0usize..=1,
    ) {
        let outcome = WorkSearcher.search(&witness, leading_zeros);
        for earlier in 0..outcome.nonce {
            prop_assert!(
                !validate_nonce(&witness, earlier, leading_zeros),
                "nonce {} below the reported minimum {} also satisfies",
                earlier,
                outcome.nonce
            );
        }
    }

    /// Searching twice with the same inputs gives the same answer.
    #[test]
    fn search_is_deterministic(
        witness in "[a-zA-Z0-9 !,]{0,16}",
        leading_zeros in 0usize..=2,
    ) {
        let first = WorkSearcher.search(&witness, leading_zeros);
        let second = WorkSearcher.search(&witness, leading_zeros);
        prop_assert_eq!(first.nonce, second.nonce);
        prop_assert_eq!(first.digest_hex, second.digest_hex);
    }

    /// A shorter prefix requirement is easier: valid at d implies valid at d-1.
    #[test]
    fn shorter_prefix_is_easier(
        data in prop::collection::vec(any::<u8>(), 0..64),
        leading_zeros in 1usize..=64,
    ) {
        let digest = zerochase_crypto::sha256_hex(&data);
        if meets_difficulty(&digest, leading_zeros) {
            prop_assert!(meets_difficulty(&digest, leading_zeros - 1));
        }
    }

    /// The parallel engine's answer validates just like the sequential one.
    #[test]
    fn parallel_result_validates(
        witness in "[a-zA-Z0-9 !,]{0,16}",
        leading_zeros in 0usize..=2,
    ) {
        let outcome = ParallelSearcher.search(&witness, leading_zeros).unwrap();
        prop_assert!(validate_nonce(&witness, outcome.nonce, leading_zeros));
    }
}
