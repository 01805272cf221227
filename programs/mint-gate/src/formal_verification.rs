// ============================================================================
// INVARIANT TESTS
// ============================================================================
//
// Run with: cargo test --lib formal_verification
//
// Deterministic sweeps over the gate's accounting:
// 1. Allowance monotonicity under arbitrary admin/mint interleavings
// 2. Replay safety across many proof hashes
// 3. Rescale correctness for every supported decimal pair
// ============================================================================

#[cfg(test)]
mod formal_tests {
    use anchor_lang::prelude::*;

    use crate::constants::*;
    use crate::helpers::*;
    use crate::state::*;

    /// Small xorshift generator so sweeps are reproducible
    struct Xorshift(u64);

    impl Xorshift {
        fn next(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }
    }

    mod allowance_invariants {
        use super::*;

        /// minted_amount never decreases and never exceeds the allowance
        /// that was in force when each mint succeeded
        #[test]
        fn minted_never_exceeds_allowance_and_never_decreases() {
            for seed in 1..=64u64 {
                let mut rng = Xorshift(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
                let mut entry = WhitelistEntry::default();
                entry
                    .reset(Pubkey::new_unique(), Pubkey::new_unique(), 1 + rng.next() % 10_000, 255)
                    .unwrap();

                let mut last_minted = 0u64;
                for _ in 0..200 {
                    match rng.next() % 4 {
                        0 => {
                            let _ = entry.increase(rng.next() % 1_000);
                        }
                        1 => {
                            let _ = entry.decrease(rng.next() % 1_000);
                        }
                        _ => {
                            let amount = rng.next() % 2_000;
                            let allowance_before = entry.mint_allowance;
                            let minted_before = entry.minted_amount;
                            match entry.record_mint(amount) {
                                Ok(minted) => {
                                    assert!(minted <= allowance_before);
                                    assert_eq!(minted, minted_before + amount);
                                }
                                Err(_) => assert_eq!(entry.minted_amount, minted_before),
                            }
                        }
                    }

                    assert!(entry.minted_amount >= last_minted, "minted decreased");
                    last_minted = entry.minted_amount;
                    assert_eq!(
                        entry.mintable_amount(),
                        entry.mint_allowance.saturating_sub(entry.minted_amount)
                    );
                }
            }
        }

        /// Without admin decreases the cap holds at every step
        #[test]
        fn mint_only_sequences_respect_cap() {
            let mut rng = Xorshift(42);
            let mut entry = WhitelistEntry::default();
            entry
                .reset(Pubkey::new_unique(), Pubkey::new_unique(), 50_000, 255)
                .unwrap();

            for _ in 0..1_000 {
                let _ = entry.record_mint(rng.next() % 500);
                assert!(entry.minted_amount <= entry.mint_allowance);
            }
        }
    }

    mod replay_invariants {
        use super::*;

        /// Each hash succeeds exactly once, whoever redeems it
        #[test]
        fn each_proof_hash_redeems_at_most_once() {
            let gate = Pubkey::new_unique();
            let mut markers: Vec<ConsumedProof> = Vec::new();
            let mut record = ProofMintRecord::default();

            for i in 0..=255u8 {
                let mut marker = ConsumedProof::default();
                marker.consume(gate, [i; 32], Pubkey::new_unique(), i as i64, 255).unwrap();
                record.record(1, [i; 32]).unwrap();
                markers.push(marker);
            }

            for marker in markers.iter_mut() {
                for _ in 0..3 {
                    let tx_hash = marker.tx_hash;
                    assert!(marker
                        .consume(gate, tx_hash, Pubkey::new_unique(), 0, 255)
                        .is_err());
                }
            }

            assert_eq!(record.proof_count, 256);
            assert_eq!(record.minted_amount, 256);
        }
    }

    mod rescale_invariants {
        use super::*;

        /// minted = amount * 10^(ledger - native) for every valid pair
        #[test]
        fn rescale_matches_power_of_ten() {
            let amounts = [1u64, 7, 1_000, 123_456_789];

            for ledger in 0..=MAX_DECIMALS {
                for native in 0..=ledger {
                    let factor = 10u128.pow((ledger - native) as u32);
                    for amount in amounts {
                        let expected = amount as u128 * factor;
                        let result = rescale_native_amount(amount, native, ledger);
                        if expected <= u64::MAX as u128 {
                            assert_eq!(result.unwrap() as u128, expected);
                        } else {
                            assert!(result.is_err(), "overflow must be rejected");
                        }
                    }
                }
            }
        }

        #[test]
        fn eighteen_decimals_is_exact() {
            let mut rng = Xorshift(7);
            for _ in 0..500 {
                let amount = 1 + rng.next() % u64::MAX;
                assert_eq!(rescale_native_amount(amount, 18, 18).unwrap(), amount);
            }
        }
    }
}
