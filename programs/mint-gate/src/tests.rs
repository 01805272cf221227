// ============================================================================
// UNIT TESTS FOR MINT GATE PROGRAM
// ============================================================================
//
// Run with: cargo test --lib
//
// Test Categories:
// 1. Whitelist Allowance - set / increase / decrease / mint bookkeeping
// 2. Public Values - decoding and post-verification checks
// 3. Replay Protection - consumed proof markers and proof records
// 4. Decimal Rescaling - native to ledger unit conversion
// 5. Verifier CPI - instruction data layout
// 6. Admin Controls - capability check, two-step transfer, rotation
// 7. Account Sizes - LEN constants match serialized layout
// ============================================================================

#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;

    use crate::constants::*;
    use crate::errors::ErrorCode;
    use crate::helpers::*;
    use crate::state::*;

    /// Extract the numeric error code from a failed result
    fn error_code<T>(result: Result<T>) -> u32 {
        match result {
            Err(anchor_lang::error::Error::AnchorError(e)) => e.error_code_number,
            Err(other) => panic!("expected an AnchorError, got {:?}", other),
            Ok(_) => panic!("expected an error"),
        }
    }

    fn whitelisted(allowance: u64) -> WhitelistEntry {
        let mut entry = WhitelistEntry::default();
        entry
            .reset(Pubkey::new_unique(), Pubkey::new_unique(), allowance, 255)
            .unwrap();
        entry
    }

    fn public_values_for(owner: Pubkey, total_amount: u64, tx_byte: u8) -> PublicValues {
        PublicValues {
            total_amount,
            sender_hash: [7u8; 32],
            owner,
            tx_hash: [tx_byte; 32],
        }
    }

    // ========================================================================
    // 1. WHITELIST ALLOWANCE TESTS
    // ========================================================================

    mod whitelist_tests {
        use super::*;

        #[test]
        fn test_set_whitelist_creates_fresh_entry() {
            let gate = Pubkey::new_unique();
            let user = Pubkey::new_unique();
            let mut entry = WhitelistEntry::default();

            entry.reset(gate, user, 1_000, 254).unwrap();

            assert_eq!(entry.gate, gate);
            assert_eq!(entry.user, user);
            assert_eq!(entry.allowance(), 1_000);
            assert_eq!(entry.minted_amount(), 0);
            assert_eq!(entry.bump, 254);
            assert!(entry.is_whitelisted());
        }

        #[test]
        fn test_set_whitelist_rejects_zero_address() {
            let mut entry = WhitelistEntry::default();
            let result = entry.reset(Pubkey::new_unique(), Pubkey::default(), 1_000, 255);
            assert_eq!(error_code(result), u32::from(ErrorCode::ZeroAddress));
        }

        #[test]
        fn test_set_whitelist_rejects_zero_allowance() {
            let mut entry = WhitelistEntry::default();
            let result = entry.reset(Pubkey::new_unique(), Pubkey::new_unique(), 0, 255);
            assert_eq!(error_code(result), u32::from(ErrorCode::ZeroAmount));
        }

        #[test]
        fn test_set_whitelist_rejects_live_entry() {
            let mut entry = whitelisted(1_000);
            entry.record_mint(400).unwrap();

            let result = entry.reset(entry.gate, entry.user, 5_000, entry.bump);
            assert_eq!(error_code(result), u32::from(ErrorCode::AlreadyWhitelisted));

            // Progress is untouched by the rejected reset
            assert_eq!(entry.minted_amount(), 400);
            assert_eq!(entry.allowance(), 1_000);
        }

        #[test]
        fn test_set_whitelist_after_full_decrease_starts_over() {
            let mut entry = whitelisted(1_000);
            entry.record_mint(600).unwrap();
            entry.decrease(1_000).unwrap();
            assert!(!entry.is_whitelisted());

            entry.reset(entry.gate, entry.user, 300, entry.bump).unwrap();
            assert_eq!(entry.allowance(), 300);
            assert_eq!(entry.minted_amount(), 0);
        }

        #[test]
        fn test_increase_allowance() {
            let mut entry = whitelisted(1_000);
            assert_eq!(entry.increase(500).unwrap(), 1_500);
            assert_eq!(entry.mintable_amount(), 1_500);
        }

        #[test]
        fn test_increase_rejects_zero_and_overflow() {
            let mut entry = whitelisted(u64::MAX - 1);
            assert_eq!(error_code(entry.increase(0)), u32::from(ErrorCode::ZeroAmount));
            assert_eq!(error_code(entry.increase(2)), u32::from(ErrorCode::MathOverflow));
            assert_eq!(entry.allowance(), u64::MAX - 1);
        }

        #[test]
        fn test_decrease_allowance() {
            let mut entry = whitelisted(1_000);
            assert_eq!(entry.decrease(250).unwrap(), 750);
        }

        #[test]
        fn test_decrease_below_zero_rejected() {
            let mut entry = whitelisted(1_000);
            let result = entry.decrease(1_001);
            assert_eq!(error_code(result), u32::from(ErrorCode::AllowanceUnderflow));
            assert_eq!(entry.allowance(), 1_000);
        }

        #[test]
        fn test_decrease_below_minted_leaves_no_headroom() {
            let mut entry = whitelisted(1_000);
            entry.record_mint(800).unwrap();

            entry.decrease(500).unwrap();
            assert_eq!(entry.allowance(), 500);
            assert_eq!(entry.minted_amount(), 800);
            assert_eq!(entry.mintable_amount(), 0);

            let result = entry.record_mint(1);
            assert_eq!(error_code(result), u32::from(ErrorCode::ExceedsAllowance));
        }

        #[test]
        fn test_mint_books_amount() {
            let mut entry = whitelisted(1_000);
            assert_eq!(entry.record_mint(300).unwrap(), 300);
            assert_eq!(entry.record_mint(700).unwrap(), 1_000);
            assert_eq!(entry.mintable_amount(), 0);
        }

        #[test]
        fn test_mint_up_to_exact_allowance_then_reject() {
            let mut entry = whitelisted(100);
            entry.record_mint(100).unwrap();
            let result = entry.record_mint(1);
            assert_eq!(error_code(result), u32::from(ErrorCode::ExceedsAllowance));
            assert_eq!(entry.minted_amount(), 100);
        }

        #[test]
        fn test_mint_rejects_not_whitelisted() {
            let mut entry = WhitelistEntry::default();
            let result = entry.record_mint(1);
            assert_eq!(error_code(result), u32::from(ErrorCode::NotWhitelisted));
        }

        #[test]
        fn test_mint_rejects_zero_amount() {
            let mut entry = whitelisted(100);
            let result = entry.record_mint(0);
            assert_eq!(error_code(result), u32::from(ErrorCode::ZeroAmount));
        }

        #[test]
        fn test_mint_rejects_overflowing_amount() {
            let mut entry = whitelisted(u64::MAX);
            entry.record_mint(10).unwrap();
            let result = entry.record_mint(u64::MAX);
            assert_eq!(error_code(result), u32::from(ErrorCode::MathOverflow));
        }
    }

    // ========================================================================
    // 2. PUBLIC VALUES TESTS
    // ========================================================================

    mod public_values_tests {
        use super::*;

        #[test]
        fn test_decode_fixed_layout() {
            let owner = Pubkey::new_unique();
            let mut data = Vec::new();
            data.extend_from_slice(&42_000u64.to_le_bytes());
            data.extend_from_slice(&[1u8; 32]);
            data.extend_from_slice(&owner.to_bytes());
            data.extend_from_slice(&[2u8; 32]);

            let values = PublicValues::decode(&data).unwrap();
            assert_eq!(values.total_amount, 42_000);
            assert_eq!(values.sender_hash, [1u8; 32]);
            assert_eq!(values.owner, owner);
            assert_eq!(values.tx_hash, [2u8; 32]);
        }

        #[test]
        fn test_encode_matches_decoder_layout() {
            let values = public_values_for(Pubkey::new_unique(), 5, 9);
            let data = values.encode();
            assert_eq!(data.len(), PUBLIC_VALUES_LEN);
            assert_eq!(&data[0..8], &5u64.to_le_bytes());
            assert_eq!(&data[72..104], &[9u8; 32]);
        }

        #[test]
        fn test_decode_rejects_wrong_length() {
            for len in [0usize, 8, 103, 105, 128] {
                let data = vec![0u8; len];
                let result = PublicValues::decode(&data);
                assert_eq!(
                    error_code(result),
                    u32::from(ErrorCode::InvalidPublicValues),
                    "length {} should be rejected",
                    len
                );
            }
        }

        #[test]
        fn test_validate_accepts_owner_with_matching_hint() {
            let owner = Pubkey::new_unique();
            let values = public_values_for(owner, 10, 3);
            assert!(values.validate_for(&owner, &[3u8; 32]).is_ok());
        }

        #[test]
        fn test_validate_rejects_zero_amount_first() {
            let owner = Pubkey::new_unique();
            let values = public_values_for(owner, 0, 3);
            // Zero amount wins even when the owner is wrong too
            let result = values.validate_for(&Pubkey::new_unique(), &[3u8; 32]);
            assert_eq!(error_code(result), u32::from(ErrorCode::ZeroAmount));
        }

        #[test]
        fn test_validate_rejects_other_redeemer() {
            let owner = Pubkey::new_unique();
            let values = public_values_for(owner, 10, 3);
            let result = values.validate_for(&Pubkey::new_unique(), &[3u8; 32]);
            assert_eq!(error_code(result), u32::from(ErrorCode::ProofOwnerMismatch));
        }

        #[test]
        fn test_validate_rejects_hint_mismatch() {
            let owner = Pubkey::new_unique();
            let values = public_values_for(owner, 10, 3);
            let result = values.validate_for(&owner, &[4u8; 32]);
            assert_eq!(error_code(result), u32::from(ErrorCode::TxHashMismatch));
        }
    }

    // ========================================================================
    // 3. REPLAY PROTECTION TESTS
    // ========================================================================

    mod replay_tests {
        use super::*;

        #[test]
        fn test_consume_marks_proof() {
            let gate = Pubkey::new_unique();
            let user = Pubkey::new_unique();
            let mut marker = ConsumedProof::default();

            marker.consume(gate, [5u8; 32], user, 1_700_000_000, 250).unwrap();

            assert!(marker.consumed);
            assert_eq!(marker.gate, gate);
            assert_eq!(marker.consumed_by, user);
            assert_eq!(marker.tx_hash, [5u8; 32]);
            assert_eq!(marker.consumed_at, 1_700_000_000);
        }

        #[test]
        fn test_consume_twice_rejected() {
            let gate = Pubkey::new_unique();
            let mut marker = ConsumedProof::default();
            marker.consume(gate, [5u8; 32], Pubkey::new_unique(), 1, 250).unwrap();

            let attacker = Pubkey::new_unique();
            let result = marker.consume(gate, [5u8; 32], attacker, 2, 250);
            assert_eq!(error_code(result), u32::from(ErrorCode::ProofAlreadyUsed));

            // First redeemer is preserved
            assert_ne!(marker.consumed_by, attacker);
            assert_eq!(marker.consumed_at, 1);
        }

        #[test]
        fn test_proof_record_accumulates() {
            let mut record = ProofMintRecord::default();
            assert_eq!(record.record(1_000, [1u8; 32]).unwrap(), 1_000);
            assert_eq!(record.record(2_500, [2u8; 32]).unwrap(), 3_500);
            assert_eq!(record.latest_proof_tx_hash, [2u8; 32]);
            assert_eq!(record.proof_count, 2);
        }

        #[test]
        fn test_proof_record_overflow_rejected() {
            let mut record = ProofMintRecord::default();
            record.record(u64::MAX, [1u8; 32]).unwrap();
            let result = record.record(1, [2u8; 32]);
            assert_eq!(error_code(result), u32::from(ErrorCode::MathOverflow));
            assert_eq!(record.latest_proof_tx_hash, [1u8; 32]);
        }
    }

    // ========================================================================
    // 4. DECIMAL RESCALING TESTS
    // ========================================================================

    mod rescale_tests {
        use super::*;

        #[test]
        fn test_rescale_same_decimals_is_identity() {
            assert_eq!(rescale_native_amount(12_345, 18, 18).unwrap(), 12_345);
            assert_eq!(rescale_native_amount(12_345, 6, 6).unwrap(), 12_345);
        }

        #[test]
        fn test_rescale_zero_decimals_to_eighteen() {
            assert_eq!(rescale_native_amount(1, 0, 18).unwrap(), 1_000_000_000_000_000_000);
            assert_eq!(rescale_native_amount(18, 0, 18).unwrap(), 18_000_000_000_000_000_000);
        }

        #[test]
        fn test_rescale_six_to_nine() {
            // 1.5 units at 6 decimals -> 1.5 units at 9 decimals
            assert_eq!(rescale_native_amount(1_500_000, 6, 9).unwrap(), 1_500_000_000);
        }

        #[test]
        fn test_rescale_overflow_rejected() {
            // 19 * 10^18 does not fit in u64
            let result = rescale_native_amount(19, 0, 18);
            assert_eq!(error_code(result), u32::from(ErrorCode::MathOverflow));
        }

        #[test]
        fn test_rescale_zero_amount_rejected() {
            let result = rescale_native_amount(0, 6, 9);
            assert_eq!(error_code(result), u32::from(ErrorCode::ZeroRescaledAmount));
        }

        #[test]
        fn test_decimals_validation() {
            assert!(validate_decimals(0, 0).is_ok());
            assert!(validate_decimals(6, 9).is_ok());
            assert!(validate_decimals(18, 18).is_ok());
            assert_eq!(error_code(validate_decimals(19, 19)), u32::from(ErrorCode::InvalidDecimals));
            assert_eq!(error_code(validate_decimals(6, 19)), u32::from(ErrorCode::InvalidDecimals));
            assert_eq!(error_code(validate_decimals(9, 6)), u32::from(ErrorCode::InvalidDecimals));
        }

        #[test]
        fn test_format_tokens() {
            assert_eq!(format_tokens(1_500_000, 6), "1.500000");
            assert_eq!(format_tokens(999, 6), "0.000999");
        }

        #[test]
        fn test_format_tokens_without_decimals_has_no_fraction() {
            assert_eq!(format_tokens(5, 0), "5");
            assert_eq!(format_tokens(0, 0), "0");
        }
    }

    // ========================================================================
    // 5. VERIFIER CPI TESTS
    // ========================================================================

    mod verifier_cpi_tests {
        use super::*;

        #[test]
        fn test_verify_proof_data_layout() {
            let vkey = [3u8; 32];
            let public_values = vec![4u8; PUBLIC_VALUES_LEN];
            let proof = vec![5u8; 260];

            let data = build_verify_proof_data(&vkey, &public_values, &proof);

            assert_eq!(data.len(), 8 + 32 + 4 + PUBLIC_VALUES_LEN + 4 + 260);
            assert_eq!(&data[0..8], &VERIFY_PROOF_DISCRIMINATOR);
            assert_eq!(&data[8..40], &vkey);
            assert_eq!(&data[40..44], &(PUBLIC_VALUES_LEN as u32).to_le_bytes());
            assert_eq!(&data[44..148], public_values.as_slice());
            assert_eq!(&data[148..152], &260u32.to_le_bytes());
            assert_eq!(&data[152..], proof.as_slice());
        }

        #[test]
        fn test_verify_proof_discriminator_matches_anchor_sighash() {
            let hash = anchor_lang::solana_program::hash::hash(b"global:verify_proof");
            assert_eq!(&hash.to_bytes()[..8], &VERIFY_PROOF_DISCRIMINATOR);
        }
    }

    // ========================================================================
    // 6. ADMIN CONTROL TESTS
    // ========================================================================

    mod admin_tests {
        use super::*;

        fn gate_with_admin(admin: Pubkey) -> GateConfig {
            GateConfig {
                admin,
                verifier_program: Pubkey::new_unique(),
                program_vkey: [1u8; 32],
                native_decimals: 6,
                ledger_decimals: 9,
                ..GateConfig::default()
            }
        }

        #[test]
        fn test_capability_check() {
            let admin = Pubkey::new_unique();
            let gate = gate_with_admin(admin);
            assert!(gate.is_admin(&admin));
            assert!(!gate.is_admin(&Pubkey::new_unique()));
        }

        #[test]
        fn test_two_step_admin_transfer() {
            let admin = Pubkey::new_unique();
            let successor = Pubkey::new_unique();
            let mut gate = gate_with_admin(admin);

            gate.propose_admin(successor).unwrap();
            // Admin is unchanged until the successor accepts
            assert!(gate.is_admin(&admin));
            assert_eq!(gate.pending_admin, Some(successor));

            let old = gate.accept_admin(&successor).unwrap();
            assert_eq!(old, admin);
            assert!(gate.is_admin(&successor));
            assert_eq!(gate.pending_admin, None);
        }

        #[test]
        fn test_accept_by_wrong_signer_rejected() {
            let admin = Pubkey::new_unique();
            let mut gate = gate_with_admin(admin);
            gate.propose_admin(Pubkey::new_unique()).unwrap();

            let result = gate.accept_admin(&Pubkey::new_unique());
            assert_eq!(error_code(result), u32::from(ErrorCode::UnauthorizedAccess));
            assert!(gate.is_admin(&admin));
        }

        #[test]
        fn test_accept_without_proposal_rejected() {
            let mut gate = gate_with_admin(Pubkey::new_unique());
            let result = gate.accept_admin(&Pubkey::new_unique());
            assert_eq!(error_code(result), u32::from(ErrorCode::NoPendingAdminTransfer));
        }

        #[test]
        fn test_propose_zero_address_rejected() {
            let mut gate = gate_with_admin(Pubkey::new_unique());
            let result = gate.propose_admin(Pubkey::default());
            assert_eq!(error_code(result), u32::from(ErrorCode::ZeroAddress));
        }

        #[test]
        fn test_cancel_admin_transfer() {
            let mut gate = gate_with_admin(Pubkey::new_unique());
            let candidate = Pubkey::new_unique();
            gate.propose_admin(candidate).unwrap();

            assert_eq!(gate.cancel_admin_transfer().unwrap(), candidate);
            assert_eq!(
                error_code(gate.cancel_admin_transfer()),
                u32::from(ErrorCode::NoPendingAdminTransfer)
            );
            assert_eq!(
                error_code(gate.accept_admin(&candidate)),
                u32::from(ErrorCode::NoPendingAdminTransfer)
            );
        }

        #[test]
        fn test_set_verifier() {
            let mut gate = gate_with_admin(Pubkey::new_unique());
            let old = gate.verifier_program;
            let new = Pubkey::new_unique();

            assert_eq!(gate.set_verifier(new).unwrap(), old);
            assert_eq!(gate.verifier_program, new);
            assert_eq!(error_code(gate.set_verifier(Pubkey::default())), u32::from(ErrorCode::ZeroAddress));
            assert_eq!(gate.verifier_program, new);
        }

        #[test]
        fn test_set_program_vkey() {
            let mut gate = gate_with_admin(Pubkey::new_unique());
            assert_eq!(gate.set_program_vkey([9u8; 32]).unwrap(), [1u8; 32]);
            assert_eq!(gate.program_vkey, [9u8; 32]);
            assert_eq!(
                error_code(gate.set_program_vkey([0u8; 32])),
                u32::from(ErrorCode::InvalidParameter)
            );
        }

        #[test]
        fn test_statistics_saturate() {
            let mut gate = gate_with_admin(Pubkey::new_unique());
            gate.record_allowance_mint(u64::MAX);
            gate.record_allowance_mint(1);
            gate.record_proof_mint(10);
            gate.record_burn(3);

            assert_eq!(gate.total_allowance_minted, u64::MAX);
            assert_eq!(gate.total_proof_minted, 10);
            assert_eq!(gate.proofs_consumed, 1);
            assert_eq!(gate.total_burned, 3);
        }
    }

    // ========================================================================
    // 7. ACCOUNT SIZE TESTS
    // ========================================================================

    mod account_size_tests {
        use super::*;

        fn serialized_len<T: AccountSerialize>(account: &T) -> usize {
            let mut buf = Vec::new();
            account.try_serialize(&mut buf).unwrap();
            buf.len()
        }

        #[test]
        fn test_gate_config_len() {
            let gate = GateConfig {
                pending_admin: Some(Pubkey::new_unique()),
                ..GateConfig::default()
            };
            assert_eq!(serialized_len(&gate), 8 + GateConfig::LEN);
        }

        #[test]
        fn test_record_lens() {
            assert_eq!(serialized_len(&WhitelistEntry::default()), 8 + WhitelistEntry::LEN);
            assert_eq!(serialized_len(&ProofMintRecord::default()), 8 + ProofMintRecord::LEN);
            assert_eq!(serialized_len(&ConsumedProof::default()), 8 + ConsumedProof::LEN);
        }
    }
}
