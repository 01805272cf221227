// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// One gate per asset mint: ["gate", asset_mint]
pub const GATE_SEED: &[u8] = b"gate";

/// Holds the asset's mint authority: ["mint_authority", gate]
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

/// Per-user allowance entry: ["whitelist", gate, user]
pub const WHITELIST_SEED: &[u8] = b"whitelist";

/// Per-user proof mint record: ["proof_mint", gate, user]
pub const PROOF_MINT_SEED: &[u8] = b"proof_mint";

/// Consumed proof marker: ["consumed_proof", gate, tx_hash]
pub const CONSUMED_PROOF_SEED: &[u8] = b"consumed_proof";

// ══════════════════════════════════════════════════════════════════════════════
// DECIMAL RESCALING
// ══════════════════════════════════════════════════════════════════════════════

/// Upper bound for both the proof's native decimals and the asset's decimals
pub const MAX_DECIMALS: u8 = 18;

/// Powers of ten up to 10^18 (all fit in u64)
pub const POW10: [u64; 19] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

// ══════════════════════════════════════════════════════════════════════════════
// PROOF VERIFIER
// ══════════════════════════════════════════════════════════════════════════════

/// Anchor discriminator of the verifier's `verify_proof` instruction
/// sha256("global:verify_proof")[..8]
pub const VERIFY_PROOF_DISCRIMINATOR: [u8; 8] = [217, 211, 191, 110, 144, 13, 186, 98];

/// Encoded public values: total_amount (8) + sender_hash (32) + owner (32) + tx_hash (32)
pub const PUBLIC_VALUES_LEN: usize = 8 + 32 + 32 + 32;
