use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// REGISTRY EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a gate is created for an asset mint
#[event]
pub struct GateInitialized {
    pub gate: Pubkey,
    pub asset_mint: Pubkey,
    pub admin: Pubkey,
    pub mint_authority: Pubkey,
    pub native_decimals: u8,
    pub ledger_decimals: u8,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// ALLOWANCE EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a user is whitelisted with a fresh allowance
#[event]
pub struct WhitelistSet {
    pub user: Pubkey,
    pub allowance: u64,
    pub timestamp: i64,
}

#[event]
pub struct AllowanceIncreased {
    pub user: Pubkey,
    pub amount: u64,
    pub new_allowance: u64,
    pub timestamp: i64,
}

#[event]
pub struct AllowanceDecreased {
    pub user: Pubkey,
    pub amount: u64,
    pub new_allowance: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// MINT / BURN EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted on a successful allowance-path mint
#[event]
pub struct Minted {
    pub user: Pubkey,
    pub amount: u64,
    pub minted_amount: u64,
    pub allowance: u64,
    pub timestamp: i64,
}

/// Emitted on a successful proof-gated mint
#[event]
pub struct ProofVerified {
    pub user: Pubkey,
    pub tx_hash: [u8; 32],
    pub sender_hash: [u8; 32],
    pub native_amount: u64,
    pub minted_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct Burned {
    pub user: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// ADMIN EVENTS
// ══════════════════════════════════════════════════════════════════════════════

#[event]
pub struct VerifierChanged {
    pub old_verifier: Pubkey,
    pub new_verifier: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ProgramVkeyChanged {
    pub old_vkey: [u8; 32],
    pub new_vkey: [u8; 32],
    pub timestamp: i64,
}

/// Emitted when the admin proposes a successor (step 1 of 2)
#[event]
pub struct AdminTransferProposed {
    pub current_admin: Pubkey,
    pub proposed_admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AdminTransferCancelled {
    pub admin: Pubkey,
    pub cancelled_admin: Pubkey,
    pub timestamp: i64,
}

/// Emitted when the proposed admin accepts (step 2 of 2)
#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}
