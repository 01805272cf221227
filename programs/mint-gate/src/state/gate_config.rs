use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Per-asset gate configuration and statistics
///
/// Exactly one GateConfig exists per asset mint (PDA: ["gate", asset_mint]).
/// The gate's mint-authority PDA holds the asset's MintTokens authority.
#[account]
#[derive(Default)]
pub struct GateConfig {
    /// Current admin authority
    pub admin: Pubkey,

    /// Two-step admin transfer: proposed new admin
    pub pending_admin: Option<Pubkey>,

    /// Asset mint controlled by this gate
    pub asset_mint: Pubkey,

    /// Program that verifies mint proofs
    pub verifier_program: Pubkey,

    /// Verification key of the mint-proof program
    pub program_vkey: [u8; 32],

    /// Decimals of amounts carried in proofs
    pub native_decimals: u8,

    /// Decimals of the asset mint
    pub ledger_decimals: u8,

    /// PDA bump for the gate
    pub bump: u8,

    /// PDA bump for the mint authority
    pub mint_authority_bump: u8,

    /// Total minted through the allowance path
    pub total_allowance_minted: u64,

    /// Total minted through the proof path (rescaled units)
    pub total_proof_minted: u64,

    /// Total burned through the gate
    pub total_burned: u64,

    /// Number of proofs consumed
    pub proofs_consumed: u64,

    /// Timestamp when the gate was created
    pub created_at: i64,
}

impl GateConfig {
    /// Account size calculation:
    /// - 3 Pubkeys: 32 * 3 = 96 bytes (admin, asset_mint, verifier_program)
    /// - 1 Option<Pubkey>: 33 bytes (pending_admin)
    /// - program_vkey: 32 bytes
    /// - 4 u8: 4 bytes (native_decimals, ledger_decimals, bump, mint_authority_bump)
    /// - 5 u64/i64: 8 * 5 = 40 bytes
    /// Total: 96 + 33 + 32 + 4 + 40 = 205 bytes
    pub const LEN: usize = 32 * 3 + 33 + 32 + 4 + 8 * 5;

    /// Capability check for administrative instructions
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admin == *key
    }

    pub fn propose_admin(&mut self, candidate: Pubkey) -> Result<()> {
        require!(candidate != Pubkey::default(), ErrorCode::ZeroAddress);
        self.pending_admin = Some(candidate);
        Ok(())
    }

    /// Completes a two-step transfer. Returns the previous admin.
    pub fn accept_admin(&mut self, signer: &Pubkey) -> Result<Pubkey> {
        let pending = self.pending_admin.ok_or(ErrorCode::NoPendingAdminTransfer)?;
        require_keys_eq!(pending, *signer, ErrorCode::UnauthorizedAccess);

        let old_admin = self.admin;
        self.admin = pending;
        self.pending_admin = None;
        Ok(old_admin)
    }

    /// Returns the candidate that was pending.
    pub fn cancel_admin_transfer(&mut self) -> Result<Pubkey> {
        self.pending_admin
            .take()
            .ok_or_else(|| error!(ErrorCode::NoPendingAdminTransfer))
    }

    pub fn set_verifier(&mut self, new_verifier: Pubkey) -> Result<Pubkey> {
        require!(new_verifier != Pubkey::default(), ErrorCode::ZeroAddress);
        Ok(std::mem::replace(&mut self.verifier_program, new_verifier))
    }

    pub fn set_program_vkey(&mut self, new_vkey: [u8; 32]) -> Result<[u8; 32]> {
        require!(new_vkey != [0u8; 32], ErrorCode::InvalidParameter);
        Ok(std::mem::replace(&mut self.program_vkey, new_vkey))
    }

    pub fn record_allowance_mint(&mut self, amount: u64) {
        self.total_allowance_minted = self.total_allowance_minted.saturating_add(amount);
    }

    pub fn record_proof_mint(&mut self, amount: u64) {
        self.total_proof_minted = self.total_proof_minted.saturating_add(amount);
        self.proofs_consumed = self.proofs_consumed.saturating_add(1);
    }

    pub fn record_burn(&mut self, amount: u64) {
        self.total_burned = self.total_burned.saturating_add(amount);
    }
}
