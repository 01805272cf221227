use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Running total of proof-gated mints for one user
///
/// PDA Seeds: ["proof_mint", gate, user]
/// Created lazily on the user's first proof-gated mint.
#[account]
#[derive(Default)]
pub struct ProofMintRecord {
    /// Gate this record belongs to
    pub gate: Pubkey,

    /// The minting wallet
    pub user: Pubkey,

    /// Cumulative rescaled amount minted through proofs
    pub minted_amount: u64,

    /// Last consumed proof transaction hash (informational)
    pub latest_proof_tx_hash: [u8; 32],

    /// Number of proofs redeemed
    pub proof_count: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl ProofMintRecord {
    /// Account size: 32 + 32 + 8 + 32 + 8 + 1 = 113 bytes
    pub const LEN: usize = 32 + 32 + 8 + 32 + 8 + 1;

    pub fn record(&mut self, amount: u64, tx_hash: [u8; 32]) -> Result<u64> {
        self.minted_amount = self
            .minted_amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.latest_proof_tx_hash = tx_hash;
        self.proof_count = self.proof_count.saturating_add(1);
        Ok(self.minted_amount)
    }
}

/// Replay marker for one proof transaction hash
///
/// PDA Seeds: ["consumed_proof", gate, tx_hash]
/// Never closed: once `consumed` is set the hash can not be redeemed again.
#[account]
#[derive(Default)]
pub struct ConsumedProof {
    /// Gate this marker belongs to
    pub gate: Pubkey,

    /// Consumed proof transaction hash
    pub tx_hash: [u8; 32],

    /// Wallet that redeemed the proof
    pub consumed_by: Pubkey,

    /// Set once, never cleared
    pub consumed: bool,

    /// Timestamp of redemption
    pub consumed_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl ConsumedProof {
    /// Account size: 32 + 32 + 32 + 1 + 8 + 1 = 106 bytes
    pub const LEN: usize = 32 + 32 + 32 + 1 + 8 + 1;

    pub fn consume(
        &mut self,
        gate: Pubkey,
        tx_hash: [u8; 32],
        consumer: Pubkey,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.consumed, ErrorCode::ProofAlreadyUsed);

        self.gate = gate;
        self.tx_hash = tx_hash;
        self.consumed_by = consumer;
        self.consumed = true;
        self.consumed_at = now;
        self.bump = bump;
        Ok(())
    }
}
