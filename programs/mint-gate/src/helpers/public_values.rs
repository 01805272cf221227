use anchor_lang::prelude::*;
use crate::constants::PUBLIC_VALUES_LEN;
use crate::errors::ErrorCode;

/// Values committed by a mint proof
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicValues {
    /// Amount in the source asset's smallest unit
    pub total_amount: u64,
    /// Digest of the sender address on the source chain
    pub sender_hash: [u8; 32],
    /// Wallet allowed to redeem the proof
    pub owner: Pubkey,
    /// Source transaction identifier, used for replay protection
    pub tx_hash: [u8; 32],
}

impl PublicValues {
    /// Decode the fixed 104-byte layout:
    /// total_amount (u64 LE) | sender_hash | owner | tx_hash
    pub fn decode(data: &[u8]) -> Result<Self> {
        require!(data.len() == PUBLIC_VALUES_LEN, ErrorCode::InvalidPublicValues);

        let total_amount = u64::from_le_bytes(
            data[0..8].try_into().map_err(|_| ErrorCode::InvalidPublicValues)?,
        );
        let sender_hash: [u8; 32] = data[8..40]
            .try_into()
            .map_err(|_| ErrorCode::InvalidPublicValues)?;
        let owner_bytes: [u8; 32] = data[40..72]
            .try_into()
            .map_err(|_| ErrorCode::InvalidPublicValues)?;
        let tx_hash: [u8; 32] = data[72..104]
            .try_into()
            .map_err(|_| ErrorCode::InvalidPublicValues)?;

        Ok(Self {
            total_amount,
            sender_hash,
            owner: Pubkey::new_from_array(owner_bytes),
            tx_hash,
        })
    }

    /// Inverse of `decode`, used by clients and tests to build inputs
    pub fn encode(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(PUBLIC_VALUES_LEN);
        data.extend_from_slice(&self.total_amount.to_le_bytes());
        data.extend_from_slice(&self.sender_hash);
        data.extend_from_slice(&self.owner.to_bytes());
        data.extend_from_slice(&self.tx_hash);
        data
    }

    /// Post-verification checks, in order: amount, owner, tx hash hint
    pub fn validate_for(&self, caller: &Pubkey, tx_hash_hint: &[u8; 32]) -> Result<()> {
        require!(self.total_amount > 0, ErrorCode::ZeroAmount);
        require_keys_eq!(self.owner, *caller, ErrorCode::ProofOwnerMismatch);
        require!(self.tx_hash == *tx_hash_hint, ErrorCode::TxHashMismatch);
        Ok(())
    }
}
