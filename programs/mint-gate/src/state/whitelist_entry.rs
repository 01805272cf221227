use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Lifetime mint allowance for one user
///
/// PDA Seeds: ["whitelist", gate, user]
///
/// `minted_amount <= mint_allowance` is enforced on every mint. An admin
/// decrease may push the allowance below `minted_amount`, which only removes
/// the remaining headroom.
#[account]
#[derive(Default)]
pub struct WhitelistEntry {
    /// Gate this entry belongs to
    pub gate: Pubkey,

    /// The whitelisted wallet
    pub user: Pubkey,

    /// Cumulative lifetime cap
    pub mint_allowance: u64,

    /// Cumulative amount minted through the allowance path
    pub minted_amount: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl WhitelistEntry {
    /// Account size: 32 + 32 + 8 + 8 + 1 = 81 bytes
    pub const LEN: usize = 32 + 32 + 8 + 8 + 1;

    pub fn is_whitelisted(&self) -> bool {
        self.mint_allowance > 0
    }

    pub fn allowance(&self) -> u64 {
        self.mint_allowance
    }

    pub fn minted_amount(&self) -> u64 {
        self.minted_amount
    }

    pub fn mintable_amount(&self) -> u64 {
        self.mint_allowance.saturating_sub(self.minted_amount)
    }

    /// Starts a fresh allowance. Rejected while an allowance is live so
    /// that minting progress cannot be reset by accident.
    pub fn reset(&mut self, gate: Pubkey, user: Pubkey, allowance: u64, bump: u8) -> Result<()> {
        require!(user != Pubkey::default(), ErrorCode::ZeroAddress);
        require!(allowance > 0, ErrorCode::ZeroAmount);
        require!(!self.is_whitelisted(), ErrorCode::AlreadyWhitelisted);

        self.gate = gate;
        self.user = user;
        self.mint_allowance = allowance;
        self.minted_amount = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn increase(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, ErrorCode::ZeroAmount);
        self.mint_allowance = self
            .mint_allowance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(self.mint_allowance)
    }

    pub fn decrease(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, ErrorCode::ZeroAmount);
        self.mint_allowance = self
            .mint_allowance
            .checked_sub(amount)
            .ok_or(ErrorCode::AllowanceUnderflow)?;
        Ok(self.mint_allowance)
    }

    /// Books `amount` against the allowance. Must run before the mint CPI.
    pub fn record_mint(&mut self, amount: u64) -> Result<u64> {
        require!(self.is_whitelisted(), ErrorCode::NotWhitelisted);
        require!(amount > 0, ErrorCode::ZeroAmount);

        let minted = self
            .minted_amount
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        require!(minted <= self.mint_allowance, ErrorCode::ExceedsAllowance);

        self.minted_amount = minted;
        Ok(minted)
    }
}
