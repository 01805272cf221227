use anchor_lang::prelude::*;

/// One user's stake in one pool (PDA: ["position", stake_pool, user])
#[account]
#[derive(Default)]
pub struct StakePosition {
    pub pool: Pubkey,
    pub owner: Pubkey,

    /// Tokens currently staked
    pub staked_balance: u64,

    /// Pool accumulator value at this position's last checkpoint
    pub reward_per_token_paid: u128,

    /// Settled but unclaimed reward
    pub rewards_accrued: u64,

    pub bump: u8,
}

impl StakePosition {
    /// 2 Pubkeys (64) + staked_balance (8) + reward_per_token_paid (16)
    /// + rewards_accrued (8) + bump (1) = 97 bytes
    pub const LEN: usize = 32 * 2 + 8 + 16 + 8 + 1;

    /// Set identity on first deposit; no-op afterwards
    pub fn bind(&mut self, pool: Pubkey, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.pool = pool;
            self.owner = owner;
            self.bump = bump;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.staked_balance == 0 && self.rewards_accrued == 0
    }
}
