use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// POOL EVENTS
// ══════════════════════════════════════════════════════════════════════════════

#[event]
pub struct PoolInitialized {
    pub stake_pool: Pubkey,
    pub owner: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_duration: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// POSITION EVENTS
// ══════════════════════════════════════════════════════════════════════════════

#[event]
pub struct Staked {
    pub user: Pubkey,
    pub amount: u64,
    pub staked_balance: u64,
    pub total_staked: u64,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawn {
    pub user: Pubkey,
    pub amount: u64,
    pub staked_balance: u64,
    pub total_staked: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardPaid {
    pub user: Pubkey,
    pub reward: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// EMISSION EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when the owner funds a new emission period
#[event]
pub struct RewardAdded {
    pub reward: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardRateUpdated {
    /// Reward units per second, scaled by 1e18
    pub reward_rate: u128,
    pub timestamp: i64,
}

#[event]
pub struct PeriodFinishUpdated {
    pub period_finish: i64,
    pub timestamp: i64,
}

#[event]
pub struct RewardDurationUpdated {
    pub old_duration: u64,
    pub new_duration: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// OWNERSHIP EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Step 1 of 2: owner nominated a successor
#[event]
pub struct OwnershipTransferStarted {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}

/// Step 2 of 2: successor accepted
#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}
