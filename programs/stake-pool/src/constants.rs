// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// One pool per creator and mint pair: ["stake_pool", creator, staking_mint, reward_mint]
pub const POOL_SEED: &[u8] = b"stake_pool";

/// Signs vault transfers: ["pool_authority", stake_pool]
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";

/// Holds deposited stake: ["staking_vault", stake_pool]
pub const STAKING_VAULT_SEED: &[u8] = b"staking_vault";

/// Holds funded rewards: ["reward_vault", stake_pool]
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Per-user position: ["position", stake_pool, user]
pub const POSITION_SEED: &[u8] = b"position";

// ══════════════════════════════════════════════════════════════════════════════
// REWARD ACCOUNTING
// ══════════════════════════════════════════════════════════════════════════════

/// Fixed-point scale for reward_rate and reward_per_token (1e18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Reward duration used when the pool is created without one: 90 days
pub const DEFAULT_REWARD_DURATION: u64 = 90 * 24 * 60 * 60;
