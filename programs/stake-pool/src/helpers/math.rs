use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;

/// Scaled rate for a new emission period
/// Formula: reward_rate = reward * PRECISION / duration
pub fn reward_rate_for(reward: u64, duration: u64) -> Result<u128> {
    require!(duration > 0, ErrorCode::InvalidParameter);

    (reward as u128)
        .checked_mul(PRECISION)
        .map(|scaled| scaled / duration as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

/// Accumulator growth over `elapsed` seconds
/// Formula: elapsed * reward_rate / total_staked
pub fn reward_per_token_delta(elapsed: u64, reward_rate: u128, total_staked: u64) -> Result<u128> {
    if total_staked == 0 || elapsed == 0 {
        return Ok(0);
    }

    (elapsed as u128)
        .checked_mul(reward_rate)
        .map(|scaled| scaled / total_staked as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

/// Reward owed to a balance since its last checkpoint
/// Formula: balance * (reward_per_token - paid) / PRECISION
pub fn pending_reward(balance: u64, reward_per_token: u128, reward_per_token_paid: u128) -> Result<u64> {
    let delta = reward_per_token
        .checked_sub(reward_per_token_paid)
        .ok_or(ErrorCode::MathOverflow)?;

    let owed = (balance as u128)
        .checked_mul(delta)
        .ok_or(ErrorCode::MathOverflow)?
        / PRECISION;

    #[cfg(feature = "verbose")]
    msg!("Pending reward: balance={}, delta={}, owed={}", balance, delta, owed);

    u64::try_from(owed).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Whole reward units a scaled rate pays out over `duration` seconds
pub fn reward_over(reward_rate: u128, duration: u64) -> Result<u64> {
    let total = reward_rate
        .checked_mul(duration as u128)
        .ok_or(ErrorCode::MathOverflow)?
        / PRECISION;

    u64::try_from(total).map_err(|_| error!(ErrorCode::MathOverflow))
}
