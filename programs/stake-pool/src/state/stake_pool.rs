use anchor_lang::prelude::*;
use crate::constants::POOL_SEED;
use crate::errors::ErrorCode;
use crate::helpers::*;
use super::StakePosition;

/// Staking pool with a time-based reward accumulator
///
/// Rewards stream at `reward_rate` (scaled by PRECISION) between the last
/// `notify_reward_amount` and `period_finish`, split pro rata over
/// `total_staked`. Every balance change goes through `checkpoint` first.
#[account]
#[derive(Default)]
pub struct StakePool {
    /// Signer that opened the pool; part of the PDA seeds, never changes
    pub creator: Pubkey,

    /// Current owner
    pub owner: Pubkey,

    /// Two-step ownership transfer: nominated owner
    pub pending_owner: Option<Pubkey>,

    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,

    /// Vault holding deposited stake
    pub staking_vault: Pubkey,

    /// Vault holding funded rewards
    pub reward_vault: Pubkey,

    /// Sum of all position balances
    pub total_staked: u64,

    /// Reward units per second, scaled by PRECISION
    pub reward_rate: u128,

    /// Accumulated reward per staked unit, scaled by PRECISION
    pub reward_per_token_stored: u128,

    /// Last time the accumulator was brought forward
    pub last_update_time: i64,

    /// End of the current emission period
    pub period_finish: i64,

    /// Length in seconds of the next emission period
    pub reward_duration: u64,

    /// Set while an outgoing transfer is in flight
    pub locked: bool,

    /// PDA bump for the pool
    pub bump: u8,

    /// PDA bump for the vault authority
    pub authority_bump: u8,

    /// Total reward ever funded
    pub total_rewards_funded: u64,

    /// Total reward ever paid out
    pub total_rewards_paid: u64,
}

impl StakePool {
    /// Account size calculation:
    /// - 6 Pubkeys: 32 * 6 = 192 bytes (creator, owner, mints, vaults)
    /// - 1 Option<Pubkey>: 33 bytes (pending_owner)
    /// - 2 u128: 16 * 2 = 32 bytes (reward_rate, reward_per_token_stored)
    /// - 6 u64/i64: 8 * 6 = 48 bytes
    /// - 1 bool + 2 u8: 3 bytes
    /// Total: 192 + 33 + 32 + 48 + 3 = 308 bytes
    pub const LEN: usize = 32 * 6 + 33 + 16 * 2 + 8 * 6 + 3;

    /// Pool PDA for a creator and mint pair
    pub fn address(creator: &Pubkey, staking_mint: &Pubkey, reward_mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[POOL_SEED, creator.as_ref(), staking_mint.as_ref(), reward_mint.as_ref()],
            &crate::ID,
        )
    }

    /// Fresh pool owned by its creator, with no emission period yet
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        &mut self,
        creator: Pubkey,
        staking_mint: Pubkey,
        reward_mint: Pubkey,
        staking_vault: Pubkey,
        reward_vault: Pubkey,
        reward_duration: u64,
        bump: u8,
        authority_bump: u8,
    ) -> Result<()> {
        require!(reward_duration > 0, ErrorCode::InvalidParameter);

        *self = StakePool {
            creator,
            owner: creator,
            staking_mint,
            reward_mint,
            staking_vault,
            reward_vault,
            reward_duration,
            bump,
            authority_bump,
            ..StakePool::default()
        };
        Ok(())
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    // ══════════════════════════════════════════════════════════════════════════
    // ACCUMULATOR
    // ══════════════════════════════════════════════════════════════════════════

    pub fn last_time_reward_applicable(&self, now: i64) -> i64 {
        now.min(self.period_finish)
    }

    pub fn reward_per_token(&self, now: i64) -> Result<u128> {
        if self.total_staked == 0 {
            return Ok(self.reward_per_token_stored);
        }

        let elapsed = self
            .last_time_reward_applicable(now)
            .saturating_sub(self.last_update_time)
            .max(0) as u64;

        let delta = reward_per_token_delta(elapsed, self.reward_rate, self.total_staked)?;
        self.reward_per_token_stored
            .checked_add(delta)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }

    /// Claimable reward for a position, including accrual not yet checkpointed
    pub fn earned(&self, position: &StakePosition, now: i64) -> Result<u64> {
        let pending = pending_reward(
            position.staked_balance,
            self.reward_per_token(now)?,
            position.reward_per_token_paid,
        )?;

        position
            .rewards_accrued
            .checked_add(pending)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }

    /// Bring the accumulator to `now` and settle `position` against it
    pub fn checkpoint(&mut self, now: i64, position: Option<&mut StakePosition>) -> Result<()> {
        self.reward_per_token_stored = self.reward_per_token(now)?;
        self.last_update_time = self.last_time_reward_applicable(now);

        if let Some(position) = position {
            position.rewards_accrued = self.earned(position, now)?;
            position.reward_per_token_paid = self.reward_per_token_stored;
        }

        #[cfg(feature = "verbose")]
        msg!("Checkpoint: rpt={}, last_update={}", self.reward_per_token_stored, self.last_update_time);

        Ok(())
    }

    /// Reward paid over one full period at the current rate
    pub fn reward_for_duration(&self) -> Result<u64> {
        reward_over(self.reward_rate, self.reward_duration)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // BALANCES (call checkpoint first)
    // ══════════════════════════════════════════════════════════════════════════

    pub fn record_deposit(&mut self, position: &mut StakePosition, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::ZeroAmount);

        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        position.staked_balance = position
            .staked_balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn record_withdraw(&mut self, position: &mut StakePosition, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::ZeroAmount);
        require!(amount <= position.staked_balance, ErrorCode::InsufficientStake);

        position.staked_balance -= amount;
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Zero the position's accrued reward and return it for payout
    pub fn take_rewards(&mut self, position: &mut StakePosition) -> Result<u64> {
        let reward = std::mem::take(&mut position.rewards_accrued);
        require!(reward > 0, ErrorCode::NothingToClaim);

        self.total_rewards_paid = self.total_rewards_paid.saturating_add(reward);
        Ok(reward)
    }

    /// Unstake the whole balance and take all accrued reward.
    /// Returns (withdrawn, reward); either may be zero but not both.
    pub fn settle_exit(&mut self, position: &mut StakePosition) -> Result<(u64, u64)> {
        require!(!position.is_empty(), ErrorCode::NothingToExit);

        let amount = position.staked_balance;
        if amount > 0 {
            self.record_withdraw(position, amount)?;
        }
        let reward = match position.rewards_accrued {
            0 => 0,
            _ => self.take_rewards(position)?,
        };
        Ok((amount, reward))
    }

    // ══════════════════════════════════════════════════════════════════════════
    // EMISSION PERIODS
    // ══════════════════════════════════════════════════════════════════════════

    /// Start a new period funded with `reward`. Caller checkpoints first.
    pub fn start_reward_period(&mut self, reward: u64, now: i64) -> Result<()> {
        require!(now >= self.period_finish, ErrorCode::PeriodActive);
        require!(reward > 0, ErrorCode::ZeroAmount);
        require!(self.total_staked > 0, ErrorCode::NoStakers);

        let duration = i64::try_from(self.reward_duration).map_err(|_| ErrorCode::MathOverflow)?;
        self.period_finish = now.checked_add(duration).ok_or(ErrorCode::MathOverflow)?;
        self.reward_rate = reward_rate_for(reward, self.reward_duration)?;
        self.last_update_time = now;
        self.total_rewards_funded = self.total_rewards_funded.saturating_add(reward);
        Ok(())
    }

    /// Returns the previous duration
    pub fn set_reward_duration(&mut self, new_duration: u64, now: i64) -> Result<u64> {
        require!(now >= self.period_finish, ErrorCode::PeriodActive);
        require!(new_duration > 0, ErrorCode::InvalidParameter);
        Ok(std::mem::replace(&mut self.reward_duration, new_duration))
    }

    // ══════════════════════════════════════════════════════════════════════════
    // REENTRANCY GUARD
    // ══════════════════════════════════════════════════════════════════════════

    pub fn lock(&mut self) -> Result<()> {
        require!(!self.locked, ErrorCode::ReentrantCall);
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    // ══════════════════════════════════════════════════════════════════════════
    // OWNERSHIP
    // ══════════════════════════════════════════════════════════════════════════

    pub fn transfer_ownership(&mut self, candidate: Pubkey) -> Result<()> {
        require!(candidate != Pubkey::default(), ErrorCode::ZeroAddress);
        self.pending_owner = Some(candidate);
        Ok(())
    }

    /// Completes a two-step transfer. Returns the previous owner.
    pub fn accept_ownership(&mut self, signer: &Pubkey) -> Result<Pubkey> {
        let pending = self.pending_owner.ok_or(ErrorCode::NoPendingOwnershipTransfer)?;
        require_keys_eq!(pending, *signer, ErrorCode::UnauthorizedAccess);

        self.pending_owner = None;
        Ok(std::mem::replace(&mut self.owner, pending))
    }
}
