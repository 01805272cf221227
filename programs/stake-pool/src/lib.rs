use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

mod formal_verification;

use constants::*;
pub use contexts::*;
use errors::ErrorCode;
use events::*;
use helpers::*;
use state::*;

declare_id!("J3CcZS3pbELdD6zxQforH5Ryky2vg3gjZ1vhhbokSqbo");

/// Write pool and position back to account data before tokens leave a vault.
/// The `locked` flag and settled balances must be on-chain during the CPI.
fn persist<'info>(
    pool: &Account<'info, StakePool>,
    position: &Account<'info, StakePosition>,
) -> Result<()> {
    pool.exit(&crate::ID)?;
    position.exit(&crate::ID)
}

fn process_withdraw(accounts: &mut Withdraw, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    accounts.stake_pool.checkpoint(now, Some(&mut *accounts.stake_position))?;
    accounts.stake_pool.record_withdraw(&mut *accounts.stake_position, amount)?;
    persist(&accounts.stake_pool, &accounts.stake_position)?;

    let pool_key = accounts.stake_pool.key();
    let seeds: &[&[u8]] = &[POOL_AUTHORITY_SEED, pool_key.as_ref(), &[accounts.stake_pool.authority_bump]];

    transfer_from_vault(
        &accounts.token_program.to_account_info(),
        &accounts.staking_vault.to_account_info(),
        &accounts.staking_mint.to_account_info(),
        &accounts.user_staking_account.to_account_info(),
        &accounts.pool_authority,
        amount,
        accounts.staking_mint.decimals,
        seeds,
    )?;

    emit!(Withdrawn {
        user: accounts.user.key(),
        amount,
        staked_balance: accounts.stake_position.staked_balance,
        total_staked: accounts.stake_pool.total_staked,
        timestamp: now,
    });
    Ok(())
}

fn process_claim(accounts: &mut Claim) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    accounts.stake_pool.checkpoint(now, Some(&mut *accounts.stake_position))?;
    let reward = accounts.stake_pool.take_rewards(&mut *accounts.stake_position)?;
    persist(&accounts.stake_pool, &accounts.stake_position)?;

    let pool_key = accounts.stake_pool.key();
    let seeds: &[&[u8]] = &[POOL_AUTHORITY_SEED, pool_key.as_ref(), &[accounts.stake_pool.authority_bump]];

    transfer_from_vault(
        &accounts.token_program.to_account_info(),
        &accounts.reward_vault.to_account_info(),
        &accounts.reward_mint.to_account_info(),
        &accounts.user_reward_account.to_account_info(),
        &accounts.pool_authority,
        reward,
        accounts.reward_mint.decimals,
        seeds,
    )?;

    emit!(RewardPaid {
        user: accounts.user.key(),
        reward,
        timestamp: now,
    });
    msg!("Claimed {} reward units", reward);
    Ok(())
}

fn process_exit(accounts: &mut ExitPool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    accounts.stake_pool.checkpoint(now, Some(&mut *accounts.stake_position))?;
    let (amount, reward) = accounts.stake_pool.settle_exit(&mut *accounts.stake_position)?;
    persist(&accounts.stake_pool, &accounts.stake_position)?;

    let pool_key = accounts.stake_pool.key();
    let seeds: &[&[u8]] = &[POOL_AUTHORITY_SEED, pool_key.as_ref(), &[accounts.stake_pool.authority_bump]];
    let user = accounts.user.key();

    if amount > 0 {
        transfer_from_vault(
            &accounts.token_program.to_account_info(),
            &accounts.staking_vault.to_account_info(),
            &accounts.staking_mint.to_account_info(),
            &accounts.user_staking_account.to_account_info(),
            &accounts.pool_authority,
            amount,
            accounts.staking_mint.decimals,
            seeds,
        )?;

        emit!(Withdrawn {
            user,
            amount,
            staked_balance: 0,
            total_staked: accounts.stake_pool.total_staked,
            timestamp: now,
        });
    }

    if reward > 0 {
        transfer_from_vault(
            &accounts.token_program.to_account_info(),
            &accounts.reward_vault.to_account_info(),
            &accounts.reward_mint.to_account_info(),
            &accounts.user_reward_account.to_account_info(),
            &accounts.pool_authority,
            reward,
            accounts.reward_mint.decimals,
            seeds,
        )?;

        emit!(RewardPaid {
            user,
            reward,
            timestamp: now,
        });
    }

    msg!("Exit: withdrew {} staked, claimed {} reward", amount, reward);
    Ok(())
}

#[program]
pub mod stake_pool {
    use super::*;

    /// Create a pool. `reward_duration` defaults to 90 days.
    pub fn initialize_pool(ctx: Context<InitializePool>, reward_duration: Option<u64>) -> Result<()> {
        ensure_plain_transfer_mint(&ctx.accounts.staking_mint.to_account_info().try_borrow_data()?)?;
        ensure_plain_transfer_mint(&ctx.accounts.reward_mint.to_account_info().try_borrow_data()?)?;

        let reward_duration = reward_duration.unwrap_or(DEFAULT_REWARD_DURATION);
        let clock = Clock::get()?;

        ctx.accounts.stake_pool.open(
            ctx.accounts.owner.key(),
            ctx.accounts.staking_mint.key(),
            ctx.accounts.reward_mint.key(),
            ctx.accounts.staking_vault.key(),
            ctx.accounts.reward_vault.key(),
            reward_duration,
            ctx.bumps.stake_pool,
            ctx.bumps.pool_authority,
        )?;

        emit!(PoolInitialized {
            stake_pool: ctx.accounts.stake_pool.key(),
            owner: ctx.accounts.owner.key(),
            staking_mint: ctx.accounts.staking_mint.key(),
            reward_mint: ctx.accounts.reward_mint.key(),
            reward_duration,
            timestamp: clock.unix_timestamp,
        });

        msg!("Pool initialized: stake {} for {}", ctx.accounts.staking_mint.key(), ctx.accounts.reward_mint.key());
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // POSITIONS
    // ══════════════════════════════════════════════════════════════════════════

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let pool_key = ctx.accounts.stake_pool.key();
        let user = ctx.accounts.user.key();
        let position_bump = ctx.bumps.stake_position;

        let accounts = &mut *ctx.accounts;
        accounts.stake_position.bind(pool_key, user, position_bump);
        accounts.stake_pool.checkpoint(now, Some(&mut *accounts.stake_position))?;
        accounts.stake_pool.record_deposit(&mut *accounts.stake_position, amount)?;

        transfer_into_vault(
            &accounts.token_program.to_account_info(),
            &accounts.user_staking_account.to_account_info(),
            &accounts.staking_mint.to_account_info(),
            &accounts.staking_vault.to_account_info(),
            &accounts.user.to_account_info(),
            amount,
            accounts.staking_mint.decimals,
        )?;

        emit!(Staked {
            user,
            amount,
            staked_balance: accounts.stake_position.staked_balance,
            total_staked: accounts.stake_pool.total_staked,
            timestamp: now,
        });
        Ok(())
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        ctx.accounts.stake_pool.lock()?;
        let result = process_withdraw(ctx.accounts, amount);
        ctx.accounts.stake_pool.unlock();
        result
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        ctx.accounts.stake_pool.lock()?;
        let result = process_claim(ctx.accounts);
        ctx.accounts.stake_pool.unlock();
        result
    }

    pub fn exit(ctx: Context<ExitPool>) -> Result<()> {
        ctx.accounts.stake_pool.lock()?;
        let result = process_exit(ctx.accounts);
        ctx.accounts.stake_pool.unlock();
        result
    }

    // ══════════════════════════════════════════════════════════════════════════
    // EMISSION (owner)
    // ══════════════════════════════════════════════════════════════════════════

    pub fn notify_reward_amount(ctx: Context<NotifyRewardAmount>, reward: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let pool = &mut ctx.accounts.stake_pool;
        pool.checkpoint(now, None)?;
        pool.start_reward_period(reward, now)?;
        let reward_rate = pool.reward_rate;
        let period_finish = pool.period_finish;

        transfer_into_vault(
            &ctx.accounts.token_program.to_account_info(),
            &ctx.accounts.owner_reward_account.to_account_info(),
            &ctx.accounts.reward_mint.to_account_info(),
            &ctx.accounts.reward_vault.to_account_info(),
            &ctx.accounts.owner.to_account_info(),
            reward,
            ctx.accounts.reward_mint.decimals,
        )?;

        emit!(RewardAdded { reward, timestamp: now });
        emit!(RewardRateUpdated { reward_rate, timestamp: now });
        emit!(PeriodFinishUpdated { period_finish, timestamp: now });

        #[cfg(feature = "verbose")]
        msg!("Reward period: rate={} (scaled), finish={}", reward_rate, period_finish);

        msg!("Funded {} reward units until {}", reward, period_finish);
        Ok(())
    }

    pub fn set_reward_duration(ctx: Context<OwnerControl>, new_duration: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let old_duration = ctx.accounts.stake_pool.set_reward_duration(new_duration, now)?;

        emit!(RewardDurationUpdated {
            old_duration,
            new_duration,
            timestamp: now,
        });
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // OWNERSHIP
    // ══════════════════════════════════════════════════════════════════════════

    pub fn transfer_ownership(ctx: Context<OwnerControl>, new_owner: Pubkey) -> Result<()> {
        ctx.accounts.stake_pool.transfer_ownership(new_owner)?;

        emit!(OwnershipTransferStarted {
            previous_owner: ctx.accounts.owner.key(),
            new_owner,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        let new_owner = ctx.accounts.new_owner.key();
        let previous_owner = ctx.accounts.stake_pool.accept_ownership(&new_owner)?;

        emit!(OwnershipTransferred {
            previous_owner,
            new_owner,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    /// Always rejects: an ownerless pool could never be funded again
    pub fn renounce_ownership(_ctx: Context<OwnerControl>) -> Result<()> {
        err!(ErrorCode::RenounceDisabled)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // VIEWS
    // ══════════════════════════════════════════════════════════════════════════

    pub fn earned(ctx: Context<ViewPosition>, _user: Pubkey) -> Result<u64> {
        let now = Clock::get()?.unix_timestamp;
        ctx.accounts.stake_pool.earned(&ctx.accounts.stake_position, now)
    }

    pub fn reward_per_token(ctx: Context<ViewPool>) -> Result<u128> {
        let now = Clock::get()?.unix_timestamp;
        ctx.accounts.stake_pool.reward_per_token(now)
    }
}
