use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount, Mint};
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::*;

// ACCOUNTS - Instruction account validation structs

/// InitializePool - Create a pool, its vaults and the vault authority
///
/// One pool per (creator, staking mint, reward mint). The creator is part of
/// the address, so a pool opened by someone else never blocks yours.
/// Both vaults are PDAs owned by pool_authority.
#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + StakePool::LEN,
        seeds = [POOL_SEED, owner.key().as_ref(), staking_mint.key().as_ref(), reward_mint.key().as_ref()],
        bump
    )]
    pub stake_pool: Account<'info, StakePool>,
    /// CHECK: PDA - vault authority
    #[account(seeds = [POOL_AUTHORITY_SEED, stake_pool.key().as_ref()], bump)]
    pub pool_authority: AccountInfo<'info>,
    pub staking_mint: InterfaceAccount<'info, Mint>,
    pub reward_mint: InterfaceAccount<'info, Mint>,
    #[account(
        init,
        payer = owner,
        seeds = [STAKING_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = pool_authority,
        token::token_program = token_program
    )]
    pub staking_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        init,
        payer = owner,
        seeds = [REWARD_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = pool_authority,
        token::token_program = token_program
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Deposit - Stake tokens, creating the position on first use
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, stake_pool.creator.as_ref(), stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = staking_mint @ ErrorCode::MintMismatch,
        has_one = staking_vault @ ErrorCode::InvalidVault
    )]
    pub stake_pool: Account<'info, StakePool>,
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + StakePosition::LEN,
        seeds = [POSITION_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub stake_position: Account<'info, StakePosition>,
    pub staking_mint: InterfaceAccount<'info, Mint>,
    #[account(mut)]
    pub staking_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_staking_account.mint == staking_mint.key() @ ErrorCode::MintMismatch,
        constraint = user_staking_account.owner == user.key() @ ErrorCode::InvalidTokenOwner
    )]
    pub user_staking_account: InterfaceAccount<'info, TokenAccount>,
    #[account(mut)]
    pub user: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Withdraw - Unstake part or all of a position
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, stake_pool.creator.as_ref(), stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = staking_mint @ ErrorCode::MintMismatch,
        has_one = staking_vault @ ErrorCode::InvalidVault
    )]
    pub stake_pool: Account<'info, StakePool>,
    #[account(
        mut,
        seeds = [POSITION_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump = stake_position.bump
    )]
    pub stake_position: Account<'info, StakePosition>,
    /// CHECK: PDA - signs vault transfers
    #[account(seeds = [POOL_AUTHORITY_SEED, stake_pool.key().as_ref()], bump = stake_pool.authority_bump)]
    pub pool_authority: AccountInfo<'info>,
    pub staking_mint: InterfaceAccount<'info, Mint>,
    #[account(mut)]
    pub staking_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_staking_account.mint == staking_mint.key() @ ErrorCode::MintMismatch,
        constraint = user_staking_account.owner == user.key() @ ErrorCode::InvalidTokenOwner
    )]
    pub user_staking_account: InterfaceAccount<'info, TokenAccount>,
    pub user: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

/// Claim - Collect accrued rewards
#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, stake_pool.creator.as_ref(), stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = reward_mint @ ErrorCode::MintMismatch,
        has_one = reward_vault @ ErrorCode::InvalidVault
    )]
    pub stake_pool: Account<'info, StakePool>,
    #[account(
        mut,
        seeds = [POSITION_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump = stake_position.bump
    )]
    pub stake_position: Account<'info, StakePosition>,
    /// CHECK: PDA - signs vault transfers
    #[account(seeds = [POOL_AUTHORITY_SEED, stake_pool.key().as_ref()], bump = stake_pool.authority_bump)]
    pub pool_authority: AccountInfo<'info>,
    pub reward_mint: InterfaceAccount<'info, Mint>,
    #[account(mut)]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_reward_account.mint == reward_mint.key() @ ErrorCode::MintMismatch,
        constraint = user_reward_account.owner == user.key() @ ErrorCode::InvalidTokenOwner
    )]
    pub user_reward_account: InterfaceAccount<'info, TokenAccount>,
    pub user: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

/// ExitPool - Withdraw the whole balance and claim in one instruction
#[derive(Accounts)]
pub struct ExitPool<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, stake_pool.creator.as_ref(), stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = staking_mint @ ErrorCode::MintMismatch,
        has_one = reward_mint @ ErrorCode::MintMismatch,
        has_one = staking_vault @ ErrorCode::InvalidVault,
        has_one = reward_vault @ ErrorCode::InvalidVault
    )]
    pub stake_pool: Account<'info, StakePool>,
    #[account(
        mut,
        seeds = [POSITION_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump = stake_position.bump
    )]
    pub stake_position: Account<'info, StakePosition>,
    /// CHECK: PDA - signs vault transfers
    #[account(seeds = [POOL_AUTHORITY_SEED, stake_pool.key().as_ref()], bump = stake_pool.authority_bump)]
    pub pool_authority: AccountInfo<'info>,
    pub staking_mint: InterfaceAccount<'info, Mint>,
    pub reward_mint: InterfaceAccount<'info, Mint>,
    #[account(mut)]
    pub staking_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(mut)]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_staking_account.mint == staking_mint.key() @ ErrorCode::MintMismatch,
        constraint = user_staking_account.owner == user.key() @ ErrorCode::InvalidTokenOwner
    )]
    pub user_staking_account: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_reward_account.mint == reward_mint.key() @ ErrorCode::MintMismatch,
        constraint = user_reward_account.owner == user.key() @ ErrorCode::InvalidTokenOwner
    )]
    pub user_reward_account: InterfaceAccount<'info, TokenAccount>,
    pub user: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

/// NotifyRewardAmount - Owner funds and starts a new emission period
#[derive(Accounts)]
pub struct NotifyRewardAmount<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, stake_pool.creator.as_ref(), stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = reward_mint @ ErrorCode::MintMismatch,
        has_one = reward_vault @ ErrorCode::InvalidVault,
        constraint = stake_pool.is_owner(&owner.key()) @ ErrorCode::UnauthorizedAccess
    )]
    pub stake_pool: Account<'info, StakePool>,
    pub reward_mint: InterfaceAccount<'info, Mint>,
    #[account(mut)]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        constraint = owner_reward_account.mint == reward_mint.key() @ ErrorCode::MintMismatch,
        constraint = owner_reward_account.owner == owner.key() @ ErrorCode::InvalidTokenOwner
    )]
    pub owner_reward_account: InterfaceAccount<'info, TokenAccount>,
    pub owner: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

/// OwnerControl - Owner-only configuration changes
#[derive(Accounts)]
pub struct OwnerControl<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, stake_pool.creator.as_ref(), stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        constraint = stake_pool.is_owner(&owner.key()) @ ErrorCode::UnauthorizedAccess
    )]
    pub stake_pool: Account<'info, StakePool>,
    pub owner: Signer<'info>,
}

/// AcceptOwnership - Nominated owner completes the two-step transfer
#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED, stake_pool.creator.as_ref(), stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,
    pub new_owner: Signer<'info>,
}

/// ViewPool - Read-only pool queries
#[derive(Accounts)]
pub struct ViewPool<'info> {
    #[account(
        seeds = [POOL_SEED, stake_pool.creator.as_ref(), stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,
}

/// ViewPosition - Read-only position queries
#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct ViewPosition<'info> {
    #[account(
        seeds = [POOL_SEED, stake_pool.creator.as_ref(), stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,
    #[account(
        seeds = [POSITION_SEED, stake_pool.key().as_ref(), user.as_ref()],
        bump = stake_position.bump
    )]
    pub stake_position: Account<'info, StakePosition>,
}
