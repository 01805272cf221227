use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount, Mint};
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::*;

// ACCOUNTS - Instruction account validation structs

/// InitializeGate - Register a gate for an asset mint
///
/// The PDA is unique per mint, so a second gate for the same asset fails
/// at account creation. The current mint authority signs so the gate can
/// take over the MintTokens authority in the same instruction.
#[derive(Accounts)]
pub struct InitializeGate<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + GateConfig::LEN,
        seeds = [GATE_SEED, asset_mint.key().as_ref()],
        bump
    )]
    pub gate_config: Account<'info, GateConfig>,
    /// CHECK: PDA - becomes the asset's mint authority
    #[account(seeds = [MINT_AUTHORITY_SEED, gate_config.key().as_ref()], bump)]
    pub mint_authority: AccountInfo<'info>,
    #[account(mut)]
    pub asset_mint: InterfaceAccount<'info, Mint>,
    /// Holder of the asset's mint authority before the hand-off
    pub current_mint_authority: Signer<'info>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// SetWhitelist - Admin creates (or re-creates after a full decrease) an allowance
#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct SetWhitelist<'info> {
    #[account(
        seeds = [GATE_SEED, gate_config.asset_mint.as_ref()],
        bump = gate_config.bump,
        constraint = gate_config.is_admin(&admin.key()) @ ErrorCode::UnauthorizedAccess
    )]
    pub gate_config: Account<'info, GateConfig>,
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + WhitelistEntry::LEN,
        seeds = [WHITELIST_SEED, gate_config.key().as_ref(), user.as_ref()],
        bump
    )]
    pub whitelist_entry: Account<'info, WhitelistEntry>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// UpdateAllowance - Admin increases or decreases an existing allowance
/// The entry must already exist (created by set_whitelist).
#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct UpdateAllowance<'info> {
    #[account(
        seeds = [GATE_SEED, gate_config.asset_mint.as_ref()],
        bump = gate_config.bump,
        constraint = gate_config.is_admin(&admin.key()) @ ErrorCode::UnauthorizedAccess
    )]
    pub gate_config: Account<'info, GateConfig>,
    #[account(
        mut,
        seeds = [WHITELIST_SEED, gate_config.key().as_ref(), user.as_ref()],
        bump = whitelist_entry.bump
    )]
    pub whitelist_entry: Account<'info, WhitelistEntry>,
    pub admin: Signer<'info>,
}

/// MintFromAllowance - Whitelisted user mints against their allowance
#[derive(Accounts)]
pub struct MintFromAllowance<'info> {
    #[account(
        mut,
        seeds = [GATE_SEED, asset_mint.key().as_ref()],
        bump = gate_config.bump,
        has_one = asset_mint @ ErrorCode::MintMismatch
    )]
    pub gate_config: Account<'info, GateConfig>,
    #[account(
        mut,
        seeds = [WHITELIST_SEED, gate_config.key().as_ref(), user.key().as_ref()],
        bump = whitelist_entry.bump
    )]
    pub whitelist_entry: Account<'info, WhitelistEntry>,
    /// CHECK: PDA - signs mint_to
    #[account(seeds = [MINT_AUTHORITY_SEED, gate_config.key().as_ref()], bump = gate_config.mint_authority_bump)]
    pub mint_authority: AccountInfo<'info>,
    #[account(mut)]
    pub asset_mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        constraint = user_token_account.mint == asset_mint.key() @ ErrorCode::MintMismatch,
        constraint = user_token_account.owner == user.key() @ ErrorCode::InvalidTokenOwner
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,
    pub user: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

/// MintWithProof - Redeem a verified proof for a rescaled mint
///
/// SECURITY NOTES:
/// - consumed_proof is keyed by the tx_hash argument; the handler requires
///   it to equal the tx_hash inside the verified public values.
/// - verifier_program must be the program configured on the gate.
#[derive(Accounts)]
#[instruction(tx_hash: [u8; 32])]
pub struct MintWithProof<'info> {
    #[account(
        mut,
        seeds = [GATE_SEED, asset_mint.key().as_ref()],
        bump = gate_config.bump,
        has_one = asset_mint @ ErrorCode::MintMismatch
    )]
    pub gate_config: Account<'info, GateConfig>,
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + ProofMintRecord::LEN,
        seeds = [PROOF_MINT_SEED, gate_config.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub proof_mint_record: Account<'info, ProofMintRecord>,
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + ConsumedProof::LEN,
        seeds = [CONSUMED_PROOF_SEED, gate_config.key().as_ref(), tx_hash.as_ref()],
        bump
    )]
    pub consumed_proof: Account<'info, ConsumedProof>,
    /// CHECK: Verifier program - address pinned to gate configuration
    #[account(
        executable,
        address = gate_config.verifier_program @ ErrorCode::InvalidVerifier
    )]
    pub verifier_program: AccountInfo<'info>,
    /// CHECK: PDA - signs mint_to
    #[account(seeds = [MINT_AUTHORITY_SEED, gate_config.key().as_ref()], bump = gate_config.mint_authority_bump)]
    pub mint_authority: AccountInfo<'info>,
    #[account(mut)]
    pub asset_mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        constraint = user_token_account.mint == asset_mint.key() @ ErrorCode::MintMismatch,
        constraint = user_token_account.owner == user.key() @ ErrorCode::InvalidTokenOwner
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(mut)]
    pub user: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// BurnFrom - Burn caller tokens through the gate
/// The caller must first approve mint_authority as delegate for `amount`.
#[derive(Accounts)]
pub struct BurnFrom<'info> {
    #[account(
        mut,
        seeds = [GATE_SEED, asset_mint.key().as_ref()],
        bump = gate_config.bump,
        has_one = asset_mint @ ErrorCode::MintMismatch
    )]
    pub gate_config: Account<'info, GateConfig>,
    /// CHECK: PDA - approved delegate on the user's token account
    #[account(seeds = [MINT_AUTHORITY_SEED, gate_config.key().as_ref()], bump = gate_config.mint_authority_bump)]
    pub mint_authority: AccountInfo<'info>,
    #[account(mut)]
    pub asset_mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        constraint = user_token_account.mint == asset_mint.key() @ ErrorCode::MintMismatch,
        constraint = user_token_account.owner == user.key() @ ErrorCode::InvalidTokenOwner
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,
    pub user: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

/// AdminControl - Admin-only configuration changes
#[derive(Accounts)]
pub struct AdminControl<'info> {
    #[account(
        mut,
        seeds = [GATE_SEED, gate_config.asset_mint.as_ref()],
        bump = gate_config.bump,
        constraint = gate_config.is_admin(&admin.key()) @ ErrorCode::UnauthorizedAccess
    )]
    pub gate_config: Account<'info, GateConfig>,
    pub admin: Signer<'info>,
}

/// AcceptAdminTransfer - Proposed admin accepts the transfer (two-step transfer)
#[derive(Accounts)]
pub struct AcceptAdminTransfer<'info> {
    #[account(
        mut,
        seeds = [GATE_SEED, gate_config.asset_mint.as_ref()],
        bump = gate_config.bump
    )]
    pub gate_config: Account<'info, GateConfig>,
    /// The proposed admin who is accepting the transfer
    pub new_admin: Signer<'info>,
}

/// ViewWhitelist - Read-only allowance queries
#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct ViewWhitelist<'info> {
    #[account(seeds = [GATE_SEED, gate_config.asset_mint.as_ref()], bump = gate_config.bump)]
    pub gate_config: Account<'info, GateConfig>,
    #[account(
        seeds = [WHITELIST_SEED, gate_config.key().as_ref(), user.as_ref()],
        bump = whitelist_entry.bump
    )]
    pub whitelist_entry: Account<'info, WhitelistEntry>,
}
