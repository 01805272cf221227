use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

mod formal_verification;
mod tests;

use constants::*;
pub use contexts::*;
use errors::ErrorCode;
use events::*;
use helpers::*;

declare_id!("AShsoeGACmxfkGYjC7zCgg8mKRpDfC9nf3pfe2D7r1N5");

#[program]
pub mod mint_gate {
    use super::*;

    pub fn initialize_gate(
        ctx: Context<InitializeGate>,
        native_decimals: u8,
        verifier_program: Pubkey,
        program_vkey: [u8; 32],
    ) -> Result<()> {
        let ledger_decimals = ctx.accounts.asset_mint.decimals;
        validate_decimals(native_decimals, ledger_decimals)?;
        require!(verifier_program != Pubkey::default(), ErrorCode::ZeroAddress);
        require!(program_vkey != [0u8; 32], ErrorCode::InvalidParameter);

        let clock = Clock::get()?;
        let gate = &mut ctx.accounts.gate_config;

        gate.admin = ctx.accounts.admin.key();
        gate.pending_admin = None;
        gate.asset_mint = ctx.accounts.asset_mint.key();
        gate.verifier_program = verifier_program;
        gate.program_vkey = program_vkey;
        gate.native_decimals = native_decimals;
        gate.ledger_decimals = ledger_decimals;
        gate.bump = ctx.bumps.gate_config;
        gate.mint_authority_bump = ctx.bumps.mint_authority;
        gate.total_allowance_minted = 0;
        gate.total_proof_minted = 0;
        gate.total_burned = 0;
        gate.proofs_consumed = 0;
        gate.created_at = clock.unix_timestamp;

        grant_mint_authority_cpi(
            &ctx.accounts.token_program.to_account_info(),
            &ctx.accounts.asset_mint.to_account_info(),
            &ctx.accounts.current_mint_authority.to_account_info(),
            ctx.accounts.mint_authority.key(),
        )?;

        emit!(GateInitialized {
            gate: ctx.accounts.gate_config.key(),
            asset_mint: ctx.accounts.asset_mint.key(),
            admin: ctx.accounts.admin.key(),
            mint_authority: ctx.accounts.mint_authority.key(),
            native_decimals,
            ledger_decimals,
            timestamp: clock.unix_timestamp,
        });

        msg!("Gate initialized for mint {}", ctx.accounts.asset_mint.key());
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // WHITELIST ALLOWANCE PATH
    // ══════════════════════════════════════════════════════════════════════════

    pub fn set_whitelist(ctx: Context<SetWhitelist>, user: Pubkey, allowance: u64) -> Result<()> {
        let gate_key = ctx.accounts.gate_config.key();
        let bump = ctx.bumps.whitelist_entry;
        ctx.accounts.whitelist_entry.reset(gate_key, user, allowance, bump)?;

        emit!(WhitelistSet {
            user,
            allowance,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn increase_allowance(ctx: Context<UpdateAllowance>, user: Pubkey, amount: u64) -> Result<()> {
        let new_allowance = ctx.accounts.whitelist_entry.increase(amount)?;

        emit!(AllowanceIncreased {
            user,
            amount,
            new_allowance,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn decrease_allowance(ctx: Context<UpdateAllowance>, user: Pubkey, amount: u64) -> Result<()> {
        let new_allowance = ctx.accounts.whitelist_entry.decrease(amount)?;

        emit!(AllowanceDecreased {
            user,
            amount,
            new_allowance,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn mint(ctx: Context<MintFromAllowance>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;

        // Effects before the mint CPI
        let entry = &mut ctx.accounts.whitelist_entry;
        let minted_amount = entry.record_mint(amount)?;
        let allowance = entry.mint_allowance;
        ctx.accounts.gate_config.record_allowance_mint(amount);

        let gate_key = ctx.accounts.gate_config.key();
        let authority_bump = ctx.accounts.gate_config.mint_authority_bump;
        let seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, gate_key.as_ref(), &[authority_bump]];

        mint_to_cpi(
            &ctx.accounts.token_program.to_account_info(),
            &ctx.accounts.asset_mint.to_account_info(),
            &ctx.accounts.user_token_account.to_account_info(),
            &ctx.accounts.mint_authority,
            amount,
            seeds,
        )?;

        emit!(Minted {
            user: ctx.accounts.user.key(),
            amount,
            minted_amount,
            allowance,
            timestamp: clock.unix_timestamp,
        });

        let decimals = ctx.accounts.gate_config.ledger_decimals;
        msg!("Allowance mint: {} tokens ({} units)", format_tokens(amount, decimals), amount);
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // PROOF-GATED MINT PATH
    // ══════════════════════════════════════════════════════════════════════════

    pub fn mint_with_proof(
        ctx: Context<MintWithProof>,
        tx_hash: [u8; 32],
        proof: Vec<u8>,
        public_values: Vec<u8>,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let user = ctx.accounts.user.key();

        // Verifier aborts the transaction on an invalid proof
        verify_proof_cpi(
            &ctx.accounts.verifier_program,
            &ctx.accounts.gate_config.program_vkey,
            &public_values,
            &proof,
        )?;

        let values = PublicValues::decode(&public_values)?;
        values.validate_for(&user, &tx_hash)?;

        let gate_key = ctx.accounts.gate_config.key();
        let consumed_bump = ctx.bumps.consumed_proof;
        let record_bump = ctx.bumps.proof_mint_record;

        // Effects: consume the hash and book the mint before the CPI
        ctx.accounts
            .consumed_proof
            .consume(gate_key, values.tx_hash, user, clock.unix_timestamp, consumed_bump)?;

        let minted_amount = rescale_native_amount(
            values.total_amount,
            ctx.accounts.gate_config.native_decimals,
            ctx.accounts.gate_config.ledger_decimals,
        )?;

        let record = &mut ctx.accounts.proof_mint_record;
        record.gate = gate_key;
        record.user = user;
        record.bump = record_bump;
        record.record(minted_amount, values.tx_hash)?;

        ctx.accounts.gate_config.record_proof_mint(minted_amount);

        let authority_bump = ctx.accounts.gate_config.mint_authority_bump;
        let seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, gate_key.as_ref(), &[authority_bump]];

        mint_to_cpi(
            &ctx.accounts.token_program.to_account_info(),
            &ctx.accounts.asset_mint.to_account_info(),
            &ctx.accounts.user_token_account.to_account_info(),
            &ctx.accounts.mint_authority,
            minted_amount,
            seeds,
        )?;

        emit!(ProofVerified {
            user,
            tx_hash: values.tx_hash,
            sender_hash: values.sender_hash,
            native_amount: values.total_amount,
            minted_amount,
            timestamp: clock.unix_timestamp,
        });

        msg!("Proof mint: native={} minted={} units", values.total_amount, minted_amount);
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // BURN
    // ══════════════════════════════════════════════════════════════════════════

    pub fn burn(ctx: Context<BurnFrom>, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::ZeroAmount);

        let gate_key = ctx.accounts.gate_config.key();
        let authority_bump = ctx.accounts.gate_config.mint_authority_bump;
        let seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, gate_key.as_ref(), &[authority_bump]];

        // Token program rejects unless the user approved mint_authority for `amount`
        burn_from_cpi(
            &ctx.accounts.token_program.to_account_info(),
            &ctx.accounts.asset_mint.to_account_info(),
            &ctx.accounts.user_token_account.to_account_info(),
            &ctx.accounts.mint_authority,
            amount,
            seeds,
        )?;

        ctx.accounts.gate_config.record_burn(amount);

        emit!(Burned {
            user: ctx.accounts.user.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // ADMIN
    // ══════════════════════════════════════════════════════════════════════════

    pub fn set_verifier(ctx: Context<AdminControl>, new_verifier: Pubkey) -> Result<()> {
        let old_verifier = ctx.accounts.gate_config.set_verifier(new_verifier)?;

        emit!(VerifierChanged {
            old_verifier,
            new_verifier,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn set_program_vkey(ctx: Context<AdminControl>, new_vkey: [u8; 32]) -> Result<()> {
        let old_vkey = ctx.accounts.gate_config.set_program_vkey(new_vkey)?;

        emit!(ProgramVkeyChanged {
            old_vkey,
            new_vkey,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn propose_admin_transfer(ctx: Context<AdminControl>, new_admin: Pubkey) -> Result<()> {
        ctx.accounts.gate_config.propose_admin(new_admin)?;

        emit!(AdminTransferProposed {
            current_admin: ctx.accounts.admin.key(),
            proposed_admin: new_admin,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn cancel_admin_transfer(ctx: Context<AdminControl>) -> Result<()> {
        let cancelled_admin = ctx.accounts.gate_config.cancel_admin_transfer()?;

        emit!(AdminTransferCancelled {
            admin: ctx.accounts.admin.key(),
            cancelled_admin,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn accept_admin_transfer(ctx: Context<AcceptAdminTransfer>) -> Result<()> {
        let new_admin = ctx.accounts.new_admin.key();
        let old_admin = ctx.accounts.gate_config.accept_admin(&new_admin)?;

        emit!(AdminTransferred {
            old_admin,
            new_admin,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    /// Always rejects: a gate without an admin could never rotate its verifier
    pub fn renounce_admin(_ctx: Context<AdminControl>) -> Result<()> {
        err!(ErrorCode::RenounceDisabled)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // VIEWS
    // ══════════════════════════════════════════════════════════════════════════

    pub fn mintable_amount(ctx: Context<ViewWhitelist>, _user: Pubkey) -> Result<u64> {
        Ok(ctx.accounts.whitelist_entry.mintable_amount())
    }
}
