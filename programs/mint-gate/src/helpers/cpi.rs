use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::program::invoke;
use anchor_spl::token_2022::spl_token_2022::instruction::AuthorityType;
use anchor_spl::token_interface;
use crate::constants::*;

/// Build the instruction data for the verifier's `verify_proof`
/// Layout: discriminator | vkey | u32 LE len + public_values | u32 LE len + proof
pub fn build_verify_proof_data(
    program_vkey: &[u8; 32],
    public_values: &[u8],
    proof: &[u8],
) -> Vec<u8> {
    let mut data = Vec::with_capacity(8 + 32 + 4 + public_values.len() + 4 + proof.len());
    data.extend_from_slice(&VERIFY_PROOF_DISCRIMINATOR);
    data.extend_from_slice(program_vkey);
    data.extend_from_slice(&(public_values.len() as u32).to_le_bytes());
    data.extend_from_slice(public_values);
    data.extend_from_slice(&(proof.len() as u32).to_le_bytes());
    data.extend_from_slice(proof);
    data
}

/// Ask the verifier program to check a proof.
/// The verifier aborts on an invalid proof, which fails this whole
/// instruction; returning Ok means the proof was accepted.
#[inline(never)]
pub fn verify_proof_cpi<'info>(
    verifier_program: &AccountInfo<'info>,
    program_vkey: &[u8; 32],
    public_values: &[u8],
    proof: &[u8],
) -> Result<()> {
    let instruction = Box::new(Instruction {
        program_id: verifier_program.key(),
        accounts: vec![],
        data: build_verify_proof_data(program_vkey, public_values, proof),
    });

    #[cfg(feature = "verbose")]
    msg!("Verifier CPI: public_values={} bytes, proof={} bytes", public_values.len(), proof.len());

    invoke(&*instruction, &[verifier_program.to_account_info()])?;
    Ok(())
}

/// Mint `amount` of the asset to `destination`, signed by the gate's mint authority
#[inline(never)]
pub fn mint_to_cpi<'info>(
    token_program: &AccountInfo<'info>,
    asset_mint: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    mint_authority: &AccountInfo<'info>,
    amount: u64,
    seeds: &[&[u8]],
) -> Result<()> {
    token_interface::mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            token_interface::MintTo {
                mint: asset_mint.clone(),
                to: destination.clone(),
                authority: mint_authority.clone(),
            },
            &[seeds],
        ),
        amount,
    )
}

/// Burn from an owner's token account. The mint authority PDA signs as the
/// owner's approved delegate, so the token program enforces the approval.
#[inline(never)]
pub fn burn_from_cpi<'info>(
    token_program: &AccountInfo<'info>,
    asset_mint: &AccountInfo<'info>,
    source: &AccountInfo<'info>,
    mint_authority: &AccountInfo<'info>,
    amount: u64,
    seeds: &[&[u8]],
) -> Result<()> {
    token_interface::burn(
        CpiContext::new_with_signer(
            token_program.clone(),
            token_interface::Burn {
                mint: asset_mint.clone(),
                from: source.clone(),
                authority: mint_authority.clone(),
            },
            &[seeds],
        ),
        amount,
    )
}

/// Hand the asset's MintTokens authority to the gate's mint authority PDA
#[inline(never)]
pub fn grant_mint_authority_cpi<'info>(
    token_program: &AccountInfo<'info>,
    asset_mint: &AccountInfo<'info>,
    current_authority: &AccountInfo<'info>,
    new_authority: Pubkey,
) -> Result<()> {
    token_interface::set_authority(
        CpiContext::new(
            token_program.clone(),
            token_interface::SetAuthority {
                current_authority: current_authority.clone(),
                account_or_mint: asset_mint.clone(),
            },
        ),
        AuthorityType::MintTokens,
        Some(new_authority),
    )
}
