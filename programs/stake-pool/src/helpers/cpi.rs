use anchor_lang::prelude::*;
use anchor_spl::token_interface;

/// Move tokens from a user's account into a pool vault, signed by the user
#[inline(never)]
pub fn transfer_into_vault<'info>(
    token_program: &AccountInfo<'info>,
    source: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
    amount: u64,
    decimals: u8,
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new(
            token_program.clone(),
            token_interface::TransferChecked {
                from: source.clone(),
                mint: mint.clone(),
                to: vault.clone(),
                authority: owner.clone(),
            },
        ),
        amount,
        decimals,
    )
}

/// Pay out of a pool vault, signed by the pool authority PDA
#[inline(never)]
pub fn transfer_from_vault<'info>(
    token_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    pool_authority: &AccountInfo<'info>,
    amount: u64,
    decimals: u8,
    seeds: &[&[u8]],
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program.clone(),
            token_interface::TransferChecked {
                from: vault.clone(),
                mint: mint.clone(),
                to: destination.clone(),
                authority: pool_authority.clone(),
            },
            &[seeds],
        ),
        amount,
        decimals,
    )
}
