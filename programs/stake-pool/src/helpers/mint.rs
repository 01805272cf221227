use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::extension::{
    BaseStateWithExtensions, ExtensionType, StateWithExtensions,
};
use anchor_spl::token_2022::spl_token_2022::state::Mint;
use crate::errors::ErrorCode;

/// Extensions that make the amount received differ from the amount sent
pub fn alters_transfer_amount(extension: &ExtensionType) -> bool {
    matches!(
        extension,
        ExtensionType::TransferFeeConfig | ExtensionType::TransferHook
    )
}

/// Pool accounting credits exactly the transferred amount, so a mint may
/// not charge transfer fees or run a transfer hook.
/// Accepts legacy SPL Token mints and plain Token-2022 mints.
pub fn ensure_plain_transfer_mint(mint_data: &[u8]) -> Result<()> {
    let mint = StateWithExtensions::<Mint>::unpack(mint_data)?;
    let extensions = mint.get_extension_types()?;

    #[cfg(feature = "verbose")]
    msg!("Mint extensions: {:?}", extensions);

    require!(
        !extensions.iter().any(alters_transfer_amount),
        ErrorCode::UnsupportedMintExtension
    );
    Ok(())
}
