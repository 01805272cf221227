use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::*;

/// Validates the decimal pair a gate is created with.
/// Proof amounts may never carry more precision than the asset itself.
pub fn validate_decimals(native_decimals: u8, ledger_decimals: u8) -> Result<()> {
    require!(native_decimals <= MAX_DECIMALS, ErrorCode::InvalidDecimals);
    require!(ledger_decimals <= MAX_DECIMALS, ErrorCode::InvalidDecimals);
    require!(native_decimals <= ledger_decimals, ErrorCode::InvalidDecimals);
    Ok(())
}

/// Rescale a proof amount from native units into asset units
/// Formula: minted = native_amount * 10^(ledger_decimals - native_decimals)
pub fn rescale_native_amount(
    native_amount: u64,
    native_decimals: u8,
    ledger_decimals: u8,
) -> Result<u64> {
    validate_decimals(native_decimals, ledger_decimals)?;

    let factor = POW10[(ledger_decimals - native_decimals) as usize];

    #[cfg(feature = "verbose")]
    msg!("Rescale: native={}, native_decimals={}, ledger_decimals={}, factor={}",
        native_amount, native_decimals, ledger_decimals, factor);

    let minted = (native_amount as u128)
        .checked_mul(factor as u128)
        .ok_or(ErrorCode::MathOverflow)?;

    let minted = u64::try_from(minted).map_err(|_| ErrorCode::MathOverflow)?;
    require!(minted > 0, ErrorCode::ZeroRescaledAmount);
    Ok(minted)
}

/// Render a raw amount as a decimal string for log output
pub fn format_tokens(amount: u64, decimals: u8) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    if decimals == 0 {
        return amount.to_string();
    }

    let unit = POW10[decimals as usize];
    format!("{}.{:0width$}", amount / unit, amount % unit, width = decimals as usize)
}
