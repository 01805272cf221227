use anchor_lang::prelude::*;

/// Mint Gate Error Codes
///
/// Every abort surfaces as one of these codes (6000 + index).
#[error_code]
pub enum ErrorCode {
    // Input validation
    #[msg("Zero address not allowed")]
    ZeroAddress,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Invalid parameter")]
    InvalidParameter,

    #[msg("Decimals exceed supported maximum (18)")]
    InvalidDecimals,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    // Authorization
    #[msg("Unauthorized")]
    UnauthorizedAccess,

    #[msg("Caller is not whitelisted")]
    NotWhitelisted,

    #[msg("Ownership cannot be renounced")]
    RenounceDisabled,

    #[msg("No pending admin transfer")]
    NoPendingAdminTransfer,

    // Allowance invariants
    #[msg("User already whitelisted - use increase/decrease")]
    AlreadyWhitelisted,

    #[msg("Mint would exceed allowance")]
    ExceedsAllowance,

    #[msg("Decrease exceeds current allowance")]
    AllowanceUnderflow,

    // Proof path
    #[msg("Public values have an invalid encoding")]
    InvalidPublicValues,

    #[msg("Proof was generated for a different owner")]
    ProofOwnerMismatch,

    #[msg("Proof transaction hash already used")]
    ProofAlreadyUsed,

    #[msg("Transaction hash does not match public values")]
    TxHashMismatch,

    #[msg("Rescaled mint amount is zero")]
    ZeroRescaledAmount,

    #[msg("Verifier program does not match gate configuration")]
    InvalidVerifier,

    // Accounts
    #[msg("Mint mismatch between accounts")]
    MintMismatch,

    #[msg("Token account not owned by caller")]
    InvalidTokenOwner,
}
