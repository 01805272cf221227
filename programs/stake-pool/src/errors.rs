use anchor_lang::prelude::*;

/// Stake Pool Error Codes
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

    #[msg("Arithmetic overflow")]
    MathOverflow,

    // Authorization
    #[msg("Unauthorized")]
    UnauthorizedAccess,

    #[msg("Ownership cannot be renounced")]
    RenounceDisabled,

    #[msg("No pending ownership transfer")]
    NoPendingOwnershipTransfer,

    // Position invariants
    #[msg("Withdrawal exceeds staked balance")]
    InsufficientStake,

    #[msg("No rewards to claim")]
    NothingToClaim,

    #[msg("Nothing staked and no rewards to collect")]
    NothingToExit,

    // Period invariants
    #[msg("Reward period still active")]
    PeriodActive,

    #[msg("Cannot fund rewards with no stakers")]
    NoStakers,

    #[msg("Reentrant call rejected")]
    ReentrantCall,

    // Accounts
    #[msg("Mint mismatch between accounts")]
    MintMismatch,

    #[msg("Vault does not belong to this pool")]
    InvalidVault,

    #[msg("Token account not owned by signer")]
    InvalidTokenOwner,

    #[msg("Mint transfer fees or hooks are not supported")]
    UnsupportedMintExtension,
}
