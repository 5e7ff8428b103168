use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid trader account")]
    InvalidTraderAccount,
    #[msg("UserAccount: can't deposit a negative amount")]
    NonPositiveDeposit,
    #[msg("UserAccount: can't withdraw a negative amount")]
    NonPositiveWithdrawal,
    #[msg("UserAccount: not enough balance")]
    InsufficientWalletBalance,
    #[msg("Transfer amount exceeds token balance")]
    InsufficientTokenBalance,
    #[msg("UserAccount: not enough purchasing power")]
    InsufficientPurchasingPower,
    #[msg("Fill index out of range")]
    IndexOutOfRange,
    #[msg("Order quantity must be non-zero")]
    InvalidQuantity,
    #[msg("Order price must be greater than zero")]
    InvalidPrice,
    #[msg("Leverage must be at least 1")]
    InvalidLeverage,
    #[msg("Leverage exceeded")]
    LeverageExceeded,
    #[msg("Leverage differs from the open position's leverage")]
    LeverageMismatch,
    #[msg("Too many instruments")]
    TooManyInstruments,
    #[msg("Math overflow")]
    MathOverflow,
}
