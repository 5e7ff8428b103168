use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid LP position")]
    InvalidLpPosition,
    #[msg("Optimal utilisation must be strictly between 0 and 1")]
    InvalidRateParams,
    #[msg("Deposit amount must be greater than zero")]
    InvalidDepositAmount,
    #[msg("Withdraw amount must be greater than zero")]
    InvalidWithdrawAmount,
    #[msg("Borrow amount must be greater than zero")]
    InvalidBorrowAmount,
    #[msg("Repay amount and interest must be greater than zero")]
    InvalidRepayAmount,
    #[msg("Amount gt than balance")]
    InsufficientBalance,
    #[msg("Amount exceeds pool balance")]
    AmountExceedsPool,
    #[msg("Amount exceeds borrowed")]
    AmountExceedsBorrowed,
    #[msg("Token transfer cannot be covered")]
    TransferFailed,
    #[msg("Math overflow")]
    MathOverflow,
}
