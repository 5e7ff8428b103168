use anchor_lang::prelude::*;

use crate::error::ErrorCode;

#[account]
#[derive(InitSpace)]
pub struct Wallet {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Wallet {
    /// Credits a deposit that will be pulled from a token account holding
    /// `source_balance`.
    pub fn deposit(&mut self, amount: u64, source_balance: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::NonPositiveDeposit);
        require_gte!(source_balance, amount, ErrorCode::InsufficientTokenBalance);

        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::NonPositiveWithdrawal);
        require_gte!(self.amount, amount, ErrorCode::InsufficientWalletBalance);

        self.amount -= amount;
        Ok(())
    }
}
