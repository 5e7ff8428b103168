use anchor_lang::prelude::*;
use wad_math::{mul_div, wad_div};

use crate::{constants::PERCENT, error::ErrorCode, state::InterestRateParams};

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub liquidity_vault: Pubkey,
    pub borrow_authority: Pubkey,
    pub params: InterestRateParams,
    /// LP value, including lent-out principal and repaid interest.
    pub total_balance: u64,
    pub total_borrowed: u64,
    pub total_shares: u128,
    pub bump: u8,
}

impl Pool {
    pub fn balance_of(&self, shares: u128) -> Result<u64> {
        if self.total_shares == 0 {
            return Ok(0);
        }
        let value = mul_div(shares, self.total_balance as u128, self.total_shares)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        u64::try_from(value).map_err(|_| error!(ErrorCode::MathOverflow))
    }

    pub fn share_of(&self, shares: u128) -> Result<u128> {
        if self.total_shares == 0 {
            return Ok(0);
        }
        mul_div(shares, PERCENT, self.total_shares).ok_or_else(|| error!(ErrorCode::MathOverflow))
    }

    /// Books a deposit and returns the shares to mint for it.
    pub fn deposit(&mut self, amount: u64) -> Result<u128> {
        require!(amount > 0, ErrorCode::InvalidDepositAmount);

        // An empty pool (or one whose value was fully withdrawn) re-establishes
        // the share unit at one share per token.
        let minted_shares = if self.total_shares == 0 || self.total_balance == 0 {
            amount as u128
        } else {
            mul_div(amount as u128, self.total_shares, self.total_balance as u128)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        };
        require!(minted_shares > 0, ErrorCode::InvalidDepositAmount);

        let total_balance = self
            .total_balance
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        let total_shares = self
            .total_shares
            .checked_add(minted_shares)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        self.total_balance = total_balance;
        self.total_shares = total_shares;
        Ok(minted_shares)
    }

    /// Books a withdrawal of `amount` against an LP holding `shares` and
    /// returns the shares to burn.
    pub fn withdraw(&mut self, shares: u128, amount: u64) -> Result<u128> {
        require!(amount > 0, ErrorCode::InvalidWithdrawAmount);
        require_gte!(self.total_balance, amount, ErrorCode::AmountExceedsPool);

        let balance = self.balance_of(shares)?;
        require_gte!(balance, amount, ErrorCode::InsufficientBalance);

        let burned_shares = mul_div(shares, amount as u128, balance as u128)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        let total_shares = self
            .total_shares
            .checked_sub(burned_shares)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        let total_balance = self
            .total_balance
            .checked_sub(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        self.total_shares = total_shares;
        self.total_balance = total_balance;
        Ok(burned_shares)
    }

    /// Principal leaving the pool stays in `total_balance` as a receivable.
    pub fn borrow(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidBorrowAmount);
        self.total_borrowed = self
            .total_borrowed
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    /// Returns the total the payer owes the vault, `amount + interest`.
    pub fn repay(&mut self, amount: u64, interest: u64) -> Result<u64> {
        require!(amount > 0 && interest > 0, ErrorCode::InvalidRepayAmount);
        require_gte!(self.total_borrowed, amount, ErrorCode::AmountExceedsBorrowed);

        let due = amount
            .checked_add(interest)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        let total_balance = self
            .total_balance
            .checked_add(interest)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        self.total_borrowed -= amount;
        self.total_balance = total_balance;
        Ok(due)
    }

    pub fn utilisation_rate(&self) -> Result<u128> {
        self.utilisation_after_loan(0)
    }

    pub fn borrowing_rate(&self) -> Result<u128> {
        self.borrowing_rate_after_loan(0)
    }

    /// Rate quote for a prospective loan of `extra` on top of what is out.
    pub fn borrowing_rate_after_loan(&self, extra: u64) -> Result<u128> {
        if self.total_balance == 0 {
            return Ok(self.params.base_rate);
        }
        let utilisation = self.utilisation_after_loan(extra)?;
        self.params.rate_at(utilisation)
    }

    fn utilisation_after_loan(&self, extra: u64) -> Result<u128> {
        if self.total_balance == 0 {
            return Ok(0);
        }
        let borrowed = (self.total_borrowed as u128)
            .checked_add(extra as u128)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        wad_div(borrowed, self.total_balance as u128).ok_or_else(|| error!(ErrorCode::MathOverflow))
    }
}
