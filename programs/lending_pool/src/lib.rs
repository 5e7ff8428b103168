use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("9pAZNjPXAJ1d5WhAcq4A6vtxPZtddAf1YAUmrsZCiJdT");

#[program]
pub mod lending_pool {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        params: InterestRateParams,
        borrow_authority: Pubkey,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, params, borrow_authority)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    pub fn borrow(ctx: Context<Borrow>, amount: u64) -> Result<()> {
        instructions::borrow::handler(ctx, amount)
    }

    pub fn repay(ctx: Context<Repay>, amount: u64, interest: u64) -> Result<()> {
        instructions::repay::handler(ctx, amount, interest)
    }

    pub fn balance(ctx: Context<PoolView>) -> Result<u64> {
        Ok(ctx.accounts.pool.total_balance)
    }

    pub fn borrowed(ctx: Context<PoolView>) -> Result<u64> {
        Ok(ctx.accounts.pool.total_borrowed)
    }

    pub fn balance_of(ctx: Context<LpView>) -> Result<u64> {
        instructions::views::balance_of(ctx)
    }

    pub fn share_of(ctx: Context<LpView>) -> Result<u128> {
        instructions::views::share_of(ctx)
    }

    pub fn utilisation_rate(ctx: Context<PoolView>) -> Result<u128> {
        ctx.accounts.pool.utilisation_rate()
    }

    pub fn borrowing_rate(ctx: Context<PoolView>) -> Result<u128> {
        ctx.accounts.pool.borrowing_rate()
    }

    pub fn borrowing_rate_after_loan(ctx: Context<PoolView>, extra: u64) -> Result<u128> {
        ctx.accounts.pool.borrowing_rate_after_loan(extra)
    }
}
