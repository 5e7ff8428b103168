use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::POOL_SEED, error::ErrorCode, events::Repaid, state::Pool};

pub fn handler(ctx: Context<Repay>, amount: u64, interest: u64) -> Result<()> {
    let due = ctx.accounts.pool.repay(amount, interest)?;
    require_gte!(
        ctx.accounts.payer_token_account.amount,
        due,
        ErrorCode::TransferFailed
    );

    token::transfer(ctx.accounts.repay_ctx(), due)?;

    let pool = &ctx.accounts.pool;
    emit!(Repaid {
        pool: pool.key(),
        payer: ctx.accounts.payer.key(),
        amount,
        interest,
        total_borrowed: pool.total_borrowed,
        total_balance: pool.total_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Repay<'info> {
    pub payer: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        constraint = payer_token_account.mint == pool.mint @ ErrorCode::InvalidTokenAccount,
        constraint = payer_token_account.owner == payer.key() @ ErrorCode::Unauthorized,
    )]
    pub payer_token_account: Account<'info, TokenAccount>,
    #[account(mut, address = pool.liquidity_vault)]
    pub liquidity_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

impl<'info> Repay<'info> {
    fn repay_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.payer_token_account.to_account_info(),
            to: self.liquidity_vault.to_account_info(),
            authority: self.payer.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
