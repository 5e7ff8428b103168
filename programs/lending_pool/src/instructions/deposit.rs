use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::{LP_POSITION_SEED, POOL_SEED},
    error::ErrorCode,
    events::LiquidityDeposited,
    state::{LpPosition, Pool},
};

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.user.key();
    let pool_key = ctx.accounts.pool.key();
    ctx.accounts
        .lp_position
        .open_if_new(owner, pool_key, ctx.bumps.lp_position);

    require_keys_eq!(
        ctx.accounts.lp_position.owner,
        ctx.accounts.user.key(),
        ErrorCode::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.lp_position.pool,
        ctx.accounts.pool.key(),
        ErrorCode::InvalidLpPosition
    );

    require_gte!(
        ctx.accounts.user_token_account.amount,
        amount,
        ErrorCode::TransferFailed
    );
    let minted_shares = ctx.accounts.pool.deposit(amount)?;

    let lp = &mut ctx.accounts.lp_position;
    lp.shares = lp
        .shares
        .checked_add(minted_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    token::transfer(ctx.accounts.deposit_ctx(), amount)?;

    emit!(LiquidityDeposited {
        pool: ctx.accounts.pool.key(),
        owner: ctx.accounts.user.key(),
        amount,
        minted_shares,
        total_balance: ctx.accounts.pool.total_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        init_if_needed,
        payer = user,
        seeds = [LP_POSITION_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump,
        space = 8 + LpPosition::INIT_SPACE,
    )]
    pub lp_position: Account<'info, LpPosition>,
    #[account(
        mut,
        constraint = user_token_account.mint == pool.mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_account: Account<'info, TokenAccount>,
    #[account(mut, address = pool.liquidity_vault)]
    pub liquidity_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    fn deposit_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.user_token_account.to_account_info(),
            to: self.liquidity_vault.to_account_info(),
            authority: self.user.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
