use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{LIQUIDITY_AUTH_SEED, LP_POSITION_SEED, POOL_SEED},
    error::ErrorCode,
    events::LiquidityWithdrawn,
    helpers::transfer_from_vault,
    state::{LpPosition, Pool},
};

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
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

    let shares = ctx.accounts.lp_position.shares;
    let burned_shares = ctx.accounts.pool.withdraw(shares, amount)?;

    let lp = &mut ctx.accounts.lp_position;
    lp.shares = lp
        .shares
        .checked_sub(burned_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.pool,
        &ctx.accounts.liquidity_vault,
        &ctx.accounts.user_token_account,
        &ctx.accounts.liquidity_auth,
        ctx.bumps.liquidity_auth,
        amount,
    )?;

    emit!(LiquidityWithdrawn {
        pool: ctx.accounts.pool.key(),
        owner: ctx.accounts.user.key(),
        amount,
        burned_shares,
        total_balance: ctx.accounts.pool.total_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        seeds = [LP_POSITION_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = lp_position.bump,
    )]
    pub lp_position: Account<'info, LpPosition>,
    /// CHECK: liquidity auth PDA.
    #[account(seeds = [LIQUIDITY_AUTH_SEED, pool.key().as_ref()], bump)]
    pub liquidity_auth: UncheckedAccount<'info>,
    #[account(mut, address = pool.liquidity_vault)]
    pub liquidity_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_token_account.mint == pool.mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
