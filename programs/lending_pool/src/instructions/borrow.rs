use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{LIQUIDITY_AUTH_SEED, POOL_SEED},
    error::ErrorCode,
    events::Borrowed,
    helpers::{assert_borrow_authority, transfer_from_vault},
    state::Pool,
};

pub fn handler(ctx: Context<Borrow>, amount: u64) -> Result<()> {
    assert_borrow_authority(&ctx.accounts.pool, &ctx.accounts.borrower)?;

    ctx.accounts.pool.borrow(amount)?;

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.pool,
        &ctx.accounts.liquidity_vault,
        &ctx.accounts.recipient_token_account,
        &ctx.accounts.liquidity_auth,
        ctx.bumps.liquidity_auth,
        amount,
    )?;

    let pool = &ctx.accounts.pool;
    emit!(Borrowed {
        pool: pool.key(),
        recipient: ctx.accounts.recipient_token_account.key(),
        amount,
        total_borrowed: pool.total_borrowed,
        borrowing_rate: pool.borrowing_rate()?,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Borrow<'info> {
    pub borrower: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: liquidity auth PDA.
    #[account(seeds = [LIQUIDITY_AUTH_SEED, pool.key().as_ref()], bump)]
    pub liquidity_auth: UncheckedAccount<'info>,
    #[account(mut, address = pool.liquidity_vault)]
    pub liquidity_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = recipient_token_account.mint == pool.mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
