use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{LIQUIDITY_AUTH_SEED, LIQUIDITY_VAULT_SEED, POOL_SEED},
    events::PoolInitialized,
    state::{InterestRateParams, Pool},
};

pub fn handler(
    ctx: Context<InitializePool>,
    params: InterestRateParams,
    borrow_authority: Pubkey,
) -> Result<()> {
    params.validate()?;

    let pool = &mut ctx.accounts.pool;
    pool.admin = ctx.accounts.admin.key();
    pool.mint = ctx.accounts.mint.key();
    pool.liquidity_vault = ctx.accounts.liquidity_vault.key();
    pool.borrow_authority = borrow_authority;
    pool.params = params;
    pool.total_balance = 0;
    pool.total_borrowed = 0;
    pool.total_shares = 0;
    pool.bump = ctx.bumps.pool;

    emit!(PoolInitialized {
        pool: pool.key(),
        mint: pool.mint,
        borrow_authority,
        optimal_utilisation: params.optimal_utilisation,
        base_rate: params.base_rate,
        slope1: params.slope1,
        slope2: params.slope2,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    pub mint: Account<'info, Mint>,
    #[account(
        init,
        payer = admin,
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump,
        space = 8 + Pool::INIT_SPACE,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: PDA authority for liquidity vault transfer signing.
    #[account(seeds = [LIQUIDITY_AUTH_SEED, pool.key().as_ref()], bump)]
    pub liquidity_auth: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [LIQUIDITY_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = liquidity_auth,
    )]
    pub liquidity_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
