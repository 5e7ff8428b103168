use anchor_lang::prelude::*;

use crate::{
    constants::{LP_POSITION_SEED, POOL_SEED},
    state::{LpPosition, Pool},
};

#[derive(Accounts)]
pub struct PoolView<'info> {
    #[account(
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

#[derive(Accounts)]
pub struct LpView<'info> {
    #[account(
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        seeds = [LP_POSITION_SEED, pool.key().as_ref(), lp_position.owner.as_ref()],
        bump = lp_position.bump,
    )]
    pub lp_position: Account<'info, LpPosition>,
}

pub fn balance_of(ctx: Context<LpView>) -> Result<u64> {
    ctx.accounts.pool.balance_of(ctx.accounts.lp_position.shares)
}

pub fn share_of(ctx: Context<LpView>) -> Result<u128> {
    ctx.accounts.pool.share_of(ctx.accounts.lp_position.shares)
}
