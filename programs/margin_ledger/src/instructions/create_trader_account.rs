use anchor_lang::prelude::*;

use crate::{constants::TRADER_SEED, state::TraderAccount};

pub fn handler(ctx: Context<CreateTraderAccount>) -> Result<()> {
    let trader = &mut ctx.accounts.trader_account;
    trader.owner = ctx.accounts.user.key();
    trader.fill_count = 0;
    trader.positions = Vec::new();
    trader.bump = ctx.bumps.trader_account;
    Ok(())
}

#[derive(Accounts)]
pub struct CreateTraderAccount<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        init,
        payer = user,
        seeds = [TRADER_SEED, user.key().as_ref()],
        bump,
        space = 8 + TraderAccount::INIT_SPACE,
    )]
    pub trader_account: Account<'info, TraderAccount>,
    pub system_program: Program<'info, System>,
}
