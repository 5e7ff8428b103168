use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::{
    constants::{ASSET_VAULT_SEED, WALLET_SEED},
    state::Wallet,
};

pub fn handler(ctx: Context<CreateWallet>) -> Result<()> {
    let wallet = &mut ctx.accounts.wallet;
    wallet.owner = ctx.accounts.user.key();
    wallet.mint = ctx.accounts.mint.key();
    wallet.amount = 0;
    wallet.bump = ctx.bumps.wallet;
    Ok(())
}

#[derive(Accounts)]
pub struct CreateWallet<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    pub mint: Account<'info, Mint>,
    /// Only registered assets get wallets.
    #[account(seeds = [ASSET_VAULT_SEED, mint.key().as_ref()], bump)]
    pub asset_vault: Account<'info, TokenAccount>,
    #[account(
        init,
        payer = user,
        seeds = [WALLET_SEED, user.key().as_ref(), mint.key().as_ref()],
        bump,
        space = 8 + Wallet::INIT_SPACE,
    )]
    pub wallet: Account<'info, Wallet>,
    pub system_program: Program<'info, System>,
}
