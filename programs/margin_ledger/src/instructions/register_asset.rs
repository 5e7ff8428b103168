use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{ASSET_VAULT_SEED, LEDGER_AUTHORITY_SEED, LEDGER_CONFIG_SEED},
    events::AssetRegistered,
    helpers::require_admin,
    state::LedgerConfig,
};

pub fn handler(ctx: Context<RegisterAsset>) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.ledger_config)?;

    emit!(AssetRegistered {
        mint: ctx.accounts.mint.key(),
        vault: ctx.accounts.asset_vault.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterAsset<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,
    pub mint: Account<'info, Mint>,
    /// CHECK: PDA authority for asset vault transfer signing.
    #[account(seeds = [LEDGER_AUTHORITY_SEED], bump)]
    pub ledger_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [ASSET_VAULT_SEED, mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = ledger_authority,
    )]
    pub asset_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
