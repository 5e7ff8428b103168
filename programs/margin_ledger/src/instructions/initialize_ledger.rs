use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{
    constants::LEDGER_CONFIG_SEED, error::ErrorCode, events::LedgerInitialized,
    state::LedgerConfig,
};

pub fn handler(ctx: Context<InitializeLedger>, max_leverage: u16) -> Result<()> {
    require!(max_leverage >= 1, ErrorCode::InvalidLeverage);

    let config = &mut ctx.accounts.ledger_config;
    config.admin = ctx.accounts.admin.key();
    config.settlement_mint = ctx.accounts.settlement_mint.key();
    config.max_leverage = max_leverage;
    config.bump = ctx.bumps.ledger_config;

    emit!(LedgerInitialized {
        admin: config.admin,
        settlement_mint: config.settlement_mint,
        max_leverage,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    pub settlement_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = admin,
        seeds = [LEDGER_CONFIG_SEED],
        bump,
        space = 8 + LedgerConfig::INIT_SPACE,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,
    pub system_program: Program<'info, System>,
}
