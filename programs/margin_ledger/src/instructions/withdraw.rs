use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{ASSET_VAULT_SEED, LEDGER_AUTHORITY_SEED, LEDGER_CONFIG_SEED, TRADER_SEED, WALLET_SEED},
    error::ErrorCode,
    events::CollateralWithdrawn,
    helpers::{assert_margin_after_withdraw, load_trader_account, transfer_from_vault},
    state::{LedgerConfig, Wallet},
};

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.wallet.owner,
        ctx.accounts.user.key(),
        ErrorCode::Unauthorized
    );

    ctx.accounts.wallet.withdraw(amount)?;

    if ctx.accounts.wallet.mint == ctx.accounts.ledger_config.settlement_mint {
        if let Some(trader) = load_trader_account(&ctx.accounts.trader_account.to_account_info())? {
            require_keys_eq!(
                trader.owner,
                ctx.accounts.user.key(),
                ErrorCode::InvalidTraderAccount
            );
            assert_margin_after_withdraw(&trader, ctx.accounts.wallet.amount)?;
        }
    }

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.asset_vault,
        &ctx.accounts.user_token_account,
        &ctx.accounts.ledger_authority,
        ctx.bumps.ledger_authority,
        amount,
    )?;

    emit!(CollateralWithdrawn {
        owner: ctx.accounts.user.key(),
        mint: ctx.accounts.wallet.mint,
        amount,
        wallet_balance: ctx.accounts.wallet.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,
    #[account(
        mut,
        seeds = [WALLET_SEED, user.key().as_ref(), wallet.mint.as_ref()],
        bump = wallet.bump,
    )]
    pub wallet: Account<'info, Wallet>,
    /// CHECK: trader book PDA; may not exist yet, in which case it holds no positions.
    #[account(seeds = [TRADER_SEED, user.key().as_ref()], bump)]
    pub trader_account: UncheckedAccount<'info>,
    /// CHECK: ledger authority PDA.
    #[account(seeds = [LEDGER_AUTHORITY_SEED], bump)]
    pub ledger_authority: UncheckedAccount<'info>,
    #[account(
        mut,
        seeds = [ASSET_VAULT_SEED, wallet.mint.as_ref()],
        bump,
    )]
    pub asset_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_token_account.mint == wallet.mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
