use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::{ASSET_VAULT_SEED, WALLET_SEED},
    error::ErrorCode,
    events::CollateralDeposited,
    state::Wallet,
};

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.wallet.owner,
        ctx.accounts.user.key(),
        ErrorCode::Unauthorized
    );

    let source_balance = ctx.accounts.user_token_account.amount;
    ctx.accounts.wallet.deposit(amount, source_balance)?;

    token::transfer(ctx.accounts.deposit_ctx(), amount)?;

    emit!(CollateralDeposited {
        owner: ctx.accounts.user.key(),
        mint: ctx.accounts.wallet.mint,
        amount,
        wallet_balance: ctx.accounts.wallet.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        mut,
        seeds = [WALLET_SEED, user.key().as_ref(), wallet.mint.as_ref()],
        bump = wallet.bump,
    )]
    pub wallet: Account<'info, Wallet>,
    #[account(
        mut,
        constraint = user_token_account.mint == wallet.mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_account: Account<'info, TokenAccount>,
    #[account(
        mut,
        seeds = [ASSET_VAULT_SEED, wallet.mint.as_ref()],
        bump,
    )]
    pub asset_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

impl<'info> Deposit<'info> {
    fn deposit_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.user_token_account.to_account_info(),
            to: self.asset_vault.to_account_info(),
            authority: self.user.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
