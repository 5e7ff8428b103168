use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::LIQUIDITY_AUTH_SEED, error::ErrorCode, state::Pool};

pub fn assert_borrow_authority(pool: &Account<Pool>, borrower: &Signer<'_>) -> Result<()> {
    require_keys_eq!(
        pool.borrow_authority,
        borrower.key(),
        ErrorCode::Unauthorized
    );
    Ok(())
}

/// Pays `amount` out of the liquidity vault, signed by the pool's
/// liquidity authority PDA.
pub fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    pool: &Account<'info, Pool>,
    liquidity_vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    liquidity_auth: &UncheckedAccount<'info>,
    liquidity_auth_bump: u8,
    amount: u64,
) -> Result<()> {
    require_gte!(liquidity_vault.amount, amount, ErrorCode::TransferFailed);

    let pool_key = pool.key();
    let signer_seed_group: &[&[u8]] = &[
        LIQUIDITY_AUTH_SEED,
        pool_key.as_ref(),
        &[liquidity_auth_bump],
    ];
    let signer_seeds = &[signer_seed_group];
    let cpi_accounts = Transfer {
        from: liquidity_vault.to_account_info(),
        to: to.to_account_info(),
        authority: liquidity_auth.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer_seeds),
        amount,
    )
}
