use anchor_lang::prelude::*;

use crate::{
    constants::{FILL_SEED, TRADER_SEED, WALLET_SEED},
    error::ErrorCode,
    state::{Fill, FillRecord, Position, TraderAccount, Wallet},
};

#[derive(Accounts)]
pub struct WalletView<'info> {
    #[account(
        seeds = [WALLET_SEED, wallet.owner.as_ref(), wallet.mint.as_ref()],
        bump = wallet.bump,
    )]
    pub wallet: Account<'info, Wallet>,
}

#[derive(Accounts)]
pub struct TraderView<'info> {
    #[account(
        seeds = [TRADER_SEED, trader_account.owner.as_ref()],
        bump = trader_account.bump,
    )]
    pub trader_account: Account<'info, TraderAccount>,
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct FillView<'info> {
    #[account(
        seeds = [TRADER_SEED, trader_account.owner.as_ref()],
        bump = trader_account.bump,
    )]
    pub trader_account: Account<'info, TraderAccount>,
    /// CHECK: deserialized only after the index is known to be in range.
    #[account(
        seeds = [FILL_SEED, trader_account.key().as_ref(), &index.to_le_bytes()],
        bump,
    )]
    pub fill: UncheckedAccount<'info>,
}

pub fn fill(ctx: Context<FillView>, index: u64) -> Result<FillRecord> {
    ctx.accounts.trader_account.check_fill_index(index)?;

    let info = ctx.accounts.fill.to_account_info();
    require_keys_eq!(*info.owner, crate::ID, ErrorCode::IndexOutOfRange);
    let data = info.try_borrow_data()?;
    let fill = Fill::try_deserialize(&mut &data[..])?;
    Ok(fill.record)
}

pub fn position(ctx: Context<TraderView>, instrument: Pubkey) -> Result<Position> {
    Ok(ctx.accounts.trader_account.position(&instrument))
}
