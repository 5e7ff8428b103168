use anchor_lang::prelude::*;

use crate::{
    constants::{FILL_SEED, LEDGER_CONFIG_SEED, TRADER_SEED, WALLET_SEED},
    error::ErrorCode,
    events::OrderFilled,
    state::{Fill, LedgerConfig, OrderRequest, TraderAccount, Wallet},
};

pub fn handler(
    ctx: Context<PlaceOrder>,
    instrument: Pubkey,
    quantity: i128,
    price: u64,
    leverage: u16,
) -> Result<()> {
    let order = OrderRequest {
        instrument,
        quantity,
        price,
        leverage,
    };
    let collateral = ctx.accounts.settlement_wallet.amount;
    let max_leverage = ctx.accounts.ledger_config.max_leverage;

    let trader = &mut ctx.accounts.trader_account;
    require_keys_eq!(trader.owner, ctx.accounts.user.key(), ErrorCode::Unauthorized);
    let record = trader.place_order(&order, max_leverage, collateral)?;
    let position = trader.position(&instrument);

    let fill = &mut ctx.accounts.fill;
    fill.owner = ctx.accounts.user.key();
    fill.record = record;
    fill.bump = ctx.bumps.fill;

    msg!(
        "fill #{}: qty {} @ {} x{}",
        record.index,
        record.quantity,
        record.price,
        record.leverage
    );
    emit!(OrderFilled {
        owner: fill.owner,
        instrument,
        index: record.index,
        quantity: record.quantity,
        price: record.price,
        leverage: record.leverage,
        cost: record.cost,
        position_quantity: position.quantity,
        position_cost: position.cost,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PlaceOrder<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,
    #[account(
        seeds = [WALLET_SEED, user.key().as_ref(), ledger_config.settlement_mint.as_ref()],
        bump = settlement_wallet.bump,
    )]
    pub settlement_wallet: Account<'info, Wallet>,
    #[account(
        mut,
        seeds = [TRADER_SEED, user.key().as_ref()],
        bump = trader_account.bump,
    )]
    pub trader_account: Account<'info, TraderAccount>,
    #[account(
        init,
        payer = user,
        seeds = [FILL_SEED, trader_account.key().as_ref(), &trader_account.fill_count.to_le_bytes()],
        bump,
        space = 8 + Fill::INIT_SPACE,
    )]
    pub fill: Account<'info, Fill>,
    pub system_program: Program<'info, System>,
}
