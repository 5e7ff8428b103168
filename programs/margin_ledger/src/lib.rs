use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use helpers::*;
pub use instructions::*;
pub use state::*;

declare_id!("4Ldq7hQxNEbwvJ5hVuhB7NHK1Wqf9CqS4n4BzEbqzH5P");

#[program]
pub mod margin_ledger {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>, max_leverage: u16) -> Result<()> {
        instructions::initialize_ledger::handler(ctx, max_leverage)
    }

    pub fn register_asset(ctx: Context<RegisterAsset>) -> Result<()> {
        instructions::register_asset::handler(ctx)
    }

    pub fn create_wallet(ctx: Context<CreateWallet>) -> Result<()> {
        instructions::create_wallet::handler(ctx)
    }

    pub fn create_trader_account(ctx: Context<CreateTraderAccount>) -> Result<()> {
        instructions::create_trader_account::handler(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    pub fn place_order(
        ctx: Context<PlaceOrder>,
        instrument: Pubkey,
        quantity: i128,
        price: u64,
        leverage: u16,
    ) -> Result<()> {
        instructions::place_order::handler(ctx, instrument, quantity, price, leverage)
    }

    pub fn wallet(ctx: Context<WalletView>) -> Result<u64> {
        Ok(ctx.accounts.wallet.amount)
    }

    pub fn no_fills(ctx: Context<TraderView>) -> Result<u64> {
        Ok(ctx.accounts.trader_account.fill_count)
    }

    pub fn fill(ctx: Context<FillView>, index: u64) -> Result<FillRecord> {
        instructions::views::fill(ctx, index)
    }

    pub fn position(ctx: Context<TraderView>, instrument: Pubkey) -> Result<Position> {
        instructions::views::position(ctx, instrument)
    }
}
