pub mod create_trader_account;
pub mod create_wallet;
pub mod deposit;
pub mod initialize_ledger;
pub mod place_order;
pub mod register_asset;
pub mod views;
pub mod withdraw;

pub use create_trader_account::*;
pub use create_wallet::*;
pub use deposit::*;
pub use initialize_ledger::*;
pub use place_order::*;
pub use register_asset::*;
pub use views::*;
pub use withdraw::*;
