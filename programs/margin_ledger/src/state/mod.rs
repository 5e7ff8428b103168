pub mod fill;
pub mod ledger_config;
pub mod position;
pub mod trader_account;
pub mod wallet;

pub use fill::*;
pub use ledger_config::*;
pub use position::*;
pub use trader_account::*;
pub use wallet::*;
