pub mod borrow;
pub mod deposit;
pub mod initialize_pool;
pub mod repay;
pub mod views;
pub mod withdraw;

pub use borrow::*;
pub use deposit::*;
pub use initialize_pool::*;
pub use repay::*;
pub use views::*;
pub use withdraw::*;
