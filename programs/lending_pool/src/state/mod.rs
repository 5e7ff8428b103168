pub mod interest_rate_params;
pub mod lp_position;
pub mod pool;

pub use interest_rate_params::*;
pub use lp_position::*;
pub use pool::*;
