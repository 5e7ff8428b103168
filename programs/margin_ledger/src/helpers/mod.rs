pub mod access;
pub mod margin;
pub mod transfer;

pub use access::*;
pub use margin::*;
pub use transfer::*;
