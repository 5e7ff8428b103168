use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub mint: Pubkey,
    pub borrow_authority: Pubkey,
    pub optimal_utilisation: u128,
    pub base_rate: u128,
    pub slope1: u128,
    pub slope2: u128,
}

#[event]
pub struct LiquidityDeposited {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub minted_shares: u128,
    pub total_balance: u64,
}

#[event]
pub struct LiquidityWithdrawn {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub burned_shares: u128,
    pub total_balance: u64,
}

#[event]
pub struct Borrowed {
    pub pool: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_borrowed: u64,
    pub borrowing_rate: u128,
}

#[event]
pub struct Repaid {
    pub pool: Pubkey,
    pub payer: Pubkey,
    pub amount: u64,
    pub interest: u64,
    pub total_borrowed: u64,
    pub total_balance: u64,
}
