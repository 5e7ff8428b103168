use anchor_lang::prelude::*;

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub settlement_mint: Pubkey,
    pub max_leverage: u16,
}

#[event]
pub struct AssetRegistered {
    pub mint: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct CollateralDeposited {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub wallet_balance: u64,
}

#[event]
pub struct CollateralWithdrawn {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub wallet_balance: u64,
}

#[event]
pub struct OrderFilled {
    pub owner: Pubkey,
    pub instrument: Pubkey,
    pub index: u64,
    pub quantity: i128,
    pub price: u64,
    pub leverage: u16,
    pub cost: i128,
    pub position_quantity: i128,
    pub position_cost: i128,
}
