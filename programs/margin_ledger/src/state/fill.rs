use anchor_lang::prelude::*;

/// One executed order. Written once, never mutated.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, Debug, PartialEq, Eq)]
pub struct FillRecord {
    pub index: u64,
    pub instrument: Pubkey,
    pub quantity: i128,
    pub price: u64,
    pub leverage: u16,
    pub cost: i128,
}

#[account]
#[derive(InitSpace)]
pub struct Fill {
    pub owner: Pubkey,
    pub record: FillRecord,
    pub bump: u8,
}
