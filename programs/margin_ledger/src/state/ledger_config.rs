use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct LedgerConfig {
    pub admin: Pubkey,
    /// Wallets in this mint back every trader's margin requirement.
    pub settlement_mint: Pubkey,
    pub max_leverage: u16,
    pub bump: u8,
}
