use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct LpPosition {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub shares: u128,
    pub bump: u8,
}

impl LpPosition {
    /// Stamps a freshly allocated position. An existing one is left as is.
    pub fn open_if_new(&mut self, owner: Pubkey, pool: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.pool = pool;
            self.shares = 0;
            self.bump = bump;
        }
    }
}
