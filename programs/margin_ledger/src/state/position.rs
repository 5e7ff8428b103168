use anchor_lang::prelude::*;
use wad_math::{mul_div, wad_mul_signed, WAD};

use crate::error::ErrorCode;

/// Net of every fill a trader has on one instrument.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub instrument: Pubkey,
    /// WAD-scaled contracts; positive is long.
    pub quantity: i128,
    /// Signed cash effect in settlement base units; a long carries negative cost.
    pub cost: i128,
    pub leverage: u16,
    /// Price of the latest fill, used to size margin for this position.
    pub mark_price: u64,
}

impl Position {
    pub fn empty(instrument: Pubkey) -> Self {
        Self {
            instrument,
            ..Self::default()
        }
    }

    /// Flat with nothing left to settle; its slot can be handed to another
    /// instrument.
    pub fn is_closed(&self) -> bool {
        self.quantity == 0 && self.cost == 0
    }

    /// `|quantity| * mark_price / WAD / leverage`, in settlement base units.
    pub fn required_margin(&self) -> Result<u128> {
        if self.quantity == 0 {
            return Ok(0);
        }
        require!(self.leverage > 0, ErrorCode::InvalidLeverage);

        let notional = mul_div(self.quantity.unsigned_abs(), self.mark_price as u128, WAD)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(notional / self.leverage as u128)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderRequest {
    pub instrument: Pubkey,
    pub quantity: i128,
    pub price: u64,
    pub leverage: u16,
}

impl OrderRequest {
    pub fn validate(&self, max_leverage: u16) -> Result<()> {
        require!(self.quantity != 0, ErrorCode::InvalidQuantity);
        require!(self.price > 0, ErrorCode::InvalidPrice);
        require!(self.leverage >= 1, ErrorCode::InvalidLeverage);
        require_gte!(max_leverage, self.leverage, ErrorCode::LeverageExceeded);
        Ok(())
    }

    /// `-(quantity * price)`: a buy pays cash out, a sell takes it in.
    pub fn cost(&self) -> Result<i128> {
        wad_mul_signed(self.quantity, self.price as i128)
            .and_then(i128::checked_neg)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }
}
