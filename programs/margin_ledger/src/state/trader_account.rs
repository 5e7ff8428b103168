use anchor_lang::prelude::*;

use crate::{
    constants::MAX_INSTRUMENTS,
    error::ErrorCode,
    state::{FillRecord, OrderRequest, Position},
};

#[account]
#[derive(InitSpace)]
pub struct TraderAccount {
    pub owner: Pubkey,
    pub fill_count: u64,
    #[max_len(MAX_INSTRUMENTS)]
    pub positions: Vec<Position>,
    pub bump: u8,
}

impl TraderAccount {
    pub fn position(&self, instrument: &Pubkey) -> Position {
        self.positions
            .iter()
            .find(|p| &p.instrument == instrument)
            .copied()
            .unwrap_or_else(|| Position::empty(*instrument))
    }

    pub fn check_fill_index(&self, index: u64) -> Result<()> {
        require_gt!(self.fill_count, index, ErrorCode::IndexOutOfRange);
        Ok(())
    }

    /// Margin reserved by every open position at its last fill price.
    pub fn required_margin(&self) -> Result<u128> {
        self.positions.iter().try_fold(0u128, |acc, p| {
            acc.checked_add(p.required_margin()?)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))
        })
    }

    /// Nets `order` into the trader's position and returns the fill to
    /// record.
    ///
    /// The purchasing-power check runs against the post-trade book: the
    /// ordered instrument at its candidate size and price, every other
    /// instrument at its last known state. Reducing orders therefore pass
    /// whenever the reduced book fits in `collateral`. Nothing is written
    /// unless the check passes.
    pub fn place_order(
        &mut self,
        order: &OrderRequest,
        max_leverage: u16,
        collateral: u64,
    ) -> Result<FillRecord> {
        order.validate(max_leverage)?;
        let cost = order.cost()?;

        let slot = match self
            .positions
            .iter()
            .position(|p| p.instrument == order.instrument)
        {
            Some(i) => Some(i),
            None => {
                let free = self.positions.iter().position(Position::is_closed);
                if free.is_none() {
                    require_gt!(
                        MAX_INSTRUMENTS,
                        self.positions.len(),
                        ErrorCode::TooManyInstruments
                    );
                }
                free
            }
        };

        let mut candidate = self.position(&order.instrument);
        if candidate.quantity != 0 {
            require_eq!(candidate.leverage, order.leverage, ErrorCode::LeverageMismatch);
        }
        candidate.quantity = candidate
            .quantity
            .checked_add(order.quantity)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        candidate.cost = candidate
            .cost
            .checked_add(cost)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        candidate.leverage = order.leverage;
        candidate.mark_price = order.price;

        let required = self
            .positions
            .iter()
            .filter(|p| p.instrument != order.instrument)
            .try_fold(candidate.required_margin()?, |acc, p| {
                acc.checked_add(p.required_margin()?)
                    .ok_or_else(|| error!(ErrorCode::MathOverflow))
            })?;
        require_gte!(
            collateral as u128,
            required,
            ErrorCode::InsufficientPurchasingPower
        );

        let fill = FillRecord {
            index: self.fill_count,
            instrument: order.instrument,
            quantity: order.quantity,
            price: order.price,
            leverage: order.leverage,
            cost,
        };
        self.fill_count = self
            .fill_count
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        match slot {
            Some(i) => self.positions[i] = candidate,
            None => self.positions.push(candidate),
        }

        Ok(fill)
    }
}
