use anchor_lang::prelude::*;
use wad_math::{wad_div, wad_mul, WAD};

use crate::error::ErrorCode;

/// Kinked two-slope borrow curve. All fields are WAD values.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, Debug, PartialEq, Eq)]
pub struct InterestRateParams {
    pub optimal_utilisation: u128,
    pub base_rate: u128,
    pub slope1: u128,
    pub slope2: u128,
}

impl InterestRateParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.optimal_utilisation > 0 && self.optimal_utilisation < WAD,
            ErrorCode::InvalidRateParams
        );
        Ok(())
    }

    /// Borrow rate at utilisation `u`.
    ///
    /// Below the kink the rate climbs along `slope1`; past it the remaining
    /// utilisation range is charged along `slope2`. Both branches give
    /// `base_rate + slope1` at `u == optimal_utilisation`.
    pub fn rate_at(&self, utilisation: u128) -> Result<u128> {
        if utilisation <= self.optimal_utilisation {
            let variable = wad_div(utilisation, self.optimal_utilisation)
                .and_then(|ratio| wad_mul(ratio, self.slope1))
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
            return self
                .base_rate
                .checked_add(variable)
                .ok_or_else(|| error!(ErrorCode::MathOverflow));
        }

        let excess = utilisation - self.optimal_utilisation;
        let remaining = WAD
            .checked_sub(self.optimal_utilisation)
            .ok_or_else(|| error!(ErrorCode::InvalidRateParams))?;
        let variable = wad_div(excess, remaining)
            .and_then(|ratio| wad_mul(ratio, self.slope2))
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        self.base_rate
            .checked_add(self.slope1)
            .and_then(|x| x.checked_add(variable))
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }
}
