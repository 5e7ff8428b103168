use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::TraderAccount};

/// A settlement-asset withdrawal must leave enough behind to carry the
/// trader's open positions.
pub fn assert_margin_after_withdraw(trader: &TraderAccount, remaining: u64) -> Result<()> {
    let required = trader.required_margin()?;
    require_gte!(
        remaining as u128,
        required,
        ErrorCode::InsufficientPurchasingPower
    );
    Ok(())
}

/// Reads the trader's book from its PDA. An account that was never created
/// holds no positions and yields `None`.
pub fn load_trader_account(info: &AccountInfo<'_>) -> Result<Option<TraderAccount>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let trader = TraderAccount::try_deserialize(&mut &data[..])?;
    Ok(Some(trader))
}
