use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::LedgerConfig};

pub fn require_admin(admin: &Signer<'_>, config: &Account<LedgerConfig>) -> Result<()> {
    require_keys_eq!(admin.key(), config.admin, ErrorCode::Unauthorized);
    Ok(())
}
