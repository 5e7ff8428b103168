use anchor_lang::prelude::*;

#[constant]
pub const LEDGER_CONFIG_SEED: &[u8] = b"ledger-config";
#[constant]
pub const LEDGER_AUTHORITY_SEED: &[u8] = b"ledger-authority";
#[constant]
pub const ASSET_VAULT_SEED: &[u8] = b"asset-vault";
#[constant]
pub const WALLET_SEED: &[u8] = b"wallet";
#[constant]
pub const TRADER_SEED: &[u8] = b"trader";
#[constant]
pub const FILL_SEED: &[u8] = b"fill";

/// Position slots per trader. A slot is handed to a new instrument once its
/// position is flat with zero cost.
pub const MAX_INSTRUMENTS: usize = 16;
