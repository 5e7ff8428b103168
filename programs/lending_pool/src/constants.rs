use anchor_lang::prelude::*;

#[constant]
pub const POOL_SEED: &[u8] = b"pool";
#[constant]
pub const LP_POSITION_SEED: &[u8] = b"lp-pos";
#[constant]
pub const LIQUIDITY_VAULT_SEED: &[u8] = b"liquidity-vault";
#[constant]
pub const LIQUIDITY_AUTH_SEED: &[u8] = b"liquidity-auth";

/// `share_of` is reported as a whole percentage of `total_shares`.
pub const PERCENT: u128 = 100;
