//! Checked 18-decimal ("WAD") fixed-point arithmetic.
//!
//! Every helper truncates toward zero and returns `None` on overflow or a
//! zero divisor, so callers can map failures onto their own error codes.

pub const WAD: u128 = 1_000_000_000_000_000_000;

/// `a * b / WAD`
pub fn wad_mul(a: u128, b: u128) -> Option<u128> {
    a.checked_mul(b)?.checked_div(WAD)
}

/// `a * WAD / b`
pub fn wad_div(a: u128, b: u128) -> Option<u128> {
    a.checked_mul(WAD)?.checked_div(b)
}

/// `a * b / c`, the multiply-then-divide used for share accounting.
pub fn mul_div(a: u128, b: u128, c: u128) -> Option<u128> {
    a.checked_mul(b)?.checked_div(c)
}

/// Signed `a * b / WAD`. Rust integer division already truncates toward zero.
pub fn wad_mul_signed(a: i128, b: i128) -> Option<i128> {
    a.checked_mul(b)?.checked_div(WAD as i128)
}
