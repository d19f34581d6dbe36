//! Numeric helpers shared by the analytics services.

use crate::constants::SHARES_PER_LOT;

/// Converts a raw share count to board lots.
///
/// Integer division truncates toward zero, so a change of -1500 shares is
/// -1 lot, not -2. Threshold comparisons never use this; they operate on
/// raw shares.
pub fn board_lots(shares: i64) -> i64 {
    shares / SHARES_PER_LOT
}

/// Rounds a value to `dp` decimal digits, half away from zero.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round() / factor
}
