//! Models for windowed trend classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stock flagged as sustained-increasing or sustained-decreasing
/// within the trailing window. Count fields are in board lots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSignal {
    pub code: String,
    pub name: String,
    /// Directional adjacent-day events counted in the window (up events
    /// for the increasing bucket, down events for the decreasing one).
    pub events: usize,
    /// Number of window days the stock was scanned over.
    pub window_days: usize,
    /// Signed net change over the window, last day minus first, in lots.
    pub net_change: i64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub current_count: i64,
}

/// A position that crossed the entry threshold within the window.
///
/// The entry date is approximated as the window's last date rather than
/// the true first crossing date; downstream consumers know this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub code: String,
    pub name: String,
    pub entry_date: NaiveDate,
    pub current_count: i64,
}

/// A position that fell back under the entry threshold within the
/// window. The exit date carries the same window-boundary approximation
/// as [`PositionEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionExit {
    pub code: String,
    pub name: String,
    pub exit_date: NaiveDate,
}

/// Trend classification output for one fund. Buckets are independent;
/// a stock may appear in several.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategyReport {
    pub increasing: Vec<TrendSignal>,
    pub decreasing: Vec<TrendSignal>,
    pub new_positions: Vec<PositionEntry>,
    pub closed_positions: Vec<PositionExit>,
}
