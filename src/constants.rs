//! Domain constants and default classifier parameters.

/// Shares per board lot, the conventional display unit for position size.
pub const SHARES_PER_LOT: i64 = 1000;

/// Decimal precision for per-stock weight changes in the delta engine.
pub const DELTA_WEIGHT_DP: u32 = 6;

/// Decimal precision for weight changes in compacted history points.
pub const HISTORY_WEIGHT_DP: u32 = 4;

/// Minimum board-lot change for a delta to count as a notable daily change.
pub const NOTABLE_LOT_CHANGE: i64 = 50;

/// Minimum weight change (percentage points) for a notable daily change.
pub const NOTABLE_WEIGHT_CHANGE: f64 = 0.25;

/// Default trailing window length (trading days) for trend classification.
pub const DEFAULT_TREND_WINDOW: usize = 10;

/// Default minimum up events within the window for the increasing bucket.
pub const DEFAULT_MIN_INCREASE_EVENTS: usize = 3;

/// Default minimum down events within the window for the decreasing bucket.
pub const DEFAULT_MIN_DECREASE_EVENTS: usize = 3;

/// Default raw-share threshold above which a position counts as held.
pub const DEFAULT_ENTRY_THRESHOLD: i64 = 1000;

/// Default number of entries per ranking list.
pub const DEFAULT_RANKS_TOP_N: usize = 20;

/// File name of the per-fund processed report document.
pub const PROCESSED_REPORT_FILE: &str = "processed_etf_data.json";

/// File name of the cross-fund stock history index document.
pub const STOCK_HISTORY_FILE: &str = "stock_history_data.json";
