//! Construction-time configuration for the analytics engine.
//!
//! Everything the services need is injected here; there are no CLI flags,
//! environment variables, or hidden globals.

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_ENTRY_THRESHOLD, DEFAULT_MIN_DECREASE_EVENTS, DEFAULT_MIN_INCREASE_EVENTS,
    DEFAULT_RANKS_TOP_N, DEFAULT_TREND_WINDOW,
};

/// One fund tracked by the engine: its code, display name, and the
/// per-fund holdings file inside the data directory.
#[derive(Debug, Clone)]
pub struct FundSpec {
    pub code: String,
    pub name: String,
    pub file_name: String,
}

impl FundSpec {
    /// Creates a fund spec with the conventional `<code>_holdings.json`
    /// file name.
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            file_name: format!("{}_holdings.json", code),
        }
    }
}

/// Parameters for one analytics run.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Directory holding the per-fund input files; output documents are
    /// written here as well.
    pub data_dir: PathBuf,
    /// Funds to process, in registry order.
    pub funds: Vec<FundSpec>,
    /// Trailing window length (trading days) for trend classification.
    pub trend_window: usize,
    /// Minimum up events within the window for the increasing bucket.
    pub min_increase_events: usize,
    /// Minimum down events within the window for the decreasing bucket.
    pub min_decrease_events: usize,
    /// Raw-share threshold above which a position counts as held.
    pub entry_threshold: i64,
    /// Number of entries per ranking list.
    pub ranks_top_n: usize,
}

impl AnalyticsConfig {
    /// Creates a configuration with default classifier parameters.
    pub fn new(data_dir: impl Into<PathBuf>, funds: Vec<FundSpec>) -> Self {
        Self {
            data_dir: data_dir.into(),
            funds,
            trend_window: DEFAULT_TREND_WINDOW,
            min_increase_events: DEFAULT_MIN_INCREASE_EVENTS,
            min_decrease_events: DEFAULT_MIN_DECREASE_EVENTS,
            entry_threshold: DEFAULT_ENTRY_THRESHOLD,
            ranks_top_n: DEFAULT_RANKS_TOP_N,
        }
    }
}

/// The actively managed Taiwan ETFs tracked by default.
pub fn default_funds() -> Vec<FundSpec> {
    vec![
        FundSpec::new("00980A", "野村臺灣智慧優選主動式ETF"),
        FundSpec::new("00981A", "統一台股增長"),
        FundSpec::new("00982A", "群益台灣精選強棒主動式ETF基金"),
    ]
}
