//! Models for the per-fund processed report document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::delta::{ChangeRanks, DeltaSummary, NotableChange};
use crate::trend::StrategyReport;

/// The classifier parameters echoed into each report so the dashboard
/// can label its panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyParams {
    pub trend_window: usize,
    pub min_increase_events: usize,
    pub min_decrease_events: usize,
    pub entry_threshold_shares: i64,
}

/// One fund's complete analytical report for the latest disclosure day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundReport {
    pub name: String,
    pub latest_date: NaiveDate,
    pub previous_date: NaiveDate,
    pub price: Option<f64>,
    pub change_value: Option<f64>,
    pub change_percent: Option<f64>,
    /// Notable-change card list, sorted by absolute lot change.
    pub daily_changes: Vec<NotableChange>,
    pub strategy_params: StrategyParams,
    /// Windowed trend classification buckets.
    pub strategy: StrategyReport,
    /// The six top-N ranking lists.
    pub ranks: ChangeRanks,
    /// Day-over-day aggregate.
    pub summary: DeltaSummary,
}
