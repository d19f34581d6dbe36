//! Models for compacted per-stock position history.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// State change recorded by the history compactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointStatus {
    FirstAppearance,
    Increased,
    Decreased,
    Unchanged,
    Exited,
}

/// One compacted timeline entry for a (fund, stock) pair. Counts are in
/// board lots; days with no reportable change are omitted upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub count: i64,
    pub weight: f64,
    pub count_change: i64,
    pub weight_change: f64,
    pub status: PointStatus,
}

/// One fund's compacted position in a stock, with running statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundStockHolding {
    pub etf_name: String,
    pub current_count: i64,
    pub current_weight: f64,
    pub max_count: i64,
    pub max_count_date: NaiveDate,
    pub min_count: i64,
    pub min_count_date: NaiveDate,
    pub history: Vec<HistoryPoint>,
}

/// Cross-fund view of one stock, keyed by fund code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockHistory {
    pub code: String,
    pub name: String,
    pub etf_holdings: BTreeMap<String, FundStockHolding>,
}
