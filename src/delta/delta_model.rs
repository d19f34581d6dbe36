//! Models derived from comparing two consecutive snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification of one stock's day-over-day change. Variants are
/// mutually exclusive; see [`classify_event`](super::classify_event) for
/// the priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldingEvent {
    New,
    Closed,
    Increased,
    Reduced,
    Unchanged,
}

/// One stock's day-over-day change. Count fields are in board lots;
/// weights in percentage points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaRecord {
    pub code: String,
    pub name: String,
    pub count_change: i64,
    pub weight_change: f64,
    pub prev_count: i64,
    pub prev_weight: f64,
    pub current_count: i64,
    pub current_weight: f64,
    pub event: HoldingEvent,
}

/// Aggregate over one delta computation.
///
/// `net_weight_change` is the sum of the already-rounded per-stock terms,
/// not a rounded total; reproducing that accumulation order matters for
/// byte-identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaSummary {
    pub date: NaiveDate,
    pub prev_date: NaiveDate,
    pub new_count: usize,
    pub closed_count: usize,
    pub increased_count: usize,
    pub reduced_count: usize,
    /// Net change in board lots across all stocks.
    pub net_count_change: i64,
    /// Net change in weight percentage points across all stocks.
    pub net_weight_change: f64,
}

impl DeltaSummary {
    pub fn new(date: NaiveDate, prev_date: NaiveDate) -> Self {
        Self {
            date,
            prev_date,
            new_count: 0,
            closed_count: 0,
            increased_count: 0,
            reduced_count: 0,
            net_count_change: 0,
            net_weight_change: 0.0,
        }
    }
}

/// Full output of one delta computation: the per-stock records (in
/// unspecified order; downstream sorts explicitly) plus the aggregate.
#[derive(Debug, Clone)]
pub struct DailyDelta {
    pub records: Vec<DeltaRecord>,
    pub summary: DeltaSummary,
}
