//! Top-N ranking lists over a delta computation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{DeltaRecord, HoldingEvent};

/// The six ranking lists derived from one day's deltas, each truncated
/// to the configured top N.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRanks {
    pub top_count_up: Vec<DeltaRecord>,
    pub top_count_down: Vec<DeltaRecord>,
    pub top_weight_up: Vec<DeltaRecord>,
    pub top_weight_down: Vec<DeltaRecord>,
    pub new_positions: Vec<DeltaRecord>,
    pub closed_positions: Vec<DeltaRecord>,
}

fn weight_ordering(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Builds the six ranking lists from a delta record list.
///
/// Sorts are stable, so records tied on the sort key retain their input
/// order; no secondary tie-break is applied.
pub fn build_ranks(records: &[DeltaRecord], top_n: usize) -> ChangeRanks {
    let mut top_count_up: Vec<DeltaRecord> = records
        .iter()
        .filter(|d| d.count_change > 0)
        .cloned()
        .collect();
    top_count_up.sort_by(|a, b| b.count_change.cmp(&a.count_change));
    top_count_up.truncate(top_n);

    let mut top_count_down: Vec<DeltaRecord> = records
        .iter()
        .filter(|d| d.count_change < 0)
        .cloned()
        .collect();
    top_count_down.sort_by(|a, b| a.count_change.cmp(&b.count_change));
    top_count_down.truncate(top_n);

    let mut top_weight_up: Vec<DeltaRecord> = records
        .iter()
        .filter(|d| d.weight_change > 0.0)
        .cloned()
        .collect();
    top_weight_up.sort_by(|a, b| weight_ordering(b.weight_change, a.weight_change));
    top_weight_up.truncate(top_n);

    let mut top_weight_down: Vec<DeltaRecord> = records
        .iter()
        .filter(|d| d.weight_change < 0.0)
        .cloned()
        .collect();
    top_weight_down.sort_by(|a, b| weight_ordering(a.weight_change, b.weight_change));
    top_weight_down.truncate(top_n);

    let mut new_positions: Vec<DeltaRecord> = records
        .iter()
        .filter(|d| d.event == HoldingEvent::New)
        .cloned()
        .collect();
    new_positions.truncate(top_n);

    let mut closed_positions: Vec<DeltaRecord> = records
        .iter()
        .filter(|d| d.event == HoldingEvent::Closed)
        .cloned()
        .collect();
    closed_positions.truncate(top_n);

    ChangeRanks {
        top_count_up,
        top_count_down,
        top_weight_up,
        top_weight_down,
        new_positions,
        closed_positions,
    }
}
