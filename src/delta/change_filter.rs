//! Materiality filter producing the "notable changes" card list.

use serde::{Deserialize, Serialize};

use crate::constants::{NOTABLE_LOT_CHANGE, NOTABLE_WEIGHT_CHANGE};

use super::{DeltaRecord, HoldingEvent};

/// One notable change, shaped for the dashboard card list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotableChange {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub event: HoldingEvent,
    pub count_change: i64,
    pub weight_change: f64,
    pub prev_count: i64,
    pub prev_weight: f64,
    pub current_count: i64,
    pub current_weight: f64,
}

impl From<&DeltaRecord> for NotableChange {
    fn from(d: &DeltaRecord) -> Self {
        Self {
            code: d.code.clone(),
            name: d.name.clone(),
            event: d.event,
            count_change: d.count_change,
            weight_change: d.weight_change,
            prev_count: d.prev_count,
            prev_weight: d.prev_weight,
            current_count: d.current_count,
            current_weight: d.current_weight,
        }
    }
}

/// Filters deltas down to the notable ones and sorts them by absolute
/// board-lot change, descending.
///
/// A record passes when its event is new/closed, or its board-lot change
/// is >= 50, or its weight change is >= 0.25 percentage points. The
/// magnitude thresholds are deliberately one-sided: large reductions only
/// pass through the event branch, since a negative change never satisfies
/// the >= comparison. This matches the published card list.
pub fn notable_changes(records: &[DeltaRecord]) -> Vec<NotableChange> {
    let mut changes: Vec<NotableChange> = records
        .iter()
        .filter(|d| {
            matches!(d.event, HoldingEvent::New | HoldingEvent::Closed)
                || d.count_change >= NOTABLE_LOT_CHANGE
                || d.weight_change >= NOTABLE_WEIGHT_CHANGE
        })
        .map(NotableChange::from)
        .collect();
    changes.sort_by(|a, b| b.count_change.abs().cmp(&a.count_change.abs()));
    changes
}
