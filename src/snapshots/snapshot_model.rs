//! Wire and domain models for daily holding disclosures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One stock's position within one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingPosition {
    /// Raw share count as disclosed (never board lots).
    pub count: i64,
    /// Portfolio weight in percentage points.
    pub weight: f64,
    /// Display name embedded in the disclosure, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Fund-level market data attached to a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceInfo {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub change_value: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
}

/// One fund's holdings as disclosed for a single trading date.
///
/// Immutable once loaded; absence of a stock code in `holdings` means a
/// zero position that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "data_date")]
    pub date: NaiveDate,
    pub holdings: HashMap<String, HoldingPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_info: Option<PriceInfo>,
}

impl Snapshot {
    /// Total lookup over the holdings mapping: absent codes read as a
    /// zero position, never as an error.
    pub fn position(&self, code: &str) -> (i64, f64) {
        match self.holdings.get(code) {
            Some(entry) => (entry.count, entry.weight),
            None => (0, 0.0),
        }
    }

    /// The embedded display name for a code, if disclosed non-empty.
    pub fn embedded_name(&self, code: &str) -> Option<&str> {
        self.holdings
            .get(code)
            .and_then(|entry| entry.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}
