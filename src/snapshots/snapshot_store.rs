//! In-memory collection of per-fund snapshot series.

use std::collections::{BTreeMap, BTreeSet};

use crate::errors::{Error, Result};

use super::Snapshot;

/// Ordered sequence of snapshots for one fund, sorted ascending by date
/// at construction. Date uniqueness is not enforced here; the loader is
/// expected to supply clean data.
#[derive(Debug, Clone)]
pub struct FundSeries {
    pub code: String,
    pub name: String,
    snapshots: Vec<Snapshot>,
}

impl FundSeries {
    pub fn new(code: impl Into<String>, name: impl Into<String>, mut snapshots: Vec<Snapshot>) -> Self {
        snapshots.sort_by_key(|s| s.date);
        Self {
            code: code.into(),
            name: name.into(),
            snapshots,
        }
    }

    /// All snapshots, ascending by date.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The latest and second-latest snapshots.
    ///
    /// Fails with [`Error::InsufficientHistory`] when fewer than two
    /// snapshots exist; callers computing deltas must guard on this.
    pub fn latest_two(&self) -> Result<(&Snapshot, &Snapshot)> {
        if self.snapshots.len() < 2 {
            return Err(Error::InsufficientHistory {
                fund: self.code.clone(),
                available: self.snapshots.len(),
            });
        }
        let latest = &self.snapshots[self.snapshots.len() - 1];
        let previous = &self.snapshots[self.snapshots.len() - 2];
        Ok((latest, previous))
    }

    /// The trailing `window` snapshots, or the whole series if shorter.
    pub fn trailing_window(&self, window: usize) -> &[Snapshot] {
        let start = self.snapshots.len().saturating_sub(window);
        &self.snapshots[start..]
    }

    /// Every stock code observed anywhere in the series.
    pub fn observed_codes(&self) -> BTreeSet<String> {
        self.snapshots
            .iter()
            .flat_map(|s| s.holdings.keys().cloned())
            .collect()
    }
}

/// Read-only map of fund code to snapshot series; populated once by the
/// loader and shared by all analytics passes.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    funds: BTreeMap<String, FundSeries>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_series(&mut self, series: FundSeries) {
        self.funds.insert(series.code.clone(), series);
    }

    pub fn series(&self, fund_code: &str) -> Option<&FundSeries> {
        self.funds.get(fund_code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FundSeries> {
        self.funds.values()
    }

    pub fn fund_codes(&self) -> impl Iterator<Item = &str> {
        self.funds.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.funds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }
}
