//! JSON loader for per-fund holdings files.

use std::fs;

use log::{debug, info};

use crate::config::AnalyticsConfig;
use crate::errors::{Error, Result};

use super::{FundSeries, Snapshot, SnapshotStore};

/// Loads every configured fund's holdings file into a snapshot store.
///
/// A missing file aborts the run with [`Error::MissingInputFile`]; a
/// document with missing required fields fails with
/// [`Error::MalformedRecord`] rather than defaulting, so upstream
/// disclosure errors are not masked.
pub fn load_snapshot_store(config: &AnalyticsConfig) -> Result<SnapshotStore> {
    info!(
        "loading holdings data for {} fund(s) from {}",
        config.funds.len(),
        config.data_dir.display()
    );

    let mut store = SnapshotStore::new();
    for fund in &config.funds {
        let path = config.data_dir.join(&fund.file_name);
        if !path.exists() {
            return Err(Error::MissingInputFile { path });
        }
        let raw = fs::read_to_string(&path)?;
        let snapshots: Vec<Snapshot> =
            serde_json::from_str(&raw).map_err(|source| Error::MalformedRecord {
                path: path.clone(),
                source,
            })?;
        debug!(
            "loaded {} snapshot(s) for {} ({})",
            snapshots.len(),
            fund.code,
            fund.name
        );
        store.insert_series(FundSeries::new(&fund.code, &fund.name, snapshots));
    }
    Ok(store)
}
