//! Assembles and serializes the two output documents.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use log::info;

use crate::config::AnalyticsConfig;
use crate::constants::{PROCESSED_REPORT_FILE, STOCK_HISTORY_FILE};
use crate::delta::{build_daily_delta, build_ranks, notable_changes};
use crate::errors::{Error, Result};
use crate::history::{build_stock_histories, StockHistory};
use crate::names::NameResolver;
use crate::snapshots::{load_snapshot_store, FundSeries, SnapshotStore};
use crate::trend::TrendClassifier;

use super::{FundReport, StrategyParams};

/// Orchestrates the analytics passes over a loaded snapshot store and
/// assembles the documents consumed by the dashboard.
pub struct AnalyticsService {
    config: AnalyticsConfig,
    resolver: NameResolver,
    store: SnapshotStore,
}

impl AnalyticsService {
    pub fn new(config: AnalyticsConfig, resolver: NameResolver, store: SnapshotStore) -> Self {
        Self {
            config,
            resolver,
            store,
        }
    }

    /// Loads every configured fund's holdings file and builds a service
    /// backed by the default name table.
    pub fn load(config: AnalyticsConfig) -> Result<Self> {
        let store = load_snapshot_store(&config)?;
        Ok(Self::new(config, NameResolver::with_default_table(), store))
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Builds the full analytical report for one fund series.
    pub fn fund_report(&self, series: &FundSeries) -> Result<FundReport> {
        let (latest, previous) = series.latest_two()?;
        let price_info = latest.price_info.clone().unwrap_or_default();

        let delta = build_daily_delta(series, &self.resolver)?;
        let ranks = build_ranks(&delta.records, self.config.ranks_top_n);
        let daily_changes = notable_changes(&delta.records);
        let strategy =
            TrendClassifier::from_config(&self.config).classify(series, &self.resolver);

        Ok(FundReport {
            name: series.name.clone(),
            latest_date: latest.date,
            previous_date: previous.date,
            price: price_info.price,
            change_value: price_info.change_value,
            change_percent: price_info.change_percent,
            daily_changes,
            strategy_params: StrategyParams {
                trend_window: self.config.trend_window,
                min_increase_events: self.config.min_increase_events,
                min_decrease_events: self.config.min_decrease_events,
                entry_threshold_shares: self.config.entry_threshold,
            },
            strategy,
            ranks,
            summary: delta.summary,
        })
    }

    /// Builds reports for every loaded fund, keyed by fund code.
    pub fn build_fund_reports(&self) -> Result<BTreeMap<String, FundReport>> {
        let mut reports = BTreeMap::new();
        for series in self.store.iter() {
            reports.insert(series.code.clone(), self.fund_report(series)?);
        }
        Ok(reports)
    }

    /// Builds the cross-fund stock history index.
    pub fn build_stock_index(&self) -> BTreeMap<String, StockHistory> {
        build_stock_histories(&self.store, &self.resolver, self.config.entry_threshold)
    }

    /// Serializes the per-fund reports into the data directory and
    /// returns the written path.
    pub fn write_processed_reports(&self) -> Result<PathBuf> {
        let reports = self.build_fund_reports()?;
        self.write_document(PROCESSED_REPORT_FILE, &reports)
    }

    /// Serializes the stock history index into the data directory and
    /// returns the written path.
    pub fn write_stock_index(&self) -> Result<PathBuf> {
        let index = self.build_stock_index();
        self.write_document(STOCK_HISTORY_FILE, &index)
    }

    fn write_document<T: serde::Serialize>(&self, file_name: &str, document: &T) -> Result<PathBuf> {
        let path = self.config.data_dir.join(file_name);
        let json = serde_json::to_string_pretty(document).map_err(Error::Serialization)?;
        fs::write(&path, json)?;
        info!("wrote {}", path.display());
        Ok(path)
    }
}
