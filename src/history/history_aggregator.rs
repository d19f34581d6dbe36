//! Merges per-fund compacted histories into a cross-fund stock index.

use std::collections::BTreeMap;

use log::debug;

use crate::names::NameResolver;
use crate::snapshots::{FundSeries, SnapshotStore};

use super::{compact_history, FundStockHolding, HistoryPoint, StockHistory};

/// Builds the per-stock index spanning every fund in the store: for each
/// (fund, stock) pair with a non-empty compacted history, attaches the
/// history plus current/max/min statistics under the stock's entry.
pub fn build_stock_histories(
    store: &SnapshotStore,
    resolver: &NameResolver,
    entry_threshold: i64,
) -> BTreeMap<String, StockHistory> {
    let mut all_stocks: BTreeMap<String, StockHistory> = BTreeMap::new();

    for series in store.iter() {
        for stock_code in series.observed_codes() {
            let history = compact_history(series, &stock_code, entry_threshold);
            if history.is_empty() {
                continue;
            }

            let entry = all_stocks
                .entry(stock_code.clone())
                .or_insert_with(|| StockHistory {
                    code: stock_code.clone(),
                    name: String::new(),
                    etf_holdings: BTreeMap::new(),
                });

            // Name resolution falls back across funds: the first fund
            // with a usable embedded name wins, newest snapshot first.
            if entry.name.is_empty() {
                if let Some(name) = latest_embedded_name(series, &stock_code) {
                    entry.name = name.to_string();
                }
            }

            debug!(
                "stock {} in {}: {} compacted point(s)",
                stock_code,
                series.code,
                history.len()
            );
            entry
                .etf_holdings
                .insert(series.code.clone(), summarize_holding(series, history));
        }
    }

    // Stocks no fund ever named fall back to the static resolver.
    for entry in all_stocks.values_mut() {
        if entry.name.is_empty() {
            entry.name = resolver.resolve(&entry.code, None);
        }
    }

    all_stocks
}

/// Scans a fund's snapshots newest-first for the first embedded name
/// longer than one character.
fn latest_embedded_name<'a>(series: &'a FundSeries, stock_code: &str) -> Option<&'a str> {
    series
        .snapshots()
        .iter()
        .rev()
        .find_map(|s| {
            s.embedded_name(stock_code)
                .filter(|name| name.chars().count() > 1)
        })
}

/// Computes the running statistics over a non-empty compacted history.
/// Max/min ties resolve to the earliest point.
fn summarize_holding(series: &FundSeries, history: Vec<HistoryPoint>) -> FundStockHolding {
    let mut max_idx = 0;
    let mut min_idx = 0;
    for (i, point) in history.iter().enumerate() {
        if point.count > history[max_idx].count {
            max_idx = i;
        }
        if point.count < history[min_idx].count {
            min_idx = i;
        }
    }
    let current = &history[history.len() - 1];

    FundStockHolding {
        etf_name: series.name.clone(),
        current_count: current.count,
        current_weight: current.weight,
        max_count: history[max_idx].count,
        max_count_date: history[max_idx].date,
        min_count: history[min_idx].count,
        min_count_date: history[min_idx].date,
        history,
    }
}
