//! Windowed event-counting trend classifier.

use log::debug;

use crate::config::AnalyticsConfig;
use crate::names::NameResolver;
use crate::snapshots::{FundSeries, Snapshot};
use crate::utils::board_lots;

use super::{PositionEntry, PositionExit, StrategyReport, TrendSignal};

/// Classifies every stock observed in a trailing snapshot window into
/// the sustained-increasing / sustained-decreasing / newly-entered /
/// newly-exited buckets.
#[derive(Debug, Clone)]
pub struct TrendClassifier {
    pub window: usize,
    pub min_increase_events: usize,
    pub min_decrease_events: usize,
    /// Raw-share threshold above which a position counts as held.
    pub entry_threshold: i64,
}

impl TrendClassifier {
    pub fn new(
        window: usize,
        min_increase_events: usize,
        min_decrease_events: usize,
        entry_threshold: i64,
    ) -> Self {
        Self {
            window,
            min_increase_events,
            min_decrease_events,
            entry_threshold,
        }
    }

    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self::new(
            config.trend_window,
            config.min_increase_events,
            config.min_decrease_events,
            config.entry_threshold,
        )
    }

    /// Scans the trailing window of `series` (the whole series when
    /// shorter than the window) and builds the four buckets. An empty
    /// series yields an empty report, not an error.
    pub fn classify(&self, series: &FundSeries, resolver: &NameResolver) -> StrategyReport {
        let window = series.trailing_window(self.window);
        let mut report = StrategyReport::default();
        if window.is_empty() {
            return report;
        }

        let first_date = window[0].date;
        let last_date = window[window.len() - 1].date;
        debug!(
            "classifying trends for {} over {} day(s) ({} to {})",
            series.code,
            window.len(),
            first_date,
            last_date
        );

        for code in series_window_codes(window) {
            // Dense per-day series; absent days read as a zero position.
            let counts: Vec<i64> = window.iter().map(|s| s.position(&code).0).collect();
            let embedded = window.iter().find_map(|s| s.embedded_name(&code));
            let name = resolver.resolve(&code, embedded);

            let mut up_events = 0usize;
            let mut down_events = 0usize;
            for pair in counts.windows(2) {
                if pair[1] > pair[0] {
                    up_events += 1;
                } else if pair[1] < pair[0] {
                    down_events += 1;
                }
            }

            let first_count = counts[0];
            let last_count = counts[counts.len() - 1];
            let first_held = first_count > self.entry_threshold;
            let last_held = last_count > self.entry_threshold;
            let net_change = board_lots(last_count - first_count);

            if up_events >= self.min_increase_events && last_held {
                report.increasing.push(TrendSignal {
                    code: code.clone(),
                    name: name.clone(),
                    events: up_events,
                    window_days: counts.len(),
                    net_change,
                    first_date,
                    last_date,
                    current_count: board_lots(last_count),
                });
            }
            // TODO: confirm with product whether the decreasing bucket
            // should gate on position size like the increasing one;
            // counts are never negative, so this clause never filters.
            if down_events >= self.min_decrease_events && last_count >= 0 {
                report.decreasing.push(TrendSignal {
                    code: code.clone(),
                    name: name.clone(),
                    events: down_events,
                    window_days: counts.len(),
                    net_change,
                    first_date,
                    last_date,
                    current_count: board_lots(last_count),
                });
            }
            if !first_held && last_held {
                report.new_positions.push(PositionEntry {
                    code: code.clone(),
                    name: name.clone(),
                    entry_date: last_date,
                    current_count: board_lots(last_count),
                });
            }
            if first_held && !last_held {
                report.closed_positions.push(PositionExit {
                    code,
                    name,
                    exit_date: last_date,
                });
            }
        }

        report
            .increasing
            .sort_by(|a, b| (b.events, b.current_count).cmp(&(a.events, a.current_count)));
        report
            .decreasing
            .sort_by(|a, b| (b.events, b.current_count).cmp(&(a.events, a.current_count)));
        report
    }
}

/// Every stock code observed anywhere in the window, in sorted order.
fn series_window_codes(window: &[Snapshot]) -> Vec<String> {
    let mut codes: Vec<String> = window
        .iter()
        .flat_map(|s| s.holdings.keys().cloned())
        .collect();
    codes.sort();
    codes.dedup();
    codes
}
