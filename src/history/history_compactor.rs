//! Compacts one (fund, stock) timeline into its state changes.

use crate::constants::HISTORY_WEIGHT_DP;
use crate::snapshots::FundSeries;
use crate::utils::{board_lots, round_dp};

use super::{HistoryPoint, PointStatus};

/// Walks the full snapshot sequence of `series` and emits a point for
/// `stock_code` only when the position materially changes.
///
/// A point is emitted when the raw count is above the entry threshold
/// and differs from the last tracked count (or no position was tracked
/// yet), or when a tracked position falls to or under the threshold
/// (an exit, which resets tracking). Days under the threshold with no
/// tracked position are pure gaps and emit nothing.
pub fn compact_history(
    series: &FundSeries,
    stock_code: &str,
    entry_threshold: i64,
) -> Vec<HistoryPoint> {
    let mut history: Vec<HistoryPoint> = Vec::new();
    let mut prev_count: Option<i64> = None;
    let mut prev_weight = 0.0_f64;

    for snapshot in series.snapshots() {
        let (current_count, current_weight) = snapshot.position(stock_code);

        if current_count > entry_threshold && prev_count != Some(current_count) {
            let count_change = current_count - prev_count.unwrap_or(current_count);
            // The weight baseline is zero only until the first point is
            // emitted; after an exit it is the reset tracking weight.
            let baseline = if history.is_empty() { 0.0 } else { prev_weight };
            let status = match prev_count {
                None => PointStatus::FirstAppearance,
                Some(_) if count_change > 0 => PointStatus::Increased,
                Some(_) if count_change < 0 => PointStatus::Decreased,
                Some(_) => PointStatus::Unchanged,
            };
            history.push(HistoryPoint {
                date: snapshot.date,
                count: board_lots(current_count),
                weight: current_weight,
                count_change: board_lots(count_change),
                weight_change: round_dp(current_weight - baseline, HISTORY_WEIGHT_DP),
                status,
            });
            prev_count = Some(current_count);
            prev_weight = current_weight;
        } else if current_count <= entry_threshold {
            if let Some(tracked) = prev_count.filter(|&c| c > entry_threshold) {
                history.push(HistoryPoint {
                    date: snapshot.date,
                    count: board_lots(current_count),
                    weight: current_weight,
                    count_change: board_lots(current_count - tracked),
                    weight_change: round_dp(current_weight - prev_weight, HISTORY_WEIGHT_DP),
                    status: PointStatus::Exited,
                });
                prev_count = None;
                prev_weight = 0.0;
            }
        }
    }

    history
}
