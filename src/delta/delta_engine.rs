//! Compares the two most recent snapshots of one fund.

use std::collections::BTreeSet;

use log::debug;

use crate::constants::DELTA_WEIGHT_DP;
use crate::errors::Result;
use crate::names::NameResolver;
use crate::snapshots::FundSeries;
use crate::utils::{board_lots, round_dp};

use super::{DailyDelta, DeltaRecord, DeltaSummary, HoldingEvent};

/// Classifies one stock's change between two consecutive snapshots.
///
/// Checks are evaluated in this exact order; the new/closed checks take
/// priority over the pure sign of the change.
pub fn classify_event(prev_count: i64, current_count: i64) -> HoldingEvent {
    let count_change = current_count - prev_count;
    if prev_count == 0 && current_count > 0 {
        HoldingEvent::New
    } else if current_count == 0 && prev_count > 0 {
        HoldingEvent::Closed
    } else if count_change > 0 {
        HoldingEvent::Increased
    } else if count_change < 0 {
        HoldingEvent::Reduced
    } else {
        HoldingEvent::Unchanged
    }
}

/// Computes per-stock deltas and the aggregate summary for the two most
/// recent snapshots of `series`.
///
/// Fails with [`crate::Error::InsufficientHistory`] when the series has
/// fewer than two snapshots.
pub fn build_daily_delta(series: &FundSeries, resolver: &NameResolver) -> Result<DailyDelta> {
    let (latest, previous) = series.latest_two()?;
    debug!(
        "computing delta for {}: {} vs {}",
        series.code, latest.date, previous.date
    );

    let codes: BTreeSet<&str> = latest
        .holdings
        .keys()
        .chain(previous.holdings.keys())
        .map(String::as_str)
        .collect();

    let mut records = Vec::with_capacity(codes.len());
    let mut summary = DeltaSummary::new(latest.date, previous.date);

    for code in codes {
        let (current_count, current_weight) = latest.position(code);
        let (prev_count, prev_weight) = previous.position(code);

        // Raw shares here; board-lot conversion happens only at output.
        let count_change = current_count - prev_count;
        let weight_change = round_dp(current_weight - prev_weight, DELTA_WEIGHT_DP);

        let event = classify_event(prev_count, current_count);
        match event {
            HoldingEvent::New => summary.new_count += 1,
            HoldingEvent::Closed => summary.closed_count += 1,
            HoldingEvent::Increased => summary.increased_count += 1,
            HoldingEvent::Reduced => summary.reduced_count += 1,
            HoldingEvent::Unchanged => {}
        }
        summary.net_count_change += board_lots(count_change);
        summary.net_weight_change += weight_change;

        let embedded = latest.embedded_name(code).or_else(|| previous.embedded_name(code));
        records.push(DeltaRecord {
            code: code.to_string(),
            name: resolver.resolve(code, embedded),
            count_change: board_lots(count_change),
            weight_change,
            prev_count: board_lots(prev_count),
            prev_weight,
            current_count: board_lots(current_count),
            current_weight,
            event,
        });
    }

    Ok(DailyDelta { records, summary })
}
