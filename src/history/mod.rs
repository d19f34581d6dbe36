//! Per-stock longitudinal history: compaction and cross-fund aggregation.

mod history_aggregator;
mod history_compactor;
mod history_model;

pub use history_aggregator::*;
pub use history_compactor::*;
pub use history_model::*;
