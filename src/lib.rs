//! ETF Tracker Core - holdings disclosure analytics.
//!
//! This crate ingests daily snapshots of ETF fund-holding disclosures
//! (one JSON document per fund, one entry per trading day) and derives
//! the analytical artifacts consumed by the dashboard: day-over-day
//! change rankings, multi-day trend classification, and per-stock
//! longitudinal history across funds.

pub mod config;
pub mod constants;
pub mod delta;
pub mod errors;
pub mod history;
pub mod names;
pub mod reports;
pub mod snapshots;
pub mod trend;
pub mod utils;

// Re-export the common entry points
pub use config::*;
pub use reports::*;
pub use snapshots::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
