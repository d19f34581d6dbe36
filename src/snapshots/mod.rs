//! Snapshot store - per-fund, time-ordered holding disclosures.

mod loader;
mod snapshot_model;
mod snapshot_store;

pub use loader::*;
pub use snapshot_model::*;
pub use snapshot_store::*;
