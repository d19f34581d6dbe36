//! Core error types for the ETF analytics engine.
//!
//! Absent holdings on a given day, missing display names, and empty trend
//! windows are normal defaulting paths handled in the services; only the
//! conditions below are errors.

use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A required per-fund source file is absent. Processing for the run
    /// aborts rather than proceeding with partial data.
    #[error("required input file is missing: {path}")]
    MissingInputFile { path: PathBuf },

    /// Fewer than two snapshots exist for a fund, so no day-over-day
    /// delta can be computed. Callers must guard before invoking the
    /// delta engine.
    #[error("fund {fund} has {available} snapshot(s); delta computation requires at least 2")]
    InsufficientHistory { fund: String, available: usize },

    /// A snapshot document is missing required fields. Propagated rather
    /// than defaulted, to avoid masking upstream disclosure errors.
    #[error("malformed snapshot record in {path}: {source}")]
    MalformedRecord {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize output document: {0}")]
    Serialization(serde_json::Error),
}
