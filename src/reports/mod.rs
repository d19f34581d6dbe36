//! Output-document assembly: per-fund reports and the stock index.

mod report_model;
mod report_service;

pub use report_model::*;
pub use report_service::*;
