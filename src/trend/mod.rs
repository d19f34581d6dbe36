//! Multi-day trend classification over a trailing snapshot window.

mod trend_classifier;
mod trend_model;

pub use trend_classifier::*;
pub use trend_model::*;
