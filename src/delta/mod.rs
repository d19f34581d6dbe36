//! Day-over-day delta computation, rankings, and the notable-change filter.

mod change_filter;
mod delta_engine;
mod delta_model;
mod ranking_builder;

pub use change_filter::*;
pub use delta_engine::*;
pub use delta_model::*;
pub use ranking_builder::*;

#[cfg(test)]
mod delta_engine_tests;
