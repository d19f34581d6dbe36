pub mod num_utils;

pub use num_utils::*;
