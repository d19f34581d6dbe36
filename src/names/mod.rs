//! Stock code to display name resolution.

mod name_resolver;
mod static_names;

pub use name_resolver::*;
pub use static_names::*;
