//! Display-name resolution with layered fallbacks.

use std::collections::HashMap;

use super::default_name_table;

/// Resolves a stock code to a display name: the name embedded in a
/// disclosure wins when it is longer than one character, then the
/// injected static table, then a bracketed-code placeholder.
#[derive(Debug, Clone)]
pub struct NameResolver {
    table: HashMap<String, String>,
}

impl NameResolver {
    /// Creates a resolver over an injected read-only code→name table.
    pub fn new(table: HashMap<String, String>) -> Self {
        Self { table }
    }

    /// Creates a resolver backed by the built-in table.
    pub fn with_default_table() -> Self {
        Self::new(default_name_table())
    }

    /// Resolves `code`, preferring `embedded` when it carries more than
    /// one character (single-character names are treated as noise).
    pub fn resolve(&self, code: &str, embedded: Option<&str>) -> String {
        if let Some(name) = embedded {
            if name.chars().count() > 1 {
                return name.to_string();
            }
        }
        match self.table.get(code) {
            Some(name) => name.clone(),
            None => format!("({})", code),
        }
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::with_default_table()
    }
}
