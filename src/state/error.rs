//! Error types for catalog lookups and navigation

use thiserror::Error;

/// Errors raised by the catalog store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Lookup outside `[0, size)`
    #[error("Catalog index {index} out of range (size {size})")]
    IndexOutOfRange {
        index: i64,
        size: usize,
    },

    /// A record was built with a blank display name
    #[error("Puppy name must not be empty")]
    EmptyName,
}

/// Errors raised while interpreting a destination identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown route: {0:?}")]
    UnknownRoute(String),
}
