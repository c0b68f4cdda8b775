//! Domain error types
//!
//! Only taxonomy loading can fail. Resolution and lookup report "no match"
//! through empty paths and `None`.

use std::fmt;

#[derive(Debug)]
pub enum TaxonomyError {
    /// Taxonomy source could not be read
    Io(String),
    /// Taxonomy data has the wrong shape (missing `children`, `code`, ...)
    Malformed(String),
    /// Taxonomy has no class entries
    Empty,
}

impl fmt::Display for TaxonomyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxonomyError::Io(msg) => write!(f, "Taxonomy read error: {}", msg),
            TaxonomyError::Malformed(msg) => write!(f, "Malformed taxonomy: {}", msg),
            TaxonomyError::Empty => write!(f, "Taxonomy contains no classes"),
        }
    }
}

impl std::error::Error for TaxonomyError {}

impl From<serde_json::Error> for TaxonomyError {
    fn from(e: serde_json::Error) -> Self {
        TaxonomyError::Malformed(e.to_string())
    }
}
