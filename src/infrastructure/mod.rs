//! Infrastructure layer - Source implementations
//!
//! This layer contains:
//! - JSON taxonomy loading (taxonomy_loader)
//! - Process-wide parser state (state)

pub mod state;
pub mod taxonomy_loader;

pub use state::shared_parser;
pub use taxonomy_loader::{JsonTaxonomySource, parse_taxonomy};
