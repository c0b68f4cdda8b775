//! Domain layer - Pure classification abstractions
//!
//! No file or environment access here.
//! Only trait definitions and domain error types.

pub mod errors;
pub mod repositories;

pub use errors::TaxonomyError;
pub use repositories::TaxonomySource;
