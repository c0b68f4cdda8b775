//! Source trait for taxonomy definitions
//!
//! The core only needs the three-level tree in definition order.
//! Implementations live in the infrastructure layer.

use super::TaxonomyError;
use crate::models::TaxonomyNode;

/// Supplies the raw classification tree, classes first.
pub trait TaxonomySource: Send + Sync {
    /// Load all class nodes with their subclasses and divisions
    fn load(&self) -> Result<Vec<TaxonomyNode>, TaxonomyError>;
}

/// Already-loaded trees can be used directly as a source
impl TaxonomySource for Vec<TaxonomyNode> {
    fn load(&self) -> Result<Vec<TaxonomyNode>, TaxonomyError> {
        Ok(self.clone())
    }
}
