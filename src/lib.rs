pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod modules;
pub mod services;

// Re-exports for the common entry points
pub use domain::{TaxonomyError, TaxonomySource};
pub use models::{DescriptiveRecord, TaxonomyNode};
pub use modules::cataloguing_pro::{CleanMode, Cleaner};
pub use services::{ClcParser, SegmentPaths};
