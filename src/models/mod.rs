pub mod taxonomy;

pub use taxonomy::{DescriptiveRecord, TaxonomyNode};
