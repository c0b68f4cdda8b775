// Professional Cataloguing Module
// Handles Chinese Library Classification (CLC) code cleaning and resolution

pub mod cleaner;
pub mod index;
pub mod match_tree;
pub mod range;
pub mod resolver;

pub use cleaner::{CleanMode, Cleaner};
pub use index::FlatIndex;
pub use match_tree::{CodePattern, MatchNode, MatchTree, collect_codes};
pub use range::expand_range;
