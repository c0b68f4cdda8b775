//! CLC Service - Public entry points for classification resolution
//!
//! A `ClcParser` is built once from a taxonomy and is read-only afterward,
//! so it can be shared behind an `Arc` across threads.

use crate::domain::{TaxonomyError, TaxonomySource};
use crate::models::{DescriptiveRecord, TaxonomyNode};
use crate::modules::cataloguing_pro::{CleanMode, Cleaner, FlatIndex, MatchTree};

/// Segment text paired with its resolved code path, in input order
pub type SegmentPaths = Vec<(String, Vec<String>)>;

#[derive(Debug, Clone)]
pub struct ClcParser {
    cleaner: Cleaner,
    tree: MatchTree,
    index: FlatIndex,
}

impl ClcParser {
    pub fn new(taxonomy: &[TaxonomyNode], mode: CleanMode) -> Result<Self, TaxonomyError> {
        if taxonomy.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let tree = MatchTree::build(taxonomy);
        let index = FlatIndex::build(taxonomy);
        tracing::info!(
            "Built CLC match tree: {} classes, {} indexed codes ({:?} cleaning)",
            tree.len(),
            index.len(),
            mode
        );

        Ok(Self {
            cleaner: Cleaner::new(mode),
            tree,
            index,
        })
    }

    pub fn from_source(source: &dyn TaxonomySource, mode: CleanMode) -> Result<Self, TaxonomyError> {
        let taxonomy = source.load()?;
        Self::new(&taxonomy, mode)
    }

    /// Resolve every `;`-separated code in `text` (full-width `；` accepted).
    ///
    /// Keys are the trimmed segments as written. A repeated segment keeps its
    /// first position and takes the latest path.
    pub fn resolve_all(&self, text: &str) -> SegmentPaths {
        let mut results: SegmentPaths = Vec::new();

        for segment in split_segments(text) {
            let path = self.resolve_code(segment);
            match results.iter_mut().find(|(key, _)| key == segment) {
                Some(entry) => entry.1 = path,
                None => results.push((segment.to_string(), path)),
            }
        }

        results
    }

    /// Clean one segment and resolve it to 0-3 codes
    pub fn resolve_code(&self, segment: &str) -> Vec<String> {
        let code = self.cleaner.clean(segment);
        if code.is_empty() {
            tracing::warn!("No CLC code found in segment: {:?}", segment);
            return Vec::new();
        }

        let path = self.tree.resolve(&code);
        tracing::debug!("Resolved {:?} as {} -> {:?}", segment, code, path);
        path
    }

    /// Record for a class, subclass or division code as written in the taxonomy
    pub fn describe(&self, code: &str) -> Option<&DescriptiveRecord> {
        self.index.get(code)
    }

    /// Record of the deepest resolved code for every segment of `text`
    pub fn describe_all(&self, text: &str) -> Vec<(String, Option<DescriptiveRecord>)> {
        self.resolve_all(text)
            .into_iter()
            .map(|(segment, path)| {
                let record = path.last().and_then(|code| self.describe(code)).cloned();
                (segment, record)
            })
            .collect()
    }

    pub fn cleaner(&self) -> &Cleaner {
        &self.cleaner
    }

    pub fn tree(&self) -> &MatchTree {
        &self.tree
    }

    pub fn index(&self) -> &FlatIndex {
        &self.index
    }
}

fn split_segments(text: &str) -> impl Iterator<Item = &str> {
    text.split([';', '；'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}
