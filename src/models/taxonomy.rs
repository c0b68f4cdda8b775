use serde::{Deserialize, Serialize};

/// One entry of the classification tree (class, subclass or division).
///
/// `children` is required on every node, leaves carry an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    pub code: String,
    pub name: String,
    pub children: Vec<TaxonomyNode>,
}

impl TaxonomyNode {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TaxonomyNode>) -> Self {
        self.children = children;
        self
    }
}

// DTO for lookups by code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveRecord {
    pub code: String,
    pub name: String,
    /// Codes from the class down to this node, inclusive
    pub path: Vec<String>,
    #[serde(rename = "namePath")]
    pub name_path: Vec<String>,
}
