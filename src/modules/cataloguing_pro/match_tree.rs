//! Compiled matching tree for class → subclass → division resolution
//!
//! Every node carries a [`CodePattern`] built from its own expanded code and
//! the expanded codes of all its descendants, so a node matches any code
//! nested beneath it. Sibling order is the taxonomy definition order.

use crate::models::TaxonomyNode;

use super::range::expand_range;

/// Anchored, case-insensitive prefix matcher over a set of literal codes.
///
/// `K8` accepts `K837`; there is no end anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePattern {
    alternatives: Vec<String>,
}

impl CodePattern {
    pub fn new(alternatives: Vec<String>) -> Self {
        Self { alternatives }
    }

    /// True when `code` starts with any alternative, ignoring ASCII case
    pub fn matches(&self, code: &str) -> bool {
        self.alternatives
            .iter()
            .any(|alt| starts_with_ignore_case(code, alt))
    }

    /// Alternatives in match-priority order
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }
}

fn starts_with_ignore_case(code: &str, prefix: &str) -> bool {
    let (code, prefix) = (code.as_bytes(), prefix.as_bytes());
    code.len() >= prefix.len() && code[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[derive(Debug, Clone)]
pub struct MatchNode {
    pub code: String,
    pub pattern: CodePattern,
    /// Empty at division level
    pub children: Vec<MatchNode>,
}

/// Three-level tree of compiled patterns, classes at the root.
#[derive(Debug, Clone, Default)]
pub struct MatchTree {
    pub classes: Vec<MatchNode>,
}

impl MatchTree {
    pub fn build(taxonomy: &[TaxonomyNode]) -> Self {
        let classes = taxonomy
            .iter()
            .map(|class| MatchNode {
                code: class.code.clone(),
                pattern: CodePattern::new(collect_codes(class)),
                children: class
                    .children
                    .iter()
                    .map(|subclass| MatchNode {
                        code: subclass.code.clone(),
                        pattern: CodePattern::new(collect_codes(subclass)),
                        children: subclass
                            .children
                            .iter()
                            .map(|division| MatchNode {
                                code: division.code.clone(),
                                pattern: CodePattern::new(collect_codes(division)),
                                children: Vec::new(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { classes }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Expanded codes of `node` and all of its descendants.
///
/// The node's own codes come first, then each child's list, and the
/// accumulated list is reversed at every level. Deeper codes therefore end
/// up ahead of their ancestors.
pub fn collect_codes(node: &TaxonomyNode) -> Vec<String> {
    let mut codes = expand_range(&node.code);
    for child in &node.children {
        codes.extend(collect_codes(child));
    }
    codes.reverse();
    codes
}
