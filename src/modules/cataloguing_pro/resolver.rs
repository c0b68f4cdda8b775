//! Level-by-level resolution of a canonical code against the match tree

use super::match_tree::{MatchNode, MatchTree};

impl MatchTree {
    /// Resolve `code` to its class, subclass and division codes.
    ///
    /// At each level the first sibling whose pattern accepts the code wins,
    /// in definition order. Resolution stops at the first level without a
    /// match, so the path holds 0 to 3 codes.
    pub fn resolve(&self, code: &str) -> Vec<String> {
        let mut path = Vec::with_capacity(3);
        if code.is_empty() {
            return path;
        }

        let mut level: &[MatchNode] = &self.classes;
        while let Some(node) = first_match(level, code) {
            path.push(node.code.clone());
            level = &node.children;
        }

        path
    }
}

fn first_match<'a>(level: &'a [MatchNode], code: &str) -> Option<&'a MatchNode> {
    level.iter().find(|node| node.pattern.matches(code))
}

#[cfg(test)]
mod tests {
    use crate::models::TaxonomyNode;

    use super::*;

    fn tree() -> MatchTree {
        MatchTree::build(&[
            TaxonomyNode::new("T", "工业技术").with_children(vec![
                TaxonomyNode::new("TP", "自动化技术、计算机技术").with_children(vec![
                    TaxonomyNode::new("TP3", "计算技术、计算机技术"),
                    TaxonomyNode::new("TP312", "程序语言、算法语言"),
                ]),
            ]),
            TaxonomyNode::new("K", "历史、地理").with_children(vec![
                TaxonomyNode::new("K8", "传记")
                    .with_children(vec![TaxonomyNode::new("K83", "外国人物传记")]),
                TaxonomyNode::new("K83", "外国人物传记（重复）"),
            ]),
        ])
    }

    #[test]
    fn test_full_path() {
        assert_eq!(tree().resolve("K837.125.6"), vec!["K", "K8", "K83"]);
    }

    #[test]
    fn test_first_sibling_wins_over_more_specific() {
        // TP3 is listed before TP312 and also accepts the code
        assert_eq!(tree().resolve("TP312"), vec!["T", "TP", "TP3"]);
    }

    #[test]
    fn test_partial_paths() {
        let tree = tree();
        assert_eq!(tree.resolve("T"), vec!["T"]);
        assert_eq!(tree.resolve("TP1"), vec!["T", "TP"]);
        assert_eq!(tree.resolve("K81"), vec!["K", "K8"]);
    }

    #[test]
    fn test_no_match() {
        let tree = tree();
        assert!(tree.resolve("A81").is_empty());
        assert!(tree.resolve("").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(tree().resolve("k837"), vec!["K", "K8", "K83"]);
    }
}
