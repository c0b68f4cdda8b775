//! JSON taxonomy source
//!
//! Expects an array of `{code, name, children}` classes nested three levels
//! deep, e.g. `[{"code": "A", "name": "...", "children": [...]}]`.

use std::path::{Path, PathBuf};

use crate::domain::{TaxonomyError, TaxonomySource};
use crate::models::TaxonomyNode;

#[derive(Debug, Clone)]
pub enum JsonTaxonomySource {
    File(PathBuf),
    Inline(String),
}

impl JsonTaxonomySource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        JsonTaxonomySource::File(path.as_ref().to_path_buf())
    }

    pub fn from_json(json: impl Into<String>) -> Self {
        JsonTaxonomySource::Inline(json.into())
    }
}

impl TaxonomySource for JsonTaxonomySource {
    fn load(&self) -> Result<Vec<TaxonomyNode>, TaxonomyError> {
        match self {
            JsonTaxonomySource::File(path) => {
                tracing::debug!("Loading CLC taxonomy from {:?}", path);
                let content = std::fs::read_to_string(path)
                    .map_err(|e| TaxonomyError::Io(format!("{}: {}", path.display(), e)))?;
                parse_taxonomy(&content)
            }
            JsonTaxonomySource::Inline(json) => parse_taxonomy(json),
        }
    }
}

pub fn parse_taxonomy(json: &str) -> Result<Vec<TaxonomyNode>, TaxonomyError> {
    let taxonomy: Vec<TaxonomyNode> = serde_json::from_str(json)?;
    if taxonomy.is_empty() {
        return Err(TaxonomyError::Empty);
    }
    Ok(taxonomy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_taxonomy() {
        let json = r#"[
            {"code": "A", "name": "马克思主义", "children": [
                {"code": "A1", "name": "马克思、恩格斯著作", "children": [
                    {"code": "A11", "name": "选集、文集", "children": []}
                ]}
            ]}
        ]"#;
        let taxonomy = JsonTaxonomySource::from_json(json).load().unwrap();
        assert_eq!(taxonomy.len(), 1);
        assert_eq!(taxonomy[0].children[0].children[0].code, "A11");
    }

    #[test]
    fn test_missing_children_is_malformed() {
        let json = r#"[{"code": "A", "name": "马克思主义"}]"#;
        let err = parse_taxonomy(json).unwrap_err();
        assert!(matches!(err, TaxonomyError::Malformed(_)), "got {:?}", err);
    }

    #[test]
    fn test_empty_array_is_rejected() {
        assert!(matches!(parse_taxonomy("[]"), Err(TaxonomyError::Empty)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = JsonTaxonomySource::from_path("does/not/exist.json");
        assert!(matches!(source.load(), Err(TaxonomyError::Io(_))));
    }
}
