//! Process-wide parser shared by all callers

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::TaxonomyError;
use crate::infrastructure::JsonTaxonomySource;
use crate::services::ClcParser;

static PARSER: OnceCell<Arc<ClcParser>> = OnceCell::new();

/// Build the parser from `config` on first use and hand out the same instance
/// afterward. Later calls ignore `config`. A failed build is not cached.
pub fn shared_parser(config: &Config) -> Result<Arc<ClcParser>, TaxonomyError> {
    PARSER
        .get_or_try_init(|| {
            let source = JsonTaxonomySource::from_path(&config.taxonomy_path);
            ClcParser::from_source(&source, config.clean_mode).map(Arc::new)
        })
        .cloned()
}
