// block extraction from the definition file
use regex::Regex;
use tracing::debug;

use crate::core::error::CanonError;
use crate::core::types::ResourceBlock;

/// Finds top-level `resource "<kind>" "<id>" { ... }` declarations of one resource kind.
///
/// The body runs up to the first closing brace that follows whitespace, which is
/// enough for record blocks since they never nest deeper than one level.
/// Declarations that do not open with `{` plus whitespace are skipped. A block whose
/// closing `}` has no whitespace before it is not closed there: its body runs on
/// to the next `\s+}`, swallowing the following declaration(s) into one block.
#[derive(Debug, Clone)]
pub struct BlockExtractor {
    resource_kind: String,
    pattern: Regex,
}

impl BlockExtractor {
    pub fn new(resource_kind: &str) -> Result<Self, CanonError> {
        let source = format!(
            r#"(?s)resource "{}" "([^"]+)" \{{\s+(.*?)\s+\}}"#,
            regex::escape(resource_kind)
        );
        let pattern = Regex::new(&source).map_err(|source| CanonError::Pattern {
            literal: resource_kind.to_string(),
            source,
        })?;

        Ok(Self { resource_kind: resource_kind.to_string(), pattern })
    }

    pub fn resource_kind(&self) -> &str {
        &self.resource_kind
    }

    //lazy, document order
    pub fn blocks<'a>(&'a self, text: &'a str) -> impl Iterator<Item = ResourceBlock> + 'a {
        self.pattern.captures_iter(text).filter_map(|caps| {
            let id = caps.get(1)?.as_str();
            let body = caps.get(2)?.as_str().trim();
            debug!(resource_id = id, "extracted block");
            Some(ResourceBlock::new(id, body))
        })
    }
}
