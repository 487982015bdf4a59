// output rewriting: definition file + import script
use regex::Regex;
use tracing::debug;

use crate::core::error::CanonError;
use crate::core::namer::{CanonicalSet, IdentifierMapping};

/// Re-serialize every named block under its canonical name, groups in first-seen-key
/// order, one blank line between declarations. Bodies are emitted untouched.
pub fn render_definitions(resource_kind: &str, set: &CanonicalSet) -> String {
    let declarations: Vec<String> = set
        .named_blocks()
        .map(|b| format!("resource \"{}\" \"{}\" {{\n  {}\n}}", resource_kind, b.canonical_name, b.body))
        .collect();

    if declarations.is_empty() {
        return String::new();
    }
    let mut out = declarations.join("\n\n");
    out.push('\n');
    out
}

/// Result of rewriting an import script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRewrite {
    pub text: String,
    //matching lines whose identifier was substituted
    pub rewritten: usize,
    //identifiers on matching lines with no mapping entry, in line order
    pub unresolved: Vec<String>,
}

/// Rewrites `<import-command> <kind>.<id> <record-id>` lines.
#[derive(Debug, Clone)]
pub struct ReferenceRewriter {
    pattern: Regex,
}

impl ReferenceRewriter {
    pub fn new(import_command: &str, resource_kind: &str) -> Result<Self, CanonError> {
        let source = format!(
            r"^{} {}\.(\S+)\s+(.+)",
            regex::escape(import_command),
            regex::escape(resource_kind)
        );
        let pattern = Regex::new(&source).map_err(|source| CanonError::Pattern {
            literal: format!("{import_command} {resource_kind}"),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// Line order, line count and the final newline are kept. Only the identifier
    /// span of a matching line can change; every other byte is copied through.
    pub fn rewrite(&self, script: &str, mapping: &IdentifierMapping) -> ImportRewrite {
        let (body, trailing_newline) = match script.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (script, false),
        };

        let mut result = ImportRewrite::default();
        let mut lines: Vec<String> = Vec::new();

        for raw in body.split('\n') {
            let (line, cr) = match raw.strip_suffix('\r') {
                Some(line) => (line, "\r"),
                None => (raw, ""),
            };
            let rewritten = self.rewrite_line(line, mapping, &mut result);
            lines.push(format!("{rewritten}{cr}"));
        }

        result.text = lines.join("\n");
        if trailing_newline {
            result.text.push('\n');
        }
        result
    }

    fn rewrite_line(&self, line: &str, mapping: &IdentifierMapping, result: &mut ImportRewrite) -> String {
        let Some(id) = self.pattern.captures(line).and_then(|caps| caps.get(1)) else {
            return line.to_string();
        };

        match mapping.get(id.as_str()) {
            Some(new_id) => {
                result.rewritten += 1;
                format!("{}{}{}", &line[..id.start()], new_id, &line[id.end()..])
            }
            None => {
                debug!(resource_id = id.as_str(), "import line references an unmapped identifier");
                result.unresolved.push(id.as_str().to_string());
                line.to_string()
            }
        }
    }
}
