// shared value types for the canonicalization engine
use std::fmt;

use serde::Serialize;

/// One declared resource as it appears in the definition file.
///
/// `body` is the text between the braces with the surrounding whitespace trimmed;
/// everything inside it is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBlock {
    pub original_id: String,
    pub body: String,
}

impl ResourceBlock {
    pub fn new(original_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self { original_id: original_id.into(), body: body.into() }
    }
}

/// Real-world identity of a record: (fqdn, record type).
/// Two blocks with equal keys are semantic duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SemanticKey {
    pub fqdn: String,
    pub record_type: String,
}

impl SemanticKey {
    pub fn new(fqdn: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self { fqdn: fqdn.into(), record_type: record_type.into() }
    }

    //"{record_type}_{sanitized_fqdn}", shared by every member of a group
    pub fn base_name(&self) -> String {
        format!("{}_{}", self.record_type, sanitize_fqdn(&self.fqdn))
    }
}

impl fmt::Display for SemanticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fqdn, self.record_type)
    }
}

/// Replace every `.` and `-` with `_`.
pub fn sanitize_fqdn(fqdn: &str) -> String {
    fqdn.replace(['.', '-'], "_")
}

/// Position is 1-based: the first member keeps the bare base, member n gets `_n`.
pub fn positional_name(base: &str, position: usize) -> String {
    if position <= 1 {
        base.to_string()
    } else {
        format!("{base}_{position}")
    }
}
