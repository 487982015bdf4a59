/*
Mapping report: a traceable explanation of one run.

    renamed             original id -> canonical name, with the key that produced it
    dropped             ids of unkeyable blocks (absent from the rewritten definitions)
    unresolved_imports  import-line ids that had no mapping entry and were left as-is

Encoded as TOON so the rename table reads as a plain table.
*/
use serde::Serialize;

use crate::core::error::CanonError;
use crate::core::namer::CanonicalSet;
use crate::core::rewrite::ImportRewrite;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub original_id: String,
    pub canonical_name: String,
    pub fqdn: String,
    pub record_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingReport {
    pub resource_kind: String,
    pub renamed: Vec<ReportEntry>,
    pub dropped: Vec<String>,
    pub unresolved_imports: Vec<String>,
}

impl MappingReport {
    pub fn build(resource_kind: &str, set: &CanonicalSet, imports: &ImportRewrite) -> Self {
        let renamed = set
            .groups
            .iter()
            .flat_map(|g| {
                g.members.iter().map(move |m| ReportEntry {
                    original_id: m.original_id.clone(),
                    canonical_name: m.canonical_name.clone(),
                    fqdn: g.key.fqdn.clone(),
                    record_type: g.key.record_type.clone(),
                })
            })
            .collect();

        Self {
            resource_kind: resource_kind.to_string(),
            renamed,
            dropped: set.dropped.clone(),
            unresolved_imports: imports.unresolved.clone(),
        }
    }

    //ids whose canonical name differs from the original one
    pub fn changed(&self) -> usize {
        self.renamed.iter().filter(|e| e.original_id != e.canonical_name).count()
    }

    pub fn to_toon(&self) -> Result<String, CanonError> {
        toon_format::encode_default(self).map_err(|e| CanonError::Report(e.to_string()))
    }
}
