// semantic key resolution from a block body
use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::SemanticKey;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name\s+=\s+"([^"]+)""#).unwrap());

static TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"type\s+=\s+"([^"]+)""#).unwrap());

/// Outcome of key resolution. Unkeyable blocks are dropped from the canonical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResolution {
    Keyed(SemanticKey),
    Unkeyable { missing_name: bool, missing_type: bool },
}

/// First match wins for each field, wherever it sits in the body.
pub fn resolve_key(body: &str) -> KeyResolution {
    let name = first_capture(&NAME_RE, body);
    let record_type = first_capture(&TYPE_RE, body);

    match (name, record_type) {
        (Some(fqdn), Some(record_type)) => KeyResolution::Keyed(SemanticKey::new(fqdn, record_type)),
        (name, record_type) => KeyResolution::Unkeyable {
            missing_name: name.is_none(),
            missing_type: record_type.is_none(),
        },
    }
}

fn first_capture<'a>(re: &Regex, body: &'a str) -> Option<&'a str> {
    re.captures(body).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}
