// grouping by semantic key + deterministic name assignment
use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::core::key::{resolve_key, KeyResolution};
use crate::core::types::{positional_name, ResourceBlock, SemanticKey};

/// Original identifier -> canonical name, one entry per keyable block.
///
/// Entries keep assignment order so reports and tests read in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierMapping {
    index: HashMap<String, usize>,
    entries: Vec<(String, String)>,
}

impl IdentifierMapping {
    //a repeated original id keeps its first slot but takes the latest name
    fn insert(&mut self, original_id: &str, canonical_name: &str) {
        match self.index.get(original_id) {
            Some(&slot) => self.entries[slot].1 = canonical_name.to_string(),
            None => {
                self.index.insert(original_id.to_string(), self.entries.len());
                self.entries.push((original_id.to_string(), canonical_name.to_string()));
            }
        }
    }

    pub fn get(&self, original_id: &str) -> Option<&str> {
        self.index.get(original_id).map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(old, new)| (old.as_str(), new.as_str()))
    }
}

/// A block after naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBlock {
    pub original_id: String,
    pub canonical_name: String,
    pub body: String,
}

/// All blocks sharing one semantic key, in the order they were declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGroup {
    pub key: SemanticKey,
    pub members: Vec<NamedBlock>,
}

/// Result of a naming pass: groups in first-seen-key order, the mapping,
/// and the ids of blocks that were dropped as unkeyable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalSet {
    pub groups: Vec<NameGroup>,
    pub mapping: IdentifierMapping,
    pub dropped: Vec<String>,
}

impl CanonicalSet {
    pub fn named_blocks(&self) -> impl Iterator<Item = &NamedBlock> + '_ {
        self.groups.iter().flat_map(|g| g.members.iter())
    }

    pub fn block_count(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }
}

/// Collects blocks in document order, then assigns names in one pass.
#[derive(Debug, Default)]
pub struct CanonicalNamer {
    //first-seen-key order; the HashMap only indexes into it
    groups: Vec<(SemanticKey, Vec<ResourceBlock>)>,
    group_index: HashMap<SemanticKey, usize>,
    dropped: Vec<String>,
}

impl CanonicalNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, block: ResourceBlock) {
        match resolve_key(&block.body) {
            KeyResolution::Keyed(key) => self.push(key, block),
            KeyResolution::Unkeyable { missing_name, missing_type } => {
                debug!(resource_id = %block.original_id, missing_name, missing_type, "dropping unkeyable block");
                self.dropped.push(block.original_id);
            }
        }
    }

    fn push(&mut self, key: SemanticKey, block: ResourceBlock) {
        match self.group_index.get(&key) {
            Some(&slot) => self.groups[slot].1.push(block),
            None => {
                self.group_index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![block]));
            }
        }
    }

    /// Member i (1-based) of a group gets `base` for i = 1, else `base_i`.
    ///
    /// Sanitization is lossy, so two keys can share a base. A name already taken
    /// by an earlier group is bumped to the next free suffix.
    pub fn finish(self) -> CanonicalSet {
        let mut taken: HashSet<String> = HashSet::new();
        let mut mapping = IdentifierMapping::default();
        let mut groups = Vec::with_capacity(self.groups.len());

        for (key, blocks) in self.groups {
            let base = key.base_name();
            let mut slot = 0usize;
            let mut members = Vec::with_capacity(blocks.len());

            for block in blocks {
                slot += 1;
                let mut name = positional_name(&base, slot);
                while taken.contains(&name) {
                    warn!(key = %key, name = %name, "canonical name already taken, bumping suffix");
                    slot += 1;
                    name = positional_name(&base, slot);
                }
                taken.insert(name.clone());

                debug!(from = %block.original_id, to = %name, "assigned canonical name");
                mapping.insert(&block.original_id, &name);
                members.push(NamedBlock {
                    original_id: block.original_id,
                    canonical_name: name,
                    body: block.body,
                });
            }

            groups.push(NameGroup { key, members });
        }

        CanonicalSet { groups, mapping, dropped: self.dropped }
    }
}

/// Name every block of an already-extracted sequence.
pub fn assign_names(blocks: impl IntoIterator<Item = ResourceBlock>) -> CanonicalSet {
    let mut namer = CanonicalNamer::new();
    for block in blocks {
        namer.observe(block);
    }
    namer.finish()
}
