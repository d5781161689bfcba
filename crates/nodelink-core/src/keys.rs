//! Composite key derivation for nodes and edges.
//!
//! Raw ids, node types and edge types are opaque values; each gets an integer
//! index assigned at first sight during a full read pass, and composite keys
//! are concatenations of those indices. The maps are rebuilt from scratch on
//! every read pass, so indices are deterministic for a fixed input order but
//! not stable under reordering (callers treat full-rebuild-on-mutation as the
//! contract).
//!
//! The index assigned to a newly seen value is the enumeration position of
//! the node or edge currently being processed, not an independent counter.
//! Indices from different maps may therefore coincide numerically; only the
//! mapping role matters.

use rustc_hash::FxHashMap;

/// Separator between the id index and the type index inside a node key.
pub const ID_TYPE_SEP: char = '-';
/// Separator between segments of an edge key (and of pair signatures).
pub const EDGE_KEY_SEP: char = '_';

#[derive(Debug, Default, Clone)]
pub struct KeyRegistry {
    ids: FxHashMap<String, usize>,
    types: FxHashMap<String, usize>,
    etypes: FxHashMap<String, usize>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a node's id/type at enumeration position `position`; values
    /// already present keep their original index.
    pub fn note_node(&mut self, id: &str, ntype: &str, position: usize) {
        self.ids.entry(id.to_string()).or_insert(position);
        self.types.entry(ntype.to_string()).or_insert(position);
    }

    /// Records an edge type at enumeration position `position`.
    pub fn note_etype(&mut self, etype: &str, position: usize) {
        self.etypes.entry(etype.to_string()).or_insert(position);
    }

    pub fn id_index(&self, id: &str) -> Option<usize> {
        self.ids.get(id).copied()
    }

    pub fn type_index(&self, ntype: &str) -> Option<usize> {
        self.types.get(ntype).copied()
    }

    pub fn etype_index(&self, etype: &str) -> Option<usize> {
        self.etypes.get(etype).copied()
    }

    /// Composite key for a node, or `None` when either component was never
    /// seen in the current pass.
    pub fn node_key(&self, id: &str, ntype: &str) -> Option<String> {
        let id_idx = self.id_index(id)?;
        let type_idx = self.type_index(ntype)?;
        Some(composite_node_key(id_idx, type_idx))
    }
}

pub fn composite_node_key(id_idx: usize, type_idx: usize) -> String {
    format!("{id_idx}{ID_TYPE_SEP}{type_idx}")
}

pub fn composite_edge_key(source_key: &str, target_key: &str, etype_idx: usize) -> String {
    format!("{source_key}{EDGE_KEY_SEP}{target_key}{EDGE_KEY_SEP}{etype_idx}")
}

/// Ordered pair signature (`source` before `target`, direction-sensitive).
pub fn pair_signature(source_key: &str, target_key: &str) -> String {
    format!("{source_key}{EDGE_KEY_SEP}{target_key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_index_wins() {
        let mut reg = KeyRegistry::new();
        reg.note_node("a", "user", 0);
        reg.note_node("b", "user", 1);
        reg.note_node("a", "tag", 2);

        assert_eq!(reg.id_index("a"), Some(0));
        assert_eq!(reg.id_index("b"), Some(1));
        assert_eq!(reg.type_index("user"), Some(0));
        assert_eq!(reg.type_index("tag"), Some(2));
    }

    #[test]
    fn node_key_concatenates_indices() {
        let mut reg = KeyRegistry::new();
        reg.note_node("a", "user", 0);
        reg.note_node("b", "tag", 1);
        assert_eq!(reg.node_key("b", "user").as_deref(), Some("1-0"));
        assert_eq!(reg.node_key("b", "movie"), None);
    }

    #[test]
    fn edge_key_concatenates_segments() {
        assert_eq!(composite_edge_key("0-0", "1-0", 3), "0-0_1-0_3");
        assert_eq!(pair_signature("0-0", "1-0"), "0-0_1-0");
    }
}
