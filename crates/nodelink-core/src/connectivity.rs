//! Adjacency indexes for O(1) connectivity queries.
//!
//! Rebuilt wholesale from the keyed edge list on every structural mutation;
//! no incremental maintenance. Edges with unresolved endpoints are skipped,
//! which degrades connectivity answers for those edges instead of failing
//! the whole read.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::keys::pair_signature;
use crate::model::Edge;

#[derive(Debug, Default, Clone)]
pub struct ConnectivityIndex {
    /// node key -> keys reachable over edges ingested with it as source.
    outgoing: FxHashMap<String, FxHashSet<String>>,
    /// node key -> keys of sources of edges ingested with it as target.
    incoming: FxHashMap<String, FxHashSet<String>>,
    /// Ordered pair signatures present in ingestion direction.
    connected: FxHashSet<String>,
}

impl ConnectivityIndex {
    pub fn build(edges: &[Edge]) -> Self {
        let mut index = Self::default();
        for edge in edges {
            let (Some(src), Some(tgt)) = (edge.source_key.as_deref(), edge.target_key.as_deref())
            else {
                continue;
            };
            index
                .outgoing
                .entry(src.to_string())
                .or_default()
                .insert(tgt.to_string());
            index
                .incoming
                .entry(tgt.to_string())
                .or_default()
                .insert(src.to_string());
            index.connected.insert(pair_signature(src, tgt));
        }
        index
    }

    /// True when both keys name the same node or an edge exists between them
    /// in either direction.
    pub fn is_connected(&self, a_key: &str, b_key: &str) -> bool {
        if a_key == b_key {
            return true;
        }
        self.connected.contains(&pair_signature(a_key, b_key))
            || self.connected.contains(&pair_signature(b_key, a_key))
    }

    pub fn has_incoming(&self, key: &str) -> bool {
        self.incoming.contains_key(key)
    }

    pub fn has_outgoing(&self, key: &str) -> bool {
        self.outgoing.contains_key(key)
    }

    pub fn has_any(&self, key: &str) -> bool {
        self.has_incoming(key) || self.has_outgoing(key)
    }
}
