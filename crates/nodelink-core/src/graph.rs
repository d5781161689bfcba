//! The mutable graph state and its mutation/query/snapshot API.
//!
//! A [`GraphData`] owns the node and edge lists plus everything derived from
//! them (key registry, parallel-edge groups, connectivity index). Any
//! structural mutation triggers a full read pass: keys, groups and indexes
//! are rebuilt from scratch rather than maintained incrementally. That keeps
//! the derivations deterministic for a fixed list order and is cheap enough
//! for the small-to-medium graphs this widget targets.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::connectivity::ConnectivityIndex;
use crate::group::{GroupSizes, assign_groups};
use crate::keys::{KeyRegistry, composite_edge_key};
use crate::model::{self, Edge, EdgeStyle, Node, NodeRef, NodeStyle};

/// Edge description supplied alongside `add_node` for edges incident to the
/// new node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: NodeRef,
    pub target: NodeRef,
    #[serde(default)]
    pub etype: String,
    #[serde(default)]
    pub attr: Map<String, Value>,
    #[serde(default)]
    pub style: EdgeStyle,
    #[serde(default)]
    pub directed: bool,
}

impl From<EdgeSpec> for Edge {
    fn from(spec: EdgeSpec) -> Self {
        Edge::new(
            spec.source,
            spec.target,
            spec.etype,
            spec.attr,
            spec.style,
            spec.directed,
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotStatus {
    #[serde(rename = "zoomScale")]
    pub zoom_scale: f64,
}

/// Deep copy of the current graph, derived fields included. Restoring replays
/// a full read pass, which reproduces the same keys and link positions as
/// long as the list order is preserved (it is: the copies are ordered).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub nodes: Vec<Node>,
    pub links: Vec<Edge>,
    pub status: SnapshotStatus,
}

#[derive(Debug, Default, Clone)]
pub struct GraphData {
    nodes: Vec<Node>,
    edges: Vec<Edge>,

    registry: KeyRegistry,
    /// node key -> index of the first node carrying it.
    nodes_by_key: FxHashMap<String, usize>,
    /// edge key -> index of the first edge carrying it.
    edges_by_key: FxHashMap<String, usize>,
    group_sizes: GroupSizes,
    connectivity: ConnectivityIndex,
    radius_extent: Option<(f64, f64)>,
}

impl GraphData {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut graph = Self {
            nodes,
            edges,
            ..Self::default()
        };
        graph.read_data();
        graph
    }

    /// Full read pass: recompute radii, assign registry indices in
    /// enumeration order, resolve edge endpoints, regroup parallel edges and
    /// rebuild the connectivity index.
    pub fn read_data(&mut self) {
        let mut registry = KeyRegistry::new();
        let mut nodes_by_key: FxHashMap<String, usize> = FxHashMap::default();
        let mut radius_extent: Option<(f64, f64)> = None;

        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.shape_size = model::shape_size(node.style.size);
            node.radius = model::node_radius(node.shape_size);
            registry.note_node(&node.id, &node.ntype, i);
            node.key = registry
                .node_key(&node.id, &node.ntype)
                .unwrap_or_default();

            nodes_by_key.entry(node.key.clone()).or_insert(i);
            radius_extent = Some(match radius_extent {
                None => (node.radius, node.radius),
                Some((lo, hi)) => (lo.min(node.radius), hi.max(node.radius)),
            });
        }

        for (i, edge) in self.edges.iter_mut().enumerate() {
            registry.note_etype(&edge.etype, i);

            let src_key = registry.node_key(&edge.source.id, &edge.source.ntype);
            let tgt_key = registry.node_key(&edge.target.id, &edge.target.ntype);
            match (src_key, tgt_key) {
                (Some(src), Some(tgt))
                    if nodes_by_key.contains_key(&src) && nodes_by_key.contains_key(&tgt) =>
                {
                    let etype_idx = registry
                        .etype_index(&edge.etype)
                        .expect("etype noted above");
                    edge.key = Some(composite_edge_key(&src, &tgt, etype_idx));
                    edge.source_key = Some(src);
                    edge.target_key = Some(tgt);
                }
                _ => {
                    // MissingEndpoint policy: keep the raw record, drop the
                    // derived fields so grouping/connectivity skip it.
                    edge.key = None;
                    edge.source_key = None;
                    edge.target_key = None;
                }
            }
        }

        self.group_sizes = assign_groups(&mut self.edges);
        self.connectivity = ConnectivityIndex::build(&self.edges);

        let mut edges_by_key: FxHashMap<String, usize> = FxHashMap::default();
        for (i, edge) in self.edges.iter().enumerate() {
            if let Some(key) = &edge.key {
                edges_by_key.entry(key.clone()).or_insert(i);
            }
        }

        self.registry = registry;
        self.nodes_by_key = nodes_by_key;
        self.edges_by_key = edges_by_key;
        self.radius_extent = radius_extent;

        tracing::debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            groups = self.group_sizes.len(),
            "read pass complete"
        );
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Mutable node access for the external layout engine (position writes).
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    pub fn group_sizes(&self) -> &GroupSizes {
        &self.group_sizes
    }

    pub fn connectivity(&self) -> &ConnectivityIndex {
        &self.connectivity
    }

    /// `(min, max)` node radius, used for the layout engine's charge and
    /// collision hints. `None` for an empty graph.
    pub fn radius_extent(&self) -> Option<(f64, f64)> {
        self.radius_extent
    }

    pub fn node_key_of(&self, id: &str, ntype: &str) -> Option<String> {
        self.registry.node_key(id, ntype)
    }

    pub fn node_by_key(&self, key: &str) -> Option<&Node> {
        self.nodes_by_key.get(key).map(|&i| &self.nodes[i])
    }

    pub fn node_by_ref(&self, id: &str, ntype: &str) -> Option<&Node> {
        let key = self.node_key_of(id, ntype)?;
        self.node_by_key(&key)
    }

    /// Writes a position produced by the layout engine. Returns false when
    /// the key names no current node.
    pub fn set_position(&mut self, key: &str, x: f64, y: f64) -> bool {
        let Some(&i) = self.nodes_by_key.get(key) else {
            return false;
        };
        self.nodes[i].x = x;
        self.nodes[i].y = y;
        true
    }

    // ---- structural mutations (each triggers a full read pass) ----

    /// Adds a node and its associated edges. Adding an already-existing
    /// `(id, type)` is a no-op returning `false`.
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        ntype: impl Into<String>,
        attr: Map<String, Value>,
        style: NodeStyle,
        assoc_edges: Vec<EdgeSpec>,
    ) -> bool {
        let id = id.into();
        let ntype = ntype.into();
        if self.nodes.iter().any(|n| n.is(&id, &ntype)) {
            return false;
        }
        self.nodes.push(Node::new(id, ntype, attr, style));
        self.edges.extend(assoc_edges.into_iter().map(Edge::from));
        self.read_data();
        true
    }

    /// Removes a node and every edge incident to it.
    pub fn remove_node(&mut self, id: &str, ntype: &str) -> bool {
        let Some(i) = self.nodes.iter().position(|n| n.is(id, ntype)) else {
            return false;
        };
        self.nodes.remove(i);
        self.edges.retain(|e| !e.touches(id, ntype));
        self.read_data();
        true
    }

    /// Adds an edge. A duplicate `(source, target, etype)` request is a
    /// no-op returning `false`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_edge(
        &mut self,
        src_id: impl Into<String>,
        src_type: impl Into<String>,
        tgt_id: impl Into<String>,
        tgt_type: impl Into<String>,
        etype: impl Into<String>,
        attr: Map<String, Value>,
        style: EdgeStyle,
        directed: bool,
    ) -> bool {
        let source = NodeRef::new(src_id, src_type);
        let target = NodeRef::new(tgt_id, tgt_type);
        let etype = etype.into();
        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target && e.etype == etype)
        {
            return false;
        }
        self.edges
            .push(Edge::new(source, target, etype, attr, style, directed));
        self.read_data();
        true
    }

    pub fn remove_edge(
        &mut self,
        src_id: &str,
        src_type: &str,
        tgt_id: &str,
        tgt_type: &str,
        etype: &str,
    ) -> bool {
        let Some(i) = self.edges.iter().position(|e| {
            e.source.id == src_id
                && e.source.ntype == src_type
                && e.target.id == tgt_id
                && e.target.ntype == tgt_type
                && e.etype == etype
        }) else {
            return false;
        };
        self.edges.remove(i);
        self.read_data();
        true
    }

    // ---- queries ----

    pub fn is_connected(&self, a_id: &str, a_type: &str, b_id: &str, b_type: &str) -> bool {
        let (Some(a), Some(b)) = (
            self.node_key_of(a_id, a_type),
            self.node_key_of(b_id, b_type),
        ) else {
            return false;
        };
        self.connectivity.is_connected(&a, &b)
    }

    pub fn has_incoming_connections(&self, id: &str, ntype: &str) -> bool {
        self.node_key_of(id, ntype)
            .is_some_and(|key| self.connectivity.has_incoming(&key))
    }

    pub fn has_outgoing_connections(&self, id: &str, ntype: &str) -> bool {
        self.node_key_of(id, ntype)
            .is_some_and(|key| self.connectivity.has_outgoing(&key))
    }

    /// True when any edge in the raw list touches the node, resolved or not.
    pub fn has_connections(&self, id: &str, ntype: &str) -> bool {
        self.edges.iter().any(|e| e.touches(id, ntype))
    }

    /// All keyed edges touching the node, deduplicated by edge key.
    pub fn associated_links(&self, id: &str, ntype: &str) -> Vec<&Edge> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(i, e)| {
                e.touches(id, ntype)
                    && e.key
                        .as_ref()
                        .is_some_and(|k| self.edges_by_key.get(k) == Some(i))
            })
            .map(|(_, e)| e)
            .collect()
    }

    /// Neighbors of the node over its keyed edges, deduplicated by node key.
    pub fn associated_nodes(&self, id: &str, ntype: &str) -> Vec<&Node> {
        let mut seen: Vec<&str> = Vec::new();
        let mut out = Vec::new();
        for edge in self.associated_links(id, ntype) {
            let other = if edge.source.id == id && edge.source.ntype == ntype {
                edge.target_key.as_deref()
            } else {
                edge.source_key.as_deref()
            };
            let Some(other_key) = other else { continue };
            if seen.contains(&other_key) {
                continue;
            }
            if let Some(node) = self.node_by_key(other_key) {
                seen.push(other_key);
                out.push(node);
            }
        }
        out
    }

    // ---- snapshot ----

    pub fn snapshot(&self, status: SnapshotStatus) -> Snapshot {
        Snapshot {
            nodes: self.nodes.clone(),
            links: self.edges.clone(),
            status,
        }
    }

    /// Replaces the graph with a snapshot's contents and replays the read
    /// pass. Returns the snapshot's view status for the host to re-apply.
    pub fn restore(&mut self, snapshot: Snapshot) -> SnapshotStatus {
        self.nodes = snapshot.nodes;
        self.edges = snapshot.links;
        self.read_data();
        snapshot.status
    }
}
