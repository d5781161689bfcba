//! Node and edge records plus their style maps.
//!
//! These mirror the shapes the hosting page supplies as JSON (see
//! [`crate::ingest`]): free-form `attr` maps, a style record per node/edge,
//! and derived fields (`key`, `radius`, `link_pos`, ...) that are recomputed
//! on every full read pass and therefore round-trip through snapshots.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Domain of the node size scale (`style.size` as supplied by the host).
pub const NODE_SIZE_DOMAIN: (f64, f64) = (1.0, 100.0);
/// Range the size scale maps into before the area computation.
pub const NODE_SIZE_RANGE: (f64, f64) = (8.0, 24.0);
/// Fallback when `style.size` does not map to a usable value.
pub const NORMAL_BASE_NODE_SIZE: f64 = 8.0;

/// Identity of a node as the host refers to it: an opaque id plus an opaque
/// type, both carried as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: String,
    #[serde(rename = "type")]
    pub ntype: String,
}

impl NodeRef {
    pub fn new(id: impl Into<String>, ntype: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ntype: ntype.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub fill: String,
    pub opacity: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            fill: "#000".to_string(),
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    pub size: f64,
    pub shape: String,
    pub fill: String,
    pub stroke: String,
    #[serde(rename = "strokeWidth")]
    pub stroke_width: f64,
    pub dashed: bool,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelStyle>,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            size: 100.0,
            shape: "square".to_string(),
            fill: "#ff5500".to_string(),
            stroke: "#ccc".to_string(),
            stroke_width: 1.0,
            dashed: true,
            opacity: 1.0,
            label: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    pub stroke: String,
    #[serde(rename = "strokeWidth")]
    pub stroke_width: f64,
    pub dashed: bool,
    pub opacity: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke: "#ccc".to_string(),
            stroke_width: 1.0,
            dashed: true,
            opacity: 1.0,
        }
    }
}

/// A graph node. `key`, `shape_size` and `radius` are derived on read; `x`/`y`
/// are written by the external layout engine between ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub ntype: String,
    #[serde(default)]
    pub attr: Map<String, Value>,
    #[serde(default)]
    pub style: NodeStyle,

    #[serde(default)]
    pub key: String,
    #[serde(default, rename = "shapeSize")]
    pub shape_size: f64,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        ntype: impl Into<String>,
        attr: Map<String, Value>,
        style: NodeStyle,
    ) -> Self {
        Self {
            id: id.into(),
            ntype: ntype.into(),
            attr,
            style,
            key: String::new(),
            shape_size: 0.0,
            radius: 0.0,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn node_ref(&self) -> NodeRef {
        NodeRef::new(self.id.clone(), self.ntype.clone())
    }

    pub fn is(&self, id: &str, ntype: &str) -> bool {
        self.id == id && self.ntype == ntype
    }
}

fn default_group_size() -> usize {
    1
}

/// A typed edge. The `key`/`source_key`/`target_key` triple is `None` while an
/// endpoint reference does not resolve to a node in the current node set; such
/// edges stay in the edge list but are skipped by grouping and connectivity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
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

    #[serde(default)]
    pub key: Option<String>,
    #[serde(default, rename = "sourceKey")]
    pub source_key: Option<String>,
    #[serde(default, rename = "targetKey")]
    pub target_key: Option<String>,
    /// Signed position within the parallel-edge group; drives curve bowing.
    #[serde(default, rename = "linkPos")]
    pub link_pos: i32,
    #[serde(default = "default_group_size", rename = "groupSize")]
    pub group_size: usize,
}

impl Edge {
    pub fn new(
        source: NodeRef,
        target: NodeRef,
        etype: impl Into<String>,
        attr: Map<String, Value>,
        style: EdgeStyle,
        directed: bool,
    ) -> Self {
        Self {
            source,
            target,
            etype: etype.into(),
            attr,
            style,
            directed,
            key: None,
            source_key: None,
            target_key: None,
            link_pos: 0,
            group_size: 1,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.source_key.is_some() && self.target_key.is_some()
    }

    pub fn touches(&self, id: &str, ntype: &str) -> bool {
        (self.source.id == id && self.source.ntype == ntype)
            || (self.target.id == id && self.target.ntype == ntype)
    }
}

/// Linear size scale over [`NODE_SIZE_DOMAIN`] -> [`NODE_SIZE_RANGE`].
/// Unclamped: out-of-domain sizes extrapolate.
fn size_scale(size: f64) -> f64 {
    let (d0, d1) = NODE_SIZE_DOMAIN;
    let (r0, r1) = NODE_SIZE_RANGE;
    r0 + (size - d0) * (r1 - r0) / (d1 - d0)
}

/// Area of the rendered shape for a given `style.size`, area-preserving so a
/// node twice the size reads as twice the ink, not twice the diameter.
pub fn shape_size(size: f64) -> f64 {
    let scaled = size_scale(size);
    let scaled = if scaled.is_finite() && scaled != 0.0 {
        scaled
    } else {
        NORMAL_BASE_NODE_SIZE
    };
    std::f64::consts::PI * scaled * scaled
}

/// Collision/boundary radius derived from the shape area.
pub fn node_radius(shape_size: f64) -> f64 {
    (shape_size / 2.0).sqrt()
}
