//! The per-tick geometry pass.
//!
//! Once per animation frame, after the layout engine has written node
//! positions, the widget recomputes every edge's control polygon. The pass is
//! a full synchronous O(E) sweep in two phases:
//!
//! 1. project each keyed edge's endpoints onto the node boundaries and record
//!    them per unordered pair (later edges overwrite, so the whole group
//!    shares one endpoint record);
//! 2. emit a straight path for lone edges and a fanned curve path for
//!    parallel edges.

use nodelink_core::GraphData;
use nodelink_core::group::canonical_pair;
use nodelink_geom::path::{multi_edge_path, single_edge_path};
use nodelink_geom::{
    BOUNDARY_GAP, EdgePath, GeomOptions, PairEndpoints, Point, boundary_points, point,
};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct EdgePathRecord {
    /// Index into `graph.edges()`.
    pub edge_index: usize,
    pub key: String,
    pub path: EdgePath,
}

/// Per-node values the widget forwards to the layout engine when (re)seeding
/// the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutHint {
    pub key: String,
    pub radius: f64,
    pub charge: f64,
}

/// Computes the control polygon for every keyed edge at the current node
/// positions. Edges with unresolved endpoints produce no path.
pub fn edge_paths(graph: &GraphData, opts: &GeomOptions) -> Vec<EdgePathRecord> {
    let mut pair_endpoints: FxHashMap<String, PairEndpoints> = FxHashMap::default();
    let mut outers: Vec<Option<(Point, Point)>> = vec![None; graph.edges().len()];

    for (i, edge) in graph.edges().iter().enumerate() {
        let (Some(src_key), Some(tgt_key)) = (edge.source_key.as_deref(), edge.target_key.as_deref())
        else {
            continue;
        };
        let (Some(src), Some(tgt)) = (graph.node_by_key(src_key), graph.node_by_key(tgt_key))
        else {
            continue;
        };
        let src_center = point(src.x, src.y);
        let tgt_center = point(tgt.x, tgt.y);
        let (src_outer, tgt_outer) =
            boundary_points(src_center, src.radius, tgt_center, tgt.radius, BOUNDARY_GAP);
        outers[i] = Some((src_outer, tgt_outer));

        let sig = canonical_pair(graph.group_sizes(), src_key, tgt_key);
        pair_endpoints.insert(
            sig,
            PairEndpoints {
                src: src_outer,
                tgt: tgt_outer,
            },
        );
    }

    let mut paths = Vec::with_capacity(graph.edges().len());
    for (i, edge) in graph.edges().iter().enumerate() {
        let Some((src_outer, tgt_outer)) = outers[i] else {
            continue;
        };
        let (Some(src_key), Some(tgt_key)) = (edge.source_key.as_deref(), edge.target_key.as_deref())
        else {
            continue;
        };
        // Both lookups hold whenever outers[i] was recorded.
        let (Some(src), Some(tgt)) = (graph.node_by_key(src_key), graph.node_by_key(tgt_key))
        else {
            continue;
        };
        let src_center = point(src.x, src.y);
        let tgt_center = point(tgt.x, tgt.y);

        let path = if edge.group_size == 1 {
            single_edge_path(src_outer, tgt_outer, src_center, tgt_center)
        } else {
            let sig = canonical_pair(graph.group_sizes(), src_key, tgt_key);
            let pair = pair_endpoints[&sig];
            multi_edge_path(pair, edge.link_pos, src_center, tgt_center, opts)
        };

        paths.push(EdgePathRecord {
            edge_index: i,
            key: edge.key.clone().unwrap_or_default(),
            path,
        });
    }

    tracing::trace!(paths = paths.len(), "tick geometry pass complete");
    paths
}

/// Straight-line and control-polygon paths share the renderer's `d` syntax:
/// lone edges get `M…L…`, multi-edge polygons are handed to the curve
/// interpolator as a polyline.
pub fn svg_path(path: &EdgePath) -> String {
    match path.kind {
        nodelink_geom::PathKind::Line => {
            let (a, b) = (path.start(), path.end());
            format!("M{},{}L{},{}", a.x, a.y, b.x, b.y)
        }
        nodelink_geom::PathKind::Curve => {
            let [p0, c0, c1, p1] = path.points;
            format!(
                "M{},{}L{},{}L{},{}L{},{}",
                p0.x, p0.y, c0.x, c0.y, c1.x, c1.y, p1.x, p1.y
            )
        }
    }
}

/// Seeding hints for the layout engine: one record per node, charge from the
/// widget tuning, radius from the area-preserving size scale.
pub fn layout_hints(graph: &GraphData, charge: f64) -> Vec<LayoutHint> {
    graph
        .nodes()
        .iter()
        .map(|n| LayoutHint {
            key: n.key.clone(),
            radius: n.radius,
            charge,
        })
        .collect()
}
