//! Breadth-limited neighborhood expansion.
//!
//! The interactive widget expands a node's neighborhood a level at a time
//! (e.g. when un-collapsing a cluster). This is the data side of that
//! gesture: node keys in BFS discovery order, the root first, deduplicated.

use nodelink_core::GraphData;

/// Keys of all nodes within `depth` hops of `(id, ntype)`, in discovery
/// order. Empty when the node is unknown. `depth == 0` yields just the root.
pub fn expand_order(graph: &GraphData, id: &str, ntype: &str, depth: usize) -> Vec<String> {
    let Some(root) = graph.node_by_ref(id, ntype) else {
        return Vec::new();
    };

    let mut order = vec![root.key.clone()];
    let mut frontier = vec![(root.id.clone(), root.ntype.clone())];

    for _ in 0..depth {
        let mut next = Vec::new();
        for (fid, ftype) in frontier {
            for neighbor in graph.associated_nodes(&fid, &ftype) {
                if order.contains(&neighbor.key) {
                    continue;
                }
                order.push(neighbor.key.clone());
                next.push((neighbor.id.clone(), neighbor.ntype.clone()));
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    order
}
