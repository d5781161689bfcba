//! Parallel-edge grouping and signed rank assignment.
//!
//! All edges that connect the same unordered node pair form one group,
//! regardless of direction. The group is keyed by a canonical pair signature:
//! the `source_target` orientation of whichever edge of the pair appeared
//! first in the edge list. Each member then receives a signed position
//! (`link_pos`) from a zero-centered sequence so that curved paths fan out
//! symmetrically around the straight line.

use indexmap::IndexMap;

use crate::keys::pair_signature;
use crate::model::Edge;

/// Zero-centered offsets for `n` parallel edges.
///
/// - `n == 1` -> `[0]`
/// - `n == 2` -> `[-1, 1]`
/// - odd `n`  -> `[0, 1, -1, 2, -2, ...]`
/// - even `n` -> `[-1, 1, -2, 2, ...]`
///
/// Always `n` distinct integers symmetric around 0, containing 0 iff `n` is
/// odd.
pub fn positions(n: usize) -> Vec<i32> {
    match n {
        0 => Vec::new(),
        1 => vec![0],
        2 => vec![-1, 1],
        n if n % 2 == 1 => {
            let mut out = vec![0];
            for j in 1..=(n as i32) / 2 {
                out.push(j);
                out.push(-j);
            }
            out
        }
        n => {
            let mut out = vec![-1, 1];
            for i in 1..(n as i32) / 2 {
                out.push(-(i + 1));
                out.push(i + 1);
            }
            out
        }
    }
}

/// Canonical signature of an edge's unordered node pair: `src_tgt` unless the
/// reversed orientation is already a group key (first-seen orientation wins).
pub fn canonical_pair<V>(
    groups: &IndexMap<String, V>,
    source_key: &str,
    target_key: &str,
) -> String {
    let src_tgt = pair_signature(source_key, target_key);
    if groups.contains_key(&src_tgt) {
        return src_tgt;
    }
    let tgt_src = pair_signature(target_key, source_key);
    if groups.contains_key(&tgt_src) {
        tgt_src
    } else {
        src_tgt
    }
}

/// Per-pair group sizes, keyed by canonical pair signature in first-seen
/// order.
pub type GroupSizes = IndexMap<String, usize>;

/// Computes group sizes and writes `(link_pos, group_size)` onto every
/// resolved edge. Unresolved edges (missing endpoints) keep the neutral
/// `(0, 1)` assignment.
///
/// Rank order within a group follows edge-list order: the first edge of a
/// pair takes the last slot of `positions(group_size)` and later edges count
/// down towards slot 0.
pub fn assign_groups(edges: &mut [Edge]) -> GroupSizes {
    let mut sizes: GroupSizes = IndexMap::new();
    for edge in edges.iter() {
        let (Some(src), Some(tgt)) = (edge.source_key.as_deref(), edge.target_key.as_deref())
        else {
            continue;
        };
        let sig = canonical_pair(&sizes, src, tgt);
        *sizes.entry(sig).or_insert(0) += 1;
    }

    let mut remaining = sizes.clone();
    for edge in edges.iter_mut() {
        let (Some(src), Some(tgt)) = (edge.source_key.as_deref(), edge.target_key.as_deref())
        else {
            edge.link_pos = 0;
            edge.group_size = 1;
            continue;
        };
        let sig = canonical_pair(&sizes, src, tgt);
        let total = sizes[&sig];
        let slot = remaining
            .get_mut(&sig)
            .map(|left| {
                *left -= 1;
                *left
            })
            .unwrap_or(0);
        edge.group_size = total;
        edge.link_pos = positions(total)[slot];
    }

    sizes
}
