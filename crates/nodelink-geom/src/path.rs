//! Edge path control points.
//!
//! A rendered edge is described by four ordered points: the visual start, two
//! control points, and the visual end. For a lone edge between two nodes the
//! four points are collinear and the renderer draws a straight line (the
//! control points only serve label midpoint/tangent estimation). For parallel
//! edges the control points are offset perpendicular to the pair axis by
//! `link_pos * tension_distance`, and the start/end are nudged off the shared
//! boundary points so the group does not converge into a single pixel at the
//! node edge.
//!
//! The four points are always ordered by ascending endpoint x so edge labels
//! read left to right; arrowhead placement uses the separate
//! `src_to_tgt_ascending` flag instead of point order.

use serde::{Deserialize, Serialize};

use crate::{CONTROL_POINT_POS, Point, point, ray_angle, rotate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeomOptions {
    /// Perpendicular offset per rank step between parallel edges.
    pub tension_distance: f64,
    /// How far the start/end points are pushed off the shared boundary point,
    /// toward the respective control point.
    pub converging_offset: f64,
    /// Center-to-center distance below which an edge is not worth drawing.
    pub line_disappear_distance: f64,
}

impl Default for GeomOptions {
    fn default() -> Self {
        Self {
            tension_distance: 25.0,
            converging_offset: 5.0,
            line_disappear_distance: 72.0,
        }
    }
}

/// Shared endpoint record for all parallel edges of one node pair, captured
/// once per tick so every member of the group emanates from the same boundary
/// points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairEndpoints {
    pub src: Point,
    pub tgt: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Straight segment; control points are estimation-only.
    Line,
    /// Curved multi-edge path through the control polygon.
    Curve,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePath {
    /// `[start, c0, c1, end]`, endpoints ordered by ascending x.
    pub points: [Point; 4],
    pub kind: PathKind,
    /// Whether the logical source node center lies left of the target's;
    /// decides which end carries the arrowhead on directed edges.
    pub src_to_tgt_ascending: bool,
}

impl EdgePath {
    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn c0(&self) -> Point {
        self.points[1]
    }

    pub fn c1(&self) -> Point {
        self.points[2]
    }

    pub fn end(&self) -> Point {
        self.points[3]
    }
}

/// Path for the `group_size == 1` case: a straight line between the two
/// boundary points, drawn left to right.
pub fn single_edge_path(
    src_outer: Point,
    tgt_outer: Point,
    src_center: Point,
    tgt_center: Point,
) -> EdgePath {
    let ascending = src_center.x <= tgt_center.x;

    let (a, b) = if src_outer.x > tgt_outer.x {
        (tgt_outer, src_outer)
    } else {
        (src_outer, tgt_outer)
    };

    let dr = (b - a).length();
    let c0 = point(a.x + CONTROL_POINT_POS * dr, a.y);
    let c1 = point(b.x - CONTROL_POINT_POS * dr, b.y);

    EdgePath {
        points: [a, c0, c1, b],
        kind: PathKind::Line,
        src_to_tgt_ascending: ascending,
    }
}

/// Path for the `group_size > 1` case.
///
/// The construction runs in a horizontal frame (source at origin, target at
/// `(distance, 0)`): both control points are placed at the
/// [`CONTROL_POINT_POS`] fractions, offset vertically by
/// `-link_pos * tension_distance`, then rotated back by the pair angle.
/// Start/end are the shared boundary points pushed `converging_offset`
/// outward along the direction of their adjacent control point.
pub fn multi_edge_path(
    pair: PairEndpoints,
    link_pos: i32,
    src_center: Point,
    tgt_center: Point,
    opts: &GeomOptions,
) -> EdgePath {
    let f = CONTROL_POINT_POS;
    let origin = pair.src;
    let dist = (pair.tgt - origin).length();
    let angle = ray_angle(origin, pair.tgt);

    // Horizontal frame: target sits at (origin.x + dist, origin.y).
    let h_tgt_x = origin.x + dist;
    let offset_y = origin.y - opts.tension_distance * f64::from(link_pos);
    let c0 = rotate(origin, point(origin.x + dist * f, offset_y), angle);
    let c1 = rotate(origin, point(h_tgt_x - dist * f, offset_y), angle);

    // Nudge the actual endpoints off the shared boundary points, toward the
    // adjacent control point, so parallel edges do not converge.
    let angle_c0 = ray_angle(pair.src, c0);
    let start = rotate(
        origin,
        point(origin.x + opts.converging_offset, origin.y),
        angle_c0,
    );
    let beyond_tgt = rotate(
        origin,
        point(h_tgt_x + opts.converging_offset, origin.y),
        angle,
    );
    let angle_c1 = ray_angle(pair.tgt, c1);
    let end = rotate(pair.tgt, beyond_tgt, angle_c1 - angle);

    let ascending = src_center.x < tgt_center.x;

    let points = if start.x < end.x {
        [start, c0, c1, end]
    } else {
        [end, c1, c0, start]
    };

    EdgePath {
        points,
        kind: PathKind::Curve,
        src_to_tgt_ascending: ascending,
    }
}

/// Whether an edge is worth drawing at the current node spacing.
pub fn edge_visible(src_center: Point, tgt_center: Point, opts: &GeomOptions) -> bool {
    (tgt_center - src_center).length() > opts.line_disappear_distance
}
