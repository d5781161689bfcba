#![forbid(unsafe_code)]

//! Per-tick geometry for node-link edge rendering.
//!
//! Everything here is pure math over positions the external layout engine
//! produced: projecting edge endpoints onto node boundaries, fanning parallel
//! edges apart with symmetric control points, and the small label-offset
//! helpers. The curve interpolation itself (and all SVG/DOM work) happens in
//! the rendering layer; this crate only hands it an ordered control polygon.

pub mod label;
pub mod path;

pub use path::{EdgePath, GeomOptions, PairEndpoints, PathKind};

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Fraction of the endpoint distance at which the two control points sit.
pub const CONTROL_POINT_POS: f64 = 0.25;
/// Gap between a node's shape boundary and where its edges visually attach.
pub const BOUNDARY_GAP: f64 = 5.0;

/// Angle of the ray `from -> to`, with the degenerate zero-distance case
/// pinned to 0 rather than left to `atan2(0, 0)`.
pub fn ray_angle(from: Point, to: Point) -> f64 {
    let d = to - from;
    if d.x == 0.0 && d.y == 0.0 {
        0.0
    } else {
        d.y.atan2(d.x)
    }
}

/// Rotates `p` around `center` by `angle` radians.
pub fn rotate(center: Point, p: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let d = p - center;
    point(
        cos * d.x - sin * d.y + center.x,
        sin * d.x + cos * d.y + center.y,
    )
}

/// Point on the outer circle of radius `radius + gap` around `center`, on the
/// ray toward `toward`. Recomputed every tick since node positions move.
pub fn outer_point(center: Point, radius: f64, toward: Point, gap: f64) -> Point {
    let angle = ray_angle(center, toward);
    let r = radius + gap;
    point(center.x + angle.cos() * r, center.y + angle.sin() * r)
}

/// Both boundary attachment points of an edge in one call, sharing the
/// source->target angle so a perfectly horizontal or vertical pair yields
/// exact coordinates on both ends.
pub fn boundary_points(
    src_center: Point,
    src_radius: f64,
    tgt_center: Point,
    tgt_radius: f64,
    gap: f64,
) -> (Point, Point) {
    let angle = ray_angle(src_center, tgt_center);
    let (sin, cos) = angle.sin_cos();
    let src_r = src_radius + gap;
    let tgt_r = tgt_radius + gap;
    (
        point(src_center.x + cos * src_r, src_center.y + sin * src_r),
        point(tgt_center.x - cos * tgt_r, tgt_center.y - sin * tgt_r),
    )
}

/// Point dividing the segment `src -> tgt` at `ratio`; `None` outside [0, 1].
pub fn point_at_ratio(src: Point, tgt: Point, ratio: f64) -> Option<Point> {
    if !(0.0..=1.0).contains(&ratio) {
        return None;
    }
    Some(src + (tgt - src) * ratio)
}
