#![forbid(unsafe_code)]

//! `nodelink` is the headless core of an interactive node-link graph widget.
//!
//! The hosting page supplies node/edge arrays and a force-layout engine; this
//! crate owns the data-keying, parallel-edge grouping, connectivity queries
//! and the per-tick curve geometry that the rendering layer turns into SVG.
//!
//! - graph state and mutation/query/snapshot API: re-exported from
//!   [`nodelink_core`]
//! - geometry primitives and control-point math: [`geom`]
//! - the per-tick pass tying the two together: [`tick`]

pub use nodelink_core::*;

pub mod geom {
    pub use nodelink_geom::*;
}

pub mod options;
pub mod tick;
pub mod traverse;

pub use options::{ForceOptions, WidgetOptions};
pub use tick::{EdgePathRecord, LayoutHint, edge_paths, layout_hints, svg_path};
pub use traverse::expand_order;
