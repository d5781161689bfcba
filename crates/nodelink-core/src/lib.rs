#![forbid(unsafe_code)]

//! Headless core of an interactive node-link graph widget.
//!
//! This crate owns everything about the graph that is *data*, not pixels:
//! - stable composite keys for nodes and typed edges ([`keys`])
//! - parallel-edge detection and signed rank assignment ([`group`])
//! - O(1) connectivity queries over adjacency indexes ([`connectivity`])
//! - the mutable graph state with its mutation/query/snapshot API ([`graph`])
//!
//! Force simulation, DOM/SVG rendering, zoom/pan and brushing stay outside:
//! the hosting layer writes per-node positions between ticks and reads the
//! derived per-edge group assignments back out for path generation.

pub mod connectivity;
pub mod error;
pub mod graph;
pub mod group;
pub mod ingest;
pub mod keys;
pub mod model;

pub use connectivity::ConnectivityIndex;
pub use error::{Error, Result};
pub use graph::{EdgeSpec, GraphData, Snapshot, SnapshotStatus};
pub use group::positions;
pub use keys::KeyRegistry;
pub use model::{Edge, EdgeStyle, LabelStyle, Node, NodeRef, NodeStyle};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
