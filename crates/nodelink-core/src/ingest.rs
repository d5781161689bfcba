//! Raw JSON ingestion in the shape the hosting page supplies.
//!
//! Nodes: `{"id": ..., "type": ..., "attr": {...}, "style": {...}}`.
//! Links: `{"source": {"id", "type"}, "target": {"id", "type"}, "etype",
//! "attr", "style", "directed"}`.
//!
//! A link record that cannot name its endpoints at all is rejected
//! ([`Error::MalformedLink`]); everything else degrades per the
//! missing-endpoint policy once the graph is read.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::graph::GraphData;
use crate::model::{Edge, Node};

pub fn nodes_from_value(value: &Value) -> Result<Vec<Node>> {
    let Some(records) = value.as_array() else {
        return Err(Error::NotAnArray { expected: "node" });
    };
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record.clone())
                .map_err(|source| Error::MalformedNode { index, source })
        })
        .collect()
}

pub fn edges_from_value(value: &Value) -> Result<Vec<Edge>> {
    let Some(records) = value.as_array() else {
        return Err(Error::NotAnArray { expected: "link" });
    };
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record.clone())
                .map_err(|source| Error::MalformedLink { index, source })
        })
        .collect()
}

/// Builds a fully read graph from raw node/link arrays.
pub fn graph_from_values(nodes: &Value, links: &Value) -> Result<GraphData> {
    Ok(GraphData::new(
        nodes_from_value(nodes)?,
        edges_from_value(links)?,
    ))
}
