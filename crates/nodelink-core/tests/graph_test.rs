use nodelink_core::graph::{EdgeSpec, SnapshotStatus};
use nodelink_core::model::{Edge, EdgeStyle, Node, NodeRef, NodeStyle};
use nodelink_core::{GraphData, positions};
use serde_json::Map;

fn node(id: &str, ntype: &str) -> Node {
    Node::new(id, ntype, Map::new(), NodeStyle::default())
}

fn edge(src: (&str, &str), tgt: (&str, &str), etype: &str) -> Edge {
    Edge::new(
        NodeRef::new(src.0, src.1),
        NodeRef::new(tgt.0, tgt.1),
        etype,
        Map::new(),
        EdgeStyle::default(),
        false,
    )
}

fn two_node_graph(edges: Vec<Edge>) -> GraphData {
    GraphData::new(vec![node("a", "user"), node("b", "user")], edges)
}

#[test]
fn read_pass_assigns_composite_keys_in_enumeration_order() {
    let g = GraphData::new(
        vec![node("a", "user"), node("b", "user"), node("c", "tag")],
        vec![edge(("a", "user"), ("b", "user"), "follows")],
    );

    assert_eq!(g.nodes()[0].key, "0-0");
    assert_eq!(g.nodes()[1].key, "1-0");
    // id index 2, type "tag" first seen at enumeration position 2.
    assert_eq!(g.nodes()[2].key, "2-2");
    assert_eq!(g.edges()[0].key.as_deref(), Some("0-0_1-0_0"));
}

#[test]
fn keys_are_stable_across_re_reads() {
    let mut g = two_node_graph(vec![edge(("a", "user"), ("b", "user"), "e")]);
    let before: Vec<String> = g.nodes().iter().map(|n| n.key.clone()).collect();
    g.read_data();
    let after: Vec<String> = g.nodes().iter().map(|n| n.key.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn parallel_edges_get_distinct_ranks_from_positions() {
    let g = two_node_graph(vec![
        edge(("a", "user"), ("b", "user"), "e0"),
        edge(("b", "user"), ("a", "user"), "e1"),
        edge(("a", "user"), ("b", "user"), "e2"),
    ]);

    let allowed = positions(3);
    let ranks: Vec<i32> = g.edges().iter().map(|e| e.link_pos).collect();
    for (e, rank) in g.edges().iter().zip(&ranks) {
        assert_eq!(e.group_size, 3);
        assert!(allowed.contains(rank));
    }
    let mut dedup = ranks.clone();
    dedup.sort_unstable();
    dedup.dedup();
    assert_eq!(dedup.len(), 3);

    // First ingested edge takes the last slot, later edges count down.
    assert_eq!(ranks, vec![allowed[2], allowed[1], allowed[0]]);
}

#[test]
fn reversed_parallel_edges_share_the_first_seen_group() {
    let g = two_node_graph(vec![
        edge(("a", "user"), ("b", "user"), "e0"),
        edge(("b", "user"), ("a", "user"), "e1"),
    ]);
    assert_eq!(g.group_sizes().len(), 1);
    let (sig, &size) = g.group_sizes().first().unwrap();
    assert_eq!(sig, "0-0_1-0");
    assert_eq!(size, 2);
}

#[test]
fn connectivity_is_reflexive_and_symmetric() {
    let g = two_node_graph(vec![edge(("a", "user"), ("b", "user"), "e")]);
    assert!(g.is_connected("a", "user", "a", "user"));
    assert!(g.is_connected("a", "user", "b", "user"));
    assert!(g.is_connected("b", "user", "a", "user"));
    assert!(!g.is_connected("a", "user", "missing", "user"));
}

#[test]
fn directionality_is_tracked_for_incoming_and_outgoing() {
    let g = two_node_graph(vec![edge(("a", "user"), ("b", "user"), "e")]);
    assert!(g.has_outgoing_connections("a", "user"));
    assert!(!g.has_incoming_connections("a", "user"));
    assert!(g.has_incoming_connections("b", "user"));
    assert!(!g.has_outgoing_connections("b", "user"));
}

#[test]
fn edge_with_missing_endpoint_is_retained_but_not_indexed() {
    let g = GraphData::new(
        vec![node("a", "user")],
        vec![edge(("a", "user"), ("ghost", "user"), "e")],
    );

    assert_eq!(g.edges().len(), 1);
    assert!(g.edges()[0].key.is_none());
    assert_eq!(g.edges()[0].link_pos, 0);
    assert_eq!(g.edges()[0].group_size, 1);
    assert!(!g.has_outgoing_connections("a", "user"));
    // The raw record still counts as a connection of the live endpoint.
    assert!(g.has_connections("a", "user"));
}

#[test]
fn add_duplicate_node_is_a_no_op() {
    let mut g = two_node_graph(vec![]);
    let changed = g.add_node("a", "user", Map::new(), NodeStyle::default(), vec![]);
    assert!(!changed);
    assert_eq!(g.nodes().len(), 2);
}

#[test]
fn add_node_with_assoc_edges_rebuilds_groups() {
    let mut g = two_node_graph(vec![]);
    let changed = g.add_node(
        "c",
        "tag",
        Map::new(),
        NodeStyle::default(),
        vec![EdgeSpec {
            source: NodeRef::new("c", "tag"),
            target: NodeRef::new("a", "user"),
            etype: "tags".to_string(),
            attr: Map::new(),
            style: EdgeStyle::default(),
            directed: true,
        }],
    );
    assert!(changed);
    assert_eq!(g.nodes().len(), 3);
    assert_eq!(g.edges().len(), 1);
    assert!(g.is_connected("c", "tag", "a", "user"));
}

#[test]
fn remove_node_drops_incident_edges() {
    let mut g = GraphData::new(
        vec![node("a", "user"), node("b", "user"), node("c", "user")],
        vec![
            edge(("a", "user"), ("b", "user"), "e0"),
            edge(("c", "user"), ("b", "user"), "e1"),
            edge(("a", "user"), ("c", "user"), "e2"),
        ],
    );

    assert!(g.remove_node("b", "user"));
    assert_eq!(g.nodes().len(), 2);
    assert_eq!(g.edges().len(), 1);
    assert!(!g.has_connections("b", "user"));
    assert!(g.is_connected("a", "user", "c", "user"));
}

#[test]
fn add_duplicate_edge_is_a_no_op() {
    let mut g = two_node_graph(vec![edge(("a", "user"), ("b", "user"), "e")]);
    let changed = g.add_edge(
        "a",
        "user",
        "b",
        "user",
        "e",
        Map::new(),
        EdgeStyle::default(),
        false,
    );
    assert!(!changed);
    assert_eq!(g.edges().len(), 1);
}

#[test]
fn remove_edge_regroups_the_survivors() {
    let mut g = two_node_graph(vec![
        edge(("a", "user"), ("b", "user"), "e0"),
        edge(("a", "user"), ("b", "user"), "e1"),
        edge(("a", "user"), ("b", "user"), "e2"),
    ]);
    assert!(g.remove_edge("a", "user", "b", "user", "e1"));
    assert_eq!(g.edges().len(), 2);
    for e in g.edges() {
        assert_eq!(e.group_size, 2);
    }
    let ranks: Vec<i32> = g.edges().iter().map(|e| e.link_pos).collect();
    assert_eq!(ranks, vec![1, -1]);
}

#[test]
fn associated_links_and_nodes_dedup_by_key() {
    let g = GraphData::new(
        vec![node("a", "user"), node("b", "user"), node("c", "user")],
        vec![
            edge(("a", "user"), ("b", "user"), "e0"),
            edge(("b", "user"), ("a", "user"), "e1"),
            edge(("a", "user"), ("c", "user"), "e0"),
        ],
    );

    let links = g.associated_links("a", "user");
    assert_eq!(links.len(), 3);

    let neighbors = g.associated_nodes("a", "user");
    let keys: Vec<&str> = neighbors.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, vec!["1-0", "2-0"]);
}

#[test]
fn snapshot_round_trip_preserves_keys_positions_and_ranks() {
    let mut g = two_node_graph(vec![
        edge(("a", "user"), ("b", "user"), "e0"),
        edge(("a", "user"), ("b", "user"), "e1"),
    ]);
    let a_key = g.node_key_of("a", "user").unwrap();
    let b_key = g.node_key_of("b", "user").unwrap();
    g.set_position(&a_key, 10.0, 20.0);
    g.set_position(&b_key, -5.0, 7.5);

    let before: Vec<(String, f64, f64)> = g
        .nodes()
        .iter()
        .map(|n| (n.key.clone(), n.x, n.y))
        .collect();
    let edges_before: Vec<(Option<String>, i32)> = g
        .edges()
        .iter()
        .map(|e| (e.key.clone(), e.link_pos))
        .collect();

    let snap = g.snapshot(SnapshotStatus { zoom_scale: 2.0 });
    let status = g.restore(snap);

    assert_eq!(status.zoom_scale, 2.0);
    let after: Vec<(String, f64, f64)> = g
        .nodes()
        .iter()
        .map(|n| (n.key.clone(), n.x, n.y))
        .collect();
    let edges_after: Vec<(Option<String>, i32)> = g
        .edges()
        .iter()
        .map(|e| (e.key.clone(), e.link_pos))
        .collect();
    assert_eq!(before, after);
    assert_eq!(edges_before, edges_after);
}

#[test]
fn radius_extent_tracks_node_sizes() {
    let mut small = node("a", "user");
    small.style.size = 1.0;
    let mut big = node("b", "user");
    big.style.size = 100.0;
    let g = GraphData::new(vec![small, big], vec![]);

    let (lo, hi) = g.radius_extent().unwrap();
    assert!(lo < hi);
    assert_eq!(lo, g.nodes()[0].radius);
    assert_eq!(hi, g.nodes()[1].radius);
}
