use nodelink::geom::{GeomOptions, PathKind};
use nodelink::ingest::graph_from_values;
use nodelink::{edge_paths, expand_order, layout_hints, svg_path};
use serde_json::json;

fn sized(size: f64) -> serde_json::Value {
    json!({"size": size})
}

/// Style size mapping to radius 10: radius = sqrt(pi * s^2 / 2) = 10
/// has no integer style.size, so tests that need exact radii set positions
/// far enough apart and read the radius back instead.
fn two_node_graph() -> nodelink::GraphData {
    graph_from_values(
        &json!([
            {"id": "a", "type": "user", "style": sized(50.0)},
            {"id": "b", "type": "user", "style": sized(50.0)},
        ]),
        &json!([
            {"source": {"id": "a", "type": "user"}, "target": {"id": "b", "type": "user"}, "etype": "follows", "directed": true},
        ]),
    )
    .unwrap()
}

#[test]
fn lone_edge_renders_as_a_straight_svg_line() {
    let mut g = two_node_graph();
    let r = g.nodes()[0].radius;
    let a = g.node_key_of("a", "user").unwrap();
    let b = g.node_key_of("b", "user").unwrap();
    g.set_position(&a, 0.0, 0.0);
    g.set_position(&b, 200.0, 0.0);

    let paths = edge_paths(&g, &GeomOptions::default());
    assert_eq!(paths.len(), 1);
    let path = &paths[0].path;
    assert_eq!(path.kind, PathKind::Line);
    assert!(path.src_to_tgt_ascending);

    let start_x = r + 5.0;
    let end_x = 200.0 - (r + 5.0);
    assert!((path.start().x - start_x).abs() < 1e-9);
    assert!((path.end().x - end_x).abs() < 1e-9);
    assert_eq!(
        svg_path(path),
        format!("M{},{}L{},{}", start_x, 0.0, end_x, 0.0)
    );
}

#[test]
fn straight_line_path_matches_the_fifteen_eighty_five_scenario() {
    // Nodes at (0,0) and (100,0) with radius 10 and gap 5 attach at
    // (15,0) and (85,0): "M15,0L85,0".
    let mut g = two_node_graph();
    let a = g.node_key_of("a", "user").unwrap();
    let b = g.node_key_of("b", "user").unwrap();
    g.set_position(&a, 0.0, 0.0);
    g.set_position(&b, 100.0, 0.0);
    for node in g.nodes_mut() {
        node.radius = 10.0;
    }

    let paths = edge_paths(&g, &GeomOptions::default());
    assert_eq!(svg_path(&paths[0].path), "M15,0L85,0");
}

#[test]
fn parallel_edges_share_pair_endpoints_before_the_nudge() {
    let mut g = graph_from_values(
        &json!([
            {"id": "a", "type": "user"},
            {"id": "b", "type": "user"},
        ]),
        &json!([
            {"source": {"id": "a", "type": "user"}, "target": {"id": "b", "type": "user"}, "etype": "e0"},
            {"source": {"id": "b", "type": "user"}, "target": {"id": "a", "type": "user"}, "etype": "e1"},
            {"source": {"id": "a", "type": "user"}, "target": {"id": "b", "type": "user"}, "etype": "e2"},
        ]),
    )
    .unwrap();
    let a = g.node_key_of("a", "user").unwrap();
    let b = g.node_key_of("b", "user").unwrap();
    g.set_position(&a, 0.0, 0.0);
    g.set_position(&b, 300.0, 0.0);

    let opts = GeomOptions::default();
    let paths = edge_paths(&g, &opts);
    assert_eq!(paths.len(), 3);
    for rec in &paths {
        assert_eq!(rec.path.kind, PathKind::Curve);
        // Every member starts within converging_offset of a shared boundary
        // point on the pair axis (y == 0 here), never further.
        let start = rec.path.start();
        let end = rec.path.end();
        for p in [start, end] {
            assert!(
                p.y.abs() <= opts.converging_offset + 1e-9,
                "endpoint {p:?} strayed from the pair axis"
            );
        }
    }

    // Ranks 0/1/-1 bow to opposite sides: one straight, two mirrored.
    let mut c0_ys: Vec<f64> = paths.iter().map(|r| r.path.c0().y).collect();
    c0_ys.sort_by(|x, y| x.partial_cmp(y).unwrap());
    assert!((c0_ys[0] + opts.tension_distance).abs() < 1e-9);
    assert!(c0_ys[1].abs() < 1e-9);
    assert!((c0_ys[2] - opts.tension_distance).abs() < 1e-9);
}

#[test]
fn unresolved_edges_produce_no_path() {
    let g = graph_from_values(
        &json!([{"id": "a", "type": "user"}]),
        &json!([
            {"source": {"id": "a", "type": "user"}, "target": {"id": "ghost", "type": "user"}, "etype": "e"},
        ]),
    )
    .unwrap();
    assert!(edge_paths(&g, &GeomOptions::default()).is_empty());
}

#[test]
fn layout_hints_carry_radius_and_charge() {
    let g = two_node_graph();
    let hints = layout_hints(&g, -240.0);
    assert_eq!(hints.len(), 2);
    for (hint, node) in hints.iter().zip(g.nodes()) {
        assert_eq!(hint.key, node.key);
        assert_eq!(hint.radius, node.radius);
        assert_eq!(hint.charge, -240.0);
    }
}

#[test]
fn expand_order_walks_the_neighborhood_breadth_first() {
    let g = graph_from_values(
        &json!([
            {"id": "root", "type": "t"},
            {"id": "n1", "type": "t"},
            {"id": "n2", "type": "t"},
            {"id": "far", "type": "t"},
        ]),
        &json!([
            {"source": {"id": "root", "type": "t"}, "target": {"id": "n1", "type": "t"}, "etype": "e"},
            {"source": {"id": "n2", "type": "t"}, "target": {"id": "root", "type": "t"}, "etype": "e"},
            {"source": {"id": "n1", "type": "t"}, "target": {"id": "far", "type": "t"}, "etype": "e"},
        ]),
    )
    .unwrap();

    let root_key = g.node_key_of("root", "t").unwrap();
    assert_eq!(expand_order(&g, "root", "t", 0), vec![root_key.clone()]);

    let one_hop = expand_order(&g, "root", "t", 1);
    assert_eq!(one_hop.len(), 3);
    assert_eq!(one_hop[0], root_key);

    let two_hops = expand_order(&g, "root", "t", 2);
    assert_eq!(two_hops.len(), 4);

    assert!(expand_order(&g, "missing", "t", 2).is_empty());
}
