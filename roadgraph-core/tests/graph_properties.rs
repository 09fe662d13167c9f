use geo::{MultiLineString, line_string};
use roadgraph_core::prelude::*;

fn build(records: &[GeometryRecord]) -> RoadGraph {
    build_graph(records, GraphBuilderConfig::default()).0
}

fn edge_weights(graph: &RoadGraph, from: NodeId, to: NodeId) -> Vec<Weight> {
    graph
        .edges(from)
        .iter()
        .filter(|edge| edge.target == to)
        .map(|edge| edge.weight)
        .collect()
}

/// A small grid-like street network with a mix of attributes
fn town() -> Vec<GeometryRecord> {
    vec![
        GeometryRecord::new(line_string![
            (x: 106.900, y: 47.900),
            (x: 106.901, y: 47.900),
            (x: 106.902, y: 47.900),
        ]),
        GeometryRecord::new(line_string![
            (x: 106.902, y: 47.900),
            (x: 106.902, y: 47.901),
        ])
        .with_oneway("yes"),
        GeometryRecord::new(MultiLineString::new(vec![
            line_string![(x: 106.900, y: 47.900), (x: 106.900, y: 47.901)],
            line_string![(x: 106.900, y: 47.901), (x: 106.901, y: 47.901), (x: 106.902, y: 47.901)],
        ]))
        .with_oneway("-1"),
        GeometryRecord::new(line_string![
            (x: 106.901, y: 47.900),
            (x: 106.901, y: 47.901),
        ])
        .with_functional_class("footway"),
        GeometryRecord::new(line_string![
            (x: 106.901, y: 47.899),
            (x: 106.901, y: 47.900),
        ])
        .with_access("private"),
    ]
}

#[test]
fn test_referential_integrity() {
    let graph = build(&town());
    assert!(graph.node_count() > 0);
    for (node, _) in graph.nodes() {
        for edge in graph.edges(node) {
            assert!(graph.contains(edge.target));
            assert!(graph.coordinate(edge.target).is_some());
            assert!(edge.weight >= 0.0);
        }
    }
}

#[test]
fn test_shared_endpoint_is_one_node() {
    let records = vec![
        GeometryRecord::new(line_string![(x: 10.0, y: 20.0), (x: 10.5, y: 20.0)]),
        GeometryRecord::new(line_string![(x: 10.500_000_2, y: 19.999_999_9), (x: 11.0, y: 20.0)]),
    ];
    let graph = build(&records);
    assert_eq!(graph.node_count(), 3);
    // Both lines meet at node 1
    assert_eq!(edge_weights(&graph, 0, 1).len(), 1);
    assert_eq!(edge_weights(&graph, 1, 2).len(), 1);
}

#[test]
fn test_directionality() {
    let line = line_string![(x: 0.0, y: 0.0), (x: 3.0, y: 4.0)];

    let two_way = build(&[GeometryRecord::new(line.clone())]);
    assert_eq!(edge_weights(&two_way, 0, 1), vec![5.0]);
    assert_eq!(edge_weights(&two_way, 1, 0), vec![5.0]);

    let forward = build(&[GeometryRecord::new(line.clone()).with_oneway("yes")]);
    assert_eq!(edge_weights(&forward, 0, 1), vec![5.0]);
    assert!(edge_weights(&forward, 1, 0).is_empty());

    let reverse = build(&[GeometryRecord::new(line.clone()).with_oneway("-1")]);
    assert!(edge_weights(&reverse, 0, 1).is_empty());
    assert_eq!(edge_weights(&reverse, 1, 0), vec![5.0]);

    let explicit_no = build(&[GeometryRecord::new(line).with_oneway("no")]);
    assert_eq!(explicit_no.edge_count(), 2);
}

#[test]
fn test_town_searches() {
    let (graph, stats) = build_graph(town(), GraphBuilderConfig::default());
    assert_eq!(stats.skipped(), 2);
    assert_eq!(graph.node_count(), 6);

    let index = NearestNodeIndex::new(&graph);
    let start = index.nearest_node(106.9, 47.9).expect("non-empty graph");
    let goal = index.nearest_node(106.9021, 47.9011).expect("non-empty graph");
    assert_eq!(start, 0);
    assert_eq!(goal, 3);

    // The only way up is the one-way segment at the east end
    assert_eq!(bfs_shortest_hops(&graph, start, goal).unwrap(), vec![0, 1, 2, 3]);
    let shortest = dijkstra_shortest(&graph, start, goal).unwrap();
    assert_eq!(shortest.nodes, vec![0, 1, 2, 3]);

    // The reversed multi-line runs westbound back to the start
    let back = bfs_shortest_hops(&graph, goal, start).unwrap();
    assert_eq!(back, vec![3, 5, 4, 0]);
    assert!(bfs_shortest_hops(&graph, 4, 1).unwrap() == vec![4, 0, 1]);

    let all = dfs_all_paths(&graph, start, goal, &DfsLimits::default()).unwrap();
    assert_eq!(all.paths, vec![vec![0, 1, 2, 3]]);
    assert_eq!(all.stop, DfsStop::Exhausted);
}

#[test]
fn test_unreachable_results() {
    let records = vec![
        GeometryRecord::new(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)]),
        GeometryRecord::new(line_string![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0)]),
    ];
    let graph = build(&records);

    assert!(bfs_shortest_hops(&graph, 0, 3).unwrap().is_empty());
    let shortest = dijkstra_shortest(&graph, 0, 3).unwrap();
    assert!(shortest.nodes.is_empty());
    assert_eq!(shortest.weight, f64::INFINITY);
    assert!(dfs_all_paths(&graph, 0, 3, &DfsLimits::default()).unwrap().is_empty());
}

#[test]
fn test_empty_graph_has_no_nearest_node() {
    let (graph, stats) = build_graph(Vec::<GeometryRecord>::new(), GraphBuilderConfig::default());
    assert_eq!(stats.records, 0);
    assert!(NearestNodeIndex::new(&graph).nearest_node(0.0, 0.0).is_none());
    assert!(graph.nearest_node_linear(0.0, 0.0).is_none());
}

#[test]
fn test_geojson_round_trip_through_builder() {
    let text = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"fclass": "residential"},
             "geometry": {"type": "LineString", "coordinates": [[0, 0], [0, 2], [0, 4]]}},
            {"type": "Feature", "properties": {"fclass": "steps"},
             "geometry": {"type": "LineString", "coordinates": [[0, 4], [1, 4]]}},
            {"type": "Feature", "properties": {"oneway": 1},
             "geometry": {"type": "LineString", "coordinates": [[0, 4], [3, 4]]}},
            {"type": "Feature", "properties": {},
             "geometry": {"type": "Point", "coordinates": [7, 7]}}
        ]
    }"#;
    let records = records_from_geojson_str(text).unwrap();
    let (graph, stats) = build_graph(&records, GraphBuilderConfig::default());

    assert_eq!(stats.used, 2);
    assert_eq!(stats.skipped_functional_class, 1);
    assert_eq!(stats.skipped_unsupported_geometry, 1);
    assert_eq!(graph.node_count(), 4);

    let path = dijkstra_shortest(&graph, 0, 3).unwrap();
    assert_eq!(path.nodes, vec![0, 1, 2, 3]);
    assert_eq!(path.weight, 7.0);
    assert!(dijkstra_shortest(&graph, 3, 0).unwrap().nodes.is_empty());

    let feature = path_to_feature(&graph, &path.nodes, "dijkstra")
        .unwrap()
        .expect("non-empty path");
    assert_eq!(feature.property("hops"), Some(&serde_json::json!(3)));
}
