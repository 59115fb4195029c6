//! Integration tests for bc-graph.

use bc_graph::{Bank, Graph, GraphError, NodeKind, build_basin_graph};
use bc_model::{Basin, Stream, StreamLocation, StreamReach};

/// (source id, target id, edge id) for every edge with the given label.
fn edges_labelled<'g>(graph: &'g Graph, label: &str) -> Vec<(&'g str, &'g str, &'g str)> {
    graph
        .edges()
        .iter()
        .filter(|e| e.label() == label)
        .map(|e| {
            let (source, target) = graph.endpoints(e).unwrap();
            (source.id().as_str(), target.id().as_str(), e.id().as_str())
        })
        .collect()
}

#[test]
fn sacramento_example() {
    // SAC: A(10) -> B(20) -> C(30), reach Upper = B..C
    let basin = Basin::new("Sacramento").with_primary_stream(
        Stream::new("SAC", false)
            .with_location(StreamLocation::new("C", 30.0))
            .with_location(StreamLocation::new("A", 10.0))
            .with_location(StreamLocation::new("B", 20.0))
            .with_reach(StreamReach::new("Upper", "B", "C")),
    );

    let graph = build_basin_graph(&basin).unwrap();

    assert_eq!(graph.nodes().len(), 3);
    assert_eq!(
        edges_labelled(&graph, "Stream"),
        [("A", "B", "SAC"), ("B", "C", "SAC")]
    );
    assert_eq!(edges_labelled(&graph, "Reach"), [("B", "C", "Upper")]);
}

#[test]
fn basin_without_primary_stream_is_empty() {
    let graph = build_basin_graph(&Basin::new("Nothing")).unwrap();
    assert!(graph.is_empty());
    assert!(graph.nodes().is_empty());
    assert!(graph.edges().is_empty());
}

#[test]
fn tributary_joins_at_shared_confluence_node() {
    let basin = Basin::new("Sacramento").with_primary_stream(
        Stream::new("SAC", false)
            .with_length(100.0)
            .with_location(StreamLocation::new("A", 10.0))
            .with_location(StreamLocation::new("C", 30.0))
            .with_tributary(
                Stream::new("AMERICAN", true)
                    .with_length(40.0)
                    .joins("SAC", 25.0, "R")
                    .with_location(StreamLocation::new("FOLSOM", 30.0)),
            ),
    );

    let graph = build_basin_graph(&basin).unwrap();

    // SAC: 0, A, 25 (junction), C, 100; AMERICAN: 40, FOLSOM
    assert_eq!(graph.nodes().len(), 7);
    assert_eq!(
        edges_labelled(&graph, "Stream"),
        [
            ("SAC-Node-0.0", "A", "SAC"),
            ("A", "SAC-Node-25.0", "SAC"),
            ("SAC-Node-25.0", "C", "SAC"),
            ("C", "SAC-Node-100.0", "SAC"),
            ("AMERICAN-Node-40.0", "FOLSOM", "AMERICAN"),
            ("FOLSOM", "SAC-Node-25.0", "AMERICAN"),
        ]
    );

    let junction = graph.find_node("sac-node-25.0").unwrap();
    let junction = graph.node(junction).unwrap();
    assert_eq!(junction.kind(), NodeKind::Empty);
    assert_eq!(junction.bank(), Bank::Right);
    assert_eq!(junction.stream_id().as_str(), "SAC");

    let shared = graph
        .nodes()
        .iter()
        .filter(|n| n.id().matches("SAC-Node-25.0"))
        .count();
    assert_eq!(shared, 1);
}

#[test]
fn confluence_at_named_location_reuses_it() {
    let basin = Basin::new("Feather").with_primary_stream(
        Stream::new("SAC", false)
            .with_location(StreamLocation::new("Verona", 25.0))
            .with_location(StreamLocation::new("Freeport", 60.0))
            .with_tributary(
                Stream::new("FEATHER", false)
                    .joins("sac", 25.0, "L")
                    .with_location(StreamLocation::new("Oroville", 5.0)),
            ),
    );

    let graph = build_basin_graph(&basin).unwrap();

    assert_eq!(graph.nodes().len(), 3);
    let verona = graph.node(graph.find_node("VERONA").unwrap()).unwrap();
    assert_eq!(verona.kind(), NodeKind::Confluence);
    assert_eq!(
        edges_labelled(&graph, "Stream"),
        [
            ("Verona", "Freeport", "SAC"),
            ("Oroville", "Verona", "FEATHER"),
        ]
    );
}

#[test]
fn diversion_between_tributaries() {
    let basin = Basin::new("Delta").with_primary_stream(
        Stream::new("SAC", false)
            .with_length(100.0)
            .with_location(StreamLocation::new("A", 10.0))
            .with_location(StreamLocation::new("B", 50.0))
            .with_tributary(
                Stream::new("FEATHER", false)
                    .with_length(30.0)
                    .joins("SAC", 40.0, "L")
                    .with_location(StreamLocation::new("F1", 10.0)),
            )
            .with_tributary(
                Stream::new("CUTOFF", false)
                    .with_length(20.0)
                    .diverts_from("FEATHER", 20.0, "R")
                    .joins("SAC", 45.0, "L")
                    .with_location(StreamLocation::new("X", 5.0)),
            ),
    );

    let graph = build_basin_graph(&basin).unwrap();

    // SAC: 6 nodes, FEATHER: 0, F1, 20 (diversion), CUTOFF: X only
    assert_eq!(graph.nodes().len(), 10);
    let stream_edges = edges_labelled(&graph, "Stream");
    assert_eq!(stream_edges.len(), 10);
    let into_cutoff = ("FEATHER-Node-20.0", "X", "CUTOFF");
    let feather_out = ("FEATHER-Node-20.0", "SAC-Node-40.0", "FEATHER");
    assert!(stream_edges.contains(&into_cutoff));
    assert!(stream_edges.contains(&("X", "SAC-Node-45.0", "CUTOFF")));
    assert!(stream_edges.contains(&feather_out));
    assert!(graph.find_node("CUTOFF-Node-0.0").is_none());

    let diversion = graph.find_node("FEATHER-Node-20.0").unwrap();
    assert_eq!(graph.outgoing(diversion).len(), 2);
    assert_eq!(graph.node(diversion).unwrap().bank(), Bank::Right);
}

#[test]
fn diversion_at_existing_location() {
    let basin = Basin::new("Delta").with_primary_stream(
        Stream::new("SAC", false)
            .with_length(100.0)
            .with_location(StreamLocation::new("A", 10.0))
            .with_location(StreamLocation::new("B", 50.0))
            .with_tributary(
                Stream::new("FEATHER", false)
                    .with_length(30.0)
                    .joins("SAC", 40.0, "L")
                    .with_location(StreamLocation::new("F1", 10.0)),
            )
            .with_tributary(
                Stream::new("CUTOFF", false)
                    .with_length(20.0)
                    .diverts_from("FEATHER", 10.0, "R")
                    .joins("SAC", 45.0, "L")
                    .with_location(StreamLocation::new("X", 5.0)),
            ),
    );

    let graph = build_basin_graph(&basin).unwrap();

    let f1 = graph.find_node("F1").unwrap();
    assert_eq!(graph.node(f1).unwrap().kind(), NodeKind::Diversion);
    assert_eq!(graph.outgoing(f1).len(), 2);

    let stream_edges = edges_labelled(&graph, "Stream");
    assert!(stream_edges.contains(&("F1", "CUTOFF-Node-0.0", "CUTOFF")));
    assert!(stream_edges.contains(&("CUTOFF-Node-0.0", "X", "CUTOFF")));
    assert!(stream_edges.contains(&("X", "SAC-Node-45.0", "CUTOFF")));
    assert!(!stream_edges.contains(&("F1", "X", "CUTOFF")));
}

#[test]
fn diversion_from_receiving_stream_is_not_wired() {
    let basin = Basin::new("Side").with_primary_stream(
        Stream::new("SAC", false)
            .with_location(StreamLocation::new("A", 10.0))
            .with_location(StreamLocation::new("B", 20.0))
            .with_location(StreamLocation::new("C", 30.0))
            .with_tributary(
                Stream::new("SLOUGH", false)
                    .diverts_from("SAC", 10.0, "L")
                    .joins("SAC", 30.0, "L")
                    .with_location(StreamLocation::new("S1", 2.0)),
            ),
    );

    let graph = build_basin_graph(&basin).unwrap();

    let a = graph.node(graph.find_node("A").unwrap()).unwrap();
    let c = graph.node(graph.find_node("C").unwrap()).unwrap();
    assert_eq!(a.kind(), NodeKind::StreamLocation);
    assert_eq!(c.kind(), NodeKind::Confluence);
    assert_eq!(
        edges_labelled(&graph, "Stream"),
        [("A", "B", "SAC"), ("B", "C", "SAC"), ("S1", "C", "SLOUGH")]
    );
}

#[test]
fn multi_hop_reach_on_tributary() {
    let basin = Basin::new("American").with_primary_stream(
        Stream::new("SAC", false)
            .with_location(StreamLocation::new("A", 10.0))
            .with_location(StreamLocation::new("C", 30.0))
            .with_tributary(
                Stream::new("AMERICAN", false)
                    .joins("SAC", 30.0, "L")
                    .with_location(StreamLocation::new("NIMBUS", 5.0))
                    .with_location(StreamLocation::new("WATT", 15.0))
                    .with_location(StreamLocation::new("H ST", 25.0))
                    .with_reach(StreamReach::new("Lower American", "nimbus", "h st")),
            ),
    );

    let graph = build_basin_graph(&basin).unwrap();

    let reach: Vec<_> = graph.reach_edges("LOWER AMERICAN").collect();
    assert_eq!(reach.len(), 2);
    let (first, _) = graph.endpoints(reach[0]).unwrap();
    let (_, last) = graph.endpoints(reach[1]).unwrap();
    assert_eq!(first.id().as_str(), "NIMBUS");
    assert_eq!(last.id().as_str(), "H ST");
    assert_eq!(reach[0].target, reach[1].source);
    for edge in &reach {
        assert_eq!(edge.stream_name().as_str(), "AMERICAN");
    }
}

#[test]
fn unresolvable_reach_aborts_build() {
    let basin = Basin::new("Broken").with_primary_stream(
        Stream::new("SAC", false)
            .with_location(StreamLocation::new("A", 10.0))
            .with_location(StreamLocation::new("B", 20.0))
            .with_reach(StreamReach::new("Ghost", "A", "Z")),
    );

    let err = build_basin_graph(&basin).unwrap_err();
    assert!(matches!(
        err,
        GraphError::ReachResolution { ref reach, ref endpoint, .. }
            if reach == "Ghost" && endpoint == "Z"
    ));
}

#[test]
fn duplicate_node_is_construction_error() {
    let basin = Basin::new("Dup").with_primary_stream(
        Stream::new("SAC", false)
            .with_location(StreamLocation::new("A", 10.0))
            .with_location(StreamLocation::new("A", 10.0)),
    );
    assert!(matches!(
        build_basin_graph(&basin),
        Err(GraphError::DuplicateNode { .. })
    ));
}

#[test]
fn tributary_without_confluence_stays_unconnected() {
    let basin = Basin::new("Loose").with_primary_stream(
        Stream::new("SAC", false)
            .with_location(StreamLocation::new("A", 10.0))
            .with_location(StreamLocation::new("B", 20.0))
            .with_tributary(
                Stream::new("DRY", false)
                    .with_location(StreamLocation::new("D1", 1.0))
                    .with_location(StreamLocation::new("D2", 2.0)),
            ),
    );

    let graph = build_basin_graph(&basin).unwrap();
    assert_eq!(graph.nodes().len(), 4);
    assert_eq!(
        edges_labelled(&graph, "Stream"),
        [("A", "B", "SAC"), ("D1", "D2", "DRY")]
    );
}

#[test]
fn every_edge_endpoint_is_a_node() {
    let basin = Basin::new("Sacramento").with_primary_stream(
        Stream::new("SAC", true)
            .with_length(80.0)
            .with_location(StreamLocation::new("A", 10.0))
            .with_location(StreamLocation::new("B", 60.0))
            .with_reach(StreamReach::new("Mid", "A", "B"))
            .with_tributary(
                Stream::new("T", false)
                    .with_length(5.0)
                    .joins("SAC", 30.0, "L"),
            ),
    );

    let graph = build_basin_graph(&basin).unwrap();
    for edge in graph.edges() {
        assert!(graph.endpoints(edge).is_some());
        assert_ne!(edge.source, edge.target);
    }
    // Reach on a stream that starts downstream runs from the named
    // downstream end to the named upstream end.
    let mid: Vec<_> = graph.reach_edges("Mid").collect();
    assert_eq!(mid.len(), 2);
    assert_eq!(graph.node(mid[0].source).unwrap().id().as_str(), "B");
    assert_eq!(graph.node(mid[1].target).unwrap().id().as_str(), "A");
}
