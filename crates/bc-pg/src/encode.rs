//! Graph -> PG-JSON.

use bc_graph::{Edge, EdgeKind, Graph, Node};

use crate::document::{PgEdge, PgGraph, PgNode, PgProperties};

pub const STREAM_ID: &str = "streamId";
pub const STATION: &str = "station";
pub const BANK: &str = "bank";
pub const STREAM_NAME: &str = "streamName";
pub const REACH_NAME: &str = "reachName";

/// Encode a built graph as a PG-JSON document.
///
/// Nodes and edges keep the graph's order, so edges of one stream appear
/// in station order followed by the reach edges.
pub fn encode(graph: &Graph) -> PgGraph {
    let nodes = graph.nodes().iter().map(encode_node).collect();
    let edges = graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let (source, target) = graph.endpoints(edge)?;
            Some(encode_edge(edge, source, target))
        })
        .collect();
    PgGraph { nodes, edges }
}

fn encode_node(node: &Node) -> PgNode {
    PgNode {
        id: node.id().to_string(),
        labels: vec![node.label().to_string()],
        properties: PgProperties::new()
            .with(STREAM_ID, node.stream_id().as_str())
            .with(STATION, node.station().value())
            .with(BANK, node.bank().as_str()),
    }
}

fn encode_edge(edge: &Edge, source: &Node, target: &Node) -> PgEdge {
    let properties = match &edge.kind {
        EdgeKind::Stream { stream } => PgProperties::new().with(STREAM_NAME, stream.as_str()),
        EdgeKind::Reach { stream, reach } => PgProperties::new()
            .with(STREAM_NAME, stream.as_str())
            .with(REACH_NAME, reach.as_str()),
    };
    PgEdge {
        from: source.id().to_string(),
        to: target.id().to_string(),
        labels: vec![edge.label().to_string()],
        undirected: false,
        properties,
    }
}
