//! PG-JSON -> Graph.

use std::collections::HashMap;

use bc_core::{Name, NodeId, Station};
use bc_graph::{Bank, Edge, Graph, GraphBuilder, Node, NodeKind};

use crate::document::{PgEdge, PgGraph, PgNode};
use crate::encode::{BANK, REACH_NAME, STATION, STREAM_ID, STREAM_NAME};
use crate::error::{FormatError, FormatResult};

/// Rebuild a graph from a PG-JSON document.
///
/// Node ids are matched exactly as written; the first node with a given id
/// is the one edges refer to.
pub fn decode(document: &PgGraph) -> FormatResult<Graph> {
    let mut builder = GraphBuilder::new();
    let mut ids: HashMap<&str, NodeId> = HashMap::with_capacity(document.nodes.len());

    for pg in &document.nodes {
        let node = decode_node(pg)?;
        let id = builder.add_node(node);
        ids.entry(pg.id.as_str()).or_insert(id);
    }

    for pg in &document.edges {
        let lookup = |name: &str| {
            ids.get(name).copied().ok_or_else(|| FormatError::DanglingEdge {
                from: pg.from.clone(),
                to: pg.to.clone(),
                missing: name.to_string(),
            })
        };
        let source = lookup(&pg.from)?;
        let target = lookup(&pg.to)?;
        builder.add_edge(decode_edge(pg, source, target)?);
    }

    let graph = builder.build()?;
    tracing::debug!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "decoded PG-JSON graph"
    );
    Ok(graph)
}

fn decode_node(pg: &PgNode) -> FormatResult<Node> {
    let label = single_label(&pg.labels);
    let kind = NodeKind::from_label(label).ok_or_else(|| FormatError::UnsupportedElement {
        element: "node",
        label: label.to_string(),
    })?;

    let stream_id = pg
        .properties
        .first_str(STREAM_ID)
        .ok_or_else(|| missing("node", &pg.id, STREAM_ID))?;
    let station = pg
        .properties
        .first_f64(STATION)
        .ok_or_else(|| missing("node", &pg.id, STATION))?;
    let station = Station::new(station)?;
    let bank = Bank::parse(pg.properties.first_str(BANK));

    Ok(Node::new(kind, pg.id.as_str(), stream_id, station, bank))
}

fn decode_edge(pg: &PgEdge, source: NodeId, target: NodeId) -> FormatResult<Edge> {
    let label = single_label(&pg.labels);
    let id = format!("{} -> {}", pg.from, pg.to);
    let stream = pg
        .properties
        .first_str(STREAM_NAME)
        .map(Name::new)
        .ok_or_else(|| missing("edge", &id, STREAM_NAME))?;

    match label {
        Edge::STREAM_LABEL => Ok(Edge::stream(stream, source, target)),
        Edge::REACH_LABEL => {
            let reach = pg
                .properties
                .first_str(REACH_NAME)
                .ok_or_else(|| missing("edge", &id, REACH_NAME))?;
            Ok(Edge::reach(Name::new(reach), stream, source, target))
        }
        other => Err(FormatError::UnsupportedElement {
            element: "edge",
            label: other.to_string(),
        }),
    }
}

/// Elements carry exactly one label; a missing one reads as empty.
fn single_label(labels: &[String]) -> &str {
    labels.first().map(String::as_str).unwrap_or_default()
}

fn missing(element: &'static str, id: &str, key: &'static str) -> FormatError {
    FormatError::MissingProperty {
        element,
        id: id.to_string(),
        key,
    }
}
