//! Graph validation logic.

use std::collections::HashSet;

use bc_core::{BcError, EdgeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::Edge;
use crate::node::Node;

/// Every edge must join two distinct, existing nodes.
pub(crate) fn validate_edges(nodes: &[Node], edges: &[Edge]) -> GraphResult<()> {
    for edge in edges {
        for node in [edge.source, edge.target] {
            if node.index() as usize >= nodes.len() {
                return Err(GraphError::DanglingEdge {
                    edge: edge.id().to_string(),
                    node,
                });
            }
        }
        if edge.source == edge.target {
            return Err(GraphError::SelfLoop {
                edge: edge.id().to_string(),
                node: nodes[edge.source.index() as usize].id().to_string(),
            });
        }
    }
    Ok(())
}

/// Validate adjacency lists for consistency.
pub(crate) fn validate_adjacency(
    nodes: &[Node],
    edges: &[Edge],
    node_edge_offsets: &[usize],
    node_edges: &[EdgeId],
) -> GraphResult<()> {
    if node_edge_offsets.len() != nodes.len() + 1 {
        return Err(invariant("adjacency offsets do not cover every node"));
    }

    for idx in 0..nodes.len() {
        let start = node_edge_offsets[idx];
        let end = node_edge_offsets[idx + 1];
        for &edge_id in &node_edges[start..end] {
            let Some(edge) = edges.get(edge_id.index() as usize) else {
                return Err(invariant("adjacency lists an unknown edge"));
            };
            if edge.source.index() as usize != idx {
                return Err(invariant("adjacency lists an edge under the wrong source"));
            }
        }
    }

    // Every edge appears exactly once
    let mut seen: HashSet<EdgeId> = HashSet::with_capacity(node_edges.len());
    for &edge_id in node_edges {
        if !seen.insert(edge_id) {
            return Err(invariant("adjacency lists an edge twice"));
        }
    }
    if seen.len() != edges.len() {
        return Err(invariant("adjacency is missing edges"));
    }

    Ok(())
}

fn invariant(what: &str) -> GraphError {
    BcError::Invariant {
        what: what.to_string(),
    }
    .into()
}
