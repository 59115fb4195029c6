//! Reach stitching: a named sub-range of a stream as a chain of edges.

use bc_core::{Name, NodeId};
use bc_model::StreamReach;

use crate::error::{GraphError, GraphResult};
use crate::graph::Edge;
use crate::indexing::SourceIndex;
use crate::node::Node;
use crate::synth::StreamChain;

/// Resolve `reach` against its owning stream's chain.
///
/// `nodes` is the node table the chain's IDs index into. Returns one reach
/// edge per stream edge between the two endpoints, in traversal order. The
/// walk is bounded by the chain's edge count, so malformed input ends in a
/// [`GraphError::ReachResolution`] rather than a loop.
pub fn stitch_reach(
    reach: &StreamReach,
    chain: &StreamChain,
    nodes: &[Node],
) -> GraphResult<Vec<Edge>> {
    let reach_name = Name::new(&reach.name);
    let upstream = resolve_endpoint(reach, &reach.upstream_location_name, chain, nodes)?;
    let downstream = resolve_endpoint(reach, &reach.downstream_location_name, chain, nodes)?;

    // Chain edges run in station order, which is against the named
    // upstream->downstream direction when the stream starts downstream.
    let ((first, _), (last, last_name)) = if chain.starts_downstream {
        (downstream, upstream)
    } else {
        (upstream, downstream)
    };

    if first == last {
        return Err(GraphError::ReachResolution {
            reach: reach.name.clone(),
            endpoint: last_name.to_string(),
            reason: "reach starts and ends at the same node",
        });
    }

    let index = SourceIndex::from_edges(&chain.edges);
    let mut stitched = Vec::new();
    let mut current = first;

    for _ in 0..chain.edges.len() {
        let Some(edge) = index.edge_from(current).map(|i| &chain.edges[i]) else {
            break;
        };
        stitched.push(Edge::reach(
            reach_name.clone(),
            chain.stream.clone(),
            edge.source,
            edge.target,
        ));
        if edge.target == last {
            tracing::trace!(reach = %reach_name, hops = stitched.len(), "stitched reach");
            return Ok(stitched);
        }
        current = edge.target;
    }

    Err(GraphError::ReachResolution {
        reach: reach.name.clone(),
        endpoint: last_name.to_string(),
        reason: "stream edges do not lead to this endpoint",
    })
}

/// Find a reach endpoint among the stream's own nodes.
fn resolve_endpoint<'r>(
    reach: &StreamReach,
    name: &'r str,
    chain: &StreamChain,
    nodes: &[Node],
) -> GraphResult<(NodeId, &'r str)> {
    chain
        .nodes
        .iter()
        .copied()
        .find(|id| {
            nodes
                .get(id.index() as usize)
                .is_some_and(|node| node.id().matches(name))
        })
        .map(|id| (id, name))
        .ok_or_else(|| GraphError::ReachResolution {
            reach: reach.name.clone(),
            endpoint: name.to_string(),
            reason: "no such location on the reach's stream",
        })
}
