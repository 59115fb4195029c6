//! Stream edge synthesis.

use bc_core::{Name, NodeId};

use crate::graph::Edge;

/// Consecutive-node edges for one stream.
///
/// `ordered` must already be in [`NodeOrder`](crate::order::NodeOrder) order.
/// N nodes give exactly `max(N - 1, 0)` edges, `ordered[i] -> ordered[i + 1]`.
pub fn synthesize_stream_edges(stream: &Name, ordered: &[NodeId]) -> Vec<Edge> {
    ordered
        .windows(2)
        .map(|pair| Edge::stream(stream.clone(), pair[0], pair[1]))
        .collect()
}

/// A stream's ordered nodes plus every stream edge it owns.
///
/// Besides the consecutive-node edges, a stream owns the edge that brings
/// flow in from the stream it diverts from, and the edge that carries its
/// last node into the confluence on its receiving stream.
#[derive(Debug, Clone)]
pub struct StreamChain {
    pub stream: Name,
    pub starts_downstream: bool,
    /// The stream's own nodes, in order.
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
}

impl StreamChain {
    pub fn synthesize(
        stream: Name,
        starts_downstream: bool,
        nodes: Vec<NodeId>,
        diversion: Option<NodeId>,
        confluence: Option<NodeId>,
    ) -> Self {
        let mut edges = Vec::with_capacity(nodes.len() + 1);

        if let Some(source) = diversion {
            // A stream with no nodes of its own runs straight to its confluence.
            if let Some(target) = nodes.first().copied().or(confluence) {
                edges.push(Edge::stream(stream.clone(), source, target));
            }
        }

        edges.extend(synthesize_stream_edges(&stream, &nodes));

        if let (Some(&last), Some(target)) = (nodes.last(), confluence) {
            edges.push(Edge::stream(stream.clone(), last, target));
        }

        Self {
            stream,
            starts_downstream,
            nodes,
            edges,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::node::{Bank, Node};
    use crate::order::NodeOrder;
    use bc_core::Station;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn edge_count_and_adjacency(
            stations in prop::collection::hash_set(-5_000_i32..5_000, 0..50),
            starts_downstream in any::<bool>(),
        ) {
            let order = NodeOrder::new(starts_downstream);
            let mut nodes: Vec<Node> = stations
                .iter()
                .map(|&s| {
                    let station = Station::new(f64::from(s)).unwrap();
                    Node::location(format!("L{s}"), "SAC", station, Bank::Left)
                })
                .collect();
            order.sort(&mut nodes);

            let mut builder = GraphBuilder::new();
            let ordered: Vec<NodeId> = nodes.iter().cloned().map(|n| builder.add_node(n)).collect();
            let edges = synthesize_stream_edges(&Name::new("SAC"), &ordered);

            prop_assert_eq!(edges.len(), ordered.len().saturating_sub(1));
            for (i, edge) in edges.iter().enumerate() {
                prop_assert_eq!(edge.source, ordered[i]);
                prop_assert_eq!(edge.target, ordered[i + 1]);
                prop_assert_ne!(edge.source, edge.target);
            }
        }
    }
}
