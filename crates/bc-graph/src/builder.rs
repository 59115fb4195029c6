//! Incremental graph builder.

use std::collections::HashMap;

use bc_core::{EdgeId, NodeId};

use crate::error::GraphResult;
use crate::graph::{Edge, Graph};
use crate::node::{Node, NodeKey};
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Nodes are interned by identity: adding a node that equals one already in
/// the builder returns the existing ID, so a junction shared by two streams
/// ends up as a single vertex. Call `build()` to validate and freeze it into
/// an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    lookup: HashMap<NodeKey, NodeId>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node (or find its existing twin) and return its ID.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        if let Some(&id) = self.lookup.get(node.key()) {
            return id;
        }
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.lookup.insert(node.key().clone(), id);
        self.nodes.push(node);
        id
    }

    /// ID of a node already in the builder.
    pub fn node_id(&self, node: &Node) -> Option<NodeId> {
        self.lookup.get(node.key()).copied()
    }

    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(edge);
        id
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge>) {
        self.edges.extend(edges);
    }

    /// Nodes added so far, indexed by `NodeId`.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    pub fn build(self) -> GraphResult<Graph> {
        validate::validate_edges(&self.nodes, &self.edges)?;

        let (node_edge_offsets, node_edges) = Self::build_adjacency(&self.nodes, &self.edges);

        validate::validate_adjacency(&self.nodes, &self.edges, &node_edge_offsets, &node_edges)?;

        Ok(Graph {
            nodes: self.nodes,
            edges: self.edges,
            node_edge_offsets,
            node_edges,
        })
    }

    /// Build compact adjacency lists: for each node, collect its outgoing edges.
    fn build_adjacency(nodes: &[Node], edges: &[Edge]) -> (Vec<usize>, Vec<EdgeId>) {
        let mut per_node: Vec<Vec<EdgeId>> = vec![Vec::new(); nodes.len()];
        for (i, edge) in edges.iter().enumerate() {
            per_node[edge.source.index() as usize].push(EdgeId::from_index(i as u32));
        }

        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut flat = Vec::with_capacity(edges.len());
        offsets.push(0);
        for list in per_node {
            flat.extend(list);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
