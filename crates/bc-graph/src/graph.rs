//! Core graph data structures.

use bc_core::{EdgeId, Name, NodeId};

use crate::node::Node;

/// What an edge stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Two consecutive points on one stream.
    Stream { stream: Name },
    /// One hop of a named reach; a reach spanning k stream edges is k of these.
    Reach { stream: Name, reach: Name },
}

/// A directed edge between two nodes of the same graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub kind: EdgeKind,
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub const STREAM_LABEL: &'static str = "Stream";
    pub const REACH_LABEL: &'static str = "Reach";

    pub fn stream(stream: Name, source: NodeId, target: NodeId) -> Self {
        Self {
            kind: EdgeKind::Stream { stream },
            source,
            target,
        }
    }

    pub fn reach(reach: Name, stream: Name, source: NodeId, target: NodeId) -> Self {
        Self {
            kind: EdgeKind::Reach { stream, reach },
            source,
            target,
        }
    }

    /// Stream name for stream edges, reach name for reach edges.
    pub fn id(&self) -> &Name {
        match &self.kind {
            EdgeKind::Stream { stream } => stream,
            EdgeKind::Reach { reach, .. } => reach,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            EdgeKind::Stream { .. } => Self::STREAM_LABEL,
            EdgeKind::Reach { .. } => Self::REACH_LABEL,
        }
    }

    pub fn stream_name(&self) -> &Name {
        match &self.kind {
            EdgeKind::Stream { stream } | EdgeKind::Reach { stream, .. } => stream,
        }
    }

    pub fn is_reach(&self) -> bool {
        matches!(self.kind, EdgeKind::Reach { .. })
    }
}

/// The basin graph: an immutable collection of nodes and edges.
///
/// The graph stores:
/// - All nodes and edges in vectors (indexed by their IDs).
/// - Compact adjacency: for each node, which edges leave it.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,

    /// Offsets for node->edge adjacency: node i's outgoing edges are in
    /// node_edges[node_edge_offsets[i]..node_edge_offsets[i+1]].
    pub(crate) node_edge_offsets: Vec<usize>,

    /// Flat list of outgoing edge IDs, grouped by source node.
    pub(crate) node_edges: Vec<EdgeId>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::empty()
    }
}

impl Graph {
    /// A graph with no nodes and no edges.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            node_edge_offsets: vec![0],
            node_edges: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index() as usize)
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index() as usize)
    }

    /// Edges leaving a given node.
    pub fn outgoing(&self, node_id: NodeId) -> &[EdgeId] {
        let idx = node_id.index() as usize;
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.node_edge_offsets[idx];
        let end = self.node_edge_offsets[idx + 1];
        &self.node_edges[start..end]
    }

    /// First node whose id matches `name` case-insensitively.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id().matches(name))
            .map(|i| NodeId::from_index(i as u32))
    }

    pub fn stream_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| !e.is_reach())
    }

    /// Reach edges belonging to the named reach, in chain order.
    pub fn reach_edges<'g>(&'g self, reach: &'g str) -> impl Iterator<Item = &'g Edge> + 'g {
        self.edges
            .iter()
            .filter(move |e| e.is_reach() && e.id().matches(reach))
    }

    /// Source and target node of an edge.
    pub fn endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
        Some((self.node(edge.source)?, self.node(edge.target)?))
    }
}
