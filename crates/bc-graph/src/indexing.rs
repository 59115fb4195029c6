//! Lookup of a stream's edges by source node.

use std::collections::HashMap;

use bc_core::NodeId;

use crate::graph::Edge;

/// Maps each source node to the position of the first edge leaving it.
///
/// Within one stream chain every node has at most one outgoing edge, so this
/// is the "next hop" table the reach stitcher walks.
#[derive(Debug, Clone, Default)]
pub struct SourceIndex {
    by_source: HashMap<NodeId, usize>,
}

impl SourceIndex {
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut by_source = HashMap::with_capacity(edges.len());
        for (i, edge) in edges.iter().enumerate() {
            by_source.entry(edge.source).or_insert(i);
        }
        Self { by_source }
    }

    /// Position of the edge leaving `source`, if any.
    pub fn edge_from(&self, source: NodeId) -> Option<usize> {
        self.by_source.get(&source).copied()
    }

    pub fn len(&self) -> usize {
        self.by_source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_source.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_core::{Id, Name};

    #[test]
    fn first_edge_per_source_wins() {
        let edges = vec![
            Edge::stream(Name::new("S"), Id::from_index(0), Id::from_index(1)),
            Edge::stream(Name::new("S"), Id::from_index(1), Id::from_index(2)),
            Edge::stream(Name::new("S"), Id::from_index(0), Id::from_index(2)),
        ];
        let index = SourceIndex::from_edges(&edges);

        assert_eq!(index.len(), 2);
        assert_eq!(index.edge_from(Id::from_index(0)), Some(0));
        assert_eq!(index.edge_from(Id::from_index(1)), Some(1));
        assert_eq!(index.edge_from(Id::from_index(2)), None);
    }

    #[test]
    fn empty_index() {
        let index = SourceIndex::from_edges(&[]);
        assert!(index.is_empty());
    }
}
