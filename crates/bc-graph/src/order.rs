//! Station ordering along a stream.

use core::cmp::Ordering;

use crate::node::Node;

/// Orders a stream's nodes by station.
///
/// Ascending when the stream does not start downstream, descending when it
/// does. Nodes sharing a station fall back to id, then stream id, in
/// ascending order regardless of direction, so the order is total and
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeOrder {
    starts_downstream: bool,
}

impl NodeOrder {
    pub fn new(starts_downstream: bool) -> Self {
        Self { starts_downstream }
    }

    pub fn compare(self, a: &Node, b: &Node) -> Ordering {
        let by_station = a.station().cmp(&b.station());
        let by_station = if self.starts_downstream {
            by_station.reverse()
        } else {
            by_station
        };
        by_station
            .then_with(|| a.id().cmp(b.id()))
            .then_with(|| a.stream_id().cmp(b.stream_id()))
    }

    pub fn sort(self, nodes: &mut [Node]) {
        nodes.sort_by(|a, b| self.compare(a, b));
    }

    /// Insert into an already sorted list, keeping it sorted.
    pub fn insert(self, nodes: &mut Vec<Node>, node: Node) {
        let index = match nodes.binary_search_by(|other| self.compare(other, &node)) {
            Ok(index) | Err(index) => index,
        };
        nodes.insert(index, node);
    }
}
