//! Points along a stream.

use core::hash::{Hash, Hasher};

use bc_core::{Name, Station};

/// Side of the stream a point sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bank {
    #[default]
    Left,
    Right,
}

impl Bank {
    /// Read a bank as the data API spells it (`"L"`, `"Right"`, ...).
    ///
    /// Anything that isn't recognisably right-bank is treated as left bank.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("r") || s.eq_ignore_ascii_case("right") => {
                Bank::Right
            }
            _ => Bank::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Bank::Left => "Left",
            Bank::Right => "Right",
        }
    }
}

/// What a node stands for on its stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A named stream location.
    StreamLocation,
    /// A named location where a tributary joins this stream.
    Confluence,
    /// A named location where another stream takes flow from this one.
    Diversion,
    /// A point with no location record (stream ends, bare junctions).
    Empty,
}

impl NodeKind {
    pub const ALL: [NodeKind; 4] = [
        NodeKind::StreamLocation,
        NodeKind::Confluence,
        NodeKind::Diversion,
        NodeKind::Empty,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NodeKind::StreamLocation => "StreamLocation",
            NodeKind::Confluence => "Confluence",
            NodeKind::Diversion => "Diversion",
            NodeKind::Empty => "EmptyStreamNode",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

/// Identity of a node: (id, stream, station).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub id: Name,
    pub stream_id: Name,
    pub station: Station,
}

/// A vertex of the basin graph.
///
/// Two nodes are the same vertex iff id and stream id match case-insensitively
/// and the stations are equal; bank and kind never take part in equality.
#[derive(Debug, Clone)]
pub struct Node {
    key: NodeKey,
    bank: Bank,
    kind: NodeKind,
}

impl Node {
    pub fn new(
        kind: NodeKind,
        id: impl Into<Name>,
        stream_id: impl Into<Name>,
        station: Station,
        bank: Bank,
    ) -> Self {
        Self {
            key: NodeKey {
                id: id.into(),
                stream_id: stream_id.into(),
                station,
            },
            bank,
            kind,
        }
    }

    /// A node for a named stream location; the id is the location name.
    pub fn location(
        name: impl Into<Name>,
        stream_id: impl Into<Name>,
        station: Station,
        bank: Bank,
    ) -> Self {
        Self::new(NodeKind::StreamLocation, name, stream_id, station, bank)
    }

    /// A synthetic node with id `"{stream}-Node-{station}"`.
    pub fn empty(stream_id: &Name, station: Station, bank: Bank) -> Self {
        let id = format!("{stream_id}-Node-{station}");
        Self::new(NodeKind::Empty, id, stream_id.clone(), station, bank)
    }

    /// The same point re-tagged as a junction. Only plain stream locations
    /// change; synthetic and already-tagged nodes are returned unchanged.
    pub fn tagged(self, kind: NodeKind) -> Self {
        match self.kind {
            NodeKind::StreamLocation => Self { kind, ..self },
            _ => self,
        }
    }

    pub fn id(&self) -> &Name {
        &self.key.id
    }

    pub fn stream_id(&self) -> &Name {
        &self.key.stream_id
    }

    pub fn station(&self) -> Station {
        self.key.station
    }

    pub fn bank(&self) -> Bank {
        self.bank
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn key(&self) -> &NodeKey {
        &self.key
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn station(v: f64) -> Station {
        Station::new(v).unwrap()
    }

    fn hash_of(node: &Node) -> u64 {
        let mut hasher = DefaultHasher::new();
        node.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn identity_ignores_case_bank_and_kind() {
        let a = Node::location("Folsom", "American", station(30.0), Bank::Left);
        let b = Node::new(
            NodeKind::Confluence,
            "FOLSOM",
            "AMERICAN",
            station(30.0),
            Bank::Right,
        );
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn identity_includes_station_and_stream() {
        let a = Node::location("X", "SAC", station(10.0), Bank::Left);
        assert_ne!(a, Node::location("X", "SAC", station(10.5), Bank::Left));
        assert_ne!(a, Node::location("X", "FEATHER", station(10.0), Bank::Left));
        assert_ne!(a, Node::location("Y", "SAC", station(10.0), Bank::Left));
    }

    #[test]
    fn empty_node_id() {
        let stream = Name::new("SAC");
        let node = Node::empty(&stream, station(45.0), Bank::Left);
        assert_eq!(node.id().as_str(), "SAC-Node-45.0");
        assert_eq!(node.kind(), NodeKind::Empty);
        assert_eq!(node.label(), "EmptyStreamNode");

        let far = Node::empty(&stream, station(10_000_000.0), Bank::Left);
        assert_eq!(far.id().as_str(), "SAC-Node-1.0E7");
    }

    #[test]
    fn tagging_only_changes_locations() {
        let loc = Node::location("A", "SAC", station(1.0), Bank::Left).tagged(NodeKind::Confluence);
        assert_eq!(loc.kind(), NodeKind::Confluence);
        let again = loc.tagged(NodeKind::Diversion);
        assert_eq!(again.kind(), NodeKind::Confluence);

        let empty = Node::empty(&Name::new("SAC"), station(2.0), Bank::Left)
            .tagged(NodeKind::Diversion);
        assert_eq!(empty.kind(), NodeKind::Empty);
    }

    #[test]
    fn bank_parsing() {
        assert_eq!(Bank::parse(None), Bank::Left);
        assert_eq!(Bank::parse(Some("L")), Bank::Left);
        assert_eq!(Bank::parse(Some("r")), Bank::Right);
        assert_eq!(Bank::parse(Some(" Right ")), Bank::Right);
        assert_eq!(Bank::parse(Some("middle")), Bank::Left);
    }

    #[test]
    fn kind_labels_round_trip() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(NodeKind::from_label("Gauge"), None);
    }
}
