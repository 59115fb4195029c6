//! PG-JSON document types.
//!
//! Every property value is an array, even when it holds a single scalar;
//! consumers of the exchange format expect that shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PgProperties(BTreeMap<String, Vec<Value>>);

impl PgProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single-valued property.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), vec![value.into()]);
        self
    }

    pub fn get(&self, key: &str) -> Option<&[Value]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn first_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.first()?.as_str()
    }

    pub fn first_f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.first()?.as_f64()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgNode {
    pub id: String,
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: PgProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgEdge {
    pub from: String,
    pub to: String,
    pub labels: Vec<String>,
    #[serde(default)]
    pub undirected: bool,
    #[serde(default)]
    pub properties: PgProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PgGraph {
    pub nodes: Vec<PgNode>,
    pub edges: Vec<PgEdge>,
}

/// A graph together with the name of the basin it describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPgGraph {
    pub name: String,
    pub graph: PgGraph,
}

/// Any single PG-JSON document this crate writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PgDocument {
    Named(NamedPgGraph),
    Plain(PgGraph),
}

impl PgDocument {
    pub fn graph(&self) -> &PgGraph {
        match self {
            PgDocument::Named(named) => &named.graph,
            PgDocument::Plain(graph) => graph,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            PgDocument::Named(named) => Some(&named.name),
            PgDocument::Plain(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_shape() {
        let json = serde_json::to_string(&PgGraph::default()).unwrap();
        assert_eq!(json, r#"{"nodes":[],"edges":[]}"#);
    }

    #[test]
    fn properties_are_single_element_arrays() {
        let props = PgProperties::new()
            .with("streamId", "SAC")
            .with("station", 12.5);
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "streamId": ["SAC"], "station": [12.5] })
        );
        assert_eq!(props.first_str("streamId"), Some("SAC"));
        assert_eq!(props.first_f64("station"), Some(12.5));
        assert_eq!(props.first_str("station"), None);
    }

    #[test]
    fn documents_parse_either_flavour() {
        let plain: PgDocument = serde_json::from_str(r#"{"nodes":[],"edges":[]}"#).unwrap();
        assert!(matches!(plain, PgDocument::Plain(_)));
        assert_eq!(plain.name(), None);

        let json = r#"{"name":"Sacramento","graph":{"nodes":[],"edges":[]}}"#;
        let named: PgDocument = serde_json::from_str(json).unwrap();
        assert_eq!(named.name(), Some("Sacramento"));
        assert!(named.graph().nodes.is_empty());
    }
}
