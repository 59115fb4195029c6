//! Formatting error types.

use bc_core::BcError;
use bc_graph::GraphError;

pub type FormatResult<T> = Result<T, FormatError>;

#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    /// A node or edge kind PG-JSON has no mapping for.
    #[error("PG-JSON does not support {element} type {label:?}")]
    UnsupportedElement { element: &'static str, label: String },

    /// Requested media type is not a PG-JSON flavour.
    #[error("Unsupported content type: {0}")]
    UnsupportedFormat(String),

    /// A PG-JSON element lacks a property it needs.
    #[error("PG-JSON {element} {id} is missing property {key}")]
    MissingProperty {
        element: &'static str,
        id: String,
        key: &'static str,
    },

    /// A PG-JSON edge names a node id the document doesn't contain.
    #[error("PG-JSON edge {from} -> {to} refers to unknown node {missing}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Core(#[from] BcError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
