//! Graph-specific error types.

use bc_core::{BcError, NodeId};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A reach endpoint is not on the reach's stream, or the stream edges do
    /// not lead from one endpoint to the other.
    #[error("Reach {reach} cannot resolve endpoint {endpoint}: {reason}")]
    ReachResolution {
        reach: String,
        endpoint: String,
        reason: &'static str,
    },

    /// Two nodes on one stream share id and station.
    #[error("Duplicate node {id} at station {station} on stream {stream}")]
    DuplicateNode {
        id: String,
        stream: String,
        station: String,
    },

    /// A stream location has no station and cannot be placed on the stream.
    #[error("Location {location} on stream {stream} has no station")]
    MissingStation { location: String, stream: String },

    /// An edge refers to a node that doesn't exist.
    #[error("Edge {edge} refers to non-existent node {node}")]
    DanglingEdge { edge: String, node: NodeId },

    /// An edge starts and ends at the same node.
    #[error("Edge {edge} is a self-loop on node {node}")]
    SelfLoop { edge: String, node: String },

    #[error(transparent)]
    Core(#[from] BcError),
}
