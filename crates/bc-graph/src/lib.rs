//! bc-graph: basin connectivity graph.
//!
//! Provides:
//! - Node model and station ordering along a stream
//! - Stream edge synthesis and reach stitching
//! - Basin graph construction into an immutable `Graph`
//!
//! # Example
//!
//! ```
//! use bc_graph::build_basin_graph;
//! use bc_model::{Basin, Stream, StreamLocation, StreamReach};
//!
//! let basin = Basin::new("Sacramento").with_primary_stream(
//!     Stream::new("SAC", false)
//!         .with_location(StreamLocation::new("A", 10.0))
//!         .with_location(StreamLocation::new("B", 20.0))
//!         .with_location(StreamLocation::new("C", 30.0))
//!         .with_reach(StreamReach::new("Upper", "B", "C")),
//! );
//! let graph = build_basin_graph(&basin).unwrap();
//!
//! assert_eq!(graph.nodes().len(), 3);
//! assert_eq!(graph.stream_edges().count(), 2);
//! assert_eq!(graph.reach_edges("Upper").count(), 1);
//! ```

pub mod basin;
pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod node;
pub mod order;
pub mod reach;
pub mod synth;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use basin::build_basin_graph;
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeKind, Graph};
pub use indexing::SourceIndex;
pub use node::{Bank, Node, NodeKey, NodeKind};
pub use order::NodeOrder;
pub use reach::stitch_reach;
pub use synth::{StreamChain, synthesize_stream_edges};
