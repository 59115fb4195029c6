//! bc-pg: PG-JSON property-graph output for basin graphs.
//!
//! Provides:
//! - PG-JSON document types (plain and named)
//! - `encode`/`decode` between [`bc_graph::Graph`] and PG-JSON
//! - `PgJsonFormatter` keyed by media type

pub mod decode;
pub mod document;
pub mod encode;
pub mod error;
pub mod format;

pub use decode::decode;
pub use document::{NamedPgGraph, PgDocument, PgEdge, PgGraph, PgNode, PgProperties};
pub use encode::encode;
pub use error::{FormatError, FormatResult};
pub use format::{ContentType, PgJsonFormatter};
