//! bc-core: stable foundation for basin connectivity.
//!
//! Contains:
//! - ids (compact graph handles + case-insensitive names)
//! - numeric (finite station values)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BcError, BcResult};
pub use ids::*;
pub use numeric::*;
