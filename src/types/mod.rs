//! Shared types for the matrix-network library.

pub mod config;
pub mod error;

use std::fmt::Debug;
use std::hash::Hash;

pub use config::GraphConfig;
pub use error::{NetError, NetResult};

/// Vertex slots allocated by `Graph::new` / `Network::new`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacity multiplier used when the matrices are full.
pub const DEFAULT_EXPANSION_FACTOR: usize = 2;

/// Weight given to an edge when none is specified (one corridor between two rooms).
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Requirements on a vertex label.
///
/// Labels are compared by equality, hashed for the label-to-slot index, cloned
/// into traversal and path results, and rendered with `Debug` in error messages.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// Validate an edge weight: finite and non-negative.
pub fn check_weight(weight: f64) -> NetResult<f64> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(NetError::InvalidArgument(format!(
            "edge weight must be finite and non-negative, got {}",
            weight
        )))
    }
}
