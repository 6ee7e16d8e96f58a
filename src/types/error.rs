//! Error types for the matrix-network library.

use thiserror::Error;

/// All errors that can occur in the matrix-network library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetError {
    /// The operation referenced a vertex label that is not in the structure.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// The operation needs at least one element.
    #[error("The structure is empty")]
    EmptyStructure,

    /// A weight, capacity or other argument failed validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The vertex label is already present.
    #[error("Duplicate vertex: {0}")]
    DuplicateVertex(String),

    /// Both endpoints of an edge are the same vertex.
    #[error("Self-loop not allowed on vertex {0}")]
    SelfLoop(String),
}

impl NetError {
    /// Build an `ElementNotFound` carrying the `Debug` rendering of `label`.
    pub fn not_found<T: std::fmt::Debug + ?Sized>(label: &T) -> Self {
        Self::ElementNotFound(format!("{:?}", label))
    }
}

/// Convenience result type for matrix-network operations.
pub type NetResult<T> = Result<T, NetError>;
