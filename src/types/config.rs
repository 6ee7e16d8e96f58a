//! Sizing policy for the adjacency storage.

use serde::{Deserialize, Serialize};

use super::error::{NetError, NetResult};
use super::{DEFAULT_CAPACITY, DEFAULT_EXPANSION_FACTOR};

/// Most cells a weight matrix may hold; its buffer must stay under `isize::MAX` bytes.
const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Initial capacity and growth policy of a graph's matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of vertex slots allocated up front.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity whenever an insertion would overflow it.
    pub expansion_factor: usize,
}

impl GraphConfig {
    /// Default policy with a custom initial capacity.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// Set the expansion factor.
    pub fn expansion_factor(mut self, factor: usize) -> Self {
        self.expansion_factor = factor;
        self
    }

    /// Check the policy can actually make room for new vertices.
    pub fn validate(&self) -> NetResult<()> {
        if self.initial_capacity == 0 {
            return Err(NetError::InvalidArgument(
                "initial capacity must be at least 1".to_string(),
            ));
        }
        Self::check_slots(self.initial_capacity)?;
        if self.expansion_factor < 2 {
            return Err(NetError::InvalidArgument(format!(
                "expansion factor must be at least 2, got {}",
                self.expansion_factor
            )));
        }
        Ok(())
    }

    /// Capacity to grow to from `current`.
    ///
    /// Fails when the grown matrices could not be addressed.
    pub(crate) fn grown(&self, current: usize) -> NetResult<usize> {
        let grown = current
            .max(1)
            .checked_mul(self.expansion_factor)
            .ok_or_else(|| {
                NetError::InvalidArgument(format!(
                    "cannot grow capacity {} by a factor of {}",
                    current, self.expansion_factor
                ))
            })?;
        Self::check_slots(grown)?;
        Ok(grown)
    }

    /// A square matrix of `capacity` slots per side must fit in one allocation.
    fn check_slots(capacity: usize) -> NetResult<()> {
        match capacity.checked_mul(capacity) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(NetError::InvalidArgument(format!(
                "capacity {} is too large for an adjacency matrix",
                capacity
            ))),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            expansion_factor: DEFAULT_EXPANSION_FACTOR,
        }
    }
}
