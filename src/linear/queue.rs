//! FIFO queue backed by a `VecDeque`.

use std::collections::VecDeque;

use crate::types::{NetError, NetResult};

/// A first-in, first-out container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an item at the rear.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the front item.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Like `dequeue`, but an empty queue is an error.
    pub fn try_dequeue(&mut self) -> NetResult<T> {
        self.items.pop_front().ok_or(NetError::EmptyStructure)
    }

    /// The front item, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the queue holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
