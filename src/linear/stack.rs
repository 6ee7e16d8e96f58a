//! LIFO stack backed by a `Vec`.

use crate::types::{NetError, NetResult};

/// A last-in, first-out container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty stack with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Push an item on top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Like `pop`, but an empty stack is an error.
    pub fn try_pop(&mut self) -> NetResult<T> {
        self.items.pop().ok_or(NetError::EmptyStructure)
    }

    /// The top item, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Mutable access to the top item.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the stack holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
