//! Linear containers used as working storage by the traversals.

pub mod queue;
pub mod stack;

pub use queue::Queue;
pub use stack::Stack;
