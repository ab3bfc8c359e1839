//! Frontier containers for graph search.
//!
//! - [`Stack`]: LIFO, drives depth-first search.
//! - [`Queue`]: FIFO, drives breadth-first search.
//! - [`PriorityQueue`]: min-priority with decrease-only `update`, drives UCS / A*.

pub mod priority;
pub mod queue;
pub mod stack;

pub use priority::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;

/// Common surface of the order-only frontiers.
pub trait Frontier<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
