//! A first-in-first-out queue.
//!
//! The tree uses it as the frontier of a level-order walk, but it is a plain
//! container and can be used on its own.
//!
//! # Examples
//!
//! ```
//! use bstree::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.push(1);
//! queue.push(2);
//!
//! assert_eq!(queue.peek(), Some(&1));
//! assert_eq!(queue.pop(), Some(1));
//! assert_eq!(queue.pop(), Some(2));
//! assert_eq!(queue.pop(), None);
//! ```

use std::collections::VecDeque;

/// A FIFO queue.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    data: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            data: VecDeque::new(),
        }
    }

    /// Number of items waiting in the queue.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the queue holds no item.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Adds `item` at the back of the queue.
    pub fn push(&mut self, item: T) {
        self.data.push_back(item);
    }

    /// Removes and returns the item at the front of the queue, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop_front()
    }

    /// The item [`pop`](Self::pop) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.data.front()
    }
}
