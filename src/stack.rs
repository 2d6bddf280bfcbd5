//! A last-in-first-out stack.
//!
//! # Examples
//!
//! ```
//! use bstree::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), None);
//! ```

/// A LIFO stack.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Number of items on the stack.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the stack holds no item.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
    }

    /// Removes and returns the top item, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// The top item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.last()
    }
}
