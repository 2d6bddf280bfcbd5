//! This crate exposes a thread-safe Binary Search Tree (BST) with pluggable
//! ordering, several ways to walk it, and the small containers it is built
//! on.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Here "less" and "greater" are whatever the tree's [`Comparer`] says. A
//! tree built with [`IntegerComparer`] sorts `i32`s the usual way; a closure
//! can sort them backwards.
//!
//! Searching takes `O(height)`. The tree in this crate does not rebalance, so
//! inserting values in sorted order makes the height `O(N)`.
//!
//! ## Walking a tree
//!
//! A tree can be walked in pre-order, in-order (sorted), post-order or
//! level-order. Each walk comes in two forms:
//!
//! - a callback form, e.g. [`BinarySearchTree::traverse_in_order`], calling a
//!   visitor once per value,
//! - a streaming form, e.g. [`BinarySearchTree::traverse_in_order_result`],
//!   which also pushes each value through a [`stream`] channel to a consumer
//!   on another thread.
//!
//! The tree stays locked for the whole walk, streaming included, so a slow
//! consumer holds up every other caller. Streams can be bounded, time out, and
//! be cancelled by the consumer, which always releases the tree.
//!
//! ```
//! use std::sync::Arc;
//!
//! use bstree::comparer::IntegerComparer;
//! use bstree::stream::StreamConfig;
//! use bstree::traversal::TraversalOrder;
//! use bstree::tree::BinarySearchTree;
//!
//! let tree = Arc::new(BinarySearchTree::new(IntegerComparer));
//! for x in [10, 4, 20, 7, 15, 5] {
//!     tree.insert(x);
//! }
//!
//! let stream = tree.stream(TraversalOrder::InOrder, StreamConfig::new());
//! assert_eq!(stream.collect::<Vec<_>>(), vec![4, 5, 7, 10, 15, 20]);
//! ```
//!
//! [`Comparer`]: comparer::Comparer
//! [`IntegerComparer`]: comparer::IntegerComparer
//! [`BinarySearchTree::traverse_in_order`]: tree::BinarySearchTree::traverse_in_order
//! [`BinarySearchTree::traverse_in_order_result`]: tree::BinarySearchTree::traverse_in_order_result

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod comparer;
pub mod queue;
pub mod stack;
pub mod stream;
pub mod traversal;
pub mod tree;


pub use comparer::{
    Comparer, Comparison, Float32Comparer, Float64Comparer, Integer64Comparer, IntegerComparer,
    OrdComparer,
};
pub use traversal::TraversalOrder;
pub use tree::{BinarySearchTree, NodeRef};
