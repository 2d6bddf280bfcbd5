//! The four orders a tree can be walked in.
//!
//! Every walk feeds each node's value to a visitor exactly once, keeping its
//! frontier in a [`Stack`] or [`Queue`] rather than on the call stack, so a
//! tree degraded into a list is walked like any other. Visitors are
//! fallible so a streaming walk can stop as soon as its consumer goes away;
//! callback-only walks use [`Infallible`](std::convert::Infallible).

use crate::queue::Queue;
use crate::stack::Stack;
use crate::tree::Node;

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, then the node, then the right subtree. Yields values in
    /// ascending order.
    InOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
    /// Breadth first: by increasing depth, left to right within a depth.
    LevelOrder,
}

impl TraversalOrder {
    /// Every order, for callers that want to check them all.
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];
}

/// Walks the tree rooted at `root` in `order`, stopping at the first visitor
/// error.
pub(crate) fn walk<T, E, F>(
    root: Option<&Node<T>>,
    order: TraversalOrder,
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    match order {
        TraversalOrder::PreOrder => pre_order(root, visit),
        TraversalOrder::InOrder => in_order(root, visit),
        TraversalOrder::PostOrder => post_order(root, visit),
        TraversalOrder::LevelOrder => level_order(root, visit),
    }
}

fn pre_order<T, E, F>(root: Option<&Node<T>>, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    let mut pending = Stack::new();
    if let Some(root) = root {
        pending.push(root);
    }

    while let Some(node) = pending.pop() {
        visit(&node.value)?;

        // Right goes under left so the left subtree is finished first.
        if let Some(right) = node.right() {
            pending.push(right);
        }
        if let Some(left) = node.left() {
            pending.push(left);
        }
    }

    Ok(())
}

fn in_order<T, E, F>(root: Option<&Node<T>>, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    let mut pending = Stack::new();
    let mut current = root;
    loop {
        while let Some(node) = current {
            pending.push(node);
            current = node.left();
        }

        let Some(node) = pending.pop() else {
            return Ok(());
        };
        visit(&node.value)?;
        current = node.right();
    }
}

fn post_order<T, E, F>(root: Option<&Node<T>>, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    // A node is visited the second time it is popped, once both of its
    // subtrees are done.
    let mut pending = Stack::new();
    if let Some(root) = root {
        pending.push((root, false));
    }

    while let Some((node, children_done)) = pending.pop() {
        if children_done {
            visit(&node.value)?;
            continue;
        }

        pending.push((node, true));
        if let Some(right) = node.right() {
            pending.push((right, false));
        }
        if let Some(left) = node.left() {
            pending.push((left, false));
        }
    }

    Ok(())
}

fn level_order<T, E, F>(root: Option<&Node<T>>, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    let mut frontier = Queue::new();
    if let Some(root) = root {
        frontier.push(root);
    }

    while let Some(node) = frontier.pop() {
        visit(&node.value)?;

        // Left before right keeps siblings in order within a depth.
        if let Some(left) = node.left() {
            frontier.push(left);
        }
        if let Some(right) = node.right() {
            frontier.push(right);
        }
    }

    Ok(())
}
