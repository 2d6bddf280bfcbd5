//! A thread-safe, unbalanced Binary Search Tree ordered by a pluggable
//! [`Comparer`].
//!
//! Every public method takes the tree's single lock, so a tree can be shared
//! between threads (typically behind an [`Arc`]) and used through `&self`.
//! There is no reader/writer split: two concurrent searches wait on each
//! other just like a search and an insert do.
//!
//! # Examples
//!
//! ```
//! use bstree::comparer::IntegerComparer;
//! use bstree::tree::BinarySearchTree;
//!
//! let tree = BinarySearchTree::new(IntegerComparer);
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! assert!(tree.insert(10));
//! assert!(tree.insert(4));
//! // Keys are unique.
//! assert!(!tree.insert(10));
//! assert_eq!(tree.len(), 2);
//!
//! // A node reference holds the lock until it is dropped.
//! assert_eq!(tree.search(&4).map(|node| *node.value()), Some(4));
//!
//! let mut seen = Vec::new();
//! tree.traverse_in_order(|v| seen.push(*v));
//! assert_eq!(seen, vec![4, 10]);
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&10), Some(10));
//! assert_eq!(tree.len(), 1);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::mem;
use std::ops::Deref;
use std::ptr::{self, NonNull};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use std::thread;

use crate::comparer::{Comparer, Comparison, OrdComparer};
use crate::stack::Stack;
use crate::stream::{self, StreamConfig, StreamError, StreamSender, TraversalStream};
use crate::traversal::{self, TraversalOrder};

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of unique values. The order of the values is decided
/// by the comparer `C` given to [`BinarySearchTree::new`] and never changes.
///
/// The tree does not rebalance itself: inserting values in sorted order
/// degrades it into a list.
pub struct BinarySearchTree<T, C> {
    inner: Mutex<Inner<T>>,
    comparer: C,
}

/// What the lock protects. `count` always equals the number of nodes
/// reachable from `root` once the lock is released.
pub(crate) struct Inner<T> {
    root: Link<T>,
    count: usize,
}

impl<T> Drop for Inner<T> {
    // Dropping a `Box<Node>` recursively would overflow the stack on a
    // degenerate tree, so nodes are detached one at a time.
    fn drop(&mut self) {
        let mut pending = Stack::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }
        while let Some(mut node) = pending.pop() {
            if let Some(left) = node.left.take() {
                pending.push(left);
            }
            if let Some(right) = node.right.take() {
                pending.push(right);
            }
        }
        self.count = 0;
    }
}

/// A value and its two optional children. Every value in the left subtree
/// compares `Smaller` and every value in the right subtree `Larger` than
/// `value`.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn find<C>(&self, value: &T, comparer: &C) -> Option<&Self>
    where
        C: Comparer<T>,
    {
        let mut current = self;
        loop {
            current = match comparer.compare(value, &current.value) {
                Comparison::Smaller => current.left()?,
                Comparison::Larger => current.right()?,
                Comparison::Equal => return Some(current),
            };
        }
    }

    /// The leftmost node of the subtree rooted here.
    fn leftmost(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// The rightmost node of the subtree rooted here.
    fn rightmost(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// The link in the subtree owned by `link` that holds `value`, or the
    /// empty link where `value` belongs.
    ///
    /// Walks down with a cursor instead of recursing: a tree built from sorted
    /// input is as deep as it is long.
    fn locate<'a, C>(mut link: &'a mut Link<T>, value: &T, comparer: &C) -> &'a mut Link<T>
    where
        C: Comparer<T>,
    {
        loop {
            let Some(node) = link.as_deref() else {
                return link;
            };
            link = match (comparer.compare(value, &node.value), link) {
                (Comparison::Smaller, Some(node)) => &mut node.left,
                (Comparison::Larger, Some(node)) => &mut node.right,
                (_, link) => return link,
            };
        }
    }

    /// Links a new node holding `value` into the subtree owned by `link`.
    /// Returns `false`, leaving the subtree untouched, if an equal value is
    /// already present.
    fn insert<C>(link: &mut Link<T>, value: T, comparer: &C) -> bool
    where
        C: Comparer<T>,
    {
        let slot = Self::locate(link, &value, comparer);
        if slot.is_some() {
            return false;
        }
        *slot = Some(Box::new(Node::new(value)));
        true
    }

    /// Unlinks the node holding `value` from the subtree owned by `link` and
    /// returns its value.
    ///
    /// A node with two children takes the value of its in-order successor
    /// (the smallest value of its right subtree) so the ordering invariant
    /// holds.
    fn remove<C>(link: &mut Link<T>, value: &T, comparer: &C) -> Option<T>
    where
        C: Comparer<T>,
    {
        let slot = Self::locate(link, value, comparer);
        let node = slot.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            let successor =
                Self::take_smallest(&mut node.right).expect("Right subtree is not empty");
            return Some(mem::replace(&mut node.value, successor));
        }

        let node = slot.take()?;
        let Node { value, left, right } = *node;
        *slot = left.or(right);
        Some(value)
    }

    /// Unlinks the smallest node of the subtree owned by `link` and returns
    /// its value. Its right subtree takes its place.
    fn take_smallest(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let Node { value, right, .. } = *link.take()?;
        *link = right;
        Some(value)
    }
}

impl<T> BinarySearchTree<T, OrdComparer<T>>
where
    T: Ord,
{
    /// A tree ordered by `T`'s natural order.
    pub fn ordered() -> Self {
        Self::new(OrdComparer::new())
    }
}

impl<T> Default for BinarySearchTree<T, OrdComparer<T>>
where
    T: Ord,
{
    fn default() -> Self {
        Self::ordered()
    }
}

impl<T, C> fmt::Debug for BinarySearchTree<T, C> {
    // `try_lock` so formatting a tree while holding one of its `NodeRef`s
    // doesn't deadlock.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("BinarySearchTree");
        match self.inner.try_lock() {
            Ok(inner) => debug.field("len", &inner.count).finish(),
            Err(TryLockError::Poisoned(poisoned)) => {
                debug.field("len", &poisoned.into_inner().count).finish()
            }
            Err(TryLockError::WouldBlock) => debug.finish_non_exhaustive(),
        }
    }
}

impl<T, C> BinarySearchTree<T, C> {
    /// Generates a new, empty tree ordered by `comparer`.
    pub fn new(comparer: C) -> Self {
        Self {
            inner: Mutex::new(Inner {
                root: None,
                count: 0,
            }),
            comparer,
        }
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.lock().count
    }

    /// Whether the tree holds no value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The comparer ordering this tree.
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// The root node, or `None` if the tree is empty.
    ///
    /// The returned [`NodeRef`] keeps the tree locked: calling another method
    /// of this tree on the same thread before dropping it never returns. See
    /// [`NodeRef`].
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        let guard = self.lock();
        let root = NonNull::from(guard.root.as_deref()?);
        Some(NodeRef::new(&self.inner, guard, root))
    }

    /// The node holding the smallest value, or `None` if the tree is empty.
    ///
    /// Like every [`NodeRef`], the result must be dropped before this thread
    /// calls the tree again.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::ordered();
    /// assert!(tree.min().is_none());
    ///
    /// for x in [5, 2, 9] {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.min().map(|n| *n), Some(2));
    /// assert_eq!(tree.max().map(|n| *n), Some(9));
    /// ```
    pub fn min(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(NodeRef::find_min)
    }

    /// The node holding the largest value, or `None` if the tree is empty.
    ///
    /// Like every [`NodeRef`], the result must be dropped before this thread
    /// calls the tree again.
    pub fn max(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(NodeRef::find_max)
    }

    /// The node holding the smallest value of the subtree rooted at `node`.
    ///
    /// Returns `None` if `node` belongs to another tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::ordered();
    /// for x in [50, 30, 70, 20, 40, 60, 80] {
    ///     tree.insert(x);
    /// }
    ///
    /// // The right subtree of the root holds 60, 70 and 80.
    /// let seventy = tree.search(&70).unwrap();
    /// assert_eq!(tree.find_min(seventy).map(|n| *n), Some(60));
    /// ```
    pub fn find_min<'a>(&'a self, node: NodeRef<'a, T>) -> Option<NodeRef<'a, T>> {
        self.owns(&node).then(|| node.find_min())
    }

    /// The node holding the largest value of the subtree rooted at `node`.
    ///
    /// Returns `None` if `node` belongs to another tree.
    pub fn find_max<'a>(&'a self, node: NodeRef<'a, T>) -> Option<NodeRef<'a, T>> {
        self.owns(&node).then(|| node.find_max())
    }

    fn owns(&self, node: &NodeRef<'_, T>) -> bool {
        let owned = ptr::eq(node.owner, &self.inner);
        if !owned {
            log::warn!("BinarySearchTree: node reference belongs to another tree");
        }
        owned
    }

    /// Calls `visitor` on every value in `order`.
    pub fn traverse<F>(&self, order: TraversalOrder, mut visitor: F)
    where
        F: FnMut(&T),
    {
        let guard = self.lock();
        log::trace!("BinarySearchTree::traverse {:?} over {} nodes", order, guard.count);
        let result = traversal::walk(guard.root.as_deref(), order, &mut |value: &T| {
            visitor(value);
            Ok::<_, Infallible>(())
        });
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Calls `visitor` on every value: node, left subtree, right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::ordered();
    /// for x in [12, 1, 7, 20, 4] {
    ///     tree.insert(x);
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse_pre_order(|v| seen.push(*v));
    /// assert_eq!(seen, vec![12, 1, 7, 4, 20]);
    /// ```
    pub fn traverse_pre_order<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.traverse(TraversalOrder::PreOrder, visitor)
    }

    /// Calls `visitor` on every value in ascending order.
    pub fn traverse_in_order<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.traverse(TraversalOrder::InOrder, visitor)
    }

    /// Calls `visitor` on every value: left subtree, right subtree, node.
    pub fn traverse_post_order<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.traverse(TraversalOrder::PostOrder, visitor)
    }

    /// Calls `visitor` on every value by increasing depth, left to right
    /// within a depth.
    pub fn traverse_level_order<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.traverse(TraversalOrder::LevelOrder, visitor)
    }

    /// Walks the tree in `order`, calling `visitor` on every value and then
    /// sending a copy of it through `sender`. The callback and the channel see
    /// the same sequence.
    ///
    /// The lock is held until the last value is handed over, so other calls on
    /// this tree wait for the consumer. `sender` is dropped on return, which
    /// closes the channel. Returns the number of values sent, or why sending
    /// stopped early; the lock is released either way.
    pub fn traverse_result<F>(
        &self,
        order: TraversalOrder,
        mut visitor: F,
        sender: StreamSender<T>,
    ) -> Result<usize, StreamError>
    where
        T: Clone,
        F: FnMut(&T),
    {
        let guard = self.lock();
        log::trace!(
            "BinarySearchTree::traverse_result {:?} over {} nodes",
            order,
            guard.count
        );
        let mut sent = 0;
        let result = traversal::walk(
            guard.root.as_deref(),
            order,
            &mut |value: &T| -> Result<(), StreamError> {
                visitor(value);
                sender.send(value.clone())?;
                sent += 1;
                Ok(())
            },
        );

        if let Err(err) = result {
            log::debug!(
                "BinarySearchTree::traverse_result {:?} stopped after {} values: {}",
                order,
                sent,
                err
            );
            return Err(err);
        }
        Ok(sent)
    }

    /// Streaming form of [`traverse_pre_order`](Self::traverse_pre_order).
    /// See [`traverse_result`](Self::traverse_result).
    pub fn traverse_pre_order_result<F>(
        &self,
        visitor: F,
        sender: StreamSender<T>,
    ) -> Result<usize, StreamError>
    where
        T: Clone,
        F: FnMut(&T),
    {
        self.traverse_result(TraversalOrder::PreOrder, visitor, sender)
    }

    /// Streaming form of [`traverse_in_order`](Self::traverse_in_order).
    /// See [`traverse_result`](Self::traverse_result).
    pub fn traverse_in_order_result<F>(
        &self,
        visitor: F,
        sender: StreamSender<T>,
    ) -> Result<usize, StreamError>
    where
        T: Clone,
        F: FnMut(&T),
    {
        self.traverse_result(TraversalOrder::InOrder, visitor, sender)
    }

    /// Streaming form of [`traverse_post_order`](Self::traverse_post_order).
    /// See [`traverse_result`](Self::traverse_result).
    pub fn traverse_post_order_result<F>(
        &self,
        visitor: F,
        sender: StreamSender<T>,
    ) -> Result<usize, StreamError>
    where
        T: Clone,
        F: FnMut(&T),
    {
        self.traverse_result(TraversalOrder::PostOrder, visitor, sender)
    }

    /// Streaming form of [`traverse_level_order`](Self::traverse_level_order).
    /// See [`traverse_result`](Self::traverse_result).
    pub fn traverse_level_order_result<F>(
        &self,
        visitor: F,
        sender: StreamSender<T>,
    ) -> Result<usize, StreamError>
    where
        T: Clone,
        F: FnMut(&T),
    {
        self.traverse_result(TraversalOrder::LevelOrder, visitor, sender)
    }

    /// Runs a streaming traversal on its own thread and returns the stream to
    /// drain it from.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bstree::stream::StreamConfig;
    /// use bstree::traversal::TraversalOrder;
    /// use bstree::tree::BinarySearchTree;
    ///
    /// let tree = Arc::new(BinarySearchTree::ordered());
    /// for x in [10, 15, 5, 3] {
    ///     tree.insert(x);
    /// }
    ///
    /// let mut stream = tree.stream(TraversalOrder::LevelOrder, StreamConfig::new());
    /// let values: Vec<_> = stream.by_ref().collect();
    /// assert_eq!(values, vec![10, 5, 15, 3]);
    /// assert_eq!(stream.finish(), Ok(4));
    /// ```
    pub fn stream(
        self: &Arc<Self>,
        order: TraversalOrder,
        config: StreamConfig,
    ) -> TraversalStream<T>
    where
        T: Clone + Send + 'static,
        C: Send + Sync + 'static,
    {
        let (sender, receiver) = stream::channel(config);
        let tree = Arc::clone(self);
        let producer = thread::spawn(move || tree.traverse_result(order, |_| {}, sender));
        TraversalStream::new(receiver, producer)
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        // Structural changes are single assignments made after every comparer
        // call, so a panic under the lock never leaves a half-linked tree.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, C> BinarySearchTree<T, C>
where
    C: Comparer<T>,
{
    /// Inserts `value` into the tree. Returns `false`, leaving the tree
    /// untouched, if an equal value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::comparer::IntegerComparer;
    /// use bstree::tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::new(IntegerComparer);
    /// assert!(tree.insert(10));
    /// assert!(!tree.insert(10));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&self, value: T) -> bool {
        let mut guard = self.lock();
        let inner = &mut *guard;
        let inserted = Node::insert(&mut inner.root, value, &self.comparer);

        if inserted {
            inner.count += 1;
            log::debug!("BinarySearchTree::insert, {} nodes", inner.count);
        } else {
            log::debug!("BinarySearchTree::insert rejected a duplicate");
        }
        inserted
    }

    /// Finds the node holding a value equal to `value`. The returned
    /// reference keeps the tree locked until it is dropped.
    ///
    /// The lock is not reentrant: calling any method of this tree on the same
    /// thread while the result is alive deadlocks or panics. Copy what you
    /// need out of the node and drop it first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::ordered();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n), Some(1));
    /// assert!(tree.search(&42).is_none());
    ///
    /// // `map` drops the node before `insert` takes the lock again.
    /// if let Some(found) = tree.search(&1).map(|n| *n) {
    ///     tree.insert(found + 1);
    /// }
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn search(&self, value: &T) -> Option<NodeRef<'_, T>> {
        let guard = self.lock();
        let found = NonNull::from(guard.root.as_deref()?.find(value, &self.comparer)?);
        Some(NodeRef::new(&self.inner, guard, found))
    }

    /// Removes the value equal to `value` from the tree and returns it. If the
    /// tree holds no such value, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::tree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::ordered();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&self, value: &T) -> Option<T> {
        let mut guard = self.lock();
        let inner = &mut *guard;
        let removed = Node::remove(&mut inner.root, value, &self.comparer)?;
        inner.count -= 1;
        log::debug!("BinarySearchTree::remove, {} nodes left", inner.count);
        Some(removed)
    }
}

/// A read-only view of one node of a [`BinarySearchTree`].
///
/// The view holds the tree's lock: every other call on the tree waits until
/// the view is dropped. Moving to a child or an extremum of the subtree keeps
/// the same lock.
///
/// # Deadlocks
///
/// The lock is a plain [`Mutex`], which is not reentrant. A thread holding a
/// `NodeRef` that calls back into the same tree, as in
/// `if let Some(n) = tree.search(&x) { tree.insert(y); }`, waits on itself
/// forever or panics. Only [`BinarySearchTree::find_min`] and
/// [`BinarySearchTree::find_max`] take a `NodeRef` and reuse its lock.
pub struct NodeRef<'a, T> {
    owner: &'a Mutex<Inner<T>>,
    guard: MutexGuard<'a, Inner<T>>,
    node: NonNull<Node<T>>,
}

impl<'a, T> NodeRef<'a, T> {
    fn new(
        owner: &'a Mutex<Inner<T>>,
        guard: MutexGuard<'a, Inner<T>>,
        node: NonNull<Node<T>>,
    ) -> Self {
        Self { owner, guard, node }
    }

    fn node(&self) -> &Node<T> {
        // SAFETY: `node` points into the tree `guard` locks and was reachable
        // from its root when this view was built. Nodes are boxed so they don't
        // move, and the tree can only be changed by taking the lock, which we
        // hold until `guard` is dropped along with this view. We never hand out
        // `&mut` access through `guard`, so this shared borrow can't alias a
        // mutable one.
        unsafe { self.node.as_ref() }
    }

    fn moved_to(self, node: NonNull<Node<T>>) -> Self {
        Self {
            owner: self.owner,
            guard: self.guard,
            node,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.node().value
    }

    /// The left child of this node, if any.
    pub fn left(self) -> Option<Self> {
        let left = NonNull::from(self.node().left()?);
        Some(self.moved_to(left))
    }

    /// The right child of this node, if any.
    pub fn right(self) -> Option<Self> {
        let right = NonNull::from(self.node().right()?);
        Some(self.moved_to(right))
    }

    /// The node holding the smallest value of the subtree rooted here.
    pub fn find_min(self) -> Self {
        let leftmost = NonNull::from(self.node().leftmost());
        self.moved_to(leftmost)
    }

    /// The node holding the largest value of the subtree rooted here.
    pub fn find_max(self) -> Self {
        let rightmost = NonNull::from(self.node().rightmost());
        self.moved_to(rightmost)
    }

    /// Number of values in the whole tree this node belongs to.
    pub fn tree_len(&self) -> usize {
        self.guard.count
    }
}

impl<T> Deref for NodeRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value()
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("left", &self.node().left().map(|n| &n.value))
            .field("right", &self.node().right().map(|n| &n.value))
            .finish()
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    type Tree = BinarySearchTree<i8, OrdComparer<i8>>;

    fn collect(tree: &Tree, order: TraversalOrder) -> Vec<i8> {
        let mut seen = Vec::new();
        tree.traverse(order, |v| seen.push(*v));
        seen
    }

    /// Checks every traversal of `tree` against the set of values it should
    /// hold.
    fn matches_model(tree: &Tree, model: &BTreeSet<i8>) -> bool {
        let sorted: Vec<_> = model.iter().copied().collect();
        if collect(tree, TraversalOrder::InOrder) != sorted || tree.len() != model.len() {
            return false;
        }

        let root = tree.root().map(|n| *n);
        TraversalOrder::ALL.iter().all(|&order| {
            let seen = collect(tree, order);
            let mut as_set = seen.clone();
            as_set.sort_unstable();
            let root_position = match order {
                TraversalOrder::PreOrder | TraversalOrder::LevelOrder => seen.first(),
                TraversalOrder::PostOrder => seen.last(),
                TraversalOrder::InOrder => root.as_ref(),
            };
            as_set == sorted && root_position.copied() == root
        })
    }

    /// Applies a set of operations to a tree and a set.
    /// This way we can ensure that after a random smattering of inserts
    /// and removes we have the same values in both.
    fn do_ops(ops: &[Op<i8>], tree: &Tree, model: &mut BTreeSet<i8>) -> bool {
        ops.iter().all(|op| match op {
            Op::Insert(x) => tree.insert(*x) == model.insert(*x),
            Op::Remove(x) => tree.remove(x) == model.take(x),
            Op::Traverse => matches_model(tree, model),
        })
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let tree = Tree::default();
            let mut model = BTreeSet::new();

            do_ops(&ops, &tree, &mut model) && matches_model(&tree, &model)
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let tree = Tree::default();
            for x in &xs {
                tree.insert(*x);
            }

            xs.iter().all(|x| tree.search(x).map(|n| *n) == Some(*x))
        }
    }

    quickcheck::quickcheck! {
        fn streaming_parity(xs: Vec<i8>) -> bool {
            let tree = Tree::default();
            for x in &xs {
                tree.insert(*x);
            }

            TraversalOrder::ALL.iter().all(|&order| {
                let (sender, receiver) = stream::channel(StreamConfig::new().capacity(xs.len()));
                let mut visited = Vec::new();
                let sent = tree.traverse_result(order, |v| visited.push(*v), sender);
                sent == Ok(tree.len()) && receiver.collect::<Vec<_>>() == visited
            })
        }
    }
}
