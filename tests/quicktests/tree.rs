use bstree::{BinarySearchTree, IntegerComparer, OrdComparer, TraversalOrder};
use quickcheck::quickcheck;
use rand::{seq::SliceRandom, thread_rng};

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &BinarySearchTree<T, OrdComparer<T>>, set: &mut HashSet<T>)
where
    T: std::hash::Hash + Eq + Clone + Ord + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(bst.insert(x.clone()), set.insert(x.clone()));
            }
            Op::Remove(x) => {
                assert_eq!(bst.remove(x), set.take(x));
            }
        }
    }
}

fn in_order<T: Clone, C>(tree: &BinarySearchTree<T, C>) -> Vec<T> {
    let mut seen = Vec::new();
    tree.traverse_in_order(|v| seen.push(v.clone()));
    seen
}

quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        crate::init_logger();
        let tree = BinarySearchTree::ordered();
        let mut set = HashSet::new();

        do_ops(&ops, &tree, &mut set);
        tree.len() == set.len() && set.iter().all(|x| tree.search(x).map(|n| *n) == Some(*x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = BinarySearchTree::ordered();
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }

    fn in_order_is_strictly_ascending(xs: Vec<String>) -> bool {
        let tree = BinarySearchTree::ordered();
        for x in &xs {
            tree.insert(x.clone());
        }

        let mut expected: Vec<_> = xs.into_iter().collect::<HashSet<_>>().into_iter().collect();
        expected.sort();
        in_order(&tree) == expected
    }

    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let tree = BinarySearchTree::ordered();
        for x in &xs {
            tree.insert(*x);
        }
        for remove in &removes {
            tree.remove(remove);
        }

        let still_present: HashSet<i8> = xs
            .iter()
            .copied()
            .filter(|x| !removes.contains(x))
            .collect();

        removes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x).is_some())
            && tree.len() == still_present.len()
    }

    fn min_max_match_extremes(xs: Vec<i32>) -> bool {
        let tree = BinarySearchTree::new(IntegerComparer);
        for x in &xs {
            tree.insert(*x);
        }

        tree.min().map(|n| *n) == xs.iter().copied().min()
            && tree.max().map(|n| *n) == xs.iter().copied().max()
    }
}

#[test]
fn shuffled_inserts_sort() {
    let mut values: Vec<i32> = (0..1_000).collect();
    values.shuffle(&mut thread_rng());

    let tree = BinarySearchTree::new(IntegerComparer);
    for x in &values {
        assert!(tree.insert(*x));
    }
    for x in &values {
        assert!(!tree.insert(*x));
    }

    assert_eq!(tree.len(), 1_000);
    assert_eq!(in_order(&tree), (0..1_000).collect::<Vec<_>>());
}

#[test]
fn subtree_extremum_only_sees_subtree() {
    let tree = BinarySearchTree::new(IntegerComparer);
    for x in [10, 4, 20, 7, 15, 5, 25, 1] {
        tree.insert(x);
    }

    let four = tree.search(&4).unwrap();
    assert_eq!(tree.find_max(four).map(|n| *n), Some(7));
    let twenty = tree.search(&20).unwrap();
    assert_eq!(tree.find_min(twenty).map(|n| *n), Some(15));

    // The whole tree still reports the global extremes.
    assert_eq!(tree.min().map(|n| *n), Some(1));
    assert_eq!(tree.max().map(|n| *n), Some(25));
}

#[test]
fn level_order_regression() {
    let tree = BinarySearchTree::new(IntegerComparer);
    for x in [10, 15, 5, 3] {
        tree.insert(x);
    }

    let mut seen = Vec::new();
    tree.traverse(TraversalOrder::LevelOrder, |v| seen.push(*v));
    assert_eq!(seen, vec![10, 5, 15, 3]);
}

#[test]
fn descending_inserts_build_a_walkable_list() {
    crate::init_logger();
    const N: i32 = 20_000;
    let tree = BinarySearchTree::new(IntegerComparer);
    for x in (0..N).rev() {
        assert!(tree.insert(x));
    }

    assert_eq!(in_order(&tree), (0..N).collect::<Vec<_>>());
    let mut post = Vec::new();
    tree.traverse_post_order(|v| post.push(*v));
    assert_eq!(post, (0..N).collect::<Vec<_>>());
    let mut pre = Vec::new();
    tree.traverse_pre_order(|v| pre.push(*v));
    assert_eq!(pre, (0..N).rev().collect::<Vec<_>>());

    assert_eq!(tree.remove(&0), Some(0));
    assert_eq!(tree.remove(&(N - 1)), Some(N - 1));
    assert_eq!(tree.min().map(|n| *n), Some(1));
    assert_eq!(tree.len(), N as usize - 2);
}
