use bstree::stream::{channel, StreamConfig, StreamError};
use bstree::{BinarySearchTree, IntegerComparer, TraversalOrder};

use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn parallel_inserts_are_counted_once() {
    crate::init_logger();
    let tree = Arc::new(BinarySearchTree::new(IntegerComparer));

    // Every thread inserts the same overlapping range: each value wins once.
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || (offset * 50..offset * 50 + 200).filter(|x| tree.insert(*x)).count())
        })
        .collect();
    let inserted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(inserted, 350);
    assert_eq!(tree.len(), 350);

    let mut seen = Vec::new();
    tree.traverse_in_order(|v| seen.push(*v));
    assert_eq!(seen, (0..350).collect::<Vec<_>>());
}

#[test]
fn streams_match_callbacks_in_every_order() {
    let tree = Arc::new(BinarySearchTree::new(IntegerComparer));
    for x in [12, 1, 7, 20, 4, 15, 30, 2] {
        tree.insert(x);
    }

    for order in TraversalOrder::ALL {
        let mut expected = Vec::new();
        tree.traverse(order, |v| expected.push(*v));

        let mut stream = tree.stream(order, StreamConfig::new());
        let streamed: Vec<_> = stream.by_ref().collect();
        assert_eq!(streamed, expected, "{order:?}");
        assert_eq!(stream.finish(), Ok(expected.len()));
    }
}

#[test]
fn visitor_and_channel_see_the_same_sequence() {
    let tree = Arc::new(BinarySearchTree::new(IntegerComparer));
    for x in [10, 4, 20, 7, 15, 5] {
        tree.insert(x);
    }

    let (sender, receiver) = channel(StreamConfig::new().capacity(2));
    let producer = {
        let tree = Arc::clone(&tree);
        thread::spawn(move || {
            let mut visited = Vec::new();
            let sent = tree.traverse_in_order_result(|v| visited.push(*v), sender);
            (sent, visited)
        })
    };

    let received: Vec<_> = receiver.collect();
    let (sent, visited) = producer.join().unwrap();

    assert_eq!(sent, Ok(6));
    assert_eq!(received, visited);
    assert_eq!(received, vec![4, 5, 7, 10, 15, 20]);
}

#[test]
fn slow_consumer_blocks_other_callers_until_cancelled() {
    let tree = Arc::new(BinarySearchTree::new(IntegerComparer));
    for x in 0..10 {
        tree.insert(x);
    }

    let mut stream = tree.stream(
        TraversalOrder::PreOrder,
        StreamConfig::new().poll_interval(Duration::from_micros(10)),
    );
    assert_eq!(stream.next(), Some(0));

    // The producer is parked on its next send, holding the tree.
    let reader = {
        let tree = Arc::clone(&tree);
        thread::spawn(move || tree.len())
    };
    thread::sleep(Duration::from_millis(20));
    assert!(!reader.is_finished());

    stream.cancel();
    assert_eq!(stream.finish(), Err(StreamError::Cancelled));
    assert_eq!(reader.join().unwrap(), 10);
}
