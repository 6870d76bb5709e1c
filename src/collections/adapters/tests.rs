#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_stack_order() {
    let mut stack = Stack::with_cap(2);
    stack.push(10);
    stack.push(20);
    stack.push(30);

    assert_eq!(stack.len(), 3, "The Stack should grow past its initial capacity.");
    assert_eq!(stack.peek(), Some(&30));
    assert_eq!(stack.len(), 3, "Peeking shouldn't remove anything.");

    assert_eq!(stack.pop(), Some(30));
    assert_eq!(stack.pop(), Some(20));
    assert_eq!(stack.pop(), Some(10));
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
    assert!(stack.is_empty());
}

#[test]
fn test_stack_peek_mut() {
    let mut stack: Stack<_> = (1..=3).collect();
    if let Some(top) = stack.peek_mut() {
        *top *= 10;
    }
    assert_eq!(stack.pop(), Some(30));
    assert_eq!(stack.peek(), Some(&2));
}

#[test]
fn test_stack_ownership() {
    let counter = CountedDrop::new(0);
    let mut stack: Stack<_> = iter::repeat_with(|| counter.clone()).take(4).collect();

    let popped = stack.pop();
    assert_eq!(counter.count(), 0, "Popping should hand the element back without dropping it.");
    drop(popped);
    assert_eq!(counter.count(), 1);

    let mut destroyed = 0;
    stack.destroy_with(|value| {
        destroyed += 1;
        drop(value);
    });
    assert_eq!(destroyed, 3);
    assert_eq!(counter.count(), 4);
}

#[test]
fn test_queue_order() {
    let mut queue = Queue::new();
    queue.enqueue(10);
    queue.enqueue(20);

    assert_eq!(queue.front(), Some(&10));
    assert_eq!(queue.back(), Some(&20));
    assert_eq!(queue.len(), 2);

    assert_eq!(queue.dequeue(), Some(10));
    assert_eq!(queue.dequeue(), Some(20));
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.front(), None);

    queue.enqueue(30);
    assert_eq!(queue.front(), queue.back(), "A single element should be both front and back.");
}

#[test]
fn test_queue_ownership() {
    let counter = CountedDrop::new(0);
    let mut queue: Queue<_> = iter::repeat_with(|| counter.clone()).take(5).collect();

    let dequeued = queue.dequeue();
    assert_eq!(counter.count(), 0, "Dequeuing should hand the element back without dropping it.");
    drop(dequeued);

    drop(queue);
    assert_eq!(counter.count(), 5, "Dropping the Queue should drop the remaining elements.");
}

#[test]
fn test_queue_destroy_order() {
    let queue: Queue<_> = ["a", "b", "c"].into_iter().collect();
    let mut order = Vec::new();
    queue.destroy_with(|value| order.push(value));
    assert_eq!(order, ["a", "b", "c"]);
}

#[test]
fn test_formatting() {
    let stack: Stack<_> = (1..=3).collect();
    assert_eq!(format!("{stack:?}"), "Stack { contents: [1, 2, 3], len: 3 }");

    let queue: Queue<_> = (1..=3).collect();
    assert_eq!(format!("{queue:?}"), "Queue { contents: [1, 2, 3], len: 3 }");
}
