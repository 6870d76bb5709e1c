#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn collect<T: Clone>(list: &SinglyLinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_push_and_get() {
    let mut list = SinglyLinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    for i in 0..5 {
        list.push_back(i);
    }
    assert_eq!(list.len(), 5, "Length should equal the number of appends.");
    for i in 0..5 {
        assert_eq!(list.get(i), Some(&i), "Elements should be in append order.");
    }
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.back(), Some(&4));

    list.push_front(99);
    assert_eq!(list.front(), Some(&99), "Pushing to the front should move the head.");
    assert_eq!(list.get(1), Some(&0), "The old head should follow the new one.");
    assert_eq!(list.len(), 6);
    list.verify_links();
}

#[test]
fn test_scenario_insert_set_reverse() {
    let mut list = SinglyLinkedList::new();
    list.push_back(1);
    list.push_back(3);

    list.insert(1, 2);
    assert_eq!(collect(&list), [1, 2, 3]);

    list.set(1, 42);
    assert_eq!(collect(&list), [1, 42, 3]);

    list.reverse();
    assert_eq!(collect(&list), [3, 42, 1]);
    assert_eq!(list.front(), Some(&3));
    assert_eq!(list.back(), Some(&1));
    list.verify_links();
}

#[test]
fn test_insert_cases() {
    let mut list = SinglyLinkedList::new();

    list.insert(0, 'c');
    assert_eq!(list.front(), list.back(), "A single node should be both head and tail.");

    list.insert(0, 'a');
    list.insert(2, 'e');
    list.insert(1, 'b');
    list.insert(3, 'd');
    assert_eq!(collect(&list), ['a', 'b', 'c', 'd', 'e']);
    assert_eq!(list.back(), Some(&'e'), "Inserting at len should move the tail.");
    list.verify_links();

    assert_eq!(
        list.try_insert(6, 'z'),
        Err(InsertError::IndexOutOfBounds(IndexOutOfBounds { index: 6, len: 5 }))
    );
    assert_eq!(list.len(), 5, "A failed insert shouldn't change the length.");

    assert_panics!({
        let mut list = SinglyLinkedList::new();
        list.insert(1, 0);
    });
}

#[test]
fn test_remove_cases() {
    let mut list: SinglyLinkedList<_> = (0..6).collect();

    assert_eq!(list.remove(2), 2, "Removing from the middle should splice around the node.");
    assert_eq!(list.get(2), Some(&3), "The following element should take the removed index.");
    list.verify_links();

    assert_eq!(list.remove(0), 0, "Removing the head should advance it.");
    assert_eq!(list.front(), Some(&1));
    list.verify_links();

    assert_eq!(list.remove(3), 5, "Removing the tail should find the node before it.");
    assert_eq!(list.back(), Some(&4));
    list.verify_links();

    list.push_back(6);
    assert_eq!(collect(&list), [1, 3, 4, 6], "Appending after tail removal should work.");

    assert_eq!(list.try_remove(4), Err(IndexOutOfBounds { index: 4, len: 4 }));

    let mut single: SinglyLinkedList<_> = iter::once("only").collect();
    assert_eq!(single.remove(0), "only");
    assert!(single.is_empty(), "Removing the only node should leave the list empty.");
    assert_eq!(single.front(), None);
    assert_eq!(single.back(), None);
    single.push_back("again");
    assert_eq!(single.len(), 1);
}

#[test]
fn test_bounds() {
    let mut list: SinglyLinkedList<_> = (0..3).collect();

    assert_eq!(list.get(3), None);
    assert_eq!(list.get_mut(10), None);
    assert!(list.try_set(3, 0).is_err());
    assert!(list.try_replace(3, 0).is_err());
    assert!(list.try_remove(3).is_err());
    assert!(list.try_delete(3).is_err());
    assert!(list.try_insert(4, 0).is_err());
    assert!(list.try_insert(3, 3).is_ok());

    let mut empty = SinglyLinkedList::<u8>::new();
    assert_eq!(empty.get(0), None);
    assert!(empty.try_remove(0).is_err());
    assert_eq!(empty.pop_front(), None);
    assert_eq!(empty.pop_back(), None);
    assert!(!empty.remove_last());
}

#[test]
fn test_pop_both_ends() {
    let mut list: SinglyLinkedList<_> = (1..=3).collect();

    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), None);
    assert!(list.is_empty());
}

#[test]
fn test_reverse_involution() {
    for len in 0..6 {
        let original: SinglyLinkedList<_> = (0..len).collect();
        let mut list = original.clone();

        list.reverse();
        list.verify_links();
        assert_eq!(collect(&list), (0..len).rev().collect::<Vec<_>>());

        list.reverse();
        list.verify_links();
        assert_eq!(list, original, "Reversing twice should restore a list of length {len}.");
    }
}

#[test]
fn test_index_of() {
    let list: SinglyLinkedList<_> = [5, 10, 15, 10].into_iter().collect();

    assert_eq!(list.index_of(&10), Some(1), "index_of should find the first match.");
    assert_eq!(list.index_of(&20), None);
    assert!(list.contains(&15));
    assert_eq!(list.index_of_by(&14, |a, b| a > b), Some(2));
    assert_eq!(SinglyLinkedList::<u8>::new().index_of(&0), None);
}

#[test]
fn test_destructor_discipline() {
    let counter = CountedDrop::new(0);
    let mut list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(8).collect();

    let removed = list.remove(3);
    let popped = list.pop_back();
    let replaced = list.replace(0, counter.clone());
    assert_eq!(counter.count(), 0, "Returning methods shouldn't drop anything.");

    list.set(0, counter.clone());
    list.delete(1);
    assert!(list.remove_last());
    assert_eq!(counter.count(), 3, "Dropping methods should drop exactly one element each.");

    drop((removed, popped, replaced));
    assert_eq!(counter.count(), 6);

    let remaining = list.len();
    let mut destroyed = 0;
    list.destroy_with(|value| {
        destroyed += 1;
        drop(value);
    });
    assert_eq!(destroyed, remaining, "The callback should be invoked once per element.");
    assert_eq!(counter.count(), 6 + remaining);
}

#[test]
fn test_destroy_order_and_drop() {
    let list: SinglyLinkedList<_> = ["a", "b", "c"].into_iter().collect();
    let mut order = Vec::new();
    list.destroy_with(|value| order.push(value));
    assert_eq!(order, ["a", "b", "c"], "Elements should be destroyed from head to tail.");

    let counter = CountedDrop::new(0);
    let list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(100).collect();
    drop(list);
    assert_eq!(counter.count(), 100, "Dropping the list should drop every element.");
}

#[test]
fn test_iterators() {
    let mut list: SinglyLinkedList<_> = (0..5).collect();

    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(collect(&list), [0, 2, 4, 6, 8]);
    assert_eq!(list.iter().len(), 5);

    let mut iter = list.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.collect::<Vec<_>>(), [2, 4, 6, 8]);
}

#[test]
fn test_equality_and_hash() {
    let a: SinglyLinkedList<_> = (0..4).collect();
    let mut b = SinglyLinkedList::new();
    b.extend([0, 1, 2]);
    assert_ne!(a, b);

    b.push_back(3);
    assert_eq!(a, b);

    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b), "Equal lists should hash equally.");
}

#[test]
fn test_formatting() {
    let list: SinglyLinkedList<_> = (1..=3).collect();
    assert_eq!(list.to_string(), "(1) -> (2) -> (3)");
    assert_eq!(format!("{list:?}"), "SinglyLinkedList { contents: [1, 2, 3], len: 3 }");
    assert_eq!(SinglyLinkedList::<u8>::new().to_string(), "");
}
