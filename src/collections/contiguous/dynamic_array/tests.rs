#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_default_capacity() {
    let arr = DynamicArray::<u8>::with_cap(0);
    assert_eq!(arr.cap(), DEFAULT_CAP, "A zero capacity request should use the default.");

    let arr = DynamicArray::<u8>::with_cap(3);
    assert_eq!(arr.cap(), 3, "A positive capacity request should be used as is.");
    assert!(arr.is_empty());
}

#[test]
fn test_scenario_index_of_and_remove() {
    let mut arr = DynamicArray::with_cap(10);
    arr.push(5);
    arr.push(10);
    arr.push(15);
    assert_eq!(arr.len(), 3);

    assert_eq!(arr.index_of(&10), Some(1));
    assert_eq!(arr.remove(1), 10);
    assert_eq!(&*arr, &[5, 15]);
    assert_eq!(arr.len(), 2);
}

#[test]
fn test_growth_doubles_and_preserves_order() {
    let mut arr = DynamicArray::with_cap(4);
    for i in 0..4 {
        arr.push(i);
    }
    assert_eq!(arr.cap(), 4, "Filling to capacity shouldn't grow.");

    arr.push(4);
    assert_eq!(arr.cap(), 8, "Pushing into a full DynamicArray should double the capacity.");

    for i in 5..9 {
        arr.push(i);
    }
    assert_eq!(arr.cap(), 16);
    assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5, 6, 7, 8], "Growth shouldn't alter elements.");

    let mut arr = DynamicArray::with_cap(1);
    arr.insert(0, 'b');
    arr.insert(0, 'a');
    assert_eq!(arr.cap(), 2, "Inserting into a full DynamicArray should also double.");
    assert_eq!(&*arr, &['a', 'b']);
}

#[test]
fn test_failed_growth_leaves_array_unchanged() {
    let mut arr = DynamicArray::<ZeroSizedType>::with_cap(usize::MAX);
    // Nothing needs initializing for a ZST, so a full array can be faked.
    arr.len = usize::MAX;

    let err = arr.try_push(ZeroSizedType).unwrap_err();
    assert!(err.is_capacity_overflow(), "Doubling past usize::MAX should overflow.");
    assert_eq!(arr.len(), usize::MAX, "Length should be unchanged after a failed push.");
    assert_eq!(arr.cap(), usize::MAX, "Capacity should be unchanged after a failed push.");

    let err = arr.try_insert(0, ZeroSizedType).unwrap_err();
    assert!(err.is_capacity_overflow());
    assert_eq!(arr.len(), usize::MAX, "Length should be unchanged after a failed insert.");
    assert_eq!(arr.cap(), usize::MAX, "Capacity should be unchanged after a failed insert.");

    arr.len = 0;
    arr.push(ZeroSizedType);
    assert_eq!(arr.len(), 1, "The DynamicArray should remain usable.");
}

#[test]
fn test_unrepresentable_capacity() {
    assert!(
        DynamicArray::<u64>::try_with_cap(usize::MAX).unwrap_err().is_capacity_overflow(),
        "An unrepresentable capacity should be reported rather than allocated."
    );
}

#[test]
fn test_insert() {
    let mut arr: DynamicArray<_> = (0..3).collect();

    arr.insert(3, 3);
    assert_eq!(&*arr, &[0, 1, 2, 3], "Inserting at len should append.");

    arr.insert(0, -1);
    assert_eq!(arr.get(0), Some(&-1));
    assert_eq!(&*arr, &[-1, 0, 1, 2, 3], "Inserting at 0 should shift everything right.");

    arr.insert(2, 100);
    assert_eq!(arr.get(2), Some(&100));
    assert_eq!(&*arr, &[-1, 0, 100, 1, 2, 3]);

    assert_eq!(
        arr.try_insert(7, 7),
        Err(InsertError::IndexOutOfBounds(IndexOutOfBounds { index: 7, len: 6 })),
        "Inserting past len should fail."
    );
    assert_eq!(arr.len(), 6, "A failed insert shouldn't change the length.");

    assert_panics!({
        let mut arr: DynamicArray<u8> = DynamicArray::new();
        arr.insert(1, 0);
    });
}

#[test]
fn test_remove_shifts_left() {
    let mut arr: DynamicArray<_> = (0..5).collect();

    assert_eq!(arr.remove(2), 2);
    assert_eq!(arr.get(2), Some(&3), "The following element should take the removed slot.");
    assert_eq!(arr.remove(3), 4, "Removing the last index should work.");
    assert_eq!(arr.remove(0), 0);
    assert_eq!(&*arr, &[1, 3]);

    assert_eq!(arr.try_remove(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(arr.try_delete(5), Err(IndexOutOfBounds { index: 5, len: 2 }));
    assert_eq!(arr.len(), 2);
}

#[test]
fn test_bounds() {
    let mut arr: DynamicArray<_> = (0..3).collect();

    assert_eq!(arr.get(3), None);
    assert_eq!(arr.get_mut(usize::MAX), None);
    assert!(arr.try_set(3, 0).is_err());
    assert!(arr.try_replace(3, 0).is_err());
    assert!(arr.try_remove(3).is_err());
    assert!(arr.try_insert(4, 0).is_err());
    assert!(arr.try_insert(3, 3).is_ok());
}

#[test]
fn test_set_and_replace() {
    let counter = CountedDrop::new(0);
    let mut arr: DynamicArray<_> = iter::repeat_with(|| counter.clone()).take(3).collect();

    arr.set(1, counter.clone());
    assert_eq!(counter.count(), 1, "set should drop the overwritten element.");

    let old = arr.replace(1, counter.clone());
    assert_eq!(counter.count(), 1, "replace should hand the old element back instead.");
    drop(old);
    assert_eq!(counter.count(), 2);

    assert_eq!(arr.len(), 3);
}

#[test]
fn test_ownership_transfer() {
    let counter = CountedDrop::new(0);
    let mut arr: DynamicArray<_> = iter::repeat_with(|| counter.clone()).take(6).collect();

    let popped = arr.pop();
    let removed = arr.remove(0);
    assert_eq!(counter.count(), 0, "pop and remove shouldn't drop anything.");

    assert!(arr.remove_last());
    arr.delete(0);
    assert_eq!(counter.count(), 2, "remove_last and delete should drop the element.");

    drop((popped, removed));
    assert_eq!(counter.count(), 4);

    drop(arr);
    assert_eq!(counter.count(), 6, "Dropping the DynamicArray should drop the rest.");
}

#[test]
fn test_pop_empty() {
    let mut arr = DynamicArray::<u8>::new();
    assert_eq!(arr.pop(), None);
    assert!(!arr.remove_last(), "remove_last should fail on an empty DynamicArray.");
}

#[test]
fn test_index_of_by() {
    let arr: DynamicArray<_> = [3, 8, 13, 8].into_iter().collect();

    assert_eq!(arr.index_of(&8), Some(1), "index_of should find the first match.");
    assert_eq!(arr.index_of(&4), None);
    assert_eq!(arr.index_of_by(&3, |a, b| *a > *b * 2), Some(1));
    assert_eq!(DynamicArray::<u8>::new().index_of(&0), None);
}

#[test]
fn test_reverse() {
    let mut arr: DynamicArray<_> = (0..5).collect();
    arr.reverse();
    assert_eq!(&*arr, &[4, 3, 2, 1, 0]);

    let mut even: DynamicArray<_> = (0..4).collect();
    even.reverse();
    assert_eq!(&*even, &[3, 2, 1, 0]);
    even.reverse();
    assert_eq!(even, (0..4).collect(), "Reversing twice should restore the original order.");

    let mut empty = DynamicArray::<u8>::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_destroy_with() {
    let counter = CountedDrop::new(0);
    let arr: DynamicArray<_> = iter::repeat_with(|| counter.clone()).take(4).collect();

    let mut destroyed = 0;
    arr.destroy_with(|value| {
        destroyed += 1;
        drop(value);
    });
    assert_eq!(destroyed, 4, "The callback should be invoked once per element.");
    assert_eq!(counter.count(), 4, "Elements shouldn't be dropped twice.");

    let arr: DynamicArray<_> = ["a", "b", "c"].into_iter().collect();
    let mut order = DynamicArray::new();
    arr.destroy_with(|value| order.push(value));
    assert_eq!(&*order, &["a", "b", "c"], "Elements should be destroyed in index order.");
}

#[test]
fn test_borrowed_handles() {
    let values = [String::from("x"), String::from("y")];
    let mut arr = DynamicArray::new();
    arr.push(&values[0]);
    arr.push(&values[1]);

    arr.delete(0);
    drop(arr);
    assert_eq!(values[0], "x", "Dropping a borrowed handle shouldn't touch the pointee.");
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new(0);
    let mut arr: DynamicArray<_> = iter::repeat_with(|| counter.clone()).take(5).collect();
    let cap = arr.cap();

    arr.clear();
    assert_eq!(counter.count(), 5);
    assert!(arr.is_empty());
    assert_eq!(arr.cap(), cap, "Clearing should keep the capacity.");
}

#[test]
fn test_into_iter() {
    let arr: DynamicArray<_> = (0..5).collect();
    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.len(), 2);

    let counter = CountedDrop::new(0);
    let arr: DynamicArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.count(), 10, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_zst_support() {
    let mut arr = DynamicArray::with_cap(2);
    for _ in 0..20 {
        arr.push(ZeroSizedType);
    }
    assert_eq!(arr.len(), 20);
    assert_eq!(arr.cap(), 32);
    assert_eq!(arr.remove(10), ZeroSizedType);
    assert_eq!(arr.len(), 19);
}

#[test]
fn test_equality_and_hash() {
    let arr: DynamicArray<usize> = (0..5).collect();
    let mut other = DynamicArray::with_cap(1);
    other.extend(0..5);

    assert_eq!(arr, other, "Equality shouldn't depend on capacity.");
    assert_eq!(arr.clone(), arr);

    let state = RandomState::new();
    assert_eq!(state.hash_one(&arr), state.hash_one(&other));
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_formatting() {
    let mut arr = DynamicArray::new();
    arr.extend(1..=3);
    assert_eq!(format!("{arr}"), "[1, 2, 3]");
    assert_eq!(
        format!("{arr:?}"),
        "DynamicArray { contents: [1, 2, 3], len: 3, cap: 10 }"
    );
}
