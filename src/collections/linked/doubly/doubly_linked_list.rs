use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Iter, IterMut, Node, NodePtr};
use crate::collections::linked::{Length, ONE};
#[doc(inline)]
pub use crate::util::error::{AllocFailure, CapacityOverflow, IndexOutOfBounds, InsertError};
use crate::util::fmt::{DebugEntries, print_elements};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions. The counterpart of
/// [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList) for when removal from the
/// back needs to be `O(1)`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` / `set` | `O(min(i, n-i))` |
/// | `index_of` | `O(n)` |
/// | `reverse` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, because all `O(i)`
/// or `O(n)` operations will consist primarily of cache misses. For this reason,
/// [`DynamicArray`](crate::collections::contiguous::DynamicArray) should be preferred unless the
/// `O(1)` methods at either end are being heavily utilized.
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element to the front of the DoublyLinkedList.
    ///
    /// # Panics
    /// Panics if the node can't be allocated.
    pub fn push_front(&mut self, value: T) {
        self.try_push_front(value).throw()
    }

    /// Adds the provided element to the front of the DoublyLinkedList, returning an [`Err`] if
    /// the node can't be allocated. The list is unchanged on failure.
    pub fn try_push_front(&mut self, value: T) -> Result<(), InsertError> {
        match &mut self.state {
            Empty => self.state = ListState::try_single(value)?,
            Full(contents) => contents.try_push_front(value)?,
        }
        Ok(())
    }

    /// Adds the provided element to the back of the DoublyLinkedList.
    ///
    /// # Panics
    /// Panics if the node can't be allocated.
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).throw()
    }

    /// Adds the provided element to the back of the DoublyLinkedList, returning an [`Err`] if the
    /// node can't be allocated. The list is unchanged on failure.
    pub fn try_push_back(&mut self, value: T) -> Result<(), InsertError> {
        match &mut self.state {
            Empty => self.state = ListState::try_single(value)?,
            Full(contents) => contents.try_push_back(value)?,
        }
        Ok(())
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.try_remove(0).ok()
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let last_index = self.len().checked_sub(1)?;
        self.try_remove(last_index).ok()
    }

    /// Removes and drops the last element, returning false if the list was empty.
    pub fn remove_last(&mut self) -> bool {
        self.pop_back().is_some()
    }

    /// Returns a reference to the element at `index`, or [`None`] if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] if it is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.try_get_mut(index).ok()
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] if it is out of
    /// bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts the provided element so that it ends up at `index`. An `index` equal to the length
    /// appends.
    ///
    /// # Panics
    /// Panics if `index > len` or the node can't be allocated.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided element so that it ends up at `index`, returning an [`Err`] rather than
    /// panicking. The list is unchanged on failure.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError> {
        let len = self.len();
        match index {
            0 => self.try_push_front(value),
            val if val == len => self.try_push_back(value),
            val if val > len => Err(IndexOutOfBounds { index, len }.into()),
            val => {
                let contents = self.checked_contents_for_index_mut(val)?;
                let new_len = contents.len.checked_add(1).ok_or(CapacityOverflow)?;
                let next_node = contents.seek(val);
                // SAFETY: For this branch, we aren't adding at the front, so the node currently at
                // index has a predecessor.
                let prev_node = unsafe { next_node.prev().unreachable() };

                let node = NodePtr::try_from_node(Node {
                    value,
                    prev: Some(prev_node),
                    next: Some(next_node),
                })?;

                *prev_node.next_mut() = Some(node);
                *next_node.prev_mut() = Some(node);
                contents.len = new_len;
                Ok(())
            },
        }
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index` and returns it, or returns an [`Err`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;
        let node = contents.seek(index).take_node();

        match contents.len.checked_sub(1) {
            None => self.state = Empty,
            Some(new_len) => {
                match node.prev {
                    Some(prev) => *prev.next_mut() = node.next,
                    // SAFETY: The previous length is greater than 1, so the head has a successor.
                    None => contents.head = unsafe { node.next.unreachable() },
                }
                match node.next {
                    Some(next) => *next.prev_mut() = node.prev,
                    // SAFETY: The previous length is greater than 1, so the tail has a predecessor.
                    None => contents.tail = unsafe { node.prev.unreachable() },
                }
                contents.len = new_len;
            },
        }

        Ok(node.value)
    }

    /// Removes and drops the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn delete(&mut self, index: usize) {
        self.try_delete(index).throw()
    }

    /// Removes and drops the element at `index`, or returns an [`Err`] if `index >= len`.
    pub fn try_delete(&mut self, index: usize) -> Result<(), IndexOutOfBounds> {
        self.try_remove(index).map(drop)
    }

    /// Replaces the element at `index` with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, returning the old value, or an [`Err`] if
    /// `index >= len`.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(
            self.checked_seek(index)?.value_mut(),
            new_value,
        ))
    }

    /// Overwrites the element at `index` with `new_value`, dropping the old value.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, new_value: T) {
        self.try_set(index, new_value).throw()
    }

    /// Overwrites the element at `index` with `new_value`, dropping the old value, or returns an
    /// [`Err`] if `index >= len`.
    pub fn try_set(&mut self, index: usize, new_value: T) -> Result<(), IndexOutOfBounds> {
        self.try_replace(index, new_value).map(drop)
    }

    /// Returns the index of the first element for which `compare(element, item)` returns true.
    pub fn index_of_by<F>(&self, item: &T, mut compare: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.iter().position(|element| compare(element, item))
    }

    /// Reverses the list in place by swapping the links of every node, then swapping the head and
    /// tail.
    pub fn reverse(&mut self) {
        if let Full(contents) = &mut self.state {
            let mut curr = Some(contents.head);

            while let Some(node) = curr {
                curr = *node.next();
                mem::swap(node.prev_mut(), node.next_mut());
            }

            mem::swap(&mut contents.head, &mut contents.tail);
        }
    }

    /// Drops every element, leaving the list empty.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Consumes the DoublyLinkedList, handing every element to `destroy` from head to tail.
    pub fn destroy_with<F: FnMut(T)>(mut self, mut destroy: F) {
        while let Some(value) = self.pop_front() {
            destroy(value);
        }
    }

    /// Prints the DoublyLinkedList to stdout as `[a, b, c]`, using `print_element` for each
    /// element.
    pub fn print_with<F: FnMut(&T)>(&self, print_element: F) {
        print_elements(self.iter(), print_element)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.index_of_by(item, T::eq)
    }

    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index))
    }

    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) const fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a predecessor.");
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = *next;
                    count += 1;
                }
                assert!(*tail == curr);
                assert_eq!(count, len.get());
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Walks to the node at `index` from whichever end is closer.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index, self.head)
        } else {
            self.seek_bwd(self.last_index() - index, self.tail)
        }
    }

    pub fn seek_fwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: seek only walks forward less than len nodes from the head.
            node = unsafe { node.next().unreachable() };
        }
        node
    }

    pub fn seek_bwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: seek only walks backward less than len nodes from the tail.
            node = unsafe { node.prev().unreachable() };
        }
        node
    }

    pub fn try_push_front(&mut self, value: T) -> Result<(), InsertError> {
        let new_len = self.len.checked_add(1).ok_or(CapacityOverflow)?;

        let node = NodePtr::try_from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        })?;

        *self.head.prev_mut() = Some(node);
        self.head = node;
        self.len = new_len;
        Ok(())
    }

    pub fn try_push_back(&mut self, value: T) -> Result<(), InsertError> {
        let new_len = self.len.checked_add(1).ok_or(CapacityOverflow)?;

        let node = NodePtr::try_from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        })?;

        *self.tail.next_mut() = Some(node);
        self.tail = node;
        self.len = new_len;
        Ok(())
    }

    pub fn try_wrap_one(value: T) -> Result<ListContents<T>, AllocFailure> {
        let node = NodePtr::try_from_node(Node {
            value,
            prev: None,
            next: None,
        })?;

        Ok(ListContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn try_single(value: T) -> Result<ListState<T>, AllocFailure> {
        Ok(Full(ListContents::try_wrap_one(value)?))
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                curr = *ptr.next();
                // SAFETY: curr has already been advanced, so ptr is never used again.
                unsafe { ptr.drop_node(); }
            }
        }
    }
}

// SAFETY: The list uniquely owns its nodes, so it can be sent when T can.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: The safe API obeys the borrow rules, so shared references never mutate nodes.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
