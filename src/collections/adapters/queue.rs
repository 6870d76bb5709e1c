use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::SinglyLinkedList;
#[doc(inline)]
pub use crate::util::error::{AllocFailure, InsertError};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A first-in, first-out collection, backed by a [`SinglyLinkedList<T>`].
///
/// Elements are enqueued at the tail and dequeued from the head, both of which are `O(1)` for a
/// SinglyLinkedList.
pub struct Queue<T> {
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new empty Queue. Doesn't allocate.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::adapters::Queue;
    /// let queue: Queue<u8> = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    pub const fn new() -> Queue<T> {
        Queue {
            list: SinglyLinkedList::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` to the back of the Queue.
    ///
    /// # Panics
    /// Panics if the node can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::adapters::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue(10);
    /// queue.enqueue(20);
    /// assert_eq!(queue.front(), Some(&10));
    /// assert_eq!(queue.back(), Some(&20));
    /// ```
    pub fn enqueue(&mut self, value: T) {
        self.try_enqueue(value).throw()
    }

    /// Adds `value` to the back of the Queue, returning an [`Err`] if the node can't be allocated.
    /// The Queue is unchanged on failure.
    pub fn try_enqueue(&mut self, value: T) -> Result<(), InsertError> {
        self.list.try_push_back(value)
    }

    /// Removes the element at the front of the Queue and returns ownership of it to the caller, or
    /// returns [`None`] if the Queue is empty.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::adapters::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue('a');
    /// queue.enqueue('b');
    /// assert_eq!(queue.dequeue(), Some('a'));
    /// assert_eq!(queue.dequeue(), Some('b'));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns a reference to the element at the front of the Queue, the next to be dequeued.
    pub const fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns a reference to the element at the back of the Queue, the most recently enqueued.
    pub const fn back(&self) -> Option<&T> {
        self.list.back()
    }

    /// Consumes the Queue, handing every element to `destroy` from the front to the back.
    pub fn destroy_with<F: FnMut(T)>(self, destroy: F) {
        self.list.destroy_with(destroy)
    }

    /// Prints the Queue to stdout from the front to the back, as `[a, b, c]`.
    pub fn print_with<F: FnMut(&T)>(&self, print_element: F) {
        self.list.print_with(print_element)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: SinglyLinkedList::from_iter(iter),
        }
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            list: self.list.clone(),
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &DebugEntries(self.list.iter()))
            .field("len", &self.len())
            .finish()
    }
}
