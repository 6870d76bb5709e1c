use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::DynamicArray;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, GrowthError};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A last-in, first-out collection, backed by a [`DynamicArray<T>`].
///
/// The top of the Stack is the end of the array, so both `push` and `pop` are `O(1)` (apart from
/// the occasional growth of the array).
pub struct Stack<T> {
    pub(crate) arr: DynamicArray<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty Stack with the default capacity.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::adapters::Stack;
    /// let stack: Stack<u8> = Stack::new();
    /// assert!(stack.is_empty());
    /// ```
    pub fn new() -> Stack<T> {
        Stack {
            arr: DynamicArray::new(),
        }
    }

    /// Creates a new empty Stack with room for `cap` elements before it needs to grow. A `cap` of
    /// 0 uses the default capacity.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    pub fn with_cap(cap: usize) -> Stack<T> {
        Stack {
            arr: DynamicArray::with_cap(cap),
        }
    }

    /// Returns the number of elements on the Stack.
    pub const fn len(&self) -> usize {
        self.arr.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    ///
    /// # Panics
    /// Panics if the Stack is full and can't grow.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::adapters::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(10);
    /// stack.push(20);
    /// assert_eq!(stack.peek(), Some(&20));
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Pushes `value` onto the top of the Stack, returning an [`Err`] if the Stack is full and
    /// can't grow. The Stack is unchanged on failure.
    pub fn try_push(&mut self, value: T) -> Result<(), GrowthError> {
        self.arr.try_push(value)
    }

    /// Removes the top element of the Stack and returns ownership of it to the caller, or returns
    /// [`None`] if the Stack is empty.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::adapters::Stack;
    /// let mut stack = Stack::new();
    /// stack.push("a");
    /// assert_eq!(stack.pop(), Some("a"));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.arr.pop()
    }

    /// Returns a reference to the top element of the Stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.arr.last()
    }

    /// Returns a mutable reference to the top element of the Stack without removing it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.arr.last_mut()
    }

    /// Consumes the Stack, handing every element to `destroy` from the bottom to the top.
    pub fn destroy_with<F: FnMut(T)>(self, destroy: F) {
        self.arr.destroy_with(destroy)
    }

    /// Prints the Stack to stdout from the bottom to the top, as `[a, b, c]`.
    pub fn print_with<F: FnMut(&T)>(&self, print_element: F) {
        self.arr.print_with(print_element)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.arr.extend(iter)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            arr: DynamicArray::from_iter(iter),
        }
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            arr: self.arr.clone(),
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &DebugEntries(self.arr.iter()))
            .field("len", &self.len())
            .finish()
    }
}
