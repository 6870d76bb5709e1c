use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::RawBuffer;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, GrowthError, IndexOutOfBounds, InsertError};
use crate::util::fmt::{DebugEntries, print_elements};
use crate::util::result::ResultExtension;

/// The capacity used when a DynamicArray is created without a positive capacity.
pub const DEFAULT_CAP: usize = 10;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, backed by a [`RawBuffer<T>`].
///
/// The capacity is always at least 1 and only ever changes by doubling, which happens exactly when
/// an element is added to a full DynamicArray. Failed growth leaves the DynamicArray unchanged.
///
/// Elements are moved in and out, never inspected or copied. Methods that take an element out of
/// the collection come in pairs: one returning it to the caller (`pop`, `remove`, `replace`) and
/// one dropping it in place (`remove_last`, `delete`, `set`).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` / `set` | `O(1)` |
/// | `index_of` | `O(n)` |
/// | `reverse` | `O(n)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, `push` will take
/// `O(n)`.
pub struct DynamicArray<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length 0 and capacity [`DEFAULT_CAP`].
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 10);
    /// ```
    pub fn new() -> DynamicArray<T> {
        Self::with_cap(0)
    }

    /// Creates a new DynamicArray with capacity `cap`, or [`DEFAULT_CAP`] if `cap` is 0.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// let arr: DynamicArray<u8> = DynamicArray::with_cap(0);
    /// assert_eq!(arr.cap(), 10);
    /// ```
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates a new DynamicArray with capacity `cap`, or [`DEFAULT_CAP`] if `cap` is 0, returning
    /// an [`Err`] rather than panicking if the storage can't be allocated.
    pub fn try_with_cap(cap: usize) -> Result<DynamicArray<T>, GrowthError> {
        let cap = if cap > 0 { cap } else { DEFAULT_CAP };

        Ok(DynamicArray {
            buf: RawBuffer::try_with_cap(cap)?,
            len: 0,
        })
    }

    /// Returns the length of the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the DynamicArray.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns a reference to the element at `index`, or [`None`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<_> = [5, 10, 15].into_iter().collect();
    /// assert_eq!(arr.get(1), Some(&10));
    /// assert_eq!(arr.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Pushes the provided value onto the end of the DynamicArray, doubling the capacity if it is
    /// full.
    ///
    /// # Panics
    /// Panics if the DynamicArray needs to grow and growing fails.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::with_cap(2);
    /// for i in 0..=4 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4]);
    /// assert_eq!(arr.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Pushes the provided value onto the end of the DynamicArray, returning an [`Err`] if the
    /// DynamicArray is full and can't grow. The DynamicArray is unchanged on failure.
    pub fn try_push(&mut self, value: T) -> Result<(), GrowthError> {
        self.grow_if_full()?;

        // SAFETY: There is at least one free slot after growing, so len < cap.
        unsafe { self.buf.slot(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Pops the last value off the end of the DynamicArray, returning ownership of it to the
    /// caller, or [`None`] if the DynamicArray is empty.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..3).collect();
    /// assert_eq!(arr.pop(), Some(2));
    /// assert_eq!(arr.pop(), Some(1));
    /// assert_eq!(arr.pop(), Some(0));
    /// assert_eq!(arr.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading.
            self.len -= 1;

            // SAFETY: len has just been decremented, so the slot is initialized and no longer
            // tracked. Reading it moves the value out of the buffer.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// Removes and drops the last value, returning false if the DynamicArray was empty.
    pub fn remove_last(&mut self) -> bool {
        self.pop().is_some()
    }

    /// Inserts the provided value at `index`, shifting all following values one slot to the right.
    /// An `index` equal to the length appends.
    ///
    /// # Panics
    /// Panics if `index > len` or if growing fails.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..3).collect();
    /// arr.insert(1, 100);
    /// arr.insert(1, 200);
    /// arr.insert(5, 300);
    /// assert_eq!(&*arr, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at `index`, returning an [`Err`] rather than panicking. The
    /// DynamicArray is unchanged on failure.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        self.grow_if_full()?;

        // SAFETY: index <= len < cap, so both the source range [index, len) and the destination
        // range [index + 1, len + 1) are within the allocation. ptr::copy handles the overlap.
        unsafe {
            let slot = self.buf.slot(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the element at `index` and returns it, shifting all following values one slot to
    /// the left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.remove(1), 'e');
    /// assert_eq!(arr.remove(4), ' ');
    /// assert_eq!(arr, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index` and returns it, or returns an [`Err`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the slot is initialized. After reading it, the values in
        // [index + 1, len) are moved down by one, overwriting the now-logically-empty slot.
        let value = unsafe {
            let slot = self.buf.slot(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };
        self.len -= 1;
        Ok(value)
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
        self.check_index(index)?;
        Ok(mem::replace(&mut self.as_mut_slice()[index], new_value))
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
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<_> = ["a", "bb", "cc"].into_iter().collect();
    /// assert_eq!(arr.index_of_by(&"xx", |a, b| a.len() == b.len()), Some(1));
    /// ```
    pub fn index_of_by<F>(&self, item: &T, mut compare: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.iter().position(|element| compare(element, item))
    }

    /// Reverses the order of the elements in place, swapping from both ends toward the middle.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        let (mut front, mut back) = (0, self.len - 1);
        let slice = self.as_mut_slice();
        while front < back {
            slice.swap(front, back);
            front += 1;
            back -= 1;
        }
    }

    /// Drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first, so that a panicking drop can't lead to a double drop.
        self.len = 0;

        // SAFETY: The first len slots were initialized and are no longer tracked.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.slot(0), len));
        }
    }

    /// Consumes the DynamicArray, handing every element to `destroy` in index order before the
    /// storage is released.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<_> = (1..=3).collect();
    /// let mut seen = Vec::new();
    /// arr.destroy_with(|i| seen.push(i));
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn destroy_with<F: FnMut(T)>(mut self, mut destroy: F) {
        let len = self.len;
        self.len = 0;

        for i in 0..len {
            // SAFETY: All slots below the original len are initialized and each is read exactly
            // once. len is already 0, so dropping self afterwards only releases the buffer.
            destroy(unsafe { self.buf.slot(i).read() });
        }
    }

    /// Prints the DynamicArray to stdout as `[a, b, c]`, using `print_element` for each element.
    pub fn print_with<F: FnMut(&T)>(&self, print_element: F) {
        print_elements(self.iter(), print_element)
    }

    /// Returns the initialized portion of the DynamicArray as a slice.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: The first len slots are initialized, the pointer is nonnull and properly aligned
        // and the borrow of self prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.slot(0), self.len) }
    }

    /// Returns the initialized portion of the DynamicArray as a mutable slice.
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: The first len slots are initialized, the pointer is nonnull and properly aligned
        // and the mutable borrow of self makes this the only access for the lifetime of the slice.
        unsafe { slice::from_raw_parts_mut(self.buf.slot(0), self.len) }
    }

    /// Doubles the capacity if there is no room for one more element.
    pub(crate) fn grow_if_full(&mut self) -> Result<(), GrowthError> {
        if self.len < self.cap() {
            return Ok(());
        }

        let new_cap = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?;
        self.buf.try_realloc(new_cap)
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds { index, len: self.len })
        } else {
            Ok(())
        }
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Returns the index of the first element equal to `item`.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<_> = [5, 10, 15].into_iter().collect();
    /// assert_eq!(arr.index_of(&10), Some(1));
    /// assert_eq!(arr.index_of(&20), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.index_of_by(item, T::eq)
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = DynamicArray::with_cap(iter.size_hint().0);

        for item in iter {
            arr.push(item);
        }

        arr
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
        // Implicitly drop self.buf, which deallocates the storage.
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());

        for value in self.iter() {
            arr.push(value.clone());
        }

        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
