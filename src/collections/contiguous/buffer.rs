use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::util::error::{AllocFailure, CapacityOverflow, GrowthError};

/// An owned heap allocation with room for exactly `cap` values of `T`, none of which are tracked
/// as initialized.
///
/// A RawBuffer never reads, writes or drops the values in its slots. The owner is responsible for
/// knowing which slots are initialized and dropping them before the buffer itself is dropped.
/// Dropping a RawBuffer only releases the allocation.
///
/// Reallocation is fallible: if the allocator can't provide the new block, the old allocation and
/// all values within it are left untouched.
pub struct RawBuffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates a RawBuffer with capacity 0, without allocating.
    pub const fn new() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a RawBuffer with exactly `cap` slots.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout for `cap` values would exceed [`isize::MAX`]
    /// bytes, or [`AllocFailure`] if the allocator returns null.
    pub fn try_with_cap(cap: usize) -> Result<RawBuffer<T>, GrowthError> {
        let mut buf = RawBuffer::new();
        buf.try_realloc(cap)?;
        Ok(buf)
    }

    /// Returns the number of slots in the RawBuffer.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than or equal to the capacity. A pointer to `index == cap` may only be
    /// used as the end of a range, never read or written.
    pub const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees that index is within (or one past the end of) the
        // allocation, and the allocation can't be larger than isize::MAX bytes.
        unsafe { self.ptr.as_ptr().cast::<T>().add(index) }
    }

    /// Replaces the allocation with one holding `new_cap` slots, moving the first
    /// `min(cap, new_cap)` slots bitwise. Values in slots beyond `new_cap` are not dropped.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] or [`AllocFailure`]. In either case self is unchanged.
    pub fn try_realloc(&mut self, new_cap: usize) -> Result<(), GrowthError> {
        let old_layout = Self::make_layout(self.cap)?;
        let new_layout = Self::make_layout(new_cap)?;

        if old_layout.size() == 0 && new_layout.size() == 0 {
            // Covers zero-sized types and zero capacity, where no memory is ever held.
            self.cap = new_cap;
            return Ok(());
        }

        let raw = if old_layout.size() == 0 {
            // SAFETY: new_layout has a non-zero size.
            unsafe { alloc::alloc(new_layout) }
        } else if new_layout.size() == 0 {
            // SAFETY: ptr was allocated by the global allocator with old_layout, which is
            // non-zero.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
            self.ptr = NonNull::dangling();
            self.cap = new_cap;
            return Ok(());
        } else {
            // SAFETY: ptr was allocated by the global allocator with old_layout, both sizes are
            // non-zero and new_layout.size() has been checked to not overflow isize::MAX. On
            // failure, realloc leaves the original block valid.
            unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
        };

        match NonNull::new(raw.cast::<MaybeUninit<T>>()) {
            Some(ptr) => {
                self.ptr = ptr;
                self.cap = new_cap;
                Ok(())
            },
            None => Err(AllocFailure { size: new_layout.size() }.into()),
        }
    }

    /// A helper function to create a [`Layout`] for `cap` values of `T`.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        // The layout was valid when the current capacity was set, so this can't fail.
        if let Ok(layout) = Self::make_layout(self.cap) {
            if layout.size() != 0 {
                // SAFETY: ptr was allocated by the global allocator with this layout, and the
                // slots hold no values that the buffer is responsible for.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
            }
        }
    }
}

// SAFETY: RawBuffer uniquely owns its allocation, so it can be sent when T can.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: RawBuffer provides no interior mutability through a shared reference.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::alloc::ZeroSizedType;

    #[test]
    fn test_realloc_preserves_slots() {
        let mut buf = RawBuffer::<usize>::try_with_cap(4).unwrap();
        for i in 0..4 {
            // SAFETY: i < cap.
            unsafe { buf.slot(i).write(i * 10) };
        }

        buf.try_realloc(8).unwrap();
        assert_eq!(buf.cap(), 8);
        for i in 0..4 {
            // SAFETY: Slots 0..4 were initialized above and moved by the reallocation.
            assert_eq!(unsafe { buf.slot(i).read() }, i * 10, "Slots should survive growth.");
        }
    }

    #[test]
    fn test_overflow_leaves_buffer_untouched() {
        let mut buf = RawBuffer::<u64>::try_with_cap(2).unwrap();
        let old_ptr = buf.ptr;

        let err = buf.try_realloc(usize::MAX).unwrap_err();
        assert!(err.is_capacity_overflow());
        assert_eq!(buf.cap(), 2, "Capacity shouldn't change after a failed reallocation.");
        assert_eq!(buf.ptr, old_ptr, "Pointer shouldn't change after a failed reallocation.");
    }

    #[test]
    fn test_zst_never_allocates() {
        let mut buf = RawBuffer::<ZeroSizedType>::try_with_cap(10).unwrap();
        let old_ptr = buf.ptr;
        buf.try_realloc(1000).unwrap();
        assert_eq!(buf.cap(), 1000);
        assert_eq!(buf.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
    }
}
