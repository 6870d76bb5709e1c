use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::util::error::AllocFailure;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with the global allocator directly so that a failed allocation can be
// reported rather than aborting, but they are always released through Box<T>, which moves the
// value back off of the heap. Both use Layout::new::<Node<T>>().

pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodePtr always refers to a live node owned by a list. The caller ties the
        // returned lifetime to a borrow of that list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As above, and the caller ties the lifetime to a mutable borrow of the list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: A NodePtr always refers to a live node.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: A NodePtr always refers to a live node and links are only modified while the
        // owning list is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Moves `node` onto the heap, returning an [`Err`] rather than aborting if the allocator
    /// fails. On failure, `node` (and the value within it) is dropped.
    pub fn try_from_node(node: Node<T>) -> Result<NodePtr<T>, AllocFailure> {
        let layout = Layout::new::<Node<T>>();

        // SAFETY: Node<T> always contains a link, so the layout has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) }.cast::<Node<T>>();

        match NonNull::new(raw) {
            Some(ptr) => {
                // SAFETY: ptr has just been allocated with the layout of Node<T>.
                unsafe { ptr.write(node) };
                Ok(NodePtr(ptr))
            },
            None => Err(AllocFailure { size: layout.size() }),
        }
    }

    /// Moves the node back off of the heap, releasing its allocation.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was allocated with the global allocator and Node<T>'s layout. The
        // caller must have already unlinked it, so this is the only remaining NodePtr to it.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// Drops the node and its value in place, releasing its allocation.
    ///
    /// # Safety
    /// No other NodePtr to this node may be used afterwards.
    pub unsafe fn drop_node(self) {
        drop(self.take_node());
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
