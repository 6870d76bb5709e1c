//! Restricted-interface collections built on top of the general-purpose ones: [`Stack`] over a
//! [`DynamicArray`](crate::collections::contiguous::DynamicArray) and [`Queue`] over a
//! [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList).
//!
//! Neither type exposes indexing. They only forward to the few methods of their backing collection
//! which keep the access order intact.

mod queue;
mod stack;
mod tests;

pub use queue::*;
pub use stack::*;
