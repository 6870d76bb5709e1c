//! Linked collection types: [`SinglyLinkedList`], which only links forward and keeps a pointer to
//! its tail for appending, and [`DoublyLinkedList`], which links in both directions.
//!
//! Both lists share the same shape: a list is either empty, or holds a non-zero length along with
//! its head and tail nodes. This makes "empty if and only if there is no head and no tail"
//! impossible to violate.

pub mod doubly;
pub mod singly;

mod length;

pub(crate) use length::*;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
