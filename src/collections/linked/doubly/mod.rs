//! A module containing [`DoublyLinkedList`] and its iterators.
//!
//! [`DoublyLinkedList`] is also re-exported under the parent module.

mod doubly_linked_list;
mod iter;
mod node;

pub use doubly_linked_list::*;
pub use iter::*;
pub(crate) use node::*;
