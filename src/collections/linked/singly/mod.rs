//! A module containing [`SinglyLinkedList`] and its iterators.
//!
//! [`SinglyLinkedList`] is also re-exported under the parent module.

mod iter;
mod node;
mod singly_linked_list;
mod tests;

pub use iter::*;
pub(crate) use node::*;
pub use singly_linked_list::*;
