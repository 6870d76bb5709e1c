//! Contiguous collection types. Primarily revolves around [`DynamicArray`], which is backed by a
//! [`RawBuffer`] of uninitialized slots.

pub mod buffer;
pub mod dynamic_array;

#[doc(inline)]
pub use buffer::RawBuffer;
#[doc(inline)]
pub use dynamic_array::DynamicArray;
