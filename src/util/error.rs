//! Error types shared by all collections in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the valid range for the operation.
///
/// `len` is the length of the collection at the time of the call, the exact bound depends on the
/// operation (`index >= len` for lookups and removal, `index > len` for insertion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection when the index was requested.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The requested capacity can't be represented as a valid memory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The global allocator returned a null pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocFailure {
    /// The size of the failed allocation in bytes.
    pub size: usize,
}

impl Display for AllocFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to allocate {} bytes!", self.size)
    }
}

impl Error for AllocFailure {}

/// An error produced while acquiring more storage for a collection. The collection is left as it
/// was before the failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum GrowthError {
    /// The doubled capacity doesn't fit in a valid layout.
    CapacityOverflow(CapacityOverflow),
    /// The allocator couldn't provide the larger block.
    AllocFailure(AllocFailure),
}

/// An error produced by any operation that adds an element to a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InsertError {
    /// The insertion index was greater than the length.
    IndexOutOfBounds(IndexOutOfBounds),
    /// The collection can't hold another element.
    CapacityOverflow(CapacityOverflow),
    /// Storage for the new element couldn't be allocated.
    AllocFailure(AllocFailure),
}

impl From<GrowthError> for InsertError {
    fn from(value: GrowthError) -> Self {
        match value {
            GrowthError::CapacityOverflow(err) => InsertError::CapacityOverflow(err),
            GrowthError::AllocFailure(err) => InsertError::AllocFailure(err),
        }
    }
}
