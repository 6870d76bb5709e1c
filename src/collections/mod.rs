//! Generic collection types which store elements of any type without ever inspecting them.
//!
//! # Purpose
//! These types cover the two basic ways of laying out a sequence, contiguously and as a chain of
//! nodes, along with the restricted-interface collections that are most commonly built on top of
//! them.
//!
//! # Method
//! Every collection owns its elements outright. Elements are moved in, and either moved back out
//! to the caller or dropped in place, depending on the method. [`DynamicArray`] additionally
//! implements [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which saves me from writing
//! some of the more repetitive functionality.
//!
//! [`DynamicArray`]: contiguous::DynamicArray

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
