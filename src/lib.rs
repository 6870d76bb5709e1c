//! This crate provides a small set of generic, owning containers: a growable array, singly and
//! doubly linked lists, and a stack and queue built on top of them.
//!
//! # Purpose
//! Writing these data structures by hand is a good way to properly understand them, along with the
//! raw allocation, pointer and iterator machinery underneath. The crate isn't intended to replace
//! [`std::collections`], but it is written to a level where it could be used in practice.
//!
//! # Ownership
//! Containers are generic over their element type and own their elements. Where a method removes
//! an element, it either returns it to the caller (`pop`, `remove`, `replace`, `dequeue`) or drops
//! it in place (`remove_last`, `delete`, `set`). Dropping a container drops every element it still
//! holds, and `destroy_with` can be used instead when a teardown needs to do more than that.
//!
//! # Error Handling
//! Specifically for collections, it is more ergonomic for methods to panic in some cases, because
//! users don't want to be forced to handle an error every time they invoke a method. Because of
//! this, every fallible method comes in two forms: `try_*`, which returns a [`Result`], and a plain
//! form which panics with the error's message. Lookups return an [`Option`] instead. A failed
//! operation never leaves a collection partially modified.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error).
//!
//! # Features
//! Each group of collections sits behind a cargo feature: `contiguous`, `linked` and `adapters`
//! (which requires the other two). `collections-all` enables everything and is on by default.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. Nothing else is pulled in, and none of the collections are built on [`Vec`].

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
