// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Descendants: per-pass ordinal indexing for dynamic children.
//!
//! Composite widgets (accordions, tab lists, menus, listboxes) need to know the
//! position of each child among its siblings, even though children mount,
//! unmount, hide and reorder freely. This crate provides a small registry that
//! hands out those positions.
//!
//! - Each child owns a stable [`SectionId`] that survives across passes.
//! - Once per traversal of the child tree the host calls [`Descendants::reset`].
//! - During the traversal every live child calls [`Descendants::ordinal`] in
//!   structural order and receives a dense [`Ordinal`] (`0..n`).
//! - Hidden children receive `None` and do not consume a position.
//! - [`Descendants::entries`] yields the positioned children in ordinal order,
//!   together with the per-child metadata ([`DescendantMeta`]) that navigation
//!   policies consult (disabled state, focus handle).
//!
//! The registry never reorders anything itself: ordinals reflect the order of
//! first registration within a pass, so the host must register children in
//! document order for the ordinals to be meaningful.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_descendants::{DescendantMeta, Descendants, Ordinal};
//!
//! let mut registry: Descendants<&str> = Descendants::new();
//! let a = registry.allocate_id();
//! let b = registry.allocate_id();
//! let c = registry.allocate_id();
//!
//! registry.reset();
//! assert_eq!(registry.ordinal(a, DescendantMeta::new("a")), Some(Ordinal(0)));
//! assert_eq!(registry.ordinal(b, DescendantMeta::new("b").hidden(true)), None);
//! assert_eq!(registry.ordinal(c, DescendantMeta::new("c")), Some(Ordinal(1)));
//!
//! // Registering again in the same pass is idempotent.
//! assert_eq!(registry.ordinal(a, DescendantMeta::new("a")), Some(Ordinal(0)));
//!
//! let handles: Vec<_> = registry.entries().map(|e| e.handle).collect();
//! assert_eq!(handles, ["a", "c"]);
//! ```
//!
//! ## Generations
//!
//! Every [`Descendants::reset`] bumps a generation counter and every [`Entry`]
//! is stamped with the generation it was written in. Hosts can carry the
//! generation alongside anything derived from the registry (for example a
//! pending focus request) and drop it once a newer pass has started.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod registry;
mod types;

pub use registry::Descendants;
pub use types::{DescendantMeta, Entry, Ordinal, SectionId};
