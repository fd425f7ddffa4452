// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the registry: identities, ordinals, and per-entry metadata.

use core::fmt;

/// Stable identity of a registered child.
///
/// Unlike an [`Ordinal`], a `SectionId` does not change when siblings are
/// inserted, removed or hidden. Allocate one per child with
/// [`Descendants::allocate_id`](crate::Descendants::allocate_id), or wrap a
/// caller-supplied token with [`SectionId::from_raw`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(u64);

impl SectionId {
    /// Wrap a caller-supplied token.
    ///
    /// Callers mixing raw tokens with [`Descendants::allocate_id`](crate::Descendants::allocate_id)
    /// are responsible for keeping them disjoint.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The underlying token.
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Dense position of a child among its positioned siblings for one pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Ordinal(pub usize);

impl Ordinal {
    /// The first position.
    pub const FIRST: Self = Self(0);

    /// The position as a plain index.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Ordinal {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Metadata a child supplies when it registers.
///
/// `H` is an opaque handle the host can later use to act on the child, most
/// commonly a reference to the element that should receive focus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescendantMeta<H> {
    /// Whether navigation should skip this child.
    pub disabled: bool,
    /// Hidden children are registered but receive no position.
    pub hidden: bool,
    /// Host handle for this child.
    pub handle: H,
}

impl<H> DescendantMeta<H> {
    /// Enabled, visible metadata for `handle`.
    pub fn new(handle: H) -> Self {
        Self {
            disabled: false,
            hidden: false,
            handle,
        }
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the hidden flag.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// A registered child as seen by queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<H> {
    /// Stable identity.
    pub id: SectionId,
    /// Position for the current pass, or `None` when the child is hidden.
    pub ordinal: Option<Ordinal>,
    /// Whether navigation should skip this child.
    pub disabled: bool,
    /// Whether the child was hidden when it first registered in this pass.
    pub hidden: bool,
    /// Host handle, refreshed on every registration call.
    pub handle: H,
    /// Registry generation this entry was written in.
    pub generation: u32,
}
