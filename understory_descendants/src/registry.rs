// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The registry itself: reset, registration, and ordered queries.

use alloc::vec::Vec;
use hashbrown::HashMap;
use hashbrown::hash_map::Entry as MapEntry;

use crate::types::{DescendantMeta, Entry, Ordinal, SectionId};

/// Ordinal index over the children of one composite widget.
///
/// The registry is rebuilt from scratch on every pass: [`Descendants::reset`]
/// drops all entries and restarts the counter, then each live child calls
/// [`Descendants::ordinal`] once (or more) in structural order. Nothing from a
/// previous pass survives a reset, so ordinals never go stale silently.
///
/// A freshly constructed registry behaves as if `reset` had just been called,
/// except that its generation is `0`.
pub struct Descendants<H> {
    entries: HashMap<SectionId, Entry<H>>,
    /// Positioned ids in ordinal order.
    order: Vec<SectionId>,
    counter: usize,
    generation: u32,
    next_id: u64,
}

impl<H> core::fmt::Debug for Descendants<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let hidden = self.entries.values().filter(|e| e.ordinal.is_none()).count();
        let disabled = self.entries.values().filter(|e| e.disabled).count();
        f.debug_struct("Descendants")
            .field("registered", &self.entries.len())
            .field("positioned", &self.order.len())
            .field("hidden", &hidden)
            .field("disabled", &disabled)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<H> Default for Descendants<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Descendants<H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            counter: 0,
            generation: 0,
            next_id: 0,
        }
    }

    /// Hand out a fresh [`SectionId`].
    ///
    /// Ids are never reused by the same registry, including across resets.
    pub fn allocate_id(&mut self) -> SectionId {
        let id = SectionId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// Start a new pass.
    ///
    /// Clears every entry, restarts the ordinal counter at zero, and bumps the
    /// generation. Call this once per traversal of the child tree, before any
    /// child registers.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.counter = 0;
        self.generation = self.generation.wrapping_add(1);
        tracing::trace!(generation = self.generation, "descendants reset");
    }

    /// Register `id` for the current pass and return its position.
    ///
    /// The first call for `id` in a pass assigns the next free ordinal, or
    /// `None` if `meta.hidden` is set (hidden children do not consume a
    /// position). Later calls in the same pass return the ordinal assigned by
    /// the first call and only refresh the `disabled` flag and the handle.
    pub fn ordinal(&mut self, id: SectionId, meta: DescendantMeta<H>) -> Option<Ordinal> {
        match self.entries.entry(id) {
            MapEntry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.disabled = meta.disabled;
                entry.handle = meta.handle;
                entry.ordinal
            }
            MapEntry::Vacant(vacant) => {
                let ordinal = if meta.hidden {
                    None
                } else {
                    let ordinal = Ordinal(self.counter);
                    self.counter += 1;
                    self.order.push(id);
                    Some(ordinal)
                };
                tracing::trace!(
                    id = id.to_raw(),
                    ordinal = ordinal.map(Ordinal::get),
                    disabled = meta.disabled,
                    generation = self.generation,
                    "descendant registered"
                );
                vacant.insert(Entry {
                    id,
                    ordinal,
                    disabled: meta.disabled,
                    hidden: meta.hidden,
                    handle: meta.handle,
                    generation: self.generation,
                });
                ordinal
            }
        }
    }

    /// Unregister `id` without starting a new pass.
    ///
    /// The remaining children keep their ordinals until the next
    /// [`Descendants::reset`], so the sequence may contain a gap in between.
    pub fn remove(&mut self, id: SectionId) -> Option<Entry<H>> {
        let removed = self.entries.remove(&id)?;
        if removed.ordinal.is_some() {
            self.order.retain(|other| *other != id);
        }
        tracing::trace!(id = id.to_raw(), "descendant removed");
        Some(removed)
    }

    /// Positioned entries in ascending ordinal order.
    ///
    /// Hidden entries are not part of the sequence; look them up with
    /// [`Descendants::get`].
    pub fn entries(&self) -> impl Iterator<Item = &Entry<H>> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Look up the entry registered for `id` in the current pass.
    pub fn get(&self, id: SectionId) -> Option<&Entry<H>> {
        self.entries.get(&id)
    }

    /// Look up the entry holding `ordinal` in the current pass.
    pub fn by_ordinal(&self, ordinal: Ordinal) -> Option<&Entry<H>> {
        self.entries().find(|e| e.ordinal == Some(ordinal))
    }

    /// Whether `id` registered in the current pass.
    pub fn contains(&self, id: SectionId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of children registered in the current pass, hidden ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing registered in the current pass.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current generation; bumped by every [`Descendants::reset`].
    pub fn generation(&self) -> u32 {
        self.generation
    }
}
