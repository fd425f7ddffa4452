// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped lookup of accordion instances by generational id.
//!
//! Hosts that cannot thread an [`Accordion`] reference down to every section
//! can keep their accordions in an [`AccordionScope`] and hand sections a
//! [`SectionKey`] instead. Operations addressed to a removed accordion, or to
//! a section that did not register in the current pass, fail with an
//! [`AccordionError`] rather than acting on stale state.

use alloc::vec::Vec;

use understory_descendants::{Ordinal, SectionId};

use crate::accordion::Accordion;
use crate::config::AccordionOptions;
use crate::error::AccordionError;
use crate::facade::{SectionContext, SectionProps};
use crate::nav::{FocusMover, Modifiers, NavKey};

/// Identifier of an accordion in an [`AccordionScope`] (generational).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccordionId {
    idx: usize,
    generation: u32,
}

impl AccordionId {
    const fn new(idx: usize, generation: u32) -> Self {
        Self { idx, generation }
    }
}

/// Address of a section within a scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionKey {
    /// Owning accordion.
    pub accordion: AccordionId,
    /// Section within it.
    pub section: SectionId,
}

/// A set of live accordions addressed by [`AccordionId`].
///
/// Slots are reused after [`AccordionScope::remove`]; the generation stored
/// in each id makes old ids fail lookups instead of reaching the new
/// occupant.
pub struct AccordionScope<H> {
    /// slots
    slots: Vec<Option<Accordion<H>>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<H> core::fmt::Debug for AccordionScope<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccordionScope")
            .field("slots_total", &self.slots.len())
            .field("live", &self.len())
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<H> Default for AccordionScope<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> AccordionScope<H> {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Create an accordion and return its id.
    pub fn insert(&mut self, options: AccordionOptions) -> AccordionId {
        let accordion = Accordion::new(options);
        if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(accordion);
            AccordionId::new(idx, self.generations[idx])
        } else {
            let idx = self.slots.len();
            self.slots.push(Some(accordion));
            self.generations.push(1);
            AccordionId::new(idx, 1)
        }
    }

    /// Remove an accordion. Its id, and every [`SectionKey`] built from it,
    /// stops resolving.
    pub fn remove(&mut self, id: AccordionId) -> Option<Accordion<H>> {
        if !self.contains(id) {
            return None;
        }
        let accordion = self.slots[id.idx].take();
        self.generations[id.idx] = self.generations[id.idx].wrapping_add(1);
        self.free_list.push(id.idx);
        accordion
    }

    /// Whether `id` refers to a live accordion.
    pub fn contains(&self, id: AccordionId) -> bool {
        self.generations.get(id.idx) == Some(&id.generation)
            && self.slots.get(id.idx).is_some_and(Option::is_some)
    }

    /// Look up a live accordion.
    pub fn get(&self, id: AccordionId) -> Result<&Accordion<H>, AccordionError> {
        if !self.contains(id) {
            return Err(AccordionError::NoAccordion(id));
        }
        self.slots[id.idx]
            .as_ref()
            .ok_or(AccordionError::NoAccordion(id))
    }

    /// Look up a live accordion mutably.
    pub fn get_mut(&mut self, id: AccordionId) -> Result<&mut Accordion<H>, AccordionError> {
        if !self.contains(id) {
            return Err(AccordionError::NoAccordion(id));
        }
        self.slots[id.idx]
            .as_mut()
            .ok_or(AccordionError::NoAccordion(id))
    }

    /// Allocate a section identity in `accordion` and return its key.
    pub fn allocate_section(&mut self, accordion: AccordionId) -> Result<SectionKey, AccordionError> {
        let section = self.get_mut(accordion)?.allocate_section_id();
        Ok(SectionKey { accordion, section })
    }

    /// See [`Accordion::register_section`].
    pub fn register_section(
        &mut self,
        key: SectionKey,
        props: SectionProps,
        handle: H,
    ) -> Result<SectionContext, AccordionError> {
        Ok(self
            .get_mut(key.accordion)?
            .register_section(key.section, props, handle))
    }

    /// See [`Accordion::section`].
    pub fn section(&self, key: SectionKey) -> Result<SectionContext, AccordionError> {
        self.get(key.accordion)?.section(key.section)
    }

    /// See [`Accordion::click`].
    pub fn click(
        &mut self,
        key: SectionKey,
        focus: &mut impl FocusMover<H>,
    ) -> Result<(), AccordionError>
    where
        H: Clone,
    {
        self.get_mut(key.accordion)?.click(key.section, focus)
    }

    /// See [`Accordion::key_down`].
    pub fn key_down(
        &self,
        key: SectionKey,
        nav: NavKey,
        modifiers: Modifiers,
        focus: &mut impl FocusMover<H>,
    ) -> Result<Option<Ordinal>, AccordionError>
    where
        H: Clone,
    {
        self.get(key.accordion)?
            .key_down(key.section, nav, modifiers, focus)
    }

    /// Number of live accordions.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether no accordion is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::SectionState;
    use crate::nav::FocusRequest;

    fn ignore(_: FocusRequest<u8>) {}

    #[test]
    fn sections_resolve_through_their_accordion() {
        let mut scope: AccordionScope<u8> = AccordionScope::new();
        let id = scope.insert(AccordionOptions::new().collapsible(true));
        let keys = [
            scope.allocate_section(id).unwrap(),
            scope.allocate_section(id).unwrap(),
        ];
        scope.get_mut(id).unwrap().begin_pass();
        for (i, key) in keys.iter().enumerate() {
            scope
                .register_section(*key, SectionProps::default(), i as u8)
                .unwrap();
        }
        scope.click(keys[1], &mut ignore).unwrap();
        assert_eq!(scope.section(keys[1]).unwrap().state, SectionState::Open);

        let moved = scope
            .key_down(keys[1], NavKey::Down, Modifiers::NONE, &mut ignore)
            .unwrap();
        assert_eq!(moved, Some(Ordinal(0)));
    }

    #[test]
    fn removed_accordions_are_usage_errors() {
        let mut scope: AccordionScope<u8> = AccordionScope::new();
        let id = scope.insert(AccordionOptions::new());
        let key = scope.allocate_section(id).unwrap();
        assert!(scope.remove(id).is_some());
        assert!(scope.is_empty());
        assert_eq!(scope.section(key), Err(AccordionError::NoAccordion(id)));
        assert_eq!(scope.click(key, &mut ignore), Err(AccordionError::NoAccordion(id)));
        assert!(scope.remove(id).is_none());

        // The slot is reused under a new generation; the old id stays dead.
        let reused = scope.insert(AccordionOptions::new());
        assert_ne!(reused, id);
        assert!(scope.get(id).is_err());
        assert!(scope.get(reused).is_ok());
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn unregistered_sections_are_usage_errors() {
        let mut scope: AccordionScope<u8> = AccordionScope::new();
        let id = scope.insert(AccordionOptions::new());
        let key = scope.allocate_section(id).unwrap();
        assert_eq!(
            scope.section(key),
            Err(AccordionError::NoSection(key.section))
        );
    }
}
