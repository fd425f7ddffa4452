// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving keyboard focus across accordion triggers.
//!
//! Navigation only moves focus; it never opens or closes a section. The
//! navigator computes a [`FocusRequest`] and hands it to a caller-supplied
//! [`FocusMover`], so no platform focus API leaks into the core.
//!
//! Disabled sections are removed from the cycle entirely. Up/Down wrap at
//! the ends; a single selectable section wraps to itself.

use alloc::vec::Vec;

use understory_descendants::{Entry, Ordinal};

/// Navigation keys an accordion trigger responds to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Previous trigger, wrapping to the last.
    Up,
    /// Next trigger, wrapping to the first.
    Down,
    /// First trigger, or the previous one while Ctrl is held.
    PageUp,
    /// Last trigger, or the next one while Ctrl is held.
    PageDown,
    /// First trigger.
    Home,
    /// Last trigger.
    End,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` name to a navigation key.
    ///
    /// Returns `None` for every other key; such events should not be
    /// intercepted.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

/// Modifier keys held during a key press.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self { ctrl: false };
    /// Control held.
    pub const CTRL: Self = Self { ctrl: true };
}

/// Request to move input focus to a section's trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusRequest<H> {
    /// Ordinal of the target section.
    pub ordinal: Ordinal,
    /// Handle registered for the target's trigger.
    pub handle: H,
    /// Registry generation the target was read from.
    pub generation: u32,
}

/// Capability that moves input focus on behalf of the accordion.
pub trait FocusMover<H> {
    /// Move focus to the trigger described by `request`.
    fn move_focus(&mut self, request: FocusRequest<H>);
}

impl<H, F> FocusMover<H> for F
where
    F: FnMut(FocusRequest<H>),
{
    fn move_focus(&mut self, request: FocusRequest<H>) {
        self(request);
    }
}

#[derive(Copy, Clone)]
enum Step {
    Forward,
    Backward,
}

/// Compute where focus should go when `key` is pressed on the trigger at
/// `current`.
///
/// `entries` is a registry snapshot; only positioned, enabled entries are
/// candidates. `current` may be absent from the candidates (for example
/// when it is disabled), in which case Down lands on the first candidate and
/// Up on the last. Returns `None` when no candidate exists.
pub fn compute_target<'a, H>(
    key: NavKey,
    current: Option<Ordinal>,
    modifiers: Modifiers,
    entries: impl IntoIterator<Item = &'a Entry<H>>,
) -> Option<FocusRequest<H>>
where
    H: Clone + 'a,
{
    let mut selectable: Vec<(Ordinal, &Entry<H>)> = entries
        .into_iter()
        .filter(|e| !e.disabled)
        .filter_map(|e| e.ordinal.map(|o| (o, e)))
        .collect();
    if selectable.is_empty() {
        return None;
    }
    selectable.sort_by_key(|(ordinal, _)| *ordinal);

    let last = selectable.len() - 1;
    let origin = current.and_then(|c| selectable.iter().position(|(o, _)| *o == c));
    let advance = |step: Step| match (step, origin) {
        (Step::Forward, Some(pos)) if pos < last => pos + 1,
        (Step::Forward, _) => 0,
        (Step::Backward, Some(pos)) if pos > 0 => pos - 1,
        (Step::Backward, _) => last,
    };

    let target = match key {
        NavKey::Down => advance(Step::Forward),
        NavKey::Up => advance(Step::Backward),
        NavKey::PageDown if modifiers.ctrl => advance(Step::Forward),
        NavKey::PageUp if modifiers.ctrl => advance(Step::Backward),
        NavKey::PageUp | NavKey::Home => 0,
        NavKey::PageDown | NavKey::End => last,
    };

    let (ordinal, entry) = selectable[target];
    Some(FocusRequest {
        ordinal,
        handle: entry.handle.clone(),
        generation: entry.generation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_descendants::{DescendantMeta, Descendants};

    /// A registry of `n` sections whose handles equal their structural index.
    fn registry(n: usize, disabled: &[usize]) -> Descendants<usize> {
        let mut registry = Descendants::new();
        let ids: Vec<_> = (0..n).map(|_| registry.allocate_id()).collect();
        registry.reset();
        for (i, id) in ids.into_iter().enumerate() {
            registry.ordinal(id, DescendantMeta::new(i).disabled(disabled.contains(&i)));
        }
        registry
    }

    fn target(
        registry: &Descendants<usize>,
        key: NavKey,
        current: usize,
        modifiers: Modifiers,
    ) -> Option<usize> {
        compute_target(key, Some(Ordinal(current)), modifiers, registry.entries())
            .map(|request| request.handle)
    }

    #[test]
    fn arrows_skip_disabled_sections() {
        let registry = registry(5, &[1]);
        assert_eq!(target(&registry, NavKey::Down, 0, Modifiers::NONE), Some(2));
        assert_eq!(target(&registry, NavKey::Up, 2, Modifiers::NONE), Some(0));
    }

    #[test]
    fn arrows_wrap_at_the_ends() {
        let registry = registry(5, &[1, 3]);
        assert_eq!(target(&registry, NavKey::Down, 4, Modifiers::NONE), Some(0));
        assert_eq!(target(&registry, NavKey::Up, 0, Modifiers::NONE), Some(4));
        assert_eq!(target(&registry, NavKey::Down, 2, Modifiers::NONE), Some(4));
    }

    #[test]
    fn home_and_end() {
        let registry = registry(5, &[1, 3]);
        for current in 0..5 {
            assert_eq!(target(&registry, NavKey::Home, current, Modifiers::NONE), Some(0));
            assert_eq!(target(&registry, NavKey::End, current, Modifiers::NONE), Some(4));
        }
    }

    #[test]
    fn page_keys_jump_unless_ctrl_is_held() {
        let registry = registry(4, &[]);
        assert_eq!(target(&registry, NavKey::PageDown, 1, Modifiers::NONE), Some(3));
        assert_eq!(target(&registry, NavKey::PageUp, 2, Modifiers::NONE), Some(0));
        assert_eq!(target(&registry, NavKey::PageDown, 1, Modifiers::CTRL), Some(2));
        assert_eq!(target(&registry, NavKey::PageUp, 2, Modifiers::CTRL), Some(1));
        assert_eq!(target(&registry, NavKey::PageDown, 3, Modifiers::CTRL), Some(0));
        assert_eq!(target(&registry, NavKey::PageUp, 0, Modifiers::CTRL), Some(3));
    }

    #[test]
    fn single_selectable_section_wraps_to_itself() {
        let registry = registry(3, &[0, 2]);
        assert_eq!(target(&registry, NavKey::Down, 1, Modifiers::NONE), Some(1));
        assert_eq!(target(&registry, NavKey::Up, 1, Modifiers::NONE), Some(1));
    }

    #[test]
    fn fully_disabled_set_yields_nothing() {
        let disabled = registry(3, &[0, 1, 2]);
        for key in [NavKey::Up, NavKey::Down, NavKey::Home, NavKey::End] {
            assert_eq!(target(&disabled, key, 0, Modifiers::NONE), None);
        }
        let empty = registry(0, &[]);
        assert_eq!(target(&empty, NavKey::Down, 0, Modifiers::NONE), None);
    }

    #[test]
    fn origin_outside_the_cycle_uses_the_ends() {
        let registry = registry(4, &[1]);
        assert_eq!(target(&registry, NavKey::Down, 1, Modifiers::NONE), Some(0));
        assert_eq!(target(&registry, NavKey::Up, 1, Modifiers::NONE), Some(3));
        let request = compute_target(NavKey::Up, None, Modifiers::NONE, registry.entries());
        assert_eq!(request.map(|r| r.ordinal), Some(Ordinal(3)));
    }

    #[test]
    fn hidden_sections_are_not_targets() {
        let mut registry = Descendants::new();
        let ids: Vec<_> = (0..3).map(|_| registry.allocate_id()).collect();
        registry.reset();
        registry.ordinal(ids[0], DescendantMeta::new('a'));
        registry.ordinal(ids[1], DescendantMeta::new('b').hidden(true));
        registry.ordinal(ids[2], DescendantMeta::new('c'));
        let request =
            compute_target(NavKey::Down, Some(Ordinal(0)), Modifiers::NONE, registry.entries());
        assert_eq!(
            request,
            Some(FocusRequest {
                ordinal: Ordinal(1),
                handle: 'c',
                generation: registry.generation(),
            })
        );
    }

    #[test]
    fn key_names() {
        assert_eq!(NavKey::from_key_name("ArrowDown"), Some(NavKey::Down));
        assert_eq!(NavKey::from_key_name("End"), Some(NavKey::End));
        assert_eq!(NavKey::from_key_name("Enter"), None);
        assert_eq!(NavKey::from_key_name("ArrowLeft"), None);
    }
}
