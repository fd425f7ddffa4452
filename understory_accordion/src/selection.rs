// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which sections are open, and how a toggle changes that.
//!
//! Every section is a two-state machine (open or collapsed). The accordion
//! composes them under one of two policies:
//!
//! - **Exclusive** ([`OpenSelection::Single`]): at most one section open.
//!   Toggling another section switches to it. Toggling the open section
//!   closes it only when the accordion is collapsible.
//! - **Multiple** ([`OpenSelection::Multiple`]): any subset open. Toggling a
//!   closed section adds it. Toggling an open section removes it unless it is
//!   the last one open and the accordion is not collapsible.
//!
//! ```rust
//! use understory_accordion::{AccordionConfig, OpenSelection, Ordinal, initial_selection, transition};
//!
//! let config = AccordionConfig::default();
//! let open = initial_selection(&config, None);
//! assert_eq!(open, OpenSelection::Single(Some(Ordinal(0))));
//!
//! let open = transition(&open, Ordinal(1), &config);
//! assert_eq!(open, OpenSelection::Single(Some(Ordinal(1))));
//!
//! // Not collapsible: the open section stays open.
//! assert_eq!(transition(&open, Ordinal(1), &config), open);
//! ```

use smallvec::SmallVec;
use understory_descendants::Ordinal;

use crate::config::{AccordionConfig, AccordionIndex};

/// The open section(s) of an accordion.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpenSelection {
    /// Exclusive mode. `None` means nothing is open.
    Single(Option<Ordinal>),
    /// Multiple mode. Deduplicated and sorted ascending.
    Multiple(SmallVec<[Ordinal; 4]>),
}

impl OpenSelection {
    /// Nothing open, in the shape `multiple` calls for.
    pub fn none(multiple: bool) -> Self {
        if multiple {
            Self::Multiple(SmallVec::new())
        } else {
            Self::Single(None)
        }
    }

    /// A multiple-mode selection holding `ordinals`, sorted and deduplicated.
    pub fn multiple(ordinals: impl IntoIterator<Item = Ordinal>) -> Self {
        let mut open: SmallVec<[Ordinal; 4]> = ordinals.into_iter().collect();
        open.sort_unstable();
        open.dedup();
        Self::Multiple(open)
    }

    /// Whether `ordinal` is open.
    pub fn is_open(&self, ordinal: Ordinal) -> bool {
        self.open_ordinals().contains(&ordinal)
    }

    /// The open ordinals in ascending order.
    pub fn open_ordinals(&self) -> &[Ordinal] {
        match self {
            Self::Single(open) => open.as_slice(),
            Self::Multiple(open) => open.as_slice(),
        }
    }

    /// Number of open sections.
    pub fn len(&self) -> usize {
        self.open_ordinals().len()
    }

    /// Whether nothing is open.
    pub fn is_empty(&self) -> bool {
        self.open_ordinals().is_empty()
    }

    /// Whether this is a multiple-mode selection.
    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Convert to the shape `multiple` calls for.
    ///
    /// Going from multiple to exclusive keeps the lowest open ordinal.
    pub fn coerce(self, multiple: bool) -> Self {
        match (self, multiple) {
            (Self::Single(open), true) => Self::multiple(open),
            (Self::Multiple(open), false) => Self::Single(open.first().copied()),
            (selection, _) => selection,
        }
    }
}

impl From<&AccordionIndex> for OpenSelection {
    /// Shape-preserving conversion: a scalar becomes exclusive, a list multiple.
    fn from(index: &AccordionIndex) -> Self {
        match index {
            AccordionIndex::One(ordinal) => Self::Single(Some(*ordinal)),
            AccordionIndex::Many(ordinals) => Self::multiple(ordinals.iter().copied()),
        }
    }
}

/// Resolve the selection an uncontrolled accordion starts with.
///
/// - With a `default_index`, coerce it to `config.multiple`: a scalar is
///   wrapped into a set, a list in exclusive mode keeps its first element
///   (ordinal 0 when the list is empty).
/// - Otherwise a collapsible accordion starts with nothing open.
/// - Otherwise the first section starts open.
pub fn initial_selection(
    config: &AccordionConfig,
    default_index: Option<&AccordionIndex>,
) -> OpenSelection {
    match (default_index, config.multiple) {
        (Some(AccordionIndex::One(ordinal)), true) => OpenSelection::multiple([*ordinal]),
        (Some(AccordionIndex::Many(ordinals)), true) => {
            OpenSelection::multiple(ordinals.iter().copied())
        }
        (Some(AccordionIndex::One(ordinal)), false) => OpenSelection::Single(Some(*ordinal)),
        (Some(AccordionIndex::Many(ordinals)), false) => {
            OpenSelection::Single(Some(ordinals.first().copied().unwrap_or(Ordinal::FIRST)))
        }
        (None, multiple) if config.collapsible => OpenSelection::none(multiple),
        (None, true) => OpenSelection::multiple([Ordinal::FIRST]),
        (None, false) => OpenSelection::Single(Some(Ordinal::FIRST)),
    }
}

/// Compute the selection after the section at `toggled` is toggled.
///
/// `current` is coerced to `config.multiple` first. Any ordinal is accepted,
/// whether or not a section currently holds it.
pub fn transition(
    current: &OpenSelection,
    toggled: Ordinal,
    config: &AccordionConfig,
) -> OpenSelection {
    match current.clone().coerce(config.multiple) {
        OpenSelection::Multiple(mut open) => {
            match open.binary_search(&toggled) {
                Ok(pos) => {
                    // Keep the last open section unless collapsing to none is allowed.
                    if open.len() > 1 || config.collapsible {
                        open.remove(pos);
                    }
                }
                Err(pos) => open.insert(pos, toggled),
            }
            OpenSelection::Multiple(open)
        }
        OpenSelection::Single(open) => {
            if open == Some(toggled) && config.collapsible {
                OpenSelection::Single(None)
            } else {
                OpenSelection::Single(Some(toggled))
            }
        }
    }
}
