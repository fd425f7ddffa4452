// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options and the per-instance configuration derived from them.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use understory_descendants::Ordinal;

/// Caller-facing index value: a single ordinal or a list of ordinals.
///
/// Used for both [`AccordionOptions::default_index`] and
/// [`AccordionOptions::index`]. The accordion coerces it to match
/// [`AccordionConfig::multiple`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccordionIndex {
    /// One ordinal.
    One(Ordinal),
    /// Any number of ordinals.
    Many(Vec<Ordinal>),
}

impl From<Ordinal> for AccordionIndex {
    fn from(value: Ordinal) -> Self {
        Self::One(value)
    }
}

impl From<usize> for AccordionIndex {
    fn from(value: usize) -> Self {
        Self::One(Ordinal(value))
    }
}

impl From<Vec<Ordinal>> for AccordionIndex {
    fn from(value: Vec<Ordinal>) -> Self {
        Self::Many(value)
    }
}

impl From<Vec<usize>> for AccordionIndex {
    fn from(value: Vec<usize>) -> Self {
        Self::Many(value.into_iter().map(Ordinal).collect())
    }
}

impl<const N: usize> From<[usize; N]> for AccordionIndex {
    fn from(value: [usize; N]) -> Self {
        Self::Many(value.into_iter().map(Ordinal).collect())
    }
}

/// Immutable behavior flags for one accordion instance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AccordionConfig {
    /// Allow more than one section open at a time.
    pub multiple: bool,
    /// Allow the last open section to close, leaving nothing open.
    pub collapsible: bool,
    /// Ignore toggles entirely.
    pub read_only: bool,
    /// Whether the instance was constructed with an externally owned index.
    pub controlled: bool,
}

/// Callback receiving the toggled ordinal of a controlled accordion.
pub type ChangeHandler = Box<dyn FnMut(Ordinal)>;

/// Options for [`Accordion::new`](crate::Accordion::new).
///
/// ```rust
/// use understory_accordion::{AccordionOptions, AccordionConfig};
///
/// let options = AccordionOptions::new()
///     .multiple(true)
///     .collapsible(true)
///     .default_index([0, 2]);
/// assert_eq!(
///     options.config(),
///     AccordionConfig { multiple: true, collapsible: true, read_only: false, controlled: false },
/// );
/// ```
#[derive(Default)]
pub struct AccordionOptions {
    /// Prefix for generated element ids. A process-unique one is generated when absent.
    pub id: Option<String>,
    /// Initially open section(s) of an uncontrolled accordion.
    pub default_index: Option<AccordionIndex>,
    /// Externally owned open section(s). Presence makes the accordion controlled.
    pub index: Option<AccordionIndex>,
    /// Notified with the toggled ordinal when a controlled accordion is toggled.
    pub on_change: Option<ChangeHandler>,
    /// See [`AccordionConfig::multiple`].
    pub multiple: bool,
    /// See [`AccordionConfig::read_only`].
    pub read_only: bool,
    /// See [`AccordionConfig::collapsible`].
    pub collapsible: bool,
}

impl core::fmt::Debug for AccordionOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccordionOptions")
            .field("id", &self.id)
            .field("default_index", &self.default_index)
            .field("index", &self.index)
            .field("on_change", &self.on_change.is_some())
            .field("multiple", &self.multiple)
            .field("read_only", &self.read_only)
            .field("collapsible", &self.collapsible)
            .finish()
    }
}

impl AccordionOptions {
    /// Options with every flag off and no index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id prefix.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the initially open section(s).
    pub fn default_index(mut self, index: impl Into<AccordionIndex>) -> Self {
        self.default_index = Some(index.into());
        self
    }

    /// Hand ownership of the open section(s) to the caller.
    pub fn index(mut self, index: impl Into<AccordionIndex>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Set the change callback.
    pub fn on_change(mut self, on_change: impl FnMut(Ordinal) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Set [`AccordionConfig::multiple`].
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Set [`AccordionConfig::read_only`].
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Set [`AccordionConfig::collapsible`].
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// The configuration these options produce.
    pub fn config(&self) -> AccordionConfig {
        AccordionConfig {
            multiple: self.multiple,
            collapsible: self.collapsible,
            read_only: self.read_only,
            controlled: self.index.is_some(),
        }
    }
}
