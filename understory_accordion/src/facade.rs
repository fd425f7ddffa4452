// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation values derived from accordion state.
//!
//! The accordion does not render anything. For each registered section it
//! produces a [`SectionContext`], from which a host derives the attributes of
//! the item wrapper, the trigger, and the panel. Attribute names follow the
//! WAI-ARIA accordion pattern; hosts targeting something other than the DOM
//! can read the same values under their own names.

use alloc::format;
use alloc::string::String;

use understory_descendants::{Ordinal, SectionId};

/// Open/collapsed state of a single section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SectionState {
    /// The panel is shown.
    Open,
    /// The panel is hidden.
    Collapsed,
}

impl SectionState {
    /// The `data-state` value: `"open"` or `"collapsed"`.
    pub fn data_state(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Collapsed => "collapsed",
        }
    }

    /// Whether the section is open.
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Per-section options.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SectionProps {
    /// Excluded from keyboard navigation and ignores clicks.
    pub disabled: bool,
    /// Registered without a position.
    pub hidden: bool,
}

impl SectionProps {
    /// Set [`SectionProps::disabled`].
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set [`SectionProps::hidden`].
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Element ids for a section, derived from the accordion id and the ordinal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionIds {
    /// `{accordion}--{ordinal}`.
    pub item: String,
    /// `button--{item}`.
    pub trigger: String,
    /// `panel--{item}`.
    pub panel: String,
}

impl SectionIds {
    /// Ids for the section at `ordinal`; hidden sections use `-1`.
    pub fn new(accordion_id: &str, ordinal: Option<Ordinal>) -> Self {
        let item = match ordinal {
            Some(ordinal) => format!("{accordion_id}--{ordinal}"),
            None => format!("{accordion_id}---1"),
        };
        Self {
            trigger: format!("button--{item}"),
            panel: format!("panel--{item}"),
            item,
        }
    }
}

/// Attributes of the wrapper around a trigger/panel pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemAttrs {
    /// `data-state`.
    pub data_state: &'static str,
    /// `data-disabled` present.
    pub data_disabled: bool,
    /// `data-read-only` present.
    pub data_read_only: bool,
}

/// Attributes of a section trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerAttrs {
    /// `id`.
    pub id: String,
    /// `aria-controls`: the panel id.
    pub aria_controls: String,
    /// `aria-expanded`.
    pub aria_expanded: bool,
    /// `disabled`.
    pub disabled: bool,
    /// `data-state`.
    pub data_state: &'static str,
}

/// Attributes of a section panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelAttrs {
    /// `id`.
    pub id: String,
    /// `role`; always `"region"`.
    pub role: &'static str,
    /// `aria-labelledby`: the trigger id.
    pub aria_labelledby: String,
    /// `hidden`; set exactly when the section is not open.
    pub hidden: bool,
    /// `data-state`.
    pub data_state: &'static str,
    /// `data-disabled` present.
    pub data_disabled: bool,
}

/// Everything a section needs to render itself for the current pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionContext {
    /// Stable identity of the section.
    pub id: SectionId,
    /// Position in the current pass, `None` when hidden.
    pub ordinal: Option<Ordinal>,
    /// Open or collapsed.
    pub state: SectionState,
    /// Whether the section is disabled.
    pub disabled: bool,
    /// Whether the owning accordion is read-only.
    pub read_only: bool,
    /// Element ids.
    pub ids: SectionIds,
}

impl SectionContext {
    /// Wrapper attributes.
    pub fn item_attrs(&self) -> ItemAttrs {
        ItemAttrs {
            data_state: self.state.data_state(),
            data_disabled: self.disabled,
            data_read_only: self.read_only,
        }
    }

    /// Trigger attributes.
    pub fn trigger_attrs(&self) -> TriggerAttrs {
        TriggerAttrs {
            id: self.ids.trigger.clone(),
            aria_controls: self.ids.panel.clone(),
            aria_expanded: self.state.is_open(),
            disabled: self.disabled,
            data_state: self.state.data_state(),
        }
    }

    /// Panel attributes.
    pub fn panel_attrs(&self) -> PanelAttrs {
        PanelAttrs {
            id: self.ids.panel.clone(),
            role: "region",
            aria_labelledby: self.ids.trigger.clone(),
            hidden: !self.state.is_open(),
            data_state: self.state.data_state(),
            data_disabled: self.disabled,
        }
    }
}
