// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The accordion instance: state, registry, and interaction entry points.

use alloc::format;
use alloc::string::String;
use core::sync::atomic::{AtomicUsize, Ordering};

use understory_descendants::{DescendantMeta, Descendants, Ordinal, SectionId};

use crate::config::{AccordionConfig, AccordionIndex, AccordionOptions, ChangeHandler};
use crate::controlled::ControlledState;
use crate::error::AccordionError;
use crate::facade::{SectionContext, SectionIds, SectionProps, SectionState};
use crate::nav::{FocusMover, FocusRequest, Modifiers, NavKey, compute_target};
use crate::selection::{OpenSelection, initial_selection, transition};

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

/// One accordion instance.
///
/// `H` is the host's focus handle for a section trigger. The instance owns
/// its open state (through a [`ControlledState`]) and the registry of its
/// sections, and is passed explicitly to whatever renders or drives the
/// sections.
///
/// ## Passes
///
/// Each time the host walks the section tree it must:
///
/// 1. call [`Accordion::begin_pass`];
/// 2. call [`Accordion::register_section`] for every live section in
///    document order.
///
/// Interaction entry points ([`Accordion::click`], [`Accordion::key_down`])
/// consult the registry as of the last completed pass.
///
/// ## Example
///
/// ```rust
/// use understory_accordion::{
///     Accordion, AccordionOptions, FocusRequest, Modifiers, NavKey, SectionProps, SectionState,
/// };
///
/// let mut accordion: Accordion<&str> = Accordion::new(AccordionOptions::new().id("faq"));
/// let ids: Vec<_> = (0..3).map(|_| accordion.allocate_section_id()).collect();
///
/// accordion.begin_pass();
/// let first = accordion.register_section(ids[0], SectionProps::default(), "q1");
/// accordion.register_section(ids[1], SectionProps::default().disabled(true), "q2");
/// accordion.register_section(ids[2], SectionProps::default(), "q3");
/// assert_eq!(first.state, SectionState::Open);
/// assert_eq!(first.trigger_attrs().id, "button--faq--0");
///
/// // Arrow down from the first trigger skips the disabled one.
/// let mut focused = Vec::new();
/// accordion
///     .key_down(ids[0], NavKey::Down, Modifiers::NONE, &mut |request: FocusRequest<&'static str>| {
///         focused.push(request.handle);
///     })
///     .unwrap();
/// assert_eq!(focused, ["q3"]);
///
/// // Clicking the third trigger opens it (and closes the first).
/// accordion.click(ids[2], &mut |_: FocusRequest<&'static str>| {}).unwrap();
/// assert_eq!(accordion.section(ids[2]).unwrap().state, SectionState::Open);
/// assert_eq!(accordion.section(ids[0]).unwrap().state, SectionState::Collapsed);
/// ```
pub struct Accordion<H> {
    id: String,
    config: AccordionConfig,
    state: ControlledState<OpenSelection>,
    descendants: Descendants<H>,
    on_change: Option<ChangeHandler>,
}

impl<H> core::fmt::Debug for Accordion<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Accordion")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("descendants", &self.descendants)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl<H> Accordion<H> {
    /// Create an accordion.
    ///
    /// The initial selection of an uncontrolled accordion is resolved from
    /// `options.default_index` the first time it is needed.
    pub fn new(options: AccordionOptions) -> Self {
        let config = options.config();
        let AccordionOptions {
            id,
            default_index,
            index,
            on_change,
            ..
        } = options;
        let id = id.unwrap_or_else(|| {
            let n = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
            format!("understory-accordion-{n}")
        });
        let state = ControlledState::new(
            "Accordion",
            index.as_ref().map(OpenSelection::from),
            move || initial_selection(&config, default_index.as_ref()),
        );
        tracing::debug!(id = %id, ?config, "accordion created");
        Self {
            id,
            config,
            state,
            descendants: Descendants::new(),
            on_change,
        }
    }

    /// Id prefix shared by every generated element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Configuration fixed at construction.
    pub fn config(&self) -> AccordionConfig {
        self.config
    }

    /// Whether an external index is present right now.
    pub fn is_controlled(&self) -> bool {
        self.state.is_controlled()
    }

    /// Supply the externally owned index for this pass, or `None` to leave it
    /// to the accordion.
    ///
    /// Switching between `Some` and `None` over the lifetime of an instance
    /// is a usage mistake; it logs a warning and the new mode takes effect.
    pub fn set_index(&mut self, index: Option<AccordionIndex>) {
        self.state.sync(index.as_ref().map(OpenSelection::from));
    }

    /// The open section(s).
    pub fn selection(&self) -> &OpenSelection {
        self.state.get()
    }

    /// Open/collapsed state of the section at `ordinal`.
    ///
    /// Hidden sections (`None`) are always collapsed.
    pub fn state_of(&self, ordinal: Option<Ordinal>) -> SectionState {
        match ordinal {
            Some(ordinal) if self.selection().is_open(ordinal) => SectionState::Open,
            _ => SectionState::Collapsed,
        }
    }

    /// Hand out a stable identity for a new section.
    pub fn allocate_section_id(&mut self) -> SectionId {
        self.descendants.allocate_id()
    }

    /// Start a registration pass.
    pub fn begin_pass(&mut self) {
        self.descendants.reset();
    }

    /// Register a section for the current pass and return its render context.
    ///
    /// Sections must register in document order. Registering the same id
    /// again in the same pass keeps its ordinal and refreshes `disabled` and
    /// `handle`.
    pub fn register_section(
        &mut self,
        id: SectionId,
        props: SectionProps,
        handle: H,
    ) -> SectionContext {
        let meta = DescendantMeta {
            disabled: props.disabled,
            hidden: props.hidden,
            handle,
        };
        let ordinal = self.descendants.ordinal(id, meta);
        self.context(id, ordinal, props.disabled)
    }

    /// Drop a section that unmounted between passes.
    pub fn unregister_section(&mut self, id: SectionId) -> bool {
        self.descendants.remove(id).is_some()
    }

    /// Render context for a section registered in the current pass.
    pub fn section(&self, id: SectionId) -> Result<SectionContext, AccordionError> {
        let entry = self.descendants.get(id).ok_or(AccordionError::NoSection(id))?;
        Ok(self.context(id, entry.ordinal, entry.disabled))
    }

    /// The section registry.
    pub fn descendants(&self) -> &Descendants<H> {
        &self.descendants
    }

    /// Whether `request` was computed from the current pass.
    pub fn is_current(&self, request: &FocusRequest<H>) -> bool {
        request.generation == self.descendants.generation()
    }

    /// Toggle the section at `ordinal`.
    ///
    /// - Read-only accordions ignore the toggle.
    /// - Controlled accordions only report `ordinal` to the change callback;
    ///   the owner decides the next index and supplies it via
    ///   [`Accordion::set_index`].
    /// - Otherwise the selection advances per [`transition`].
    pub fn toggle(&mut self, ordinal: Ordinal) {
        if self.config.read_only {
            tracing::debug!(id = %self.id, %ordinal, "toggle ignored: read-only");
            return;
        }
        if self.state.is_controlled() {
            tracing::trace!(id = %self.id, %ordinal, "toggle reported to owner");
            if let Some(on_change) = self.on_change.as_mut() {
                on_change(ordinal);
            }
            return;
        }
        let config = self.config;
        self.state
            .set_with(|current| transition(current, ordinal, &config));
        tracing::trace!(id = %self.id, %ordinal, open = ?self.state.get(), "section toggled");
    }

    /// Handle a click on the trigger of section `id`.
    ///
    /// Disabled sections ignore the click. Otherwise focus moves to the
    /// clicked trigger and the section toggles.
    pub fn click(
        &mut self,
        id: SectionId,
        focus: &mut impl FocusMover<H>,
    ) -> Result<(), AccordionError>
    where
        H: Clone,
    {
        let entry = self.descendants.get(id).ok_or(AccordionError::NoSection(id))?;
        if entry.disabled {
            tracing::debug!(id = %self.id, section = id.to_raw(), "click ignored: disabled");
            return Ok(());
        }
        let Some(ordinal) = entry.ordinal else {
            tracing::debug!(id = %self.id, section = id.to_raw(), "click ignored: hidden");
            return Ok(());
        };
        focus.move_focus(FocusRequest {
            ordinal,
            handle: entry.handle.clone(),
            generation: entry.generation,
        });
        self.toggle(ordinal);
        Ok(())
    }

    /// Handle a navigation key pressed on the trigger of section `id`.
    ///
    /// Returns the ordinal focus moved to, or `None` when there is nowhere to
    /// go. Open state never changes.
    pub fn key_down(
        &self,
        id: SectionId,
        key: NavKey,
        modifiers: Modifiers,
        focus: &mut impl FocusMover<H>,
    ) -> Result<Option<Ordinal>, AccordionError>
    where
        H: Clone,
    {
        let entry = self.descendants.get(id).ok_or(AccordionError::NoSection(id))?;
        let Some(request) = compute_target(key, entry.ordinal, modifiers, self.descendants.entries())
        else {
            tracing::debug!(id = %self.id, ?key, "navigation ignored: no selectable section");
            return Ok(None);
        };
        let ordinal = request.ordinal;
        focus.move_focus(request);
        Ok(Some(ordinal))
    }

    fn context(&self, id: SectionId, ordinal: Option<Ordinal>, disabled: bool) -> SectionContext {
        SectionContext {
            id,
            ordinal,
            state: self.state_of(ordinal),
            disabled,
            read_only: self.config.read_only,
            ids: SectionIds::new(&self.id, ordinal),
        }
    }
}
