// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Accordion: headless state and keyboard navigation for accordions.
//!
//! An accordion is a group of collapsible sections, each with a trigger and a
//! panel. This crate implements the parts that carry behavior and leaves
//! rendering to the host:
//!
//! - **Open state** ([`selection`]): exclusive or multiple expansion, with an
//!   optional "collapsible to none" policy. [`initial_selection`] resolves the
//!   starting state and [`transition`] applies a toggle.
//! - **Controlled state** ([`controlled`]): the open state is either owned by
//!   the accordion or supplied by the caller on every pass; in the latter case
//!   toggles are reported through [`AccordionOptions::on_change`] and never
//!   applied internally.
//! - **Section positions**: sections register once per pass with an
//!   [`understory_descendants::Descendants`] registry and receive dense
//!   [`Ordinal`]s in document order.
//! - **Roving focus** ([`nav`]): Up/Down/PageUp/PageDown/Home/End move focus
//!   between enabled triggers, wrapping at the ends. The result is a
//!   [`FocusRequest`] delivered to a host [`FocusMover`].
//! - **Presentation values** ([`facade`]): ids, `aria-*`, `hidden`, and
//!   `data-state` values derived from the above.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_accordion::{Accordion, AccordionOptions, FocusRequest, SectionProps};
//!
//! let mut accordion: Accordion<u32> =
//!     Accordion::new(AccordionOptions::new().multiple(true).collapsible(true).default_index([0, 2]));
//! let ids: Vec<_> = (0..3).map(|_| accordion.allocate_section_id()).collect();
//!
//! accordion.begin_pass();
//! for (i, id) in ids.iter().enumerate() {
//!     accordion.register_section(*id, SectionProps::default(), i as u32);
//! }
//!
//! let mut no_focus = |_: FocusRequest<u32>| {};
//! accordion.click(ids[0], &mut no_focus).unwrap();
//! assert!(!accordion.section(ids[0]).unwrap().trigger_attrs().aria_expanded);
//! assert!(!accordion.section(ids[2]).unwrap().panel_attrs().hidden);
//! ```
//!
//! ## Contract with the host
//!
//! Everything is synchronous and single-threaded. The host must complete a
//! registration pass ([`Accordion::begin_pass`] followed by
//! [`Accordion::register_section`] for every live section) before routing
//! clicks or keys that should see that pass. Focus requests carry the
//! registry generation; [`Accordion::is_current`] tells whether one is still
//! valid.
//!
//! Hosts with their own click or key handlers run them first and then decide
//! whether to forward the event; not calling [`Accordion::click`] or
//! [`Accordion::key_down`] suppresses the built-in behavior.
//!
//! Instances can be passed down explicitly, or kept in an [`AccordionScope`]
//! and addressed through [`SectionKey`]s.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `thiserror` and `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod accordion;
mod config;
pub mod controlled;
mod error;
pub mod facade;
pub mod nav;
mod scope;
pub mod selection;

pub use accordion::Accordion;
pub use config::{AccordionConfig, AccordionIndex, AccordionOptions, ChangeHandler};
pub use error::AccordionError;
pub use facade::{
    ItemAttrs, PanelAttrs, SectionContext, SectionIds, SectionProps, SectionState, TriggerAttrs,
};
pub use nav::{FocusMover, FocusRequest, Modifiers, NavKey, compute_target};
pub use scope::{AccordionId, AccordionScope, SectionKey};
pub use selection::{OpenSelection, initial_selection, transition};
pub use understory_descendants::{Ordinal, SectionId};
