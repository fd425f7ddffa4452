// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Usage errors.
//!
//! These signal composition mistakes (an operation issued against an
//! accordion or section that is not live), not runtime conditions. They
//! abort only the offending operation. Policy outcomes such as toggling the
//! last open section or pressing an unrelated key are not errors.

use understory_descendants::SectionId;

use crate::scope::AccordionId;

/// A section- or trigger-scoped operation was issued outside its context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccordionError {
    /// The accordion was removed or never existed.
    #[error("{0:?} is not a live accordion; section operations must run within an accordion")]
    NoAccordion(AccordionId),
    /// The section did not register in the current pass.
    #[error(
        "{0:?} is not registered in the current pass; trigger and panel operations must run within a section"
    )]
    NoSection(SectionId),
}
