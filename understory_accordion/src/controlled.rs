// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A value that is either owned by the caller (controlled) or by the widget.
//!
//! [`ControlledState`] decides which storage is authoritative and nothing
//! else: it never notifies anyone of changes. Whoever drives it is
//! responsible for reporting toggles upward when the value is controlled.
//!
//! ```rust
//! use understory_accordion::controlled::ControlledState;
//!
//! let mut state = ControlledState::new("Counter", None, || 1);
//! assert!(state.set_with(|n| n + 1));
//! assert_eq!(*state.get(), 2);
//!
//! // The caller takes over; internal writes are ignored.
//! state.sync(Some(10));
//! assert!(!state.set(3));
//! assert_eq!(*state.get(), 10);
//! ```

use alloc::boxed::Box;
use core::cell::LazyCell;

/// Value holder with controlled and uncontrolled modes.
///
/// The mode is decided by the presence of an external value at each read.
/// Switching modes during an instance's lifetime is a caller error; it is
/// reported with a warning and the currently detected mode wins.
pub struct ControlledState<T> {
    name: &'static str,
    controlled: Option<T>,
    was_controlled: bool,
    initial: LazyCell<T, Box<dyn FnOnce() -> T>>,
    updated: Option<T>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for ControlledState<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControlledState")
            .field("name", &self.name)
            .field("controlled", &self.controlled)
            .field("was_controlled", &self.was_controlled)
            .field("updated", &self.updated)
            .finish_non_exhaustive()
    }
}

impl<T> ControlledState<T> {
    /// Create a cell.
    ///
    /// `name` identifies the owner in drift warnings. `default` produces the
    /// initial internal value; it runs at most once, the first time the
    /// internal storage is read or written.
    pub fn new(
        name: &'static str,
        controlled: Option<T>,
        default: impl FnOnce() -> T + 'static,
    ) -> Self {
        let default: Box<dyn FnOnce() -> T> = Box::new(default);
        Self {
            name,
            was_controlled: controlled.is_some(),
            controlled,
            initial: LazyCell::new(default),
            updated: None,
        }
    }

    /// Create a cell with an already computed default.
    pub fn with_default(name: &'static str, controlled: Option<T>, default: T) -> Self
    where
        T: 'static,
    {
        Self::new(name, controlled, move || default)
    }

    /// The authoritative value: the external one when present, otherwise
    /// internal storage.
    pub fn get(&self) -> &T {
        match &self.controlled {
            Some(value) => value,
            None => self.uncontrolled(),
        }
    }

    /// Internal storage, regardless of mode.
    pub fn uncontrolled(&self) -> &T {
        match &self.updated {
            Some(value) => value,
            None => LazyCell::force(&self.initial),
        }
    }

    /// Replace the internal value.
    ///
    /// Returns `false` and does nothing while controlled.
    pub fn set(&mut self, value: T) -> bool {
        self.set_with(move |_| value)
    }

    /// Compute the next internal value from the previous one.
    ///
    /// Returns `false` and does not call `f` while controlled.
    pub fn set_with(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        if self.controlled.is_some() {
            return false;
        }
        let next = f(self.uncontrolled());
        self.updated = Some(next);
        true
    }

    /// Install the external value for the current pass.
    ///
    /// `None` means the caller does not own the value. Entering a mode other
    /// than the one observed at construction logs a warning in debug builds,
    /// once per switch; returning to the original mode is silent.
    pub fn sync(&mut self, controlled: Option<T>) {
        let now = controlled.is_some();
        if cfg!(debug_assertions) && now != self.was_controlled && now != self.is_controlled() {
            if self.was_controlled {
                tracing::warn!(
                    "{} is changing from controlled to uncontrolled. Components should not \
                     switch from controlled to uncontrolled (or vice versa). Decide between \
                     using a controlled or uncontrolled value for the lifetime of the component.",
                    self.name
                );
            } else {
                tracing::warn!(
                    "{} is changing from uncontrolled to controlled. Components should not \
                     switch from uncontrolled to controlled (or vice versa). Decide between \
                     using a controlled or uncontrolled value for the lifetime of the component.",
                    self.name
                );
            }
        }
        self.controlled = controlled;
    }

    /// Whether an external value is currently present.
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Whether an external value was present at construction.
    pub fn was_controlled(&self) -> bool {
        self.was_controlled
    }
}
