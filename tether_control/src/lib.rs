// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Control: a deterministic, `no_std` state machine for selectable controls.
//!
//! ## Overview
//!
//! Dropdown triggers, menu buttons, and tooltip triggers share the same lifecycle:
//! an overlay opens, an outside click or a selection closes it, and the trigger shows a
//! visible state derived from what happened and from outside validation.
//! This crate models that lifecycle as [`Control`], a reducer over a closed [`ControlState`]
//! enum with a precedence-ordered rule list, instead of conditionals spread across renders.
//!
//! ## State precedence
//!
//! `Disabled` beats an external `Warning`/`Error`, which beats anything derived:
//! `Active` while explicitly opened, `Filled` when a value is selected, `Default` otherwise.
//! See [`control`](crate::control) for the event rules.
//!
//! ## Outside clicks
//!
//! Opening registers exactly one document-level pointer-down listener through the host's
//! [`ListenerHost`]; closing, disabling, teardown, and drop remove it.
//! Feed pointer-downs to [`Control::pointer_down`] (or [`Control::pointer_down_on`] with a
//! [`ParentLookup`] for containment).
//!
//! ## Hover intent
//!
//! Tooltip-style controls ([`TriggerMode::Hover`]) open on hover and close only after the
//! pointer has left both trigger and overlay for `close_delay_ms`, so moving through the
//! gap between them does not flicker. [`HoverIntent`] is usable on its own as well.
//! Time is host-supplied milliseconds; stale timers are ignored by [`TimerToken`].
//!
//! ## Example
//!
//! ```
//! use tether_control::{Control, ControlConfig, ControlState, ExternalState, Region};
//!
//! // A dropdown that form validation has flagged.
//! let mut dropdown: Control<u32, _> = Control::headless(ControlConfig::click());
//! dropdown.set_external_state(Some(ExternalState::Error));
//! assert!(dropdown.open());
//! assert!(dropdown.is_open());
//! assert_eq!(dropdown.state(), ControlState::Error);
//!
//! // A tooltip with a 200ms close delay.
//! let mut tip: Control<(), _> = Control::headless(ControlConfig::hover(200));
//! tip.pointer_enter(Region::Trigger);
//! let timer = tip.pointer_leave(Region::Trigger, 1_000).unwrap();
//! tip.pointer_enter(Region::Overlay);
//! assert!(!tip.fire_timer(timer.token));
//! assert!(tip.is_open());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod containment;
pub mod control;
pub mod host;
pub mod hover;
pub mod types;

pub use containment::{NoParent, ParentLookup, is_within};
pub use control::Control;
pub use host::{ControlCallbacks, Headless, ListenerHost};
pub use hover::{HoverFlags, HoverIntent, PendingClose, TimerToken};
pub use types::{Choice, ControlConfig, ControlState, ExternalState, Region, TriggerMode};
