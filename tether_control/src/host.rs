// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host seams: consumer callbacks and document-level listener registration.
//!
//! ## Overview
//!
//! A [`Control`](crate::Control) owns its host and calls into it at fixed points:
//! - [`ControlCallbacks::on_focus`] when the overlay opens.
//! - [`ControlCallbacks::on_blur`] when the overlay is dismissed (outside click, hover close).
//! - [`ControlCallbacks::on_change`] after an option is selected.
//! - [`ListenerHost::add_pointer_down_listener`] exactly once per open and
//!   [`ListenerHost::remove_pointer_down_listener`] exactly once per close or teardown.
//!
//! Callbacks are assumed not to panic.

/// Consumer callbacks. All default to no-ops.
pub trait ControlCallbacks<V> {
    /// A value was selected.
    fn on_change(&mut self, _value: &V) {}
    /// The control opened.
    fn on_focus(&mut self) {}
    /// The control was dismissed.
    fn on_blur(&mut self) {}
}

/// Registration of the document-level pointer-down listener used for outside-click detection.
///
/// The host forwards pointer-down events to
/// [`Control::pointer_down`](crate::Control::pointer_down) while a listener is registered.
/// Pointer-down (rather than click) runs before click handlers on other elements.
pub trait ListenerHost {
    /// Handle identifying one registration.
    type Listener;
    /// Register a listener and return its handle.
    fn add_pointer_down_listener(&mut self) -> Self::Listener;
    /// Remove a previously registered listener.
    fn remove_pointer_down_listener(&mut self, listener: Self::Listener);
}

/// A host with no callbacks and no real listeners, for headless use and tests.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Headless;

impl<V> ControlCallbacks<V> for Headless {}

impl ListenerHost for Headless {
    type Listener = ();

    #[inline]
    fn add_pointer_down_listener(&mut self) {}

    #[inline]
    fn remove_pointer_down_listener(&mut self, _listener: ()) {}
}
