// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The control state machine.
//!
//! ## Event precedence
//!
//! Events are evaluated in this order; the first rule that applies wins:
//!
//! 1. [`Control::set_disabled`]: disabling forces [`ControlState::Disabled`] and closes the
//!    overlay silently. Every other event is a no-op until re-enabled.
//! 2. [`Control::set_external_state`]: a warning or error overrides the derived state.
//!    `open` still toggles normally underneath it.
//! 3. [`Control::open`]: opens (or promotes a hover-opened overlay), registers the
//!    outside-click listener, becomes [`ControlState::Active`] and emits `on_focus`.
//! 4. [`Control::close`] (outside click, toggle, hover timer): closes, releases the
//!    listener, derives [`ControlState::Filled`] or [`ControlState::Default`] and emits
//!    `on_blur` if the control was explicitly opened.
//! 5. [`Control::select_option`]: records the value, closes without `on_blur`, emits `on_change`.
//!
//! Transitions that do not apply (closing a closed control, selecting while closed) return
//! `false` and change nothing.
//!
//! ## Hover mode
//!
//! With [`TriggerMode::Hover`] the overlay also opens when the pointer enters the trigger
//! and closes once the pointer has left both trigger and overlay for `close_delay_ms`.
//! Hover-driven opens do not make the control [`Active`](ControlState::Active) and emit
//! neither `on_focus` nor `on_blur`; only explicit opens do.
//!
//! ## Resources
//!
//! Each open registers exactly one pointer-down listener with the host and each close,
//! disable, or teardown removes it. Dropping a [`Control`] tears it down.

use crate::containment::{ParentLookup, is_within};
use crate::host::{ControlCallbacks, Headless, ListenerHost};
use crate::hover::{HoverIntent, PendingClose, TimerToken};
use crate::types::{Choice, ControlConfig, ControlState, ExternalState, Region, TriggerMode};

/// A selectable control (dropdown trigger, tooltip trigger) and its overlay lifecycle.
///
/// `V` is the selected value type; `None` is the empty selection.
/// `H` is the host receiving callbacks and listener registrations.
///
/// ```
/// use tether_control::{Control, ControlConfig, ControlState};
///
/// let mut c: Control<&str, _> = Control::headless(ControlConfig::click());
/// assert!(c.open());
/// assert_eq!(c.state(), ControlState::Active);
/// assert!(c.select_option("net"));
/// assert_eq!(c.state(), ControlState::Filled);
/// assert!(!c.is_open());
/// assert_eq!(c.value(), Some(&"net"));
/// ```
pub struct Control<V, H>
where
    H: ControlCallbacks<V> + ListenerHost,
{
    host: H,
    config: ControlConfig,
    value: Option<V>,
    state: ControlState,
    open: bool,
    // Opened through `open`/`toggle` rather than by hover.
    active: bool,
    external: Option<ExternalState>,
    disabled: bool,
    listener: Option<H::Listener>,
    hover: Option<HoverIntent>,
    // Carried across hover intents so a timer from an earlier open never matches.
    token_floor: u64,
}

impl<V, H> core::fmt::Debug for Control<V, H>
where
    H: ControlCallbacks<V> + ListenerHost,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Control")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("open", &self.open)
            .field("has_value", &self.value.is_some())
            .field("has_listener", &self.listener.is_some())
            .field("hover", &self.hover)
            .finish_non_exhaustive()
    }
}

impl<V> Control<V, Headless> {
    /// Create a control with a [`Headless`] host.
    pub fn headless(config: ControlConfig) -> Self {
        Self::new(config, Headless)
    }
}

impl<V, H> Control<V, H>
where
    H: ControlCallbacks<V> + ListenerHost,
{
    /// Create a closed control with no value.
    pub fn new(config: ControlConfig, host: H) -> Self {
        let mut control = Self {
            host,
            config,
            value: None,
            state: ControlState::Default,
            open: false,
            active: false,
            external: config.external_state,
            disabled: false,
            listener: None,
            hover: None,
            token_floor: 0,
        };
        control.rederive();
        control
    }

    /// Current visible state.
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// True while the overlay is mounted.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Selected value, if any.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Current external override.
    pub fn external_state(&self) -> Option<ExternalState> {
        self.external
    }

    /// True while disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Configuration this control was built with.
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// True while an outside-click listener is registered with the host.
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Hover intent, present from the first hover until the overlay closes.
    pub fn hover(&self) -> Option<&HoverIntent> {
        self.hover.as_ref()
    }

    /// The pending hover close, if any.
    pub fn pending_close(&self) -> Option<PendingClose> {
        self.hover.as_ref().and_then(HoverIntent::pending)
    }

    /// Shared access to the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Disable or re-enable the control.
    ///
    /// Disabling closes the overlay without callbacks, releases the listener and cancels
    /// any pending hover close. Returns false if nothing changed.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        if self.disabled == disabled {
            return false;
        }
        self.disabled = disabled;
        if disabled {
            self.release();
        }
        self.rederive();
        true
    }

    /// Impose or clear an external warning/error. Returns false if nothing changed.
    pub fn set_external_state(&mut self, external: Option<ExternalState>) -> bool {
        if self.external == external {
            return false;
        }
        self.external = external;
        self.rederive();
        true
    }

    /// Replace the selected value without callbacks (controlled usage).
    pub fn set_value(&mut self, value: Option<V>) {
        self.value = value;
        self.rederive();
    }

    /// Explicitly open the overlay (click on the trigger).
    ///
    /// Emits `on_focus`. An overlay already opened by hover is promoted to
    /// [`ControlState::Active`] in place, keeping its listener.
    /// Returns false if disabled or already explicitly open.
    pub fn open(&mut self) -> bool {
        if self.disabled || self.active {
            return false;
        }
        self.acquire();
        self.active = true;
        self.rederive();
        self.host.on_focus();
        true
    }

    /// Dismiss the overlay, whatever the cause: an outside click, a toggle, or the host.
    ///
    /// Always emits `on_blur` when the control was explicitly opened, and never for a
    /// hover-only open. Returns false if already closed.
    pub fn close(&mut self) -> bool {
        self.close_with(true)
    }

    /// Close when explicitly open; otherwise [`open`](Self::open), which also promotes a
    /// hover-opened overlay.
    pub fn toggle(&mut self) -> bool {
        if self.active { self.close() } else { self.open() }
    }

    /// Select an option from the open overlay.
    ///
    /// Records the value, closes without `on_blur`, then emits `on_change`.
    /// Returns false (and does nothing) if closed, disabled, or the choice is disabled.
    pub fn select_option(&mut self, choice: impl Into<Choice<V>>) -> bool {
        let choice = choice.into();
        if self.disabled || !self.open || choice.disabled {
            return false;
        }
        self.value = Some(choice.value);
        self.close_with(false);
        if let Some(v) = &self.value {
            self.host.on_change(v);
        }
        true
    }

    /// A document-level pointer-down arrived; `inside` says whether its target lies within
    /// the control's rendered subtree.
    ///
    /// Closes on an outside target. Does nothing unless a listener is registered, so a
    /// second outside click after the first is a no-op.
    pub fn pointer_down(&mut self, inside: bool) -> bool {
        if self.listener.is_none() || inside {
            return false;
        }
        tracing::trace!("outside pointer-down");
        self.close()
    }

    /// Like [`pointer_down`](Self::pointer_down), deciding containment by walking from
    /// `target` up to `root` through `parents`.
    pub fn pointer_down_on<K: PartialEq>(
        &mut self,
        target: K,
        root: &K,
        parents: &impl ParentLookup<K>,
    ) -> bool {
        if self.listener.is_none() {
            return false;
        }
        let inside = is_within(parents, target, root);
        self.pointer_down(inside)
    }

    /// The pointer entered the trigger or the overlay.
    ///
    /// In hover mode, entering the trigger opens a closed overlay; entering either region of
    /// an open overlay cancels a pending close. Ignored in click mode and while disabled.
    pub fn pointer_enter(&mut self, region: Region) -> bool {
        if self.config.trigger != TriggerMode::Hover || self.disabled {
            return false;
        }
        if !self.open {
            if region != Region::Trigger {
                return false;
            }
            self.acquire();
            self.rederive();
        }
        self.hover_intent().enter(region);
        true
    }

    /// The pointer left the trigger or the overlay at `now_ms`.
    ///
    /// Returns the close timer the host should schedule, or `None` when nothing is pending
    /// (click mode, closed, or a zero delay that was resolved immediately).
    pub fn pointer_leave(&mut self, region: Region, now_ms: u64) -> Option<PendingClose> {
        if self.config.trigger != TriggerMode::Hover || !self.open {
            return None;
        }
        let delay = self.config.close_delay_ms;
        let hover = self.hover_intent();
        let pending = hover.leave(region, now_ms, delay);
        if delay == 0 {
            if hover.fire(pending.token) {
                self.close_with(true);
            }
            return None;
        }
        Some(pending)
    }

    /// The host timer for `token` fired. Returns true if the overlay closed.
    pub fn fire_timer(&mut self, token: TimerToken) -> bool {
        let commit = self.hover.as_mut().is_some_and(|h| h.fire(token));
        if commit {
            self.close_with(true);
        }
        commit
    }

    /// Frame-loop alternative to [`fire_timer`](Self::fire_timer).
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let commit = self.hover.as_mut().is_some_and(|h| h.poll(now_ms));
        if commit {
            self.close_with(true);
        }
        commit
    }

    /// Release the listener and cancel any pending close without callbacks.
    ///
    /// Call when the control is unmounted; [`Drop`] does the same.
    /// Returns true if anything was released.
    pub fn teardown(&mut self) -> bool {
        let released = self.open || self.listener.is_some() || self.hover.is_some();
        self.release();
        self.rederive();
        released
    }

    fn close_with(&mut self, blur: bool) -> bool {
        if !self.open {
            return false;
        }
        let was_active = self.active;
        self.release();
        self.rederive();
        if blur && was_active {
            self.host.on_blur();
        }
        true
    }

    fn hover_intent(&mut self) -> &mut HoverIntent {
        let floor = self.token_floor;
        self.hover
            .get_or_insert_with(|| HoverIntent::with_token_floor(floor))
    }

    fn acquire(&mut self) {
        self.open = true;
        if self.listener.is_none() {
            self.listener = Some(self.host.add_pointer_down_listener());
            tracing::debug!("pointer-down listener registered");
        }
    }

    fn release(&mut self) {
        self.open = false;
        self.active = false;
        if let Some(h) = self.hover.take() {
            self.token_floor = h.token_floor();
            if h.pending().is_some() {
                tracing::trace!("pending hover close canceled");
            }
        }
        if let Some(l) = self.listener.take() {
            self.host.remove_pointer_down_listener(l);
            tracing::debug!("pointer-down listener removed");
        }
    }

    fn rederive(&mut self) {
        let next = if self.disabled {
            ControlState::Disabled
        } else if let Some(e) = self.external {
            e.into()
        } else if self.open && self.active {
            ControlState::Active
        } else if self.value.is_some() {
            ControlState::Filled
        } else {
            ControlState::Default
        };
        if next != self.state {
            tracing::trace!(from = ?self.state, to = ?next, open = self.open, "control state");
            self.state = next;
        }
    }
}

impl<V, H> Drop for Control<V, H>
where
    H: ControlCallbacks<V> + ListenerHost,
{
    fn drop(&mut self) {
        self.release();
    }
}
