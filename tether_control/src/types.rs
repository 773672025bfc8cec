// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for controls: visible state, external overrides, configuration, and options.

/// Visible state of a selectable control.
///
/// Precedence, highest first:
/// - [`Disabled`](Self::Disabled) overrides everything.
/// - [`Warning`](Self::Warning) / [`Error`](Self::Error) are imposed from outside and
///   override anything the control derives itself.
/// - [`Active`](Self::Active) while the overlay was opened by an explicit open.
/// - [`Filled`](Self::Filled) when a value is selected and the control is not active.
/// - [`Default`](Self::Default) otherwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    /// Idle, nothing selected.
    #[default]
    Default,
    /// Opened by the user.
    Active,
    /// Holds a selected value.
    Filled,
    /// Externally flagged as suspicious.
    Warning,
    /// Externally flagged as invalid.
    Error,
    /// Not interactive.
    Disabled,
}

impl ControlState {
    /// True for the externally imposed states.
    pub const fn is_external(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

/// An externally imposed override, typically from form validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExternalState {
    /// Forces [`ControlState::Warning`].
    Warning,
    /// Forces [`ControlState::Error`].
    Error,
}

impl From<ExternalState> for ControlState {
    fn from(external: ExternalState) -> Self {
        match external {
            ExternalState::Warning => Self::Warning,
            ExternalState::Error => Self::Error,
        }
    }
}

/// How the overlay is opened.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TriggerMode {
    /// Click to open; pointer enter/leave are ignored (dropdowns, menus).
    #[default]
    Click,
    /// Hover the trigger to open; leaving trigger and overlay closes after a delay (tooltips).
    Hover,
}

/// The two regions hover intent distinguishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// The element the overlay is anchored to.
    Trigger,
    /// The overlay itself.
    Overlay,
}

/// Configuration for a [`Control`](crate::Control).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlConfig {
    /// How the overlay opens.
    pub trigger: TriggerMode,
    /// Hover close delay in milliseconds; `0` closes as soon as the pointer leaves.
    pub close_delay_ms: u32,
    /// Initial external override.
    pub external_state: Option<ExternalState>,
}

impl ControlConfig {
    /// Click-to-open control with no close delay.
    pub const fn click() -> Self {
        Self {
            trigger: TriggerMode::Click,
            close_delay_ms: 0,
            external_state: None,
        }
    }

    /// Hover-to-open control that closes `close_delay_ms` after the pointer leaves.
    pub const fn hover(close_delay_ms: u32) -> Self {
        Self {
            trigger: TriggerMode::Hover,
            close_delay_ms,
            external_state: None,
        }
    }

    /// Set the hover close delay.
    #[must_use]
    pub const fn with_close_delay_ms(mut self, close_delay_ms: u32) -> Self {
        self.close_delay_ms = close_delay_ms;
        self
    }

    /// Set the initial external override.
    #[must_use]
    pub const fn with_external_state(mut self, external_state: Option<ExternalState>) -> Self {
        self.external_state = external_state;
        self
    }
}

/// An option offered by the control's overlay.
///
/// Any value converts into an enabled choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice<V> {
    /// The value recorded when this choice is selected.
    pub value: V,
    /// Disabled choices cannot be selected.
    pub disabled: bool,
}

impl<V> Choice<V> {
    /// An enabled choice.
    pub const fn new(value: V) -> Self {
        Self {
            value,
            disabled: false,
        }
    }

    /// A disabled choice.
    pub const fn disabled(value: V) -> Self {
        Self {
            value,
            disabled: true,
        }
    }
}

impl<V> From<V> for Choice<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}
