// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover intent: keep an overlay open while the pointer travels from trigger to overlay.
//!
//! ## Usage
//!
//! 1) Call [`HoverIntent::enter`] when the pointer enters the trigger or the overlay.
//!    Any pending close is canceled.
//! 2) Call [`HoverIntent::leave`] when it leaves either one. A close timer starts and a
//!    [`PendingClose`] is returned for the host to schedule.
//! 3) When the host's timer fires, call [`HoverIntent::fire`] with the token; or call
//!    [`HoverIntent::poll`] with the current time from a frame loop. Close commits only if
//!    the token is still current and neither region is hovered.
//!
//! Time is supplied by the host as monotonic milliseconds; there is no internal clock.
//!
//! ## Minimal example
//!
//! ```
//! use tether_control::{HoverIntent, Region};
//!
//! let mut h = HoverIntent::new();
//! h.enter(Region::Trigger);
//! let timer = h.leave(Region::Trigger, 1_000, 200);
//! // Pointer reaches the overlay before the timer fires.
//! h.enter(Region::Overlay);
//! assert!(!h.fire(timer.token));
//! assert!(h.is_wanted());
//! ```

use crate::types::Region;

bitflags::bitflags! {
    /// Regions the pointer is currently over.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HoverFlags: u8 {
        /// Pointer is over the trigger.
        const TRIGGER = 0b0000_0001;
        /// Pointer is over the overlay.
        const OVERLAY = 0b0000_0010;
    }
}

impl From<Region> for HoverFlags {
    fn from(region: Region) -> Self {
        match region {
            Region::Trigger => Self::TRIGGER,
            Region::Overlay => Self::OVERLAY,
        }
    }
}

/// Identifies one close timer. A new timer always gets a new token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// The single pending close timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PendingClose {
    /// Token to hand back to [`HoverIntent::fire`].
    pub token: TimerToken,
    /// Time (host milliseconds) at which the close should be checked.
    pub deadline_ms: u64,
}

/// Hover state for one overlay: which regions are hovered and the pending close, if any.
///
/// Invariant: the overlay is wanted open while the pointer is over the trigger or the
/// overlay; a close commits only after a delay during which neither became hovered again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverIntent {
    over: HoverFlags,
    pending: Option<PendingClose>,
    next_token: u64,
}

impl HoverIntent {
    /// Create hover intent with nothing hovered and no pending close.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue token numbering after `floor`, so tokens from an earlier intent stay stale.
    pub(crate) fn with_token_floor(floor: u64) -> Self {
        Self {
            next_token: floor,
            ..Self::default()
        }
    }

    /// Last token handed out.
    pub(crate) fn token_floor(&self) -> u64 {
        self.next_token
    }

    /// Regions currently hovered.
    pub fn hovered(&self) -> HoverFlags {
        self.over
    }

    /// True while the pointer is over the trigger or the overlay.
    pub fn is_wanted(&self) -> bool {
        !self.over.is_empty()
    }

    /// The pending close timer, if any.
    pub fn pending(&self) -> Option<PendingClose> {
        self.pending
    }

    /// Pointer entered `region`. Cancels any pending close; returns whether one was canceled.
    pub fn enter(&mut self, region: Region) -> bool {
        self.over.insert(region.into());
        let canceled = self.pending.take();
        if let Some(p) = canceled {
            tracing::trace!(?region, token = p.token.0, "hover re-entered; close canceled");
        }
        canceled.is_some()
    }

    /// Pointer left `region`. Starts a fresh close timer `delay_ms` after `now_ms`,
    /// replacing any earlier one.
    pub fn leave(&mut self, region: Region, now_ms: u64, delay_ms: u32) -> PendingClose {
        self.over.remove(region.into());
        self.next_token = self.next_token.wrapping_add(1);
        let pending = PendingClose {
            token: TimerToken(self.next_token),
            deadline_ms: now_ms.saturating_add(u64::from(delay_ms)),
        };
        tracing::trace!(
            ?region,
            token = self.next_token,
            deadline_ms = pending.deadline_ms,
            "hover left; close scheduled"
        );
        self.pending = Some(pending);
        pending
    }

    /// Cancel the pending close without touching hover flags.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// A host timer for `token` fired. Returns true if the close commits.
    ///
    /// Stale tokens (canceled or superseded timers) are ignored.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some(p) if p.token == token => {
                self.pending = None;
                let commit = !self.is_wanted();
                tracing::trace!(token = token.0, commit, "close timer fired");
                commit
            }
            _ => false,
        }
    }

    /// Frame-loop alternative to [`fire`](Self::fire): commits if the pending deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.pending {
            Some(p) if now_ms >= p.deadline_ms => self.fire(p.token),
            _ => false,
        }
    }
}
