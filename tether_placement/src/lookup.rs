// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host bounds lookup and the anchored placement convenience built on it.
//!
//! ## Notes
//!
//! Hosts usually know elements by some key (a node id, a widget id, a DOM handle)
//! and can report each one's post-layout box on demand.
//! Implement [`BoundsLookup`] for that source and call [`place_anchored`].
//! Missing bounds are not an error: before the first layout pass the host may not
//! know a box yet, so a missing rect is treated as zero-area at the origin and the
//! caller gets the same default frame as [`place`] does for a zero-area container.

use kurbo::Rect;

use crate::place::place;
use crate::types::{OverlaySpec, PositionResult};

/// Report the current, post-layout bounding box of an element.
///
/// Every rect returned by one lookup must be in the same coordinate space
/// (viewport or a scrollable container's content space).
pub trait BoundsLookup<K> {
    /// Returns the bounds of `key`, or `None` if it has not been laid out.
    fn bounds_of(&self, key: &K) -> Option<Rect>;
}

impl<K, F> BoundsLookup<K> for F
where
    F: Fn(&K) -> Option<Rect>,
{
    #[inline]
    fn bounds_of(&self, key: &K) -> Option<Rect> {
        self(key)
    }
}

/// Look up `trigger` and `container` through `lookup` and [`place`] the overlay.
pub fn place_anchored<K>(
    lookup: &impl BoundsLookup<K>,
    trigger: &K,
    container: &K,
    spec: &OverlaySpec,
) -> PositionResult {
    let trigger_rect = lookup.bounds_of(trigger).unwrap_or(Rect::ZERO);
    let container_rect = lookup.bounds_of(container).unwrap_or(Rect::ZERO);
    place(trigger_rect, container_rect, spec)
}
