// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Placement: Kurbo-native placement for anchored overlays.
//!
//! Tether Placement is a reusable building block for tooltips, popovers, and dropdown menus.
//!
//! - Given a trigger box, a container box, and an [`OverlaySpec`], it returns where to draw the overlay.
//! - It prefers opening above the trigger, falls back to below, and centers horizontally when there is room.
//! - The result is always clamped inside the container (inset by `padding`) when the container is large enough.
//!
//! ## Not a layout engine
//!
//! This crate does not measure overlays or read element bounds by itself.
//! The host reports boxes (directly, or through a [`BoundsLookup`]) and renders the overlay
//! at the returned [`PositionResult`]. Both rects must use the same coordinate space,
//! viewport or container-relative; the result is in that space too.
//!
//! ## API overview
//!
//! - [`place`]: choose a [`Placement`] and compute the clamped origin.
//! - [`place_with`]: recompute the origin for a placement held from an earlier open.
//! - [`place_anchored`]: the same as [`place`], reading bounds through a [`BoundsLookup`].
//! - [`Clearance`]: free space on each side of the trigger.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::Rect;
//! use tether_placement::{OverlaySpec, Placement, place, place_with};
//!
//! let container = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let spec = OverlaySpec::new(120.0, 60.0).with_offset(8.0).with_padding(12.0);
//!
//! // A point on a scatter plot near the top edge: no room above, so open below.
//! let dot = Rect::new(100.0, 20.0, 106.0, 26.0);
//! let pos = place(dot, container, &spec);
//! assert_eq!(pos.placement, Placement::BOTTOM_CENTER);
//! assert_eq!(pos.y(), 34.0);
//!
//! // The chart scrolls; keep the placement and refresh the coordinates.
//! let moved = Rect::new(100.0, 10.0, 106.0, 16.0);
//! let again = place_with(pos.placement, moved, container, &spec);
//! assert_eq!(again.placement, Placement::BOTTOM_CENTER);
//! assert_eq!(again.y(), 24.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod lookup;
mod place;
mod types;

pub use lookup::{BoundsLookup, place_anchored};
pub use place::{place, place_with};
pub use types::{Clearance, HorizontalAlign, OverlaySpec, Placement, PositionResult, VerticalSide};
