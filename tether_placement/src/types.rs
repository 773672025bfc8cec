// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: overlay footprint, placement tags, clearances, and results.

use kurbo::{Point, Rect, Size};

/// Expected footprint of an overlay plus the two distances used to anchor it.
///
/// The size may be approximate (for example a fixed tooltip box measured once).
/// It is immutable per overlay type; build one and reuse it for every open.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlaySpec {
    /// Overlay width.
    pub width: f64,
    /// Overlay height.
    pub height: f64,
    /// Gap between the trigger and the overlay along the vertical axis.
    pub offset: f64,
    /// Minimum clearance between the overlay and the container edges.
    pub padding: f64,
}

impl OverlaySpec {
    /// Create a spec for an overlay of `width` × `height` with no offset or padding.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            offset: 0.0,
            padding: 0.0,
        }
    }

    /// Set the trigger-to-overlay gap.
    #[must_use]
    pub const fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the minimum container clearance.
    #[must_use]
    pub const fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Overlay footprint as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Copy with negative extents and padding clamped to zero.
    ///
    /// Placement never rejects input; this is the normalization it applies.
    pub(crate) fn sanitized(&self) -> Self {
        Self {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
            offset: self.offset,
            padding: self.padding.max(0.0),
        }
    }
}

impl Default for OverlaySpec {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Side of the trigger the overlay opens on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalSide {
    /// Above the trigger.
    #[default]
    Top,
    /// Below the trigger.
    Bottom,
}

impl VerticalSide {
    /// The opposite side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Horizontal alignment of the overlay relative to the trigger.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    /// Overlay hangs off the trigger's right edge, extending rightwards.
    #[default]
    Left,
    /// Overlay is centered on the trigger.
    Center,
    /// Overlay hangs off the trigger's left edge, extending leftwards.
    Right,
}

/// One of the six placement tags: `{top, bottom} × {left, center, right}`.
///
/// Chosen once per open and held until the overlay is repositioned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Vertical side.
    pub vertical: VerticalSide,
    /// Horizontal alignment.
    pub horizontal: HorizontalAlign,
}

impl Placement {
    /// `top-left`.
    pub const TOP_LEFT: Self = Self::new(VerticalSide::Top, HorizontalAlign::Left);
    /// `top-center`.
    pub const TOP_CENTER: Self = Self::new(VerticalSide::Top, HorizontalAlign::Center);
    /// `top-right`.
    pub const TOP_RIGHT: Self = Self::new(VerticalSide::Top, HorizontalAlign::Right);
    /// `bottom-left`.
    pub const BOTTOM_LEFT: Self = Self::new(VerticalSide::Bottom, HorizontalAlign::Left);
    /// `bottom-center`.
    pub const BOTTOM_CENTER: Self = Self::new(VerticalSide::Bottom, HorizontalAlign::Center);
    /// `bottom-right`.
    pub const BOTTOM_RIGHT: Self = Self::new(VerticalSide::Bottom, HorizontalAlign::Right);

    /// All six placements, top row first.
    pub const ALL: [Self; 6] = [
        Self::TOP_LEFT,
        Self::TOP_CENTER,
        Self::TOP_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_CENTER,
        Self::BOTTOM_RIGHT,
    ];

    /// Combine a side and an alignment.
    pub const fn new(vertical: VerticalSide, horizontal: HorizontalAlign) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Same alignment on the opposite side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self::new(self.vertical.flipped(), self.horizontal)
    }

    /// Kebab-case tag, e.g. `"bottom-center"`; suitable for a data attribute or class name.
    pub const fn as_str(self) -> &'static str {
        match (self.vertical, self.horizontal) {
            (VerticalSide::Top, HorizontalAlign::Left) => "top-left",
            (VerticalSide::Top, HorizontalAlign::Center) => "top-center",
            (VerticalSide::Top, HorizontalAlign::Right) => "top-right",
            (VerticalSide::Bottom, HorizontalAlign::Left) => "bottom-left",
            (VerticalSide::Bottom, HorizontalAlign::Center) => "bottom-center",
            (VerticalSide::Bottom, HorizontalAlign::Right) => "bottom-right",
        }
    }
}

impl core::fmt::Display for Placement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free space between a trigger and each edge of its container.
///
/// Values are negative when the trigger pokes out of the container on that side.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Clearance {
    /// `trigger.top - container.top`.
    pub top: f64,
    /// `container.bottom - trigger.bottom`.
    pub bottom: f64,
    /// `trigger.left - container.left`.
    pub left: f64,
    /// `container.right - trigger.right`.
    pub right: f64,
}

impl Clearance {
    /// Measure the clearances of `trigger` inside `container`.
    ///
    /// Both rects must be in the same coordinate space.
    pub fn between(trigger: Rect, container: Rect) -> Self {
        let trigger = trigger.abs();
        let container = container.abs();
        Self {
            top: trigger.y0 - container.y0,
            bottom: container.y1 - trigger.y1,
            left: trigger.x0 - container.x0,
            right: container.x1 - trigger.x1,
        }
    }
}

/// Where to draw an overlay: its top-left corner and the placement that produced it.
///
/// `origin` is in the same space as the container rect passed to placement.
/// Computed on open or hover and discarded on close.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PositionResult {
    /// Top-left corner of the overlay.
    pub origin: Point,
    /// Chosen placement.
    pub placement: Placement,
}

impl PositionResult {
    /// Horizontal coordinate of the overlay's left edge.
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    /// Vertical coordinate of the overlay's top edge.
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    /// The overlay's box at this position for the given spec.
    pub fn overlay_rect(&self, spec: &OverlaySpec) -> Rect {
        Rect::from_origin_size(self.origin, spec.sanitized().size())
    }
}
