// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement algorithm: choose a side and alignment, then clamp into the container.
//!
//! ## Side selection
//!
//! - Vertical: above the trigger when it fits (`height + offset`), else below when that fits,
//!   else above again and let clamping pull it inside.
//! - Horizontal: centered when half the overlay fits on both sides of the trigger;
//!   otherwise hang the overlay away from the cramped side.
//!
//! ## Clamping
//!
//! Each axis is clamped into `[min + padding, max - size - padding]` of the container.
//! When that range is inverted (container smaller than overlay plus both paddings) the
//! origin snaps to `min + padding`.

use kurbo::{Point, Rect};

use crate::types::{
    Clearance, HorizontalAlign, OverlaySpec, Placement, PositionResult, VerticalSide,
};

/// Compute where to draw an overlay anchored to `trigger` inside `container`.
///
/// Both rects must be in the same coordinate space; the returned origin is in that space too.
/// The function is pure and never fails: malformed input is normalized, and a zero-area
/// container yields `(container.left + padding, container.top + padding)` with
/// [`Placement::TOP_LEFT`] so hosts can render a first frame before layout settles.
///
/// ```
/// use kurbo::Rect;
/// use tether_placement::{OverlaySpec, Placement, place};
///
/// let container = Rect::new(0.0, 0.0, 400.0, 300.0);
/// let trigger = Rect::new(180.0, 280.0, 220.0, 300.0);
/// let spec = OverlaySpec::new(230.0, 180.0).with_offset(10.0).with_padding(20.0);
///
/// let pos = place(trigger, container, &spec);
/// assert_eq!(pos.placement, Placement::TOP_CENTER);
/// assert_eq!((pos.x(), pos.y()), (85.0, 90.0));
/// ```
pub fn place(trigger: Rect, container: Rect, spec: &OverlaySpec) -> PositionResult {
    let trigger = trigger.abs();
    let container = container.abs();
    let spec = spec.sanitized();

    if container.width() <= 0.0 || container.height() <= 0.0 {
        tracing::debug!(?container, "zero-area container; using top-left default");
        return PositionResult {
            origin: Point::new(container.x0 + spec.padding, container.y0 + spec.padding),
            placement: Placement::TOP_LEFT,
        };
    }

    let clearance = Clearance::between(trigger, container);
    let placement = choose(&clearance, &spec);
    position(placement, trigger, container, &spec)
}

/// Compute the origin for a placement chosen earlier.
///
/// Use this when the trigger or container moves (scroll, resize) while the overlay is
/// open: the side and alignment stay put and only the coordinates are refreshed.
/// Clamping is the same as in [`place`].
pub fn place_with(
    placement: Placement,
    trigger: Rect,
    container: Rect,
    spec: &OverlaySpec,
) -> PositionResult {
    position(placement, trigger.abs(), container.abs(), &spec.sanitized())
}

fn choose(clearance: &Clearance, spec: &OverlaySpec) -> Placement {
    let needed_v = spec.height + spec.offset;
    let vertical = if clearance.top >= needed_v {
        VerticalSide::Top
    } else if clearance.bottom >= needed_v {
        VerticalSide::Bottom
    } else {
        VerticalSide::Top
    };

    let half_w = spec.width / 2.0;
    let horizontal = if clearance.left >= half_w && clearance.right >= half_w {
        HorizontalAlign::Center
    } else if clearance.right < half_w {
        HorizontalAlign::Right
    } else {
        HorizontalAlign::Left
    };

    Placement::new(vertical, horizontal)
}

fn position(
    placement: Placement,
    trigger: Rect,
    container: Rect,
    spec: &OverlaySpec,
) -> PositionResult {
    let raw_x = match placement.horizontal {
        HorizontalAlign::Center => trigger.center().x - spec.width / 2.0,
        HorizontalAlign::Right => trigger.x0 - spec.width,
        HorizontalAlign::Left => trigger.x1,
    };
    let raw_y = match placement.vertical {
        VerticalSide::Top => trigger.y0 - spec.height - spec.offset,
        VerticalSide::Bottom => trigger.y1 + spec.offset,
    };

    let x = clamp_axis(raw_x, container.x0, container.x1, spec.width, spec.padding);
    let y = clamp_axis(raw_y, container.y0, container.y1, spec.height, spec.padding);

    PositionResult {
        origin: Point::new(x, y),
        placement,
    }
}

/// Clamp `v` into `[min + padding, max - extent - padding]`, snapping to the lower
/// bound when the range is inverted.
fn clamp_axis(v: f64, min: f64, max: f64, extent: f64, padding: f64) -> f64 {
    let lo = min + padding;
    let hi = max - extent - padding;
    if hi < lo {
        return lo;
    }
    v.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn spec() -> OverlaySpec {
        OverlaySpec::new(230.0, 180.0)
            .with_offset(10.0)
            .with_padding(20.0)
    }

    #[test]
    fn worked_example_near_bottom_edge() {
        let container = Rect::new(0.0, 0.0, 400.0, 300.0);
        let trigger = Rect::new(180.0, 280.0, 220.0, 300.0);
        let pos = place(trigger, container, &spec());
        assert_eq!(pos.placement, Placement::TOP_CENTER);
        assert_eq!(pos.x(), 85.0);
        assert_eq!(pos.y(), 90.0);
    }

    // More room above opens upward; swapping the room opens downward.
    #[test]
    fn prefers_side_with_room() {
        let container = Rect::new(0.0, 0.0, 800.0, 2000.0);
        let s = OverlaySpec::new(100.0, 100.0).with_offset(8.0);

        let low = Rect::new(380.0, 1500.0, 420.0, 1520.0);
        assert_eq!(
            place(low, container, &s).placement.vertical,
            VerticalSide::Top
        );

        let high = Rect::new(380.0, 50.0, 420.0, 70.0);
        let pos = place(high, container, &s);
        assert_eq!(pos.placement.vertical, VerticalSide::Bottom);
        assert_eq!(pos.y(), 78.0);
    }

    // Neither side fits: fall back to top and clamp.
    #[test]
    fn vertical_fallback_is_top_and_clamped() {
        let container = Rect::new(0.0, 0.0, 400.0, 150.0);
        let trigger = Rect::new(180.0, 60.0, 220.0, 80.0);
        let s = OverlaySpec::new(100.0, 100.0)
            .with_offset(10.0)
            .with_padding(5.0);
        let pos = place(trigger, container, &s);
        assert_eq!(pos.placement.vertical, VerticalSide::Top);
        // Raw y = 60 - 100 - 10 = -50, clamped to top + padding.
        assert_eq!(pos.y(), 5.0);
    }

    #[test]
    fn cramped_right_hangs_left() {
        let container = Rect::new(0.0, 0.0, 400.0, 400.0);
        let trigger = Rect::new(360.0, 300.0, 370.0, 310.0);
        let s = OverlaySpec::new(100.0, 50.0);
        let pos = place(trigger, container, &s);
        assert_eq!(pos.placement, Placement::TOP_RIGHT);
        assert_eq!(pos.x(), 260.0);
    }

    #[test]
    fn cramped_left_hangs_right() {
        let container = Rect::new(0.0, 0.0, 400.0, 400.0);
        let trigger = Rect::new(10.0, 300.0, 20.0, 310.0);
        let s = OverlaySpec::new(100.0, 50.0);
        let pos = place(trigger, container, &s);
        assert_eq!(pos.placement, Placement::TOP_LEFT);
        assert_eq!(pos.x(), 20.0);
    }

    #[test]
    fn both_sides_cramped_prefers_right_alignment() {
        let container = Rect::new(0.0, 0.0, 120.0, 400.0);
        let trigger = Rect::new(40.0, 300.0, 80.0, 310.0);
        let s = OverlaySpec::new(100.0, 50.0).with_padding(10.0);
        let pos = place(trigger, container, &s);
        assert_eq!(pos.placement.horizontal, HorizontalAlign::Right);
        // Raw x = 40 - 100 = -60; range [10, 10].
        assert_eq!(pos.x(), 10.0);
    }

    #[test]
    fn zero_area_container_defaults_to_top_left() {
        let container = Rect::new(30.0, 40.0, 30.0, 40.0);
        let trigger = Rect::new(0.0, 0.0, 10.0, 10.0);
        let pos = place(trigger, container, &spec());
        assert_eq!(pos.placement, Placement::TOP_LEFT);
        assert_eq!(pos.origin, Point::new(50.0, 60.0));
    }

    #[test]
    fn undersized_container_snaps_to_padding() {
        let container = Rect::new(0.0, 0.0, 200.0, 150.0);
        let trigger = Rect::new(90.0, 60.0, 110.0, 80.0);
        let pos = place(trigger, container, &spec());
        assert_eq!(pos.origin, Point::new(20.0, 20.0));
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let container = Rect::new(-50.0, 10.0, 640.0, 480.0);
        let trigger = Rect::new(300.0, 200.0, 340.0, 230.0);
        let a = place(trigger, container, &spec());
        let b = place(trigger, container, &spec());
        assert_eq!(a, b);
    }

    // Sweep triggers over a grid inside a large-enough container and check the
    // overlay never crosses the padded container bounds.
    #[test]
    fn containment_holds_for_triggers_inside_container() {
        let s = spec();
        let container = Rect::new(10.0, 20.0, 10.0 + 500.0, 20.0 + 420.0);
        let inner = container.inset(-s.padding);
        let mut checked = 0;
        for ix in 0..=24 {
            for iy in 0..=20 {
                let x0 = container.x0 + f64::from(ix) * 20.0;
                let y0 = container.y0 + f64::from(iy) * 20.0;
                let x1 = (x0 + 24.0).min(container.x1);
                let y1 = (y0 + 12.0).min(container.y1);
                let trigger = Rect::new(x0, y0, x1, y1);
                let r = place(trigger, container, &s).overlay_rect(&s);
                assert!(r.x0 >= inner.x0, "left edge escaped for {trigger:?}");
                assert!(r.x1 <= inner.x1, "right edge escaped for {trigger:?}");
                assert!(r.y0 >= inner.y0, "top edge escaped for {trigger:?}");
                assert!(r.y1 <= inner.y1, "bottom edge escaped for {trigger:?}");
                checked += 1;
            }
        }
        assert_eq!(checked, 25 * 21, "grid fully visited");
    }

    #[test]
    fn place_with_holds_placement_and_clamps() {
        let container = Rect::new(0.0, 0.0, 400.0, 300.0);
        // Trigger scrolled near the top; a held `top-center` still clamps inside.
        let trigger = Rect::new(180.0, 30.0, 220.0, 50.0);
        let pos = place_with(Placement::TOP_CENTER, trigger, container, &spec());
        assert_eq!(pos.placement, Placement::TOP_CENTER);
        assert_eq!(pos.origin, Point::new(85.0, 20.0));

        // Fresh placement would flip to the bottom instead.
        assert_eq!(
            place(trigger, container, &spec()).placement,
            Placement::BOTTOM_CENTER
        );
    }

    #[test]
    fn every_placement_lands_inside_roomy_container() {
        let container = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let trigger = Rect::new(480.0, 480.0, 520.0, 520.0);
        let s = spec();
        let inner = container.inset(-s.padding);
        let rects: Vec<_> = Placement::ALL
            .iter()
            .map(|&p| place_with(p, trigger, container, &s).overlay_rect(&s))
            .collect();
        for r in &rects {
            assert_eq!(inner.union(*r), inner, "{r:?} not inside {inner:?}");
        }
        // Top row sits above the trigger, bottom row below.
        assert_eq!(rects[0].y1, 470.0);
        assert_eq!(rects[3].y0, 530.0);
    }

    #[test]
    fn negative_extents_are_treated_as_zero() {
        let container = Rect::new(0.0, 0.0, 100.0, 100.0);
        let trigger = Rect::new(40.0, 40.0, 60.0, 60.0);
        let s = OverlaySpec::new(-20.0, -20.0).with_padding(-5.0);
        let pos = place(trigger, container, &s);
        assert_eq!(pos.placement, Placement::TOP_CENTER);
        assert_eq!(pos.origin, Point::new(50.0, 40.0));
    }
}
