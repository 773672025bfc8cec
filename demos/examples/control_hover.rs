// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tooltip: open on hover, survive the gap to the overlay, close after a delay.
//!
//! Drives a hover-mode control with a simulated millisecond clock and positions the
//! overlay when it opens.
//!
//! Run:
//! - `cargo run -p tether_demos --example control_hover`

use kurbo::Rect;
use tether_control::{Control, ControlConfig, Region};
use tether_placement::{OverlaySpec, place};

fn main() {
    let chart = Rect::new(0.0, 0.0, 400.0, 300.0);
    let dot = Rect::new(196.0, 146.0, 204.0, 154.0);
    let spec = OverlaySpec::new(160.0, 80.0)
        .with_offset(8.0)
        .with_padding(12.0);

    let mut tip: Control<(), _> = Control::headless(ControlConfig::hover(200));

    // t=0: pointer enters the dot.
    tip.pointer_enter(Region::Trigger);
    let pos = place(dot, chart, &spec);
    println!(
        "t=0    open={} at {} ({}, {})",
        tip.is_open(),
        pos.placement,
        pos.x(),
        pos.y()
    );

    // t=40: leaves the dot, heading for the tooltip.
    let timer = tip.pointer_leave(Region::Trigger, 40);
    println!("t=40   left trigger, close pending: {timer:?}");

    // t=120: reaches the tooltip before the deadline at t=240.
    tip.pointer_enter(Region::Overlay);
    println!("t=120  entered overlay, pending: {:?}", tip.pending_close());
    assert!(!tip.poll(240));
    assert!(tip.is_open());

    // t=500: leaves the tooltip for good; the close is due at t=700.
    tip.pointer_leave(Region::Overlay, 500);
    for now in [600, 699, 700, 800] {
        let closed = tip.poll(now);
        println!("t={now:<4} poll -> closed={closed} open={}", tip.is_open());
    }
    assert!(!tip.is_open());
}
