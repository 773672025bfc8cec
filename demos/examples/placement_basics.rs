// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics: tooltips for points on a scatter plot.
//!
//! Places the same tooltip for points near each edge of a 400×300 chart and
//! prints the chosen placement and origin.
//!
//! Run:
//! - `cargo run -p tether_demos --example placement_basics`

use kurbo::{Point, Rect};
use tether_placement::{OverlaySpec, Placement, place};

fn main() {
    let chart = Rect::new(0.0, 0.0, 400.0, 300.0);
    let tooltip = OverlaySpec::new(230.0, 180.0)
        .with_offset(10.0)
        .with_padding(20.0);

    let points = [
        ("bottom edge", Point::new(200.0, 290.0)),
        ("top edge", Point::new(200.0, 10.0)),
        ("right edge", Point::new(390.0, 250.0)),
        ("left edge", Point::new(10.0, 250.0)),
    ];

    let mut placements = Vec::new();
    for (label, center) in points {
        let dot = Rect::from_center_size(center, (8.0, 8.0));
        let pos = place(dot, chart, &tooltip);
        println!(
            "{label:>11}: {:<13} at ({:.1}, {:.1})",
            pos.placement.as_str(),
            pos.x(),
            pos.y()
        );
        placements.push(pos.placement);
    }

    assert_eq!(
        placements,
        vec![
            Placement::TOP_CENTER,
            Placement::BOTTOM_CENTER,
            Placement::TOP_RIGHT,
            Placement::TOP_LEFT,
        ]
    );
}
