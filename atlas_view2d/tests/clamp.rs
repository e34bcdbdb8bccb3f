// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the camera clamp and the controller built on it.

use atlas_view2d::{ViewportController, ZoomLimit, clamp_camera, min_zoom};
use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

fn arb_viewport() -> impl Strategy<Value = Size> {
    (1.0_f64..4000.0, 1.0_f64..4000.0).prop_map(|(w, h)| Size::new(w, h))
}

fn arb_bounds() -> impl Strategy<Value = Vec2> {
    (1.0_f64..5000.0, 1.0_f64..5000.0).prop_map(|(x, y)| Vec2::new(x, y))
}

#[derive(Clone, Debug)]
enum Op {
    Pan(Vec2),
    Wheel(f64),
    AnchorZoom(Point, f64),
    Resize(Size),
    DragStart,
    DragEnd,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-3000.0_f64..3000.0, -3000.0_f64..3000.0).prop_map(|(x, y)| Op::Pan(Vec2::new(x, y))),
        (0.01_f64..50.0).prop_map(Op::Wheel),
        ((0.0_f64..2000.0, 0.0_f64..2000.0), 0.1_f64..10.0)
            .prop_map(|((x, y), f)| Op::AnchorZoom(Point::new(x, y), f)),
        arb_viewport().prop_map(Op::Resize),
        Just(Op::DragStart),
        Just(Op::DragEnd),
    ]
}

fn visible_within_bounds(position: Point, zoom: f64, viewport: Size, bounds: Vec2) -> bool {
    let half = Vec2::new(viewport.width, viewport.height) / zoom / 2.0;
    position.x - half.x >= -bounds.x - EPS
        && position.x + half.x <= bounds.x + EPS
        && position.y - half.y >= -bounds.y - EPS
        && position.y + half.y <= bounds.y + EPS
}

#[test]
fn scenario_zoom_below_fit() {
    let viewport = Size::new(800.0, 600.0);
    let bounds = Vec2::new(504.0, 504.0);
    let fit = min_zoom(viewport, bounds);
    assert!((fit - 0.7937).abs() < 1e-4);

    let (position, zoom) = clamp_camera(Point::new(-250.0, 400.0), 0.1, viewport, bounds);
    assert_eq!(zoom, fit);
    assert!(visible_within_bounds(position, zoom, viewport, bounds));
}

proptest! {
    #[test]
    fn clamp_is_idempotent(
        x in -1e5_f64..1e5,
        y in -1e5_f64..1e5,
        zoom in 1e-4_f64..1e3,
        viewport in arb_viewport(),
        bounds in arb_bounds(),
    ) {
        let once = clamp_camera(Point::new(x, y), zoom, viewport, bounds);
        let twice = clamp_camera(once.0, once.1, viewport, bounds);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn clamped_view_is_contained(
        x in -1e5_f64..1e5,
        y in -1e5_f64..1e5,
        zoom in 1e-4_f64..1e3,
        viewport in arb_viewport(),
        bounds in arb_bounds(),
    ) {
        let (position, zoom) = clamp_camera(Point::new(x, y), zoom, viewport, bounds);
        prop_assert!(zoom >= min_zoom(viewport, bounds));
        prop_assert!(visible_within_bounds(position, zoom, viewport, bounds));
    }

    #[test]
    fn controller_invariants_hold_after_every_transition(
        viewport in arb_viewport(),
        bounds in arb_bounds(),
        initial_zoom in 0.01_f64..100.0,
        ops in prop::collection::vec(arb_op(), 1..40),
    ) {
        let mut vc = ViewportController::new(viewport, bounds, ZoomLimit::default(), initial_zoom);
        for op in ops {
            match op {
                Op::Pan(d) => vc.pan_by_view(d),
                Op::Wheel(f) => vc.zoom_by(f),
                Op::AnchorZoom(a, f) => vc.zoom_about_view_point(a, f),
                Op::Resize(s) => vc.resize(s),
                Op::DragStart => vc.drag_start(),
                Op::DragEnd => vc.drag_end(),
            }
            let zoom = vc.zoom();
            prop_assert!(zoom >= vc.min_zoom() - EPS && zoom <= vc.max_zoom() + EPS);
            prop_assert!(visible_within_bounds(vc.position(), zoom, vc.viewport(), vc.bounds()));
        }
    }
}
