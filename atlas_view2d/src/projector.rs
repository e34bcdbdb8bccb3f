// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orthographic camera math: pointer unprojection and pan/zoom clamps.
//!
//! Everything here is pure. [`clamp_camera`] is idempotent: feeding its output
//! back in returns the same output.

use kurbo::{Point, Rect, Size, Vec2};

/// Orthographic camera looking down on the world plane.
///
/// The visible region is `viewport / zoom` world units, centered on
/// `position`. World Y points up; view (pixel) Y points down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthoCamera {
    /// World-space point at the center of the viewport.
    pub position: Point,
    /// Pixels per world unit. Must be positive.
    pub zoom: f64,
    /// Viewport size in pixels.
    pub viewport: Size,
}

impl OrthoCamera {
    /// Creates a camera centered on the world origin at zoom `1.0`.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            position: Point::ZERO,
            zoom: 1.0,
            viewport,
        }
    }

    /// Half of the visible world extent along each axis.
    #[must_use]
    pub fn visible_half_extent(&self) -> Vec2 {
        Vec2::new(self.viewport.width, self.viewport.height) / self.zoom / 2.0
    }

    /// World-space rectangle currently visible through the viewport.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let half = self.visible_half_extent();
        Rect::from_points(self.position - half, self.position + half)
    }

    /// Unprojects a point in normalized device coordinates into world space.
    #[must_use]
    pub fn ndc_to_world(&self, ndc: Point) -> Point {
        let half = self.visible_half_extent();
        self.position + Vec2::new(ndc.x * half.x, ndc.y * half.y)
    }

    /// Projects a world-space point into normalized device coordinates.
    #[must_use]
    pub fn world_to_ndc(&self, world: Point) -> Point {
        let half = self.visible_half_extent();
        let d = world - self.position;
        Point::new(d.x / half.x, d.y / half.y)
    }

    /// Converts a view/device-space point (pixels, Y down) into world space.
    #[must_use]
    pub fn view_to_world_point(&self, view: Point) -> Point {
        self.ndc_to_world(view_to_ndc(view, self.viewport))
    }

    /// Converts a world-space point into view/device space (pixels, Y down).
    #[must_use]
    pub fn world_to_view_point(&self, world: Point) -> Point {
        ndc_to_view(self.world_to_ndc(world), self.viewport)
    }

    /// World units covered by one pixel.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.zoom
    }
}

/// Converts a view/device-space point (pixels, origin top-left, Y down) into
/// normalized device coordinates (each axis in `[-1, 1]`, Y up).
///
/// A zero-size viewport maps everything to the center.
#[must_use]
pub fn view_to_ndc(view: Point, viewport: Size) -> Point {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Point::ZERO;
    }
    Point::new(
        view.x / viewport.width * 2.0 - 1.0,
        1.0 - view.y / viewport.height * 2.0,
    )
}

/// Inverse of [`view_to_ndc`].
#[must_use]
pub fn ndc_to_view(ndc: Point, viewport: Size) -> Point {
    Point::new(
        (ndc.x + 1.0) * 0.5 * viewport.width,
        (1.0 - ndc.y) * 0.5 * viewport.height,
    )
}

/// Content-fit zoom: the zoom at which the bounded extent fills the viewport
/// on its tightest axis.
///
/// `bounds` are world-space half-extents. Returns `0.0` for a zero-size
/// viewport and infinity for zero bounds; see [`clamp_camera`] for how those
/// are treated.
#[must_use]
pub fn min_zoom(viewport: Size, bounds: Vec2) -> f64 {
    (viewport.width / (2.0 * bounds.x)).max(viewport.height / (2.0 * bounds.y))
}

/// Clamps a camera so that its visible rectangle stays within
/// `[-bounds, bounds]` and its zoom is at least [`min_zoom`].
///
/// Zero or non-finite bounds and zero-size viewports leave the camera
/// unchanged. `zoom` must be positive; in release builds a non-positive zoom is
/// raised to the content-fit zoom like any other too-small zoom.
#[must_use]
pub fn clamp_camera(position: Point, zoom: f64, viewport: Size, bounds: Vec2) -> (Point, f64) {
    debug_assert!(zoom > 0.0, "camera zoom must be positive, got {zoom}");
    if !is_usable(viewport, bounds) {
        return (position, zoom);
    }

    let zoom = zoom.max(min_zoom(viewport, bounds));
    let visible_half = Vec2::new(viewport.width, viewport.height) / zoom / 2.0;
    let max_pan = Vec2::new(
        (bounds.x - visible_half.x).max(0.0),
        (bounds.y - visible_half.y).max(0.0),
    );
    let position = Point::new(
        clamp_axis(position.x, max_pan.x),
        clamp_axis(position.y, max_pan.y),
    );
    (position, zoom)
}

/// [`clamp_camera`] applied to an [`OrthoCamera`].
#[must_use]
pub fn clamp(camera: OrthoCamera, bounds: Vec2) -> OrthoCamera {
    let (position, zoom) = clamp_camera(camera.position, camera.zoom, camera.viewport, bounds);
    OrthoCamera {
        position,
        zoom,
        viewport: camera.viewport,
    }
}

fn is_usable(viewport: Size, bounds: Vec2) -> bool {
    viewport.width > 0.0
        && viewport.height > 0.0
        && viewport.is_finite()
        && bounds.x > 0.0
        && bounds.y > 0.0
        && bounds.is_finite()
}

fn clamp_axis(v: f64, max_pan: f64) -> f64 {
    if v.is_finite() {
        v.clamp(-max_pan, max_pan)
    } else {
        0.0
    }
}
