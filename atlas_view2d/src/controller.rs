// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::modes::ZoomLimit;
use crate::projector::{self, OrthoCamera};

/// Zoom range used until a usable viewport and bounds are known.
const FALLBACK_ZOOM_RANGE: (f64, f64) = (1e-3, 1e3);

/// Pan/zoom state machine for the atlas camera.
///
/// `ViewportController` owns an [`OrthoCamera`] and re-applies
/// [`projector::clamp_camera`] after every camera-changing transition, so the
/// visible region never leaves the world bounds and the zoom stays within
/// `[min_zoom, max_zoom]`:
/// - `min_zoom` is the content-fit zoom for the current viewport and bounds.
/// - `max_zoom` follows the configured [`ZoomLimit`].
///
/// Both limits are recomputed on resize and when the bounds change.
#[derive(Clone, Debug)]
pub struct ViewportController {
    camera: OrthoCamera,
    bounds: Vec2,
    zoom_limit: ZoomLimit,
    min_zoom: f64,
    max_zoom: f64,
    dragging: bool,
}

impl ViewportController {
    /// Creates a controller centered on the world origin.
    ///
    /// `bounds` are world-space half-extents. `initial_zoom` is clamped into
    /// the zoom range derived from `viewport` and `bounds`; a non-positive or
    /// non-finite value starts at the content-fit zoom.
    #[must_use]
    pub fn new(viewport: Size, bounds: Vec2, zoom_limit: ZoomLimit, initial_zoom: f64) -> Self {
        let mut vc = Self {
            camera: OrthoCamera::new(viewport),
            bounds,
            zoom_limit,
            min_zoom: FALLBACK_ZOOM_RANGE.0,
            max_zoom: FALLBACK_ZOOM_RANGE.1,
            dragging: false,
        };
        vc.update_limits();
        vc.camera.zoom = if is_valid_zoom(initial_zoom) {
            initial_zoom
        } else {
            vc.min_zoom
        };
        vc.apply_clamp();
        vc
    }

    /// Current camera state, for building projection/view matrices.
    #[must_use]
    pub fn camera(&self) -> OrthoCamera {
        self.camera
    }

    /// World-space point at the center of the viewport.
    #[must_use]
    pub fn position(&self) -> Point {
        self.camera.position
    }

    /// Current zoom (pixels per world unit).
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.camera.viewport
    }

    /// World-space half-extents the view is clamped to.
    #[must_use]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Content-fit zoom for the current viewport and bounds.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Largest zoom allowed by the current [`ZoomLimit`].
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Returns the zoom limit policy.
    #[must_use]
    pub fn zoom_limit(&self) -> ZoomLimit {
        self.zoom_limit
    }

    /// Returns `true` between [`drag_start`](Self::drag_start) and
    /// [`drag_end`](Self::drag_end).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// World-space rectangle currently visible.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.camera.visible_world_rect()
    }

    /// Replaces the world bounds and re-derives the zoom range.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.update_limits();
        self.apply_clamp();
    }

    /// Replaces the zoom limit policy.
    pub fn set_zoom_limit(&mut self, zoom_limit: ZoomLimit) {
        self.zoom_limit = zoom_limit;
        self.update_limits();
        self.apply_clamp();
    }

    /// Sets the zoom, clamped into `[min_zoom, max_zoom]`.
    ///
    /// Non-positive and non-finite values are rejected.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !is_valid_zoom(zoom) {
            return;
        }
        self.camera.zoom = zoom;
        self.apply_clamp();
    }

    /// Multiplies the zoom by `factor`, keeping the viewport center fixed.
    pub fn zoom_by(&mut self, factor: f64) {
        if !is_valid_zoom(factor) {
            return;
        }
        self.set_zoom(self.camera.zoom * factor);
    }

    /// Multiplies the zoom by `factor` around an anchor in view/device
    /// coordinates.
    ///
    /// The world point under the anchor stays under it, unless clamping has to
    /// move the camera afterwards.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) {
        if !is_valid_zoom(factor) {
            return;
        }
        let new_zoom = (self.camera.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        let world_before = self.camera.view_to_world_point(anchor_view);
        self.camera.zoom = new_zoom;
        let world_after = self.camera.view_to_world_point(anchor_view);
        self.camera.position += world_before - world_after;
        self.apply_clamp();
    }

    /// Pans by a pointer delta in view/device pixels.
    ///
    /// The content follows the pointer: dragging right moves the camera left.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        let zoom = self.camera.zoom;
        self.pan_by_world(Vec2::new(-delta.x / zoom, delta.y / zoom));
    }

    /// Moves the camera by a world-space delta.
    pub fn pan_by_world(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.camera.position += delta;
        self.apply_clamp();
    }

    /// Centers the view on a world-space point, as far as the bounds allow.
    pub fn center_on(&mut self, world: Point) {
        self.camera.position = world;
        self.apply_clamp();
    }

    /// Handles a viewport resize: re-derives the zoom range, then re-clamps
    /// zoom and position.
    pub fn resize(&mut self, viewport: Size) {
        if self.camera.viewport == viewport {
            return;
        }
        self.camera.viewport = viewport;
        self.update_limits();
        self.apply_clamp();
    }

    /// Marks the start of a pan gesture and corrects any drift.
    pub fn drag_start(&mut self) {
        self.dragging = true;
        self.apply_clamp();
    }

    /// Marks the end of a pan gesture and corrects any drift.
    pub fn drag_end(&mut self) {
        self.dragging = false;
        self.apply_clamp();
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            camera: self.camera,
            bounds: self.bounds,
            visible_world_rect: self.visible_world_rect(),
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            zoom_limit: self.zoom_limit,
            dragging: self.dragging,
        }
    }

    fn update_limits(&mut self) {
        let min_zoom = projector::min_zoom(self.camera.viewport, self.bounds);
        // Degenerate viewport or bounds: keep the last usable range.
        if !is_valid_zoom(min_zoom) {
            return;
        }
        self.min_zoom = min_zoom;
        self.max_zoom = self.zoom_limit.max_zoom(min_zoom);
    }

    fn apply_clamp(&mut self) {
        let zoom = self.camera.zoom.clamp(self.min_zoom, self.max_zoom);
        let (position, zoom) =
            projector::clamp_camera(self.camera.position, zoom, self.camera.viewport, self.bounds);

        #[cfg(feature = "tracing")]
        if position != self.camera.position || zoom != self.camera.zoom {
            tracing::trace!(
                x = position.x,
                y = position.y,
                zoom,
                requested_zoom = self.camera.zoom,
                "camera clamped"
            );
        }

        self.camera.position = position;
        self.camera.zoom = zoom;
    }
}

fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_finite() && zoom > 0.0
}

/// Debug snapshot of a [`ViewportController`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Camera after the last clamp.
    pub camera: OrthoCamera,
    /// World-space half-extents.
    pub bounds: Vec2,
    /// World-space rectangle currently visible.
    pub visible_world_rect: Rect,
    /// Content-fit zoom.
    pub min_zoom: f64,
    /// Maximum zoom.
    pub max_zoom: f64,
    /// Zoom limit policy.
    pub zoom_limit: ZoomLimit,
    /// Whether a pan gesture is in progress.
    pub dragging: bool,
}
