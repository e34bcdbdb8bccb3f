// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas View 2D: camera math for a bounded, zoomable atlas canvas.
//!
//! This crate provides small, headless models of an orthographic camera over
//! a bounded world plane. It focuses on:
//! - Converting pointer positions (pixels or normalized device coordinates)
//!   into world space, and world space into entity data space.
//! - Computing the content-fit zoom for a viewport and world bounds.
//! - Clamping pan and zoom so the visible region never leaves the bounds.
//! - A pan/zoom state machine that re-applies the clamp on every drag, wheel,
//!   and resize transition.
//!
//! It does **not** draw anything. Renderers read [`ViewportController::camera`]
//! to build their projection/view matrices and use [`Placement`] to position
//! entities in world space.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use atlas_view2d::{Centering, Placement, ViewportController, ZoomLimit};
//!
//! // 800x600 window, world bounds of +/-500 units on each axis.
//! let mut view = ViewportController::new(
//!     Size::new(800.0, 600.0),
//!     Vec2::new(500.0, 500.0),
//!     ZoomLimit::default(),
//!     20.0,
//! );
//! // The requested zoom is clamped into [content-fit, 10x content-fit].
//! assert_eq!(view.zoom(), view.max_zoom());
//!
//! // Drag the canvas; the camera never leaves the bounds.
//! view.pan_by_view(Vec2::new(-5_000.0, 0.0));
//! assert!(view.visible_world_rect().x1 <= 500.0 + 1e-9);
//!
//! // Map the pointer at the window center back into data space.
//! let placement = Placement::new(1000.0, Centering::None);
//! let world = view.camera().view_to_world_point(Point::new(400.0, 300.0));
//! let data = placement.world_to_data(world);
//! assert!(data.x > 0.0);
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis-aligned with a **uniform** zoom, measured in pixels per
//!   world unit. World Y points up, view Y points down.
//! - Bounds are half-extents around the world origin.
//! - [`clamp_camera`] is pure and idempotent.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod modes;
mod placement;
mod projector;

pub use controller::{ViewportController, ViewportDebugInfo};
pub use modes::{Centering, ZoomLimit};
pub use placement::{Placement, mean_center};
pub use projector::{OrthoCamera, clamp, clamp_camera, min_zoom, ndc_to_view, view_to_ndc};
