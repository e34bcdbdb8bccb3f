// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use atlas_view2d::{Centering, ZoomLimit};
use kurbo::Vec2;

use crate::error::ConfigError;

/// Tunables for an [`Atlas`](crate::Atlas).
///
/// Every field has a default matching the desktop app's canvas. Use the
/// `with_*` setters to override individual values, then hand the result to
/// [`Atlas::new`](crate::Atlas::new), which validates it.
///
/// With the `serde` feature, missing fields deserialize to their defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AtlasConfig {
    /// World units per data unit.
    pub atlas_scale: f64,
    /// Rendered entity half-size, as a fraction of `atlas_scale`.
    pub node_scale: f64,
    /// Hit radius in multiples of the rendered entity size.
    pub hit_radius_multiplier: f64,
    /// How the maximum zoom is derived from the content-fit zoom.
    pub zoom_limit: ZoomLimit,
    /// Zoom at construction, clamped into the allowed range.
    pub initial_zoom: f64,
    /// Click-versus-drag threshold in pixels.
    pub drag_threshold: f64,
    /// Data-to-world centering mode.
    pub centering: Centering,
    /// World-space half-extents for the camera clamp. Derived from
    /// `atlas_scale` when `None`.
    pub bounds: Option<Vec2>,
    /// Zoom factor applied per wheel notch away from the viewer; the inverse
    /// is applied towards the viewer.
    pub wheel_zoom_step: f64,
}

impl AtlasConfig {
    /// Default world units per data unit.
    pub const DEFAULT_ATLAS_SCALE: f64 = 1000.0;
    /// Default rendered entity half-size.
    pub const DEFAULT_NODE_SCALE: f64 = 0.1;
    /// Default hit radius multiplier.
    pub const DEFAULT_HIT_RADIUS_MULTIPLIER: f64 = 2.0;
    /// Default initial zoom.
    pub const DEFAULT_INITIAL_ZOOM: f64 = 20.0;
    /// Default click-versus-drag threshold in pixels.
    pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;
    /// Default per-notch wheel zoom factor.
    pub const DEFAULT_WHEEL_ZOOM_STEP: f64 = 0.95;

    /// Sets [`atlas_scale`](Self::atlas_scale).
    #[must_use]
    pub fn with_atlas_scale(mut self, atlas_scale: f64) -> Self {
        self.atlas_scale = atlas_scale;
        self
    }

    /// Sets [`node_scale`](Self::node_scale).
    #[must_use]
    pub fn with_node_scale(mut self, node_scale: f64) -> Self {
        self.node_scale = node_scale;
        self
    }

    /// Sets [`hit_radius_multiplier`](Self::hit_radius_multiplier).
    #[must_use]
    pub fn with_hit_radius_multiplier(mut self, multiplier: f64) -> Self {
        self.hit_radius_multiplier = multiplier;
        self
    }

    /// Sets [`zoom_limit`](Self::zoom_limit).
    #[must_use]
    pub fn with_zoom_limit(mut self, zoom_limit: ZoomLimit) -> Self {
        self.zoom_limit = zoom_limit;
        self
    }

    /// Sets [`initial_zoom`](Self::initial_zoom).
    #[must_use]
    pub fn with_initial_zoom(mut self, initial_zoom: f64) -> Self {
        self.initial_zoom = initial_zoom;
        self
    }

    /// Sets [`drag_threshold`](Self::drag_threshold).
    #[must_use]
    pub fn with_drag_threshold(mut self, drag_threshold: f64) -> Self {
        self.drag_threshold = drag_threshold;
        self
    }

    /// Sets [`centering`](Self::centering).
    #[must_use]
    pub fn with_centering(mut self, centering: Centering) -> Self {
        self.centering = centering;
        self
    }

    /// Sets explicit world [`bounds`](Self::bounds).
    #[must_use]
    pub fn with_bounds(mut self, bounds: Vec2) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Sets [`wheel_zoom_step`](Self::wheel_zoom_step).
    #[must_use]
    pub fn with_wheel_zoom_step(mut self, step: f64) -> Self {
        self.wheel_zoom_step = step;
        self
    }

    /// Hover hit radius in world units:
    /// `node_scale * atlas_scale * hit_radius_multiplier`.
    #[must_use]
    pub fn hit_radius(&self) -> f64 {
        self.node_scale * self.atlas_scale * self.hit_radius_multiplier
    }

    /// World-space half-extents for the camera clamp.
    ///
    /// Without explicit bounds this is half of `atlas_scale` on each axis,
    /// which covers data in `[-1, 1]` uncentered or `[0, 1]` mean-centered.
    #[must_use]
    pub fn world_bounds(&self) -> Vec2 {
        self.bounds.unwrap_or_else(|| {
            let half = self.atlas_scale * 0.5;
            Vec2::new(half, half)
        })
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.atlas_scale) {
            return Err(ConfigError::AtlasScale(self.atlas_scale));
        }
        if !non_negative(self.node_scale) {
            return Err(ConfigError::NodeScale(self.node_scale));
        }
        if !non_negative(self.hit_radius_multiplier) {
            return Err(ConfigError::HitRadiusMultiplier(self.hit_radius_multiplier));
        }
        if !positive(self.initial_zoom) {
            return Err(ConfigError::InitialZoom(self.initial_zoom));
        }
        if !non_negative(self.drag_threshold) {
            return Err(ConfigError::DragThreshold(self.drag_threshold));
        }
        match self.zoom_limit {
            ZoomLimit::Relative(k) if !(k.is_finite() && k >= 1.0) => {
                return Err(ConfigError::ZoomMultiplier(k));
            }
            ZoomLimit::Absolute(z) if !positive(z) => return Err(ConfigError::MaxZoom(z)),
            _ => {}
        }
        if let Some(b) = self.bounds
            && !(positive(b.x) && positive(b.y))
        {
            return Err(ConfigError::Bounds { x: b.x, y: b.y });
        }
        if !(positive(self.wheel_zoom_step) && self.wheel_zoom_step < 1.0) {
            return Err(ConfigError::WheelZoomStep(self.wheel_zoom_step));
        }
        Ok(())
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            atlas_scale: Self::DEFAULT_ATLAS_SCALE,
            node_scale: Self::DEFAULT_NODE_SCALE,
            hit_radius_multiplier: Self::DEFAULT_HIT_RADIUS_MULTIPLIER,
            zoom_limit: ZoomLimit::default(),
            initial_zoom: Self::DEFAULT_INITIAL_ZOOM,
            drag_threshold: Self::DEFAULT_DRAG_THRESHOLD,
            centering: Centering::default(),
            bounds: None,
            wheel_zoom_step: Self::DEFAULT_WHEEL_ZOOM_STEP,
        }
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

#[cfg(test)]
mod tests {
    use atlas_view2d::ZoomLimit;
    use kurbo::Vec2;

    use super::AtlasConfig;
    use crate::error::ConfigError;

    #[test]
    fn defaults_are_valid() {
        let config = AtlasConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.hit_radius(), 200.0);
        assert_eq!(config.world_bounds(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn explicit_bounds_win() {
        let config = AtlasConfig::default().with_bounds(Vec2::new(504.0, 504.0));
        assert_eq!(config.world_bounds(), Vec2::new(504.0, 504.0));
    }

    #[test]
    fn invalid_fields_are_reported() {
        let base = AtlasConfig::default();
        assert_eq!(
            base.with_atlas_scale(0.0).validate(),
            Err(ConfigError::AtlasScale(0.0))
        );
        assert_eq!(
            base.with_node_scale(-1.0).validate(),
            Err(ConfigError::NodeScale(-1.0))
        );
        assert_eq!(
            base.with_initial_zoom(-2.0).validate(),
            Err(ConfigError::InitialZoom(-2.0))
        );
        assert_eq!(
            base.with_zoom_limit(ZoomLimit::Relative(0.5)).validate(),
            Err(ConfigError::ZoomMultiplier(0.5))
        );
        assert_eq!(
            base.with_zoom_limit(ZoomLimit::Absolute(0.0)).validate(),
            Err(ConfigError::MaxZoom(0.0))
        );
        assert_eq!(
            base.with_bounds(Vec2::new(10.0, 0.0)).validate(),
            Err(ConfigError::Bounds { x: 10.0, y: 0.0 })
        );
        assert_eq!(
            base.with_wheel_zoom_step(1.5).validate(),
            Err(ConfigError::WheelZoomStep(1.5))
        );
        assert!(base.with_drag_threshold(f64::NAN).validate().is_err());
    }

    #[test]
    fn zero_node_scale_is_allowed() {
        let config = AtlasConfig::default().with_node_scale(0.0);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.hit_radius(), 0.0);
    }
}
