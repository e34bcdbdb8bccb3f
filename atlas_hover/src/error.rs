// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A rejected [`AtlasConfig`](crate::AtlasConfig) field.
///
/// Each variant carries the offending value.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `atlas_scale` is not positive and finite.
    #[error("atlas scale must be positive and finite, got {0}")]
    AtlasScale(f64),
    /// `node_scale` is negative or not finite.
    #[error("node scale must be non-negative and finite, got {0}")]
    NodeScale(f64),
    /// `hit_radius_multiplier` is negative or not finite.
    #[error("hit radius multiplier must be non-negative and finite, got {0}")]
    HitRadiusMultiplier(f64),
    /// `initial_zoom` is not positive and finite.
    #[error("initial zoom must be positive and finite, got {0}")]
    InitialZoom(f64),
    /// `drag_threshold` is negative or not finite.
    #[error("drag threshold must be non-negative and finite, got {0} px")]
    DragThreshold(f64),
    /// A relative zoom limit below 1.
    #[error("relative zoom limit must be at least 1, got {0}")]
    ZoomMultiplier(f64),
    /// An absolute maximum zoom that is not positive and finite.
    #[error("maximum zoom must be positive and finite, got {0}")]
    MaxZoom(f64),
    /// Explicit world bounds with a non-positive or non-finite half-extent.
    #[error("world bounds must be positive and finite, got ({x}, {y})")]
    Bounds {
        /// Horizontal half-extent.
        x: f64,
        /// Vertical half-extent.
        y: f64,
    },
    /// `wheel_zoom_step` outside `(0, 1)`.
    #[error("wheel zoom step must lie in (0, 1), got {0}")]
    WheelZoomStep(f64),
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::ConfigError;

    #[test]
    fn messages_name_the_value() {
        assert_eq!(
            ConfigError::AtlasScale(-1.0).to_string(),
            "atlas scale must be positive and finite, got -1"
        );
        assert_eq!(
            ConfigError::Bounds { x: 0.0, y: 5.0 }.to_string(),
            "world bounds must be positive and finite, got (0, 5)"
        );
    }
}
