// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How data-space positions are shifted before scaling into world space.
///
/// Consulted by [`crate::Placement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Centering {
    /// No offset: `world = data * atlas_scale * 0.5`.
    ///
    /// Suited to data already centered on the origin in `[-1, 1]`.
    #[default]
    None,
    /// Offset by the mean entity position: `world = (data - mean) * atlas_scale`.
    ///
    /// Suited to data in `[0, 1]` or any range not centered on the origin.
    Mean,
}

/// How the maximum zoom is derived from the content-fit (minimum) zoom.
///
/// Consulted by [`crate::ViewportController`] whenever the minimum zoom is
/// recomputed (construction, resize, bounds change).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZoomLimit {
    /// `max_zoom = min_zoom * k`. Multipliers below `1` are treated as `1`.
    Relative(f64),
    /// A fixed maximum zoom, raised to `min_zoom` if the content-fit zoom
    /// exceeds it.
    Absolute(f64),
}

impl Default for ZoomLimit {
    fn default() -> Self {
        Self::Relative(10.0)
    }
}

impl ZoomLimit {
    /// Maximum zoom for the given content-fit zoom. Never below `min_zoom`.
    #[must_use]
    pub fn max_zoom(self, min_zoom: f64) -> f64 {
        match self {
            Self::Relative(k) => min_zoom * k.max(1.0),
            Self::Absolute(z) => z.max(min_zoom),
        }
    }
}
