// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::modes::Centering;

/// Mapping between data space (entity positions) and world space (camera and
/// render coordinates).
///
/// Renderers place entities with [`Placement::data_to_world`]; hover
/// resolution maps the unprojected pointer back with
/// [`Placement::world_to_data`]. The two are exact inverses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    atlas_scale: f64,
    centering: Centering,
    center: Point,
}

impl Placement {
    /// Creates a placement with the center at the data-space origin.
    #[must_use]
    pub fn new(atlas_scale: f64, centering: Centering) -> Self {
        Self {
            atlas_scale,
            centering,
            center: Point::ZERO,
        }
    }

    /// World units per data unit, before centering.
    #[must_use]
    pub fn atlas_scale(&self) -> f64 {
        self.atlas_scale
    }

    /// Returns the centering mode.
    #[must_use]
    pub fn centering(&self) -> Centering {
        self.centering
    }

    /// Data-space center subtracted under [`Centering::Mean`].
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Sets the data-space center. Ignored by [`Centering::None`].
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Effective world units per data unit.
    #[must_use]
    pub fn world_per_data(&self) -> f64 {
        match self.centering {
            Centering::None => self.atlas_scale * 0.5,
            Centering::Mean => self.atlas_scale,
        }
    }

    /// Maps a data-space position into world space.
    #[must_use]
    pub fn data_to_world(&self, data: Point) -> Point {
        (self.offset(data) * self.world_per_data()).to_point()
    }

    /// Maps a world-space position back into data space.
    #[must_use]
    pub fn world_to_data(&self, world: Point) -> Point {
        let v = world.to_vec2() / self.world_per_data();
        match self.centering {
            Centering::None => v.to_point(),
            Centering::Mean => self.center + v,
        }
    }

    /// Converts a world-space length (such as a hit radius) to data units.
    #[must_use]
    pub fn world_to_data_distance(&self, world: f64) -> f64 {
        world / self.world_per_data()
    }

    fn offset(&self, data: Point) -> Vec2 {
        match self.centering {
            Centering::None => data.to_vec2(),
            Centering::Mean => data - self.center,
        }
    }
}

/// Arithmetic mean of the finite points in `points`; the origin if there are
/// none.
#[must_use]
pub fn mean_center<I: IntoIterator<Item = Point>>(points: I) -> Point {
    let mut sum = Vec2::ZERO;
    let mut count = 0_u32;
    for p in points {
        if p.is_finite() {
            sum += p.to_vec2();
            count += 1;
        }
    }
    if count == 0 {
        return Point::ZERO;
    }
    (sum / f64::from(count)).to_point()
}
