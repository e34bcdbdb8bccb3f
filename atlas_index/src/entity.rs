// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// A positioned, identifiable record rendered as a point in the atlas.
///
/// `position` is in data space (the caller's native, unscaled coordinates).
/// `color` is opaque to the index and resolver; it is carried for renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity<K, C = ()> {
    /// Unique identifier within one entity set (for example, a file path).
    pub id: K,
    /// Position in data space.
    pub position: Point,
    /// Display attribute, passed through untouched.
    pub color: C,
}

impl<K, C> Entity<K, C> {
    /// Creates an entity with an explicit color.
    pub fn new(id: K, position: impl Into<Point>, color: C) -> Self {
        Self {
            id,
            position: position.into(),
            color,
        }
    }
}

impl<K> Entity<K> {
    /// Creates an entity with no color payload.
    pub fn at(id: K, position: impl Into<Point>) -> Self {
        Self::new(id, position, ())
    }
}

/// Anything with a data-space position that can be indexed.
pub trait Positioned {
    /// Data-space position of this item.
    fn position(&self) -> Point;
}

impl Positioned for Point {
    #[inline]
    fn position(&self) -> Point {
        *self
    }
}

impl<K, C> Positioned for Entity<K, C> {
    #[inline]
    fn position(&self) -> Point {
        self.position
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    #[inline]
    fn position(&self) -> Point {
        (**self).position()
    }
}
