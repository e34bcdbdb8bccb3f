// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-entity hover resolution.

use atlas_event_state::hover::{HoverEvent, HoverTracker};
use atlas_index::{Entity, GridIndex, Positioned};
use atlas_view2d::Placement;
use kurbo::Point;

/// Consecutive frames without a hit between two "no hit" debug events.
pub const MISS_LOG_INTERVAL: u32 = 60;

/// Result of one frame's hover resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverState {
    /// Slot of the hovered entity in the current entity slice.
    pub index: Option<usize>,
    /// World position of the hovered entity, for placing a highlight.
    pub world_position: Option<Point>,
}

impl HoverState {
    /// Nothing hovered.
    pub const NONE: Self = Self {
        index: None,
        world_position: None,
    };

    /// Returns `true` if an entity is hovered.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.index.is_some()
    }
}

/// Nearest entity found by [`nearest_within`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Slot of the entity.
    pub slot: usize,
    /// Squared distance to the pointer, in data units.
    pub distance_sq: f64,
}

#[derive(Clone, Copy, Debug, Default)]
struct Scan {
    hit: Option<Hit>,
    candidates: usize,
}

/// Finds the entity closest to `pointer` that lies strictly within `radius`.
///
/// `pointer` and `radius` are in data space, the space `index` was built in.
/// Equidistant entities resolve to the lowest slot. Empty input, a
/// non-positive radius, or a non-finite pointer find nothing.
#[must_use]
pub fn nearest_within<P: Positioned>(
    items: &[P],
    index: &GridIndex,
    pointer: Point,
    radius: f64,
) -> Option<Hit> {
    scan(items, index, pointer, radius).hit
}

fn scan<P: Positioned>(items: &[P], index: &GridIndex, pointer: Point, radius: f64) -> Scan {
    let mut scan = Scan::default();
    if items.is_empty()
        || index.is_empty()
        || !pointer.is_finite()
        || radius.is_nan()
        || radius <= 0.0
    {
        return scan;
    }
    let r2 = radius * radius;
    index.visit_within(pointer, radius, |slot| {
        scan.candidates += 1;
        let Some(item) = items.get(slot) else {
            return;
        };
        let d2 = (item.position() - pointer).hypot2();
        if d2 >= r2 {
            return;
        }
        let better = match scan.hit {
            None => true,
            Some(best) => d2 < best.distance_sq || (d2 == best.distance_sq && slot < best.slot),
        };
        if better {
            scan.hit = Some(Hit {
                slot,
                distance_sq: d2,
            });
        }
    });
    scan
}

/// Per-frame hover state machine.
///
/// Each call to [`resolve`](Self::resolve) finds the nearest entity under the
/// pointer and invokes the change callback only when the hovered slot
/// changes, so a steady pointer produces one callback, not one per frame.
#[derive(Clone, Debug, Default)]
pub struct HoverResolver {
    tracker: HoverTracker<usize>,
    transition: Option<HoverEvent<usize>>,
    misses: u32,
    stale: bool,
}

impl HoverResolver {
    /// Creates a resolver with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot hovered after the last [`resolve`](Self::resolve).
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.tracker.current().copied()
    }

    /// How the hover changed in the last [`resolve`](Self::resolve), `None`
    /// if it did not.
    ///
    /// After [`invalidate`](Self::invalidate) a slot that stays hovered is
    /// reported as a switch from that slot to itself, since it now holds a
    /// different entity.
    #[must_use]
    pub fn last_transition(&self) -> Option<HoverEvent<usize>> {
        self.transition
    }

    /// Frames in a row that ended without a hit.
    #[must_use]
    pub fn consecutive_misses(&self) -> u32 {
        self.misses
    }

    /// Marks the hovered slot as possibly referring to a different entity.
    ///
    /// Call after replacing the entity set. The next resolve reports the
    /// hovered entity again even if its slot is unchanged.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Resolves the hovered entity for one frame.
    ///
    /// `pointer` is the pointer position in data space, or `None` when the
    /// pointer is not over the canvas. `hit_radius` is in world units at atlas
    /// scale: the search radius in data space is `hit_radius / atlas_scale`
    /// for either centering mode.
    ///
    /// `on_change` receives the hovered entity's id and slot (both `None` on
    /// leave). It runs at most once per call, and only when the hover changed.
    ///
    /// `index` must have been built from `entities`.
    pub fn resolve<K, C, F>(
        &mut self,
        entities: &[Entity<K, C>],
        index: &GridIndex,
        placement: &Placement,
        pointer: Option<Point>,
        hit_radius: f64,
        mut on_change: F,
    ) -> HoverState
    where
        F: FnMut(Option<&K>, Option<usize>),
    {
        debug_assert_eq!(
            index.len(),
            entities.len(),
            "spatial index was built from a different entity set"
        );
        let radius = hit_radius / placement.atlas_scale();
        let scan = match pointer {
            Some(p) => scan(entities, index, p, radius),
            None => Scan::default(),
        };

        if scan.hit.is_some() {
            self.misses = 0;
        } else {
            self.misses = self.misses.saturating_add(1);
            #[cfg(feature = "tracing")]
            if self.misses.is_multiple_of(MISS_LOG_INTERVAL) {
                let p = pointer.unwrap_or(Point::ZERO);
                tracing::debug!(
                    frames = self.misses,
                    data_x = p.x,
                    data_y = p.y,
                    cell = ?pointer.and_then(|p| index.cell_of(p)),
                    candidates = scan.candidates,
                    radius,
                    "no entity under pointer"
                );
            }
        }

        let slot = scan.hit.map(|h| h.slot);
        let stale = core::mem::take(&mut self.stale);
        self.transition = match (self.tracker.update(slot), slot) {
            (None, Some(s)) if stale => Some(HoverEvent::Switch { from: s, to: s }),
            (event, _) => event,
        };
        if self.transition.is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                transition = ?self.transition,
                distance = scan.hit.map(|h| h.distance_sq.sqrt() * placement.atlas_scale()),
                "hover changed"
            );
            on_change(slot.and_then(|s| entities.get(s)).map(|e| &e.id), slot);
        }

        HoverState {
            index: slot,
            world_position: slot
                .and_then(|s| entities.get(s))
                .map(|e| placement.data_to_world(e.position)),
        }
    }
}
