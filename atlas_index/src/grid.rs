// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend. Buckets slot indices by cell; queries visit a square
//! block of cells around the query point.

use alloc::vec::Vec;

use hashbrown::HashMap;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::entity::Positioned;

/// Lower bound on the number of cells along the longest bounds axis.
pub const MIN_CELLS_PER_AXIS: f64 = 20.0;

/// Upper bound on the number of cells along the longest bounds axis.
pub const MAX_CELLS_PER_AXIS: f64 = 200.0;

/// Target density used by the cell-count heuristic.
pub const ENTITIES_PER_CELL: f64 = 5.0;

/// Cell size used when every indexed entity shares one position.
///
/// The bounds then have zero extent and the density heuristic would divide
/// by zero; one data unit keeps nearby queries landing in the occupied cell.
pub const DEGENERATE_CELL_SIZE: f64 = 1.0;

/// Discrete cell coordinates, relative to the minimum corner of the bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    /// Column, counted from the left edge of the bounds.
    pub x: i32,
    /// Row, counted from the bottom edge of the bounds.
    pub y: i32,
}

impl CellKey {
    /// Creates a cell key.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

type Bucket = SmallVec<[usize; 4]>;

/// Immutable uniform-grid index over one entity snapshot.
///
/// Build with [`GridIndex::build`]; query with [`GridIndex::query`] (the 3x3
/// block around the point) or [`GridIndex::query_within`] (a block wide
/// enough to cover a search radius).
///
/// The index stores slot indices only, not positions. Callers must keep the
/// slice it was built from and must rebuild whenever that slice changes.
#[derive(Clone, Debug, Default)]
pub struct GridIndex {
    len: usize,
    bounds: Option<Rect>,
    cell_size: f64,
    cells_per_axis: f64,
    max_cell: CellKey,
    cells: HashMap<CellKey, Bucket>,
}

impl GridIndex {
    /// Builds an index over `items`, in slice order.
    ///
    /// Items with non-finite positions are counted in [`GridIndex::len`] but
    /// never bucketed, so queries cannot return them. An empty slice yields an
    /// index with zero cell size and no cells.
    #[must_use]
    pub fn build<P: Positioned>(items: &[P]) -> Self {
        let len = items.len();
        let mut bounds: Option<Rect> = None;
        let mut skipped = 0_usize;
        for item in items {
            let p = item.position();
            if !p.is_finite() {
                skipped += 1;
                continue;
            }
            bounds = Some(match bounds {
                Some(b) => b.union_pt(p),
                None => Rect::from_points(p, p),
            });
        }

        #[cfg(feature = "tracing")]
        if skipped > 0 {
            tracing::warn!(skipped, "entities with non-finite positions left out of the index");
        }

        let Some(bounds) = bounds else {
            return Self {
                len,
                ..Self::default()
            };
        };

        let cells_per_axis =
            (len as f64 / ENTITIES_PER_CELL).sqrt().clamp(MIN_CELLS_PER_AXIS, MAX_CELLS_PER_AXIS);
        let extent = bounds.width().max(bounds.height());
        // Subnormal extents divide to zero, overflowing ones to infinity.
        let cell_size = match extent / cells_per_axis {
            size if size > 0.0 && size.is_finite() => size,
            _ => DEGENERATE_CELL_SIZE,
        };

        let mut index = Self {
            len,
            bounds: Some(bounds),
            cell_size,
            cells_per_axis,
            max_cell: CellKey::default(),
            cells: HashMap::with_capacity(len.saturating_sub(skipped).min(1 << 16)),
        };
        for (slot, item) in items.iter().enumerate() {
            let p = item.position();
            if !p.is_finite() {
                continue;
            }
            let (fx, fy) = index.cell_coords(p);
            let key = CellKey::new(to_cell(fx), to_cell(fy));
            index.max_cell.x = index.max_cell.x.max(key.x);
            index.max_cell.y = index.max_cell.y.max(key.y);
            index.cells.entry(key).or_default().push(slot);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = len,
            cells = index.cells.len(),
            min_x = bounds.x0,
            min_y = bounds.y0,
            max_x = bounds.x1,
            max_y = bounds.y1,
            cell_size,
            "spatial index built"
        );

        index
    }

    /// Number of slots in the snapshot this index was built from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the snapshot had no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Axis-aligned bounds of all finite entity positions, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Side length of one square cell, in data units. Zero for an empty index.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of cells that hold at least one slot.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Slots bucketed in `key`, in ascending order.
    #[must_use]
    pub fn cell(&self, key: CellKey) -> &[usize] {
        self.cells.get(&key).map_or(&[], |b| b.as_slice())
    }

    /// Cell containing `point`, or `None` for an empty index or a non-finite
    /// point.
    ///
    /// The returned key may lie outside the occupied grid; such cells are
    /// simply empty.
    #[must_use]
    pub fn cell_of(&self, point: Point) -> Option<CellKey> {
        if self.cells.is_empty() || !point.is_finite() {
            return None;
        }
        let (fx, fy) = self.cell_coords(point);
        Some(CellKey::new(to_cell(fx), to_cell(fy)))
    }

    /// Candidate slots in the 3x3 block of cells centered on `point`.
    ///
    /// Every entity within one [`cell_size`](Self::cell_size) of `point` is in
    /// the result. Candidates are not distance-filtered.
    #[must_use]
    pub fn query(&self, point: Point) -> Vec<usize> {
        let mut out = Vec::new();
        self.visit_block(point, 1.0, |slot| out.push(slot));
        out
    }

    /// Candidate slots in the smallest square block of cells guaranteed to
    /// contain every entity within `radius` of `point`.
    ///
    /// For `radius <= cell_size` this is the same 3x3 block as
    /// [`GridIndex::query`].
    #[must_use]
    pub fn query_within(&self, point: Point, radius: f64) -> Vec<usize> {
        let mut out = Vec::new();
        self.visit_within(point, radius, |slot| out.push(slot));
        out
    }

    /// Visits the same slots as [`GridIndex::query_within`] without
    /// allocating.
    pub fn visit_within<F: FnMut(usize)>(&self, point: Point, radius: f64, f: F) {
        let ring = (radius / self.cell_size).ceil().max(1.0);
        self.visit_block(point, ring, f);
    }

    /// Snapshot of the index shape for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GridIndexDebugInfo {
        GridIndexDebugInfo {
            len: self.len,
            indexed: self.cells.values().map(|b| b.len()).sum(),
            occupied_cells: self.cells.len(),
            bounds: self.bounds,
            cell_size: self.cell_size,
            cells_per_axis: self.cells_per_axis,
        }
    }

    fn cell_coords(&self, p: Point) -> (f64, f64) {
        let origin = self.bounds.map_or(Point::ZERO, |b| b.origin());
        (
            ((p.x - origin.x) / self.cell_size).floor(),
            ((p.y - origin.y) / self.cell_size).floor(),
        )
    }

    /// Visits every bucket whose cell lies within `ring` cells of the cell
    /// containing `point`, clipped to the occupied grid.
    fn visit_block<F: FnMut(usize)>(&self, point: Point, ring: f64, mut f: F) {
        if self.cells.is_empty()
            || !point.is_finite()
            || self.cell_size <= 0.0
            || !self.cell_size.is_finite()
        {
            return;
        }
        let (fx, fy) = self.cell_coords(point);
        // Buckets only exist in [0, max_cell]; clipping in float space keeps
        // far-away pointers from overflowing the integer cell range.
        let x0 = (fx - ring).max(0.0);
        let y0 = (fy - ring).max(0.0);
        let x1 = (fx + ring).min(f64::from(self.max_cell.x));
        let y1 = (fy + ring).min(f64::from(self.max_cell.y));
        if x0 > x1 || y0 > y1 {
            return;
        }
        for x in to_cell(x0)..=to_cell(x1) {
            for y in to_cell(y0)..=to_cell(y1) {
                if let Some(bucket) = self.cells.get(&CellKey::new(x, y)) {
                    for &slot in bucket {
                        f(slot);
                    }
                }
            }
        }
    }
}

#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "inputs are already floored; `as` saturates out-of-range values"
)]
fn to_cell(v: f64) -> i32 {
    v as i32
}

/// Debug snapshot of a [`GridIndex`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridIndexDebugInfo {
    /// Slots in the source snapshot.
    pub len: usize,
    /// Slots actually bucketed (finite positions).
    pub indexed: usize,
    /// Number of non-empty cells.
    pub occupied_cells: usize,
    /// Bounds of all finite positions.
    pub bounds: Option<Rect>,
    /// Cell side length in data units.
    pub cell_size: f64,
    /// Result of the density heuristic, before the cell size was derived.
    pub cells_per_axis: f64,
}
