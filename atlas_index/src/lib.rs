// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas Index: a uniform grid over positioned entities.
//!
//! This crate provides the data model for the atlas canvas ([`Entity`]) and a
//! derived, immutable spatial index ([`GridIndex`]) used to answer "which
//! entities are near this point?" in roughly constant time.
//!
//! The index is a **snapshot**: it is built in one pass from an ordered slice
//! of entities and never updated in place. When the entity set changes, build
//! a new index and replace the old one wholesale. Slot indices returned by
//! queries are positions in the slice the index was built from.
//!
//! ## Minimal example
//!
//! ```rust
//! use atlas_index::{Entity, GridIndex};
//! use kurbo::Point;
//!
//! let entities = [
//!     Entity::at("a.md", Point::new(0.0, 0.0)),
//!     Entity::at("b.md", Point::new(0.5, 0.5)),
//!     Entity::at("c.md", Point::new(-0.5, -0.5)),
//! ];
//! let index = GridIndex::build(&entities);
//!
//! // Candidates come from the 3x3 block of cells around the query point.
//! let near_origin = index.query(Point::new(0.01, 0.0));
//! assert_eq!(near_origin, vec![0]);
//! ```
//!
//! ## Cell sizing
//!
//! The number of cells per axis follows the entity density:
//! `clamp(sqrt(n / 5), 20, 200)`. The cell size is the larger bounds
//! dimension divided by that count, so the grid is square and covers the
//! bounds on its tightest axis.
//!
//! ## Features
//!
//! - `std` (default): build against `std`.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `tracing`: emit `tracing` events when an index is built.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod entity;
mod grid;

pub use entity::{Entity, Positioned};
pub use grid::{
    CellKey, DEGENERATE_CELL_SIZE, ENTITIES_PER_CELL, GridIndex, GridIndexDebugInfo,
    MAX_CELLS_PER_AXIS, MIN_CELLS_PER_AXIS,
};
