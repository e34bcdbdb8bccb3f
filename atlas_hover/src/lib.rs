// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas Hover: per-frame hover resolution for the atlas canvas.
//!
//! Given the entity set, the latest pointer position, and the camera, this
//! crate answers "which entity is under the pointer?" once per frame and
//! reports changes through a callback. It ties together the spatial index
//! ([`atlas_index`]), the camera math ([`atlas_view2d`]), and the pointer state
//! machines ([`atlas_event_state`]).
//!
//! - [`HoverResolver`] is the bare per-frame resolver: pointer in data space,
//!   index, and hit radius in; [`HoverState`] out.
//! - [`Atlas`] owns everything one canvas needs: the index (rebuilt when the
//!   entity set changes), the clamped camera, click-versus-drag tracking, and
//!   the resolver. The host forwards input and calls [`Atlas::tick`] each
//!   frame.
//! - [`AtlasConfig`] holds the tunables; invalid values are reported as a
//!   [`ConfigError`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use atlas_hover::{Atlas, AtlasConfig};
//! use atlas_index::Entity;
//! use kurbo::{Point, Size};
//!
//! let mut atlas = Atlas::new(AtlasConfig::default(), Size::new(800.0, 600.0)).unwrap();
//! let entities: Arc<[Entity<&str>]> = Arc::from(vec![
//!     Entity::at("a.md", (0.0, 0.0)),
//!     Entity::at("b.md", (0.5, 0.5)),
//! ]);
//!
//! // Pointer over the middle of the window, where "a.md" is drawn.
//! atlas.pointer_moved(Point::new(400.0, 300.0));
//! let mut hovered = None;
//! let state = atlas.tick(&entities, |id, _slot| hovered = id.copied());
//! assert_eq!(state.index, Some(0));
//! assert_eq!(hovered, Some("a.md"));
//!
//! // Press and release in place: a click on the hovered entity.
//! atlas.pointer_down(Point::new(400.0, 300.0));
//! let click = atlas.pointer_up(Point::new(401.0, 300.0)).unwrap();
//! assert_eq!(click.id, "a.md");
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against `std`.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: `Serialize`/`Deserialize` for [`AtlasConfig`].
//! - `tracing`: emit `tracing` events for hover changes, runs of frames
//!   without a hit, index rebuilds, and camera clamps.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod atlas;
mod config;
mod error;
mod resolver;

pub use atlas::{Atlas, AtlasClick};
pub use atlas_event_state::hover::HoverEvent;
pub use config::AtlasConfig;
pub use error::ConfigError;
pub use resolver::{HoverResolver, HoverState, Hit, MISS_LOG_INTERVAL, nearest_within};
