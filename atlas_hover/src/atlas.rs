// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use atlas_event_state::hover::HoverEvent;
use atlas_event_state::pointer::{PointerEvent, PointerTracker};
use atlas_index::{Entity, GridIndex};
use atlas_view2d::{Centering, OrthoCamera, Placement, ViewportController, mean_center, ndc_to_view};
use kurbo::{Point, Size};

use crate::config::AtlasConfig;
use crate::error::ConfigError;
use crate::resolver::{HoverResolver, HoverState};

/// A click on a hovered entity, reported by [`Atlas::pointer_up`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasClick<K> {
    /// Id of the clicked entity.
    pub id: K,
    /// Slot of the clicked entity in the current entity set.
    pub slot: usize,
}

/// Hover, click, and camera state for one atlas canvas.
///
/// The host forwards input events as they arrive and calls
/// [`tick`](Self::tick) once per rendered frame. Pointer moves are coalesced:
/// only the latest position matters when the frame resolves the hover. Press
/// and release are handled immediately.
///
/// The entity set is shared as an `Arc<[Entity]>`. Handing a different `Arc`
/// to [`tick`](Self::tick) or [`set_entities`](Self::set_entities) rebuilds
/// the spatial index before the hover is resolved.
#[derive(Clone, Debug)]
pub struct Atlas<K, C = ()> {
    config: AtlasConfig,
    entities: Arc<[Entity<K, C>]>,
    index: GridIndex,
    placement: Placement,
    resolver: HoverResolver,
    view: ViewportController,
    pointer: PointerTracker,
    cursor: Option<Point>,
    hover: HoverState,
}

impl<K: Clone, C> Atlas<K, C> {
    /// Creates an atlas with no entities for a viewport of the given pixel
    /// size.
    pub fn new(config: AtlasConfig, viewport: Size) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            entities: Arc::from(Vec::new()),
            index: GridIndex::default(),
            placement: Placement::new(config.atlas_scale, config.centering),
            resolver: HoverResolver::new(),
            view: ViewportController::new(
                viewport,
                config.world_bounds(),
                config.zoom_limit,
                config.initial_zoom,
            ),
            pointer: PointerTracker::new(config.drag_threshold),
            cursor: None,
            hover: HoverState::NONE,
            config,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    /// Current entity set.
    #[must_use]
    pub fn entities(&self) -> &Arc<[Entity<K, C>]> {
        &self.entities
    }

    /// Spatial index over the current entity set.
    #[must_use]
    pub fn index(&self) -> &GridIndex {
        &self.index
    }

    /// Data-to-world mapping for the current entity set.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Camera controller.
    #[must_use]
    pub fn view(&self) -> &ViewportController {
        &self.view
    }

    /// Mutable camera controller, for programmatic moves such as
    /// [`ViewportController::center_on`]. The controller keeps its clamp
    /// invariants on every call.
    pub fn view_mut(&mut self) -> &mut ViewportController {
        &mut self.view
    }

    /// Current camera, for building projection/view matrices.
    #[must_use]
    pub fn camera(&self) -> OrthoCamera {
        self.view.camera()
    }

    /// Hover state from the last [`tick`](Self::tick).
    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// How the hover changed in the last [`tick`](Self::tick), `None` if it
    /// did not.
    #[must_use]
    pub fn hover_transition(&self) -> Option<HoverEvent<usize>> {
        self.resolver.last_transition()
    }

    /// Hover hit radius in world units.
    #[must_use]
    pub fn hit_radius(&self) -> f64 {
        self.config.hit_radius()
    }

    /// Latest pointer position in view pixels, if the pointer is over the
    /// canvas.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Returns `true` once the active press has moved past the drag
    /// threshold.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging()
    }

    /// Latest pointer position unprojected into data space.
    ///
    /// `None` if the pointer is off the canvas or the viewport has no area.
    #[must_use]
    pub fn pointer_data_position(&self) -> Option<Point> {
        let viewport = self.view.viewport();
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return None;
        }
        let world = self.view.camera().view_to_world_point(self.cursor?);
        Some(self.placement.world_to_data(world))
    }

    /// Replaces the entity set, rebuilding the index if `entities` is not the
    /// set already held. Returns `true` if it rebuilt.
    pub fn set_entities(&mut self, entities: &Arc<[Entity<K, C>]>) -> bool {
        if Arc::ptr_eq(&self.entities, entities) {
            return false;
        }
        self.entities = Arc::clone(entities);
        self.index = GridIndex::build(&self.entities[..]);
        if self.placement.centering() == Centering::Mean {
            self.placement
                .set_center(mean_center(self.entities.iter().map(|e| e.position)));
        }
        self.resolver.invalidate();
        true
    }

    /// Resolves the hover for one frame.
    ///
    /// Rebuilds the index first if `entities` changed, then unprojects the
    /// latest pointer position and finds the nearest entity within the hit
    /// radius. `on_hover` receives `(id, slot)` only when the hover changes.
    pub fn tick<F>(&mut self, entities: &Arc<[Entity<K, C>]>, on_hover: F) -> HoverState
    where
        F: FnMut(Option<&K>, Option<usize>),
    {
        self.set_entities(entities);
        let pointer = self.pointer_data_position();
        self.hover = self.resolver.resolve(
            &self.entities[..],
            &self.index,
            &self.placement,
            pointer,
            self.config.hit_radius(),
            on_hover,
        );
        self.hover
    }

    /// Records a pointer move in view pixels. Pans the camera while a press is
    /// active.
    pub fn pointer_moved(&mut self, view: Point) {
        self.cursor = Some(view);
        if let PointerEvent::Moved { delta, .. } = self.pointer.moved(view) {
            self.view.pan_by_view(delta);
        }
    }

    /// Records a pointer position given in normalized device coordinates.
    pub fn pointer_moved_ndc(&mut self, ndc: Point) {
        self.pointer_moved(ndc_to_view(ndc, self.view.viewport()));
    }

    /// The pointer left the canvas. The next frame resolves to no hover.
    ///
    /// An active press is abandoned: the camera drag ends and the matching
    /// release reports no click.
    pub fn pointer_left(&mut self) {
        self.cursor = None;
        if self.pointer.is_pressed() {
            self.pointer.cancel();
            self.view.drag_end();
        }
    }

    /// Starts a press at `view` and begins a camera drag.
    pub fn pointer_down(&mut self, view: Point) {
        self.cursor = Some(view);
        self.pointer.down(view);
        self.view.drag_start();
    }

    /// Ends the press at `view` and the camera drag.
    ///
    /// Returns the hovered entity if the press was a click rather than a drag.
    pub fn pointer_up(&mut self, view: Point) -> Option<AtlasClick<K>> {
        self.cursor = Some(view);
        let PointerEvent::Released { click } = self.pointer.up(view) else {
            return None;
        };
        self.view.drag_end();
        if !click {
            return None;
        }
        let slot = self.hover.index?;
        let entity = self.entities.get(slot)?;
        Some(AtlasClick {
            id: entity.id.clone(),
            slot,
        })
    }

    /// Zooms for a wheel event. A positive `delta_y` zooms out by
    /// [`wheel_zoom_step`](AtlasConfig::wheel_zoom_step), a negative one zooms
    /// in by its inverse. The zoom is anchored at the pointer when it is over
    /// the canvas.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        let step = self.config.wheel_zoom_step;
        let factor = if delta_y > 0.0 { step } else { 1.0 / step };
        match self.cursor {
            Some(anchor) => self.view.zoom_about_view_point(anchor, factor),
            None => self.view.zoom_by(factor),
        }
    }

    /// Handles a viewport resize.
    pub fn resize(&mut self, viewport: Size) {
        self.view.resize(viewport);
    }
}
