// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer press tracking: pan deltas plus click-versus-drag disambiguation.
//!
//! ## Usage
//!
//! 1) Call [`PointerTracker::down`] on pointer press.
//! 2) Call [`PointerTracker::moved`] on every pointer move; while pressed it
//!    returns the movement delta since the last position, for panning.
//! 3) Call [`PointerTracker::up`] on release; it reports whether the press
//!    counts as a click.
//!
//! A press stops being a click as soon as the pointer strays more than the
//! threshold from the press point along either axis, even if it later comes
//! back. The release point itself is checked too, so coalesced move events
//! cannot hide a drag.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use atlas_event_state::pointer::{PointerEvent, PointerTracker};
//!
//! let mut pointer = PointerTracker::new(5.0);
//!
//! pointer.down(Point::new(100.0, 100.0));
//! let up = pointer.up(Point::new(102.0, 101.0));
//! assert_eq!(up, PointerEvent::Released { click: true });
//!
//! pointer.down(Point::new(100.0, 100.0));
//! pointer.moved(Point::new(150.0, 100.0));
//! let up = pointer.up(Point::new(150.0, 100.0));
//! assert_eq!(up, PointerEvent::Released { click: false });
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Default click-versus-drag threshold, in pixels.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

/// Transition reported by [`PointerTracker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A press started at this position.
    Pressed(Point),
    /// The pointer moved while pressed.
    Moved {
        /// Movement since the previous pointer position.
        delta: Vec2,
        /// Whether the press has exceeded the drag threshold.
        dragging: bool,
    },
    /// The press ended.
    Released {
        /// `true` if the pointer never strayed beyond the threshold.
        click: bool,
    },
    /// Input that does not change the press state (a move with no button
    /// held, or a release without a press).
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Press {
    origin: Point,
    last: Point,
    dragging: bool,
}

/// Tracks one pointer press at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTracker {
    threshold: f64,
    press: Option<Press>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl PointerTracker {
    /// Creates a tracker with the given drag threshold in pixels.
    ///
    /// Negative or non-finite thresholds are treated as zero, so any movement
    /// counts as a drag.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() { threshold.max(0.0) } else { 0.0 };
        Self {
            threshold,
            press: None,
        }
    }

    /// Drag threshold in pixels.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` while a press is active.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Returns `true` once the active press has exceeded the threshold.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.dragging)
    }

    /// Position where the active press started.
    #[must_use]
    pub fn press_origin(&self) -> Option<Point> {
        self.press.map(|p| p.origin)
    }

    /// Starts a new press, discarding any unfinished one.
    pub fn down(&mut self, pos: Point) -> PointerEvent {
        self.press = Some(Press {
            origin: pos,
            last: pos,
            dragging: false,
        });
        PointerEvent::Pressed(pos)
    }

    /// Records a pointer move.
    pub fn moved(&mut self, pos: Point) -> PointerEvent {
        let threshold = self.threshold;
        let Some(press) = self.press.as_mut() else {
            return PointerEvent::Ignored;
        };
        let delta = pos - press.last;
        press.last = pos;
        if exceeds(pos - press.origin, threshold) {
            press.dragging = true;
        }
        PointerEvent::Moved {
            delta,
            dragging: press.dragging,
        }
    }

    /// Ends the active press.
    pub fn up(&mut self, pos: Point) -> PointerEvent {
        let Some(press) = self.press.take() else {
            return PointerEvent::Ignored;
        };
        let click = !press.dragging && !exceeds(pos - press.origin, self.threshold);
        PointerEvent::Released { click }
    }

    /// Abandons the active press without reporting a click (for example when
    /// the pointer leaves the window).
    pub fn cancel(&mut self) {
        self.press = None;
    }
}

fn exceeds(offset: Vec2, threshold: f64) -> bool {
    offset.x.abs() > threshold || offset.y.abs() > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_jitter_is_still_a_click() {
        let mut p = PointerTracker::default();
        assert_eq!(p.down(Point::new(100.0, 100.0)), PointerEvent::Pressed(Point::new(100.0, 100.0)));
        p.moved(Point::new(103.0, 98.0));
        assert!(!p.is_dragging());
        assert_eq!(p.up(Point::new(102.0, 101.0)), PointerEvent::Released { click: true });
        assert!(!p.is_pressed());
    }

    #[test]
    fn moving_past_threshold_makes_a_drag() {
        let mut p = PointerTracker::default();
        p.down(Point::new(100.0, 100.0));
        let ev = p.moved(Point::new(150.0, 100.0));
        assert_eq!(
            ev,
            PointerEvent::Moved {
                delta: Vec2::new(50.0, 0.0),
                dragging: true
            }
        );
        assert_eq!(p.up(Point::new(150.0, 100.0)), PointerEvent::Released { click: false });
    }

    #[test]
    fn returning_to_origin_does_not_restore_click() {
        let mut p = PointerTracker::default();
        p.down(Point::new(0.0, 0.0));
        p.moved(Point::new(0.0, 6.0));
        p.moved(Point::new(0.0, 0.0));
        assert_eq!(p.up(Point::new(0.0, 0.0)), PointerEvent::Released { click: false });
    }

    #[test]
    fn release_far_away_is_a_drag_even_without_moves() {
        let mut p = PointerTracker::default();
        p.down(Point::new(0.0, 0.0));
        assert_eq!(p.up(Point::new(20.0, 0.0)), PointerEvent::Released { click: false });
    }

    #[test]
    fn threshold_is_exclusive_and_per_axis() {
        let mut p = PointerTracker::new(5.0);
        p.down(Point::ZERO);
        // Diagonal distance is ~7, but neither axis exceeds 5.
        assert_eq!(p.up(Point::new(5.0, 5.0)), PointerEvent::Released { click: true });
    }

    #[test]
    fn moves_deltas_are_incremental() {
        let mut p = PointerTracker::default();
        p.down(Point::new(10.0, 10.0));
        let d1 = p.moved(Point::new(12.0, 10.0));
        let d2 = p.moved(Point::new(12.0, 7.0));
        assert!(matches!(d1, PointerEvent::Moved { delta, .. } if delta == Vec2::new(2.0, 0.0)));
        assert!(matches!(d2, PointerEvent::Moved { delta, .. } if delta == Vec2::new(0.0, -3.0)));
    }

    #[test]
    fn unpressed_input_is_ignored() {
        let mut p = PointerTracker::default();
        assert_eq!(p.moved(Point::new(1.0, 1.0)), PointerEvent::Ignored);
        assert_eq!(p.up(Point::new(1.0, 1.0)), PointerEvent::Ignored);
        p.down(Point::ZERO);
        p.cancel();
        assert_eq!(p.up(Point::ZERO), PointerEvent::Ignored);
    }

    #[test]
    fn invalid_thresholds_become_zero() {
        assert_eq!(PointerTracker::new(-3.0).threshold(), 0.0);
        assert_eq!(PointerTracker::new(f64::NAN).threshold(), 0.0);
        let mut p = PointerTracker::new(0.0);
        p.down(Point::ZERO);
        assert_eq!(p.up(Point::new(0.5, 0.0)), PointerEvent::Released { click: false });
    }
}
