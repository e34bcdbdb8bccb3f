// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover transitions for a single hovered target.
//!
//! Feed the target resolved for each frame (or `None`) into
//! [`HoverTracker::update`]. It returns an event only when the target changes,
//! so steady hovering produces nothing.
//!
//! ```
//! use atlas_event_state::hover::{HoverEvent, HoverTracker};
//!
//! let mut hover = HoverTracker::new();
//! assert_eq!(hover.update(Some(3)), Some(HoverEvent::Enter(3)));
//! assert_eq!(hover.update(Some(3)), None);
//! assert_eq!(hover.update(Some(7)), Some(HoverEvent::Switch { from: 3, to: 7 }));
//! assert_eq!(hover.update(None), Some(HoverEvent::Leave(7)));
//! ```

/// A change of hovered target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Nothing was hovered; now `K` is.
    Enter(K),
    /// `K` was hovered; now nothing is.
    Leave(K),
    /// The hover moved directly from one target to another.
    Switch {
        /// Previously hovered target.
        from: K,
        /// Newly hovered target.
        to: K,
    },
}

impl<K> HoverEvent<K> {
    /// The target hovered after this transition, if any.
    pub fn target(&self) -> Option<&K> {
        match self {
            Self::Enter(k) | Self::Switch { to: k, .. } => Some(k),
            Self::Leave(_) => None,
        }
    }

    /// The target hovered before this transition, if any.
    pub fn previous(&self) -> Option<&K> {
        match self {
            Self::Leave(k) | Self::Switch { from: k, .. } => Some(k),
            Self::Enter(_) => None,
        }
    }
}

/// Remembers the currently hovered target and reports changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker<K> {
    current: Option<K>,
}

impl<K: Clone + PartialEq> HoverTracker<K> {
    /// Creates a tracker with nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Currently hovered target.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Records this frame's target, returning a transition if it changed.
    pub fn update(&mut self, next: Option<K>) -> Option<HoverEvent<K>> {
        if self.current == next {
            return None;
        }
        let prev = core::mem::replace(&mut self.current, next.clone());
        match (prev, next) {
            (None, Some(to)) => Some(HoverEvent::Enter(to)),
            (Some(from), None) => Some(HoverEvent::Leave(from)),
            (Some(from), Some(to)) => Some(HoverEvent::Switch { from, to }),
            (None, None) => None,
        }
    }

    /// Clears the hover, reporting a leave if something was hovered.
    pub fn clear(&mut self) -> Option<HoverEvent<K>> {
        self.update(None)
    }
}
