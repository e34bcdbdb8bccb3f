// Copyright 2025 the Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas Event State: small state machines for canvas pointer interaction.
//!
//! Each module handles one interaction pattern that needs state across
//! events:
//!
//! - [`hover`]: turn a per-frame "what is under the pointer" answer into
//!   enter/leave/switch transitions, reported only on change.
//! - [`pointer`]: track a press, report pan deltas while it lasts, and decide
//!   on release whether it was a click or a drag.
//!
//! Neither module knows how targets are found. Callers resolve the hovered
//! target themselves (for example with a spatial index) and feed the result in.
//!
//! ## Features
//!
//! - `pointer`: enable press/drag/click tracking (requires `kurbo`).
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

pub mod hover;
#[cfg(feature = "pointer")]
pub mod pointer;
