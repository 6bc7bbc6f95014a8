// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detectors: pairwise conditions re-evaluated whenever either object changes.
//!
//! A detector binds two objects of one board. Once registered with
//! [`Board::add_detector`](crate::Board::add_detector) (or one of the typed
//! helpers), the board calls [`Detector::object_changed`] after every geometry
//! or content change of either object, after the repaint for that change has
//! been requested, so detectors always observe the final state.
//!
//! Two detectors are provided:
//!
//! - [`CollisionDetector`]: pixel-exact overlap, **level-triggered** (fires on
//!   every change that leaves the pair colliding).
//! - [`ProximityDetector`]: center distance under a threshold,
//!   **edge-triggered** (fires only when the pair becomes near).

pub(crate) mod collision;
mod proximity;

pub use collision::CollisionDetector;
pub use proximity::{DistanceMetric, ProximityDetector};

use alloc::boxed::Box;

use crate::scene::Scene;
use crate::types::ObjectId;

/// Listener invoked with the detector's `(first, second)` objects.
pub type PairListener = Box<dyn FnMut(ObjectId, ObjectId)>;

/// A condition over two objects, re-evaluated when either changes.
pub trait Detector {
    /// The two objects this detector observes.
    fn objects(&self) -> (ObjectId, ObjectId);

    /// Called by the board after either object changed.
    fn object_changed(&mut self, scene: &Scene);
}
