// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-exact collision detection.

use alloc::boxed::Box;
use core::fmt;

use crate::detect::{Detector, PairListener};
use crate::object::VisualObject;
use crate::scene::Scene;
use crate::types::ObjectId;

/// Detects when two objects overlap with non-transparent pixels.
///
/// Two objects collide when at least one board pixel is covered by a pixel
/// with non-zero alpha in **both** objects' rendered images. Only pixels inside
/// the intersection of the two bounding rectangles are examined, so the cost
/// of a test is proportional to the overlap area.
///
/// The listener is level-triggered: it fires after every change of either
/// object that leaves the pair colliding, including repeated changes while
/// they stay in collision.
pub struct CollisionDetector {
    first: ObjectId,
    second: ObjectId,
    listener: Option<PairListener>,
}

impl fmt::Debug for CollisionDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionDetector")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl CollisionDetector {
    /// Creates a detector for two objects, without a listener.
    #[must_use]
    pub fn new(first: ObjectId, second: ObjectId) -> Self {
        Self {
            first,
            second,
            listener: None,
        }
    }

    /// Builder-style listener.
    #[must_use]
    pub fn with_listener(mut self, listener: impl FnMut(ObjectId, ObjectId) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Installs the listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(ObjectId, ObjectId) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// The first object.
    #[must_use]
    pub fn first(&self) -> ObjectId {
        self.first
    }

    /// The second object.
    #[must_use]
    pub fn second(&self) -> ObjectId {
        self.second
    }

    /// Returns `true` if the two objects currently collide.
    ///
    /// Objects that are no longer stored in `scene` never collide.
    #[must_use]
    pub fn objects_collide(&self, scene: &Scene) -> bool {
        match (scene.get(self.first), scene.get(self.second)) {
            (Some(first), Some(second)) => pixels_collide(first, second),
            _ => false,
        }
    }
}

impl Detector for CollisionDetector {
    fn objects(&self) -> (ObjectId, ObjectId) {
        (self.first, self.second)
    }

    fn object_changed(&mut self, scene: &Scene) {
        if self.listener.is_none() || !self.objects_collide(scene) {
            return;
        }
        tracing::trace!(first = ?self.first, second = ?self.second, "collision");
        if let Some(listener) = self.listener.as_mut() {
            listener(self.first, self.second);
        }
    }
}

/// Scans the bounding-rectangle intersection for a pixel opaque in both objects.
pub(crate) fn pixels_collide(first: &VisualObject, second: &VisualObject) -> bool {
    let (fx, fy) = (i64::from(first.x()), i64::from(first.y()));
    let (sx, sy) = (i64::from(second.x()), i64::from(second.y()));
    let x0 = fx.max(sx);
    let y0 = fy.max(sy);
    let x1 = (fx + i64::from(first.width())).min(sx + i64::from(second.width()));
    let y1 = (fy + i64::from(first.height())).min(sy + i64::from(second.height()));
    if x0 >= x1 || y0 >= y1 {
        return false;
    }

    let first_image = first.rendered_image();
    let second_image = second.rendered_image();
    for x in x0..x1 {
        for y in y0..y1 {
            if first_image.alpha(local(x, fx), local(y, fy)) != 0
                && second_image.alpha(local(x, sx), local(y, sy)) != 0
            {
                return true;
            }
        }
    }
    false
}

/// Board coordinate to object-local coordinate; out-of-range maps to `-1`,
/// which samples as transparent.
fn local(board: i64, origin: i64) -> i32 {
    i32::try_from(board - origin).unwrap_or(-1)
}
