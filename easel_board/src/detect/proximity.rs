// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proximity detection.

use alloc::boxed::Box;
use core::fmt;

use crate::detect::{Detector, PairListener};
use crate::object::VisualObject;
use crate::scene::Scene;
use crate::types::ObjectId;

/// How the distance between two objects is measured.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DistanceMetric {
    /// Euclidean distance between the centers of the bounding rectangles,
    /// truncated to an integer. Centers use integer halves of width/height.
    #[default]
    CenterToCenter,
}

/// Detects when two objects come within a distance of each other.
///
/// The listener is edge-triggered: it fires once when the pair goes from
/// "not near" to "near", and stays quiet while they remain near. Moving
/// apart re-arms it. The pair starts out as "not near", so a pair that is
/// already near fires on the first change after registration.
pub struct ProximityDetector {
    first: ObjectId,
    second: ObjectId,
    distance: u32,
    metric: DistanceMetric,
    listener: Option<PairListener>,
    were_near: bool,
}

impl fmt::Debug for ProximityDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProximityDetector")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("distance", &self.distance)
            .field("metric", &self.metric)
            .field("listener", &self.listener.is_some())
            .field("were_near", &self.were_near)
            .finish()
    }
}

impl ProximityDetector {
    /// Creates a detector that considers the objects near at `distance` or less.
    #[must_use]
    pub fn new(first: ObjectId, second: ObjectId, distance: u32) -> Self {
        Self {
            first,
            second,
            distance,
            metric: DistanceMetric::default(),
            listener: None,
            were_near: false,
        }
    }

    /// Builder-style distance metric.
    #[must_use]
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
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

    /// The inclusive distance threshold.
    #[must_use]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// The distance metric.
    #[must_use]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Whether the pair was near at the last evaluation.
    #[must_use]
    pub fn were_near(&self) -> bool {
        self.were_near
    }

    /// Returns `true` if the two objects are currently within the threshold.
    ///
    /// Objects that are no longer stored in `scene` are never near.
    #[must_use]
    pub fn objects_near(&self, scene: &Scene) -> bool {
        match (scene.get(self.first), scene.get(self.second)) {
            (Some(first), Some(second)) => self.measure(first, second) <= u64::from(self.distance),
            _ => false,
        }
    }

    fn measure(&self, first: &VisualObject, second: &VisualObject) -> u64 {
        match self.metric {
            DistanceMetric::CenterToCenter => center_distance(first, second),
        }
    }
}

impl Detector for ProximityDetector {
    fn objects(&self) -> (ObjectId, ObjectId) {
        (self.first, self.second)
    }

    fn object_changed(&mut self, scene: &Scene) {
        let near = self.objects_near(scene);
        let entered = near && !self.were_near;
        self.were_near = near;
        if !entered {
            return;
        }
        tracing::trace!(first = ?self.first, second = ?self.second, "proximity");
        if let Some(listener) = self.listener.as_mut() {
            listener(self.first, self.second);
        }
    }
}

/// Euclidean distance between bounding-box centers, truncated.
pub(crate) fn center_distance(first: &VisualObject, second: &VisualObject) -> u64 {
    let (ax, ay) = center(first);
    let (bx, by) = center(second);
    let dx = (ax - bx).unsigned_abs();
    let dy = (ay - by).unsigned_abs();
    let squared = u128::from(dx) * u128::from(dx) + u128::from(dy) * u128::from(dy);
    // Coordinates fit in 34 bits, so the root fits in 35.
    u64::try_from(squared.isqrt()).unwrap_or(u64::MAX)
}

fn center(object: &VisualObject) -> (i64, i64) {
    (
        i64::from(object.x()) + i64::from(object.width() / 2),
        i64::from(object.y()) + i64::from(object.height() / 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_pixels::Pixmap;

    fn square(x: i32, y: i32) -> VisualObject {
        VisualObject::new(Pixmap::new(10, 10)).with_position(x, y)
    }

    #[test]
    fn distance_uses_integer_centers() {
        let a = VisualObject::new(Pixmap::new(3, 3));
        let b = VisualObject::new(Pixmap::new(5, 5)).with_position(10, 0);
        // Centers (1, 1) and (12, 2).
        assert_eq!(center_distance(&a, &b), 11);
    }

    #[test]
    fn distance_is_truncated() {
        // Centers 3 and 4 apart on each axis: exactly 5.
        assert_eq!(center_distance(&square(0, 0), &square(3, 4)), 5);
        // sqrt(1 + 1) = 1.41.. -> 1
        assert_eq!(center_distance(&square(0, 0), &square(1, 1)), 1);
        // sqrt(10^2 + 1) = 10.05.. -> 10
        assert_eq!(center_distance(&square(0, 0), &square(10, 1)), 10);
    }

    #[test]
    fn distance_is_symmetric_and_handles_extremes() {
        let a = square(i32::MIN, i32::MIN);
        let b = square(i32::MAX, i32::MAX);
        assert_eq!(center_distance(&a, &b), center_distance(&b, &a));
        assert!(center_distance(&a, &b) > u64::from(u32::MAX));
    }
}
