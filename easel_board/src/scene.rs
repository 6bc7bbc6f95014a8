// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Object storage owned by a board.

use crate::arena::Arena;
use crate::object::VisualObject;
use crate::types::ObjectId;

/// Every object stored in a [`Board`](crate::Board), attached or not.
///
/// This is the read-only view detectors evaluate against. Objects are looked
/// up by [`ObjectId`]; stale ids resolve to `None`.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Arena<VisualObject>,
}

impl Scene {
    /// Looks up an object.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&VisualObject> {
        self.objects.get(id.0)
    }

    /// Returns `true` if `id` refers to a stored object.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains(id.0)
    }

    /// Number of stored objects, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if no objects are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.len() == 0
    }

    /// Iterates stored objects in slot order (not z-order).
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &VisualObject)> + '_ {
        self.objects
            .iter()
            .map(|(key, object)| (ObjectId(key), object))
    }

    pub(crate) fn insert(&mut self, object: VisualObject) -> ObjectId {
        ObjectId(self.objects.insert(object))
    }

    pub(crate) fn remove(&mut self, id: ObjectId) -> Option<VisualObject> {
        self.objects.remove(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: ObjectId) -> Option<&mut VisualObject> {
        self.objects.get_mut(id.0)
    }
}
