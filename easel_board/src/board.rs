// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The board: z-ordered objects, batched repaint, and input routing.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use easel_pixels::Pixmap;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::arena::Arena;
use crate::damage::Damage;
use crate::detect::{CollisionDetector, Detector, ProximityDetector};
use crate::drag::DragState;
use crate::object::{KeyHandler, VisualObject};
use crate::scene::Scene;
use crate::sink::RenderSink;
use crate::types::{DetectorId, KeyEvent, ObjectId};

/// Container of visual objects bound to one render sink.
///
/// The board stores objects in a [`Scene`] and keeps the attached subset in a
/// z-ordered sequence: index `0` is drawn first (back-most), the last entry is
/// drawn last and wins hit tests.
///
/// Every change to an object's geometry or content goes through
/// [`ObjectMut`] (from [`Board::object_mut`]) and follows one protocol:
///
/// 1. capture the bounding rectangle before the change,
/// 2. apply the change,
/// 3. if attached, request a repaint of the union of the old and new
///    rectangles (or accumulate it while [locked](Self::lock)),
/// 4. notify every detector bound to the object.
pub struct Board<S> {
    scene: Scene,
    order: Vec<ObjectId>,
    detectors: Arena<Box<dyn Detector>>,
    locked: bool,
    pending: Damage,
    on_key: Option<KeyHandler>,
    drag: DragState,
    sink: S,
}

impl<S: fmt::Debug> fmt::Debug for Board<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("scene", &self.scene)
            .field("order", &self.order)
            .field("detectors", &self.detectors.len())
            .field("locked", &self.locked)
            .field("pending", &self.pending)
            .field("on_key", &self.on_key.is_some())
            .field("drag", &self.drag)
            .field("sink", &self.sink)
            .finish()
    }
}

impl<S: RenderSink> Board<S> {
    /// Creates an empty board bound to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            scene: Scene::default(),
            order: Vec::new(),
            detectors: Arena::default(),
            locked: false,
            pending: Damage::default(),
            on_key: None,
            drag: DragState::default(),
            sink,
        }
    }

    // --- Storage ---

    /// Stores a detached object and returns its id.
    ///
    /// The object is not drawn until [`add_object`](Self::add_object).
    pub fn insert(&mut self, mut object: VisualObject) -> ObjectId {
        object.attached = false;
        object.detectors.clear();
        self.scene.insert(object)
    }

    /// Stores an object and attaches it on top of the z-order.
    pub fn add(&mut self, object: VisualObject) -> ObjectId {
        let id = self.insert(object);
        self.add_object(id);
        id
    }

    /// Removes a detached object from the board and returns it.
    ///
    /// Detectors bound to the object are dropped. Returns `None` if the id is
    /// stale or the object is still attached.
    pub fn take(&mut self, id: ObjectId) -> Option<VisualObject> {
        if self.scene.get(id)?.attached {
            return None;
        }
        let mut object = self.scene.remove(id)?;
        for detector in core::mem::take(&mut object.detectors) {
            self.remove_detector(detector);
        }
        Some(object)
    }

    /// All stored objects, attached or not.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Looks up a stored object.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&VisualObject> {
        self.scene.get(id)
    }

    /// Mutable handle to a stored object; `None` if the id is stale.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<ObjectMut<'_, S>> {
        if !self.scene.contains(id) {
            return None;
        }
        Some(ObjectMut { board: self, id })
    }

    // --- Membership ---

    /// Attached objects in z-order, back-most first.
    #[must_use]
    pub fn objects(&self) -> &[ObjectId] {
        &self.order
    }

    /// Number of attached objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no objects are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if `id` is attached.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.scene.get(id).is_some_and(|object| object.attached)
    }

    /// Position of `id` in the z-order sequence.
    #[must_use]
    pub fn z_index(&self, id: ObjectId) -> Option<usize> {
        self.order.iter().position(|&entry| entry == id)
    }

    /// Attaches a stored object on top of the z-order, paints it, and runs its
    /// detectors.
    ///
    /// No-op (returning `false`) if the object is already attached or the id
    /// is stale.
    pub fn add_object(&mut self, id: ObjectId) -> bool {
        let Some(object) = self.scene.get_mut(id) else {
            return false;
        };
        if object.attached {
            return false;
        }
        object.attached = true;
        let area = object.bounds();
        self.order.push(id);
        tracing::debug!(?id, z = self.order.len() - 1, "attached object");
        self.request_repaint(area);
        self.notify_detectors(id);
        true
    }

    /// Detaches an object, repainting the area it occupied.
    ///
    /// The object stays stored and keeps its detectors. No-op (returning
    /// `false`) if it is not attached.
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        let Some(index) = self.z_index(id) else {
            return false;
        };
        self.order.remove(index);
        self.detach(id);
        true
    }

    /// Attaches several objects with a single repaint.
    pub fn add_objects(&mut self, ids: impl IntoIterator<Item = ObjectId>) {
        self.batch(|board| {
            for id in ids {
                board.add_object(id);
            }
        });
    }

    /// Detaches several objects with a single repaint.
    pub fn remove_objects(&mut self, ids: impl IntoIterator<Item = ObjectId>) {
        self.batch(|board| {
            for id in ids {
                board.remove_object(id);
            }
        });
    }

    /// Puts `new` at the z-order position of `old`.
    ///
    /// `old` is detached and `new` attached, then the detectors of `new` run.
    /// No-op (returning `false`) if `old` is not attached, or `new` is stale or
    /// already attached.
    pub fn replace_object(&mut self, old: ObjectId, new: ObjectId) -> bool {
        let Some(index) = self.z_index(old) else {
            return false;
        };
        let Some(replacement) = self.scene.get_mut(new) else {
            return false;
        };
        if replacement.attached {
            return false;
        }
        replacement.attached = true;
        let area = replacement.bounds();
        self.order[index] = new;
        tracing::debug!(?old, ?new, z = index, "replaced object");
        self.detach(old);
        self.request_repaint(area);
        self.notify_detectors(new);
        true
    }

    /// Detaches every object and repaints the whole surface.
    pub fn clear(&mut self) {
        for id in core::mem::take(&mut self.order) {
            if let Some(object) = self.scene.get_mut(id) {
                object.attached = false;
            }
        }
        self.drag.end();
        tracing::debug!("cleared board");
        self.request_repaint(self.surface_rect());
    }

    // --- Z-order ---

    /// Moves `id` directly in front of `reference`.
    ///
    /// No-op (returning `false`) unless both are attached and distinct.
    pub fn move_in_front_of(&mut self, id: ObjectId, reference: ObjectId) -> bool {
        if id == reference || self.z_index(reference).is_none() {
            return false;
        }
        let Some(index) = self.z_index(id) else {
            return false;
        };
        self.order.remove(index);
        let Some(target) = self.z_index(reference) else {
            return false;
        };
        self.order.insert(target + 1, id);
        true
    }

    /// Moves `id` behind every other object.
    pub fn send_to_background(&mut self, id: ObjectId) -> bool {
        let Some(index) = self.z_index(id) else {
            return false;
        };
        self.order.remove(index);
        self.order.insert(0, id);
        true
    }

    /// Moves `id` in front of every other object.
    pub fn bring_to_foreground(&mut self, id: ObjectId) -> bool {
        let Some(index) = self.z_index(id) else {
            return false;
        };
        self.order.remove(index);
        self.order.push(id);
        true
    }

    // --- Repaint batching ---

    /// Suspends repaints; requests accumulate until [`unlock`](Self::unlock).
    ///
    /// Locking is not counted: locking twice needs one unlock.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Resumes repaints and flushes the union of everything requested while
    /// locked as a single request.
    pub fn unlock(&mut self) {
        self.locked = false;
        if let Some(area) = self.pending.take_union() {
            tracing::debug!(?area, "flushing batched repaint");
            self.sink.request_repaint(area);
        }
    }

    /// Returns `true` while repaints are suspended.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Repaint requests accumulated while locked.
    #[must_use]
    pub fn pending_damage(&self) -> &Damage {
        &self.pending
    }

    /// Asks for `area` to be repainted, or records it while locked.
    pub fn request_repaint(&mut self, area: Rect) {
        if self.locked {
            self.pending.add(area);
        } else {
            tracing::trace!(?area, "repaint");
            self.sink.request_repaint(area);
        }
    }

    /// Requests a repaint of the whole surface.
    pub fn repaint_all(&mut self) {
        self.request_repaint(self.surface_rect());
    }

    // --- Detectors ---

    /// Registers a detector with both of its objects.
    ///
    /// Returns `None` (dropping the detector) if either object id is stale.
    pub fn add_detector(&mut self, detector: Box<dyn Detector>) -> Option<DetectorId> {
        let (first, second) = detector.objects();
        if !self.scene.contains(first) || !self.scene.contains(second) {
            return None;
        }
        let id = DetectorId(self.detectors.insert(detector));
        for object in pair(first, second) {
            if let Some(object) = self.scene.get_mut(object) {
                object.detectors.push(id);
            }
        }
        Some(id)
    }

    /// Registers a collision detector calling `listener` while the objects collide.
    pub fn add_collision_detector(
        &mut self,
        first: ObjectId,
        second: ObjectId,
        listener: impl FnMut(ObjectId, ObjectId) + 'static,
    ) -> Option<DetectorId> {
        self.add_detector(Box::new(
            CollisionDetector::new(first, second).with_listener(listener),
        ))
    }

    /// Registers a proximity detector calling `listener` when the objects come
    /// within `distance` of each other.
    pub fn add_proximity_detector(
        &mut self,
        first: ObjectId,
        second: ObjectId,
        distance: u32,
        listener: impl FnMut(ObjectId, ObjectId) + 'static,
    ) -> Option<DetectorId> {
        self.add_detector(Box::new(
            ProximityDetector::new(first, second, distance).with_listener(listener),
        ))
    }

    /// Unregisters a detector from its objects and drops it.
    pub fn remove_detector(&mut self, id: DetectorId) -> bool {
        let Some(detector) = self.detectors.remove(id.0) else {
            return false;
        };
        let (first, second) = detector.objects();
        for object in pair(first, second) {
            if let Some(object) = self.scene.get_mut(object) {
                object.detectors.retain(|entry| *entry != id);
            }
        }
        true
    }

    /// One-shot pixel-exact collision test between two stored objects.
    #[must_use]
    pub fn collides(&self, first: ObjectId, second: ObjectId) -> bool {
        CollisionDetector::new(first, second).objects_collide(&self.scene)
    }

    // --- Input ---

    /// Returns the top-most attached object whose rectangle contains the point.
    #[must_use]
    pub fn object_at(&self, x: i32, y: i32) -> Option<ObjectId> {
        self.order.iter().rev().copied().find(|&id| {
            self.scene
                .get(id)
                .is_some_and(|object| object.contains_point(x, y))
        })
    }

    /// Pointer went down: remember the hit object and grab offset.
    ///
    /// Returns the hit object. A press over empty space ends any drag.
    pub fn pointer_press(&mut self, x: i32, y: i32) -> Option<ObjectId> {
        let Some(id) = self.object_at(x, y) else {
            self.drag.end();
            return None;
        };
        let object = self.scene.get(id)?;
        self.drag.start(id, (x, y), (object.x(), object.y()));
        Some(id)
    }

    /// Pointer moved with the button held: move the grabbed object if it is
    /// still attached and draggable.
    ///
    /// Returns the moved object.
    pub fn pointer_drag(&mut self, x: i32, y: i32) -> Option<ObjectId> {
        let (id, new_x, new_y) = self.drag.update((x, y))?;
        let object = self.scene.get(id)?;
        if !object.attached || !object.is_draggable() {
            return None;
        }
        self.object_mut(id)?.move_to(new_x, new_y);
        Some(id)
    }

    /// Pointer went up: end the drag.
    pub fn pointer_release(&mut self, _x: i32, _y: i32) {
        self.drag.end();
    }

    /// Pointer clicked: dispatch to the top-most object's click callback.
    ///
    /// Returns the object whose callback ran.
    pub fn pointer_click(&mut self, x: i32, y: i32) -> Option<ObjectId> {
        let id = self.object_at(x, y)?;
        let handler = self.scene.get_mut(id)?.on_click.as_mut()?;
        handler(id);
        Some(id)
    }

    /// Current drag state.
    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Installs the board-level key listener, replacing any previous one.
    pub fn set_on_key(&mut self, handler: impl FnMut(&KeyEvent) + 'static) {
        self.on_key = Some(Box::new(handler));
    }

    /// Removes the board-level key listener.
    pub fn clear_on_key(&mut self) {
        self.on_key = None;
    }

    /// Delivers a key event to the board listener, then to every attached
    /// object back to front.
    pub fn key_event(&mut self, event: &KeyEvent) {
        if let Some(handler) = self.on_key.as_mut() {
            handler(event);
        }
        for &id in &self.order {
            if let Some(handler) = self
                .scene
                .get_mut(id)
                .and_then(|object| object.on_key.as_mut())
            {
                handler(event);
            }
        }
    }

    // --- Rendering ---

    /// Draws every attached object onto `surface` in z-order.
    pub fn paint(&self, surface: &mut Pixmap) {
        for &id in &self.order {
            if let Some(object) = self.scene.get(id) {
                surface.draw(&object.rendered_image(), object.x(), object.y());
            }
        }
    }

    /// Draws the attached objects that intersect `area`, touching only pixels
    /// inside it.
    pub fn paint_area(&self, surface: &mut Pixmap, area: Rect) {
        for &id in &self.order {
            let Some(object) = self.scene.get(id) else {
                continue;
            };
            if object.bounds().intersect(area).is_zero_area() {
                continue;
            }
            surface.draw_clipped(&object.rendered_image(), object.x(), object.y(), area);
        }
    }

    // --- Sink ---

    /// The bound render sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the bound render sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn surface_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.sink.width()),
            f64::from(self.sink.height()),
        )
    }

    /// Runs `f` with repaints batched, keeping a lock the caller already holds.
    fn batch(&mut self, f: impl FnOnce(&mut Self)) {
        let was_locked = self.locked;
        self.lock();
        f(self);
        if !was_locked {
            self.unlock();
        }
    }

    /// Clears the attachment of an object already removed from `order`,
    /// repainting the area it vacated first.
    fn detach(&mut self, id: ObjectId) {
        let Some(object) = self.scene.get(id) else {
            return;
        };
        let area = object.bounds();
        self.request_repaint(area);
        if let Some(object) = self.scene.get_mut(id) {
            object.attached = false;
        }
        if self.drag.target == Some(id) {
            self.drag.end();
        }
        tracing::debug!(?id, "detached object");
    }

    /// Applies a change to an object and runs the repaint/notify protocol.
    fn mutate(&mut self, id: ObjectId, change: impl FnOnce(&mut VisualObject)) -> bool {
        let Some(object) = self.scene.get_mut(id) else {
            return false;
        };
        let before = object.bounds();
        change(object);
        let after = object.bounds();
        let attached = object.attached;
        if attached {
            self.request_repaint(before.union(after));
        }
        self.notify_detectors(id);
        true
    }

    fn notify_detectors(&mut self, id: ObjectId) {
        let Some(object) = self.scene.get(id) else {
            return;
        };
        let bound: SmallVec<[DetectorId; 4]> = object.detectors.iter().copied().collect();
        for detector in bound {
            if let Some(detector) = self.detectors.get_mut(detector.0) {
                detector.object_changed(&self.scene);
            }
        }
    }
}

/// The distinct objects of a detector pair.
fn pair(first: ObjectId, second: ObjectId) -> SmallVec<[ObjectId; 2]> {
    let mut objects = SmallVec::new();
    objects.push(first);
    if second != first {
        objects.push(second);
    }
    objects
}

/// Mutable handle to one object of a [`Board`].
///
/// Geometry and content changes made through this handle request the minimal
/// repaint (union of the rectangles before and after the change) and then
/// re-evaluate the object's detectors.
pub struct ObjectMut<'a, S: RenderSink> {
    board: &'a mut Board<S>,
    id: ObjectId,
}

impl<S: RenderSink> fmt::Debug for ObjectMut<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectMut")
            .field("id", &self.id)
            .field("object", &self.board.scene.get(self.id))
            .finish()
    }
}

impl<S: RenderSink> ObjectMut<'_, S> {
    /// The object's id.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Read access to the object.
    #[must_use]
    pub fn get(&self) -> Option<&VisualObject> {
        self.board.scene.get(self.id)
    }

    /// Moves the object to an absolute position.
    ///
    /// Moving to the current position still repaints the object's rectangle
    /// and notifies detectors.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.board
            .mutate(self.id, |object| object.set_position(x, y));
    }

    /// Moves the object by a relative offset.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.board.mutate(self.id, |object| {
            object.set_position(object.x().saturating_add(dx), object.y().saturating_add(dy));
        });
    }

    /// Sets the rotation in degrees (clockwise about the object's center).
    pub fn set_angle(&mut self, degrees: i32) {
        self.board
            .mutate(self.id, |object| object.set_angle(degrees));
    }

    /// Adds `delta` degrees to the rotation.
    pub fn rotate(&mut self, delta: i32) {
        self.board.mutate(self.id, |object| {
            object.set_angle(object.angle().wrapping_add(delta));
        });
    }

    /// Replaces the object's content; the object takes the new buffer's size.
    pub fn set_content(&mut self, content: Pixmap) {
        self.board
            .mutate(self.id, |object| object.set_content(content));
    }

    /// Appends a child and returns its index.
    pub fn add_subobject(&mut self, child: VisualObject) -> Option<usize> {
        let mut index = None;
        self.board.mutate(self.id, |object| {
            index = Some(object.add_subobject(child));
        });
        index
    }

    /// Removes and returns the child at `index`.
    pub fn remove_subobject(&mut self, index: usize) -> Option<VisualObject> {
        let mut removed = None;
        self.board.mutate(self.id, |object| {
            removed = object.remove_subobject(index);
        });
        removed
    }

    /// Changes a child through `f`, then repaints and notifies as for any
    /// content change of this object.
    pub fn update_subobject(&mut self, index: usize, f: impl FnOnce(&mut VisualObject)) -> bool {
        let mut found = false;
        self.board.mutate(self.id, |object| {
            if let Some(child) = object.child_mut(index) {
                f(child);
                found = true;
            }
        });
        found
    }

    /// Moves the object directly in front of `reference` and repaints it.
    pub fn move_in_front_of(&mut self, reference: ObjectId) {
        if self.board.move_in_front_of(self.id, reference) {
            self.repaint();
        }
    }

    /// Moves the object behind every other object and repaints it.
    pub fn send_to_background(&mut self) {
        if self.board.send_to_background(self.id) {
            self.repaint();
        }
    }

    /// Moves the object in front of every other object and repaints it.
    pub fn bring_to_foreground(&mut self) {
        if self.board.bring_to_foreground(self.id) {
            self.repaint();
        }
    }

    /// Lets the pointer drag this object.
    pub fn enable_drag(&mut self) {
        if let Some(object) = self.board.scene.get_mut(self.id) {
            object.enable_drag();
        }
    }

    /// Stops the pointer from dragging this object.
    pub fn disable_drag(&mut self) {
        if let Some(object) = self.board.scene.get_mut(self.id) {
            object.disable_drag();
        }
    }

    /// Installs the click callback, replacing any previous one.
    pub fn set_on_click(&mut self, handler: impl FnMut(ObjectId) + 'static) {
        if let Some(object) = self.board.scene.get_mut(self.id) {
            object.set_on_click(handler);
        }
    }

    /// Removes the click callback.
    pub fn clear_on_click(&mut self) {
        if let Some(object) = self.board.scene.get_mut(self.id) {
            object.clear_on_click();
        }
    }

    /// Installs the key callback, replacing any previous one.
    pub fn set_on_key(&mut self, handler: impl FnMut(&KeyEvent) + 'static) {
        if let Some(object) = self.board.scene.get_mut(self.id) {
            object.set_on_key(handler);
        }
    }

    /// Removes the key callback.
    pub fn clear_on_key(&mut self) {
        if let Some(object) = self.board.scene.get_mut(self.id) {
            object.clear_on_key();
        }
    }

    fn repaint(&mut self) {
        if let Some(area) = self
            .board
            .scene
            .get(self.id)
            .filter(|object| object.attached)
            .map(VisualObject::bounds)
        {
            self.board.request_repaint(area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSink;
    use alloc::vec;
    use peniko::Color;

    const OPAQUE: Color = Color::from_rgba8(10, 20, 30, 255);

    fn board() -> Board<RecordingSink> {
        Board::new(RecordingSink::new(100, 100))
    }

    fn square(size: u32, x: i32, y: i32) -> VisualObject {
        VisualObject::new(Pixmap::filled(size, size, OPAQUE)).with_position(x, y)
    }

    #[test]
    fn insert_is_detached_and_silent() {
        let mut board = board();
        let id = board.insert(square(10, 0, 0));
        assert!(!board.contains(id));
        assert!(!board.object(id).unwrap().is_attached());
        assert!(board.sink().requests.is_empty());
    }

    #[test]
    fn add_object_repaints_object_area() {
        let mut board = board();
        let id = board.insert(square(10, 5, 6));
        assert!(board.add_object(id));
        assert!(board.object(id).unwrap().is_attached());
        assert_eq!(board.sink().requests, vec![Rect::new(5.0, 6.0, 15.0, 16.0)]);
    }

    #[test]
    fn add_and_remove_are_idempotent() {
        let mut board = board();
        let id = board.add(square(10, 0, 0));
        assert!(!board.add_object(id));
        assert_eq!(board.len(), 1);

        assert!(board.remove_object(id));
        assert!(!board.remove_object(id));
        assert!(board.is_empty());
        assert_eq!(board.sink().requests.len(), 2);
    }

    #[test]
    fn remove_repaints_vacated_area() {
        let mut board = board();
        let id = board.add(square(4, 50, 50));
        board.sink_mut().requests.clear();

        board.remove_object(id);
        assert_eq!(
            board.sink().requests,
            vec![Rect::new(50.0, 50.0, 54.0, 54.0)]
        );
        assert!(!board.object(id).unwrap().is_attached());
    }

    #[test]
    fn move_repaints_union_of_old_and_new() {
        let mut board = board();
        let id = board.add(square(10, 0, 0));
        board.sink_mut().requests.clear();

        board.object_mut(id).unwrap().move_to(20, 5);
        assert_eq!(board.sink().requests, vec![Rect::new(0.0, 0.0, 30.0, 15.0)]);
    }

    #[test]
    fn detached_moves_do_not_repaint() {
        let mut board = board();
        let id = board.insert(square(10, 0, 0));
        board.object_mut(id).unwrap().move_by(3, 4);
        assert!(board.sink().requests.is_empty());
        assert_eq!(board.object(id).unwrap().x(), 3);
        assert_eq!(board.object(id).unwrap().y(), 4);
    }

    #[test]
    fn content_change_repaints_both_sizes() {
        let mut board = board();
        let id = board.add(square(10, 0, 0));
        board.sink_mut().requests.clear();

        board.object_mut(id).unwrap().set_content(Pixmap::new(4, 20));
        assert_eq!(board.sink().requests, vec![Rect::new(0.0, 0.0, 10.0, 20.0)]);
    }

    #[test]
    fn rotation_repaints_in_place() {
        let mut board = board();
        let id = board.add(square(10, 0, 0));
        board.sink_mut().requests.clear();

        board.object_mut(id).unwrap().rotate(30);
        board.object_mut(id).unwrap().rotate(15);
        assert_eq!(board.object(id).unwrap().angle(), 45);
        assert_eq!(
            board.sink().requests,
            vec![Rect::new(0.0, 0.0, 10.0, 10.0); 2]
        );
    }

    #[test]
    fn replace_keeps_z_index() {
        let mut board = board();
        let a = board.add(square(1, 0, 0));
        let b = board.add(square(1, 1, 0));
        let c = board.add(square(1, 2, 0));
        let d = board.insert(square(1, 3, 0));

        assert!(board.replace_object(b, d));
        assert_eq!(board.objects(), &[a, d, c]);
        assert!(!board.contains(b));
        assert!(board.contains(d));

        // `b` is no longer attached, so this is a no-op.
        assert!(!board.replace_object(b, d));
        // `a` cannot replace with an already attached object.
        assert!(!board.replace_object(a, c));
    }

    #[test]
    fn replace_repaints_both_areas_and_ends_drag() {
        let mut board = board();
        let old = board.add(square(10, 0, 0));
        let new = board.insert(square(4, 50, 50));
        board.object_mut(old).unwrap().enable_drag();
        assert_eq!(board.pointer_press(5, 5), Some(old));
        board.sink_mut().requests.clear();

        assert!(board.replace_object(old, new));
        let requests = board.sink_mut().take_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(requests[1], Rect::new(50.0, 50.0, 54.0, 54.0));
        assert!(!board.drag_state().is_dragging());
        assert_eq!(board.pointer_drag(30, 30), None);
    }

    #[test]
    fn replace_runs_detectors_of_new_object() {
        use alloc::rc::Rc;
        use core::cell::Cell;

        let mut board = board();
        let a = board.add(square(10, 0, 0));
        let b = board.add(square(10, 50, 50));
        let c = board.insert(square(10, 5, 5));
        let (near, far) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        let hits = near.clone();
        board
            .add_collision_detector(a, c, move |_, _| hits.set(hits.get() + 1))
            .unwrap();
        let hits = far.clone();
        board
            .add_collision_detector(a, b, move |_, _| hits.set(hits.get() + 1))
            .unwrap();

        assert!(board.replace_object(b, c));
        assert_eq!(near.get(), 1);
        assert_eq!(far.get(), 0);
    }

    #[test]
    fn clear_detaches_everything_and_repaints_surface() {
        let mut board = board();
        let a = board.add(square(1, 0, 0));
        let b = board.add(square(1, 1, 0));
        board.sink_mut().requests.clear();

        board.clear();
        assert!(board.is_empty());
        assert!(!board.object(a).unwrap().is_attached());
        assert!(!board.object(b).unwrap().is_attached());
        assert_eq!(
            board.sink().requests,
            vec![Rect::new(0.0, 0.0, 100.0, 100.0)]
        );
    }

    #[test]
    fn lock_is_not_counted() {
        let mut board = board();
        board.lock();
        board.lock();
        board.add(square(2, 0, 0));
        board.unlock();
        assert!(!board.is_locked());
        assert_eq!(board.sink().requests.len(), 1);
    }

    #[test]
    fn unlock_without_changes_is_silent() {
        let mut board = board();
        board.lock();
        board.unlock();
        assert!(board.sink().requests.is_empty());
    }

    #[test]
    fn batch_forms_flush_once() {
        let mut board = board();
        let a = board.insert(square(2, 0, 0));
        let b = board.insert(square(2, 10, 10));
        board.add_objects([a, b]);
        assert_eq!(board.sink().requests, vec![Rect::new(0.0, 0.0, 12.0, 12.0)]);

        board.sink_mut().requests.clear();
        board.remove_objects([a, b]);
        assert_eq!(board.sink().requests.len(), 1);
        assert!(board.is_empty());
    }

    #[test]
    fn batch_forms_keep_outer_lock() {
        let mut board = board();
        let a = board.insert(square(2, 0, 0));
        board.lock();
        board.add_objects([a]);
        assert!(board.is_locked());
        assert!(board.sink().requests.is_empty());
        assert_eq!(board.pending_damage().dirty_rects.len(), 1);
        board.unlock();
        assert_eq!(board.sink().requests.len(), 1);
    }

    #[test]
    fn move_in_front_of_places_directly_above_reference() {
        let mut board = board();
        let a = board.add(square(1, 0, 0));
        let b = board.add(square(1, 0, 0));
        let c = board.add(square(1, 0, 0));

        assert!(board.move_in_front_of(c, a));
        assert_eq!(board.objects(), &[a, c, b]);
        assert!(board.move_in_front_of(a, b));
        assert_eq!(board.objects(), &[c, b, a]);
    }

    #[test]
    fn move_in_front_of_absent_reference_is_noop() {
        let mut board = board();
        let a = board.add(square(1, 0, 0));
        let b = board.add(square(1, 0, 0));
        let loose = board.insert(square(1, 0, 0));

        assert!(!board.move_in_front_of(a, loose));
        assert!(!board.move_in_front_of(loose, a));
        assert!(!board.move_in_front_of(a, a));
        assert_eq!(board.objects(), &[a, b]);
    }

    #[test]
    fn send_to_background_and_bring_to_foreground() {
        let mut board = board();
        let a = board.add(square(1, 0, 0));
        let b = board.add(square(1, 0, 0));
        let c = board.add(square(1, 0, 0));

        assert!(board.send_to_background(c));
        assert_eq!(board.objects(), &[c, a, b]);
        assert!(board.bring_to_foreground(c));
        assert_eq!(board.objects(), &[a, b, c]);

        let loose = board.insert(square(1, 0, 0));
        assert!(!board.send_to_background(loose));
        assert!(!board.bring_to_foreground(loose));
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn object_z_order_calls_repaint_only_when_attached() {
        let mut board = board();
        let a = board.add(square(2, 0, 0));
        let _b = board.add(square(2, 1, 1));
        let loose = board.insert(square(2, 5, 5));
        board.sink_mut().requests.clear();

        board.object_mut(a).unwrap().bring_to_foreground();
        assert_eq!(board.sink().requests, vec![Rect::new(0.0, 0.0, 2.0, 2.0)]);

        board.object_mut(loose).unwrap().send_to_background();
        assert_eq!(board.sink().requests.len(), 1);
    }

    #[test]
    fn take_requires_detached_and_drops_detectors() {
        let mut board = board();
        let a = board.add(square(2, 0, 0));
        let b = board.add(square(2, 0, 0));
        let detector = board.add_collision_detector(a, b, |_, _| {}).unwrap();
        assert_eq!(board.object(b).unwrap().detectors(), &[detector]);

        assert!(board.take(a).is_none());
        board.remove_object(a);
        let taken = board.take(a).unwrap();
        assert!(taken.detectors().is_empty());
        assert!(board.object(a).is_none());
        assert!(board.object(b).unwrap().detectors().is_empty());
        assert!(!board.remove_detector(detector));
    }

    #[test]
    fn detector_on_stale_object_is_rejected() {
        let mut board = board();
        let a = board.add(square(2, 0, 0));
        let b = board.insert(square(2, 0, 0));
        board.take(b);
        assert!(board.add_collision_detector(a, b, |_, _| {}).is_none());
    }

    #[test]
    fn move_repaints_once_then_fires_collision() {
        use alloc::rc::Rc;
        use core::cell::RefCell;

        let mut board = board();
        let a = board.add(square(10, 0, 0));
        let b = board.add(square(10, 50, 50));
        board.sink_mut().requests.clear();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        board
            .add_collision_detector(a, b, move |_, _| log.borrow_mut().push("collision"))
            .unwrap();

        board.object_mut(a).unwrap().move_to(45, 45);
        assert_eq!(board.sink().requests.len(), 1);
        assert_eq!(*seen.borrow(), vec!["collision"]);
    }

    #[test]
    fn paint_area_clips_to_area() {
        let mut board = board();
        board.add(square(10, 0, 0));
        let mut surface = Pixmap::new(100, 100);
        board.paint_area(&mut surface, Rect::new(5.0, 5.0, 8.0, 8.0));
        assert_eq!(surface.alpha(4, 4), 0);
        assert_eq!(surface.alpha(5, 5), 255);
        assert_eq!(surface.alpha(8, 8), 0);
    }

    #[test]
    fn subobject_changes_repaint_parent() {
        let mut board = board();
        let id = board.add(VisualObject::new(Pixmap::new(10, 10)).with_position(5, 5));
        board.sink_mut().requests.clear();

        let index = board
            .object_mut(id)
            .unwrap()
            .add_subobject(square(2, 1, 1))
            .unwrap();
        let updated = board
            .object_mut(id)
            .unwrap()
            .update_subobject(index, |child| child.set_position(3, 3));
        assert!(updated);
        let removed = board.object_mut(id).unwrap().remove_subobject(index);
        assert!(removed.is_some());
        assert_eq!(
            board.sink().requests,
            vec![Rect::new(5.0, 5.0, 15.0, 15.0); 3]
        );
    }
}
