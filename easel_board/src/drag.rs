// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state: remember what was grabbed and where, then turn pointer
//! positions into object positions.
//!
//! ## Usage
//!
//! 1) On pointer press over an object, call [`DragState::start`] with the object,
//!    the pointer position, and the object's current position.
//! 2) On each drag event, call [`DragState::update`] to get the position the
//!    grabbed object should move to so the grab point stays under the pointer.
//! 3) End the drag on pointer release with [`DragState::end`].
//!
//! The grabbed object stays grabbed until [`DragState::end`], even if another
//! object passes over it.

use crate::types::ObjectId;

/// Tracks the grabbed object and grab offset between press and release.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Object under the pointer when the drag started.
    pub target: Option<ObjectId>,
    /// Pointer position minus object position at press time.
    pub grab_offset: (i32, i32),
}

impl DragState {
    /// Start tracking a drag of `target`, grabbed at `pointer` while it sat at `origin`.
    pub fn start(&mut self, target: ObjectId, pointer: (i32, i32), origin: (i32, i32)) {
        self.target = Some(target);
        self.grab_offset = (
            pointer.0.saturating_sub(origin.0),
            pointer.1.saturating_sub(origin.1),
        );
    }

    /// Returns the grabbed object and where it should be moved for a pointer at `pointer`.
    #[must_use]
    pub fn update(&self, pointer: (i32, i32)) -> Option<(ObjectId, i32, i32)> {
        let target = self.target?;
        Some((
            target,
            pointer.0.saturating_sub(self.grab_offset.0),
            pointer.1.saturating_sub(self.grab_offset.1),
        ))
    }

    /// End the current drag operation and reset state.
    pub fn end(&mut self) {
        self.target = None;
        self.grab_offset = (0, 0);
    }

    /// Returns `true` while a drag operation is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Key;

    fn id(n: u32) -> ObjectId {
        ObjectId(Key::new(n, 1))
    }

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update((5, 5)), None);
    }

    #[test]
    fn start_records_grab_offset() {
        let mut drag = DragState::default();
        drag.start(id(0), (15, 27), (10, 20));

        assert!(drag.is_dragging());
        assert_eq!(drag.grab_offset, (5, 7));
    }

    #[test]
    fn update_keeps_grab_point_under_pointer() {
        let mut drag = DragState::default();
        drag.start(id(0), (15, 27), (10, 20));

        assert_eq!(drag.update((100, 100)), Some((id(0), 95, 93)));
        assert_eq!(drag.update((15, 27)), Some((id(0), 10, 20)));
    }

    #[test]
    fn negative_positions() {
        let mut drag = DragState::default();
        drag.start(id(0), (2, 2), (0, 0));

        assert_eq!(drag.update((0, 0)), Some((id(0), -2, -2)));
    }

    #[test]
    fn end_resets_drag_state() {
        let mut drag = DragState::default();
        drag.start(id(0), (1, 1), (0, 0));

        drag.end();

        assert!(!drag.is_dragging());
        assert_eq!(drag.grab_offset, (0, 0));
        assert_eq!(drag.update((3, 3)), None);
    }

    #[test]
    fn end_on_fresh_state_is_safe() {
        let mut drag = DragState::default();
        drag.end();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(id(0), (0, 0), (0, 0));
        drag.start(id(1), (50, 60), (40, 40));

        assert_eq!(drag.target, Some(id(1)));
        assert_eq!(drag.update((55, 65)), Some((id(1), 45, 45)));
    }
}
