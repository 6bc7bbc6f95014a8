// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty regions accumulated while a board is locked.

use alloc::vec::Vec;

use kurbo::Rect;

/// A batched set of repaint requests.
///
/// While a [`Board`](crate::Board) is locked, every repaint request lands here
/// instead of reaching the [`RenderSink`](crate::RenderSink). Unlocking
/// flushes the bounding union as a single request.
///
/// Rectangles may overlap and are not deduplicated.
#[derive(Clone, Debug, Default)]
pub struct Damage {
    /// Board-space rectangles requested for repaint, in request order.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// Records a rectangle.
    pub fn add(&mut self, rect: Rect) {
        self.dirty_rects.push(rect);
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }

    /// Returns the union of all damage rects.
    #[must_use]
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// Returns the union of all damage rects and forgets them.
    pub fn take_union(&mut self) -> Option<Rect> {
        let union = self.union_rect();
        self.dirty_rects.clear();
        union
    }
}
