// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between a board and the host surface.

use kurbo::Rect;

/// The surface a [`Board`](crate::Board) is bound to.
///
/// The host implements this for its window or canvas binding. The board asks
/// for repaints through [`request_repaint`](Self::request_repaint); the host is
/// expected to eventually call [`Board::paint`](crate::Board::paint) (or
/// [`Board::paint_area`](crate::Board::paint_area)) to satisfy them.
pub trait RenderSink {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Schedules a repaint of `area` (board coordinates, whole pixels).
    fn request_repaint(&mut self, area: Rect);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn request_repaint(&mut self, area: Rect) {
        (**self).request_repaint(area);
    }
}
