// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A render sink that records repaint requests, for tests and headless hosts.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::sink::RenderSink;

/// [`RenderSink`] that stores every repaint request in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSink {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Requests received so far, oldest first.
    pub requests: Vec<Rect>,
}

impl RecordingSink {
    /// Creates a sink for a surface of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            requests: Vec::new(),
        }
    }

    /// Returns the recorded requests and starts a fresh log.
    pub fn take_requests(&mut self) -> Vec<Rect> {
        core::mem::take(&mut self.requests)
    }
}

impl RenderSink for RecordingSink {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn request_repaint(&mut self, area: Rect) {
        self.requests.push(area);
    }
}
