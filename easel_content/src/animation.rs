// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame animations driven by the host's timer.

use core::time::Duration;

use easel_pixels::Pixmap;

use crate::LoadError;

/// A cyclic sequence of frames plus a static frame shown while stopped.
///
/// The animation owns no timer. The host schedules [`tick`](Self::tick) every
/// [`interval`](Self::interval) while [`is_active`](Self::is_active) and hands
/// the returned frame to the object showing the animation:
///
/// ```
/// use core::time::Duration;
/// use easel_content::Animation;
/// use easel_pixels::Pixmap;
///
/// let mut anim = Animation::new(
///     Duration::from_millis(100),
///     Pixmap::new(1, 1),
///     vec![Pixmap::new(2, 2), Pixmap::new(3, 3)],
/// )?;
///
/// anim.start();
/// assert_eq!(anim.tick().map(Pixmap::width), Some(2));
/// assert_eq!(anim.tick().map(Pixmap::width), Some(3));
/// assert_eq!(anim.tick().map(Pixmap::width), Some(2));
///
/// assert_eq!(anim.stop().width(), 1);
/// assert!(anim.tick().is_none());
/// # Ok::<(), easel_content::LoadError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Animation {
    interval: Duration,
    static_frame: Pixmap,
    frames: Vec<Pixmap>,
    next: usize,
    active: bool,
}

impl Animation {
    /// Creates a stopped animation.
    ///
    /// Returns [`LoadError::NoFrames`] if `frames` is empty.
    pub fn new(
        interval: Duration,
        static_frame: Pixmap,
        frames: Vec<Pixmap>,
    ) -> Result<Self, LoadError> {
        if frames.is_empty() {
            return Err(LoadError::NoFrames);
        }
        Ok(Self {
            interval,
            static_frame,
            frames,
            next: 0,
            active: false,
        })
    }

    /// Time between frames.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` between [`start`](Self::start) and [`stop`](Self::stop).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The frames, in play order.
    #[must_use]
    pub fn frames(&self) -> &[Pixmap] {
        &self.frames
    }

    /// The frame shown while stopped.
    #[must_use]
    pub fn static_frame(&self) -> &Pixmap {
        &self.static_frame
    }

    /// Starts (or keeps) playing from the current position.
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stops playing, rewinds to the first frame, and returns the static
    /// frame to display.
    pub fn stop(&mut self) -> &Pixmap {
        self.active = false;
        self.next = 0;
        &self.static_frame
    }

    /// Returns the next frame and advances, wrapping after the last.
    ///
    /// Returns `None` while stopped.
    pub fn tick(&mut self) -> Option<&Pixmap> {
        if !self.active {
            return None;
        }
        let index = self.next;
        self.next = (index + 1) % self.frames.len();
        self.frames.get(index)
    }
}
