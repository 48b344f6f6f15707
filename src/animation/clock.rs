// SPDX-License-Identifier: MPL-2.0
//! Frame delta bookkeeping for hosts that drive animation from a render loop.

use std::time::{Duration, Instant};

/// Longest single step handed to the animation system after a host stall.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Converts host frame timestamps into bounded frame deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame at `now` and returns the time since the previous one.
    ///
    /// The first frame yields zero.
    pub fn advance(&mut self, now: Instant) -> Duration {
        let delta = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);
        delta.min(MAX_FRAME_DELTA)
    }

    /// Forgets the previous frame, e.g. when the viewer stops rendering.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}
