// SPDX-License-Identifier: MPL-2.0
//! Coordinated offset and opacity transitions for the viewer.
//!
//! ```text
//! Transition        offset            background      image opacity
//! ----------------  ----------------  --------------  -----------------------
//! Appear            0 (now)           1 (now)         1 (ease-in, speed)
//! Disappear         0 (now)           0 (now)         0 (now)
//! CancelSnapBack    0 (ease-out)      1 (ease-out)    -
//! CommitFlyOff      exit (linear)     0 (linear)      -
//! ```
//!
//! Transitions only write targets; a later transition simply retargets the
//! same properties, so any two may interrupt each other.

use crate::animation::{Curve, Tween};
use crate::config::ViewerSettings;
use crate::domain::geometry::Offset;
use crate::domain::ui::Opacity;
use std::time::Duration;

/// The named viewer transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Image became visible.
    Appear,
    /// Image was cleared.
    Disappear,
    /// Dismiss drag rejected.
    CancelSnapBack,
    /// Dismiss drag accepted; fly the image along `exit`.
    CommitFlyOff { exit: Offset },
}

/// Owns the animated viewer properties and applies transitions to them.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    offset: Tween<Offset>,
    background_opacity: Tween<f32>,
    image_opacity: Tween<f32>,
    animation_speed: Duration,
    snap_back: Duration,
}

impl AnimationDriver {
    /// Creates a driver in the hidden resting state (everything transparent).
    #[must_use]
    pub fn new(settings: &ViewerSettings) -> Self {
        Self {
            offset: Tween::new(Offset::ZERO),
            background_opacity: Tween::new(0.0),
            image_opacity: Tween::new(0.0),
            animation_speed: settings.animation_speed.as_duration(),
            snap_back: settings.snap_back.as_duration(),
        }
    }

    /// Applies a transition's writes.
    pub fn run(&mut self, transition: Transition) {
        tracing::trace!(?transition, "running transition");
        match transition {
            Transition::Appear => {
                self.offset.set(Offset::ZERO);
                self.background_opacity.set(1.0);
                self.image_opacity
                    .animate_to(1.0, Curve::ease_in(self.animation_speed));
            }
            Transition::Disappear => {
                self.offset.set(Offset::ZERO);
                self.background_opacity.set(0.0);
                self.image_opacity.set(0.0);
            }
            Transition::CancelSnapBack => {
                let curve = Curve::ease_out(self.snap_back);
                self.offset.animate_to(Offset::ZERO, curve);
                self.background_opacity.animate_to(1.0, curve);
            }
            Transition::CommitFlyOff { exit } => {
                let curve = Curve::linear(self.animation_speed);
                self.offset.animate_to(exit, curve);
                self.background_opacity.animate_to(0.0, curve);
            }
        }
    }

    /// Writes the drag-tracking values immediately.
    pub fn track_drag(&mut self, offset: Offset, background_opacity: Opacity) {
        self.offset.set(offset);
        self.background_opacity.set(background_opacity.value());
    }

    /// Advances every running animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.offset.tick(dt);
        self.background_opacity.tick(dt);
        self.image_opacity.tick(dt);
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset.value()
    }

    #[must_use]
    pub fn background_opacity(&self) -> Opacity {
        Opacity::new(self.background_opacity.value())
    }

    #[must_use]
    pub fn image_opacity(&self) -> Opacity {
        Opacity::new(self.image_opacity.value())
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
            || self.background_opacity.is_animating()
            || self.image_opacity.is_animating()
    }

    /// Whether the offset is currently being driven off-screen.
    #[must_use]
    pub fn is_flying_off(&self) -> bool {
        self.offset.is_animating() && !self.offset.target().is_zero()
    }
}
