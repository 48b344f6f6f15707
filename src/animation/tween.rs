// SPDX-License-Identifier: MPL-2.0
//! Retargetable tweens.

use super::easing::Easing;
use crate::domain::geometry::Offset;
use std::time::Duration;

/// Values that can be linearly interpolated.
pub trait Interpolate: Copy {
    /// Interpolates between `self` and `other` by `t` (0.0 to 1.0).
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Offset {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Offset::new(self.dx.lerp(&other.dx, t), self.dy.lerp(&other.dy, t))
    }
}

/// Duration and timing curve of one animated write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Curve {
    pub duration: Duration,
    pub easing: Easing,
}

impl Curve {
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    #[must_use]
    pub const fn linear(duration: Duration) -> Self {
        Self::new(duration, Easing::Linear)
    }

    #[must_use]
    pub const fn ease_in(duration: Duration) -> Self {
        Self::new(duration, Easing::EaseIn)
    }

    #[must_use]
    pub const fn ease_out(duration: Duration) -> Self {
        Self::new(duration, Easing::EaseOut)
    }
}

#[derive(Debug, Clone, Copy)]
struct Running<T> {
    from: T,
    curve: Curve,
    elapsed: Duration,
}

/// A single animatable property.
///
/// Writes are last-write-wins: [`Tween::set`] jumps immediately and
/// [`Tween::animate_to`] starts from whatever value is currently displayed,
/// so an interrupted animation never snaps back to an earlier origin.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Interpolate> {
    current: T,
    target: T,
    running: Option<Running<T>>,
}

impl<T: Interpolate> Tween<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            target: value,
            running: None,
        }
    }

    /// Sets the value immediately, cancelling any running animation.
    pub fn set(&mut self, value: T) {
        self.current = value;
        self.target = value;
        self.running = None;
    }

    /// Animates from the current value to `target` along `curve`.
    ///
    /// A zero-length curve behaves like [`Tween::set`].
    pub fn animate_to(&mut self, target: T, curve: Curve) {
        if curve.duration.is_zero() {
            self.set(target);
            return;
        }
        self.target = target;
        self.running = Some(Running {
            from: self.current,
            curve,
            elapsed: Duration::ZERO,
        });
    }

    /// Advances a running animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        let Some(running) = self.running.as_mut() else {
            return;
        };
        running.elapsed = running.elapsed.saturating_add(dt);
        if running.elapsed >= running.curve.duration {
            self.current = self.target;
            self.running = None;
            return;
        }
        let progress = running.elapsed.as_secs_f32() / running.curve.duration.as_secs_f32();
        let eased = running.curve.easing.apply(progress);
        self.current = running.from.lerp(&self.target, eased);
    }

    /// Currently displayed value.
    #[must_use]
    pub fn value(&self) -> T {
        self.current
    }

    /// Value the property is heading towards (equal to `value()` at rest).
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Curve of the running animation, if any.
    #[must_use]
    pub fn curve(&self) -> Option<Curve> {
        self.running.map(|running| running.curve)
    }
}

impl<T: Interpolate + Default> Default for Tween<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
