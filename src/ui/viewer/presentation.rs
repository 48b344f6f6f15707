// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine.
//!
//! ```text
//!            image set                    commit
//!   Hidden ─────────────▶ Shown ─────────────────────▶ Dismissing
//!     ▲                   │  ▲ cancel (snap back)           │
//!     │ image cleared     │  └──────┘                       │ teardown timer
//!     └───────────────────┴─────────────────────────────────┘ clears image
//! ```
//!
//! Visibility follows the [`Binding`] alone. Every queued change is replayed
//! in order, so clearing and re-setting the image between two updates still
//! runs Disappear and then Appear instead of leaving the viewer half torn
//! down.

use super::animation_driver::{AnimationDriver, Transition};
use super::binding::{Binding, Change};
use crate::config::ViewerSettings;
use crate::domain::geometry::Offset;
use std::fmt;
use std::time::Duration;

/// Callback invoked once per completed dismiss cycle.
pub type DismissCallback = Box<dyn FnMut()>;

/// Where the viewer is in its show/dismiss cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No image; nothing rendered.
    #[default]
    Hidden,
    /// Image visible (possibly still fading in or snapping back).
    Shown,
    /// Dismiss committed; flying off until the teardown timer clears the image.
    Dismissing,
}

/// Drives [`Phase`] from binding changes and dismiss decisions.
pub struct PresentationController<T> {
    phase: Phase,
    binding: Binding<T>,
    /// Time left before a committed dismiss clears the binding.
    teardown_remaining: Option<Duration>,
    on_dismiss: Option<DismissCallback>,
    /// Incremented on every Appear.
    appearances: u64,
}

impl<T> fmt::Debug for PresentationController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationController")
            .field("phase", &self.phase)
            .field("binding", &self.binding)
            .field("teardown_remaining", &self.teardown_remaining)
            .field("has_on_dismiss", &self.on_dismiss.is_some())
            .field("appearances", &self.appearances)
            .finish()
    }
}

impl<T> PresentationController<T> {
    /// Creates a hidden controller observing `binding`.
    ///
    /// A value already present is picked up by the first [`sync`](Self::sync).
    #[must_use]
    pub fn new(binding: Binding<T>, on_dismiss: Option<DismissCallback>) -> Self {
        Self {
            phase: Phase::Hidden,
            binding,
            teardown_remaining: None,
            on_dismiss,
            appearances: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn binding(&self) -> &Binding<T> {
        &self.binding
    }

    pub fn set_on_dismiss(&mut self, on_dismiss: Option<DismissCallback>) {
        self.on_dismiss = on_dismiss;
    }

    /// How many times the image has appeared. Lets owners detect a re-present
    /// that happened between two observations.
    #[must_use]
    pub fn appearances(&self) -> u64 {
        self.appearances
    }

    /// Whether a committed dismiss is waiting for its teardown.
    #[must_use]
    pub fn teardown_pending(&self) -> bool {
        self.teardown_remaining.is_some()
    }

    /// Replays queued binding changes, then reconciles the phase with the
    /// binding's current value.
    ///
    /// Returns whether the phase changed.
    pub fn sync(&mut self, driver: &mut AnimationDriver) -> bool {
        let before = self.phase;
        for change in self.binding.take_changes() {
            match change {
                Change::Presented => self.appear(driver),
                Change::Cleared => self.disappear(driver),
            }
        }
        match (self.phase, self.binding.is_some()) {
            (Phase::Hidden, true) => self.appear(driver),
            (Phase::Shown | Phase::Dismissing, false) => self.disappear(driver),
            _ => {}
        }
        self.phase != before
    }

    /// Accepts a dismiss: flies the image off and arms the teardown timer.
    ///
    /// Ignored unless shown.
    pub fn commit(&mut self, exit: Offset, settings: &ViewerSettings, driver: &mut AnimationDriver) {
        if self.phase != Phase::Shown {
            tracing::debug!(phase = ?self.phase, "dismiss commit ignored");
            return;
        }
        tracing::debug!(?exit, "dismiss committed");
        self.phase = Phase::Dismissing;
        driver.run(Transition::CommitFlyOff { exit });
        self.teardown_remaining = Some(settings.teardown_after());
    }

    /// Rejects a dismiss: snaps back to rest and stays shown.
    pub fn cancel(&mut self, driver: &mut AnimationDriver) {
        if self.phase != Phase::Shown {
            return;
        }
        tracing::debug!("dismiss cancelled");
        driver.run(Transition::CancelSnapBack);
    }

    /// Close button: clears the image right away.
    pub fn close(&mut self, driver: &mut AnimationDriver) {
        if self.phase == Phase::Hidden {
            return;
        }
        self.binding.clear();
        self.sync(driver);
    }

    /// Advances animations and the teardown timer by `dt`.
    pub fn tick(&mut self, dt: Duration, driver: &mut AnimationDriver) {
        // A re-present queued since the last update must disarm the timer first.
        self.sync(driver);
        driver.tick(dt);
        if let Some(remaining) = self.teardown_remaining {
            let remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                self.teardown_remaining = None;
                self.fire_teardown();
            } else {
                self.teardown_remaining = Some(remaining);
            }
        }
        self.sync(driver);
    }

    fn fire_teardown(&mut self) {
        if self.binding.is_some() {
            tracing::debug!("teardown timer clearing image");
            self.binding.clear();
        } else {
            tracing::debug!("teardown timer fired on hidden viewer");
        }
    }

    fn appear(&mut self, driver: &mut AnimationDriver) {
        tracing::debug!(from = ?self.phase, "image presented");
        self.phase = Phase::Shown;
        self.teardown_remaining = None;
        self.appearances += 1;
        driver.run(Transition::Appear);
    }

    fn disappear(&mut self, driver: &mut AnimationDriver) {
        if self.phase == Phase::Hidden {
            return;
        }
        tracing::info!(from = ?self.phase, "image dismissed");
        self.phase = Phase::Hidden;
        self.teardown_remaining = None;
        driver.run(Transition::Disappear);
        if let Some(on_dismiss) = self.on_dismiss.as_mut() {
            on_dismiss();
        }
    }
}
