// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component encapsulating ZoomState and its handlers.

use crate::domain::ui::ZoomScale;
use crate::ui::state::ZoomState;

/// Zoom sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The underlying zoom state.
    pub inner: ZoomState,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Two fingers touched down.
    PinchStarted,
    /// Cumulative magnification relative to the pinch start.
    PinchChanged(f32),
    /// Fingers lifted.
    PinchEnded,
    /// Toggle between minimum and maximum zoom.
    DoubleTap,
    /// Return to minimum zoom.
    Reset,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Magnification changed.
    ZoomChanged,
    /// A pinch started or ended; interactivity changed.
    InteractionChanged,
}

impl State {
    #[must_use]
    pub fn new(maximum: ZoomScale) -> Self {
        Self {
            inner: ZoomState::new(maximum),
        }
    }

    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PinchStarted => {
                self.inner.begin_pinch();
                Effect::InteractionChanged
            }
            Message::PinchChanged(factor) => {
                if self.inner.pinch(factor) {
                    Effect::ZoomChanged
                } else {
                    Effect::None
                }
            }
            Message::PinchEnded => {
                if !self.inner.is_pinching() {
                    return Effect::None;
                }
                self.inner.end_pinch();
                Effect::InteractionChanged
            }
            Message::DoubleTap => {
                self.inner.toggle();
                Effect::ZoomChanged
            }
            Message::Reset => {
                self.inner.reset();
                Effect::ZoomChanged
            }
        }
    }

    /// Whether the pan-to-dismiss gesture is attached.
    #[must_use]
    pub fn allows_dismiss_drag(&self) -> bool {
        self.inner.is_min() && !self.inner.is_pinching()
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.inner.is_pinching()
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.inner.scale()
    }
}
