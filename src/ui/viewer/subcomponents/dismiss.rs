// SPDX-License-Identifier: MPL-2.0
//! Flick-to-dismiss drag sub-component.
//!
//! Turns drag events (current translation plus the platform's predicted
//! end translation) into live offset/opacity tracking and a single
//! commit-or-cancel decision when the finger lifts.

use crate::config::ViewerSettings;
use crate::domain::geometry::Offset;
use crate::domain::ui::Opacity;

/// Dismiss gesture state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Whether a drag is in progress.
    dragging: bool,
    /// Projected resting translation, refreshed on every drag event.
    predicted: Offset,
}

/// Messages for the dismiss sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The finger moved.
    DragChanged {
        translation: Offset,
        predicted_end: Offset,
    },
    /// The finger lifted.
    DragEnded { predicted_end: Offset },
}

/// Effects produced by the dismiss gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Follow the finger: write offset and backdrop opacity immediately.
    Track {
        offset: Offset,
        background_opacity: Opacity,
    },
    /// Dismiss accepted: fly the image off along `exit`.
    Commit { exit: Offset },
    /// Dismiss rejected: snap back to rest.
    Cancel,
}

impl State {
    /// Handle a drag message.
    pub fn handle(&mut self, msg: Message, settings: &ViewerSettings) -> Effect {
        match msg {
            Message::DragChanged {
                translation,
                predicted_end,
            } => {
                self.dragging = true;
                self.predicted = predicted_end;
                Effect::Track {
                    offset: translation,
                    background_opacity: background_opacity(translation, settings),
                }
            }
            Message::DragEnded { predicted_end } => {
                if !self.dragging {
                    return Effect::None;
                }
                self.dragging = false;
                self.predicted = predicted_end;
                // Consumed by the decision; never carried into the next drag.
                let predicted = std::mem::take(&mut self.predicted);
                if should_dismiss(predicted, settings) {
                    Effect::Commit {
                        exit: exit_vector(predicted, settings),
                    }
                } else {
                    Effect::Cancel
                }
            }
        }
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Abandons an in-flight drag without a decision (viewer torn down mid-drag).
    pub fn abort(&mut self) {
        self.dragging = false;
        self.predicted = Offset::ZERO;
    }
}

/// Backdrop opacity while the image is dragged by `translation`.
///
/// Falls linearly from 1 at rest to the opacity floor at the dismiss
/// threshold, and is held at the floor beyond it.
#[must_use]
pub fn background_opacity(translation: Offset, settings: &ViewerSettings) -> Opacity {
    let floor = settings.opacity_floor.value();
    let progress = translation.magnitude() / settings.dismiss_threshold.value();
    let value = 1.0 - progress * (1.0 - floor);
    Opacity::new(value.clamp(floor, 1.0))
}

/// Whether a drag released with this predicted translation dismisses.
#[must_use]
pub fn should_dismiss(predicted_end: Offset, settings: &ViewerSettings) -> bool {
    predicted_end.magnitude() > settings.dismiss_threshold.value()
}

/// Fly-off target: the predicted translation, extended along its own
/// direction to at least the dismiss distance.
#[must_use]
pub fn exit_vector(predicted_end: Offset, settings: &ViewerSettings) -> Offset {
    let minimum = predicted_end.normalized() * settings.dismiss_distance.value();
    predicted_end.longest(minimum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn settings() -> ViewerSettings {
        ViewerSettings::default()
    }

    fn drag(state: &mut State, translation: Offset, predicted_end: Offset) -> Effect {
        state.handle(
            Message::DragChanged {
                translation,
                predicted_end,
            },
            &settings(),
        )
    }

    #[test]
    fn drag_changed_tracks_translation() {
        let mut state = State::default();
        let effect = drag(&mut state, Offset::new(0.0, 100.0), Offset::new(0.0, 120.0));

        assert!(state.is_dragging());
        match effect {
            Effect::Track {
                offset,
                background_opacity,
            } => {
                assert_eq!(offset, Offset::new(0.0, 100.0));
                assert_abs_diff_eq!(background_opacity.value(), 0.9, epsilon = 1e-6);
            }
            other => panic!("expected Track, got {other:?}"),
        }
    }

    #[test]
    fn opacity_endpoints() {
        let s = settings();
        assert_abs_diff_eq!(background_opacity(Offset::ZERO, &s).value(), 1.0);
        assert_abs_diff_eq!(
            background_opacity(Offset::new(120.0, 160.0), &s).value(),
            0.8,
            epsilon = 1e-6
        );
    }

    #[test]
    fn opacity_is_non_increasing_in_distance() {
        let s = settings();
        let mut previous = 1.0;
        for step in 0..=300 {
            let value = background_opacity(Offset::new(0.0, step as f32), &s).value();
            assert!(value <= previous + f32::EPSILON, "increased at {step}");
            assert!((0.8 - 1e-6..=1.0).contains(&value));
            previous = value;
        }
    }

    #[test]
    fn drag_ended_below_threshold_cancels() {
        let mut state = State::default();
        drag(&mut state, Offset::new(0.0, 50.0), Offset::new(0.0, 80.0));
        let effect = state.handle(
            Message::DragEnded {
                predicted_end: Offset::new(0.0, 200.0),
            },
            &settings(),
        );
        assert_eq!(effect, Effect::Cancel);
        assert!(!state.is_dragging());
    }

    #[test]
    fn drag_ended_uses_release_prediction() {
        let mut state = State::default();
        drag(&mut state, Offset::new(0.0, 50.0), Offset::new(0.0, 900.0));
        let effect = state.handle(
            Message::DragEnded {
                predicted_end: Offset::new(0.0, 20.0),
            },
            &settings(),
        );
        assert_eq!(effect, Effect::Cancel);
    }

    #[test]
    fn drag_ended_above_threshold_commits_with_long_exit() {
        let mut state = State::default();
        drag(&mut state, Offset::new(30.0, 40.0), Offset::new(150.0, 200.0));
        let effect = state.handle(
            Message::DragEnded {
                predicted_end: Offset::new(150.0, 200.0),
            },
            &settings(),
        );
        match effect {
            Effect::Commit { exit } => {
                assert_abs_diff_eq!(exit.magnitude(), 1000.0, epsilon = 1e-3);
                assert_abs_diff_eq!(exit.dx, 600.0, epsilon = 1e-3);
                assert_abs_diff_eq!(exit.dy, 800.0, epsilon = 1e-3);
            }
            other => panic!("expected Commit, got {other:?}"),
        }
    }

    #[test]
    fn exit_keeps_longer_prediction() {
        let exit = exit_vector(Offset::new(0.0, -1500.0), &settings());
        assert_eq!(exit, Offset::new(0.0, -1500.0));
    }

    #[test]
    fn exit_direction_matches_prediction_for_negative_axes() {
        let predicted = Offset::new(-300.0, -40.0);
        let exit = exit_vector(predicted, &settings());
        assert!(exit.magnitude() >= 1000.0 - 1e-3);
        let (a, b) = (exit.normalized(), predicted.normalized());
        assert_abs_diff_eq!(a.dx, b.dx, epsilon = 1e-5);
        assert_abs_diff_eq!(a.dy, b.dy, epsilon = 1e-5);
    }

    #[test]
    fn drag_ended_without_drag_is_ignored() {
        let mut state = State::default();
        let effect = state.handle(
            Message::DragEnded {
                predicted_end: Offset::new(0.0, 900.0),
            },
            &settings(),
        );
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn abort_clears_drag() {
        let mut state = State::default();
        drag(&mut state, Offset::new(0.0, 10.0), Offset::new(0.0, 10.0));
        state.abort();
        assert!(!state.is_dragging());
    }
}
