// SPDX-License-Identifier: MPL-2.0
//! Full-screen image viewer: gestures, presentation state and overlay controls.

pub mod animation_driver;
pub mod binding;
pub mod component;
pub mod controls;
pub mod observable;
pub mod presentation;
pub mod subcomponents;

pub use animation_driver::{AnimationDriver, Transition};
pub use binding::Binding;
pub use component::{Effect, Message, ViewerSnapshot, ZoomImageViewer};
pub use observable::{Observable, SubscriptionId};
pub use presentation::{DismissCallback, Phase, PresentationController};
pub use subcomponents::dismiss::State as DismissGestureController;
