// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value objects and business rules.
//!
//! Nothing in here knows about rendering, timing sources or the host
//! platform, which keeps these types trivially testable.
//!
//! # Modules
//!
//! - [`geometry`]: Layout vectors ([`Offset`](geometry::Offset),
//!   [`GeometryContext`](geometry::GeometryContext), [`Rect`](geometry::Rect))
//! - [`ui`]: UI value objects ([`Opacity`](ui::newtypes::Opacity),
//!   [`ZoomScale`](ui::newtypes::ZoomScale), [`AnimationSpeed`](ui::newtypes::AnimationSpeed))

pub mod geometry;
pub mod ui;
