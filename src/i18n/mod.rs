// SPDX-License-Identifier: MPL-2.0
//! Localized labels for the viewer controls.
//!
//! Translations are Fluent files embedded from `assets/i18n/`. The active
//! locale is picked from an explicit override, then the config file, then the
//! operating system, and falls back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
