// SPDX-License-Identifier: MPL-2.0
//! `zoom_lens` is the headless core of a full-screen image viewer.
//!
//! It turns pinch, double-tap and flick-to-dismiss input into animated
//! offset and opacity properties, tracks the show/dismiss lifecycle from a
//! shared optional image binding, and watermarks images for sharing. The
//! host supplies frame ticks and draws the published properties.
//!
//! ```no_run
//! use zoom_lens::config::Config;
//! use zoom_lens::media::load_image;
//! use zoom_lens::ui::viewer::{Binding, Message, ZoomImageViewer};
//! use std::time::Duration;
//!
//! # fn main() -> zoom_lens::error::Result<()> {
//! let config = zoom_lens::config::load()?;
//! let image = Binding::new(Some(load_image("photo.png")?));
//! let mut viewer = ZoomImageViewer::new(image.clone(), &config)
//!     .on_dismiss(|| println!("dismissed"));
//!
//! while viewer.needs_frames() {
//!     viewer.handle(Message::Tick(Duration::from_millis(16)));
//! }
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/zoom_lens/0.1.0")]

pub mod animation;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
