// SPDX-License-Identifier: MPL-2.0
//! Pluggable appearance for the overlay buttons.

use crate::ui::design_tokens::{opacity, palette, sizing, spacing};
use image_rs::Rgba;

/// Interaction state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStatus {
    #[default]
    Active,
    Hovered,
    Pressed,
}

/// Resolved look of a button for one status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonAppearance {
    pub foreground: Rgba<u8>,
    pub background: Option<Rgba<u8>>,
    pub padding: f32,
    pub icon_size: f32,
    /// Multiplied with the control's own opacity.
    pub opacity: f32,
}

/// Appearance provider for the share and close buttons.
pub trait ButtonStyle {
    fn appearance(&self, status: ButtonStatus) -> ButtonAppearance;
}

impl<F> ButtonStyle for F
where
    F: Fn(ButtonStatus) -> ButtonAppearance,
{
    fn appearance(&self, status: ButtonStatus) -> ButtonAppearance {
        self(status)
    }
}

/// Default style: white glyph on no background, dimmed while pressed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloseButtonStyle;

impl ButtonStyle for CloseButtonStyle {
    fn appearance(&self, status: ButtonStatus) -> ButtonAppearance {
        let opacity = match status {
            ButtonStatus::Active => opacity::OPAQUE,
            ButtonStatus::Hovered => opacity::OVERLAY_HOVER,
            ButtonStatus::Pressed => opacity::OVERLAY_MEDIUM,
        };
        ButtonAppearance {
            foreground: palette::WHITE,
            background: None,
            padding: spacing::MD,
            icon_size: sizing::ICON_LG,
            opacity,
        }
    }
}
