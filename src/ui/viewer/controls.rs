// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: the share and close buttons in the top-leading corner.

use crate::domain::ui::Opacity;
use crate::i18n::fluent::I18n;
use crate::ui::styles::button::{ButtonAppearance, ButtonStatus, ButtonStyle};

pub const SHARE_SYMBOL: &str = "square.and.arrow.up";
pub const CLOSE_SYMBOL: &str = "xmark";

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub style: &'a dyn ButtonStyle,
    /// Controls fade together with the backdrop.
    pub background_opacity: Opacity,
    pub share_status: ButtonStatus,
    pub close_status: ButtonStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Share,
    Close,
}

/// A button ready for the host to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlButton {
    pub message: Message,
    /// Localized accessibility label.
    pub label: String,
    /// Platform symbol name for the glyph.
    pub symbol: &'static str,
    pub appearance: ButtonAppearance,
    pub opacity: Opacity,
}

/// Share then close, leading to trailing.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> [ControlButton; 2] {
    let button = |message, label_key, symbol, status| ControlButton {
        message,
        label: ctx.i18n.tr(label_key),
        symbol,
        appearance: ctx.style.appearance(status),
        opacity: ctx.background_opacity,
    };
    [
        button(
            Message::Share,
            "viewer-share-label",
            SHARE_SYMBOL,
            ctx.share_status,
        ),
        button(
            Message::Close,
            "viewer-close-label",
            CLOSE_SYMBOL,
            ctx.close_status,
        ),
    ]
}
