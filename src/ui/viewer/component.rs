// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! `ZoomImageViewer` orchestrates the dismiss and zoom sub-components, the
//! presentation state machine and the animation driver, and republishes
//! the animated properties as [`Observable`]s after every message.

use crate::animation::FrameClock;
use crate::config::{Config, ViewerSettings, WatermarkSettings};
use crate::domain::geometry::{GeometryContext, Offset, Point, Rect};
use crate::domain::ui::Opacity;
use crate::i18n::fluent::I18n;
use crate::media::{watermark, ImageData};
use crate::ui::styles::button::{ButtonStatus, ButtonStyle, CloseButtonStyle};
use crate::ui::viewer::animation_driver::AnimationDriver;
use crate::ui::viewer::binding::Binding;
use crate::ui::viewer::controls::{self, ControlButton};
use crate::ui::viewer::observable::Observable;
use crate::ui::viewer::presentation::{Phase, PresentationController};
use crate::ui::viewer::subcomponents::{dismiss, zoom};
use std::time::{Duration, Instant};

/// Messages accepted by the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Dismiss-drag input from the host's pan recognizer.
    Drag(dismiss::Message),
    /// Pinch and double-tap input.
    Zoom(zoom::Message),
    /// Share or close button pressed.
    Controls(controls::Message),
    /// Frame advance.
    Tick(Duration),
    /// Viewport or safe area changed.
    GeometryChanged(GeometryContext),
    /// The displayed image binding was written from outside.
    Sync,
}

/// Side effects the host should perform after handling a viewer message.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Hand the watermarked image to a share surface.
    Share(ImageData),
}

/// Copy of every published property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSnapshot {
    pub phase: Phase,
    pub offset: Offset,
    pub background_opacity: Opacity,
    pub image_opacity: Opacity,
    pub is_interactive: bool,
    pub zoom_scale: f32,
}

/// Full-screen zoomable image viewer.
pub struct ZoomImageViewer<S = CloseButtonStyle> {
    settings: ViewerSettings,
    watermark_settings: WatermarkSettings,
    watermark: Option<ImageData>,
    style: S,
    geometry: GeometryContext,
    presentation: PresentationController<ImageData>,
    driver: AnimationDriver,
    dismiss: dismiss::State,
    zoom: zoom::State,
    seen_appearances: u64,
    frame_clock: FrameClock,
    offset: Observable<Offset>,
    background_opacity: Observable<Opacity>,
    image_opacity: Observable<Opacity>,
    is_interactive: Observable<bool>,
}

impl<S> std::fmt::Debug for ZoomImageViewer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoomImageViewer")
            .field("presentation", &self.presentation)
            .field("dismiss", &self.dismiss)
            .field("zoom", &self.zoom)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

impl ZoomImageViewer<CloseButtonStyle> {
    /// Creates a viewer observing `image` with the default button style.
    #[must_use]
    pub fn new(image: Binding<ImageData>, config: &Config) -> Self {
        Self::with_style(image, config, CloseButtonStyle)
    }
}

impl<S: ButtonStyle> ZoomImageViewer<S> {
    /// Creates a viewer observing `image`, styling its buttons with `style`.
    ///
    /// An image already present in the binding appears immediately.
    #[must_use]
    pub fn with_style(image: Binding<ImageData>, config: &Config, style: S) -> Self {
        let settings = config.viewer.settings();
        let mut viewer = Self {
            settings,
            watermark_settings: config.watermark.settings(),
            watermark: None,
            style,
            geometry: GeometryContext::default(),
            presentation: PresentationController::new(image, None),
            driver: AnimationDriver::new(&settings),
            dismiss: dismiss::State::default(),
            zoom: zoom::State::new(settings.maximum_zoom_scale),
            seen_appearances: 0,
            frame_clock: FrameClock::new(),
            offset: Observable::new(Offset::ZERO),
            background_opacity: Observable::new(Opacity::TRANSPARENT),
            image_opacity: Observable::new(Opacity::TRANSPARENT),
            is_interactive: Observable::new(true),
        };
        viewer.settle();
        viewer
    }

    /// Sets the callback run once per completed dismiss.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl FnMut() + 'static) -> Self {
        self.presentation.set_on_dismiss(Some(Box::new(callback)));
        self
    }

    /// Sets the mark composited onto shared images.
    #[must_use]
    pub fn with_watermark(mut self, mark: Option<ImageData>) -> Self {
        self.watermark = mark;
        self
    }

    /// Handle a viewer message.
    pub fn handle(&mut self, message: Message) -> Effect {
        self.settle();
        let effect = match message {
            Message::Drag(drag) => {
                self.handle_drag(drag);
                Effect::None
            }
            Message::Zoom(zoom) => {
                self.handle_zoom(zoom);
                Effect::None
            }
            Message::Controls(controls::Message::Close) => {
                self.presentation.close(&mut self.driver);
                Effect::None
            }
            Message::Controls(controls::Message::Share) => self.share(),
            Message::Tick(dt) => {
                self.presentation.tick(dt, &mut self.driver);
                Effect::None
            }
            Message::GeometryChanged(geometry) => {
                self.geometry = geometry;
                Effect::None
            }
            Message::Sync => Effect::None,
        };
        self.settle();
        effect
    }

    /// Ticks by the time elapsed since the previous frame.
    ///
    /// The clock restarts once everything has settled, so the first frame
    /// of the next animation advances by zero.
    pub fn frame(&mut self, now: Instant) -> Effect {
        let dt = self.frame_clock.advance(now);
        let effect = self.handle(Message::Tick(dt));
        if !self.needs_frames() {
            self.frame_clock.reset();
        }
        effect
    }

    fn handle_drag(&mut self, message: dismiss::Message) {
        let starting = matches!(message, dismiss::Message::DragChanged { .. })
            && !self.dismiss.is_dragging();
        if starting && !self.accepts_dismiss_drag() {
            tracing::trace!(phase = ?self.presentation.phase(), "dismiss drag ignored");
            return;
        }

        match self.dismiss.handle(message, &self.settings) {
            dismiss::Effect::None => {}
            dismiss::Effect::Track {
                offset,
                background_opacity,
            } => self.driver.track_drag(offset, background_opacity),
            dismiss::Effect::Commit { exit } => {
                self.presentation
                    .commit(exit, &self.settings, &mut self.driver);
            }
            dismiss::Effect::Cancel => self.presentation.cancel(&mut self.driver),
        }
    }

    fn handle_zoom(&mut self, message: zoom::Message) {
        if self.presentation.phase() != Phase::Shown || self.dismiss.is_dragging() {
            tracing::trace!("zoom input ignored");
            return;
        }
        let effect = self.zoom.handle(message);
        if effect == zoom::Effect::ZoomChanged {
            tracing::trace!(scale = self.zoom.scale(), "zoom changed");
        }
    }

    /// The pan-to-dismiss gesture is attached only at rest at minimum zoom.
    fn accepts_dismiss_drag(&self) -> bool {
        self.presentation.phase() == Phase::Shown
            && self.zoom.allows_dismiss_drag()
            && !self.driver.is_flying_off()
    }

    fn share(&self) -> Effect {
        if self.presentation.phase() == Phase::Hidden {
            return Effect::None;
        }
        let Some(image) = self.presentation.binding().get() else {
            return Effect::None;
        };
        let watermarked =
            watermark::composite(&image, self.watermark.as_ref(), &self.watermark_settings);
        tracing::info!(
            width = watermarked.width,
            height = watermarked.height,
            "sharing image"
        );
        Effect::Share(watermarked)
    }

    /// Applies pending binding changes, resets per-presentation state, and
    /// publishes the animated properties.
    fn settle(&mut self) {
        self.presentation.sync(&mut self.driver);

        let appearances = self.presentation.appearances();
        if appearances != self.seen_appearances {
            self.seen_appearances = appearances;
            self.dismiss.abort();
            self.zoom.handle(zoom::Message::Reset);
        }
        if self.presentation.phase() == Phase::Hidden {
            if self.dismiss.is_dragging() {
                self.dismiss.abort();
            }
            if self.zoom.is_pinching() {
                self.zoom.handle(zoom::Message::Reset);
            }
        }

        self.publish();
    }

    fn publish(&self) {
        self.offset.set(self.driver.offset());
        self.background_opacity.set(self.driver.background_opacity());
        self.image_opacity.set(self.driver.image_opacity());
        self.is_interactive
            .set(!self.dismiss.is_dragging() && !self.zoom.is_pinching());
    }

    /// The displayed image binding.
    #[must_use]
    pub fn image(&self) -> &Binding<ImageData> {
        self.presentation.binding()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.presentation.phase()
    }

    #[must_use]
    pub fn offset(&self) -> &Observable<Offset> {
        &self.offset
    }

    #[must_use]
    pub fn background_opacity(&self) -> &Observable<Opacity> {
        &self.background_opacity
    }

    #[must_use]
    pub fn image_opacity(&self) -> &Observable<Opacity> {
        &self.image_opacity
    }

    #[must_use]
    pub fn is_interactive(&self) -> &Observable<bool> {
        &self.is_interactive
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewerSnapshot {
        ViewerSnapshot {
            phase: self.presentation.phase(),
            offset: self.offset.get(),
            background_opacity: self.background_opacity.get(),
            image_opacity: self.image_opacity.get(),
            is_interactive: self.is_interactive.get(),
            zoom_scale: self.zoom.scale(),
        }
    }

    /// Whether animations or a pending teardown still need ticks.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.driver.is_animating() || self.presentation.teardown_pending()
    }

    #[must_use]
    pub fn geometry(&self) -> GeometryContext {
        self.geometry
    }

    /// Black backdrop area, bled past the viewport on every side.
    #[must_use]
    pub fn backdrop_frame(&self) -> Rect {
        self.geometry.backdrop_frame()
    }

    /// Where the image is drawn at rest, aspect-fit into the full-bleed area.
    #[must_use]
    pub fn content_frame(&self) -> Option<Rect> {
        if self.presentation.phase() == Phase::Hidden {
            return None;
        }
        let image = self.presentation.binding().get()?;
        Some(self.geometry.content_frame(image.size()))
    }

    /// Whether `point` lands on the image at its current offset.
    #[must_use]
    pub fn hits(&self, point: Point) -> bool {
        self.content_frame().is_some_and(|frame| {
            let offset = self.offset.get();
            Rect::new(
                frame.x + offset.dx,
                frame.y + offset.dy,
                frame.width,
                frame.height,
            )
            .contains(point)
        })
    }

    /// Share and close buttons for the overlay.
    #[must_use]
    pub fn controls(
        &self,
        i18n: &I18n,
        share_status: ButtonStatus,
        close_status: ButtonStatus,
    ) -> [ControlButton; 2] {
        controls::view(controls::ViewContext {
            i18n,
            style: &self.style,
            background_opacity: self.background_opacity.get(),
            share_status,
            close_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::{Insets, Size};
    use approx::assert_abs_diff_eq;
    use image_rs::{Rgba, RgbaImage};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn image(width: u32, height: u32) -> ImageData {
        ImageData::from(RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])))
    }

    struct Harness {
        binding: Binding<ImageData>,
        viewer: ZoomImageViewer,
        dismissals: Rc<Cell<u32>>,
    }

    fn harness(initial: Option<ImageData>) -> Harness {
        let binding = Binding::new(initial);
        let dismissals = Rc::new(Cell::new(0));
        let counter = Rc::clone(&dismissals);
        let viewer = ZoomImageViewer::new(binding.clone(), &Config::default())
            .on_dismiss(move || counter.set(counter.get() + 1));
        Harness {
            binding,
            viewer,
            dismissals,
        }
    }

    fn shown() -> Harness {
        let mut h = harness(Some(image(100, 50)));
        h.tick_for(400);
        h
    }

    impl Harness {
        fn tick_for(&mut self, millis: u64) {
            for _ in 0..millis / 10 {
                self.viewer.handle(Message::Tick(Duration::from_millis(10)));
            }
        }

        fn drag(&mut self, dx: f32, dy: f32, predicted: Offset) {
            self.viewer.handle(Message::Drag(dismiss::Message::DragChanged {
                translation: Offset::new(dx, dy),
                predicted_end: predicted,
            }));
        }

        fn release(&mut self, predicted: Offset) {
            self.viewer.handle(Message::Drag(dismiss::Message::DragEnded {
                predicted_end: predicted,
            }));
        }
    }

    #[test]
    fn initial_image_appears_on_construction() {
        let h = harness(Some(image(10, 10)));
        let snapshot = h.viewer.snapshot();
        assert_eq!(snapshot.phase, Phase::Shown);
        assert_eq!(snapshot.background_opacity, Opacity::OPAQUE);
        assert!(snapshot.is_interactive);
    }

    #[test]
    fn small_flick_snaps_back_and_keeps_image() {
        for predicted in [
            Offset::ZERO,
            Offset::new(0.0, 120.0),
            Offset::new(-200.0, 0.0),
            Offset::new(120.0, -160.0),
        ] {
            let mut h = shown();
            h.drag(0.0, 80.0, predicted);
            h.release(predicted);
            h.tick_for(400);

            let snapshot = h.viewer.snapshot();
            assert_eq!(snapshot.offset, Offset::ZERO, "{predicted:?}");
            assert_eq!(snapshot.background_opacity, Opacity::OPAQUE);
            assert_eq!(snapshot.phase, Phase::Shown);
            assert!(h.binding.is_some());
            assert_eq!(h.dismissals.get(), 0);
        }
    }

    #[test]
    fn large_flick_dismisses_within_teardown_window() {
        let mut h = shown();
        h.drag(0.0, 120.0, Offset::new(0.0, 400.0));
        h.release(Offset::new(0.0, 400.0));
        assert_eq!(h.viewer.phase(), Phase::Dismissing);

        h.tick_for(500);
        assert!(!h.binding.is_some());
        assert_eq!(h.viewer.phase(), Phase::Hidden);
        assert_eq!(h.dismissals.get(), 1);

        h.tick_for(500);
        assert_eq!(h.dismissals.get(), 1);
        let snapshot = h.viewer.snapshot();
        assert_eq!(snapshot.background_opacity, Opacity::TRANSPARENT);
        assert_eq!(snapshot.image_opacity, Opacity::TRANSPARENT);
        assert!(snapshot.is_interactive);
        assert_eq!(snapshot.offset, Offset::ZERO);
        assert!(!h.viewer.needs_frames());
    }

    #[test]
    fn fly_off_heads_along_prediction() {
        let mut h = shown();
        h.drag(30.0, 40.0, Offset::new(150.0, 200.0));
        h.release(Offset::new(150.0, 200.0));
        h.tick_for(390);
        let offset = h.viewer.offset().get();
        assert!(offset.magnitude() > 900.0);
        assert_abs_diff_eq!(offset.dx / offset.dy, 0.75, epsilon = 1e-3);
    }

    #[test]
    fn drag_dims_backdrop_and_blocks_interaction() {
        let mut h = shown();
        h.drag(0.0, 100.0, Offset::new(0.0, 100.0));
        let snapshot = h.viewer.snapshot();
        assert_eq!(snapshot.offset, Offset::new(0.0, 100.0));
        assert_abs_diff_eq!(snapshot.background_opacity.value(), 0.9, epsilon = 1e-6);
        assert!(!snapshot.is_interactive);

        h.release(Offset::new(0.0, 100.0));
        assert!(h.viewer.is_interactive().get());
    }

    #[test]
    fn interactive_is_true_after_commit() {
        let mut h = shown();
        h.drag(0.0, 150.0, Offset::new(0.0, 600.0));
        h.release(Offset::new(0.0, 600.0));
        assert!(h.viewer.is_interactive().get());
    }

    #[test]
    fn quick_reopen_ends_shown_with_new_image() {
        let mut h = shown();
        let replacement = image(30, 30);
        h.binding.clear();
        h.binding.set(Some(replacement.clone()));
        h.tick_for(400);

        let snapshot = h.viewer.snapshot();
        assert_eq!(snapshot.phase, Phase::Shown);
        assert_eq!(snapshot.image_opacity, Opacity::OPAQUE);
        let displayed = h.binding.get().expect("image shown");
        assert!(displayed.shares_pixels_with(&replacement));
        assert_eq!(h.dismissals.get(), 1);
    }

    #[test]
    fn reopen_during_fly_off_cancels_teardown() {
        let mut h = shown();
        h.drag(0.0, 150.0, Offset::new(0.0, 600.0));
        h.release(Offset::new(0.0, 600.0));
        h.tick_for(200);

        h.binding.set(Some(image(20, 20)));
        h.viewer.handle(Message::Sync);
        h.tick_for(1000);

        let snapshot = h.viewer.snapshot();
        assert_eq!(snapshot.phase, Phase::Shown);
        assert_eq!(snapshot.offset, Offset::ZERO);
        assert!(h.binding.is_some());
        assert_eq!(h.dismissals.get(), 0);
    }

    #[test]
    fn zoomed_in_ignores_dismiss_drag() {
        let mut h = shown();
        h.viewer.handle(Message::Zoom(zoom::Message::DoubleTap));
        assert_abs_diff_eq!(h.viewer.snapshot().zoom_scale, 2.0);

        h.drag(0.0, 150.0, Offset::new(0.0, 900.0));
        h.release(Offset::new(0.0, 900.0));
        assert_eq!(h.viewer.phase(), Phase::Shown);
        assert_eq!(h.viewer.offset().get(), Offset::ZERO);
    }

    #[test]
    fn pinch_blocks_interaction_and_drag() {
        let mut h = shown();
        h.viewer.handle(Message::Zoom(zoom::Message::PinchStarted));
        assert!(!h.viewer.is_interactive().get());

        h.drag(0.0, 50.0, Offset::new(0.0, 50.0));
        assert_eq!(h.viewer.offset().get(), Offset::ZERO);

        h.viewer.handle(Message::Zoom(zoom::Message::PinchEnded));
        assert!(h.viewer.is_interactive().get());
    }

    #[test]
    fn zoom_ignored_while_dragging() {
        let mut h = shown();
        h.drag(0.0, 50.0, Offset::new(0.0, 50.0));
        h.viewer.handle(Message::Zoom(zoom::Message::DoubleTap));
        assert_abs_diff_eq!(h.viewer.snapshot().zoom_scale, 1.0);
    }

    #[test]
    fn zoom_resets_on_reappear() {
        let mut h = shown();
        h.viewer.handle(Message::Zoom(zoom::Message::DoubleTap));
        h.binding.set(None);
        h.binding.set(Some(image(5, 5)));
        h.viewer.handle(Message::Sync);
        assert_abs_diff_eq!(h.viewer.snapshot().zoom_scale, 1.0);
    }

    #[test]
    fn external_clear_mid_drag_aborts_drag() {
        let mut h = shown();
        h.drag(0.0, 50.0, Offset::new(0.0, 50.0));
        h.binding.clear();
        h.viewer.handle(Message::Sync);
        assert_eq!(h.viewer.phase(), Phase::Hidden);
        assert!(h.viewer.is_interactive().get());

        h.release(Offset::new(0.0, 900.0));
        assert_eq!(h.dismissals.get(), 1);
    }

    #[test]
    fn external_clear_mid_pinch_restores_interaction() {
        let mut h = shown();
        h.viewer.handle(Message::Zoom(zoom::Message::PinchStarted));
        assert!(!h.viewer.is_interactive().get());

        h.binding.clear();
        h.viewer.handle(Message::Sync);
        h.viewer.handle(Message::Zoom(zoom::Message::PinchEnded));
        h.tick_for(1000);
        assert_eq!(h.viewer.phase(), Phase::Hidden);
        assert!(h.viewer.is_interactive().get());
    }

    #[test]
    fn close_button_clears_image() {
        let mut h = shown();
        h.viewer
            .handle(Message::Controls(controls::Message::Close));
        assert!(!h.binding.is_some());
        assert_eq!(h.viewer.phase(), Phase::Hidden);
        assert_eq!(h.dismissals.get(), 1);
    }

    #[test]
    fn share_watermarks_displayed_image() {
        let binding = Binding::new(Some(image(1000, 500)));
        let mark = ImageData::from(RgbaImage::from_pixel(200, 100, Rgba([255, 0, 0, 255])));
        let mut viewer =
            ZoomImageViewer::new(binding, &Config::default()).with_watermark(Some(mark));

        let Effect::Share(shared) = viewer.handle(Message::Controls(controls::Message::Share))
        else {
            panic!("expected share effect");
        };
        assert_eq!((shared.width, shared.height), (1000, 500));
        let index = ((450 * 1000 + 900) * 4) as usize;
        assert!(shared.rgba_bytes()[index + 1] < 200);
    }

    #[test]
    fn share_without_image_does_nothing() {
        let mut h = harness(None);
        let effect = h
            .viewer
            .handle(Message::Controls(controls::Message::Share));
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn observers_see_each_change_once() {
        let mut h = shown();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        h.viewer
            .is_interactive()
            .subscribe(move |value| sink.borrow_mut().push(*value));

        h.drag(0.0, 10.0, Offset::new(0.0, 10.0));
        h.drag(0.0, 20.0, Offset::new(0.0, 20.0));
        h.release(Offset::new(0.0, 20.0));
        assert_eq!(*seen.borrow(), [false, true]);
    }

    #[test]
    fn hit_testing_follows_offset() {
        let mut h = shown();
        h.viewer.handle(Message::GeometryChanged(GeometryContext::new(
            Size::new(200.0, 400.0),
            Insets::default(),
        )));
        let frame = h.viewer.content_frame().expect("frame");
        assert_abs_diff_eq!(frame.width, 200.0, epsilon = 1e-3);
        assert_abs_diff_eq!(frame.height, 100.0, epsilon = 1e-3);
        assert!(h.viewer.hits(Point::new(100.0, 200.0)));

        h.drag(0.0, 150.0, Offset::new(0.0, 150.0));
        assert!(!h.viewer.hits(Point::new(100.0, 160.0)));
        assert!(h.viewer.hits(Point::new(100.0, 350.0)));
    }

    #[test]
    fn frames_advance_by_wall_clock() {
        let mut h = harness(Some(image(10, 10)));
        let start = Instant::now();
        h.viewer.frame(start);
        h.viewer.frame(start + Duration::from_millis(50));
        h.viewer.frame(start + Duration::from_millis(100));
        let midway = h.viewer.image_opacity().get().value();
        assert!(midway > 0.0 && midway < 1.0);

        for step in 2..=8 {
            h.viewer.frame(start + Duration::from_millis(step * 50));
        }
        assert_eq!(h.viewer.image_opacity().get(), Opacity::OPAQUE);
        assert!(!h.viewer.needs_frames());
    }

    #[test]
    fn oversized_tick_finishes_dismiss() {
        let mut h = harness(Some(image(10, 10)));
        h.viewer.handle(Message::Tick(Duration::from_millis(1)));
        h.viewer.handle(Message::Tick(Duration::MAX));
        assert_eq!(h.viewer.image_opacity().get(), Opacity::OPAQUE);

        h.drag(0.0, 120.0, Offset::new(0.0, 600.0));
        h.release(Offset::new(0.0, 600.0));
        h.viewer.handle(Message::Tick(Duration::from_millis(1)));
        h.viewer.handle(Message::Tick(Duration::MAX));
        assert_eq!(h.viewer.phase(), Phase::Hidden);
        assert_eq!(h.dismissals.get(), 1);
    }

    #[test]
    fn needs_frames_until_settled() {
        let mut h = harness(Some(image(10, 10)));
        assert!(h.viewer.needs_frames());
        h.tick_for(400);
        assert!(!h.viewer.needs_frames());
    }
}
