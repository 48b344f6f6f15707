// SPDX-License-Identifier: MPL-2.0
use image_rs::{Rgba, RgbaImage};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;
use zoom_lens::config::{self, Config};
use zoom_lens::domain::geometry::Offset;
use zoom_lens::domain::ui::Opacity;
use zoom_lens::i18n::fluent::I18n;
use zoom_lens::media::{load_image, save_png, ImageData, PngExportSurface, ShareSurface};
use zoom_lens::ui::styles::ButtonStatus;
use zoom_lens::ui::viewer::subcomponents::dismiss;
use zoom_lens::ui::viewer::{Binding, Effect, Message, Phase, ZoomImageViewer};

fn tick(viewer: &mut ZoomImageViewer, millis: u64) {
    for _ in 0..millis / 16 {
        viewer.handle(Message::Tick(Duration::from_millis(16)));
    }
    viewer.handle(Message::Tick(Duration::from_millis(millis % 16)));
}

fn flick(viewer: &mut ZoomImageViewer, predicted_end: Offset) {
    viewer.handle(Message::Drag(dismiss::Message::DragChanged {
        translation: predicted_end * 0.25,
        predicted_end,
    }));
    viewer.handle(Message::Drag(dismiss::Message::DragEnded { predicted_end }));
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");

    config.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn test_configured_threshold_changes_dismiss_decision() {
    let mut config = Config::default();
    config.viewer.dismiss_threshold = 500.0;

    let image = Binding::new(Some(ImageData::from(RgbaImage::new(8, 8))));
    let mut viewer = ZoomImageViewer::new(image.clone(), &config);
    tick(&mut viewer, 400);

    flick(&mut viewer, Offset::new(0.0, 400.0));
    tick(&mut viewer, 600);
    assert_eq!(viewer.phase(), Phase::Shown);
    assert!(image.is_some());

    flick(&mut viewer, Offset::new(0.0, 600.0));
    tick(&mut viewer, 600);
    assert_eq!(viewer.phase(), Phase::Hidden);
    assert!(!image.is_some());
}

#[test]
fn test_full_dismiss_cycle_and_reopen() {
    let dismissals = Rc::new(Cell::new(0));
    let counter = Rc::clone(&dismissals);
    let image = Binding::new(None);
    let mut viewer = ZoomImageViewer::new(image.clone(), &Config::default())
        .on_dismiss(move || counter.set(counter.get() + 1));
    assert_eq!(viewer.phase(), Phase::Hidden);

    for round in 1..=3 {
        image.set(Some(ImageData::from(RgbaImage::new(4, 4))));
        viewer.handle(Message::Sync);
        tick(&mut viewer, 400);
        assert_eq!(viewer.snapshot().image_opacity, Opacity::OPAQUE);

        flick(&mut viewer, Offset::new(250.0, 250.0));
        tick(&mut viewer, 500);
        assert_eq!(viewer.phase(), Phase::Hidden);
        assert_eq!(dismissals.get(), round);
    }
}

#[test]
fn test_share_exports_watermarked_png() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mark_path = dir.path().join("mark.png");
    save_png(
        &ImageData::from(RgbaImage::from_pixel(64, 32, Rgba([0, 0, 0, 255]))),
        &mark_path,
    )
    .expect("Failed to write mark");
    let mark = load_image(&mark_path).expect("Failed to load mark");

    let base = ImageData::from(RgbaImage::from_pixel(400, 200, Rgba([255, 255, 255, 255])));
    let image = Binding::new(Some(base));
    let mut viewer =
        ZoomImageViewer::new(image, &Config::default()).with_watermark(Some(mark));

    let Effect::Share(shared) = viewer.handle(Message::Controls(
        zoom_lens::ui::viewer::controls::Message::Share,
    )) else {
        panic!("expected share effect");
    };

    let mut surface = PngExportSurface::new(dir.path().join("shared"));
    surface.present(shared).expect("Failed to share");

    let exported = load_image(&surface.exported()[0]).expect("Failed to reload share");
    assert_eq!((exported.width, exported.height), (400, 200));
    // Mark frame is (340, 170) 40x20; centre pixel is half black over white.
    let index = ((180 * 400 + 360) * 4) as usize;
    let red = exported.rgba_bytes()[index];
    assert!((120..=135).contains(&red), "unexpected blend {red}");
}

#[test]
fn test_controls_fade_with_drag() {
    let image = Binding::new(Some(ImageData::from(RgbaImage::new(4, 4))));
    let mut viewer = ZoomImageViewer::new(image, &Config::default());
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());

    viewer.handle(Message::Drag(dismiss::Message::DragChanged {
        translation: Offset::new(0.0, 200.0),
        predicted_end: Offset::new(0.0, 200.0),
    }));
    let [share, close] = viewer.controls(&i18n, ButtonStatus::Active, ButtonStatus::Active);
    assert!((share.opacity.value() - 0.8).abs() < 1e-5);
    assert_eq!(close.label, "Close");
}
