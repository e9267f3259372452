mod common;
use babylog::core::DiaperTracker;
use babylog::errors::AppError;
use babylog::imaging::{self, ImageFormat, scaled_size};
use babylog::models::DiaperKind;
use common::{png_fixture, ts};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_wide_image_is_downscaled() {
    let img = imaging::compress(&png_fixture(1600, 1200), 800, 0.7).unwrap();
    assert_eq!((img.width, img.height), (800, 600));
    assert_eq!(img.format, ImageFormat::Jpeg);

    let decoded = image::load_from_memory(&img.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (800, 600));
}

#[test]
fn test_small_image_is_never_upscaled() {
    let img = imaging::compress(&png_fixture(320, 240), 800, 0.7).unwrap();
    assert_eq!((img.width, img.height), (320, 240));
}

#[test]
fn test_scaled_size() {
    assert_eq!(scaled_size(1600, 1200, 800), (800, 600));
    assert_eq!(scaled_size(800, 1200, 800), (800, 1200));
    assert_eq!(scaled_size(1000, 333, 800), (800, 266));
    // very wide strips keep at least one pixel of height
    assert_eq!(scaled_size(10_000, 1, 800), (800, 1));
}

#[test]
fn test_output_is_jpeg() {
    let img = imaging::compress(&png_fixture(64, 64), 800, 0.7).unwrap();
    assert_eq!(&img.bytes[..2], &[0xFF, 0xD8]);
    assert_eq!(
        image::guess_format(&img.bytes).unwrap(),
        image::ImageFormat::Jpeg
    );
}

#[test]
fn test_lower_quality_gives_smaller_file() {
    let raw = png_fixture(400, 300);
    let high = imaging::compress(&raw, 800, 0.95).unwrap();
    let low = imaging::compress(&raw, 800, 0.2).unwrap();
    assert!(low.bytes.len() < high.bytes.len());
}

#[test]
fn test_undecodable_bytes_are_an_error() {
    let err = imaging::compress(b"definitely not an image", 800, 0.7).unwrap_err();
    assert!(matches!(err, AppError::Image(_)));
    assert!(!err.is_user_error());
}

#[test]
fn test_data_uri() {
    let img = imaging::compress(&png_fixture(16, 16), 800, 0.7).unwrap();
    let uri = img.data_uri();
    assert!(uri.starts_with("data:image/jpeg;base64,/9j/"));
}

#[test]
fn test_diaper_attachment_travels_with_the_entry() {
    let dir = tempdir().unwrap();
    let photo = dir.path().join("photo.png");
    fs::write(&photo, png_fixture(1600, 1200)).unwrap();

    let mut tracker = DiaperTracker::default();
    tracker.select(DiaperKind::Poop, ts(14, 20));
    let attached = tracker.attach_file(&photo).unwrap();
    assert_eq!(attached.width, 800);

    let entry = tracker.commit().unwrap();
    assert_eq!(entry.timestamp, ts(14, 20));
    assert!(entry.has_image());
    assert_eq!(entry.image.as_ref().map(|i| i.height), Some(600));

    assert!(tracker.form().image().is_none());
    assert!(tracker.form().kind().is_none());
}

#[test]
fn test_bad_attachment_keeps_previous_image() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.png");
    let bad = dir.path().join("bad.png");
    fs::write(&good, png_fixture(100, 50)).unwrap();
    fs::write(&bad, b"garbage").unwrap();

    let mut tracker = DiaperTracker::default();
    tracker.attach_file(&good).unwrap();
    assert!(tracker.attach_file(&bad).is_err());
    assert_eq!(tracker.form().image().map(|i| i.width), Some(100));
}

#[test]
fn test_diaper_commit_requires_type() {
    let mut tracker = DiaperTracker::default();
    tracker.set_notes("forgot to pick");
    assert!(matches!(
        tracker.commit(),
        Err(AppError::MissingRequiredField("diaper type"))
    ));
    assert!(tracker.log().is_empty());
    assert_eq!(tracker.form().notes(), "forgot to pick");
}

#[test]
fn test_unknown_diaper_type() {
    assert_eq!(DiaperKind::parse(" Pee ").unwrap(), DiaperKind::Pee);
    assert!(matches!(
        DiaperKind::parse("wet"),
        Err(AppError::InvalidDiaperType(_))
    ));
}
