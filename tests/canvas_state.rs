use std::path::PathBuf;

use easel::canvas::{Canvas, SaveOutcome};
use easel::error::CanvasError;
use image::Rgba;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn test_canvas() -> Canvas {
    Canvas::new(16, 16, WHITE, "test")
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("easel-canvas-{}-{}.png", name, std::process::id()))
}

#[test]
fn new_canvas_is_saved_and_filled() {
    let canvas = test_canvas();
    assert!(canvas.is_saved());
    assert_eq!(canvas.title(), "test");
    assert!(canvas.file_path().is_none());
    assert_eq!(*canvas.image().get_pixel(0, 0), WHITE);
    assert_eq!(*canvas.image().get_pixel(15, 15), WHITE);
}

#[test]
fn dirty_then_saved_is_idempotent() {
    let mut canvas = test_canvas();

    canvas.mark_dirty();
    canvas.mark_dirty();
    assert!(!canvas.is_saved());
    assert_eq!(canvas.title(), "test *");

    canvas.mark_saved();
    canvas.mark_saved();
    assert!(canvas.is_saved());
    assert_eq!(canvas.title(), "test");
}

#[test]
fn mark_saved_on_clean_canvas_is_a_noop() {
    let mut canvas = test_canvas();
    canvas.mark_saved();
    assert!(canvas.is_saved());
    assert_eq!(canvas.title(), "test");
}

#[test]
fn noop_stroke_leaves_primary_buffer_untouched() {
    let mut canvas = test_canvas();
    let before = canvas.image().as_raw().clone();

    canvas.begin_stroke();
    canvas.end_stroke();

    assert_eq!(canvas.image().as_raw(), &before);
}

#[test]
fn drawing_during_stroke_targets_the_preview_buffer() {
    let mut canvas = test_canvas();

    canvas.begin_stroke();
    assert!(canvas.is_stroke_active());
    canvas.active_image_mut().put_pixel(3, 3, RED);

    // uncommitted pixels never reach the primary buffer
    assert_eq!(*canvas.image().get_pixel(3, 3), WHITE);

    canvas.end_stroke();
    assert!(!canvas.is_stroke_active());
    assert_eq!(*canvas.image().get_pixel(3, 3), WHITE);

    // once the stroke has ended, drawing targets the primary buffer
    canvas.active_image_mut().put_pixel(3, 3, RED);
    assert_eq!(*canvas.image().get_pixel(3, 3), RED);
}

#[test]
fn drawing_borrow_marks_the_canvas_dirty() {
    let mut canvas = test_canvas();
    let _ = canvas.active_image_mut();
    assert!(!canvas.is_saved());
    assert_eq!(canvas.title(), "test *");
}

#[test]
fn present_resyncs_the_preview_after_each_frame() {
    let mut canvas = test_canvas();
    canvas.begin_stroke();
    canvas.active_image_mut().put_pixel(5, 5, RED);

    let frame = canvas.present();
    assert_eq!(*frame.get_pixel(5, 5), RED);

    // next frame starts from committed pixels again
    let frame = canvas.present();
    assert_eq!(*frame.get_pixel(5, 5), WHITE);
}

#[test]
fn present_shows_primary_buffer_when_idle() {
    let mut canvas = test_canvas();
    canvas.active_image_mut().put_pixel(1, 1, RED);
    let frame = canvas.present();
    assert_eq!(*frame.get_pixel(1, 1), RED);
}

#[test]
fn cancelled_save_prompt_is_a_noop() {
    let mut canvas = test_canvas();
    canvas.mark_dirty();

    let outcome = canvas.save_with(|_| None).unwrap();

    assert_eq!(outcome, SaveOutcome::Cancelled);
    assert!(!canvas.is_saved());
    assert!(canvas.file_path().is_none());
}

#[test]
fn save_with_chosen_path_encodes_png_and_binds_path() {
    let path = temp_path("chosen");
    let mut canvas = test_canvas();
    canvas.mark_dirty();

    let outcome = canvas.save_with(|_| Some(path.clone())).unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    assert!(canvas.is_saved());
    assert_eq!(canvas.file_path(), Some(path.as_path()));
    assert_eq!(canvas.title(), "test");

    // the extension picked the encoder: the file starts with the PNG magic
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    std::fs::remove_file(&path).ok();
}

#[test]
fn save_reuses_bound_path_without_prompting() {
    let path = temp_path("rebound");
    let mut canvas = test_canvas();
    canvas.save_with(|_| Some(path.clone())).unwrap();

    canvas.mark_dirty();
    let outcome = canvas
        .save_with(|_| panic!("picker must not be consulted when a path is bound"))
        .unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    assert!(canvas.is_saved());

    std::fs::remove_file(&path).ok();
}

#[test]
fn save_as_always_prompts_and_rebinds() {
    let first = temp_path("as-first");
    let second = temp_path("as-second");
    let mut canvas = test_canvas();
    canvas.save_with(|_| Some(first.clone())).unwrap();

    canvas.mark_dirty();
    let outcome = canvas.save_as_with(|_| Some(second.clone())).unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    assert_eq!(canvas.file_path(), Some(second.as_path()));

    std::fs::remove_file(&first).ok();
    std::fs::remove_file(&second).ok();
}

#[test]
fn cancelled_save_as_keeps_the_old_binding() {
    let path = temp_path("as-cancel");
    let mut canvas = test_canvas();
    canvas.save_with(|_| Some(path.clone())).unwrap();

    canvas.mark_dirty();
    let outcome = canvas.save_as_with(|_| None).unwrap();

    assert_eq!(outcome, SaveOutcome::Cancelled);
    assert!(!canvas.is_saved());
    assert_eq!(canvas.file_path(), Some(path.as_path()));

    std::fs::remove_file(&path).ok();
}

#[test]
fn open_missing_file_reports_decode_error() {
    let err = Canvas::open(std::path::Path::new("/nonexistent/easel.png")).unwrap_err();
    assert!(matches!(err, CanvasError::Decode { .. }));
}

#[test]
fn open_roundtrips_saved_pixels() {
    let path = temp_path("roundtrip");
    let mut canvas = test_canvas();
    canvas.active_image_mut().put_pixel(7, 9, RED);
    canvas.save_with(|_| Some(path.clone())).unwrap();

    let reopened = Canvas::open(&path).unwrap();
    assert_eq!(reopened.width(), 16);
    assert_eq!(reopened.height(), 16);
    assert!(reopened.is_saved());
    assert_eq!(reopened.file_path(), Some(path.as_path()));
    assert_eq!(*reopened.image().get_pixel(7, 9), RED);

    std::fs::remove_file(&path).ok();
}
