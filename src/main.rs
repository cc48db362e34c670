#![warn(clippy::all, rust_2018_idioms)]

use easel::PaintApp;

/// Launch the native egui application.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "easel",
        options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc)))),
    )
}
