use egui::color_picker::{color_picker_color32, Alpha};
use egui::Color32;
use image::Rgba;

use crate::app::PaintApp;

/// Color dock: picks the stroke color handed to the current tool.
pub fn color_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::right("color_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Color");
            ui.separator();

            let rgba = app.workspace.stroke_color();
            let mut color = Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]);
            if color_picker_color32(ui, &mut color, Alpha::Opaque) {
                let [r, g, b, a] = color.to_srgba_unmultiplied();
                app.workspace.set_stroke_color(Rgba([r, g, b, a]));
            }
        });
}
