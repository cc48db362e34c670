use egui::{Color32, Pos2, Rect, Sense};

use crate::app::PaintApp;
use crate::canvas::CanvasId;

/// One window per canvas. The paint path presents the canvas's active buffer
/// through the texture cache; clicking a surface makes that canvas current;
/// the window close button routes through the unsaved-changes flow.
pub fn canvas_windows(app: &mut PaintApp, ctx: &egui::Context) {
    let infos: Vec<(CanvasId, String, f32, f32, u64)> = app
        .workspace
        .canvases()
        .iter()
        .map(|c| {
            (
                c.id(),
                c.title().to_owned(),
                c.width() as f32,
                c.height() as f32,
                c.version(),
            )
        })
        .collect();

    let current = app.workspace.current_canvas_id();
    let mut focus_requests = Vec::new();
    let mut close_requests = Vec::new();

    for (id, title, width, height, version) in infos {
        let mut open = true;
        egui::Window::new(title)
            .id(egui::Id::new(id))
            .open(&mut open)
            .default_size([width, height])
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(egui::vec2(width, height), Sense::click_and_drag());

                if response.clicked() || response.drag_started() {
                    focus_requests.push(id);
                }

                let (workspace, textures, input) = app.render_parts();

                if let Some(canvas) = workspace.canvas_mut(id) {
                    let texture_id = textures.get_or_create_texture(
                        id,
                        version,
                        || {
                            let frame = canvas.present();
                            egui::ColorImage::from_rgba_unmultiplied(
                                [frame.width() as usize, frame.height() as usize],
                                frame.as_raw(),
                            )
                        },
                        ctx,
                    );
                    painter.image(
                        texture_id,
                        response.rect,
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }

                if current == Some(id) {
                    input.set_canvas_surface(response.rect, ui.layer_id());
                }
            });

        if !open {
            close_requests.push(id);
        }
    }

    for id in focus_requests {
        app.workspace.set_current_canvas(id);
    }
    for id in close_requests {
        app.request_close(id);
    }
}
