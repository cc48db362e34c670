use crate::app::PaintApp;
use crate::components::ToolButton;
use crate::tools::ToolKind;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(60.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            let current = app.workspace.current_tool_kind();
            let mut clicked = None;

            for kind in ToolKind::ALL {
                let response = ToolButton::new(kind, kind == current).show(ui);
                if response.clicked() {
                    clicked = Some(kind);
                }
                ui.add_space(4.0);
            }

            if let Some(kind) = clicked {
                app.workspace.select_tool(kind);
            }
        });
}
