use std::path::{Path, PathBuf};

use image::Rgba;

use crate::canvas::{Canvas, CanvasId};
use crate::dialogs;
use crate::input::InputHandler;
use crate::panels;
use crate::preferences::Preferences;
use crate::texture_manager::TextureManager;
use crate::workspace::{CloseChoice, CloseOutcome, Workspace};

const PREFERENCES_FILE: &str = "easel-preferences.json";
const DEFAULT_CANVAS_SIZE: (u32, u32) = (400, 600);
const DEFAULT_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// State of the new-canvas modal.
struct NewCanvasDialog {
    width: u32,
    height: u32,
    background: egui::Color32,
}

impl Default for NewCanvasDialog {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE.0,
            height: DEFAULT_CANVAS_SIZE.1,
            background: egui::Color32::WHITE,
        }
    }
}

/// What the in-app path prompt is asking for.
enum PromptPurpose {
    Open,
    Save(CanvasId),
    SaveAs(CanvasId),
    /// Save as part of a close request; a confirmed path closes the canvas.
    SaveThenClose(CanvasId),
}

/// In-app replacement for the native file chooser, used when the
/// `UseNativeDialog` preference is off.
struct PathPrompt {
    purpose: PromptPurpose,
    text: String,
}

pub struct PaintApp {
    pub(crate) workspace: Workspace,
    pub(crate) preferences: Preferences,
    pub(crate) textures: TextureManager,
    pub(crate) input: InputHandler,

    /// Canvas waiting on the unsaved-changes prompt.
    pending_close: Option<CanvasId>,
    new_canvas: Option<NewCanvasDialog>,
    path_prompt: Option<PathPrompt>,
    show_preferences: bool,
    show_about: bool,
    error_message: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut workspace = Workspace::new();
        let name = workspace.next_untitled_name();
        let (width, height) = DEFAULT_CANVAS_SIZE;
        workspace.add_canvas(Canvas::new(width, height, DEFAULT_BACKGROUND, &name));

        Self {
            workspace,
            preferences: Preferences::load(Path::new(PREFERENCES_FILE)),
            textures: TextureManager::new(64),
            input: InputHandler::new(),
            pending_close: None,
            new_canvas: None,
            path_prompt: None,
            show_preferences: false,
            show_about: false,
            error_message: None,
        }
    }

    /// Split borrows for the canvas windows: registry, texture cache and
    /// input handler are independent fields.
    pub(crate) fn render_parts(
        &mut self,
    ) -> (&mut Workspace, &mut TextureManager, &mut InputHandler) {
        (&mut self.workspace, &mut self.textures, &mut self.input)
    }

    /// Close button on a canvas window. Clean canvases close outright; dirty
    /// ones go through the three-way prompt.
    pub(crate) fn request_close(&mut self, id: CanvasId) {
        if self.workspace.needs_close_prompt(id) {
            self.pending_close = Some(id);
        } else {
            self.workspace.remove_canvas(id);
            self.textures.invalidate_canvas(id);
        }
    }

    fn report_error(&mut self, message: String) {
        log::error!("{message}");
        self.error_message = Some(message);
    }

    fn open_path(&mut self, path: &Path) {
        match Canvas::open(path) {
            Ok(canvas) => {
                self.workspace.add_canvas(canvas);
            }
            Err(err) => self.report_error(err.to_string()),
        }
    }

    fn open_flow(&mut self) {
        if self.preferences.use_native_dialog() {
            if let Some(path) = dialogs::pick_open_path() {
                self.open_path(&path);
            }
        } else {
            self.path_prompt = Some(PathPrompt {
                purpose: PromptPurpose::Open,
                text: String::new(),
            });
        }
    }

    /// Save the current canvas, prompting for a path when none is bound (or
    /// always, for save-as).
    fn save_flow(&mut self, always_prompt: bool) {
        let Some(id) = self.workspace.current_canvas_id() else {
            return;
        };
        let native = self.preferences.use_native_dialog();
        let Some(canvas) = self.workspace.canvas_mut(id) else {
            return;
        };

        let will_prompt = always_prompt || canvas.file_path().is_none();
        if will_prompt && !native {
            let purpose = if always_prompt {
                PromptPurpose::SaveAs(id)
            } else {
                PromptPurpose::Save(id)
            };
            self.path_prompt = Some(PathPrompt {
                purpose,
                text: suggested_save_path(canvas),
            });
            return;
        }

        let result = if always_prompt {
            canvas.save_as_with(dialogs::pick_save_path)
        } else {
            canvas.save_with(dialogs::pick_save_path)
        };
        if let Err(err) = result {
            self.report_error(err.to_string());
        }
    }

    fn resolve_pending_close(&mut self, choice: CloseChoice) {
        let Some(id) = self.pending_close.take() else {
            return;
        };

        if choice == CloseChoice::Save && !self.preferences.use_native_dialog() {
            let unbound = self
                .workspace
                .canvas(id)
                .is_some_and(|c| c.file_path().is_none());
            if unbound {
                let text = self
                    .workspace
                    .canvas(id)
                    .map(suggested_save_path)
                    .unwrap_or_default();
                self.path_prompt = Some(PathPrompt {
                    purpose: PromptPurpose::SaveThenClose(id),
                    text,
                });
                return;
            }
        }

        let native = self.preferences.use_native_dialog();
        match self.workspace.resolve_close(id, choice, |canvas| {
            if native {
                dialogs::pick_save_path(canvas)
            } else {
                None
            }
        }) {
            Ok(CloseOutcome::Closed) => self.textures.invalidate_canvas(id),
            Ok(CloseOutcome::Kept) => {}
            Err(err) => self.report_error(err.to_string()),
        }
    }

    fn confirm_path_prompt(&mut self) {
        let Some(prompt) = self.path_prompt.take() else {
            return;
        };
        let path = PathBuf::from(prompt.text.trim());
        if path.as_os_str().is_empty() {
            return;
        }

        match prompt.purpose {
            PromptPurpose::Open => self.open_path(&path),
            PromptPurpose::Save(id) => {
                if let Some(canvas) = self.workspace.canvas_mut(id) {
                    if let Err(err) = canvas.save_with(|_| Some(path)) {
                        self.report_error(err.to_string());
                    }
                }
            }
            PromptPurpose::SaveAs(id) => {
                if let Some(canvas) = self.workspace.canvas_mut(id) {
                    if let Err(err) = canvas.save_as_with(|_| Some(path)) {
                        self.report_error(err.to_string());
                    }
                }
            }
            PromptPurpose::SaveThenClose(id) => {
                match self
                    .workspace
                    .resolve_close(id, CloseChoice::Save, |_| Some(path))
                {
                    Ok(CloseOutcome::Closed) => self.textures.invalidate_canvas(id),
                    Ok(CloseOutcome::Kept) => {}
                    Err(err) => self.report_error(err.to_string()),
                }
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New…").clicked() {
                        self.new_canvas = Some(NewCanvasDialog::default());
                        ui.close_menu();
                    }
                    if ui.button("Open…").clicked() {
                        self.open_flow();
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_current = self.workspace.current_canvas_id().is_some();
                    if ui.add_enabled(has_current, egui::Button::new("Save")).clicked() {
                        self.save_flow(false);
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(has_current, egui::Button::new("Save As…"))
                        .clicked()
                    {
                        self.save_flow(true);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Edit", |ui| {
                    if ui.button("Preferences…").clicked() {
                        self.show_preferences = true;
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn close_prompt_modal(&mut self, ctx: &egui::Context) {
        let Some(id) = self.pending_close else {
            return;
        };
        let name = self
            .workspace
            .canvas(id)
            .map(|c| c.file_name().to_owned())
            .unwrap_or_default();

        let mut choice = None;
        egui::Window::new("Unsaved changes")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "[ {name} ] has been modified but not saved, want to save now?"
                ));
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        choice = Some(CloseChoice::Save);
                    }
                    if ui.button("Don't Save").clicked() {
                        choice = Some(CloseChoice::Discard);
                    }
                    if ui.button("Cancel").clicked() {
                        choice = Some(CloseChoice::Cancel);
                    }
                });
            });

        if let Some(choice) = choice {
            self.resolve_pending_close(choice);
        }
    }

    fn new_canvas_modal(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &mut self.new_canvas else {
            return;
        };

        let mut create = false;
        let mut cancel = false;
        egui::Window::new("New Canvas")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Width:");
                    ui.add(egui::DragValue::new(&mut dialog.width).range(1..=8192));
                    ui.label("Height:");
                    ui.add(egui::DragValue::new(&mut dialog.height).range(1..=8192));
                });
                ui.horizontal(|ui| {
                    ui.label("Background:");
                    ui.color_edit_button_srgba(&mut dialog.background);
                });
                ui.horizontal(|ui| {
                    if ui.button("Create").clicked() {
                        create = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if create {
            let dialog = self.new_canvas.take().unwrap_or_default();
            let [r, g, b, a] = dialog.background.to_srgba_unmultiplied();
            let name = self.workspace.next_untitled_name();
            self.workspace.add_canvas(Canvas::new(
                dialog.width,
                dialog.height,
                Rgba([r, g, b, a]),
                &name,
            ));
        } else if cancel {
            self.new_canvas = None;
        }
    }

    fn path_prompt_modal(&mut self, ctx: &egui::Context) {
        let Some(prompt) = &mut self.path_prompt else {
            return;
        };
        let (title, action) = match prompt.purpose {
            PromptPurpose::Open => ("Open File", "Open"),
            _ => ("Save File", "Save"),
        };

        let mut confirm = false;
        let mut cancel = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Path (format follows the extension, e.g. .png, .jpg):");
                let response = ui.text_edit_singleline(&mut prompt.text);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    confirm = true;
                }
                ui.horizontal(|ui| {
                    if ui.button(action).clicked() {
                        confirm = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if confirm {
            self.confirm_path_prompt();
        } else if cancel {
            self.path_prompt = None;
        }
    }

    fn preferences_modal(&mut self, ctx: &egui::Context) {
        if !self.show_preferences {
            return;
        }
        let mut open = true;
        egui::Window::new("Preferences")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                let mut native = self.preferences.use_native_dialog();
                if ui.checkbox(&mut native, "Use native dialog").changed() {
                    self.preferences.set_use_native_dialog(native);
                    if let Err(err) = self.preferences.save_all() {
                        log::error!("could not persist preferences: {err}");
                    }
                }
            });
        self.show_preferences = open;
    }

    fn about_modal(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }
        let mut open = true;
        egui::Window::new("About")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(format!("easel {}", env!("CARGO_PKG_VERSION")));
                ui.label("A small multi-canvas raster paint application.");
            });
        self.show_about = open;
    }

    fn error_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };
        let mut dismiss = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismiss = true;
                }
            });
        if dismiss {
            self.error_message = None;
        }
    }

    /// Whether a modal is up; pointer input is not routed to tools then.
    fn modal_open(&self) -> bool {
        self.pending_close.is_some()
            || self.new_canvas.is_some()
            || self.path_prompt.is_some()
            || self.show_preferences
            || self.show_about
            || self.error_message.is_some()
    }
}

fn suggested_save_path(canvas: &Canvas) -> String {
    match canvas.file_path() {
        Some(path) => path.display().to_string(),
        None => format!("{}.png", canvas.file_name()),
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.textures.begin_frame();

        // Route pointer input against the current canvas rect from the last
        // frame, before anything draws.
        if !self.modal_open() && self.workspace.current_canvas_id().is_some() {
            for event in self.input.process_input(ctx) {
                self.workspace.route_event(&event);
            }
        }

        self.menu_bar(ctx);
        panels::tools_panel(self, ctx);
        panels::color_panel(self, ctx);

        egui::CentralPanel::default().show(ctx, |_ui| {
            // canvases float above the central panel as their own windows
        });
        panels::canvas_windows(self, ctx);

        self.close_prompt_modal(ctx);
        self.new_canvas_modal(ctx);
        self.path_prompt_modal(ctx);
        self.preferences_modal(ctx);
        self.about_modal(ctx);
        self.error_modal(ctx);
    }
}
