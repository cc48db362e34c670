use std::path::PathBuf;

use image::Rgba;

use crate::canvas::{Canvas, CanvasId, SaveOutcome};
use crate::error::CanvasError;
use crate::input::InputEvent;
use crate::tools::{new_tool, Tool, ToolKind, ToolType};

/// User's answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    /// Save (prompting for a path if none is bound), then close.
    Save,
    /// Close without saving.
    Discard,
    /// Keep the canvas open.
    Cancel,
}

/// Whether a close request actually removed the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    Kept,
}

/// Owns the canvas registry and the tool set, and routes pointer events from
/// the current canvas to the current tool.
///
/// Current-canvas and current-tool are non-owning references (an id and an
/// index into the registries); they always resolve to a live entry or are
/// absent.
pub struct Workspace {
    canvases: Vec<Canvas>,
    current_canvas: Option<CanvasId>,
    tools: Vec<ToolType>,
    current_tool: usize,
    stroke_color: Rgba<u8>,
    untitled_count: u32,
}

impl Workspace {
    pub fn new() -> Self {
        let tools: Vec<ToolType> = ToolKind::ALL.into_iter().map(new_tool).collect();
        let current_tool = tools
            .iter()
            .position(|t| t.kind() == ToolKind::Freehand)
            .unwrap_or(0);
        Self {
            canvases: Vec::new(),
            current_canvas: None,
            tools,
            current_tool,
            stroke_color: Rgba([0, 0, 0, 255]),
            untitled_count: 0,
        }
    }

    /// Next display name for a canvas created from the New menu.
    pub fn next_untitled_name(&mut self) -> String {
        self.untitled_count += 1;
        if self.untitled_count == 1 {
            "Untitled".to_owned()
        } else {
            format!("Untitled-{}", self.untitled_count)
        }
    }

    /// Register a canvas. The new canvas gains focus and becomes current.
    pub fn add_canvas(&mut self, canvas: Canvas) -> CanvasId {
        let id = canvas.id();
        log::info!("added canvas {:?}", canvas.file_name());
        self.canvases.push(canvas);
        self.current_canvas = Some(id);
        id
    }

    pub fn canvases(&self) -> &[Canvas] {
        &self.canvases
    }

    pub fn canvas(&self, id: CanvasId) -> Option<&Canvas> {
        self.canvases.iter().find(|c| c.id() == id)
    }

    pub fn canvas_mut(&mut self, id: CanvasId) -> Option<&mut Canvas> {
        self.canvases.iter_mut().find(|c| c.id() == id)
    }

    pub fn current_canvas_id(&self) -> Option<CanvasId> {
        self.current_canvas
    }

    pub fn current_canvas(&self) -> Option<&Canvas> {
        self.current_canvas.and_then(|id| self.canvas(id))
    }

    pub fn current_canvas_mut(&mut self) -> Option<&mut Canvas> {
        let id = self.current_canvas?;
        self.canvas_mut(id)
    }

    /// Make `id` current, if it refers to a live canvas. Any in-progress
    /// geometry of the current tool is cancelled against the outgoing canvas.
    pub fn set_current_canvas(&mut self, id: CanvasId) {
        if self.current_canvas == Some(id) || self.canvas(id).is_none() {
            return;
        }
        self.cancel_current_tool();
        self.current_canvas = Some(id);
    }

    /// Remove `id` from the registry. If it was current, there is no current
    /// canvas until another gains focus.
    pub fn remove_canvas(&mut self, id: CanvasId) {
        if self.current_canvas == Some(id) {
            self.cancel_current_tool();
            self.current_canvas = None;
        }
        self.canvases.retain(|c| c.id() != id);
    }

    pub fn current_tool_kind(&self) -> ToolKind {
        self.tools[self.current_tool].kind()
    }

    /// Switch the current tool. The outgoing tool's in-progress geometry is
    /// cancelled; the incoming tool targets the current canvas from the next
    /// routed event on.
    pub fn select_tool(&mut self, kind: ToolKind) {
        if self.current_tool_kind() == kind {
            return;
        }
        self.cancel_current_tool();
        if let Some(index) = self.tools.iter().position(|t| t.kind() == kind) {
            log::info!("tool selected: {}", self.tools[index].name());
            self.current_tool = index;
        }
    }

    pub fn stroke_color(&self) -> Rgba<u8> {
        self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Rgba<u8>) {
        self.stroke_color = color;
    }

    /// Forward a pointer event from the current canvas's drawing surface to
    /// the current tool. No-op when no canvas is current.
    pub fn route_event(&mut self, event: &InputEvent) {
        let Some(id) = self.current_canvas else {
            return;
        };
        let Some(index) = self.canvases.iter().position(|c| c.id() == id) else {
            return;
        };
        let tool = &mut self.tools[self.current_tool];
        tool.process(event, &mut self.canvases[index], self.stroke_color);
    }

    /// Whether closing `id` must go through the unsaved-changes prompt.
    pub fn needs_close_prompt(&self, id: CanvasId) -> bool {
        self.canvas(id).is_some_and(|c| !c.is_saved())
    }

    /// Resolve a close request on a dirty canvas. `Cancel` keeps the canvas
    /// untouched; `Discard` removes it regardless of dirty state; `Save` runs
    /// the save first and keeps the canvas if the path prompt is dismissed.
    pub fn resolve_close<F>(
        &mut self,
        id: CanvasId,
        choice: CloseChoice,
        pick_path: F,
    ) -> Result<CloseOutcome, CanvasError>
    where
        F: FnOnce(&Canvas) -> Option<PathBuf>,
    {
        match choice {
            CloseChoice::Cancel => Ok(CloseOutcome::Kept),
            CloseChoice::Discard => {
                self.remove_canvas(id);
                Ok(CloseOutcome::Closed)
            }
            CloseChoice::Save => {
                let Some(canvas) = self.canvas_mut(id) else {
                    return Ok(CloseOutcome::Kept);
                };
                match canvas.save_with(pick_path)? {
                    SaveOutcome::Saved => {
                        self.remove_canvas(id);
                        Ok(CloseOutcome::Closed)
                    }
                    SaveOutcome::Cancelled => Ok(CloseOutcome::Kept),
                }
            }
        }
    }

    fn cancel_current_tool(&mut self) {
        let Some(id) = self.current_canvas else {
            return;
        };
        let Some(index) = self.canvases.iter().position(|c| c.id() == id) else {
            return;
        };
        let tool = &mut self.tools[self.current_tool];
        tool.cancel(&mut self.canvases[index]);
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
