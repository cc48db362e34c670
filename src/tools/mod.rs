use image::Rgba;

use crate::canvas::Canvas;
use crate::input::InputEvent;

/// Tool trait defines the interface for all drawing tools.
///
/// A tool is stateless between strokes except for its in-progress geometry
/// (an anchor point, the last freehand position). It never owns its target:
/// the workspace hands it the current canvas with every event.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Interpret a pointer event against the target canvas, mutating its
    /// buffers as needed.
    fn process(&mut self, event: &InputEvent, canvas: &mut Canvas, color: Rgba<u8>);

    /// Drop any in-progress geometry and end an active stroke. Called when
    /// the tool is switched away from or the target canvas changes.
    fn cancel(&mut self, canvas: &mut Canvas);
}

mod freehand_tool;
mod shape_tool;

pub use freehand_tool::FreehandTool;
pub use shape_tool::{ShapeKind, ShapeTool};

/// Discriminant for the available tools, used by the tool panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    StraightLine,
    Rect,
    Ellipse,
    Freehand,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::StraightLine,
        ToolKind::Rect,
        ToolKind::Ellipse,
        ToolKind::Freehand,
    ];
}

/// Enum over all tool implementations, avoiding `Box<dyn Tool>` in the
/// workspace registry.
pub enum ToolType {
    StraightLine(ShapeTool),
    Rect(ShapeTool),
    Ellipse(ShapeTool),
    Freehand(FreehandTool),
}

impl ToolType {
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::StraightLine(_) => ToolKind::StraightLine,
            Self::Rect(_) => ToolKind::Rect,
            Self::Ellipse(_) => ToolKind::Ellipse,
            Self::Freehand(_) => ToolKind::Freehand,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::StraightLine(tool) | Self::Rect(tool) | Self::Ellipse(tool) => tool.name(),
            Self::Freehand(tool) => tool.name(),
        }
    }

    fn process(&mut self, event: &InputEvent, canvas: &mut Canvas, color: Rgba<u8>) {
        match self {
            Self::StraightLine(tool) | Self::Rect(tool) | Self::Ellipse(tool) => {
                tool.process(event, canvas, color)
            }
            Self::Freehand(tool) => tool.process(event, canvas, color),
        }
    }

    fn cancel(&mut self, canvas: &mut Canvas) {
        match self {
            Self::StraightLine(tool) | Self::Rect(tool) | Self::Ellipse(tool) => {
                tool.cancel(canvas)
            }
            Self::Freehand(tool) => tool.cancel(canvas),
        }
    }
}

/// Factory for the workspace's tool registry.
pub fn new_tool(kind: ToolKind) -> ToolType {
    match kind {
        ToolKind::StraightLine => ToolType::StraightLine(ShapeTool::new(ShapeKind::Line)),
        ToolKind::Rect => ToolType::Rect(ShapeTool::new(ShapeKind::Rect)),
        ToolKind::Ellipse => ToolType::Ellipse(ShapeTool::new(ShapeKind::Ellipse)),
        ToolKind::Freehand => ToolType::Freehand(FreehandTool::new()),
    }
}
