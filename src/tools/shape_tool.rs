use image::{Rgba, RgbaImage};

use crate::canvas::Canvas;
use crate::input::{InputEvent, InputLocation};
use crate::raster;
use crate::tools::Tool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rect,
    Ellipse,
}

/// Two-point shape tool: press anchors the shape and enters the canvas's
/// double-buffered stroke, every move redraws the preview into the scratch
/// buffer, release commits the final shape to the primary buffer.
pub struct ShapeTool {
    kind: ShapeKind,
    anchor: Option<(i32, i32)>,
}

impl ShapeTool {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind, anchor: None }
    }

    fn draw(&self, img: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
        match self.kind {
            ShapeKind::Line => raster::draw_line(img, from, to, color),
            ShapeKind::Rect => raster::draw_rect(img, from, to, color),
            ShapeKind::Ellipse => raster::draw_ellipse(img, from, to, color),
        }
    }
}

fn to_pixel(location: InputLocation) -> (i32, i32) {
    (location.position.x as i32, location.position.y as i32)
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Line => "Line",
            ShapeKind::Rect => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
        }
    }

    fn process(&mut self, event: &InputEvent, canvas: &mut Canvas, color: Rgba<u8>) {
        match event {
            InputEvent::PointerDown { location } if location.is_in_canvas => {
                self.anchor = Some(to_pixel(*location));
                canvas.begin_stroke();
            }
            InputEvent::PointerMove { location } => {
                if let Some(anchor) = self.anchor {
                    // scratch buffer was resynced after the last frame, so
                    // this redraw is the only preview on it
                    self.draw(canvas.active_image_mut(), anchor, to_pixel(*location), color);
                }
            }
            InputEvent::PointerUp { location } => {
                if let Some(anchor) = self.anchor.take() {
                    canvas.end_stroke();
                    self.draw(canvas.active_image_mut(), anchor, to_pixel(*location), color);
                }
            }
            _ => {}
        }
    }

    fn cancel(&mut self, canvas: &mut Canvas) {
        if self.anchor.take().is_some() {
            canvas.end_stroke();
        }
    }
}
