use image::Rgba;

use crate::canvas::Canvas;
use crate::input::InputEvent;
use crate::raster;
use crate::tools::Tool;

/// Freehand line tool. Each pointer move commits a segment from the previous
/// position straight into the primary buffer, so no double buffering is
/// involved.
pub struct FreehandTool {
    last: Option<(i32, i32)>,
}

impl FreehandTool {
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl Default for FreehandTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for FreehandTool {
    fn name(&self) -> &'static str {
        "Freehand"
    }

    fn process(&mut self, event: &InputEvent, canvas: &mut Canvas, color: Rgba<u8>) {
        match event {
            InputEvent::PointerDown { location } if location.is_in_canvas => {
                let pos = (location.position.x as i32, location.position.y as i32);
                raster::draw_line(canvas.active_image_mut(), pos, pos, color);
                self.last = Some(pos);
            }
            InputEvent::PointerMove { location } => {
                if let Some(last) = self.last {
                    let pos = (location.position.x as i32, location.position.y as i32);
                    raster::draw_line(canvas.active_image_mut(), last, pos, color);
                    self.last = Some(pos);
                }
            }
            InputEvent::PointerUp { .. } => {
                self.last = None;
            }
            _ => {}
        }
    }

    fn cancel(&mut self, _canvas: &mut Canvas) {
        self.last = None;
    }
}
