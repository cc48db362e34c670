use egui::{Context, LayerId, PointerButton, Pos2, Rect};

/// Where a pointer event landed, in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position in canvas pixel space (screen position mapped through the
    /// canvas rect, unscaled)
    pub position: Pos2,
    /// Whether the position falls on the canvas drawing surface itself. False
    /// when another layer (a menu popup, a modal, an overlapping canvas
    /// window) sits on top of that point.
    pub is_in_canvas: bool,
}

/// Tagged pointer events, the unit of tool dispatch.
///
/// This replaces toolkit-side event filtering: the workspace looks up the
/// current tool and hands it one of these, instead of tools overriding
/// virtual event hooks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp { location: InputLocation },
}

/// Converts raw egui pointer input into canvas-space [`InputEvent`]s.
///
/// Tracks the current canvas's on-screen rect and its window layer, so a
/// press only counts as on-surface when the canvas is the topmost thing at
/// that point.
pub struct InputHandler {
    canvas_rect: Rect,
    canvas_layer: Option<LayerId>,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
            canvas_layer: None,
            last_pointer_pos: None,
        }
    }

    /// Update the on-screen rect and window layer of the current canvas (its
    /// window can move every frame).
    pub fn set_canvas_surface(&mut self, rect: Rect, layer: LayerId) {
        self.canvas_rect = rect;
        self.canvas_layer = Some(layer);
    }

    fn location_at(&self, pos: Pos2, top_layer: Option<LayerId>) -> InputLocation {
        let on_surface = self.canvas_rect.contains(pos)
            && self.canvas_layer.is_some()
            && top_layer == self.canvas_layer;
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: on_surface,
        }
    }

    /// Drain this frame's pointer input into events. Only the primary button
    /// drives tools.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let (pos, pressed, down, released) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_down(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
            )
        });
        let top_layer = pos.and_then(|pos| ctx.layer_id_at(pos));

        let mut events = Vec::new();

        if pressed {
            if let Some(pos) = pos {
                events.push(InputEvent::PointerDown {
                    location: self.location_at(pos, top_layer),
                });
            }
        }

        if let Some(pos) = pos {
            if Some(pos) != self.last_pointer_pos && down {
                events.push(InputEvent::PointerMove {
                    location: self.location_at(pos, top_layer),
                });
            }
        }

        if released {
            // release may land outside the window; fall back to the last
            // known position so strokes always terminate
            if let Some(pos) = pos.or(self.last_pointer_pos) {
                events.push(InputEvent::PointerUp {
                    location: self.location_at(pos, top_layer),
                });
            }
        }

        self.last_pointer_pos = pos;
        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Id, Order, Pos2, Rect};

    fn handler_with_surface() -> (InputHandler, LayerId) {
        let layer = LayerId::new(Order::Middle, Id::new("canvas-window"));
        let mut handler = InputHandler::new();
        handler.set_canvas_surface(
            Rect::from_min_max(Pos2::new(100.0, 100.0), Pos2::new(300.0, 300.0)),
            layer,
        );
        (handler, layer)
    }

    #[test]
    fn press_on_the_canvas_layer_is_on_surface() {
        let (handler, layer) = handler_with_surface();
        let location = handler.location_at(Pos2::new(150.0, 120.0), Some(layer));
        assert!(location.is_in_canvas);
        assert_eq!(location.position, Pos2::new(50.0, 20.0));
    }

    #[test]
    fn press_under_a_covering_layer_is_off_surface() {
        // A menu popup or another window over the canvas rect owns the point.
        let (handler, _layer) = handler_with_surface();
        let popup = LayerId::new(Order::Foreground, Id::new("popup"));
        let location = handler.location_at(Pos2::new(150.0, 120.0), Some(popup));
        assert!(!location.is_in_canvas);
    }

    #[test]
    fn press_outside_the_rect_is_off_surface() {
        let (handler, layer) = handler_with_surface();
        let location = handler.location_at(Pos2::new(50.0, 50.0), Some(layer));
        assert!(!location.is_in_canvas);
    }

    #[test]
    fn press_before_any_surface_is_registered_is_off_surface() {
        let handler = InputHandler::new();
        let layer = LayerId::new(Order::Middle, Id::new("anything"));
        let location = handler.location_at(Pos2::new(0.0, 0.0), Some(layer));
        assert!(!location.is_in_canvas);
    }
}
