use eframe::egui;

use crate::tools::ToolKind;

/// Square glyph button for the tools dock. Selection state renders through
/// the theme's selection visuals, so it follows light/dark mode.
pub struct ToolButton {
    kind: ToolKind,
    selected: bool,
}

impl ToolButton {
    const SIZE: f32 = 36.0;

    pub fn new(kind: ToolKind, selected: bool) -> Self {
        Self { kind, selected }
    }

    pub fn icon(kind: ToolKind) -> &'static str {
        match kind {
            ToolKind::StraightLine => "∕",
            ToolKind::Rect => "▭",
            ToolKind::Ellipse => "◯",
            ToolKind::Freehand => "✎",
        }
    }

    pub fn label(kind: ToolKind) -> &'static str {
        match kind {
            ToolKind::StraightLine => "Line",
            ToolKind::Rect => "Rectangle",
            ToolKind::Ellipse => "Ellipse",
            ToolKind::Freehand => "Freehand",
        }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::Vec2::splat(Self::SIZE), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, self.selected);
            let fill = if self.selected {
                visuals.bg_fill
            } else {
                visuals.weak_bg_fill
            };
            ui.painter()
                .rect(rect, visuals.rounding, fill, visuals.bg_stroke);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                Self::icon(self.kind),
                egui::FontId::proportional(20.0),
                visuals.text_color(),
            );
        }

        response.on_hover_text(Self::label(self.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tool_gets_a_distinct_icon_and_label() {
        for (i, a) in ToolKind::ALL.into_iter().enumerate() {
            assert!(!ToolButton::icon(a).is_empty());
            assert!(!ToolButton::label(a).is_empty());
            for b in ToolKind::ALL.into_iter().skip(i + 1) {
                assert_ne!(ToolButton::icon(a), ToolButton::icon(b));
                assert_ne!(ToolButton::label(a), ToolButton::label(b));
            }
        }
    }
}
