//! Custom widgets

use egui::{Response, Rounding, Ui, Vec2, Widget};
use crate::theme::{KeyPalette, SlowColors};

/// A keypad key: rounded pill, 2px grey outline, fill follows hover/press.
pub struct KeyButton<'a> {
    label: &'a str,
    size: Vec2,
    palette: KeyPalette,
    font_size: f32,
    rounding: f32,
}

impl<'a> KeyButton<'a> {
    pub fn new(label: &'a str, size: Vec2) -> Self {
        Self {
            label,
            size,
            palette: KeyPalette::STANDARD,
            font_size: 18.0,
            rounding: 20.0,
        }
    }

    pub fn palette(mut self, palette: KeyPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn rounding(mut self, rounding: f32) -> Self {
        self.rounding = rounding;
        self
    }
}

impl<'a> Widget for KeyButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let pressed = response.is_pointer_button_down_on();
            let fill = self.palette.fill(response.hovered(), pressed);
            // never round past a half-height, or short keys turn into ovals
            let radius = self.rounding.min(rect.height() / 2.0);

            let painter = ui.painter();
            painter.rect(
                rect,
                Rounding::same(radius),
                fill,
                egui::Stroke::new(2.0, SlowColors::BORDER),
            );
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                SlowColors::TEXT,
            );
        }

        response
    }
}
