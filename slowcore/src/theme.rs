//! Calculator theme
//!
//! Dark window, pale teal keys, one coral accent for the clear key.
//! Keys are drawn with a 2px grey outline and fully rounded ends.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Every color the calculator paints with.
pub struct SlowColors;

impl SlowColors {
    pub const BACKGROUND: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
    pub const TEXT: Color32 = Color32::from_rgb(0, 0, 0);
    pub const BORDER: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);

    pub const DISPLAY: Color32 = Color32::from_rgb(0xB2, 0xDF, 0xDB);

    pub const KEY: Color32 = Color32::from_rgb(0xB2, 0xDF, 0xDB);
    pub const KEY_HOVER: Color32 = Color32::from_rgb(0x80, 0xCB, 0xC4);
    pub const KEY_PRESSED: Color32 = Color32::from_rgb(0x4D, 0xB6, 0xAC);

    pub const ACCENT: Color32 = Color32::from_rgb(0xFF, 0x8C, 0x69);
    pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0xFF, 0x7F, 0x7F);
    pub const ACCENT_PRESSED: Color32 = Color32::from_rgb(0xFF, 0x40, 0x40);
}

/// Fill colors for one family of keys, by interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPalette {
    pub idle: Color32,
    pub hover: Color32,
    pub pressed: Color32,
}

impl KeyPalette {
    pub const STANDARD: Self = Self {
        idle: SlowColors::KEY,
        hover: SlowColors::KEY_HOVER,
        pressed: SlowColors::KEY_PRESSED,
    };

    pub const ACCENT: Self = Self {
        idle: SlowColors::ACCENT,
        hover: SlowColors::ACCENT_HOVER,
        pressed: SlowColors::ACCENT_PRESSED,
    };

    /// Pressed wins over hovered.
    pub fn fill(&self, hovered: bool, pressed: bool) -> Color32 {
        if pressed {
            self.pressed
        } else if hovered {
            self.hover
        } else {
            self.idle
        }
    }
}

/// Theme configuration for the calculator window
pub struct SlowTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub font_size_key: f32,
    pub font_size_display: f32,
    pub key_rounding: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for SlowTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            font_size_key: 18.0,
            font_size_display: 32.0,
            key_rounding: 20.0,
            window_padding: 8.0,
            item_spacing: 6.0,
        }
    }
}

impl SlowTheme {
    /// Apply the calculator theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();

        visuals.window_fill = SlowColors::BACKGROUND;
        visuals.panel_fill = SlowColors::BACKGROUND;
        visuals.extreme_bg_color = SlowColors::DISPLAY;
        visuals.override_text_color = None;

        visuals.window_rounding = Rounding::same(6.0);
        visuals.menu_rounding = Rounding::same(4.0);
        visuals.window_stroke = Stroke::new(1.0, SlowColors::BORDER);

        // menus and the about window use the key palette too
        let keyed = |ws: &mut egui::style::WidgetVisuals, fill: egui::Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::new(1.0, SlowColors::BORDER);
            ws.fg_stroke = Stroke::new(1.0, SlowColors::TEXT);
        };
        keyed(&mut visuals.widgets.inactive, SlowColors::KEY);
        keyed(&mut visuals.widgets.hovered, SlowColors::KEY_HOVER);
        keyed(&mut visuals.widgets.active, SlowColors::KEY_PRESSED);
        keyed(&mut visuals.widgets.open, SlowColors::KEY_HOVER);

        visuals.selection.bg_fill = SlowColors::KEY_PRESSED;
        visuals.selection.stroke = Stroke::new(1.0, SlowColors::TEXT);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Display frame: teal fill and outline, text inset from the edges
    pub fn display_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(SlowColors::DISPLAY)
            .stroke(Stroke::new(1.0, SlowColors::DISPLAY))
            .rounding(Rounding::same(2.0))
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(SlowColors::BACKGROUND)
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

/// Drop Tab and Cmd+/- before the app sees them.
/// Call at the start of `update()`.
pub fn consume_special_keys(ctx: &egui::Context) {
    consume_special_keys_with_tab(ctx, 0);
}

/// As [`consume_special_keys`], but typed tabs become `tab_spaces` spaces
/// instead of vanishing.
///
/// egui cycles focus on Tab in `begin_frame`, before `update` runs, so the
/// focus held before the press is requested again here.
pub fn consume_special_keys_with_tab(ctx: &egui::Context, tab_spaces: usize) {
    let tab_pressed = ctx.input(|i| {
        i.events.iter().any(|e| matches!(e, egui::Event::Key { key: egui::Key::Tab, pressed: true, .. }))
    });

    let focused_before = if tab_pressed { ctx.memory(|mem| mem.focused()) } else { None };

    ctx.input_mut(|i| i.events = strip_special_keys(&i.events, tab_spaces));

    if tab_pressed {
        if let Some(id) = focused_before {
            ctx.memory_mut(|mem| mem.request_focus(id));
        } else if let Some(id) = ctx.memory(|mem| mem.focused()) {
            ctx.memory_mut(|mem| mem.surrender_focus(id));
        }
    }
}

fn strip_special_keys(events: &[egui::Event], tab_spaces: usize) -> Vec<egui::Event> {
    let spaces = " ".repeat(tab_spaces);
    let mut kept = Vec::with_capacity(events.len());
    for event in events {
        match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => {}
            egui::Event::Text(text) if text.contains('\t') => {
                if tab_spaces > 0 {
                    kept.push(egui::Event::Text(text.replace('\t', &spaces)));
                }
            }
            // zoom
            egui::Event::Key { key, modifiers, .. }
                if modifiers.command && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals) => {}
            _ => kept.push(event.clone()),
        }
    }
    kept
}
