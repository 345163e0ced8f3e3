//! SlowCalc application

use egui::{Context, RichText};
use slowcore::theme::{menu_bar, KeyPalette, SlowColors};
use slowcore::{KeyButton, SlowTheme};
use tracing::info;

use crate::config::WindowConfig;
use crate::controller::{Action, Controller, Display};
use crate::keypad::{action_for_char, action_for_key, ButtonMap, CLEAR_LABEL, KEYPAD};

const DISPLAY_HEIGHT: f32 = 64.0;
const MIN_KEY_SIZE: f32 = 40.0;

/// The text the user sees, plus a pending request to take keyboard focus.
#[derive(Default)]
pub struct EguiDisplay {
    text: String,
    wants_focus: bool,
}

impl Display for EguiDisplay {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.wants_focus = true;
    }
}

pub struct SlowCalcApp {
    display: EguiDisplay,
    controller: Controller,
    buttons: ButtonMap,
    theme: SlowTheme,
    window: WindowConfig,
    sized_to_monitor: bool,
    show_about: bool,
}

impl SlowCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, theme: SlowTheme, window: WindowConfig) -> Self {
        Self {
            display: EguiDisplay { text: String::new(), wants_focus: true },
            controller: Controller::default(),
            buttons: ButtonMap::new(),
            theme,
            window,
            sized_to_monitor: false,
            show_about: false,
        }
    }

    fn display_id() -> egui::Id {
        egui::Id::new("calc_display")
    }

    fn dispatch(&mut self, action: Action) {
        self.controller.dispatch(action, &mut self.display);
    }

    /// Small screens get a window sized from the monitor, once it is known.
    fn fit_to_monitor(&mut self, ctx: &Context) {
        if self.sized_to_monitor {
            return;
        }
        if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
            let size = self.window.fitted_size(monitor);
            if size != self.window.default_size {
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
            }
            info!(?monitor, ?size, "window sized");
            self.sized_to_monitor = true;
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let focused = ctx.memory(|mem| mem.has_focus(Self::display_id()));
        let mut actions = Vec::new();

        ctx.input(|i| {
            for event in &i.events {
                match event {
                    egui::Event::Text(text) => {
                        actions.extend(text.chars().filter_map(action_for_char));
                    }
                    egui::Event::Key { key, pressed: true, .. } => {
                        actions.extend(action_for_key(*key, focused));
                    }
                    _ => {}
                }
            }
        });

        for action in actions {
            self.dispatch(action);
        }
    }

    fn render_display(&mut self, ui: &mut egui::Ui) {
        let frame = SlowTheme::display_frame().show(ui, |ui| {
            ui.set_min_height(DISPLAY_HEIGHT);
            ui.set_max_height(DISPLAY_HEIGHT);
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(&self.display.text)
                        .font(egui::FontId::proportional(self.theme.font_size_display))
                        .color(SlowColors::TEXT)
                        .strong(),
                );
            });
        });

        // the frame itself is what takes focus, so Enter can reach it
        let response = ui.interact(frame.response.rect, Self::display_id(), egui::Sense::click());
        if response.clicked() || std::mem::take(&mut self.display.wants_focus) {
            response.request_focus();
        }
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing;
        let columns = KEYPAD[0].len() as f32;
        let rows = KEYPAD.len() as f32;
        let key_w = ((ui.available_width() - spacing.x * (columns - 1.0)) / columns).max(MIN_KEY_SIZE);
        let key_h = ((ui.available_height() - spacing.y * (rows - 1.0)) / rows).max(MIN_KEY_SIZE);

        let mut clicked = None;
        for row in self.buttons.rows() {
            ui.horizontal(|ui| {
                for (label, action) in row {
                    let palette = if label == CLEAR_LABEL {
                        KeyPalette::ACCENT
                    } else {
                        KeyPalette::STANDARD
                    };
                    let key = KeyButton::new(label, egui::vec2(key_w, key_h))
                        .palette(palette)
                        .font_size(self.theme.font_size_key)
                        .rounding(self.theme.key_rounding);
                    if ui.add(key).clicked() {
                        clicked = Some(action);
                    }
                }
            });
        }

        if let Some(action) = clicked {
            self.dispatch(action);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("calculator for slowOS");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(2.0);
                ui.label("keys: 0-9 . ( ) + - * /");
                ui.label("Enter or = evaluates, Esc or C clears");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for SlowCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        slowcore::theme::consume_special_keys(ctx);
        self.fit_to_monitor(ctx);
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(SlowColors::BACKGROUND)
                    .inner_margin(egui::Margin::same(self.theme.window_padding)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}
