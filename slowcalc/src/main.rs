//! SlowCalc - A calculator for the Slow Computer
//!
//! Build an arithmetic expression from the keypad or the keyboard,
//! then evaluate it with `=` or Enter.

mod app;
mod config;
mod controller;
mod eval;
mod keypad;

use app::SlowCalcApp;
use config::WindowConfig;
use eframe::NativeOptions;

const LOG_DIRECTIVE: &str = "slowcalc=info";

fn main() -> eframe::Result<()> {
    slowcore::logging::init(LOG_DIRECTIVE);

    let window = WindowConfig::default();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window.default_size)
            .with_min_inner_size(window.min_size)
            .with_title(window.title),
        ..Default::default()
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting calculator");

    eframe::run_native(
        window.title,
        options,
        Box::new(move |cc| {
            let theme = slowcore::SlowTheme::default();
            theme.apply(&cc.egui_ctx);
            Box::new(SlowCalcApp::new(cc, theme, window))
        }),
    )
}
