//! Window configuration

use egui::Vec2;

pub struct WindowConfig {
    pub title: &'static str,
    pub min_size: Vec2,
    pub default_size: Vec2,
    /// Monitors narrower than this get a window sized from the monitor.
    pub small_screen_width: f32,
    /// Share of monitor width and height used on small screens.
    pub small_screen_fraction: Vec2,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "calculator",
            min_size: egui::vec2(235.0, 300.0),
            default_size: egui::vec2(300.0, 400.0),
            small_screen_width: 500.0,
            small_screen_fraction: egui::vec2(0.9, 0.7),
        }
    }
}

impl WindowConfig {
    /// Initial inner size for a monitor of the given size, never below `min_size`.
    pub fn fitted_size(&self, monitor: Vec2) -> Vec2 {
        if monitor.x >= self.small_screen_width {
            return self.default_size;
        }
        egui::vec2(
            (monitor.x * self.small_screen_fraction.x).floor().max(self.min_size.x),
            (monitor.y * self.small_screen_fraction.y).floor().max(self.min_size.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_monitor_uses_default() {
        let config = WindowConfig::default();
        assert_eq!(config.fitted_size(egui::vec2(1920.0, 1080.0)), egui::vec2(300.0, 400.0));
        assert_eq!(config.fitted_size(egui::vec2(500.0, 800.0)), egui::vec2(300.0, 400.0));
    }

    #[test]
    fn test_small_monitor_scales() {
        let config = WindowConfig::default();
        assert_eq!(config.fitted_size(egui::vec2(400.0, 800.0)), egui::vec2(360.0, 560.0));
    }

    #[test]
    fn test_tiny_monitor_clamps_to_minimum() {
        let config = WindowConfig::default();
        assert_eq!(config.fitted_size(egui::vec2(200.0, 300.0)), egui::vec2(235.0, 300.0));
    }
}
