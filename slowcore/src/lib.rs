//! slowcore: shared library for slow computer applications

pub mod logging;
pub mod theme;
pub mod widgets;

pub use theme::SlowTheme;
pub use widgets::KeyButton;
