//! Terminal preview of a schedule

pub mod app;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use app::run;
pub use surface::TerminalSurface;
pub use theme::Theme;
