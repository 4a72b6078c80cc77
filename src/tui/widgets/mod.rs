//! TUI widgets

pub mod preview;
