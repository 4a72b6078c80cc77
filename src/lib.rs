//! weekgrid: lay out recurring weekly events as a day/hour grid.
//!
//! A [`types::Schedule`] holds the displayed days and their events.
//! [`types::Schedule::render`] draws it onto any [`render::DrawingSurface`]:
//! a PDF page, a terminal buffer, or a recording used in tests.

pub mod cli;
pub mod parsers;
pub mod render;
pub mod tui;
pub mod types;
