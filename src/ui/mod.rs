//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal rendering and layout
//! - Theme management and the background color palette
//! - Widget components (spinner, styling)
//! - Region rendering (banner, quote, share links, log pane, footer)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
pub mod theme;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::Theme;
