//! UI primitives for the Technique CLI.
//!
//! This module provides:
//! - **Context**: Terminal detection (TTY, pretty/plain, width, color, unicode)
//! - **Theme**: Badge tokens and styling
//! - **Render**: Headers, dividers, badges, hints, error messages

mod context;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{badge, divider, header, print_error};
