//! Centralized theme system.
//!
//! - `palette` — Dark and light color sets, chosen by the dark mode setting
//! - `styles` — Semantic style builders on top of a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
