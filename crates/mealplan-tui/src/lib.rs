//! mealplan-tui - Terminal UI for mealplan
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! event loop that feeds terminal input into the mealplan-app update function
//! and renders [`mealplan_app::AppState`] each frame.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
