//! Custom widget components

pub mod dialogs;
mod groceries;
mod header;
mod meals;
pub mod modal_overlay;
mod recipe_detail;
mod recipes;
mod settings_panel;
mod status_bar;

pub use groceries::GroceryView;
pub use header::MainHeader;
pub use meals::MealPlanView;
pub use recipe_detail::RecipeDetailView;
pub use recipes::RecipeList;
pub use settings_panel::SettingsPanel;
pub use status_bar::StatusBar;

/// First visible row so that `cursor` stays on screen in a list of `height` rows
pub(crate) fn scroll_offset(cursor: usize, len: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    let max_offset = len - height;
    cursor.saturating_sub(height - 1).min(max_offset)
}

/// Shorten `text` to `max` characters, ending with an ellipsis when cut
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 1 {
        return "…".chars().take(max).collect();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}
