//! Meal planner and meal editor handlers

use tracing::{debug, info};

use crate::meal_planner::MealEditor;
use crate::state::{AppState, UiMode};

use super::UpdateResult;

pub fn handle_move_cursor(state: &mut AppState, days: isize, types: isize) -> UpdateResult {
    state.meals.move_day(days);
    state.meals.move_type(types);
    UpdateResult::none()
}

pub fn handle_step_week(state: &mut AppState, forward: bool) -> UpdateResult {
    state.meals.planner.step_week(forward);
    UpdateResult::none()
}

/// Append a week and switch to it, or report the cap
pub fn handle_add_week(state: &mut AppState) -> UpdateResult {
    let planner = &mut state.meals.planner;
    match planner.add_week() {
        Some(week) => {
            planner.select_week(week);
            info!("Added week {} to {}", week, planner.selected_month());
            state.set_status(format!("Added Week {}", week));
        }
        None => {
            let max = planner.max_weeks();
            debug!("Week cap of {} reached", max);
            state.set_status(format!("A month can have at most {} weeks", max));
        }
    }
    UpdateResult::none()
}

pub fn handle_remove_meal(state: &mut AppState) -> UpdateResult {
    let meals = &mut state.meals;
    if let Some(meal) = meals.planner.remove_meal(meals.cursor_day, meals.cursor_type) {
        info!(
            "Removed {:?} from {} {}",
            meal.name, meals.cursor_day, meals.cursor_type
        );
    }
    UpdateResult::none()
}

pub fn handle_open_editor(state: &mut AppState) -> UpdateResult {
    let meals = &mut state.meals;
    let meal = meals.planner.meal(meals.cursor_day, meals.cursor_type);
    meals.editor = Some(MealEditor::open(meals.cursor_day, meals.cursor_type, meal));
    state.ui_mode = UiMode::MealEditor;
    UpdateResult::none()
}

pub fn handle_editor_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(editor) = state.meals.editor.as_mut() {
        editor.insert_char(c);
    }
    UpdateResult::none()
}

pub fn handle_editor_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(editor) = state.meals.editor.as_mut() {
        editor.backspace();
    }
    UpdateResult::none()
}

/// Fill the editor from the next/previous local recipe
pub fn handle_editor_cycle(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(editor) = state.meals.editor.as_mut() {
        editor.cycle_recipe(state.recipe_book.recipes(), forward);
    }
    UpdateResult::none()
}

pub fn handle_editor_save(state: &mut AppState) -> UpdateResult {
    let Some(editor) = state.meals.editor.take() else {
        return UpdateResult::none();
    };
    let slot = editor.title();
    let id = state.meals.planner.assign_meal(
        editor.day,
        editor.meal_type,
        &editor.name,
        editor.recipe_id,
    );
    debug!("Saved meal {:?} in {}", id, slot);
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_editor_remove(state: &mut AppState) -> UpdateResult {
    let Some(editor) = state.meals.editor.take() else {
        return UpdateResult::none();
    };
    state
        .meals
        .planner
        .remove_meal(editor.day, editor.meal_type);
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_editor_cancel(state: &mut AppState) -> UpdateResult {
    state.meals.editor = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}
