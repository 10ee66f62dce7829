//! Grocery list and grocery form handlers

use tracing::{debug, info};

use crate::groceries::GroceryForm;
use crate::state::{AppState, UiMode};

use super::UpdateResult;

pub fn handle_move(state: &mut AppState, delta: isize) -> UpdateResult {
    state.groceries.move_cursor(delta);
    UpdateResult::none()
}

pub fn handle_toggle(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.groceries.selected_item().map(|item| item.id) else {
        return UpdateResult::none();
    };
    if let Some(checked) = state.groceries.list.toggle(id) {
        debug!("Grocery item {} checked={}", id, checked);
    }
    UpdateResult::none()
}

pub fn handle_delete(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.groceries.selected_item().map(|item| item.id) else {
        return UpdateResult::none();
    };
    if let Some(item) = state.groceries.list.delete(id) {
        info!("Removed grocery item {:?}", item.name);
        state.set_status(format!("Removed {}", item.name));
    }
    state.groceries.clamp_cursor();
    UpdateResult::none()
}

pub fn handle_open_form(state: &mut AppState) -> UpdateResult {
    state.groceries.form = Some(GroceryForm::for_new());
    state.ui_mode = UiMode::GroceryForm;
    UpdateResult::none()
}

/// Open the form pre-filled with the highlighted item
pub fn handle_edit(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.groceries.selected_item().map(GroceryForm::for_item) else {
        return UpdateResult::none();
    };
    state.groceries.form = Some(form);
    state.ui_mode = UiMode::GroceryForm;
    UpdateResult::none()
}

pub fn handle_form_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(form) = state.groceries.form.as_mut() {
        form.insert_char(c);
    }
    UpdateResult::none()
}

pub fn handle_form_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.groceries.form.as_mut() {
        form.backspace();
    }
    UpdateResult::none()
}

pub fn handle_form_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(form) = state.groceries.form.as_mut() {
        form.focus = if forward {
            form.focus.next()
        } else {
            form.focus.prev()
        };
    }
    UpdateResult::none()
}

pub fn handle_form_cycle_category(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(form) = state.groceries.form.as_mut() {
        form.cycle_category(forward);
    }
    UpdateResult::none()
}

/// Validate and apply the form. Invalid input keeps the form open with an
/// inline error.
pub fn handle_form_submit(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.groceries.form.as_mut() else {
        return UpdateResult::none();
    };

    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(e) => {
            debug!("Grocery form rejected: {}", e);
            form.error = Some(e);
            return UpdateResult::none();
        }
    };

    let name = draft.name.clone();
    match form.editing {
        Some(id) => {
            if state.groceries.list.edit(id, draft) {
                info!("Updated grocery item {}: {:?}", id, name);
            }
        }
        None => {
            let id = state.groceries.list.add(draft, state.today);
            info!("Added grocery item {}: {:?}", id, name);
        }
    }

    state.groceries.form = None;
    state.groceries.clamp_cursor();
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_form_cancel(state: &mut AppState) -> UpdateResult {
    state.groceries.form = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}
