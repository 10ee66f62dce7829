//! Month picker and add-month dialog handlers
//!
//! The picker belongs to whichever of the grocery or meal tabs is active.

use tracing::{debug, info};

use mealplan_core::MonthLabel;

use crate::month_selector::{AddMonthDialog, MonthSelector};
use crate::state::{AppState, Tab, UiMode};

use super::UpdateResult;

/// Run `f` on the active tab's selector, if it has one
fn with_selector(state: &mut AppState, f: impl FnOnce(&mut MonthSelector)) -> UpdateResult {
    if let Some(selector) = state.active_month_selector_mut() {
        f(selector);
    }
    UpdateResult::none()
}

/// Make `label` the active tab's month, keeping dependent state in step
fn apply_month(state: &mut AppState, label: MonthLabel) {
    match state.tab {
        Tab::Groceries => {
            state.groceries.months.select(label);
            state.groceries.cursor = 0;
        }
        Tab::Meals => {
            state.meals.months.select(label);
            state.meals.planner.select_month(label);
        }
        _ => return,
    }
    debug!("{} tab now showing {}", state.tab.title(), label);
}

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    let Some(selector) = state.active_month_selector_mut() else {
        return UpdateResult::none();
    };
    selector.open_picker();
    state.ui_mode = UiMode::MonthPicker;
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    with_selector(state, |s| s.push_query(c))
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    with_selector(state, |s| s.pop_query())
}

pub fn handle_move(state: &mut AppState, delta: isize) -> UpdateResult {
    with_selector(state, |s| s.move_cursor(delta))
}

pub fn handle_select(state: &mut AppState) -> UpdateResult {
    let Some(label) = state.active_month_selector().and_then(|s| s.highlighted()) else {
        return UpdateResult::none();
    };
    apply_month(state, label);
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_toggle_default(state: &mut AppState) -> UpdateResult {
    let Some(selector) = state.active_month_selector_mut() else {
        return UpdateResult::none();
    };
    let Some(label) = selector.highlighted() else {
        return UpdateResult::none();
    };
    selector.toggle_default(label);
    match selector.default_month() {
        Some(default) => info!("Default month set to {}", default),
        None => info!("Default month cleared"),
    }
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_open_add_month(state: &mut AppState) -> UpdateResult {
    let today = state.today;
    let Some(selector) = state.active_month_selector_mut() else {
        return UpdateResult::none();
    };
    selector.add_dialog = Some(AddMonthDialog::new(today));
    state.ui_mode = UiMode::AddMonth;
    UpdateResult::none()
}

pub fn handle_add_month_step(
    state: &mut AppState,
    step: impl FnOnce(&mut AddMonthDialog),
) -> UpdateResult {
    with_selector(state, |s| {
        if let Some(dialog) = s.add_dialog.as_mut() {
            step(dialog);
        }
    })
}

/// Add the dialog's month and switch to it. A month that already exists is
/// refused and the dialog stays open.
pub fn handle_add_month_confirm(state: &mut AppState) -> UpdateResult {
    let Some(selector) = state.active_month_selector_mut() else {
        return UpdateResult::none();
    };
    let Some(label) = selector.add_dialog.as_ref().map(|d| d.label()) else {
        return UpdateResult::none();
    };

    if let Err(e) = selector.add_month(label) {
        debug!("Add month rejected: {}", e);
        state.set_status(e.to_string());
        return UpdateResult::none();
    }

    selector.add_dialog = None;
    info!("Added month {}", label);
    apply_month(state, label);
    state.status = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_add_month_cancel(state: &mut AppState) -> UpdateResult {
    with_selector(state, |s| s.add_dialog = None);
    state.ui_mode = UiMode::MonthPicker;
    UpdateResult::none()
}
