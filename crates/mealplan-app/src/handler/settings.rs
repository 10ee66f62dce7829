//! Settings page and currency picker handlers

use tracing::info;

use crate::settings_state::{CurrencyPicker, SettingsRow};
use crate::state::{AppState, UiMode};

use super::{DebounceTarget, UpdateAction, UpdateResult};

/// Toggle or open whatever row is highlighted
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    match state.settings.selected_row() {
        SettingsRow::DarkMode => handle_toggle_dark_mode(state),
        SettingsRow::MetricUnits => handle_toggle_metric(state),
        SettingsRow::Currency => handle_open_currency_picker(state),
        SettingsRow::SignOut => handle_sign_out(state),
    }
}

pub fn handle_toggle_dark_mode(state: &mut AppState) -> UpdateResult {
    state.settings.toggle_dark_mode();
    info!("Dark mode: {}", state.settings.dark_mode);
    UpdateResult::none()
}

pub fn handle_toggle_metric(state: &mut AppState) -> UpdateResult {
    state.settings.toggle_metric();
    info!("Metric units: {}", state.settings.use_metric);
    UpdateResult::none()
}

/// There is no account to sign out of; the request is only logged
pub fn handle_sign_out(state: &mut AppState) -> UpdateResult {
    info!("Sign out requested");
    state.set_status("Signed out");
    UpdateResult::none()
}

pub fn handle_open_currency_picker(state: &mut AppState) -> UpdateResult {
    state.settings.picker = Some(CurrencyPicker::new());
    state.ui_mode = UiMode::CurrencyPicker;
    UpdateResult::none()
}

/// Type (`Some`) or delete (`None`) a search character and debounce the filter
pub fn handle_currency_input(state: &mut AppState, c: Option<char>) -> UpdateResult {
    let Some(picker) = state.settings.picker.as_mut() else {
        return UpdateResult::none();
    };
    let generation = match c {
        Some(c) => picker.push_char(c),
        None => picker.pop_char(),
    };
    UpdateResult::action(UpdateAction::ScheduleDebounce {
        target: DebounceTarget::Currency,
        generation,
        delay: state.currency_debounce,
    })
}

pub fn handle_currency_debounce(state: &mut AppState, generation: u64) -> UpdateResult {
    if let Some(picker) = state.settings.picker.as_mut() {
        picker.debounce_elapsed(generation);
    }
    UpdateResult::none()
}

pub fn handle_currency_move(state: &mut AppState, delta: isize) -> UpdateResult {
    if let Some(picker) = state.settings.picker.as_mut() {
        picker.move_cursor(delta);
    }
    UpdateResult::none()
}

pub fn handle_currency_select(state: &mut AppState) -> UpdateResult {
    let Some(currency) = state.settings.picker.as_ref().and_then(|p| p.highlighted()) else {
        return UpdateResult::none();
    };
    state.settings.select_currency(currency);
    info!("Currency set to {}", currency.code);
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_close_currency_picker(state: &mut AppState) -> UpdateResult {
    state.settings.picker = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}
