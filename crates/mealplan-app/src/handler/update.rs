//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in the per-page submodules:
//! - `groceries`: grocery list and form
//! - `months`: month picker and add-month dialog
//! - `meals`: meal planner and meal editor
//! - `recipes`: explorer, recipe detail and recipe form
//! - `settings`: settings page and currency picker

use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::{AppPhase, AppState, Tab, UiMode};

use super::{groceries, keys::handle_key, meals, months, recipes, settings, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick { today } => {
            // New grocery items are dated with this, so follow midnight
            if today != state.today {
                info!("Date changed from {} to {}", state.today, today);
                state.today = today;
            }
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => select_tab(state, tab),
        Message::NextTab => select_tab(state, state.tab.next()),
        Message::PrevTab => select_tab(state, state.tab.prev()),

        // ─────────────────────────────────────────────────────────
        // Groceries
        // ─────────────────────────────────────────────────────────
        Message::GroceryUp => groceries::handle_move(state, -1),
        Message::GroceryDown => groceries::handle_move(state, 1),
        Message::ToggleGrocery => groceries::handle_toggle(state),
        Message::DeleteGrocery => groceries::handle_delete(state),
        Message::OpenGroceryForm => groceries::handle_open_form(state),
        Message::EditGrocery => groceries::handle_edit(state),
        Message::GroceryFormInput(c) => groceries::handle_form_input(state, c),
        Message::GroceryFormBackspace => groceries::handle_form_backspace(state),
        Message::GroceryFormNextField => groceries::handle_form_focus(state, true),
        Message::GroceryFormPrevField => groceries::handle_form_focus(state, false),
        Message::GroceryFormCycleCategory { forward } => {
            groceries::handle_form_cycle_category(state, forward)
        }
        Message::GroceryFormSubmit => groceries::handle_form_submit(state),
        Message::GroceryFormCancel => groceries::handle_form_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Month Picker
        // ─────────────────────────────────────────────────────────
        Message::OpenMonthPicker => months::handle_open(state),
        Message::MonthPickerInput(c) => months::handle_input(state, c),
        Message::MonthPickerBackspace => months::handle_backspace(state),
        Message::MonthPickerUp => months::handle_move(state, -1),
        Message::MonthPickerDown => months::handle_move(state, 1),
        Message::MonthPickerSelect => months::handle_select(state),
        Message::MonthPickerToggleDefault => months::handle_toggle_default(state),
        Message::CloseMonthPicker => months::handle_close(state),
        Message::OpenAddMonth => months::handle_open_add_month(state),
        Message::AddMonthPrevMonth => months::handle_add_month_step(state, |d| d.prev_month()),
        Message::AddMonthNextMonth => months::handle_add_month_step(state, |d| d.next_month()),
        Message::AddMonthPrevYear => months::handle_add_month_step(state, |d| d.prev_year()),
        Message::AddMonthNextYear => months::handle_add_month_step(state, |d| d.next_year()),
        Message::AddMonthConfirm => months::handle_add_month_confirm(state),
        Message::AddMonthCancel => months::handle_add_month_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Meals
        // ─────────────────────────────────────────────────────────
        Message::MoveMealCursor { days, types } => meals::handle_move_cursor(state, days, types),
        Message::NextWeek => meals::handle_step_week(state, true),
        Message::PrevWeek => meals::handle_step_week(state, false),
        Message::AddWeek => meals::handle_add_week(state),
        Message::RemoveMeal => meals::handle_remove_meal(state),
        Message::OpenMealEditor => meals::handle_open_editor(state),
        Message::MealEditorInput(c) => meals::handle_editor_input(state, c),
        Message::MealEditorBackspace => meals::handle_editor_backspace(state),
        Message::MealEditorCycleRecipe { forward } => meals::handle_editor_cycle(state, forward),
        Message::MealEditorSave => meals::handle_editor_save(state),
        Message::MealEditorRemove => meals::handle_editor_remove(state),
        Message::MealEditorCancel => meals::handle_editor_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Recipes
        // ─────────────────────────────────────────────────────────
        Message::ToggleRecipeTab => recipes::handle_toggle_tab(state),
        Message::StartRecipeSearch => {
            state.ui_mode = UiMode::RecipeSearch;
            UpdateResult::none()
        }
        Message::RecipeSearchInput(c) => recipes::handle_search_input(state, Some(c)),
        Message::RecipeSearchBackspace => recipes::handle_search_input(state, None),
        Message::ClearRecipeSearch => recipes::handle_clear_search(state),
        Message::EndRecipeSearch => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::RecipeUp => recipes::handle_move(state, -1),
        Message::RecipeDown => recipes::handle_move(state, 1),

        Message::OpenCategoryPicker => recipes::handle_open_category_picker(state),
        Message::CategoryPickerUp => {
            state.explorer.move_category_cursor(-1);
            UpdateResult::none()
        }
        Message::CategoryPickerDown => {
            state.explorer.move_category_cursor(1);
            UpdateResult::none()
        }
        Message::CategoryPickerSelect => recipes::handle_category_select(state),
        Message::CloseCategoryPicker => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::ExplorerDebounceElapsed { generation } => {
            recipes::handle_debounce_elapsed(state, generation)
        }
        Message::ExplorerResults { request, results } => {
            recipes::handle_results(state, request, results)
        }
        Message::ExplorerFailed { request, error } => {
            state.explorer.apply_failure(&request, &error);
            UpdateResult::none()
        }
        Message::LoadCategories => recipes::handle_load_categories(state),
        Message::CategoriesLoaded(categories) => {
            state.explorer.set_categories(categories);
            UpdateResult::none()
        }
        Message::CategoriesFailed(error) => {
            warn!("Failed to load recipe categories: {}", error);
            UpdateResult::none()
        }

        Message::OpenRecipe => recipes::handle_open_recipe(state),
        Message::RandomRecipe => recipes::handle_random_recipe(state),
        Message::RecipeDetailLoaded { request, recipe } => {
            recipes::handle_detail_loaded(state, request, recipe)
        }
        Message::RecipeDetailFailed { request, error } => {
            recipes::handle_detail_failed(state, request, &error)
        }
        Message::CloseRecipeDetail => {
            state.detail = None;
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::ScrollRecipeDetail(delta) => recipes::handle_scroll_detail(state, delta),
        Message::AddRecipeToPlan => recipes::handle_add_to_plan(state),

        Message::EditRecipe => recipes::handle_edit_recipe(state),
        Message::DeleteRecipe => recipes::handle_delete_recipe(state),
        Message::RecipeFormInput(c) => recipes::with_form(state, |f| f.insert_char(c)),
        Message::RecipeFormBackspace => recipes::with_form(state, |f| f.backspace()),
        Message::RecipeFormEnter => recipes::with_form(state, |f| f.enter()),
        Message::RecipeFormNextField => recipes::with_form(state, |f| f.focus = f.focus.next()),
        Message::RecipeFormPrevField => recipes::with_form(state, |f| f.focus = f.focus.prev()),
        Message::RecipeFormSave => recipes::handle_form_save(state),
        Message::RecipeFormCancel => recipes::handle_form_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Settings
        // ─────────────────────────────────────────────────────────
        Message::SettingsUp => {
            state.settings.move_cursor(-1);
            UpdateResult::none()
        }
        Message::SettingsDown => {
            state.settings.move_cursor(1);
            UpdateResult::none()
        }
        Message::SettingsActivate => settings::handle_activate(state),
        Message::ToggleDarkMode => settings::handle_toggle_dark_mode(state),
        Message::ToggleMetric => settings::handle_toggle_metric(state),
        Message::SignOut => settings::handle_sign_out(state),

        Message::OpenCurrencyPicker => settings::handle_open_currency_picker(state),
        Message::CurrencyPickerInput(c) => settings::handle_currency_input(state, Some(c)),
        Message::CurrencyPickerBackspace => settings::handle_currency_input(state, None),
        Message::CurrencyDebounceElapsed { generation } => {
            settings::handle_currency_debounce(state, generation)
        }
        Message::CurrencyPickerUp => settings::handle_currency_move(state, -1),
        Message::CurrencyPickerDown => settings::handle_currency_move(state, 1),
        Message::CurrencyPickerSelect => settings::handle_currency_select(state),
        Message::CloseCurrencyPicker => settings::handle_close_currency_picker(state),
    }
}

fn select_tab(state: &mut AppState, tab: Tab) -> UpdateResult {
    if state.tab != tab {
        debug!("Switching to {} tab", tab.title());
    }
    state.tab = tab;
    state.ui_mode = UiMode::Normal;
    state.status = None;
    UpdateResult::none()
}
