//! Key event handlers for different UI modes

use crate::explorer::RecipeTab;
use crate::groceries::GroceryField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Tab, UiMode};

/// Lines moved by PageUp/PageDown in the recipe detail view
const DETAIL_PAGE: i16 = 10;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::GroceryForm => handle_key_grocery_form(state, key),
        UiMode::MonthPicker => handle_key_month_picker(key),
        UiMode::AddMonth => handle_key_add_month(key),
        UiMode::MealEditor => handle_key_meal_editor(key),
        UiMode::RecipeSearch => handle_key_recipe_search(key),
        UiMode::CategoryPicker => handle_key_category_picker(key),
        UiMode::RecipeDetail => handle_key_recipe_detail(state, key),
        UiMode::RecipeForm => handle_key_recipe_form(key),
        UiMode::CurrencyPicker => handle_key_currency_picker(key),
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => return Some(Message::Quit),
        InputKey::Tab => return Some(Message::NextTab),
        InputKey::BackTab => return Some(Message::PrevTab),
        InputKey::Char('1') => return Some(Message::SelectTab(Tab::Groceries)),
        InputKey::Char('2') => return Some(Message::SelectTab(Tab::Meals)),
        InputKey::Char('3') => return Some(Message::SelectTab(Tab::Recipes)),
        InputKey::Char('4') => return Some(Message::SelectTab(Tab::Settings)),
        _ => {}
    }

    match state.tab {
        Tab::Groceries => handle_key_groceries(key),
        Tab::Meals => handle_key_meals(key),
        Tab::Recipes => handle_key_recipes(state, key),
        Tab::Settings => handle_key_settings(key),
    }
}

fn handle_key_groceries(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::GroceryUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::GroceryDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleGrocery),
        InputKey::Char('a') => Some(Message::OpenGroceryForm),
        InputKey::Char('e') => Some(Message::EditGrocery),
        InputKey::Char('d') | InputKey::Delete => Some(Message::DeleteGrocery),
        InputKey::Char('m') => Some(Message::OpenMonthPicker),
        _ => None,
    }
}

fn handle_key_meals(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::MoveMealCursor { days: -1, types: 0 }),
        InputKey::Right | InputKey::Char('l') => Some(Message::MoveMealCursor { days: 1, types: 0 }),
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveMealCursor { days: 0, types: -1 }),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveMealCursor { days: 0, types: 1 }),
        InputKey::Enter | InputKey::Char('e') => Some(Message::OpenMealEditor),
        InputKey::Char('d') | InputKey::Delete => Some(Message::RemoveMeal),
        InputKey::Char(']') => Some(Message::NextWeek),
        InputKey::Char('[') => Some(Message::PrevWeek),
        InputKey::Char('w') => Some(Message::AddWeek),
        InputKey::Char('m') => Some(Message::OpenMonthPicker),
        _ => None,
    }
}

fn handle_key_recipes(state: &AppState, key: InputKey) -> Option<Message> {
    let explore = state.explorer.tab == RecipeTab::Explore;
    match key {
        InputKey::Char('t') => Some(Message::ToggleRecipeTab),
        InputKey::Char('/') => Some(Message::StartRecipeSearch),
        InputKey::Up | InputKey::Char('k') => Some(Message::RecipeUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::RecipeDown),
        InputKey::Enter => Some(Message::OpenRecipe),
        InputKey::Esc if !state.explorer.query.is_empty() => Some(Message::ClearRecipeSearch),

        // Explore only
        InputKey::Char('c') if explore => Some(Message::OpenCategoryPicker),
        InputKey::Char('r') if explore => Some(Message::RandomRecipe),

        // My Recipes only
        InputKey::Char('e') if !explore => Some(Message::EditRecipe),
        InputKey::Char('d') | InputKey::Delete if !explore => Some(Message::DeleteRecipe),
        _ => None,
    }
}

fn handle_key_settings(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SettingsUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::SettingsDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::SettingsActivate),
        _ => None,
    }
}

/// Handle key events in the grocery add/edit form
fn handle_key_grocery_form(state: &AppState, key: InputKey) -> Option<Message> {
    let on_category = state
        .groceries
        .form
        .as_ref()
        .is_some_and(|f| f.focus == GroceryField::Category);

    match key {
        InputKey::Esc => Some(Message::GroceryFormCancel),
        InputKey::Enter => Some(Message::GroceryFormSubmit),
        InputKey::Tab | InputKey::Down => Some(Message::GroceryFormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::GroceryFormPrevField),
        InputKey::Right | InputKey::Char(' ') if on_category => {
            Some(Message::GroceryFormCycleCategory { forward: true })
        }
        InputKey::Left if on_category => Some(Message::GroceryFormCycleCategory { forward: false }),
        InputKey::Backspace => Some(Message::GroceryFormBackspace),
        InputKey::Char(c) if !on_category => Some(Message::GroceryFormInput(c)),
        _ => None,
    }
}

/// Handle key events in the month picker (typing searches)
fn handle_key_month_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseMonthPicker),
        InputKey::Enter => Some(Message::MonthPickerSelect),
        InputKey::Up => Some(Message::MonthPickerUp),
        InputKey::Down => Some(Message::MonthPickerDown),
        InputKey::CharCtrl('d') => Some(Message::MonthPickerToggleDefault),
        InputKey::CharCtrl('n') => Some(Message::OpenAddMonth),
        InputKey::Backspace => Some(Message::MonthPickerBackspace),
        InputKey::Char(c) => Some(Message::MonthPickerInput(c)),
        _ => None,
    }
}

fn handle_key_add_month(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::AddMonthCancel),
        InputKey::Enter => Some(Message::AddMonthConfirm),
        InputKey::Left | InputKey::Char('h') => Some(Message::AddMonthPrevMonth),
        InputKey::Right | InputKey::Char('l') => Some(Message::AddMonthNextMonth),
        InputKey::Up | InputKey::Char('k') => Some(Message::AddMonthNextYear),
        InputKey::Down | InputKey::Char('j') => Some(Message::AddMonthPrevYear),
        _ => None,
    }
}

/// Handle key events in the meal editor (typing edits the name)
fn handle_key_meal_editor(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::MealEditorCancel),
        InputKey::Enter => Some(Message::MealEditorSave),
        InputKey::Down => Some(Message::MealEditorCycleRecipe { forward: true }),
        InputKey::Up => Some(Message::MealEditorCycleRecipe { forward: false }),
        InputKey::CharCtrl('d') => Some(Message::MealEditorRemove),
        InputKey::Backspace => Some(Message::MealEditorBackspace),
        InputKey::Char(c) => Some(Message::MealEditorInput(c)),
        _ => None,
    }
}

fn handle_key_recipe_search(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter => Some(Message::EndRecipeSearch),
        InputKey::CharCtrl('u') => Some(Message::ClearRecipeSearch),
        InputKey::Backspace => Some(Message::RecipeSearchBackspace),
        InputKey::Char(c) => Some(Message::RecipeSearchInput(c)),
        _ => None,
    }
}

fn handle_key_category_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseCategoryPicker),
        InputKey::Enter => Some(Message::CategoryPickerSelect),
        InputKey::Up | InputKey::Char('k') => Some(Message::CategoryPickerUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CategoryPickerDown),
        _ => None,
    }
}

fn handle_key_recipe_detail(state: &AppState, key: InputKey) -> Option<Message> {
    let is_local = state
        .detail
        .as_ref()
        .and_then(|d| d.view.as_ref())
        .is_some_and(|v| v.is_local());

    match key {
        InputKey::Esc | InputKey::Char('q') | InputKey::Backspace => {
            Some(Message::CloseRecipeDetail)
        }
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollRecipeDetail(-1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollRecipeDetail(1)),
        InputKey::PageUp => Some(Message::ScrollRecipeDetail(-DETAIL_PAGE)),
        InputKey::PageDown => Some(Message::ScrollRecipeDetail(DETAIL_PAGE)),
        InputKey::Char('p') => Some(Message::AddRecipeToPlan),
        InputKey::Char('e') if is_local => Some(Message::EditRecipe),
        _ => None,
    }
}

/// Handle key events in the recipe edit form
fn handle_key_recipe_form(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::RecipeFormCancel),
        InputKey::CharCtrl('s') => Some(Message::RecipeFormSave),
        InputKey::Enter => Some(Message::RecipeFormEnter),
        InputKey::Tab => Some(Message::RecipeFormNextField),
        InputKey::BackTab => Some(Message::RecipeFormPrevField),
        InputKey::Backspace => Some(Message::RecipeFormBackspace),
        InputKey::Char(c) => Some(Message::RecipeFormInput(c)),
        _ => None,
    }
}

/// Handle key events in the currency picker (typing searches)
fn handle_key_currency_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseCurrencyPicker),
        InputKey::Enter => Some(Message::CurrencyPickerSelect),
        InputKey::Up => Some(Message::CurrencyPickerUp),
        InputKey::Down => Some(Message::CurrencyPickerDown),
        InputKey::Backspace => Some(Message::CurrencyPickerBackspace),
        InputKey::Char(c) => Some(Message::CurrencyPickerInput(c)),
        _ => None,
    }
}
