//! Tests for handler module

use std::time::Duration;

use chrono::NaiveDate;

use super::*;
use crate::config::Settings;
use crate::explorer::{ExplorerQuery, RecipeTab};
use crate::form::FormError;
use crate::groceries::GroceryField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::recipe_book::{DetailRequest, RecipeField};
use crate::state::{AppPhase, AppState, Tab, UiMode};
use mealplan_api::test_utils::{test_category, test_detail, test_summaries};
use mealplan_core::{DayOfWeek, GroceryCategory, MealType, RecipeView};

fn test_state() -> AppState {
    AppState::new(
        &Settings::default(),
        NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
        false,
    )
}

/// Feed a key through handle_key and update, following up messages, and
/// collect the actions produced
fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    send(state, Message::Key(key))
}

fn send(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn type_text(state: &mut AppState, text: &str) -> Vec<UpdateAction> {
    text.chars()
        .flat_map(|c| press(state, InputKey::Char(c)))
        .collect()
}

// ─────────────────────────────────────────────────────────
// Global
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = test_state();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_quits_in_normal_mode() {
    let state = test_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_ctrl_c_quits_from_any_mode() {
    let mut state = test_state();
    state.ui_mode = UiMode::RecipeForm;
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_q_is_text_inside_forms() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    assert_eq!(state.ui_mode, UiMode::GroceryForm);
    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    assert_eq!(state.groceries.form.as_ref().unwrap().name, "q");
}

#[test]
fn test_tab_navigation() {
    let mut state = test_state();
    press(&mut state, InputKey::Tab);
    assert_eq!(state.tab, Tab::Meals);
    press(&mut state, InputKey::BackTab);
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.tab, Tab::Settings);
    press(&mut state, InputKey::Char('3'));
    assert_eq!(state.tab, Tab::Recipes);
}

// ─────────────────────────────────────────────────────────
// Groceries
// ─────────────────────────────────────────────────────────

#[test]
fn test_add_grocery_through_form() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    type_text(&mut state, "Milk");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "2");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "3.50");
    press(&mut state, InputKey::Tab);
    assert_eq!(
        state.groceries.form.as_ref().unwrap().focus,
        GroceryField::Category
    );
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.groceries.form.is_none());
    let milk = state.groceries.list.find_by_name("Milk").unwrap();
    assert_eq!(milk.quantity, "2");
    assert_eq!(milk.price.as_deref(), Some("3.50"));
    assert_eq!(milk.category, GroceryCategory::Dairy);
    assert!(!milk.is_checked);
    assert_eq!(milk.date, state.today);

    let summary = state
        .groceries
        .list
        .summary_for_month(state.groceries.months.selected());
    assert_eq!(summary.total_items, 2);
    assert_eq!(summary.formatted_total(), "42.94");
}

#[test]
fn test_item_added_after_midnight_gets_new_date() {
    let mut state = test_state();
    let next_day = NaiveDate::from_ymd_opt(2025, 4, 16).unwrap();
    send(&mut state, Message::Tick { today: next_day });
    assert_eq!(state.today, next_day);

    press(&mut state, InputKey::Char('a'));
    type_text(&mut state, "Bread");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "1");
    press(&mut state, InputKey::Enter);

    let bread = state.groceries.list.find_by_name("Bread").unwrap();
    assert_eq!(bread.date, next_day);
    // The seed item keeps its original date
    let apples = state.groceries.list.find_by_name("Apples").unwrap();
    assert_eq!(apples.date, NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
}

#[test]
fn test_tick_on_same_day_changes_nothing() {
    let mut state = test_state();
    let today = state.today;
    let actions = send(&mut state, Message::Tick { today });
    assert!(actions.is_empty());
    assert_eq!(state.today, today);
}

#[test]
fn test_submit_without_quantity_keeps_form_open() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    type_text(&mut state, "Bread");
    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::GroceryForm);
    let form = state.groceries.form.as_ref().unwrap();
    assert_eq!(form.error, Some(FormError::MissingField("Quantity")));
    assert!(state.groceries.list.find_by_name("Bread").is_none());
}

#[test]
fn test_edit_grocery_preserves_checked_and_date() {
    let mut state = test_state();
    press(&mut state, InputKey::Char(' '));
    assert!(state.groceries.list.items()[0].is_checked);

    press(&mut state, InputKey::Char('e'));
    let form = state.groceries.form.as_ref().unwrap();
    assert_eq!(form.title(), "Edit Item");
    assert_eq!(form.name, "Apples");

    press(&mut state, InputKey::Backspace);
    type_text(&mut state, "ricots");
    press(&mut state, InputKey::Enter);

    let item = &state.groceries.list.items()[0];
    assert_eq!(item.name, "Applericots");
    assert!(item.is_checked);
    assert_eq!(state.groceries.list.len(), 1);
}

#[test]
fn test_toggle_twice_is_identity_and_delete() {
    let mut state = test_state();
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Enter);
    assert!(!state.groceries.list.items()[0].is_checked);

    press(&mut state, InputKey::Char('d'));
    assert!(state.groceries.list.is_empty());
    assert_eq!(state.groceries.cursor, 0);
    // Nothing left to act on
    press(&mut state, InputKey::Char('d'));
    press(&mut state, InputKey::Char('e'));
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_category_cycles_only_on_category_field() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('a'));
    assert!(handle_key(&state, InputKey::Right).is_none());
    assert!(matches!(
        handle_key(&state, InputKey::Char(' ')),
        Some(Message::GroceryFormInput(' '))
    ));
}

// ─────────────────────────────────────────────────────────
// Month picker
// ─────────────────────────────────────────────────────────

#[test]
fn test_month_picker_search_and_select() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('m'));
    assert_eq!(state.ui_mode, UiMode::MonthPicker);

    type_text(&mut state, "march 2024");
    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.groceries.months.selected().to_string(), "March 2024");
    // The April seed item is not in March
    assert!(state.groceries.visible_items().is_empty());
}

#[test]
fn test_month_picker_toggle_default() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('m'));
    press(&mut state, InputKey::Down);
    let highlighted = state.groceries.months.highlighted().unwrap();
    press(&mut state, InputKey::CharCtrl('d'));
    assert_eq!(state.groceries.months.default_month(), Some(highlighted));
    press(&mut state, InputKey::CharCtrl('d'));
    assert_eq!(state.groceries.months.default_month(), None);
}

#[test]
fn test_add_existing_month_is_refused() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('m'));
    press(&mut state, InputKey::CharCtrl('n'));
    assert_eq!(state.ui_mode, UiMode::AddMonth);

    // Preset to April 2025, which is in the catalog
    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::AddMonth);
    assert_eq!(state.status.as_deref(), Some("April 2025 already exists"));
}

#[test]
fn test_add_new_month_selects_it() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Char('m'));
    press(&mut state, InputKey::CharCtrl('n'));
    press(&mut state, InputKey::Up);
    press(&mut state, InputKey::Up);
    press(&mut state, InputKey::Up); // clamped at +2
    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.meals.months.selected().to_string(), "April 2027");
    assert_eq!(state.meals.planner.selected_month().to_string(), "April 2027");
    assert_eq!(state.meals.planner.weeks(), &[1, 2]);
    // The grocery tab's selector is independent
    assert_eq!(state.groceries.months.selected().to_string(), "April 2025");
}

#[test]
fn test_cancel_add_month_returns_to_picker() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('m'));
    press(&mut state, InputKey::CharCtrl('n'));
    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode, UiMode::MonthPicker);
    assert!(state.groceries.months.add_dialog.is_none());
}

// ─────────────────────────────────────────────────────────
// Meals
// ─────────────────────────────────────────────────────────

#[test]
fn test_meal_editor_save_and_remove() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Down);
    assert_eq!(state.meals.cursor_day, DayOfWeek::Tuesday);
    assert_eq!(state.meals.cursor_type, MealType::Lunch);

    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::MealEditor);
    type_text(&mut state, "Soup");
    press(&mut state, InputKey::Enter);
    assert_eq!(
        state
            .meals
            .planner
            .meal(DayOfWeek::Tuesday, MealType::Lunch)
            .map(|m| m.name.as_str()),
        Some("Soup")
    );

    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::CharCtrl('d'));
    assert!(state
        .meals
        .planner
        .meal(DayOfWeek::Tuesday, MealType::Lunch)
        .is_none());
}

#[test]
fn test_meal_editor_assigns_recipe() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    let meal = state
        .meals
        .planner
        .meal(DayOfWeek::Monday, MealType::Breakfast)
        .unwrap();
    assert_eq!(meal.name, "Greek Salad");
    assert_eq!(meal.recipe_id.as_deref(), Some("2"));
}

#[test]
fn test_add_week_until_cap() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Char('w'));
    assert_eq!(state.meals.planner.active_week(), 3);
    press(&mut state, InputKey::Char('w'));
    press(&mut state, InputKey::Char('w'));
    assert_eq!(state.meals.planner.weeks(), &[1, 2, 3, 4]);
    assert_eq!(
        state.status.as_deref(),
        Some("A month can have at most 4 weeks")
    );

    press(&mut state, InputKey::Char('['));
    assert_eq!(state.meals.planner.active_week(), 3);
}

// ─────────────────────────────────────────────────────────
// Recipes
// ─────────────────────────────────────────────────────────

fn explore(state: &mut AppState) -> Vec<UpdateAction> {
    press(state, InputKey::Char('3'));
    press(state, InputKey::Char('t'))
}

fn schedules_explorer_debounce(actions: &[UpdateAction]) -> bool {
    actions.iter().any(|a| {
        matches!(
            a,
            UpdateAction::ScheduleDebounce {
                target: DebounceTarget::Explorer,
                delay,
                ..
            } if *delay == Duration::from_millis(500)
        )
    })
}

#[test]
fn test_entering_explore_loads_categories_once() {
    let mut state = test_state();
    let actions = explore(&mut state);
    assert_eq!(state.explorer.tab, RecipeTab::Explore);
    assert!(actions.contains(&UpdateAction::FetchCategories));
    // Blank inputs have nothing to search for
    assert!(!schedules_explorer_debounce(&actions));

    press(&mut state, InputKey::Char('t'));
    let again = press(&mut state, InputKey::Char('t'));
    assert!(!again.contains(&UpdateAction::FetchCategories));
}

#[test]
fn test_query_typed_in_my_recipes_is_searched_on_entering_explore() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('3'));
    press(&mut state, InputKey::Char('/'));
    assert!(type_text(&mut state, "salad").is_empty());
    press(&mut state, InputKey::Enter);

    let actions = press(&mut state, InputKey::Char('t'));
    assert!(schedules_explorer_debounce(&actions));
}

#[test]
fn test_reentering_explore_keeps_loaded_pages() {
    let mut state = test_state();
    explore(&mut state);
    let generation = state.explorer.set_query("beef");
    let request = state.explorer.debounce_elapsed(generation).unwrap();
    send(
        &mut state,
        Message::ExplorerResults {
            request,
            results: test_summaries("Beef", "Beef", 30),
        },
    );
    let generation = state.explorer.generation();

    press(&mut state, InputKey::Char('t'));
    let actions = press(&mut state, InputKey::Char('t'));

    assert!(!schedules_explorer_debounce(&actions));
    assert_eq!(state.explorer.generation(), generation);
    assert_eq!(state.explorer.result_count(), 20);
    assert_eq!(state.explorer.page, 1);
}

#[test]
fn test_only_last_search_generation_fetches() {
    let mut state = test_state();
    explore(&mut state);
    press(&mut state, InputKey::Char('/'));
    let actions = type_text(&mut state, "beef");
    let generations: Vec<u64> = actions
        .iter()
        .filter_map(|a| match a {
            UpdateAction::ScheduleDebounce { generation, .. } => Some(*generation),
            _ => None,
        })
        .collect();
    assert_eq!(generations.len(), 4);

    // Earlier timers are stale
    for g in &generations[..3] {
        assert!(send(&mut state, Message::ExplorerDebounceElapsed { generation: *g }).is_empty());
    }
    let actions = send(
        &mut state,
        Message::ExplorerDebounceElapsed {
            generation: generations[3],
        },
    );
    match actions.as_slice() {
        [UpdateAction::FetchExplorerPage { request }] => {
            assert_eq!(request.query, ExplorerQuery::Search("beef".into()));
            assert_eq!(request.page, 1);
        }
        other => panic!("unexpected actions: {:?}", other),
    }
}

#[test]
fn test_scrolling_near_end_loads_next_page() {
    let mut state = test_state();
    explore(&mut state);
    let generation = state.explorer.set_query("beef");
    let request = state.explorer.debounce_elapsed(generation).unwrap();
    send(
        &mut state,
        Message::ExplorerResults {
            request,
            results: test_summaries("Beef", "Beef", 30),
        },
    );
    assert_eq!(state.explorer.result_count(), 20);

    let mut fetched = Vec::new();
    for _ in 0..19 {
        fetched.extend(press(&mut state, InputKey::Down));
    }
    let pages: Vec<u32> = fetched
        .iter()
        .filter_map(|a| match a {
            UpdateAction::FetchExplorerPage { request } => Some(request.page),
            _ => None,
        })
        .collect();
    // One load while the first is in flight
    assert_eq!(pages, vec![2]);
}

#[test]
fn test_local_search_filters_without_debounce() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('3'));
    press(&mut state, InputKey::Char('/'));
    let actions = type_text(&mut state, "curry");
    assert!(actions.is_empty());
    assert_eq!(state.recipe_row_count(), 1);

    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode, UiMode::Normal);
    press(&mut state, InputKey::Esc);
    assert_eq!(state.explorer.query, "");
    assert_eq!(state.recipe_row_count(), 5);
}

#[test]
fn test_category_selection_clears_query() {
    let mut state = test_state();
    explore(&mut state);
    state.explorer.set_query("pie");
    send(
        &mut state,
        Message::CategoriesLoaded(vec![
            test_category("1", "Beef"),
            test_category("2", "Dessert"),
        ]),
    );

    press(&mut state, InputKey::Char('c'));
    assert_eq!(state.ui_mode, UiMode::CategoryPicker);
    press(&mut state, InputKey::Down);
    let actions = press(&mut state, InputKey::Enter);

    assert_eq!(state.explorer.category.as_deref(), Some("Dessert"));
    assert_eq!(state.explorer.query, "");
    assert_eq!(actions.len(), 1);
}

#[test]
fn test_open_local_recipe_shows_immediately() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('3'));
    let actions = press(&mut state, InputKey::Enter);
    assert!(actions.is_empty());
    assert_eq!(state.ui_mode, UiMode::RecipeDetail);
    let detail = state.detail.as_ref().unwrap();
    assert!(matches!(detail.view, Some(RecipeView::Local(ref r)) if r.name == "Avocado Toast"));
}

#[test]
fn test_open_remote_recipe_lookup_flow() {
    let mut state = test_state();
    explore(&mut state);
    let generation = state.explorer.set_query("teri");
    let request = state.explorer.debounce_elapsed(generation).unwrap();
    send(
        &mut state,
        Message::ExplorerResults {
            request,
            results: test_summaries("Teriyaki", "Chicken", 1),
        },
    );

    let actions = press(&mut state, InputKey::Enter);
    let request = match actions.as_slice() {
        [UpdateAction::FetchRecipeDetail { request }] => request.clone(),
        other => panic!("unexpected actions: {:?}", other),
    };
    assert!(state.detail.as_ref().unwrap().is_loading());

    send(
        &mut state,
        Message::RecipeDetailLoaded {
            request,
            recipe: Some(test_detail("1", "Teriyaki 1")),
        },
    );
    let detail = state.detail.as_ref().unwrap();
    assert!(!detail.is_loading());
    assert_eq!(detail.view.as_ref().map(|v| v.name()), Some("Teriyaki 1"));
}

#[test]
fn test_missing_or_failed_recipe_is_not_found() {
    let mut state = test_state();
    explore(&mut state);
    press(&mut state, InputKey::Char('r'));
    send(
        &mut state,
        Message::RecipeDetailFailed {
            request: DetailRequest::Random,
            error: "timeout".into(),
        },
    );
    assert!(state.detail.as_ref().unwrap().not_found);

    press(&mut state, InputKey::Esc);
    assert!(state.detail.is_none());
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_stale_detail_response_is_ignored() {
    let mut state = test_state();
    explore(&mut state);
    press(&mut state, InputKey::Char('r'));
    send(
        &mut state,
        Message::RecipeDetailLoaded {
            request: DetailRequest::Lookup("999".into()),
            recipe: Some(test_detail("999", "Other")),
        },
    );
    let detail = state.detail.as_ref().unwrap();
    assert!(detail.is_loading());
    assert!(detail.view.is_none());
}

#[test]
fn test_add_recipe_to_plan_uses_meal_cursor() {
    let mut state = test_state();
    state.meals.cursor_day = DayOfWeek::Friday;
    state.meals.cursor_type = MealType::Dinner;

    press(&mut state, InputKey::Char('3'));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Char('p'));

    let meal = state
        .meals
        .planner
        .meal(DayOfWeek::Friday, MealType::Dinner)
        .unwrap();
    assert_eq!(meal.name, "Chicken Stir Fry");
    assert_eq!(meal.recipe_id.as_deref(), Some("3"));
    assert_eq!(
        state.status.as_deref(),
        Some("Added Chicken Stir Fry to Friday - Dinner (Week 1)")
    );
}

#[test]
fn test_edit_recipe_from_detail_updates_view() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('3'));
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Char('e'));
    assert_eq!(state.ui_mode, UiMode::RecipeForm);

    {
        let form = state.recipe_form.as_mut().unwrap();
        form.focus = RecipeField::CookTime;
        form.cook_time.clear();
    }
    type_text(&mut state, "12");
    press(&mut state, InputKey::CharCtrl('s'));

    assert_eq!(state.ui_mode, UiMode::RecipeDetail);
    assert_eq!(state.recipe_book.find("1").unwrap().cook_time, 12);
    match state.detail.as_ref().and_then(|d| d.view.as_ref()) {
        Some(RecipeView::Local(recipe)) => assert_eq!(recipe.cook_time, 12),
        other => panic!("unexpected view: {:?}", other),
    }
}

#[test]
fn test_recipe_form_rejects_bad_cook_time() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('3'));
    press(&mut state, InputKey::Char('e'));
    state.recipe_form.as_mut().unwrap().focus = RecipeField::CookTime;
    type_text(&mut state, "x");
    press(&mut state, InputKey::CharCtrl('s'));

    assert_eq!(state.ui_mode, UiMode::RecipeForm);
    assert!(matches!(
        state.recipe_form.as_ref().unwrap().error,
        Some(FormError::InvalidCookTime(_))
    ));
}

#[test]
fn test_delete_recipe() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('3'));
    press(&mut state, InputKey::End);
    for _ in 0..4 {
        press(&mut state, InputKey::Down);
    }
    press(&mut state, InputKey::Char('d'));
    assert_eq!(state.recipe_book.recipes().len(), 4);
    assert!(state.recipe_book.find("5").is_none());
    assert_eq!(state.explorer.cursor, 3);
}

// ─────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────

#[test]
fn test_settings_toggles() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('4'));
    press(&mut state, InputKey::Enter);
    assert!(state.settings.dark_mode);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Char(' '));
    assert!(!state.settings.use_metric);
}

#[test]
fn test_currency_picker_debounced_search_and_select() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('4'));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::CurrencyPicker);

    let actions = type_text(&mut state, "yen");
    let last = match actions.last() {
        Some(UpdateAction::ScheduleDebounce {
            target: DebounceTarget::Currency,
            generation,
            delay,
        }) => {
            assert_eq!(*delay, Duration::from_millis(300));
            *generation
        }
        other => panic!("unexpected action: {:?}", other),
    };
    send(
        &mut state,
        Message::CurrencyDebounceElapsed { generation: last },
    );
    let codes: Vec<&str> = state
        .settings
        .picker
        .as_ref()
        .unwrap()
        .filtered()
        .iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(codes, vec!["JPY"]);

    press(&mut state, InputKey::Enter);
    assert_eq!(state.currency().code, "JPY");
    assert!(state.settings.picker.is_none());
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_sign_out_is_a_logged_no_op() {
    let mut state = test_state();
    press(&mut state, InputKey::Char('4'));
    for _ in 0..3 {
        press(&mut state, InputKey::Down);
    }
    let actions = press(&mut state, InputKey::Enter);
    assert!(actions.is_empty());
    assert!(!state.should_quit());
    assert_eq!(state.status.as_deref(), Some("Signed out"));
}
