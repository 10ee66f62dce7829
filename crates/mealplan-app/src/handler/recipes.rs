//! Recipe page handlers: explorer search and paging, recipe detail, and the
//! local recipe form

use tracing::{debug, info, warn};

use mealplan_core::{RecipeDetail, RecipeSummary, RecipeView};

use crate::explorer::{ExplorerRequest, RecipeTab};
use crate::message::Message;
use crate::recipe_book::{DetailRequest, RecipeDetailState, RecipeForm};
use crate::state::{AppState, UiMode};

use super::{DebounceTarget, UpdateAction, UpdateResult};

fn schedule_explorer_debounce(state: &AppState, generation: u64) -> UpdateResult {
    UpdateResult::action(UpdateAction::ScheduleDebounce {
        target: DebounceTarget::Explorer,
        generation,
        delay: state.explorer_debounce,
    })
}

/// Switch between "My Recipes" and "Explore". Entering Explore re-arms the
/// debounce when the inputs changed since the last search, and loads
/// categories the first time.
pub fn handle_toggle_tab(state: &mut AppState) -> UpdateResult {
    state.explorer.tab = state.explorer.tab.toggled();
    state.explorer.cursor = 0;
    debug!("Recipe tab: {}", state.explorer.tab.title());

    if state.explorer.tab != RecipeTab::Explore {
        return UpdateResult::none();
    }

    let mut result = if state.explorer.needs_refresh() {
        let generation = state.explorer.refresh();
        schedule_explorer_debounce(state, generation)
    } else {
        debug!(
            "Keeping {} explore result(s) from page {}",
            state.explorer.result_count(),
            state.explorer.page
        );
        UpdateResult::none()
    };
    if !state.explorer.categories_requested {
        result.message = Some(Message::LoadCategories);
    }
    result
}

/// Request the category list once
pub fn handle_load_categories(state: &mut AppState) -> UpdateResult {
    if state.explorer.categories_requested {
        return UpdateResult::none();
    }
    state.explorer.categories_requested = true;
    UpdateResult::action(UpdateAction::FetchCategories)
}

/// Type (`Some`) or delete (`None`) a search character. The local list
/// filters immediately; the Explore tab debounces a remote search.
pub fn handle_search_input(state: &mut AppState, c: Option<char>) -> UpdateResult {
    let generation = match c {
        Some(c) => state.explorer.push_query_char(c),
        None => state.explorer.pop_query_char(),
    };
    if state.explorer.tab == RecipeTab::Explore {
        schedule_explorer_debounce(state, generation)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_clear_search(state: &mut AppState) -> UpdateResult {
    let generation = state.explorer.set_query("");
    if state.explorer.tab == RecipeTab::Explore {
        schedule_explorer_debounce(state, generation)
    } else {
        UpdateResult::none()
    }
}

/// Move the list cursor; nearing the end of the Explore list loads the next page
pub fn handle_move(state: &mut AppState, delta: isize) -> UpdateResult {
    let len = state.recipe_row_count();
    let explorer = &mut state.explorer;
    explorer.cursor = if len == 0 {
        0
    } else {
        (explorer.cursor as isize + delta).clamp(0, len as isize - 1) as usize
    };

    match explorer.load_more() {
        Some(request) => UpdateResult::action(UpdateAction::FetchExplorerPage { request }),
        None => UpdateResult::none(),
    }
}

pub fn handle_open_category_picker(state: &mut AppState) -> UpdateResult {
    if state.explorer.tab != RecipeTab::Explore {
        return UpdateResult::none();
    }
    state.ui_mode = UiMode::CategoryPicker;
    if state.explorer.categories.is_empty() {
        // Retry a failed or never-issued load
        state.explorer.categories_requested = false;
        return UpdateResult::message(Message::LoadCategories);
    }
    UpdateResult::none()
}

pub fn handle_category_select(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    let Some(name) = state.explorer.highlighted_category().map(|c| c.name.clone()) else {
        return UpdateResult::none();
    };
    let generation = state.explorer.select_category(&name);
    schedule_explorer_debounce(state, generation)
}

pub fn handle_debounce_elapsed(state: &mut AppState, generation: u64) -> UpdateResult {
    match state.explorer.debounce_elapsed(generation) {
        Some(request) => UpdateResult::action(UpdateAction::FetchExplorerPage { request }),
        None => UpdateResult::none(),
    }
}

pub fn handle_results(
    state: &mut AppState,
    request: ExplorerRequest,
    results: Vec<RecipeSummary>,
) -> UpdateResult {
    if state.explorer.apply_results(&request, results) {
        debug!(
            "Explorer page {} applied, {} result(s), has_more={}",
            request.page,
            state.explorer.result_count(),
            state.explorer.has_more
        );
    }
    UpdateResult::none()
}

fn open_detail(state: &mut AppState, detail: RecipeDetailState) {
    state.detail = Some(detail);
    state.ui_mode = UiMode::RecipeDetail;
}

fn fetch_detail(state: &mut AppState, request: DetailRequest) -> UpdateResult {
    open_detail(state, RecipeDetailState::loading(request.clone()));
    UpdateResult::action(UpdateAction::FetchRecipeDetail { request })
}

/// Open the highlighted recipe: local ones show immediately, remote ones are
/// looked up by id
pub fn handle_open_recipe(state: &mut AppState) -> UpdateResult {
    match state.explorer.tab {
        RecipeTab::My => {
            let recipe = state
                .visible_local_recipes()
                .get(state.explorer.cursor)
                .map(|r| (*r).clone());
            if let Some(recipe) = recipe {
                open_detail(state, RecipeDetailState::local(recipe));
            }
            UpdateResult::none()
        }
        RecipeTab::Explore => {
            let Some(id) = state.explorer.selected_result().map(|r| r.id.clone()) else {
                return UpdateResult::none();
            };
            fetch_detail(state, DetailRequest::Lookup(id))
        }
    }
}

pub fn handle_random_recipe(state: &mut AppState) -> UpdateResult {
    fetch_detail(state, DetailRequest::Random)
}

/// The open detail view, if it is still waiting for `request`
fn pending_detail<'a>(
    state: &'a mut AppState,
    request: &DetailRequest,
) -> Option<&'a mut RecipeDetailState> {
    state
        .detail
        .as_mut()
        .filter(|d| d.pending.as_ref() == Some(request))
}

pub fn handle_detail_loaded(
    state: &mut AppState,
    request: DetailRequest,
    recipe: Option<RecipeDetail>,
) -> UpdateResult {
    let Some(detail) = pending_detail(state, &request) else {
        debug!("Dropping stale recipe detail for {:?}", request);
        return UpdateResult::none();
    };
    detail.pending = None;
    match recipe {
        Some(recipe) => detail.view = Some(RecipeView::Remote(recipe)),
        None => detail.not_found = true,
    }
    UpdateResult::none()
}

pub fn handle_detail_failed(
    state: &mut AppState,
    request: DetailRequest,
    error: &str,
) -> UpdateResult {
    let Some(detail) = pending_detail(state, &request) else {
        return UpdateResult::none();
    };
    warn!("Recipe lookup {:?} failed: {}", request, error);
    detail.pending = None;
    detail.not_found = true;
    UpdateResult::none()
}

pub fn handle_scroll_detail(state: &mut AppState, delta: i16) -> UpdateResult {
    if let Some(detail) = state.detail.as_mut() {
        detail.scroll = detail.scroll.saturating_add_signed(delta);
    }
    UpdateResult::none()
}

/// Put the viewed recipe into the meal slot highlighted on the meals tab
pub fn handle_add_to_plan(state: &mut AppState) -> UpdateResult {
    let Some(view) = state.detail.as_ref().and_then(|d| d.view.as_ref()) else {
        return UpdateResult::none();
    };
    let name = view.name().to_string();
    let recipe_id = view.id().to_string();

    let meals = &mut state.meals;
    let (day, meal_type) = (meals.cursor_day, meals.cursor_type);
    let week = meals.planner.active_week();
    let month = meals.planner.selected_month();
    if meals
        .planner
        .assign_meal(day, meal_type, &name, Some(recipe_id))
        .is_some()
    {
        info!("Planned {:?} for {} {} (week {}, {})", name, day, meal_type, week, month);
        state.set_status(format!(
            "Added {} to {} - {} (Week {})",
            name, day, meal_type, week
        ));
    }
    UpdateResult::none()
}

/// Local recipe the form should edit: the one being viewed, else the
/// highlighted row of "My Recipes"
fn recipe_to_edit(state: &AppState) -> Option<RecipeForm> {
    if let Some(detail) = &state.detail {
        return match &detail.view {
            Some(RecipeView::Local(recipe)) => Some(RecipeForm::for_recipe(recipe)),
            _ => None,
        };
    }
    if state.explorer.tab != RecipeTab::My {
        return None;
    }
    state
        .visible_local_recipes()
        .get(state.explorer.cursor)
        .map(|r| RecipeForm::for_recipe(r))
}

pub fn handle_edit_recipe(state: &mut AppState) -> UpdateResult {
    if let Some(form) = recipe_to_edit(state) {
        state.recipe_form = Some(form);
        state.ui_mode = UiMode::RecipeForm;
    }
    UpdateResult::none()
}

pub fn handle_delete_recipe(state: &mut AppState) -> UpdateResult {
    if state.explorer.tab != RecipeTab::My {
        return UpdateResult::none();
    }
    let Some(id) = state
        .visible_local_recipes()
        .get(state.explorer.cursor)
        .map(|r| r.id.clone())
    else {
        return UpdateResult::none();
    };
    if let Some(recipe) = state.recipe_book.delete(&id) {
        info!("Deleted recipe {} {:?}", recipe.id, recipe.name);
        state.set_status(format!("Deleted {}", recipe.name));
    }
    let len = state.visible_local_recipes().len();
    state.explorer.cursor = state.explorer.cursor.min(len.saturating_sub(1));
    UpdateResult::none()
}

/// Apply an edit to the open recipe form
pub fn with_form(state: &mut AppState, f: impl FnOnce(&mut RecipeForm)) -> UpdateResult {
    if let Some(form) = state.recipe_form.as_mut() {
        f(form);
    }
    UpdateResult::none()
}

/// Mode to return to when the form closes
fn close_form(state: &mut AppState) {
    state.recipe_form = None;
    state.ui_mode = if state.detail.is_some() {
        UiMode::RecipeDetail
    } else {
        UiMode::Normal
    };
}

pub fn handle_form_save(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.recipe_form.as_mut() else {
        return UpdateResult::none();
    };
    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(e) => {
            debug!("Recipe form rejected: {}", e);
            form.error = Some(e);
            return UpdateResult::none();
        }
    };
    let id = form.recipe_id.clone();

    if state.recipe_book.update(&id, draft) {
        info!("Updated recipe {}", id);
        // Keep an open detail view in step with the edit
        if let (Some(detail), Some(recipe)) = (state.detail.as_mut(), state.recipe_book.find(&id))
        {
            if detail.view.as_ref().is_some_and(|v| v.is_local() && v.id() == id) {
                detail.view = Some(RecipeView::Local(recipe.clone()));
            }
        }
    } else {
        warn!("Recipe {} vanished before the edit was saved", id);
    }

    close_form(state);
    UpdateResult::none()
}

pub fn handle_form_cancel(state: &mut AppState) -> UpdateResult {
    close_form(state);
    UpdateResult::none()
}
