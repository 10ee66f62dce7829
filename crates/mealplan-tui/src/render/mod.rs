//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use mealplan_app::{AppState, Tab, UiMode};

use super::{layout, widgets};
use crate::theme::Palette;
use crate::widgets::dialogs;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: everything drawn is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let palette = Palette::for_mode(state.settings.dark_mode);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.deepest_bg)),
        area,
    );

    let areas = layout::create(area);
    frame.render_widget(widgets::MainHeader::new(state, palette), areas.header);

    let focused = state.ui_mode == UiMode::Normal || state.ui_mode == UiMode::RecipeSearch;
    match state.tab {
        Tab::Groceries => frame.render_widget(
            widgets::GroceryView::new(state, palette).focused(focused),
            areas.content,
        ),
        Tab::Meals => frame.render_widget(
            widgets::MealPlanView::new(state, palette).focused(focused),
            areas.content,
        ),
        Tab::Recipes => frame.render_widget(
            widgets::RecipeList::new(state, palette).focused(focused),
            areas.content,
        ),
        Tab::Settings => frame.render_widget(
            widgets::SettingsPanel::new(&state.settings, palette).focused(focused),
            areas.content,
        ),
    }

    // The detail view stays underneath the recipe form while editing from it
    if let Some(detail) = &state.detail {
        if matches!(state.ui_mode, UiMode::RecipeDetail | UiMode::RecipeForm) {
            frame.render_widget(widgets::RecipeDetailView::new(detail, palette), areas.content);
        }
    }

    render_overlay(frame, state, palette);

    frame.render_widget(widgets::StatusBar::new(state, palette), areas.status);
}

/// Modal dialog for the current mode, if any
fn render_overlay(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let area = frame.area();
    match state.ui_mode {
        UiMode::GroceryForm => {
            if let Some(form) = &state.groceries.form {
                frame.render_widget(
                    dialogs::GroceryFormDialog::new(form, state.currency().symbol, palette),
                    area,
                );
            }
        }
        UiMode::MonthPicker | UiMode::AddMonth => {
            if let Some(selector) = state.active_month_selector() {
                frame.render_widget(dialogs::MonthPickerDialog::new(selector, palette), area);
            }
        }
        UiMode::MealEditor => {
            if let Some(editor) = &state.meals.editor {
                frame.render_widget(
                    dialogs::MealEditorDialog::new(editor, state.recipe_book.recipes(), palette),
                    area,
                );
            }
        }
        UiMode::CategoryPicker => {
            frame.render_widget(
                dialogs::CategoryPickerDialog::new(&state.explorer, palette),
                area,
            );
        }
        UiMode::RecipeForm => {
            if let Some(form) = &state.recipe_form {
                frame.render_widget(dialogs::RecipeFormDialog::new(form, palette), area);
            }
        }
        UiMode::CurrencyPicker => {
            if let Some(picker) = &state.settings.picker {
                frame.render_widget(
                    dialogs::CurrencyPickerDialog::new(picker, state.currency(), palette),
                    area,
                );
            }
        }
        UiMode::Normal | UiMode::RecipeSearch | UiMode::RecipeDetail => {}
    }
}
