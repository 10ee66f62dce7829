//! Full-screen recipe detail: ingredients, numbered steps and source link

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use mealplan_app::recipe_book::RecipeDetailState;
use mealplan_core::RecipeView;

use crate::theme::Palette;

pub struct RecipeDetailView<'a> {
    detail: &'a RecipeDetailState,
    palette: &'a Palette,
}

impl<'a> RecipeDetailView<'a> {
    pub fn new(detail: &'a RecipeDetailState, palette: &'a Palette) -> Self {
        Self { detail, palette }
    }

    fn section(&self, title: &str) -> Line<'static> {
        Line::from(Span::styled(title.to_uppercase(), self.palette.accent_bold()))
    }

    fn recipe_lines(&self, view: &RecipeView) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let mut meta = vec![Span::styled(
            view.category().to_string(),
            self.palette.text_secondary(),
        )];
        match view {
            RecipeView::Local(recipe) => {
                meta.push(Span::styled(
                    format!(" · {} min", recipe.cook_time),
                    self.palette.text_secondary(),
                ));
            }
            RecipeView::Remote(recipe) if !recipe.area.is_empty() => {
                meta.push(Span::styled(
                    format!(" · {}", recipe.area),
                    self.palette.text_secondary(),
                ));
            }
            RecipeView::Remote(_) => {}
        }
        lines.push(Line::from(meta));
        lines.push(Line::default());

        lines.push(self.section("Ingredients"));
        for ingredient in view.ingredient_lines() {
            lines.push(Line::from(vec![
                Span::styled("  • ", self.palette.accent()),
                Span::styled(ingredient, self.palette.text_primary()),
            ]));
        }
        lines.push(Line::default());

        lines.push(self.section("Instructions"));
        for (i, step) in view.instruction_lines().into_iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", i + 1), self.palette.accent()),
                Span::styled(step, self.palette.text_primary()),
            ]));
        }

        if let Some(source) = view.source() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Source: ", self.palette.text_secondary()),
                Span::styled(source.to_string(), self.palette.accent()),
            ]));
        }
        lines
    }
}

impl Widget for RecipeDetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let title = match &self.detail.view {
            Some(view) => format!(" {} ", view.name()),
            None => " Recipe ".to_string(),
        };
        let block = self.palette.glass_block(true).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match &self.detail.view {
            Some(view) => self.recipe_lines(view),
            None if self.detail.is_loading() => vec![Line::from(Span::styled(
                "Loading recipe...",
                self.palette.status_yellow(),
            ))],
            None if self.detail.not_found => vec![Line::from(Span::styled(
                "Recipe not found",
                self.palette.status_red(),
            ))],
            None => Vec::new(),
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.detail.scroll, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_text;
    use crate::theme::palette::DARK;
    use mealplan_api::test_utils::test_detail;
    use mealplan_app::recipe_book::DetailRequest;
    use mealplan_core::seed_recipes;

    fn render(detail: &RecipeDetailState) -> String {
        render_text(80, 30, |frame| {
            frame.render_widget(RecipeDetailView::new(detail, &DARK), frame.area())
        })
    }

    #[test]
    fn test_local_recipe_shows_ingredients_and_numbered_steps() {
        let detail = RecipeDetailState::local(seed_recipes().remove(0));
        let text = render(&detail);

        assert!(text.contains("Avocado Toast"));
        assert!(text.contains("INGREDIENTS"));
        assert!(text.contains("• 1 avocado"));
        assert!(text.contains("1. Toast bread until golden and firm."));
        assert!(text.contains("INSTRUCTIONS"));
    }

    #[test]
    fn test_remote_recipe_renders_name() {
        let detail = RecipeDetailState {
            view: Some(RecipeView::Remote(test_detail("52772", "Teriyaki Chicken"))),
            ..Default::default()
        };
        let text = render(&detail);
        assert!(text.contains("Teriyaki Chicken"));
    }

    #[test]
    fn test_loading_state() {
        let detail = RecipeDetailState::loading(DetailRequest::Random);
        assert!(render(&detail).contains("Loading recipe..."));
    }

    #[test]
    fn test_not_found_state() {
        let detail = RecipeDetailState {
            not_found: true,
            ..Default::default()
        };
        assert!(render(&detail).contains("Recipe not found"));
    }
}
