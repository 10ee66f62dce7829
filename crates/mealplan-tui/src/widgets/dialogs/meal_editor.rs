//! Meal slot editor: free-text name or a recipe from the local book

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mealplan_app::meal_planner::MealEditor;
use mealplan_core::Recipe;

use super::{field_line, list_row, open_modal};
use crate::theme::Palette;
use crate::widgets::scroll_offset;

pub struct MealEditorDialog<'a> {
    editor: &'a MealEditor,
    recipes: &'a [Recipe],
    palette: &'a Palette,
}

impl<'a> MealEditorDialog<'a> {
    pub fn new(editor: &'a MealEditor, recipes: &'a [Recipe], palette: &'a Palette) -> Self {
        Self {
            editor,
            recipes,
            palette,
        }
    }
}

impl Widget for MealEditorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = open_modal(buf, area, 50, 16, self.editor.title(), self.palette);
        if inner.height < 4 {
            return;
        }

        let linked = match &self.editor.recipe_id {
            Some(_) => Span::styled("  Linked to a recipe", self.palette.status_green()),
            None => Span::styled("  Custom meal", self.palette.text_muted()),
        };
        let header = vec![
            field_line("Meal", &self.editor.name, true, self.palette),
            Line::from(linked),
            Line::default(),
            Line::from(Span::styled("  RECIPES", self.palette.accent_bold())),
        ];
        Paragraph::new(header).render(Rect { height: 4, ..inner }, buf);

        let list_area = Rect {
            y: inner.y + 4,
            height: inner.height - 4,
            ..inner
        };
        let cursor = self.editor.recipe_cursor;
        let lines: Vec<Line<'static>> = self
            .recipes
            .iter()
            .enumerate()
            .map(|(i, recipe)| {
                list_row(
                    format!("{} ({})", recipe.name, recipe.category),
                    cursor == Some(i),
                    self.palette,
                )
            })
            .collect();
        let offset = scroll_offset(cursor.unwrap_or(0), lines.len(), list_area.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(list_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_text;
    use crate::theme::palette::DARK;
    use mealplan_core::{seed_recipes, DayOfWeek, MealType};

    fn render(editor: &MealEditor, recipes: &[Recipe]) -> String {
        render_text(80, 24, |frame| {
            frame.render_widget(MealEditorDialog::new(editor, recipes, &DARK), frame.area())
        })
    }

    #[test]
    fn test_empty_slot_editor() {
        let editor = MealEditor::open(DayOfWeek::Tuesday, MealType::Dinner, None);
        let text = render(&editor, &seed_recipes());

        assert!(text.contains("Tuesday - Dinner"));
        assert!(text.contains("Custom meal"));
        assert!(text.contains("Greek Salad (Lunch)"));
    }

    #[test]
    fn test_cycled_recipe_is_linked_and_highlighted() {
        let recipes = seed_recipes();
        let mut editor = MealEditor::open(DayOfWeek::Monday, MealType::Lunch, None);
        editor.cycle_recipe(&recipes, true);
        let text = render(&editor, &recipes);

        assert!(text.contains("Meal: Avocado Toast_"));
        assert!(text.contains("Linked to a recipe"));
        assert!(text.contains("▶ Avocado Toast (Breakfast)"));
    }
}
