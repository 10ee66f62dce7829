//! Edit form for a local recipe

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mealplan_app::recipe_book::{RecipeField, RecipeForm};

use super::{error_line, field_line, open_modal};
use crate::theme::Palette;
use crate::widgets::scroll_offset;

pub struct RecipeFormDialog<'a> {
    form: &'a RecipeForm,
    palette: &'a Palette,
}

impl<'a> RecipeFormDialog<'a> {
    pub fn new(form: &'a RecipeForm, palette: &'a Palette) -> Self {
        Self { form, palette }
    }

    fn multiline_field(&self, field: RecipeField, lines: &mut Vec<Line<'static>>) {
        let focused = self.form.focus == field;
        let label_style = if focused {
            self.palette.accent_bold()
        } else {
            self.palette.text_secondary()
        };
        lines.push(Line::from(vec![
            Span::styled(if focused { "▶ " } else { "  " }, self.palette.accent()),
            Span::styled(format!("{}:", field.label()), label_style),
        ]));

        let value = self.form.field(field);
        let mut rows: Vec<&str> = value.split('\n').collect();
        if rows.last() == Some(&"") && !focused {
            rows.pop();
        }
        let last = rows.len().saturating_sub(1);
        for (i, row) in rows.into_iter().enumerate() {
            let mut spans = vec![Span::styled(format!("    {}", row), self.palette.text_primary())];
            if focused && i == last {
                spans.push(Span::styled("_", self.palette.keybinding()));
            }
            lines.push(Line::from(spans));
        }
    }
}

impl Widget for RecipeFormDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = area.height.saturating_sub(4).max(12);
        let inner = open_modal(buf, area, 70, height, "Edit Recipe", self.palette);

        let mut lines = Vec::new();
        let mut focus_line = 0;
        for field in RecipeField::ALL {
            if field == self.form.focus {
                focus_line = lines.len();
            }
            if field.is_multiline() {
                self.multiline_field(field, &mut lines);
            } else {
                lines.push(field_line(
                    field.label(),
                    self.form.field(field),
                    self.form.focus == field,
                    self.palette,
                ));
            }
        }
        lines.push(Line::default());
        lines.push(error_line(
            self.form.error.as_ref().map(|e| e.to_string()),
            self.palette,
        ));

        // Keep the focused field's label and a few of its lines in view
        let anchor = (focus_line + 3).min(lines.len().saturating_sub(1));
        let offset = scroll_offset(anchor, lines.len(), inner.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}
