//! Add / edit grocery item dialog

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use mealplan_app::groceries::{GroceryField, GroceryForm};

use super::{error_line, field_line, open_modal};
use crate::theme::Palette;

pub struct GroceryFormDialog<'a> {
    form: &'a GroceryForm,
    currency_symbol: &'a str,
    palette: &'a Palette,
}

impl<'a> GroceryFormDialog<'a> {
    pub fn new(form: &'a GroceryForm, currency_symbol: &'a str, palette: &'a Palette) -> Self {
        Self {
            form,
            currency_symbol,
            palette,
        }
    }
}

impl Widget for GroceryFormDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = open_modal(buf, area, 50, 10, self.form.title(), self.palette);
        let form = self.form;
        let focused = |field: GroceryField| form.focus == field;

        let price_label = format!("Price ({})", self.currency_symbol);
        let category = format!("< {} >", form.category.label());
        let lines = vec![
            field_line("Name", &form.name, focused(GroceryField::Name), self.palette),
            field_line(
                "Quantity",
                &form.quantity,
                focused(GroceryField::Quantity),
                self.palette,
            ),
            field_line(&price_label, &form.price, focused(GroceryField::Price), self.palette),
            field_line("Category", &category, focused(GroceryField::Category), self.palette),
            Line::default(),
            error_line(form.error.as_ref().map(|e| e.to_string()), self.palette),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
