//! Single-choice pickers: recipe category and currency

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mealplan_app::explorer::ExplorerState;
use mealplan_app::settings_state::CurrencyPicker;
use mealplan_core::Currency;

use super::{field_line, list_row, open_modal};
use crate::theme::Palette;
use crate::widgets::scroll_offset;

fn render_rows(lines: Vec<Line<'static>>, cursor: usize, area: Rect, buf: &mut Buffer) {
    let offset = scroll_offset(cursor, lines.len(), area.height as usize);
    Paragraph::new(lines)
        .scroll((offset as u16, 0))
        .render(area, buf);
}

/// Category filter for the explore list
pub struct CategoryPickerDialog<'a> {
    explorer: &'a ExplorerState,
    palette: &'a Palette,
}

impl<'a> CategoryPickerDialog<'a> {
    pub fn new(explorer: &'a ExplorerState, palette: &'a Palette) -> Self {
        Self { explorer, palette }
    }
}

impl Widget for CategoryPickerDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = open_modal(buf, area, 40, 18, "Categories", self.palette);

        if self.explorer.categories.is_empty() {
            Paragraph::new(Span::styled(
                "  Loading categories...",
                self.palette.status_yellow(),
            ))
            .render(inner, buf);
            return;
        }

        let active = self.explorer.category.as_deref();
        let lines = self
            .explorer
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let mut text = category.name.clone();
                if Some(category.name.as_str()) == active {
                    text.push_str("  ✓");
                }
                list_row(text, i == self.explorer.category_cursor, self.palette)
            })
            .collect();
        render_rows(lines, self.explorer.category_cursor, inner, buf);
    }
}

/// Searchable currency list
pub struct CurrencyPickerDialog<'a> {
    picker: &'a CurrencyPicker,
    current: &'static Currency,
    palette: &'a Palette,
}

impl<'a> CurrencyPickerDialog<'a> {
    pub fn new(picker: &'a CurrencyPicker, current: &'static Currency, palette: &'a Palette) -> Self {
        Self {
            picker,
            current,
            palette,
        }
    }
}

impl Widget for CurrencyPickerDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = open_modal(buf, area, 48, 18, "Currency", self.palette);
        if inner.height < 3 {
            return;
        }

        let search = field_line("Search", &self.picker.query, true, self.palette);
        Paragraph::new(search).render(Rect { height: 1, ..inner }, buf);

        let list_area = Rect {
            y: inner.y + 2,
            height: inner.height - 2,
            ..inner
        };
        let currencies = self.picker.filtered();
        if currencies.is_empty() {
            Paragraph::new(Span::styled(
                "  No matching currencies",
                self.palette.text_muted(),
            ))
            .render(list_area, buf);
            return;
        }

        let lines = currencies
            .iter()
            .enumerate()
            .map(|(i, currency)| {
                let mut text = currency.to_string();
                if currency.code == self.current.code {
                    text.push_str("  ✓");
                }
                list_row(text, i == self.picker.cursor, self.palette)
            })
            .collect();
        render_rows(lines, self.picker.cursor, list_area, buf);
    }
}
