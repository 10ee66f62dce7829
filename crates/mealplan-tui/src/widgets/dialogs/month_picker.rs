//! Month picker with search, default marker and the add-month sub-dialog

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mealplan_app::month_selector::{AddMonthDialog, MonthSelector};

use super::{error_line, field_line, list_row, open_modal};
use crate::theme::Palette;
use crate::widgets::scroll_offset;

const PICKER_WIDTH: u16 = 44;
const PICKER_HEIGHT: u16 = 18;

pub struct MonthPickerDialog<'a> {
    selector: &'a MonthSelector,
    palette: &'a Palette,
}

impl<'a> MonthPickerDialog<'a> {
    pub fn new(selector: &'a MonthSelector, palette: &'a Palette) -> Self {
        Self { selector, palette }
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let inner = open_modal(buf, area, PICKER_WIDTH, PICKER_HEIGHT, "Select Month", self.palette);
        if inner.height < 3 {
            return;
        }

        let search = field_line("Search", &self.selector.query, true, self.palette);
        Paragraph::new(search).render(Rect { height: 1, ..inner }, buf);

        let list_area = Rect {
            y: inner.y + 2,
            height: inner.height - 2,
            ..inner
        };
        let months = self.selector.display_order();
        if months.is_empty() {
            Paragraph::new(Span::styled("  No matching months", self.palette.text_muted()))
                .render(list_area, buf);
            return;
        }

        let selected = self.selector.selected();
        let default = self.selector.default_month();
        let lines: Vec<Line<'static>> = months
            .iter()
            .enumerate()
            .map(|(i, month)| {
                let mut text = month.to_string();
                if *month == selected {
                    text.push_str("  ✓");
                }
                if Some(*month) == default {
                    text.push_str("  (default)");
                }
                list_row(text, i == self.selector.cursor, self.palette)
            })
            .collect();

        let offset = scroll_offset(self.selector.cursor, lines.len(), list_area.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(list_area, buf);
    }

    fn render_add_month(&self, dialog: &AddMonthDialog, area: Rect, buf: &mut Buffer) {
        let inner = open_modal(buf, area, 40, 8, "Add Month", self.palette);
        let years = dialog.year_range();
        let lines = vec![
            Line::from(vec![
                Span::styled("  Month: ", self.palette.text_secondary()),
                Span::styled(format!("< {} >", dialog.month), self.palette.accent_bold()),
            ]),
            Line::from(vec![
                Span::styled("  Year:  ", self.palette.text_secondary()),
                Span::styled(format!("< {} >", dialog.year), self.palette.accent_bold()),
                Span::styled(
                    format!("  ({}-{})", years.start(), years.end()),
                    self.palette.text_muted(),
                ),
            ]),
            Line::default(),
            error_line(
                dialog.error(self.selector).map(|e| e.to_string()),
                self.palette,
            ),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for MonthPickerDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.selector.add_dialog {
            Some(dialog) => self.render_add_month(dialog, area, buf),
            None => self.render_list(area, buf),
        }
    }
}
