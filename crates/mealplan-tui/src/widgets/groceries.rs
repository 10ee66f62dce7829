//! Grocery list tab: summary card and items grouped by category

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use mealplan_app::AppState;
use mealplan_core::GroceryItem;

use super::scroll_offset;
use crate::layout::split_top;
use crate::theme::Palette;

const SUMMARY_HEIGHT: u16 = 5;

pub struct GroceryView<'a> {
    state: &'a AppState,
    palette: &'a Palette,
    focused: bool,
}

impl<'a> GroceryView<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self {
            state,
            palette,
            focused: true,
        }
    }

    /// Render with inactive borders while a dialog is on top
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_summary(&self, area: Rect, buf: &mut Buffer) {
        let groceries = &self.state.groceries;
        let month = groceries.months.selected();
        let summary = groceries.list.summary_for_month(month);
        let symbol = self.state.currency().symbol;

        let block = self
            .palette
            .glass_block(false)
            .title(format!(" Shopping List · {} ", month));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let counts = Line::from(vec![
            Span::styled(
                format!("{} of {} items", summary.checked_items, summary.total_items),
                self.palette.text_primary(),
            ),
            Span::styled("  ·  Total ", self.palette.text_secondary()),
            Span::styled(
                format!("{}{}", symbol, summary.formatted_total()),
                self.palette.accent_bold(),
            ),
        ]);
        Paragraph::new(counts).render(Rect { height: 1, ..inner }, buf);

        if inner.height >= 2 {
            let gauge_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            Gauge::default()
                .gauge_style(self.palette.status_green())
                .percent(summary.percent_complete.min(100) as u16)
                .label(format!("{}% complete", summary.percent_complete))
                .render(gauge_area, buf);
        }
    }

    fn item_lines(&self, item: &GroceryItem, selected: bool) -> [Line<'static>; 2] {
        let checkbox = if item.is_checked { "[x]" } else { "[ ]" };
        let name_style = if selected {
            self.palette.focused_selected()
        } else if item.is_checked {
            self.palette.text_done()
        } else {
            self.palette.text_primary()
        };
        let marker = if selected { "▶ " } else { "  " };
        [
            Line::from(vec![
                Span::styled(marker, self.palette.accent()),
                Span::styled(format!("{} {}", checkbox, item.name), name_style),
            ]),
            Line::from(Span::styled(
                format!("      {}", item.detail_line(self.state.currency().symbol)),
                self.palette.text_secondary(),
            )),
        ]
    }

    fn render_items(&self, area: Rect, buf: &mut Buffer) {
        let groceries = &self.state.groceries;
        let month = groceries.months.selected();

        let block = self.palette.glass_block(self.focused).title(" Items ");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let groups = groceries.list.groups_for_month(month);
        if groups.is_empty() {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("No items for {}.", month),
                    self.palette.text_secondary(),
                )),
                Line::from(Span::styled(
                    "Press a to add one.",
                    self.palette.text_muted(),
                )),
            ])
            .render(inner, buf);
            return;
        }

        let mut lines = Vec::new();
        let mut selected_line = 0;
        let mut index = 0;
        for group in &groups {
            let mut header = vec![Span::styled(
                group.category.label().to_uppercase(),
                self.palette.accent_bold(),
            )];
            if let Some(total) = group.display_total() {
                header.push(Span::styled(
                    format!("  {}{}", self.state.currency().symbol, total),
                    self.palette.text_secondary(),
                ));
            }
            lines.push(Line::from(header));

            for item in &group.items {
                let selected = index == groceries.cursor;
                if selected {
                    selected_line = lines.len() + 1;
                }
                lines.extend(self.item_lines(item, selected));
                index += 1;
            }
        }

        let offset = scroll_offset(selected_line, lines.len(), inner.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}

impl Widget for GroceryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (summary_area, items_area) = split_top(area, SUMMARY_HEIGHT.min(area.height));
        self.render_summary(summary_area, buf);
        self.render_items(items_area, buf);
    }
}
