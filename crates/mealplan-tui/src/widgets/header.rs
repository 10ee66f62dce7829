//! Header bar: app title, month context and the tab bar

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use mealplan_app::{AppState, Tab};

use crate::theme::Palette;

const APP_TITLE: &str = " mealplan ";

/// Main header showing the app title and the four tabs
pub struct MainHeader<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn tab_titles(&self) -> Vec<Line<'static>> {
        Tab::ALL
            .iter()
            .map(|tab| Line::from(format!(" {} {} ", tab.index() + 1, tab.title())))
            .collect()
    }

    /// Right-hand context: the selected month on month-aware tabs, offline marker
    fn context(&self) -> Line<'static> {
        let mut spans = Vec::new();
        if let Some(selector) = self.state.active_month_selector() {
            spans.push(Span::styled(
                selector.selected().to_string(),
                self.palette.text_secondary(),
            ));
        }
        if self.state.offline {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("offline", self.palette.status_yellow()));
        }
        spans.push(Span::raw(" "));
        Line::from(spans).right_aligned()
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.palette.glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [title_area, tabs_area, context_area] = Layout::horizontal([
            Constraint::Length(APP_TITLE.len() as u16),
            Constraint::Min(0),
            Constraint::Length(24),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(APP_TITLE, self.palette.accent_bold())).render(title_area, buf);

        Tabs::new(self.tab_titles())
            .select(self.state.tab.index())
            .style(self.palette.text_secondary())
            .highlight_style(self.palette.focused_selected())
            .divider(Span::styled("│", self.palette.text_muted()))
            .render(tabs_area, buf);

        Paragraph::new(self.context()).render(context_area, buf);
    }
}
