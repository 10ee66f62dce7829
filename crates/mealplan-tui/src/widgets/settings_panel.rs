//! Settings tab: preference toggles, currency and sign out

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mealplan_app::settings_state::{SettingsRow, SettingsState};

use crate::theme::Palette;

const LABEL_WIDTH: usize = 20;

pub struct SettingsPanel<'a> {
    settings: &'a SettingsState,
    palette: &'a Palette,
    focused: bool,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(settings: &'a SettingsState, palette: &'a Palette) -> Self {
        Self {
            settings,
            palette,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn value(&self, row: SettingsRow) -> Span<'static> {
        let toggle = |on: bool| {
            if on {
                Span::styled("[on] ", self.palette.status_green())
            } else {
                Span::styled("[off]", self.palette.text_muted())
            }
        };
        match row {
            SettingsRow::DarkMode => toggle(self.settings.dark_mode),
            SettingsRow::MetricUnits => toggle(self.settings.use_metric),
            SettingsRow::Currency => {
                Span::styled(self.settings.currency.to_string(), self.palette.accent())
            }
            SettingsRow::SignOut => Span::raw(""),
        }
    }

    fn row_line(&self, index: usize, row: SettingsRow) -> Line<'static> {
        let selected = index == self.settings.cursor;
        let label_style = match (selected, row) {
            (true, _) => self.palette.focused_selected(),
            (false, SettingsRow::SignOut) => self.palette.status_red(),
            (false, _) => self.palette.text_primary(),
        };
        Line::from(vec![
            Span::styled(if selected { "▶ " } else { "  " }, self.palette.accent()),
            Span::styled(format!("{:<width$}", row.label(), width = LABEL_WIDTH), label_style),
            self.value(row),
        ])
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.palette.glass_block(self.focused).title(" Settings ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled("PREFERENCES", self.palette.accent_bold())),
            Line::default(),
        ];
        lines.extend(
            SettingsRow::ALL
                .iter()
                .enumerate()
                .map(|(i, row)| self.row_line(i, *row)),
        );
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{render_text, test_state};
    use crate::theme::palette::LIGHT;

    fn render(settings: &SettingsState) -> String {
        render_text(80, 12, |frame| {
            frame.render_widget(SettingsPanel::new(settings, &LIGHT), frame.area())
        })
    }

    #[test]
    fn test_renders_all_rows() {
        let state = test_state();
        let text = render(&state.settings);

        assert!(text.contains("Dark Mode"));
        assert!(text.contains("Use Metric Units"));
        assert!(text.contains("Currency"));
        assert!(text.contains("Sign Out"));
        assert!(text.contains("USD"));
    }

    #[test]
    fn test_toggle_values_follow_state() {
        let mut state = test_state();
        state.settings.dark_mode = true;
        state.settings.use_metric = false;
        let text = render(&state.settings);

        let dark_line = text.lines().find(|l| l.contains("Dark Mode")).unwrap();
        assert!(dark_line.contains("[on]"));
        let metric_line = text.lines().find(|l| l.contains("Use Metric Units")).unwrap();
        assert!(metric_line.contains("[off]"));
    }

    #[test]
    fn test_cursor_marks_selected_row() {
        let mut state = test_state();
        state.settings.cursor = 2;
        let text = render(&state.settings);

        let currency_line = text.lines().find(|l| l.contains("Currency")).unwrap();
        assert!(currency_line.contains("▶"));
    }
}
