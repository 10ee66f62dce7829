//! Status bar widget
//!
//! Shows the last status message, falling back to key hints for the current
//! tab and mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mealplan_app::explorer::RecipeTab;
use mealplan_app::{AppState, Tab, UiMode};

use crate::theme::Palette;

pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    /// `(key, action)` pairs for the current context
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode {
            UiMode::GroceryForm => vec![
                ("Tab", "next field"),
                ("←/→", "category"),
                ("Enter", "save"),
                ("Esc", "cancel"),
            ],
            UiMode::MonthPicker => vec![
                ("type", "search"),
                ("Enter", "select"),
                ("^D", "default"),
                ("^N", "add month"),
                ("Esc", "close"),
            ],
            UiMode::AddMonth => vec![
                ("←/→", "month"),
                ("↑/↓", "year"),
                ("Enter", "add"),
                ("Esc", "back"),
            ],
            UiMode::MealEditor => vec![
                ("type", "name"),
                ("↑/↓", "pick recipe"),
                ("Enter", "save"),
                ("^D", "remove"),
                ("Esc", "cancel"),
            ],
            UiMode::RecipeSearch => vec![("Enter", "done"), ("^U", "clear"), ("Esc", "done")],
            UiMode::CategoryPicker | UiMode::CurrencyPicker => {
                vec![("↑/↓", "move"), ("Enter", "select"), ("Esc", "close")]
            }
            UiMode::RecipeDetail => vec![
                ("↑/↓", "scroll"),
                ("p", "add to plan"),
                ("e", "edit"),
                ("Esc", "back"),
            ],
            UiMode::RecipeForm => vec![
                ("Tab", "next field"),
                ("Enter", "new line"),
                ("^S", "save"),
                ("Esc", "cancel"),
            ],
            UiMode::Normal => self.tab_hints(),
        }
    }

    fn tab_hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = match self.state.tab {
            Tab::Groceries => vec![
                ("Space", "toggle"),
                ("a", "add"),
                ("e", "edit"),
                ("d", "delete"),
                ("m", "month"),
            ],
            Tab::Meals => vec![
                ("Enter", "edit"),
                ("[/]", "week"),
                ("w", "add week"),
                ("d", "clear"),
                ("m", "month"),
            ],
            Tab::Recipes => match self.state.explorer.tab {
                RecipeTab::My => vec![
                    ("/", "search"),
                    ("Enter", "open"),
                    ("e", "edit"),
                    ("d", "delete"),
                    ("t", "explore"),
                ],
                RecipeTab::Explore => vec![
                    ("/", "search"),
                    ("c", "category"),
                    ("r", "random"),
                    ("Enter", "open"),
                    ("t", "my recipes"),
                ],
            },
            Tab::Settings => vec![("↑/↓", "move"), ("Enter", "change")],
        };
        hints.push(("q", "quit"));
        hints
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match &self.state.status {
            Some(message) => Line::from(vec![
                Span::raw(" "),
                Span::styled(message.clone(), self.palette.status_green()),
            ]),
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (key, action) in self.hints() {
                    spans.push(Span::styled(key, self.palette.keybinding()));
                    spans.push(Span::styled(
                        format!(" {}  ", action),
                        self.palette.text_secondary(),
                    ));
                }
                Line::from(spans)
            }
        };
        Paragraph::new(line).render(area, buf);
    }
}
