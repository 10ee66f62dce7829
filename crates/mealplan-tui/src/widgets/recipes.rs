//! Recipes tab: search box and the "My Recipes" / "Explore" lists

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use mealplan_app::explorer::RecipeTab;
use mealplan_app::{AppState, UiMode};
use mealplan_core::{Recipe, RecipeSummary};

use super::{scroll_offset, truncate};
use crate::layout::split_top;
use crate::theme::Palette;

const SEARCH_HEIGHT: u16 = 4;
/// Lines per recipe card
const CARD_HEIGHT: usize = 3;

pub struct RecipeList<'a> {
    state: &'a AppState,
    palette: &'a Palette,
    focused: bool,
}

impl<'a> RecipeList<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self {
            state,
            palette,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let explorer = &self.state.explorer;
        let searching = self.state.ui_mode == UiMode::RecipeSearch;

        let block = self.palette.glass_block(searching).title(" Recipes ");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let selected = match explorer.tab {
            RecipeTab::My => 0,
            RecipeTab::Explore => 1,
        };
        Tabs::new([RecipeTab::My.title(), RecipeTab::Explore.title()])
            .select(selected)
            .style(self.palette.text_secondary())
            .highlight_style(self.palette.focused_selected())
            .render(Rect { height: 1, ..inner }, buf);

        if inner.height < 2 {
            return;
        }
        let mut spans = vec![Span::styled("/ ", self.palette.keybinding())];
        match (&explorer.category, explorer.query.is_empty()) {
            (Some(category), true) if explorer.tab == RecipeTab::Explore => {
                spans.push(Span::styled("Category: ", self.palette.text_secondary()));
                spans.push(Span::styled(category.clone(), self.palette.accent()));
            }
            (_, true) if !searching => {
                spans.push(Span::styled(
                    "Search recipes...",
                    self.palette.text_muted(),
                ));
            }
            _ => spans.push(Span::styled(
                explorer.query.clone(),
                self.palette.text_primary(),
            )),
        }
        if searching {
            spans.push(Span::styled("_", self.palette.keybinding()));
        }
        Paragraph::new(Line::from(spans)).render(
            Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            },
            buf,
        );
    }

    fn card_style(&self, selected: bool) -> ratatui::style::Style {
        if selected {
            self.palette.focused_selected()
        } else {
            self.palette.text_bold()
        }
    }

    fn local_card(&self, recipe: &Recipe, selected: bool, width: usize) -> [Line<'static>; 3] {
        [
            Line::from(Span::styled(
                truncate(&recipe.name, width),
                self.card_style(selected),
            )),
            Line::from(Span::styled(
                format!("{} · {} min", recipe.category, recipe.cook_time),
                self.palette.text_secondary(),
            )),
            Line::from(Span::styled(
                truncate(&recipe.card_summary(), width),
                self.palette.text_muted(),
            )),
        ]
    }

    fn remote_card(&self, recipe: &RecipeSummary, selected: bool, width: usize) -> [Line<'static>; 3] {
        let tags = if recipe.tags.is_empty() {
            String::new()
        } else {
            recipe.tags.join(", ")
        };
        [
            Line::from(Span::styled(
                truncate(&recipe.name, width),
                self.card_style(selected),
            )),
            Line::from(Span::styled(
                recipe.category.clone(),
                self.palette.text_secondary(),
            )),
            Line::from(Span::styled(truncate(&tags, width), self.palette.text_muted())),
        ]
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let explorer = &self.state.explorer;
        let block = self
            .palette
            .glass_block(self.focused)
            .title(format!(" {} ", explorer.tab.title()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        let mut lines: Vec<Line<'static>> = Vec::new();
        match explorer.tab {
            RecipeTab::My => {
                for (i, recipe) in self.state.visible_local_recipes().into_iter().enumerate() {
                    lines.extend(self.local_card(recipe, i == explorer.cursor, width));
                }
                if lines.is_empty() {
                    lines.push(Line::from(Span::styled(
                        "No recipes match your search.",
                        self.palette.text_secondary(),
                    )));
                }
            }
            RecipeTab::Explore => {
                for (i, recipe) in explorer.results.iter().enumerate() {
                    lines.extend(self.remote_card(recipe, i == explorer.cursor, width));
                }
                lines.push(self.explore_footer());
            }
        }

        let selected_line = explorer.cursor * CARD_HEIGHT + CARD_HEIGHT - 1;
        let offset = scroll_offset(selected_line, lines.len(), inner.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }

    /// Loading / end-of-list indicator under the explore results
    fn explore_footer(&self) -> Line<'static> {
        let explorer = &self.state.explorer;
        if explorer.is_loading {
            return Line::from(Span::styled("Loading...", self.palette.status_yellow()));
        }
        if self.state.offline {
            return Line::from(Span::styled(
                "Offline: remote recipes are unavailable.",
                self.palette.text_muted(),
            ));
        }
        if explorer.results.is_empty() {
            return Line::from(Span::styled(
                "No recipes found.",
                self.palette.text_secondary(),
            ));
        }
        if explorer.has_more {
            Line::from(Span::styled(
                "Scroll down for more",
                self.palette.text_muted(),
            ))
        } else {
            Line::from(Span::styled(
                format!("{} recipes", explorer.results.len()),
                self.palette.text_muted(),
            ))
        }
    }
}

impl Widget for RecipeList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (search_area, list_area) = split_top(area, SEARCH_HEIGHT.min(area.height));
        self.render_search(search_area, buf);
        self.render_list(list_area, buf);
    }
}
