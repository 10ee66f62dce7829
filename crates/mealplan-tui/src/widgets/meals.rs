//! Meal planner tab: week selector and the day × meal grid

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Tabs, Widget},
};

use mealplan_app::AppState;
use mealplan_core::{DayOfWeek, MealType};

use super::truncate;
use crate::layout::split_top;
use crate::theme::Palette;

const DAY_COLUMN_WIDTH: u16 = 11;
const EMPTY_SLOT: &str = "—";

pub struct MealPlanView<'a> {
    state: &'a AppState,
    palette: &'a Palette,
    focused: bool,
}

impl<'a> MealPlanView<'a> {
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

    fn render_weeks(&self, area: Rect, buf: &mut Buffer) {
        let planner = &self.state.meals.planner;
        let block = self
            .palette
            .glass_block(false)
            .title(format!(" Meal Plan · {} ", planner.selected_month()));
        let inner = block.inner(area);
        block.render(area, buf);

        let weeks = planner.weeks();
        let titles: Vec<Line<'static>> = weeks.iter().map(|w| Line::from(format!("Week {}", w))).collect();
        let selected = weeks.iter().position(|w| *w == planner.active_week());

        Tabs::new(titles)
            .select(selected)
            .style(self.palette.text_secondary())
            .highlight_style(self.palette.focused_selected())
            .divider(Span::styled("│", self.palette.text_muted()))
            .render(inner, buf);
    }

    fn slot_cell(&self, day: DayOfWeek, meal_type: MealType, width: usize) -> Cell<'static> {
        let meals = &self.state.meals;
        let selected = meals.cursor_day == day && meals.cursor_type == meal_type;

        let (text, style) = match meals.planner.meal(day, meal_type) {
            Some(meal) => {
                let marker = if meal.recipe_id.is_some() { "◆ " } else { "" };
                (
                    format!("{}{}", marker, truncate(&meal.name, width.saturating_sub(2))),
                    self.palette.text_primary(),
                )
            }
            None => (EMPTY_SLOT.to_string(), self.palette.text_muted()),
        };

        let style = if selected {
            self.palette.focused_selected()
        } else {
            style
        };
        Cell::from(text).style(style)
    }

    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let block = self
            .palette
            .glass_block(self.focused)
            .title(format!(" Week {} ", self.state.meals.planner.active_week()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        if self.state.meals.planner.active_week_plan().is_none() {
            Paragraph::new(Span::styled(
                "No weeks planned. Press w to add one.",
                self.palette.text_secondary(),
            ))
            .render(inner, buf);
            return;
        }

        let slot_width = (inner.width.saturating_sub(DAY_COLUMN_WIDTH) / 3) as usize;
        let header = Row::new(
            std::iter::once(Cell::from(""))
                .chain(MealType::ALL.iter().map(|t| Cell::from(t.label()))),
        )
        .style(self.palette.accent_bold());

        let rows = DayOfWeek::ALL.iter().map(|day| {
            let mut cells = vec![Cell::from(day.label()).style(self.palette.text_secondary())];
            cells.extend(
                MealType::ALL
                    .iter()
                    .map(|meal_type| self.slot_cell(*day, *meal_type, slot_width)),
            );
            Row::new(cells).height(2)
        });

        Table::new(
            rows,
            [
                Constraint::Length(DAY_COLUMN_WIDTH),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ],
        )
        .header(header)
        .render(inner, buf);
    }
}

impl Widget for MealPlanView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (weeks_area, grid_area) = split_top(area, 3.min(area.height));
        self.render_weeks(weeks_area, buf);
        self.render_grid(grid_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{render_text, test_state};
    use crate::theme::palette::DARK;

    fn render(state: &AppState) -> String {
        render_text(100, 24, |frame| {
            frame.render_widget(MealPlanView::new(state, &DARK), frame.area())
        })
    }

    #[test]
    fn test_renders_grid_with_seeded_meal() {
        let state = test_state();
        let text = render(&state);

        assert!(text.contains("Meal Plan · April 2025"));
        assert!(text.contains("Week 1"));
        assert!(text.contains("Breakfast"));
        assert!(text.contains("Dinner"));
        assert!(text.contains("Monday"));
        assert!(text.contains("Sunday"));
        assert!(text.contains("Brown Stew Chicken"));
    }

    #[test]
    fn test_empty_slots_render_placeholder() {
        let state = test_state();
        let text = render(&state);
        assert!(text.contains(EMPTY_SLOT));
    }

    #[test]
    fn test_added_week_appears_in_tabs() {
        let mut state = test_state();
        let week = state.meals.planner.add_week().unwrap();
        state.meals.planner.select_week(week);

        let text = render(&state);
        assert!(text.contains(&format!("Week {}", week)));
    }
}
