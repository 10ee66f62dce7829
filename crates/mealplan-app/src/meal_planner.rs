//! Meal planner: month → week → day → meal type
//!
//! Months are materialised lazily the first time they are selected. Each
//! month keeps the list of week numbers in use and a [`WeekPlan`] per week.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use mealplan_core::prelude::*;
use mealplan_core::{
    DayOfWeek, Meal, MealId, MealType, MonthLabel, Recipe, WeekPlan, CUSTOM_MEAL_NAME,
};

use crate::config::MealSettings;
use crate::month_selector::MonthSelector;

/// Weeks of one month
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthPlan {
    pub weeks: Vec<u32>,
    pub plan: BTreeMap<u32, WeekPlan>,
}

impl MonthPlan {
    fn with_weeks(count: u32) -> Self {
        let weeks: Vec<u32> = (1..=count).collect();
        let plan = weeks.iter().map(|w| (*w, WeekPlan::default())).collect();
        Self { weeks, plan }
    }
}

#[derive(Debug, Clone)]
pub struct MealPlanner {
    months: HashMap<MonthLabel, MonthPlan>,
    selected: MonthLabel,
    active_week: u32,
    next_meal_id: MealId,
    max_weeks: u32,
    initial_weeks: u32,
}

impl MealPlanner {
    pub fn new(month: MonthLabel, max_weeks: u32, initial_weeks: u32) -> Self {
        let max_weeks = max_weeks.max(1);
        let mut planner = Self {
            months: HashMap::new(),
            selected: month,
            active_week: 1,
            next_meal_id: 1,
            max_weeks,
            initial_weeks: initial_weeks.clamp(1, max_weeks),
        };
        planner.select_month(month);
        planner
    }

    pub fn selected_month(&self) -> MonthLabel {
        self.selected
    }

    pub fn active_week(&self) -> u32 {
        self.active_week
    }

    pub fn max_weeks(&self) -> u32 {
        self.max_weeks
    }

    /// Switch months, creating the month's starting weeks if it is new.
    /// The active week always resets to week 1.
    pub fn select_month(&mut self, month: MonthLabel) {
        let initial_weeks = self.initial_weeks;
        self.months.entry(month).or_insert_with(|| {
            debug!("Creating {} week(s) for {}", initial_weeks, month);
            MonthPlan::with_weeks(initial_weeks)
        });
        self.selected = month;
        self.active_week = 1;
    }

    pub fn month_plan(&self) -> Option<&MonthPlan> {
        self.months.get(&self.selected)
    }

    pub fn weeks(&self) -> &[u32] {
        self.month_plan().map(|m| m.weeks.as_slice()).unwrap_or(&[])
    }

    /// Append the next week number; `None` once the month is full
    pub fn add_week(&mut self) -> Option<u32> {
        let max_weeks = self.max_weeks;
        let month = self.months.get_mut(&self.selected)?;
        if month.weeks.len() as u32 >= max_weeks {
            return None;
        }
        let next = month.weeks.iter().max().copied().unwrap_or(0) + 1;
        month.weeks.push(next);
        month.plan.insert(next, WeekPlan::default());
        Some(next)
    }

    /// Make `week` active if the selected month has it
    pub fn select_week(&mut self, week: u32) -> bool {
        if self.weeks().contains(&week) {
            self.active_week = week;
            true
        } else {
            false
        }
    }

    /// Step to the neighbouring week, staying put at either end
    pub fn step_week(&mut self, forward: bool) -> bool {
        let weeks = self.weeks();
        let Some(idx) = weeks.iter().position(|w| *w == self.active_week) else {
            return false;
        };
        let target = if forward {
            weeks.get(idx + 1)
        } else {
            idx.checked_sub(1).and_then(|i| weeks.get(i))
        };
        match target.copied() {
            Some(week) => {
                self.active_week = week;
                true
            }
            None => false,
        }
    }

    pub fn active_week_plan(&self) -> Option<&WeekPlan> {
        self.month_plan()?.plan.get(&self.active_week)
    }

    pub fn meal(&self, day: DayOfWeek, meal_type: MealType) -> Option<&Meal> {
        self.active_week_plan()?.meal(day, meal_type)
    }

    /// Create or overwrite the meal in a slot of the active week.
    ///
    /// An existing meal keeps its id. A blank name is saved as
    /// [`CUSTOM_MEAL_NAME`].
    pub fn assign_meal(
        &mut self,
        day: DayOfWeek,
        meal_type: MealType,
        name: &str,
        recipe_id: Option<String>,
    ) -> Option<MealId> {
        let existing_id = self.meal(day, meal_type).map(|m| m.id);
        let id = match existing_id {
            Some(id) => id,
            None => {
                let id = self.next_meal_id;
                self.next_meal_id += 1;
                id
            }
        };
        let name = match name.trim() {
            "" => CUSTOM_MEAL_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };

        let active_week = self.active_week;
        let week = self
            .months
            .get_mut(&self.selected)?
            .plan
            .get_mut(&active_week)?;
        week.day_mut(day).set(
            meal_type,
            Meal {
                id,
                name,
                recipe_id,
            },
        );
        Some(id)
    }

    pub fn remove_meal(&mut self, day: DayOfWeek, meal_type: MealType) -> Option<Meal> {
        let active_week = self.active_week;
        self.months
            .get_mut(&self.selected)?
            .plan
            .get_mut(&active_week)?
            .day_mut(day)
            .remove(meal_type)
    }
}

/// Editor for a single meal slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealEditor {
    pub day: DayOfWeek,
    pub meal_type: MealType,
    pub name: String,
    pub recipe_id: Option<String>,
    /// Whether the slot already held a meal when opened
    pub existing: bool,
    /// Local recipe highlighted for assignment
    pub recipe_cursor: Option<usize>,
}

impl MealEditor {
    pub fn open(day: DayOfWeek, meal_type: MealType, meal: Option<&Meal>) -> Self {
        Self {
            day,
            meal_type,
            name: meal.map(|m| m.name.clone()).unwrap_or_default(),
            recipe_id: meal.and_then(|m| m.recipe_id.clone()),
            existing: meal.is_some(),
            recipe_cursor: None,
        }
    }

    pub fn title(&self) -> String {
        format!("{} - {}", self.day, self.meal_type)
    }

    /// Typing a name unlinks the meal from any recipe
    pub fn insert_char(&mut self, c: char) {
        self.name.push(c);
        self.recipe_id = None;
        self.recipe_cursor = None;
    }

    pub fn backspace(&mut self) {
        self.name.pop();
        self.recipe_id = None;
        self.recipe_cursor = None;
    }

    /// Move through `recipes`, taking the highlighted recipe's name and id
    pub fn cycle_recipe(&mut self, recipes: &[Recipe], forward: bool) {
        if recipes.is_empty() {
            return;
        }
        let len = recipes.len();
        let next = match (self.recipe_cursor, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.recipe_cursor = Some(next);
        self.name = recipes[next].name.clone();
        self.recipe_id = Some(recipes[next].id.clone());
    }
}

/// Everything the meals tab owns
#[derive(Debug, Clone)]
pub struct MealsState {
    pub planner: MealPlanner,
    pub months: MonthSelector,
    pub cursor_day: DayOfWeek,
    pub cursor_type: MealType,
    pub editor: Option<MealEditor>,
}

impl MealsState {
    pub fn new(today: NaiveDate, settings: &MealSettings) -> Self {
        let months = MonthSelector::new(today, settings.default_month);
        let mut planner =
            MealPlanner::new(months.selected(), settings.max_weeks, settings.initial_weeks);
        planner.assign_meal(
            DayOfWeek::Monday,
            MealType::Breakfast,
            "Brown Stew Chicken",
            None,
        );
        Self {
            planner,
            months,
            cursor_day: DayOfWeek::Monday,
            cursor_type: MealType::Breakfast,
            editor: None,
        }
    }

    pub fn move_day(&mut self, delta: isize) {
        let idx = (self.cursor_day.index() as isize + delta).clamp(0, 6) as usize;
        self.cursor_day = DayOfWeek::ALL[idx];
    }

    pub fn move_type(&mut self, delta: isize) {
        let current = MealType::ALL
            .iter()
            .position(|t| *t == self.cursor_type)
            .unwrap_or(0);
        let idx = (current as isize + delta).clamp(0, MealType::ALL.len() as isize - 1) as usize;
        self.cursor_type = MealType::ALL[idx];
    }
}
