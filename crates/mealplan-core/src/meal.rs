//! Meal slots: a week of days, each holding at most one meal per meal type

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name given to a meal saved without one
pub const CUSTOM_MEAL_NAME: &str = "Custom Meal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub type MealId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    /// Recipe the meal was planned from, if any
    pub recipe_id: Option<String>,
}

/// Meals of a single day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMeals {
    pub breakfast: Option<Meal>,
    pub lunch: Option<Meal>,
    pub dinner: Option<Meal>,
}

impl DayMeals {
    pub fn get(&self, meal_type: MealType) -> Option<&Meal> {
        self.slot(meal_type).as_ref()
    }

    pub fn set(&mut self, meal_type: MealType, meal: Meal) {
        *self.slot_mut(meal_type) = Some(meal);
    }

    pub fn remove(&mut self, meal_type: MealType) -> Option<Meal> {
        self.slot_mut(meal_type).take()
    }

    pub fn is_empty(&self) -> bool {
        self.breakfast.is_none() && self.lunch.is_none() && self.dinner.is_none()
    }

    fn slot(&self, meal_type: MealType) -> &Option<Meal> {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    fn slot_mut(&mut self, meal_type: MealType) -> &mut Option<Meal> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        }
    }
}

/// Seven days of meals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    days: [DayMeals; 7],
}

impl WeekPlan {
    pub fn day(&self, day: DayOfWeek) -> &DayMeals {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: DayOfWeek) -> &mut DayMeals {
        &mut self.days[day.index()]
    }

    pub fn meal(&self, day: DayOfWeek, meal_type: MealType) -> Option<&Meal> {
        self.day(day).get(meal_type)
    }

    /// Number of filled meal slots in the week
    pub fn planned_count(&self) -> usize {
        self.days
            .iter()
            .map(|d| MealType::ALL.iter().filter(|t| d.get(**t).is_some()).count())
            .sum()
    }
}
