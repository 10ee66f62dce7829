//! Application state (Model in TEA pattern)

use std::time::Duration;

use chrono::NaiveDate;

use mealplan_core::Currency;

use crate::config::Settings;
use crate::explorer::{ExplorerState, RecipeTab};
use crate::groceries::GroceriesState;
use crate::meal_planner::MealsState;
use crate::month_selector::MonthSelector;
use crate::recipe_book::{RecipeBook, RecipeDetailState, RecipeForm};
use crate::settings_state::SettingsState;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Groceries,
    Meals,
    Recipes,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Groceries, Tab::Meals, Tab::Recipes, Tab::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Groceries => "Groceries",
            Tab::Meals => "Meals",
            Tab::Recipes => "Recipes",
            Tab::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Which surface currently receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Browsing the active tab
    #[default]
    Normal,
    /// Grocery add/edit form
    GroceryForm,
    /// Month picker of the grocery or meal tab
    MonthPicker,
    /// "Add new month" dialog on top of the month picker
    AddMonth,
    /// Meal slot editor
    MealEditor,
    /// Typing into the recipe search box
    RecipeSearch,
    /// Choosing a remote category
    CategoryPicker,
    /// Viewing one recipe
    RecipeDetail,
    /// Editing a local recipe
    RecipeForm,
    /// Choosing a currency
    CurrencyPicker,
}

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,
    pub tab: Tab,
    pub ui_mode: UiMode,
    /// Date used for new grocery items and the default month
    pub today: NaiveDate,
    /// Remote recipes disabled
    pub offline: bool,

    pub groceries: GroceriesState,
    pub meals: MealsState,
    pub explorer: ExplorerState,
    pub recipe_book: RecipeBook,
    pub recipe_form: Option<RecipeForm>,
    pub detail: Option<RecipeDetailState>,
    pub settings: SettingsState,

    /// One-line feedback shown in the status bar
    pub status: Option<String>,

    pub explorer_debounce: Duration,
    pub currency_debounce: Duration,
}

impl AppState {
    pub fn new(settings: &Settings, today: NaiveDate, offline: bool) -> Self {
        Self {
            phase: AppPhase::Running,
            tab: Tab::Groceries,
            ui_mode: UiMode::Normal,
            today,
            offline,
            groceries: GroceriesState::new(today, settings.groceries.default_month),
            meals: MealsState::new(today, &settings.meals),
            explorer: ExplorerState::new(&settings.explorer),
            recipe_book: RecipeBook::default(),
            recipe_form: None,
            detail: None,
            settings: SettingsState::new(&settings.ui),
            status: None,
            explorer_debounce: settings.explorer.debounce(),
            currency_debounce: settings.ui.currency_search_debounce(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn currency(&self) -> &'static Currency {
        self.settings.currency
    }

    /// Month selector of the active tab, if it has one
    pub fn active_month_selector(&self) -> Option<&MonthSelector> {
        match self.tab {
            Tab::Groceries => Some(&self.groceries.months),
            Tab::Meals => Some(&self.meals.months),
            _ => None,
        }
    }

    pub fn active_month_selector_mut(&mut self) -> Option<&mut MonthSelector> {
        match self.tab {
            Tab::Groceries => Some(&mut self.groceries.months),
            Tab::Meals => Some(&mut self.meals.months),
            _ => None,
        }
    }

    /// Local recipes shown in the "My Recipes" list
    pub fn visible_local_recipes(&self) -> Vec<&mealplan_core::Recipe> {
        self.recipe_book.filter(&self.explorer.query)
    }

    /// Rows in the recipe list of the active recipe tab
    pub fn recipe_row_count(&self) -> usize {
        match self.explorer.tab {
            RecipeTab::My => self.visible_local_recipes().len(),
            RecipeTab::Explore => self.explorer.result_count(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}
