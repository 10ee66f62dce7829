//! # mealplan-core - Core Domain Types
//!
//! Foundation crate for mealplan. Provides the domain types shared by every
//! other crate, error handling, money parsing and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Groceries (`grocery`)
//! - [`GroceryItem`], [`GroceryDraft`] - A grocery line and its editable fields
//! - [`GroceryCategory`] - Fixed category set (Produce, Dairy, ...)
//! - [`group_by_category()`], [`GrocerySummary`] - Derived views
//!
//! ### Meals (`meal`)
//! - [`Meal`], [`DayMeals`], [`WeekPlan`] - One meal per type per day
//! - [`MealType`], [`DayOfWeek`]
//!
//! ### Recipes (`recipe`)
//! - [`Recipe`] - Local recipe book entry
//! - [`RecipeSummary`], [`RecipeDetail`], [`Category`] - Normalised remote data
//! - [`RecipeView`] - A recipe opened for viewing, local or remote
//!
//! ### Months (`month`)
//! - [`MonthLabel`] - `"April 2025"` style label, parseable and derivable from a date
//!
//! ### Money (`money`)
//! - [`calculate_item_total()`], [`format_price()`] - Lenient price × quantity
//!
//! ### Currencies (`currency`)
//! - [`Currency`], [`CURRENCIES`] - Static list of supported currencies
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Log an error with context while propagating it
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mealplan_core::prelude::*;
//! ```

pub mod currency;
pub mod error;
pub mod grocery;
pub mod logging;
pub mod meal;
pub mod money;
pub mod month;
pub mod recipe;

/// Prelude for common imports used throughout all mealplan crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use currency::{
    default_currency, filter_currencies, find_currency, Currency, CURRENCIES,
    DEFAULT_CURRENCY_CODE,
};
pub use error::{Error, Result, ResultExt};
pub use grocery::{
    group_by_category, CategoryGroup, GroceryCategory, GroceryDraft, GroceryItem, GroceryItemId,
    GrocerySummary,
};
pub use meal::{DayMeals, DayOfWeek, Meal, MealId, MealType, WeekPlan, CUSTOM_MEAL_NAME};
pub use money::{calculate_item_total, format_price, parse_amount, percent_complete};
pub use month::{default_month_catalog, Month, MonthLabel};
pub use recipe::{
    card_summary, seed_recipes, Category, Ingredient, Recipe, RecipeDetail, RecipeDraft,
    RecipeSummary, RecipeView,
};
