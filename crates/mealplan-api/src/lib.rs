//! # mealplan-api - Remote Recipe Client
//!
//! Typed client for [TheMealDB](https://www.themealdb.com) plus the
//! [`RecipeSource`] trait the app is written against.
//!
//! Responses are normalised at this boundary: the `{ "meals": null }`
//! envelope becomes an empty list, and the twenty positional
//! `strIngredientN`/`strMeasureN` fields become a `Vec<Ingredient>`.
//!
//! ## Public API
//!
//! - [`MealDbClient`] - reqwest-backed client
//! - [`RecipeSource`] / [`LocalRecipeSource`] - async trait over the five endpoints
//! - `test_utils::FakeRecipeSource` - in-memory source (feature `test-helpers`)

pub mod client;
pub(crate) mod protocol;
pub mod source;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{MealDbClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use protocol::INGREDIENT_SLOTS;
pub use source::{LocalRecipeSource, RecipeSource};
