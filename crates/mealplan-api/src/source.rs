//! Abstraction over where remote recipes come from

use mealplan_core::prelude::*;
use mealplan_core::{Category, RecipeDetail, RecipeSummary};

/// Remote recipe operations used by the explorer and detail view.
///
/// [`crate::MealDbClient`] is the production implementation; tests drive the
/// app with `FakeRecipeSource` (feature `test-helpers`).
#[trait_variant::make(RecipeSource: Send)]
pub trait LocalRecipeSource {
    /// Recipes whose name matches `query`
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>>;

    /// Full recipe by id, `None` when the id is unknown
    async fn get_recipe_by_id(&self, id: &str) -> Result<Option<RecipeDetail>>;

    /// All recipe categories
    async fn get_categories(&self) -> Result<Vec<Category>>;

    /// Recipes in `category`
    async fn get_recipes_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>>;

    /// A single random recipe
    async fn get_random_recipe(&self) -> Result<Option<RecipeDetail>>;
}
