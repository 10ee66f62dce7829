//! Test utilities for recipe sources
//!
//! Provides an in-memory [`RecipeSource`] and helpers for building remote
//! recipe fixtures.

use std::sync::{Arc, Mutex};

use mealplan_core::prelude::*;
use mealplan_core::{Category, Ingredient, RecipeDetail, RecipeSummary};

use crate::source::RecipeSource;

/// A call made against a [`FakeRecipeSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    Search(String),
    Lookup(String),
    Categories,
    ByCategory(String),
    Random,
}

#[derive(Debug, Default)]
struct FakeData {
    summaries: Vec<RecipeSummary>,
    details: Vec<RecipeDetail>,
    categories: Vec<Category>,
    fail: bool,
    calls: Vec<SourceCall>,
}

/// In-memory recipe source.
///
/// Search matches summaries by case-insensitive name substring, the category
/// filter by exact category. Clones share state, so a test can keep a handle
/// to inspect [`FakeRecipeSource::calls`] after handing one to the app.
#[derive(Debug, Clone, Default)]
pub struct FakeRecipeSource {
    data: Arc<Mutex<FakeData>>,
}

impl FakeRecipeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summaries(self, summaries: Vec<RecipeSummary>) -> Self {
        self.with_data(|d| d.summaries = summaries)
    }

    pub fn with_details(self, details: Vec<RecipeDetail>) -> Self {
        self.with_data(|d| d.details = details)
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.with_data(|d| d.categories = categories)
    }

    /// Make every subsequent call fail with a transport error
    pub fn set_failing(&self, fail: bool) {
        self.with_data_ref(|d| d.fail = fail);
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<SourceCall> {
        self.with_data_ref(|d| d.calls.clone())
    }

    fn with_data(self, f: impl FnOnce(&mut FakeData)) -> Self {
        self.with_data_ref(f);
        self
    }

    fn with_data_ref<R>(&self, f: impl FnOnce(&mut FakeData) -> R) -> R {
        let mut guard = match self.data.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }

    fn record(&self, call: SourceCall) -> Result<()> {
        self.with_data_ref(|d| {
            d.calls.push(call);
            if d.fail {
                Err(Error::http("fake source failure"))
            } else {
                Ok(())
            }
        })
    }
}

impl RecipeSource for FakeRecipeSource {
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        self.record(SourceCall::Search(query.to_string()))?;
        let query = query.to_lowercase();
        Ok(self.with_data_ref(|d| {
            d.summaries
                .iter()
                .filter(|s| s.name.to_lowercase().contains(&query))
                .cloned()
                .collect()
        }))
    }

    async fn get_recipe_by_id(&self, id: &str) -> Result<Option<RecipeDetail>> {
        self.record(SourceCall::Lookup(id.to_string()))?;
        Ok(self.with_data_ref(|d| d.details.iter().find(|r| r.id == id).cloned()))
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        self.record(SourceCall::Categories)?;
        Ok(self.with_data_ref(|d| d.categories.clone()))
    }

    async fn get_recipes_by_category(&self, category: &str) -> Result<Vec<RecipeSummary>> {
        self.record(SourceCall::ByCategory(category.to_string()))?;
        Ok(self.with_data_ref(|d| {
            d.summaries
                .iter()
                .filter(|s| s.category == category)
                .cloned()
                .collect()
        }))
    }

    async fn get_random_recipe(&self) -> Result<Option<RecipeDetail>> {
        self.record(SourceCall::Random)?;
        Ok(self.with_data_ref(|d| d.details.first().cloned()))
    }
}

/// Creates a remote search hit with empty image and tags.
pub fn test_summary(id: &str, name: &str, category: &str) -> RecipeSummary {
    RecipeSummary {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        image: String::new(),
        tags: Vec::new(),
        source: None,
    }
}

/// Creates `count` search hits named `"<prefix> <n>"` with ids starting at 1.
pub fn test_summaries(prefix: &str, category: &str, count: usize) -> Vec<RecipeSummary> {
    (1..=count)
        .map(|n| test_summary(&n.to_string(), &format!("{prefix} {n}"), category))
        .collect()
}

/// Creates a looked-up recipe with a single ingredient.
pub fn test_detail(id: &str, name: &str) -> RecipeDetail {
    RecipeDetail {
        id: id.to_string(),
        name: name.to_string(),
        category: "Miscellaneous".to_string(),
        area: "Unknown".to_string(),
        instructions: "Cook it.".to_string(),
        image: String::new(),
        tags: Vec::new(),
        youtube: None,
        ingredients: vec![Ingredient {
            name: "Salt".to_string(),
            measure: "1 pinch".to_string(),
        }],
    }
}

/// Creates a category with empty thumbnail and description.
pub fn test_category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: String::new(),
        description: String::new(),
    }
}
