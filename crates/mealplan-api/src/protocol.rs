//! Wire shapes of TheMealDB responses and their conversion into domain types

use std::collections::HashMap;

use serde::Deserialize;

use mealplan_core::{Category, Ingredient, RecipeDetail, RecipeSummary};

/// Number of positional ingredient/measure fields on a meal record
pub const INGREDIENT_SLOTS: usize = 20;

/// `{ "meals": [...] | null }`
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<WireMeal>>,
}

impl MealsEnvelope {
    /// The records, treating `null` as no results
    pub fn into_meals(self) -> Vec<WireMeal> {
        self.meals.unwrap_or_default()
    }
}

/// `{ "categories": [...] | null }`
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Option<Vec<WireCategory>>,
}

impl CategoriesEnvelope {
    pub fn into_categories(self) -> Vec<Category> {
        self.categories
            .unwrap_or_default()
            .into_iter()
            .map(Category::from)
            .collect()
    }
}

/// A meal record as sent by the API.
///
/// Search and lookup return every field; the category filter endpoint only
/// sends id, name and thumbnail. The twenty `strIngredientN`/`strMeasureN`
/// fields land in `extra` and are paired up by [`WireMeal::ingredients`].
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireMeal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl WireMeal {
    /// Comma separated `strTags`, blanks dropped
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Pair `strIngredientN` with `strMeasureN`, skipping blank ingredients
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|n| {
                let name = self.extra_str(&format!("strIngredient{n}"))?;
                let measure = self
                    .extra_str(&format!("strMeasure{n}"))
                    .unwrap_or_default();
                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    fn youtube_link(&self) -> Option<String> {
        self.youtube
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Normalise a search hit
    pub fn into_summary(self) -> RecipeSummary {
        let tags = self.tag_list();
        let source = self.youtube_link();
        RecipeSummary {
            id: self.id,
            name: self.name,
            category: self.category.unwrap_or_default(),
            image: self.thumbnail.unwrap_or_default(),
            tags,
            source,
        }
    }

    /// Normalise a category-filter hit. The filter endpoint omits the
    /// category, so the one that was asked for is filled in.
    pub fn into_filtered_summary(self, category: &str) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            name: self.name,
            category: category.to_string(),
            image: self.thumbnail.unwrap_or_default(),
            tags: Vec::new(),
            source: None,
        }
    }

    /// Normalise a full lookup result
    pub fn into_detail(self) -> RecipeDetail {
        let tags = self.tag_list();
        let ingredients = self.ingredients();
        let youtube = self.youtube_link();
        RecipeDetail {
            id: self.id,
            name: self.name,
            category: self.category.unwrap_or_default(),
            area: self.area.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
            image: self.thumbnail.unwrap_or_default(),
            tags,
            youtube,
            ingredients,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireCategory {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

impl From<WireCategory> for Category {
    fn from(wire: WireCategory) -> Self {
        Category {
            id: wire.id,
            name: wire.name,
            thumbnail: wire.thumbnail.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
        }
    }
}
