//! Recipe types: locally kept recipes and normalised remote ones

use serde::{Deserialize, Serialize};

/// Number of ingredients shown on a recipe card
pub const CARD_INGREDIENT_COUNT: usize = 3;

/// A recipe kept in the local recipe book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Minutes
    pub cook_time: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl Recipe {
    /// Case-insensitive substring match on name, category or any ingredient
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(&query))
    }

    pub fn card_summary(&self) -> String {
        card_summary(&self.ingredients)
    }

    /// Replace the editable fields, keeping id, tags and source
    pub fn apply(&mut self, draft: RecipeDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.cook_time = draft.cook_time;
        self.image = draft.image;
        self.ingredients = draft.ingredients;
        self.instructions = draft.instructions;
    }
}

/// The editable fields of a local recipe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub category: String,
    pub cook_time: u32,
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// First few ingredients joined by `", "`, with `...` when some are left out
pub fn card_summary(ingredients: &[String]) -> String {
    let shown = ingredients
        .iter()
        .take(CARD_INGREDIENT_COUNT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if ingredients.len() > CARD_INGREDIENT_COUNT {
        format!("{shown}...")
    } else {
        shown
    }
}

/// A remote search or category-filter hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub tags: Vec<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl Ingredient {
    /// `"<measure> <name>"`, or just the name when there is no measure
    pub fn display(&self) -> String {
        if self.measure.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.measure.trim(), self.name)
        }
    }
}

/// A fully looked-up remote recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub image: String,
    pub tags: Vec<String>,
    pub youtube: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeDetail {
    /// Instruction text split into non-empty steps
    pub fn instruction_steps(&self) -> Vec<&str> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }
}

/// A remote recipe category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub description: String,
}

/// A recipe opened for viewing, either from the local book or looked up remotely
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeView {
    Local(Recipe),
    Remote(RecipeDetail),
}

impl RecipeView {
    pub fn id(&self) -> &str {
        match self {
            RecipeView::Local(r) => &r.id,
            RecipeView::Remote(r) => &r.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            RecipeView::Local(r) => &r.name,
            RecipeView::Remote(r) => &r.name,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            RecipeView::Local(r) => &r.category,
            RecipeView::Remote(r) => &r.category,
        }
    }

    /// Only local recipes can be edited
    pub fn is_local(&self) -> bool {
        matches!(self, RecipeView::Local(_))
    }

    pub fn ingredient_lines(&self) -> Vec<String> {
        match self {
            RecipeView::Local(r) => r.ingredients.clone(),
            RecipeView::Remote(r) => r.ingredients.iter().map(Ingredient::display).collect(),
        }
    }

    pub fn instruction_lines(&self) -> Vec<String> {
        match self {
            RecipeView::Local(r) => r.instructions.clone(),
            RecipeView::Remote(r) => r
                .instruction_steps()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Link to the recipe source, if one is known
    pub fn source(&self) -> Option<&str> {
        match self {
            RecipeView::Local(r) => r.source.as_deref(),
            RecipeView::Remote(r) => r.youtube.as_deref(),
        }
    }
}

/// The recipe book every session starts with
pub fn seed_recipes() -> Vec<Recipe> {
    fn recipe(
        id: &str,
        name: &str,
        category: &str,
        cook_time: u32,
        ingredients: &[&str],
        instructions: &[&str],
    ) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            cook_time,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: instructions.iter().map(|s| s.to_string()).collect(),
            image: None,
            tags: Vec::new(),
            source: None,
        }
    }

    vec![
        recipe(
            "1",
            "Avocado Toast",
            "Breakfast",
            10,
            &[
                "2 slices bread",
                "1 avocado",
                "Salt",
                "Pepper",
                "Red pepper flakes",
            ],
            &[
                "Toast bread until golden and firm.",
                "Remove pits from avocados, scoop into bowl, and mash with fork.",
                "Spread avocado on toast, sprinkle with salt, pepper, and red pepper flakes.",
            ],
        ),
        recipe(
            "2",
            "Greek Salad",
            "Lunch",
            15,
            &["Cucumber", "Tomatoes", "Red onion"],
            &[],
        ),
        recipe(
            "3",
            "Chicken Stir Fry",
            "Dinner",
            25,
            &["Chicken breast", "Bell peppers", "Broccoli"],
            &[],
        ),
        recipe(
            "4",
            "Pasta Carbonara",
            "Dinner",
            20,
            &["Spaghetti", "Eggs", "Parmesan cheese"],
            &[],
        ),
        recipe(
            "5",
            "Vegetable Curry",
            "Dinner",
            30,
            &["Potatoes", "Carrots"],
            &[],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_recipes() {
        let recipes = seed_recipes();
        assert_eq!(recipes.len(), 5);
        assert_eq!(recipes[0].name, "Avocado Toast");
        assert_eq!(recipes[0].cook_time, 10);
        assert_eq!(recipes[4].name, "Vegetable Curry");
    }

    #[test]
    fn test_card_summary_truncates_after_three() {
        let recipes = seed_recipes();
        assert_eq!(
            recipes[0].card_summary(),
            "2 slices bread, 1 avocado, Salt..."
        );
        assert_eq!(recipes[1].card_summary(), "Cucumber, Tomatoes, Red onion");
        assert_eq!(recipes[4].card_summary(), "Potatoes, Carrots");
        assert_eq!(card_summary(&[]), "");
    }

    #[test]
    fn test_recipe_matches_name_category_and_ingredients() {
        let recipes = seed_recipes();
        let curry = &recipes[4];
        assert!(curry.matches("curry"));
        assert!(curry.matches("DINNER"));
        assert!(curry.matches("carrot"));
        assert!(curry.matches(""));
        assert!(!curry.matches("avocado"));
    }

    #[test]
    fn test_apply_draft_keeps_identity() {
        let mut recipe = seed_recipes().remove(1);
        recipe.apply(RecipeDraft {
            name: "Big Greek Salad".into(),
            category: "Lunch".into(),
            cook_time: 20,
            image: None,
            ingredients: vec!["Feta".into()],
            instructions: vec!["Chop.".into()],
        });
        assert_eq!(recipe.id, "2");
        assert_eq!(recipe.name, "Big Greek Salad");
        assert_eq!(recipe.cook_time, 20);
        assert_eq!(recipe.ingredients, vec!["Feta".to_string()]);
    }

    #[test]
    fn test_remote_view_lines() {
        let detail = RecipeDetail {
            id: "52772".into(),
            name: "Teriyaki Chicken Casserole".into(),
            category: "Chicken".into(),
            area: "Japanese".into(),
            instructions: "Preheat oven.\r\n\r\nCombine soy sauce.\r\n".into(),
            image: String::new(),
            tags: vec!["Meat".into()],
            youtube: Some("https://www.youtube.com/watch?v=4aZr5hZXP_s".into()),
            ingredients: vec![
                Ingredient {
                    name: "soy sauce".into(),
                    measure: "3/4 cup".into(),
                },
                Ingredient {
                    name: "water".into(),
                    measure: " ".into(),
                },
            ],
        };
        let view = RecipeView::Remote(detail);
        assert!(!view.is_local());
        assert_eq!(
            view.ingredient_lines(),
            vec!["3/4 cup soy sauce".to_string(), "water".to_string()]
        );
        assert_eq!(
            view.instruction_lines(),
            vec!["Preheat oven.".to_string(), "Combine soy sauce.".to_string()]
        );
        assert!(view.source().is_some());
    }
}
