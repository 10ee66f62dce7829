//! Local recipe book, the recipe edit form and the recipe detail view

use mealplan_core::{seed_recipes, Recipe, RecipeDraft, RecipeView};

use crate::form::{non_blank, non_blank_lines, FormError};

/// Recipes kept locally for the session
#[derive(Debug, Clone)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self {
            recipes: seed_recipes(),
        }
    }
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Recipes matching `query` on name, category or ingredients
    pub fn filter(&self, query: &str) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.matches(query)).collect()
    }

    pub fn update(&mut self, id: &str, draft: RecipeDraft) -> bool {
        match self.recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                recipe.apply(draft);
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> Option<Recipe> {
        let idx = self.recipes.iter().position(|r| r.id == id)?;
        Some(self.recipes.remove(idx))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeField {
    #[default]
    Name,
    Category,
    CookTime,
    Image,
    Ingredients,
    Instructions,
}

impl RecipeField {
    pub const ALL: [RecipeField; 6] = [
        RecipeField::Name,
        RecipeField::Category,
        RecipeField::CookTime,
        RecipeField::Image,
        RecipeField::Ingredients,
        RecipeField::Instructions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecipeField::Name => "Name",
            RecipeField::Category => "Category",
            RecipeField::CookTime => "Cook Time (minutes)",
            RecipeField::Image => "Image URL",
            RecipeField::Ingredients => "Ingredients (one per line)",
            RecipeField::Instructions => "Instructions (one per line)",
        }
    }

    /// Multi-line fields take Enter as a newline
    pub fn is_multiline(&self) -> bool {
        matches!(self, RecipeField::Ingredients | RecipeField::Instructions)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Edit form for a local recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeForm {
    pub recipe_id: String,
    pub name: String,
    pub category: String,
    pub cook_time: String,
    pub image: String,
    /// One ingredient per line
    pub ingredients: String,
    /// One step per line
    pub instructions: String,
    pub focus: RecipeField,
    pub error: Option<FormError>,
}

impl RecipeForm {
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self {
            recipe_id: recipe.id.clone(),
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            cook_time: recipe.cook_time.to_string(),
            image: recipe.image.clone().unwrap_or_default(),
            ingredients: recipe.ingredients.join("\n"),
            instructions: recipe.instructions.join("\n"),
            focus: RecipeField::Name,
            error: None,
        }
    }

    pub fn field(&self, field: RecipeField) -> &str {
        match field {
            RecipeField::Name => &self.name,
            RecipeField::Category => &self.category,
            RecipeField::CookTime => &self.cook_time,
            RecipeField::Image => &self.image,
            RecipeField::Ingredients => &self.ingredients,
            RecipeField::Instructions => &self.instructions,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            RecipeField::Name => &mut self.name,
            RecipeField::Category => &mut self.category,
            RecipeField::CookTime => &mut self.cook_time,
            RecipeField::Image => &mut self.image,
            RecipeField::Ingredients => &mut self.ingredients,
            RecipeField::Instructions => &mut self.instructions,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Newline in a multi-line field, otherwise move to the next field
    pub fn enter(&mut self) {
        if self.focus.is_multiline() {
            self.focused_mut().push('\n');
        } else {
            self.focus = self.focus.next();
        }
    }

    pub fn to_draft(&self) -> Result<RecipeDraft, FormError> {
        let name = non_blank(&self.name).ok_or(FormError::MissingField("Name"))?;
        let cook_time = self
            .cook_time
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidCookTime(self.cook_time.clone()))?;
        Ok(RecipeDraft {
            name,
            category: self.category.trim().to_string(),
            cook_time,
            image: non_blank(&self.image),
            ingredients: non_blank_lines(&self.ingredients),
            instructions: non_blank_lines(&self.instructions),
        })
    }
}

/// What the detail view is waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRequest {
    Lookup(String),
    Random,
}

/// The open recipe detail view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDetailState {
    pub view: Option<RecipeView>,
    pub pending: Option<DetailRequest>,
    pub not_found: bool,
    pub scroll: u16,
}

impl RecipeDetailState {
    pub fn local(recipe: Recipe) -> Self {
        Self {
            view: Some(RecipeView::Local(recipe)),
            ..Self::default()
        }
    }

    pub fn loading(request: DetailRequest) -> Self {
        Self {
            pending: Some(request),
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}
