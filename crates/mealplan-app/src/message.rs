//! Message types for the application (TEA pattern)

use chrono::NaiveDate;
use mealplan_core::{Category, RecipeDetail, RecipeSummary};

use crate::explorer::ExplorerRequest;
use crate::input_key::InputKey;
use crate::recipe_book::DetailRequest;
use crate::state::Tab;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick carrying the wall-clock date it was taken on
    Tick { today: NaiveDate },

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SelectTab(Tab),
    NextTab,
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Groceries
    // ─────────────────────────────────────────────────────────
    GroceryUp,
    GroceryDown,
    /// Flip the checked state of the highlighted item
    ToggleGrocery,
    DeleteGrocery,
    /// Open the form for a new item
    OpenGroceryForm,
    /// Open the form pre-filled with the highlighted item
    EditGrocery,
    GroceryFormInput(char),
    GroceryFormBackspace,
    GroceryFormNextField,
    GroceryFormPrevField,
    GroceryFormCycleCategory {
        forward: bool,
    },
    GroceryFormSubmit,
    GroceryFormCancel,

    // ─────────────────────────────────────────────────────────
    // Month Picker (grocery and meal tabs)
    // ─────────────────────────────────────────────────────────
    OpenMonthPicker,
    MonthPickerInput(char),
    MonthPickerBackspace,
    MonthPickerUp,
    MonthPickerDown,
    /// Select the highlighted month and close
    MonthPickerSelect,
    /// Mark/unmark the highlighted month as default
    MonthPickerToggleDefault,
    CloseMonthPicker,

    OpenAddMonth,
    AddMonthPrevMonth,
    AddMonthNextMonth,
    AddMonthPrevYear,
    AddMonthNextYear,
    AddMonthConfirm,
    AddMonthCancel,

    // ─────────────────────────────────────────────────────────
    // Meals
    // ─────────────────────────────────────────────────────────
    /// Move the slot cursor by days (columns) and meal types (rows)
    MoveMealCursor {
        days: isize,
        types: isize,
    },
    NextWeek,
    PrevWeek,
    AddWeek,
    /// Clear the highlighted slot
    RemoveMeal,

    OpenMealEditor,
    MealEditorInput(char),
    MealEditorBackspace,
    /// Assign the next/previous local recipe to the slot being edited
    MealEditorCycleRecipe {
        forward: bool,
    },
    MealEditorSave,
    MealEditorRemove,
    MealEditorCancel,

    // ─────────────────────────────────────────────────────────
    // Recipes
    // ─────────────────────────────────────────────────────────
    /// Switch between "My Recipes" and "Explore Recipes"
    ToggleRecipeTab,
    StartRecipeSearch,
    RecipeSearchInput(char),
    RecipeSearchBackspace,
    ClearRecipeSearch,
    EndRecipeSearch,
    RecipeUp,
    RecipeDown,

    OpenCategoryPicker,
    CategoryPickerUp,
    CategoryPickerDown,
    CategoryPickerSelect,
    CloseCategoryPicker,

    /// Explorer debounce timer fired
    ExplorerDebounceElapsed {
        generation: u64,
    },
    /// Full result set for an explorer request
    ExplorerResults {
        request: ExplorerRequest,
        results: Vec<RecipeSummary>,
    },
    ExplorerFailed {
        request: ExplorerRequest,
        error: String,
    },
    /// Fetch the category list unless it was already requested
    LoadCategories,
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed(String),

    /// Open the highlighted recipe of the active recipe tab
    OpenRecipe,
    /// Open a random remote recipe
    RandomRecipe,
    RecipeDetailLoaded {
        request: DetailRequest,
        recipe: Option<RecipeDetail>,
    },
    RecipeDetailFailed {
        request: DetailRequest,
        error: String,
    },
    CloseRecipeDetail,
    ScrollRecipeDetail(i16),
    /// Put the recipe being viewed into the highlighted meal slot
    AddRecipeToPlan,

    /// Edit the highlighted (or viewed) local recipe
    EditRecipe,
    DeleteRecipe,
    RecipeFormInput(char),
    RecipeFormBackspace,
    RecipeFormEnter,
    RecipeFormNextField,
    RecipeFormPrevField,
    RecipeFormSave,
    RecipeFormCancel,

    // ─────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────
    SettingsUp,
    SettingsDown,
    /// Toggle or open the highlighted settings row
    SettingsActivate,
    ToggleDarkMode,
    ToggleMetric,
    SignOut,

    OpenCurrencyPicker,
    CurrencyPickerInput(char),
    CurrencyPickerBackspace,
    /// Currency search debounce timer fired
    CurrencyDebounceElapsed {
        generation: u64,
    },
    CurrencyPickerUp,
    CurrencyPickerDown,
    CurrencyPickerSelect,
    CloseCurrencyPicker,
}
