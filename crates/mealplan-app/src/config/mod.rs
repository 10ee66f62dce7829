//! Configuration file parsing for mealplan
//!
//! Settings live in `<config_dir>/mealplan/config.toml` unless a path is
//! given on the command line. Every key is optional.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, parse_settings};
pub use types::{
    ApiSettings, ExplorerSettings, GrocerySettings, MealSettings, Settings, UiSettings,
};
