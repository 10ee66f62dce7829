//! mealplan - A terminal meal planner
//!
//! Groceries by month, a weekly meal plan and a recipe book backed by
//! TheMealDB. This crate wires the workspace crates together; the binary in
//! `main.rs` only parses arguments.

use std::path::PathBuf;

use mealplan_api::MealDbClient;
use mealplan_app::config::{load_settings, Settings};
use mealplan_core::prelude::*;
use mealplan_core::MonthLabel;

/// What the command line can change before startup
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Settings file; the platform config dir is used when `None`
    pub config: Option<PathBuf>,
    /// Month both the grocery list and the meal planner open on
    pub month: Option<MonthLabel>,
    /// Never contact the recipe API
    pub offline: bool,
}

/// Main application entry point
pub async fn run(options: LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    mealplan_core::logging::init()?;

    let settings = apply_overrides(load_settings(options.config.as_deref()), &options);
    let source = if options.offline {
        info!("Offline mode requested");
        None
    } else {
        connect(&settings)
    };

    let today = chrono::Local::now().date_naive();
    let result = mealplan_tui::run(settings, source, today).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("mealplan exiting");
    result
}

/// Command-line values take precedence over the settings file
pub fn apply_overrides(mut settings: Settings, options: &LaunchOptions) -> Settings {
    if let Some(month) = options.month {
        info!("Opening on {} (command line)", month);
        settings.groceries.default_month = Some(month);
        settings.meals.default_month = Some(month);
    }
    settings
}

/// Build the recipe client, falling back to offline mode if that fails
fn connect(settings: &Settings) -> Option<MealDbClient> {
    match MealDbClient::new(&settings.api.base_url, settings.api.timeout()) {
        Ok(client) => {
            info!("Recipe API: {}", settings.api.base_url);
            Some(client)
        }
        Err(e) => {
            warn!("Recipe API unavailable, running offline: {}", e);
            None
        }
    }
}
