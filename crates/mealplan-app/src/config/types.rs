//! Configuration types for mealplan
//!
//! Defines `Settings` (the whole `config.toml`) and one struct per section.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use mealplan_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use mealplan_core::{MonthLabel, DEFAULT_CURRENCY_CODE};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub explorer: ExplorerSettings,

    #[serde(default)]
    pub meals: MealSettings,

    #[serde(default)]
    pub groceries: GrocerySettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote recipe API settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Recipe explorer settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExplorerSettings {
    /// Quiet period after the last query change before searching
    #[serde(default = "default_explorer_debounce_ms")]
    pub debounce_ms: u64,

    /// Results per page; a full page means more may follow
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Rows from the end of the list at which the next page is requested
    #[serde(default = "default_load_more_threshold")]
    pub load_more_threshold: usize,
}

impl ExplorerSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_explorer_debounce_ms(),
            page_size: default_page_size(),
            load_more_threshold: default_load_more_threshold(),
        }
    }
}

fn default_explorer_debounce_ms() -> u64 {
    500
}

fn default_page_size() -> usize {
    20
}

fn default_load_more_threshold() -> usize {
    3
}

/// Meal planner settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MealSettings {
    /// Most weeks a month can hold
    #[serde(default = "default_max_weeks")]
    pub max_weeks: u32,

    /// Weeks created the first time a month is opened
    #[serde(default = "default_initial_weeks")]
    pub initial_weeks: u32,

    /// Month opened on startup and marked as default
    #[serde(default)]
    pub default_month: Option<MonthLabel>,
}

impl Default for MealSettings {
    fn default() -> Self {
        Self {
            max_weeks: default_max_weeks(),
            initial_weeks: default_initial_weeks(),
            default_month: None,
        }
    }
}

fn default_max_weeks() -> u32 {
    4
}

fn default_initial_weeks() -> u32 {
    2
}

/// Grocery list settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GrocerySettings {
    /// Month opened on startup and marked as default
    #[serde(default)]
    pub default_month: Option<MonthLabel>,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default = "default_true")]
    pub use_metric: bool,

    /// ISO code of the display currency
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_currency_search_debounce_ms")]
    pub currency_search_debounce_ms: u64,
}

impl UiSettings {
    pub fn currency_search_debounce(&self) -> Duration {
        Duration::from_millis(self.currency_search_debounce_ms)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            use_metric: true,
            currency: default_currency(),
            currency_search_debounce_ms: default_currency_search_debounce_ms(),
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_CODE.to_string()
}

fn default_currency_search_debounce_ms() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.api.timeout_secs, 15);
        assert_eq!(settings.explorer.debounce_ms, 500);
        assert_eq!(settings.explorer.page_size, 20);
        assert_eq!(settings.explorer.load_more_threshold, 3);
        assert_eq!(settings.meals.max_weeks, 4);
        assert_eq!(settings.meals.initial_weeks, 2);
        assert!(settings.meals.default_month.is_none());
        assert!(!settings.ui.dark_mode);
        assert!(settings.ui.use_metric);
        assert_eq!(settings.ui.currency, "USD");
        assert_eq!(settings.ui.currency_search_debounce_ms, 300);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[explorer]
debounce_ms = 250

[ui]
currency = "EUR"
"#,
        )
        .unwrap();
        assert_eq!(settings.explorer.debounce_ms, 250);
        assert_eq!(settings.explorer.page_size, 20);
        assert_eq!(settings.ui.currency, "EUR");
        assert!(settings.ui.use_metric);
    }

    #[test]
    fn test_default_month_parses_label() {
        let settings: Settings = toml::from_str(
            r#"
[groceries]
default_month = "April 2025"
"#,
        )
        .unwrap();
        assert_eq!(
            settings.groceries.default_month.map(|m| m.to_string()),
            Some("April 2025".to_string())
        );
    }

    #[test]
    fn test_bad_default_month_is_rejected() {
        let result: Result<Settings, _> = toml::from_str(
            r#"
[meals]
default_month = "Smarch 2025"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_timeout_never_zero() {
        let api = ApiSettings {
            timeout_secs: 0,
            ..ApiSettings::default()
        };
        assert_eq!(api.timeout(), Duration::from_secs(1));
    }
}
