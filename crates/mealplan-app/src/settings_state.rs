//! Settings page state and the currency picker

use mealplan_core::prelude::*;
use mealplan_core::{default_currency, filter_currencies, find_currency, Currency};

use crate::config::UiSettings;

/// Rows of the settings page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    DarkMode,
    MetricUnits,
    Currency,
    SignOut,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::DarkMode,
        SettingsRow::MetricUnits,
        SettingsRow::Currency,
        SettingsRow::SignOut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsRow::DarkMode => "Dark Mode",
            SettingsRow::MetricUnits => "Use Metric Units",
            SettingsRow::Currency => "Currency",
            SettingsRow::SignOut => "Sign Out",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsState {
    pub dark_mode: bool,
    pub use_metric: bool,
    pub currency: &'static Currency,
    pub cursor: usize,
    pub picker: Option<CurrencyPicker>,
}

impl SettingsState {
    pub fn new(ui: &UiSettings) -> Self {
        let currency = match find_currency(&ui.currency) {
            Some(c) => c,
            None => {
                warn!(
                    "Unknown currency {:?} in config, falling back to {}",
                    ui.currency,
                    default_currency().code
                );
                default_currency()
            }
        };
        Self {
            dark_mode: ui.dark_mode,
            use_metric: ui.use_metric,
            currency,
            cursor: 0,
            picker: None,
        }
    }

    pub fn selected_row(&self) -> SettingsRow {
        SettingsRow::ALL[self.cursor.min(SettingsRow::ALL.len() - 1)]
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor =
            (self.cursor as isize + delta).clamp(0, SettingsRow::ALL.len() as isize - 1) as usize;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_metric(&mut self) {
        self.use_metric = !self.use_metric;
    }

    /// Choose a currency and close the picker
    pub fn select_currency(&mut self, currency: &'static Currency) {
        self.currency = currency;
        self.picker = None;
    }
}

/// Searchable currency list.
///
/// `query` is what has been typed; `applied_query` is what the list is
/// filtered by, updated only once typing pauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyPicker {
    pub query: String,
    pub applied_query: String,
    pub cursor: usize,
    generation: u64,
}

impl CurrencyPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the generation to debounce on
    pub fn push_char(&mut self, c: char) -> u64 {
        self.query.push(c);
        self.generation += 1;
        self.generation
    }

    pub fn pop_char(&mut self) -> u64 {
        self.query.pop();
        self.generation += 1;
        self.generation
    }

    /// Apply the typed query if `generation` is still current
    pub fn debounce_elapsed(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.applied_query = self.query.clone();
        self.cursor = 0;
        true
    }

    pub fn filtered(&self) -> Vec<&'static Currency> {
        filter_currencies(&self.applied_query)
    }

    pub fn highlighted(&self) -> Option<&'static Currency> {
        self.filtered().get(self.cursor).copied()
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.filtered().len();
        self.cursor = if len == 0 {
            0
        } else {
            (self.cursor as isize + delta).clamp(0, len as isize - 1) as usize
        };
    }
}
