//! Month/year selector state shared by the grocery and meal tabs
//!
//! Each tab owns its own [`MonthSelector`]. The selector knows the catalog of
//! default labels, any custom labels the user added, which label is selected,
//! and which one (if any) is marked as the default.

use chrono::{Datelike, NaiveDate};

use mealplan_core::{default_month_catalog, Month, MonthLabel};

use crate::form::FormError;

/// How far either side of the current year the add-month dialog reaches
pub const ADD_MONTH_YEAR_SPAN: i32 = 2;

#[derive(Debug, Clone)]
pub struct MonthSelector {
    catalog: Vec<MonthLabel>,
    custom: Vec<MonthLabel>,
    selected: MonthLabel,
    default_month: Option<MonthLabel>,

    /// Search text typed into the picker
    pub query: String,
    /// Highlighted row in [`MonthSelector::display_order`]
    pub cursor: usize,
    /// Open add-month sub-dialog
    pub add_dialog: Option<AddMonthDialog>,
}

impl MonthSelector {
    /// Selector starting on `default_month` when given, else on the month of `today`
    pub fn new(today: NaiveDate, default_month: Option<MonthLabel>) -> Self {
        let mut selector = Self {
            catalog: default_month_catalog(today.year()),
            custom: Vec::new(),
            selected: MonthLabel::from_date(today),
            default_month,
            query: String::new(),
            cursor: 0,
            add_dialog: None,
        };
        if let Some(label) = default_month {
            selector.select(label);
        }
        selector
    }

    pub fn selected(&self) -> MonthLabel {
        self.selected
    }

    pub fn default_month(&self) -> Option<MonthLabel> {
        self.default_month
    }

    pub fn custom_months(&self) -> &[MonthLabel] {
        &self.custom
    }

    /// Catalog labels followed by custom ones
    pub fn all_months(&self) -> impl Iterator<Item = &MonthLabel> {
        self.catalog.iter().chain(self.custom.iter())
    }

    pub fn month_exists(&self, label: MonthLabel) -> bool {
        self.all_months().any(|m| *m == label)
    }

    /// Select `label`, remembering it as a custom month if it is new
    pub fn select(&mut self, label: MonthLabel) {
        if !self.month_exists(label) {
            self.custom.push(label);
        }
        self.selected = label;
    }

    /// Mark `label` as the default month, or clear it if it already is
    pub fn toggle_default(&mut self, label: MonthLabel) {
        if self.default_month == Some(label) {
            self.default_month = None;
        } else {
            self.default_month = Some(label);
        }
    }

    /// Labels matching `query` (case-insensitive substring; blank matches all)
    pub fn search(&self, query: &str) -> Vec<MonthLabel> {
        let query = query.trim().to_lowercase();
        self.all_months()
            .filter(|m| query.is_empty() || m.to_string().to_lowercase().contains(&query))
            .copied()
            .collect()
    }

    /// Search results ordered selected first, then default, then as listed
    pub fn display_order(&self) -> Vec<MonthLabel> {
        let mut months = self.search(&self.query);
        months.sort_by_key(|m| {
            if *m == self.selected {
                0
            } else if Some(*m) == self.default_month {
                1
            } else {
                2
            }
        });
        months
    }

    /// Label under the picker cursor
    pub fn highlighted(&self) -> Option<MonthLabel> {
        self.display_order().get(self.cursor).copied()
    }

    /// Add a custom month and select it; refused if it already exists
    pub fn add_month(&mut self, label: MonthLabel) -> Result<(), FormError> {
        if self.month_exists(label) {
            return Err(FormError::MonthExists(label));
        }
        self.select(label);
        Ok(())
    }

    /// Reset the picker's transient state before it is shown
    pub fn open_picker(&mut self) {
        self.query.clear();
        self.cursor = 0;
        self.add_dialog = None;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.display_order().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor as isize + delta).clamp(0, len as isize - 1) as usize;
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.cursor = 0;
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.cursor = 0;
    }
}

/// The "add new month" sub-dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMonthDialog {
    pub month: Month,
    pub year: i32,
    current_year: i32,
}

impl AddMonthDialog {
    /// Dialog preset to the month and year of `today`
    pub fn new(today: NaiveDate) -> Self {
        let current = MonthLabel::from_date(today);
        Self {
            month: current.month,
            year: current.year,
            current_year: current.year,
        }
    }

    pub fn label(&self) -> MonthLabel {
        MonthLabel::new(self.month, self.year)
    }

    /// Years offered: current year ± [`ADD_MONTH_YEAR_SPAN`]
    pub fn year_range(&self) -> std::ops::RangeInclusive<i32> {
        (self.current_year - ADD_MONTH_YEAR_SPAN)..=(self.current_year + ADD_MONTH_YEAR_SPAN)
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
    }

    pub fn prev_month(&mut self) {
        self.month = self.month.prev();
    }

    pub fn next_year(&mut self) {
        if self.year < *self.year_range().end() {
            self.year += 1;
        }
    }

    pub fn prev_year(&mut self) {
        if self.year > *self.year_range().start() {
            self.year -= 1;
        }
    }

    /// Validation message for the current choice, if any
    pub fn error(&self, selector: &MonthSelector) -> Option<FormError> {
        let label = self.label();
        selector
            .month_exists(label)
            .then_some(FormError::MonthExists(label))
    }
}
