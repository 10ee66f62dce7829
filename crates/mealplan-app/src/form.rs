//! Inline form validation errors
//!
//! These never propagate out of the update loop. A failed submit leaves the
//! form open and shows the message next to it.

use thiserror::Error;

use mealplan_core::MonthLabel;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Cook time must be a whole number of minutes (got {0:?})")]
    InvalidCookTime(String),

    #[error("{0} already exists")]
    MonthExists(MonthLabel),
}

/// Trimmed text, or `None` when blank
pub(crate) fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Non-blank lines of a multi-line field
pub(crate) fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines().filter_map(non_blank).collect()
}
