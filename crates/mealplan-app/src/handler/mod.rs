//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `groceries`: Grocery list and grocery form handlers
//! - `months`: Month picker and add-month dialog handlers
//! - `meals`: Meal planner and meal editor handlers
//! - `recipes`: Explorer, recipe detail and recipe form handlers
//! - `settings`: Settings page and currency picker handlers

pub(crate) mod groceries;
pub(crate) mod keys;
pub(crate) mod meals;
pub(crate) mod months;
pub(crate) mod recipes;
pub(crate) mod settings;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::explorer::ExplorerRequest;
use crate::message::Message;
use crate::recipe_book::DetailRequest;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Which debounce timer an action refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceTarget {
    /// Recipe explorer search/category changes
    Explorer,
    /// Currency picker search
    Currency,
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// (Re)start a debounce timer; fires the matching `*DebounceElapsed`
    /// message carrying `generation`
    ScheduleDebounce {
        target: DebounceTarget,
        generation: u64,
        delay: Duration,
    },

    /// Fetch the full result set for an explorer request
    FetchExplorerPage { request: ExplorerRequest },

    /// Fetch the remote category list
    FetchCategories,

    /// Look up a remote recipe, or a random one
    FetchRecipeDetail { request: DetailRequest },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
