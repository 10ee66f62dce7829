//! mealplan-app - Application state and orchestration for mealplan
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events,
//! [`handler::update`] the transition function. Side effects (debounce
//! timers, remote recipe calls) are returned as [`UpdateAction`]s and carried
//! out by [`actions::ActionContext`], which reports back with more messages.

pub mod actions;
pub mod config;
pub mod debounce;
pub mod explorer;
pub mod form;
pub mod groceries;
pub mod handler;
pub mod input_key;
pub mod meal_planner;
pub mod message;
pub mod month_selector;
pub mod process;
pub mod recipe_book;
pub mod settings_state;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::ActionContext;
pub use handler::{DebounceTarget, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppPhase, AppState, Tab, UiMode};
