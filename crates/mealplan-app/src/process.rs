//! Message processing
//!
//! Runs a message through the TEA update function, dispatching actions and
//! following up messages until the chain settles.

use mealplan_api::RecipeSource;

use crate::actions::ActionContext;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(state: &mut AppState, message: Message, ctx: &mut ActionContext<S>)
where
    S: RecipeSource + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            ctx.handle_action(action);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
