//! Main TUI runner - entry point and event loop
//!
//! - `run`: sets up the terminal, state and message channel, then drives
//! - `run_loop`: drain background messages, render, poll the terminal

use chrono::NaiveDate;
use tokio::sync::mpsc;
use tracing::{debug, info};

use mealplan_api::RecipeSource;
use mealplan_app::config::Settings;
use mealplan_app::message::Message;
use mealplan_app::signals;
use mealplan_app::{process_message, ActionContext, AppState};
use mealplan_core::prelude::*;

use super::{event, render, terminal};

/// Capacity of the channel background tasks report back on
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Run the TUI until the user quits
///
/// `source` is `None` in offline mode; remote recipe features then report
/// that they are unavailable instead of making requests.
pub async fn run<S>(settings: Settings, source: Option<S>, today: NaiveDate) -> Result<()>
where
    S: RecipeSource + Clone + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut state = AppState::new(&settings, today, source.is_none());
    info!(
        "Starting with groceries on {}, meals on {}",
        state.groceries.months.selected(),
        state.meals.planner.selected_month()
    );

    let mut term = match ratatui::try_init() {
        Ok(term) => term,
        Err(e) => {
            ratatui::restore();
            return Err(Error::TerminalInit(e.to_string()));
        }
    };

    // Unified message channel for background tasks and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
    signals::spawn_signal_handler(msg_tx.clone());

    let mut ctx = ActionContext::new(msg_tx, source);
    let result = run_loop(&mut term, &mut state, msg_rx, &mut ctx);

    ctx.shutdown();
    ratatui::restore();

    info!("Exited cleanly");
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    ctx: &mut ActionContext<S>,
) -> Result<()>
where
    S: RecipeSource + Clone + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Messages from debounce timers, remote calls and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, ctx);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll().context("Failed to read terminal events")? {
            process_message(state, message, ctx);
        }
    }

    debug!("Event loop finished");
    Ok(())
}
