//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every remote call runs as a task in a [`JoinSet`] and reports back through
//! the message channel. Finished tasks are reaped on each dispatch; anything
//! still running is aborted on [`ActionContext::shutdown`].

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use mealplan_api::RecipeSource;
use mealplan_core::{Error, Result};

use crate::debounce::Debouncer;
use crate::explorer::ExplorerQuery;
use crate::handler::{DebounceTarget, UpdateAction};
use crate::message::Message;
use crate::recipe_book::DetailRequest;

/// What the event loop needs to carry out actions
pub struct ActionContext<S> {
    msg_tx: mpsc::Sender<Message>,
    /// `None` in offline mode
    source: Option<S>,
    explorer_debounce: Debouncer,
    currency_debounce: Debouncer,
    tasks: JoinSet<()>,
}

impl<S> ActionContext<S>
where
    S: RecipeSource + Clone + Send + Sync + 'static,
{
    pub fn new(msg_tx: mpsc::Sender<Message>, source: Option<S>) -> Self {
        if source.is_none() {
            warn!("No recipe source configured; remote recipes are disabled");
        }
        Self {
            msg_tx,
            source,
            explorer_debounce: Debouncer::new(),
            currency_debounce: Debouncer::new(),
            tasks: JoinSet::new(),
        }
    }

    /// Execute an action, spawning background work where needed
    pub fn handle_action(&mut self, action: UpdateAction) {
        self.reap_finished();

        match action {
            UpdateAction::ScheduleDebounce {
                target,
                generation,
                delay,
            } => {
                let (debouncer, message) = match target {
                    DebounceTarget::Explorer => (
                        &mut self.explorer_debounce,
                        Message::ExplorerDebounceElapsed { generation },
                    ),
                    DebounceTarget::Currency => (
                        &mut self.currency_debounce,
                        Message::CurrencyDebounceElapsed { generation },
                    ),
                };
                debouncer.schedule(delay, message, self.msg_tx.clone());
            }

            UpdateAction::FetchExplorerPage { request } => {
                let Some(source) = self.source.clone() else {
                    self.report_offline(Message::ExplorerFailed {
                        request,
                        error: Error::Offline.to_string(),
                    });
                    return;
                };
                debug!("Fetching explorer page {} for {:?}", request.page, request.query);
                let tx = self.msg_tx.clone();
                self.tasks.spawn(async move {
                    let result = match &request.query {
                        ExplorerQuery::Search(query) => source.search_recipes(query).await,
                        ExplorerQuery::Category(category) => {
                            source.get_recipes_by_category(category).await
                        }
                    };
                    let msg = match result {
                        Ok(results) => Message::ExplorerResults { request, results },
                        Err(e) => Message::ExplorerFailed {
                            request,
                            error: e.to_string(),
                        },
                    };
                    deliver(&tx, msg).await;
                });
            }

            UpdateAction::FetchCategories => {
                let Some(source) = self.source.clone() else {
                    self.report_offline(Message::CategoriesFailed(Error::Offline.to_string()));
                    return;
                };
                let tx = self.msg_tx.clone();
                self.tasks.spawn(async move {
                    let msg = match source.get_categories().await {
                        Ok(categories) => Message::CategoriesLoaded(categories),
                        Err(e) => Message::CategoriesFailed(e.to_string()),
                    };
                    deliver(&tx, msg).await;
                });
            }

            UpdateAction::FetchRecipeDetail { request } => {
                let Some(source) = self.source.clone() else {
                    self.report_offline(Message::RecipeDetailFailed {
                        request,
                        error: Error::Offline.to_string(),
                    });
                    return;
                };
                let tx = self.msg_tx.clone();
                self.tasks.spawn(async move {
                    let result = match &request {
                        DetailRequest::Lookup(id) => source.get_recipe_by_id(id).await,
                        DetailRequest::Random => source.get_random_recipe().await,
                    };
                    let msg = match result {
                        Ok(recipe) => Message::RecipeDetailLoaded { request, recipe },
                        Err(e) => Message::RecipeDetailFailed {
                            request,
                            error: e.to_string(),
                        },
                    };
                    deliver(&tx, msg).await;
                });
            }
        }
    }

    /// Remote calls still running
    pub fn in_flight(&mut self) -> usize {
        self.reap_finished();
        self.tasks.len()
    }

    /// Cancel timers and abort every outstanding task
    pub fn shutdown(&mut self) {
        self.explorer_debounce.cancel();
        self.currency_debounce.cancel();
        if !self.tasks.is_empty() {
            debug!("Aborting {} background task(s)", self.tasks.len());
        }
        self.tasks.abort_all();
    }

    fn reap_finished(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            if let Err(e) = result {
                if e.is_panic() {
                    warn!("Background task panicked: {}", e);
                }
            }
        }
    }

    fn report_offline(&self, message: Message) {
        debug!("Offline; skipping remote request");
        let sent = self
            .msg_tx
            .try_send(message)
            .map_err(|e| Error::channel_send(e.to_string()));
        if let Err(e) = sent {
            warn!("Failed to report offline request: {}", e);
        }
    }
}

/// Hand a task's result back to the update loop
async fn send_result(tx: &mpsc::Sender<Message>, message: Message) -> Result<()> {
    tx.send(message)
        .await
        .map_err(|e| Error::channel_send(e.to_string()))
}

/// Like [`send_result`], for tasks with nowhere to propagate to. The loop
/// only stops listening while shutting down, so a failure is just logged.
async fn deliver(tx: &mpsc::Sender<Message>, message: Message) {
    if let Err(e) = send_result(tx, message).await {
        debug!("Dropping background result: {}", e);
    }
}
