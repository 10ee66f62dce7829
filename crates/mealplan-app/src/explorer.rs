//! Recipe explorer state: the "My Recipes" / "Explore" tabs of the recipes page
//!
//! The explore side drives a debounce → request → page cycle against the
//! remote source:
//!
//! 1. Every query or category change bumps `generation` and asks the runner
//!    to schedule a debounce timer tagged with it.
//! 2. When a timer fires, only the one whose generation is still current
//!    starts a request. Page 1 replaces the results.
//! 3. Each request carries an id. A response whose id is no longer the
//!    active request is dropped.
//! 4. The API returns the full result set for every call, so pages are cut
//!    client-side: page `n` is items `(n-1)*size .. n*size`. A full page means
//!    there may be more. Accumulated results are de-duplicated by recipe id.

use std::collections::HashSet;

use mealplan_core::prelude::*;
use mealplan_core::{Category, RecipeSummary};

use crate::config::ExplorerSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeTab {
    /// Local recipe book
    #[default]
    My,
    /// Remote recipes
    Explore,
}

impl RecipeTab {
    pub fn title(&self) -> &'static str {
        match self {
            RecipeTab::My => "My Recipes",
            RecipeTab::Explore => "Explore Recipes",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            RecipeTab::My => RecipeTab::Explore,
            RecipeTab::Explore => RecipeTab::My,
        }
    }
}

/// What a remote request asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerQuery {
    Search(String),
    Category(String),
}

/// A remote page request; responses echo it back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerRequest {
    pub id: u64,
    pub query: ExplorerQuery,
    /// 1-based
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct ExplorerState {
    pub tab: RecipeTab,
    /// Free-text search; mutually exclusive with `category`
    pub query: String,
    /// Category filter; mutually exclusive with `query`
    pub category: Option<String>,

    pub results: Vec<RecipeSummary>,
    /// Last page loaded, 0 before the first
    pub page: u32,
    pub has_more: bool,
    pub is_loading: bool,
    /// Highlighted row of the active tab's list
    pub cursor: usize,

    pub categories: Vec<Category>,
    pub categories_requested: bool,
    /// Highlighted row of the category picker
    pub category_cursor: usize,

    generation: u64,
    next_request_id: u64,
    active_request: Option<ExplorerRequest>,
    /// Inputs the shown results were requested for
    loaded_for: Option<ExplorerQuery>,

    page_size: usize,
    load_more_threshold: usize,
}

impl ExplorerState {
    pub fn new(settings: &ExplorerSettings) -> Self {
        Self {
            tab: RecipeTab::My,
            query: String::new(),
            category: None,
            results: Vec::new(),
            page: 0,
            has_more: false,
            is_loading: false,
            cursor: 0,
            categories: Vec::new(),
            categories_requested: false,
            category_cursor: 0,
            generation: 0,
            next_request_id: 1,
            active_request: None,
            loaded_for: None,
            page_size: settings.page_size.max(1),
            load_more_threshold: settings.load_more_threshold,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn active_request(&self) -> Option<&ExplorerRequest> {
        self.active_request.as_ref()
    }

    /// Record a change of inputs: bump the generation and forget any request
    /// in flight. Returns the new generation to debounce on.
    fn inputs_changed(&mut self) -> u64 {
        self.generation += 1;
        self.active_request = None;
        self.is_loading = false;
        self.cursor = 0;
        self.generation
    }

    /// Replace the search text. Clears the category filter.
    pub fn set_query(&mut self, query: impl Into<String>) -> u64 {
        self.query = query.into();
        self.category = None;
        self.inputs_changed()
    }

    pub fn push_query_char(&mut self, c: char) -> u64 {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.set_query(query)
    }

    pub fn pop_query_char(&mut self) -> u64 {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(query)
    }

    /// Filter by `category`. Clears the search text; choosing the active
    /// category again clears the filter.
    pub fn select_category(&mut self, category: &str) -> u64 {
        if self.category.as_deref() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.to_string());
        }
        self.query.clear();
        self.inputs_changed()
    }

    /// Re-arm the debounce without changing inputs (e.g. on entering Explore)
    pub fn refresh(&mut self) -> u64 {
        self.inputs_changed()
    }

    /// What the current inputs ask the remote source for, if anything
    pub fn current_query(&self) -> Option<ExplorerQuery> {
        if let Some(category) = &self.category {
            return Some(ExplorerQuery::Category(category.clone()));
        }
        let query = self.query.trim();
        (!query.is_empty()).then(|| ExplorerQuery::Search(query.to_string()))
    }

    fn start_request(&mut self, query: ExplorerQuery, page: u32) -> ExplorerRequest {
        let request = ExplorerRequest {
            id: self.next_request_id,
            query,
            page,
        };
        self.next_request_id += 1;
        self.active_request = Some(request.clone());
        self.is_loading = true;
        request
    }

    /// A debounce timer fired. Returns the request to issue, if any.
    ///
    /// Stale timers and timers that fire outside the Explore tab do nothing.
    /// Blank inputs clear the results without a request.
    pub fn debounce_elapsed(&mut self, generation: u64) -> Option<ExplorerRequest> {
        if generation != self.generation {
            trace!(
                "Ignoring stale explorer debounce {} (current {})",
                generation,
                self.generation
            );
            return None;
        }
        if self.tab != RecipeTab::Explore {
            return None;
        }

        self.results.clear();
        self.page = 0;
        self.cursor = 0;
        self.loaded_for = self.current_query();

        match self.current_query() {
            Some(query) => {
                self.has_more = true;
                Some(self.start_request(query, 1))
            }
            None => {
                self.has_more = false;
                self.active_request = None;
                self.is_loading = false;
                None
            }
        }
    }

    /// Whether entering Explore has to search again: the inputs changed
    /// since the shown results were requested, or a search came back empty
    /// or failed and nothing is in flight
    pub fn needs_refresh(&self) -> bool {
        let current = self.current_query();
        if current != self.loaded_for {
            return true;
        }
        current.is_some() && self.results.is_empty() && !self.is_loading
    }

    /// Whether the cursor is close enough to the end to fetch the next page
    pub fn should_load_more(&self) -> bool {
        self.tab == RecipeTab::Explore
            && self.has_more
            && !self.is_loading
            && !self.results.is_empty()
            && self.cursor + self.load_more_threshold >= self.results.len().saturating_sub(1)
    }

    /// Start loading the next page if [`Self::should_load_more`] allows it
    pub fn load_more(&mut self) -> Option<ExplorerRequest> {
        if !self.should_load_more() {
            return None;
        }
        let query = self.current_query()?;
        let page = self.page + 1;
        debug!("Loading explorer page {} for {:?}", page, query);
        Some(self.start_request(query, page))
    }

    fn is_active(&self, request: &ExplorerRequest) -> bool {
        self.active_request.as_ref().map(|r| r.id) == Some(request.id)
    }

    /// Apply a response. Returns `false` if the request was stale.
    pub fn apply_results(&mut self, request: &ExplorerRequest, all: Vec<RecipeSummary>) -> bool {
        if !self.is_active(request) {
            debug!("Dropping stale explorer response for request {}", request.id);
            return false;
        }
        self.active_request = None;
        self.is_loading = false;

        let start = (request.page.saturating_sub(1) as usize).saturating_mul(self.page_size);
        let page_items: Vec<RecipeSummary> =
            all.into_iter().skip(start).take(self.page_size).collect();
        self.has_more = page_items.len() == self.page_size;

        if request.page <= 1 {
            self.results.clear();
        }
        let mut seen: HashSet<String> = self.results.iter().map(|r| r.id.clone()).collect();
        self.results
            .extend(page_items.into_iter().filter(|r| seen.insert(r.id.clone())));
        self.page = request.page;
        true
    }

    /// Apply a failed request: no error surfaces, there are just no more results
    pub fn apply_failure(&mut self, request: &ExplorerRequest, error: &str) -> bool {
        if !self.is_active(request) {
            return false;
        }
        warn!("Recipe request {:?} failed: {}", request.query, error);
        self.active_request = None;
        self.is_loading = false;
        self.has_more = false;
        true
    }

    /// Number of rows in the explore list
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn selected_result(&self) -> Option<&RecipeSummary> {
        self.results.get(self.cursor)
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.category_cursor = 0;
    }

    pub fn move_category_cursor(&mut self, delta: isize) {
        let len = self.categories.len();
        self.category_cursor = if len == 0 {
            0
        } else {
            (self.category_cursor as isize + delta).clamp(0, len as isize - 1) as usize
        };
    }

    pub fn highlighted_category(&self) -> Option<&Category> {
        self.categories.get(self.category_cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_api::test_utils::test_summaries;

    fn explorer() -> ExplorerState {
        let mut state = ExplorerState::new(&ExplorerSettings::default());
        state.tab = RecipeTab::Explore;
        state
    }

    #[test]
    fn test_query_and_category_are_exclusive() {
        let mut state = explorer();
        state.set_query("chicken");
        state.select_category("Beef");
        assert_eq!(state.query, "");
        assert_eq!(state.category.as_deref(), Some("Beef"));

        state.push_query_char('p');
        assert!(state.category.is_none());
        assert_eq!(state.query, "p");
    }

    #[test]
    fn test_selecting_active_category_clears_it() {
        let mut state = explorer();
        state.select_category("Beef");
        state.select_category("Beef");
        assert!(state.category.is_none());
        assert!(state.current_query().is_none());
    }

    #[test]
    fn test_only_current_generation_fires() {
        let mut state = explorer();
        let first = state.push_query_char('c');
        let second = state.push_query_char('h');
        assert!(second > first);

        assert!(state.debounce_elapsed(first).is_none());
        let request = state.debounce_elapsed(second).unwrap();
        assert_eq!(request.query, ExplorerQuery::Search("ch".into()));
        assert_eq!(request.page, 1);
        assert!(state.is_loading);
    }

    #[test]
    fn test_blank_inputs_clear_without_request() {
        let mut state = explorer();
        state.results = test_summaries("Old", "Beef", 3);
        let generation = state.set_query("   ");
        assert!(state.debounce_elapsed(generation).is_none());
        assert!(state.results.is_empty());
        assert!(!state.has_more);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_debounce_outside_explore_tab_does_nothing() {
        let mut state = explorer();
        state.tab = RecipeTab::My;
        let generation = state.set_query("pasta");
        assert!(state.debounce_elapsed(generation).is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn test_needs_refresh_tracks_loaded_inputs() {
        let mut state = explorer();
        assert!(!state.needs_refresh());

        let generation = state.set_query("beef");
        assert!(state.needs_refresh());
        let request = state.debounce_elapsed(generation).unwrap();
        // In flight for the current inputs
        assert!(!state.needs_refresh());

        state.apply_results(&request, test_summaries("Beef", "Beef", 5));
        assert!(!state.needs_refresh());

        state.tab = RecipeTab::My;
        state.push_query_char('y');
        assert!(state.needs_refresh());
    }

    #[test]
    fn test_needs_refresh_after_failed_search() {
        let mut state = explorer();
        let generation = state.set_query("soup");
        let request = state.debounce_elapsed(generation).unwrap();
        state.apply_failure(&request, "timeout");
        assert!(state.results.is_empty());
        assert!(state.needs_refresh());
    }

    #[test]
    fn test_full_page_means_more() {
        let mut state = explorer();
        let generation = state.set_query("beef");
        let request = state.debounce_elapsed(generation).unwrap();

        assert!(state.apply_results(&request, test_summaries("Beef", "Beef", 45)));
        assert_eq!(state.results.len(), 20);
        assert!(state.has_more);
        assert_eq!(state.page, 1);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_short_page_means_no_more() {
        let mut state = explorer();
        let generation = state.set_query("beef");
        let request = state.debounce_elapsed(generation).unwrap();

        state.apply_results(&request, test_summaries("Beef", "Beef", 7));
        assert_eq!(state.results.len(), 7);
        assert!(!state.has_more);
    }

    #[test]
    fn test_load_more_pages_without_duplicates() {
        let mut state = explorer();
        let generation = state.set_query("beef");
        let request = state.debounce_elapsed(generation).unwrap();
        let all = test_summaries("Beef", "Beef", 45);
        state.apply_results(&request, all.clone());

        // Not near the end yet
        assert!(state.load_more().is_none());

        state.cursor = 17;
        let page2 = state.load_more().unwrap();
        assert_eq!(page2.page, 2);
        // In flight: no second load
        assert!(state.load_more().is_none());

        state.apply_results(&page2, all.clone());
        assert_eq!(state.results.len(), 40);
        assert!(state.has_more);

        state.cursor = 39;
        let page3 = state.load_more().unwrap();
        state.apply_results(&page3, all.clone());
        assert_eq!(state.results.len(), 45);
        assert!(!state.has_more);

        let ids: HashSet<&str> = state.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 45);
        assert!(state.load_more().is_none());
    }

    #[test]
    fn test_refetching_same_page_does_not_duplicate() {
        let mut state = explorer();
        let generation = state.set_query("beef");
        let request = state.debounce_elapsed(generation).unwrap();
        let all = test_summaries("Beef", "Beef", 45);
        state.apply_results(&request, all.clone());

        // A page that overlaps what is already shown adds nothing twice
        let overlap = ExplorerRequest {
            id: 99,
            query: request.query.clone(),
            page: 2,
        };
        state.active_request = Some(overlap.clone());
        let mut shuffled = all.clone();
        shuffled.rotate_left(20);
        shuffled.rotate_right(5);
        state.apply_results(&overlap, shuffled);
        let ids: HashSet<&str> = state.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), state.results.len());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = explorer();
        let g1 = state.set_query("chi");
        let old = state.debounce_elapsed(g1).unwrap();

        let g2 = state.set_query("chicken");
        let new = state.debounce_elapsed(g2).unwrap();

        assert!(!state.apply_results(&old, test_summaries("Old", "X", 3)));
        assert!(state.results.is_empty());
        assert!(state.is_loading);

        assert!(state.apply_results(&new, test_summaries("Chicken", "Chicken", 2)));
        assert_eq!(state.results.len(), 2);
    }

    #[test]
    fn test_failure_means_no_more_results() {
        let mut state = explorer();
        let generation = state.set_query("beef");
        let request = state.debounce_elapsed(generation).unwrap();

        assert!(state.apply_failure(&request, "timeout"));
        assert!(!state.has_more);
        assert!(!state.is_loading);
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_load_more_only_in_explore_tab() {
        let mut state = explorer();
        let generation = state.set_query("beef");
        let request = state.debounce_elapsed(generation).unwrap();
        state.apply_results(&request, test_summaries("Beef", "Beef", 45));
        state.cursor = 19;

        state.tab = RecipeTab::My;
        assert!(state.load_more().is_none());
        state.tab = RecipeTab::Explore;
        assert!(state.load_more().is_some());
    }
}
