//! Interaction controller
//!
//! Wires the two page triggers to their fetch-then-render pipelines and
//! owns the page state. Each trigger path hands out increasing tickets;
//! a response is rendered only if its ticket is still the latest one for
//! that path when it arrives.

use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::{Result, ShowfinderError};
use crate::finder::ShowFinder;
use crate::page::{Page, PageView};
use crate::render::{render_episodes, render_shows};

/// What a trigger did to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to do (empty query); no request was made
    Ignored,
    /// The response was rendered
    Rendered,
    /// A newer request on the same path was issued meanwhile; the
    /// response was dropped
    Stale,
}

#[derive(Debug, Default)]
struct UiState {
    page: Page,
    search_ticket: u64,
    episodes_ticket: u64,
}

/// Owns the page and handles search and episode triggers
#[derive(Debug)]
pub struct Controller {
    finder: ShowFinder,
    state: Mutex<UiState>,
}

impl Controller {
    /// Create a controller around `finder` with an empty page
    pub fn new(finder: ShowFinder) -> Self {
        Self {
            finder,
            state: Mutex::new(UiState::default()),
        }
    }

    /// The finder used for fetches
    pub fn finder(&self) -> &ShowFinder {
        &self.finder
    }

    /// Snapshot of the current page
    pub async fn view(&self) -> PageView {
        self.state.lock().await.page.view()
    }

    /// Runs `f` against the current page
    pub async fn with_page<R>(&self, f: impl FnOnce(&Page) -> R) -> R {
        f(&self.state.lock().await.page)
    }

    /// Handles a search form submission
    ///
    /// An empty (or whitespace-only) query is ignored without a request.
    /// Otherwise the matching shows replace the shows container.
    ///
    /// # Arguments
    /// * `query` - Contents of the search input, trimmed before use
    ///
    /// # Returns
    /// - `Ignored` for an empty query
    /// - `Rendered` once the shows container holds the results
    /// - `Stale` if a later search was submitted before this one finished,
    ///   whether this one succeeded or failed
    ///
    /// # Errors
    /// Fetch failures of the latest search are logged and returned; the
    /// page is left unchanged.
    #[instrument(skip(self))]
    pub async fn submit_search(&self, query: &str) -> Result<Outcome> {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("empty search query ignored");
            return Ok(Outcome::Ignored);
        }

        let ticket = {
            let mut state = self.state.lock().await;
            state.search_ticket = state.search_ticket.wrapping_add(1);
            state.search_ticket
        };

        let fetched = self.finder.search(query).await;

        let mut state = self.state.lock().await;
        if state.search_ticket != ticket {
            tracing::debug!(
                ticket,
                latest = state.search_ticket,
                failed = fetched.is_err(),
                "stale search result dropped"
            );
            return Ok(Outcome::Stale);
        }

        let shows = fetched.inspect_err(|e| {
            tracing::warn!(error = %e, "show search failed");
        })?;

        tracing::info!(count = shows.len(), "rendering shows");
        state.page.apply_all(render_shows(&shows));
        Ok(Outcome::Rendered)
    }

    /// Handles a click on the "Episodes" control of the card for `show_id`
    ///
    /// The id and title are read back from the rendered card, then the
    /// show's episodes replace the episodes container and the episodes
    /// area is revealed.
    ///
    /// # Arguments
    /// * `show_id` - `data-show-id` of the clicked control
    ///
    /// # Returns
    /// - `Rendered` once the episodes area shows the list
    /// - `Stale` if another card was clicked before this lookup finished,
    ///   whether this one succeeded or failed
    ///
    /// # Errors
    /// - `UnknownShow` if no rendered card carries `show_id`
    /// - fetch failures of the latest click, logged and returned with the
    ///   page unchanged
    #[instrument(skip(self))]
    pub async fn open_episodes(&self, show_id: u64) -> Result<Outcome> {
        let (card, ticket) = {
            let mut state = self.state.lock().await;
            let card = state
                .page
                .card(show_id)
                .ok_or(ShowfinderError::UnknownShow(show_id))?;
            state.episodes_ticket = state.episodes_ticket.wrapping_add(1);
            (card, state.episodes_ticket)
        };

        let fetched = self.finder.episodes(card.show_id).await;

        let mut state = self.state.lock().await;
        if state.episodes_ticket != ticket {
            tracing::debug!(
                ticket,
                latest = state.episodes_ticket,
                failed = fetched.is_err(),
                "stale episode list dropped"
            );
            return Ok(Outcome::Stale);
        }

        let episodes = fetched.inspect_err(|e| {
            tracing::warn!(error = %e, show_id, "episode lookup failed");
        })?;

        tracing::info!(count = episodes.len(), title = %card.title, "rendering episodes");
        state.page.apply_all(render_episodes(&episodes, &card.title));
        Ok(Outcome::Rendered)
    }
}
