//! Show search and episode lookup
//!
//! Combines the HTTP client with response normalization.

use tracing::instrument;

use crate::api::{ApiEpisode, SearchHit};
use crate::client::{ClientConfig, TvMazeClient};
use crate::error::{Result, ShowfinderError};
use crate::types::{EpisodeSummary, ShowSummary, normalize_episodes, normalize_hits};
use crate::url::{build_episodes_url, build_search_url};

/// High-level TVMaze API
///
/// Returns normalized [`ShowSummary`] / [`EpisodeSummary`] records ready
/// for rendering.
#[derive(Debug)]
pub struct ShowFinder {
    client: TvMazeClient,
    placeholder_poster: String,
}

impl ShowFinder {
    /// Create a new finder with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new finder with custom configuration
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client
    /// cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = TvMazeClient::with_config(&config)?;
        Ok(Self {
            client,
            placeholder_poster: config.placeholder_poster,
        })
    }

    /// Search shows by name
    ///
    /// # Arguments
    /// * `query` - Search text, trimmed before use
    ///
    /// # Returns
    /// Matching shows in the order TVMaze ranked them, empty if none match
    ///
    /// # Errors
    /// - `EmptyQuery` if query is empty or whitespace only (no request is made)
    /// - `HttpError` / `Status` if the request fails
    /// - `ParseError` if the response is not a search result array
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> showfinder_core::Result<()> {
    /// use showfinder_core::ShowFinder;
    /// let finder = ShowFinder::new()?;
    /// for show in finder.search("archer").await? {
    ///     println!("{}: {}", show.id, show.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<ShowSummary>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(ShowfinderError::EmptyQuery);
        }

        let url = build_search_url(self.client.base_url(), trimmed);
        let hits: Vec<SearchHit> = self.client.get_json(&url).await?;
        let shows = normalize_hits(hits, &self.placeholder_poster);

        tracing::debug!(count = shows.len(), "show search finished");
        Ok(shows)
    }

    /// List the episodes of a show
    ///
    /// # Returns
    /// Episodes in the order TVMaze returns them (season, then number)
    ///
    /// # Errors
    /// - `HttpError` / `Status` if the request fails (unknown ids give `Status` 404)
    /// - `ParseError` if the response is not an episode array
    #[instrument(skip(self))]
    pub async fn episodes(&self, show_id: u64) -> Result<Vec<EpisodeSummary>> {
        let url = build_episodes_url(self.client.base_url(), show_id);
        let raw: Vec<ApiEpisode> = self.client.get_json(&url).await?;
        let episodes = normalize_episodes(raw);

        tracing::debug!(count = episodes.len(), "episode lookup finished");
        Ok(episodes)
    }
}
