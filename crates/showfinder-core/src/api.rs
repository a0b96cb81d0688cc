//! TVMaze API response types for deserialization.
//!
//! These structures mirror the JSON the TVMaze endpoints return. Fields we
//! never read are left out; serde ignores them.

use serde::Deserialize;

/// One entry of the `/search/shows` response array.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    /// The matching show
    pub show: ApiShow,
}

/// Show object nested in a search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiShow {
    /// TVMaze show id
    pub id: u64,
    /// Show title
    pub name: String,
    /// HTML summary, null for sparse entries
    pub summary: Option<String>,
    /// Poster images, null when TVMaze has none
    pub image: Option<ApiImage>,
}

/// Poster image variants.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiImage {
    /// Medium-size poster URL
    pub medium: Option<String>,
    /// Full-size poster URL
    pub original: Option<String>,
}

/// One entry of the `/shows/{id}/episodes` response array.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEpisode {
    /// TVMaze episode id
    pub id: u64,
    /// Episode title
    pub name: Option<String>,
    /// Season number
    pub season: u32,
    /// Episode number within the season (null for specials)
    pub number: Option<u32>,
}
