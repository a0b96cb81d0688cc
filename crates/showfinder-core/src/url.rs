//! URL helper functions for the TVMaze API
//!
//! Provides functions for building search and episode-list URLs.

/// Default TVMaze API root
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Builds the show search URL for a given query
///
/// URL encodes the query and appends it as the `q` parameter.
///
/// # Arguments
/// * `base` - API root (e.g., "https://api.tvmaze.com"), trailing slash optional
/// * `query` - Search query string
///
/// # Example
/// ```
/// use showfinder_core::url::build_search_url;
/// let url = build_search_url("https://api.tvmaze.com", "the office");
/// assert_eq!(url, "https://api.tvmaze.com/search/shows?q=the%20office");
/// ```
pub fn build_search_url(base: &str, query: &str) -> String {
    let encoded = urlencoding::encode(query);
    format!("{}/search/shows?q={}", base.trim_end_matches('/'), encoded)
}

/// Builds the episode list URL for a show
///
/// # Example
/// ```
/// use showfinder_core::url::build_episodes_url;
/// let url = build_episodes_url("https://api.tvmaze.com/", 315);
/// assert_eq!(url, "https://api.tvmaze.com/shows/315/episodes");
/// ```
pub fn build_episodes_url(base: &str, show_id: u64) -> String {
    format!("{}/shows/{}/episodes", base.trim_end_matches('/'), show_id)
}

/// Checks that a base URL is an absolute http(s) URL with a host
pub fn is_valid_base_url(base: &str) -> bool {
    let rest = base
        .strip_prefix("https://")
        .or_else(|| base.strip_prefix("http://"));

    match rest {
        Some(host) => !host.is_empty() && !host.starts_with('/'),
        None => false,
    }
}
