//! Showfinder Tauri Integration
//!
//! Provides a Tauri plugin that drives the showfinder search page from a
//! webview.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(showfinder_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then forward page events from the frontend and swap in the result:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! function paint(view) {
//!   document.querySelector('#shows-list').innerHTML = view.shows_html;
//!   document.querySelector('#episodes-list').innerHTML = view.episodes_html;
//!   document.querySelector('#episodes-area').hidden = !view.episodes_visible;
//! }
//!
//! document.querySelector('#search-form').addEventListener('submit', async (evt) => {
//!   evt.preventDefault();
//!   const query = document.querySelector('#search-query').value;
//!   paint(await invoke('plugin:showfinder|submit_search', { query }));
//! });
//!
//! document.querySelector('#shows-list').addEventListener('click', async (evt) => {
//!   const trigger = evt.target.closest('.episodes-trigger');
//!   if (!trigger) return;
//!   const showId = Number(trigger.dataset.showId);
//!   paint(await invoke('plugin:showfinder|open_episodes', { showId }));
//! });
//! ```

use std::sync::Arc;

use showfinder_core::{ClientConfig, Controller, ShowFinder};
use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;

/// Shared controller state
///
/// The controller serializes page updates internally, so commands can
/// run concurrently against the same state.
pub struct ShowfinderState {
    pub(crate) controller: Arc<Controller>,
}

impl ShowfinderState {
    /// Create a new state with default configuration
    ///
    /// # Errors
    /// Returns error string if the HTTP client cannot be built
    pub fn new() -> Result<Self, String> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new state with custom client configuration
    ///
    /// # Errors
    /// Returns error string if the configuration is invalid
    pub fn with_config(config: ClientConfig) -> Result<Self, String> {
        let finder = ShowFinder::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            controller: Arc::new(Controller::new(finder)),
        })
    }

    /// The controller behind the commands
    pub fn controller(&self) -> &Arc<Controller> {
        &self.controller
    }
}

/// Initialize the showfinder plugin with default configuration
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(showfinder_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    init_with_config(ClientConfig::default())
}

/// Initialize the showfinder plugin with a custom client configuration
pub fn init_with_config<R: Runtime>(config: ClientConfig) -> TauriPlugin<R> {
    Builder::new("showfinder")
        .invoke_handler(tauri::generate_handler![
            commands::search_shows,
            commands::get_episodes,
            commands::submit_search,
            commands::open_episodes,
            commands::current_page
        ])
        .setup(move |app, _api| {
            let state = ShowfinderState::with_config(config)
                .map_err(Box::<dyn std::error::Error>::from)?;
            tracing::info!("showfinder plugin ready");
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use showfinder_core::{EpisodeSummary as Episode, PageView, ShowSummary as Show};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_creation() {
        let state = ShowfinderState::new();
        assert!(state.is_ok());
    }

    #[test]
    fn test_state_rejects_bad_base_url() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        let err = ShowfinderState::with_config(config).err().unwrap();
        assert_eq!(err, "Invalid URL: not a url");
    }

    #[tokio::test]
    async fn test_state_starts_with_empty_page() {
        let state = ShowfinderState::new().unwrap();
        let view = state.controller().view().await;
        assert!(view.shows_html.is_empty());
        assert!(!view.episodes_visible);
    }
}
