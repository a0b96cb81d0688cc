//! Tauri commands for showfinder
//!
//! This module contains all Tauri command implementations.

use showfinder_core::{EpisodeSummary, PageView, ShowSummary};
use tauri::State;

use crate::ShowfinderState;

/// Search TVMaze for shows
///
/// Returns the normalized records without touching the page.
///
/// # Arguments
/// * `state` - Managed ShowfinderState from Tauri
/// * `query` - Search query string
///
/// # Returns
/// Matching shows in TVMaze's order
///
/// # Errors
/// Returns error message as String if the query is empty or the search fails
#[tauri::command]
pub async fn search_shows(
    state: State<'_, ShowfinderState>,
    query: String,
) -> Result<Vec<ShowSummary>, String> {
    state
        .controller
        .finder()
        .search(&query)
        .await
        .map_err(|e| e.to_string())
}

/// List the episodes of a show
///
/// # Arguments
/// * `state` - Managed ShowfinderState from Tauri
/// * `show_id` - TVMaze show id
///
/// # Returns
/// The show's episodes in TVMaze's order
///
/// # Errors
/// Returns error message as String if the lookup fails
#[tauri::command]
pub async fn get_episodes(
    state: State<'_, ShowfinderState>,
    show_id: u64,
) -> Result<Vec<EpisodeSummary>, String> {
    state
        .controller
        .finder()
        .episodes(show_id)
        .await
        .map_err(|e| e.to_string())
}

/// Search form submission
///
/// Runs the search trigger and returns the page to swap into the webview.
/// An empty query leaves the page as it was.
///
/// # Arguments
/// * `state` - Managed ShowfinderState from Tauri
/// * `query` - Contents of the search input
///
/// # Returns
/// The page after the trigger ran
///
/// # Errors
/// Returns error message as String if the search fails
#[tauri::command]
pub async fn submit_search(
    state: State<'_, ShowfinderState>,
    query: String,
) -> Result<PageView, String> {
    let controller = &state.controller;
    let outcome = controller
        .submit_search(&query)
        .await
        .map_err(|e| e.to_string())?;
    tracing::debug!(?outcome, "search trigger handled");
    Ok(controller.view().await)
}

/// Click on a card's "Episodes" control
///
/// # Arguments
/// * `state` - Managed ShowfinderState from Tauri
/// * `show_id` - `data-show-id` of the clicked control
///
/// # Returns
/// The page after the trigger ran
///
/// # Errors
/// Returns error message as String if no card carries the id or the
/// lookup fails
#[tauri::command]
pub async fn open_episodes(
    state: State<'_, ShowfinderState>,
    show_id: u64,
) -> Result<PageView, String> {
    let controller = &state.controller;
    let outcome = controller
        .open_episodes(show_id)
        .await
        .map_err(|e| e.to_string())?;
    tracing::debug!(?outcome, show_id, "episodes trigger handled");
    Ok(controller.view().await)
}

/// Current page contents, for the initial paint
#[tauri::command]
pub async fn current_page(state: State<'_, ShowfinderState>) -> Result<PageView, String> {
    Ok(state.controller.view().await)
}
