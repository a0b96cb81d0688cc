//! Showfinder Core Library
//!
//! Searches TVMaze for shows, lists their episodes and renders both into
//! a page model that a webview can display.
//!
//! # Overview
//!
//! - [`ShowFinder`] fetches and normalizes search results and episode lists
//! - [`render`] turns normalized records into virtual DOM patches
//! - [`Page`] holds the rendered containers and applies patches
//! - [`Controller`] wires the search and "Episodes" triggers together,
//!   dropping responses that a newer request has superseded
//!
//! # Example
//!
//! ```no_run
//! use showfinder_core::{Controller, Outcome, Result, ShowFinder};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let controller = Controller::new(ShowFinder::new()?);
//!
//!     if controller.submit_search("archer").await? == Outcome::Rendered {
//!         let view = controller.view().await;
//!         println!("{}", view.shows_html);
//!     }
//!
//!     // 315 is one of the cards rendered above
//!     controller.open_episodes(315).await?;
//!     println!("{}", controller.view().await.episodes_html);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
mod client;
mod controller;
mod error;
mod finder;
pub mod page;
pub mod render;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, TvMazeClient};

// Re-export error types
pub use error::{Result, ShowfinderError};

// Re-export the high-level API
pub use controller::{Controller, Outcome};
pub use finder::ShowFinder;
pub use page::{CardInfo, Page, PageView, Patch};
pub use render::{render_episodes, render_shows};

// Re-export data types
pub use types::{
    DEFAULT_PLACEHOLDER_POSTER, EpisodeSummary, ShowSummary, normalize_episodes, normalize_hits,
};
