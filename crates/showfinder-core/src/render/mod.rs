//! Renderers for the show and episode lists
//!
//! Pure functions from normalized records to [`Patch`]es; nothing here
//! touches page state. [`crate::page::Page::apply`] is the only place
//! patches take effect.

pub mod views;
pub mod vnode;

pub use vnode::{Element, VNode, nodes_to_html};

use crate::page::Patch;
use crate::types::{EpisodeSummary, ShowSummary};

/// Renders the shows container: one card per show, replacing whatever
/// was there before
pub fn render_shows(shows: &[ShowSummary]) -> Vec<Patch> {
    let cards = shows.iter().map(views::show_card).collect();
    vec![Patch::ReplaceShows(cards)]
}

/// Renders the episodes container with a `title` heading followed by
/// one entry per episode, then reveals the episodes area
pub fn render_episodes(episodes: &[EpisodeSummary], title: &str) -> Vec<Patch> {
    let mut nodes = Vec::with_capacity(episodes.len() + 1);
    nodes.push(views::episodes_heading(title));
    nodes.extend(episodes.iter().map(views::episode_item));

    vec![Patch::ReplaceEpisodes(nodes), Patch::RevealEpisodes]
}
