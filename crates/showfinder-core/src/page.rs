//! Page state
//!
//! The shows container, the episodes container and the visibility of the
//! episodes area. Mutated only through [`Page::apply`].

use serde::{Deserialize, Serialize};

use crate::render::views::{CARD_CLASS, CARD_TITLE_CLASS, SHOW_ID_ATTR};
use crate::render::{Element, VNode, nodes_to_html};

/// A change to the page produced by a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Replace the whole shows container
    ReplaceShows(Vec<VNode>),
    /// Replace the whole episodes container
    ReplaceEpisodes(Vec<VNode>),
    /// Make the episodes area visible
    RevealEpisodes,
}

/// Show id and title recovered from a rendered card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    /// Show id the card is tagged with
    pub show_id: u64,
    /// Title displayed in the card heading
    pub title: String,
}

/// Serialized page contents handed to the webview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// Inner HTML of the shows container
    pub shows_html: String,
    /// Inner HTML of the episodes container
    pub episodes_html: String,
    /// Whether the episodes area is shown
    pub episodes_visible: bool,
}

/// Current contents of the search page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    shows: Vec<VNode>,
    episodes: Vec<VNode>,
    episodes_visible: bool,
}

impl Page {
    /// An empty page with the episodes area hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one patch
    pub fn apply(&mut self, patch: Patch) {
        match patch {
            Patch::ReplaceShows(nodes) => self.shows = nodes,
            Patch::ReplaceEpisodes(nodes) => self.episodes = nodes,
            Patch::RevealEpisodes => self.episodes_visible = true,
        }
    }

    /// Applies patches in order
    pub fn apply_all(&mut self, patches: impl IntoIterator<Item = Patch>) {
        for patch in patches {
            self.apply(patch);
        }
    }

    /// Nodes of the shows container
    pub fn shows(&self) -> &[VNode] {
        &self.shows
    }

    /// Nodes of the episodes container
    pub fn episodes(&self) -> &[VNode] {
        &self.episodes
    }

    /// Whether the episodes area is visible
    pub fn episodes_visible(&self) -> bool {
        self.episodes_visible
    }

    /// Looks up the card tagged with `show_id` and reads its id and title
    /// back from the rendered nodes
    pub fn card(&self, show_id: u64) -> Option<CardInfo> {
        let wanted = show_id.to_string();
        let is_card = |e: &Element| {
            e.has_class(CARD_CLASS) && e.get_attr(SHOW_ID_ATTR) == Some(wanted.as_str())
        };

        let card = self.shows.iter().find_map(|node| node.find(&is_card))?;
        let show_id = card.get_attr(SHOW_ID_ATTR)?.parse().ok()?;
        let title = card
            .find(&|e: &Element| e.has_class(CARD_TITLE_CLASS))
            .map(Element::text_content)
            .unwrap_or_default();

        Some(CardInfo { show_id, title })
    }

    /// Serializes both containers for the webview
    pub fn view(&self) -> PageView {
        PageView {
            shows_html: nodes_to_html(&self.shows),
            episodes_html: nodes_to_html(&self.episodes),
            episodes_visible: self.episodes_visible,
        }
    }
}
