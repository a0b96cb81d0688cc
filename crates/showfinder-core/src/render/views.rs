//! Card and list-entry templates

use super::vnode::{Element, VNode, el, raw, text};
use crate::types::{EpisodeSummary, ShowSummary};

/// Attribute tagging cards and triggers with their show id
pub const SHOW_ID_ATTR: &str = "data-show-id";

/// Class of the inner card element
pub const CARD_CLASS: &str = "card";

/// Class of the card heading holding the show title
pub const CARD_TITLE_CLASS: &str = "card-title";

/// Class of the "Episodes" button on each card
pub const EPISODES_TRIGGER_CLASS: &str = "episodes-trigger";

/// Builds the card for one show
///
/// The outer column and the card itself both carry the show id, as does
/// the trigger button, so the id can be recovered from any of them.
pub fn show_card(show: &ShowSummary) -> VNode {
    let id = show.id.to_string();

    let card = el("div")
        .attr("class", CARD_CLASS)
        .attr(SHOW_ID_ATTR, id.as_str())
        .child(
            el("img")
                .attr("src", show.poster.as_str())
                .attr("class", "card-img-top img-fluid")
                .attr("alt", show.name.as_str()),
        )
        .child(
            el("div")
                .attr("class", "card-body")
                .child(
                    el("h5")
                        .attr("class", CARD_TITLE_CLASS)
                        .child(text(show.name.as_str())),
                )
                .child(
                    el("div")
                        .attr("class", "card-text")
                        .child(raw(show.summary.as_str())),
                ),
        )
        .child(el("div").attr("class", "card-footer").child(episodes_trigger(&id)));

    el("div")
        .attr("class", "col-md-6 col-lg-3 mb-2")
        .attr(SHOW_ID_ATTR, id.as_str())
        .child(card)
        .into()
}

fn episodes_trigger(id: &str) -> Element {
    el("button")
        .attr("type", "button")
        .attr("class", "btn btn-primary btn-block episodes-trigger")
        .attr(SHOW_ID_ATTR, id)
        .child(text("Episodes"))
}

/// Builds the episode list heading
pub fn episodes_heading(title: &str) -> VNode {
    el("h2").child(text(title)).into()
}

/// Builds one episode list entry
pub fn episode_item(episode: &EpisodeSummary) -> VNode {
    let position = match episode.number {
        Some(number) => format!("season {}, episode {}", episode.season, number),
        None => format!("season {}, special", episode.season),
    };

    el("li")
        .child(text(format!("{} ({})", episode.name, position)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archer() -> ShowSummary {
        ShowSummary {
            id: 315,
            name: "Archer".to_string(),
            summary: "<p><b>Archer</b> is a spy.</p>".to_string(),
            poster: "https://img/315.jpg".to_string(),
        }
    }

    #[test]
    fn test_show_card_markup() {
        let html = show_card(&archer()).to_html();
        assert_eq!(
            html,
            concat!(
                r#"<div class="col-md-6 col-lg-3 mb-2" data-show-id="315">"#,
                r#"<div class="card" data-show-id="315">"#,
                r#"<img src="https://img/315.jpg" class="card-img-top img-fluid" alt="Archer">"#,
                r#"<div class="card-body">"#,
                r#"<h5 class="card-title">Archer</h5>"#,
                r#"<div class="card-text"><p><b>Archer</b> is a spy.</p></div>"#,
                r#"</div>"#,
                r#"<div class="card-footer">"#,
                r#"<button type="button" class="btn btn-primary btn-block episodes-trigger" data-show-id="315">Episodes</button>"#,
                r#"</div></div></div>"#,
            )
        );
    }

    #[test]
    fn test_show_card_trigger_is_tagged() {
        let card = show_card(&archer());
        let trigger = card
            .find(&|e: &Element| e.has_class(EPISODES_TRIGGER_CLASS))
            .unwrap();
        assert_eq!(trigger.get_attr(SHOW_ID_ATTR), Some("315"));
        assert_eq!(trigger.text_content(), "Episodes");
    }

    #[test]
    fn test_episode_item_text() {
        let episode = EpisodeSummary {
            id: 1,
            name: "Mole Hunt".to_string(),
            season: 1,
            number: Some(1),
        };
        assert_eq!(
            episode_item(&episode).to_html(),
            "<li>Mole Hunt (season 1, episode 1)</li>"
        );
    }

    #[test]
    fn test_episode_item_special() {
        let episode = EpisodeSummary {
            id: 2,
            name: "Holiday".to_string(),
            season: 4,
            number: None,
        };
        assert_eq!(
            episode_item(&episode).to_html(),
            "<li>Holiday (season 4, special)</li>"
        );
    }

    #[test]
    fn test_episodes_heading_escapes_title() {
        assert_eq!(
            episodes_heading("Law & Order").to_html(),
            "<h2>Law &amp; Order</h2>"
        );
    }
}
