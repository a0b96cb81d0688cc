//! Normalized records handed to the renderers
//!
//! Built from the raw API types in [`crate::api`]; immutable once created.

use serde::{Deserialize, Serialize};

use crate::api::{ApiEpisode, SearchHit};

/// Poster path used when a show has no medium-size image
pub const DEFAULT_PLACEHOLDER_POSTER: &str = "../imgs/missing.png";

/// A show as displayed on a search result card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSummary {
    /// TVMaze show id, used later to fetch episodes
    pub id: u64,

    /// Show title
    pub name: String,

    /// Summary markup (may contain HTML, empty when TVMaze has none)
    pub summary: String,

    /// Poster URL, or the placeholder path when the show has no image
    pub poster: String,
}

impl ShowSummary {
    /// Normalizes a search hit, substituting `placeholder` for a missing poster
    pub fn from_hit(hit: SearchHit, placeholder: &str) -> Self {
        let show = hit.show;
        let poster = show
            .image
            .and_then(|image| image.medium)
            .unwrap_or_else(|| placeholder.to_string());

        Self {
            id: show.id,
            name: show.name,
            summary: show.summary.unwrap_or_default(),
            poster,
        }
    }
}

/// An entry of a show's episode list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// TVMaze episode id
    pub id: u64,

    /// Episode title
    pub name: String,

    /// Season number
    pub season: u32,

    /// Episode number within the season, `None` for specials
    pub number: Option<u32>,
}

impl From<ApiEpisode> for EpisodeSummary {
    fn from(episode: ApiEpisode) -> Self {
        Self {
            id: episode.id,
            name: episode.name.unwrap_or_default(),
            season: episode.season,
            number: episode.number,
        }
    }
}

/// Normalizes a whole search response, keeping its order
pub fn normalize_hits(hits: Vec<SearchHit>, placeholder: &str) -> Vec<ShowSummary> {
    hits.into_iter()
        .map(|hit| ShowSummary::from_hit(hit, placeholder))
        .collect()
}

/// Normalizes a whole episode response, keeping its order
pub fn normalize_episodes(episodes: Vec<ApiEpisode>) -> Vec<EpisodeSummary> {
    episodes.into_iter().map(EpisodeSummary::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiImage, ApiShow};
    use proptest::prelude::*;

    fn hit(id: u64, medium: Option<&str>) -> SearchHit {
        SearchHit {
            show: ApiShow {
                id,
                name: format!("Show {}", id),
                summary: Some("<p>summary</p>".to_string()),
                image: medium.map(|m| ApiImage {
                    medium: Some(m.to_string()),
                    original: None,
                }),
            },
        }
    }

    #[test]
    fn test_from_hit_uses_medium_image() {
        let show = ShowSummary::from_hit(hit(1, Some("https://img/m.jpg")), "missing.png");
        assert_eq!(show.poster, "https://img/m.jpg");
        assert_eq!(show.summary, "<p>summary</p>");
    }

    #[test]
    fn test_from_hit_falls_back_without_image() {
        let show = ShowSummary::from_hit(hit(2, None), "missing.png");
        assert_eq!(show.poster, "missing.png");
    }

    #[test]
    fn test_from_hit_falls_back_when_medium_missing() {
        let mut raw = hit(3, None);
        raw.show.image = Some(ApiImage {
            medium: None,
            original: Some("https://img/o.jpg".to_string()),
        });
        let show = ShowSummary::from_hit(raw, "missing.png");
        assert_eq!(show.poster, "missing.png");
    }

    #[test]
    fn test_null_summary_becomes_empty() {
        let mut raw = hit(4, None);
        raw.show.summary = None;
        let show = ShowSummary::from_hit(raw, DEFAULT_PLACEHOLDER_POSTER);
        assert_eq!(show.summary, "");
    }

    #[test]
    fn test_episode_conversion_copies_fields() {
        let episode = EpisodeSummary::from(ApiEpisode {
            id: 10,
            name: Some("Mole Hunt".to_string()),
            season: 1,
            number: Some(1),
        });
        assert_eq!(
            episode,
            EpisodeSummary {
                id: 10,
                name: "Mole Hunt".to_string(),
                season: 1,
                number: Some(1),
            }
        );
    }

    #[test]
    fn test_show_summary_serialization() {
        let show = ShowSummary {
            id: 315,
            name: "Archer".to_string(),
            summary: "<p>Spy</p>".to_string(),
            poster: DEFAULT_PLACEHOLDER_POSTER.to_string(),
        };
        let json = serde_json::to_value(&show).expect("Serialization should succeed");
        assert_eq!(json["id"], 315);
        assert_eq!(json["poster"], "../imgs/missing.png");
    }

    proptest! {
        #[test]
        fn prop_normalize_hits_keeps_length_order_and_fallback(
            images in proptest::collection::vec(proptest::option::of("[a-z]{1,12}"), 0..20)
        ) {
            let hits: Vec<SearchHit> = images
                .iter()
                .enumerate()
                .map(|(i, img)| hit(i as u64, img.as_deref()))
                .collect();

            let shows = normalize_hits(hits, "placeholder.png");

            prop_assert_eq!(shows.len(), images.len());
            for (i, (show, img)) in shows.iter().zip(&images).enumerate() {
                prop_assert_eq!(show.id, i as u64);
                match img {
                    Some(url) => prop_assert_eq!(&show.poster, url),
                    None => prop_assert_eq!(show.poster.as_str(), "placeholder.png"),
                }
            }
        }

        #[test]
        fn prop_normalize_episodes_keeps_order_and_numbers(
            rows in proptest::collection::vec((0u32..30, proptest::option::of(0u32..200)), 0..40)
        ) {
            let raw: Vec<ApiEpisode> = rows
                .iter()
                .enumerate()
                .map(|(i, (season, number))| ApiEpisode {
                    id: i as u64,
                    name: Some(format!("Episode {}", i)),
                    season: *season,
                    number: *number,
                })
                .collect();

            let episodes = normalize_episodes(raw);

            prop_assert_eq!(episodes.len(), rows.len());
            for (i, (episode, (season, number))) in episodes.iter().zip(&rows).enumerate() {
                prop_assert_eq!(episode.id, i as u64);
                prop_assert_eq!(episode.season, *season);
                prop_assert_eq!(episode.number, *number);
            }
        }
    }
}
