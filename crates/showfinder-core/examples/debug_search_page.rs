//! Debug script to run the search page pipeline against live TVMaze
//!
//! Run with: cargo run --example debug_search_page -p showfinder-core -- archer

use showfinder_core::{Controller, Outcome, ShowFinder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let query = std::env::args().nth(1).unwrap_or_else(|| "archer".to_string());
    let controller = Controller::new(ShowFinder::new()?);

    println!("Searching for '{}'...\n", query);

    if controller.submit_search(&query).await? != Outcome::Rendered {
        println!("Nothing rendered.");
        return Ok(());
    }

    let view = controller.view().await;
    println!("=== shows container ===\n{}\n", view.shows_html);

    let first = controller
        .with_page(|page| {
            page.shows()
                .first()
                .and_then(|node| node.as_element())
                .and_then(|card| card.get_attr("data-show-id"))
                .and_then(|id| id.parse::<u64>().ok())
        })
        .await;

    let Some(show_id) = first else {
        println!("No results found!");
        return Ok(());
    };

    println!("Opening episodes for show {}...\n", show_id);
    controller.open_episodes(show_id).await?;

    let view = controller.view().await;
    println!("=== episodes container (visible: {}) ===", view.episodes_visible);
    println!("{}", view.episodes_html);

    Ok(())
}
