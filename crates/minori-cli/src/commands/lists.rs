use std::collections::BTreeMap;

use minori_core::models::{ListName, MediaItem};

use super::{format_item_line, open_store};

pub fn run_list(list: ListName) -> color_eyre::Result<()> {
    let store = open_store()?;
    let items = store.state().list(list);
    if items.is_empty() {
        println!("The {list} list is empty.");
        return Ok(());
    }
    println!("{list} ({} items):", items.len());
    for item in items {
        println!("  {}", format_item_line(item));
    }
    Ok(())
}

/// Everything in both lists, grouped by first letter.
pub fn run_catalogue() -> color_eyre::Result<()> {
    let store = open_store()?;
    let state = store.state();
    if state.is_empty() {
        println!("Nothing saved yet.");
        return Ok(());
    }

    let mut groups: BTreeMap<char, Vec<&MediaItem>> = BTreeMap::new();
    for item in state.to_watch.iter().chain(state.watched.iter()) {
        let letter = item
            .title
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .filter(char::is_ascii_alphabetic)
            .unwrap_or('#');
        groups.entry(letter).or_default().push(item);
    }

    for (letter, mut items) in groups {
        items.sort_by(|a, b| a.title.cmp(&b.title));
        println!("{letter}");
        for item in items {
            println!("  {}", format_item_line(item));
        }
    }
    Ok(())
}

pub fn run_show(id: &str) -> color_eyre::Result<()> {
    let store = open_store()?;
    let Some(item) = store.state().find(id) else {
        println!("No saved item has id {id}.");
        return Ok(());
    };
    let membership = store.membership(id);
    let list = if membership.in_to_watch { "to-watch" } else { "watched" };

    println!("{} [{}] on the {list} list", item.title, item.kind);
    if let Some(year) = &item.year {
        println!("  year:   {year}");
    }
    if let Some(rating) = item.rating {
        println!("  rating: ★ {rating:.1}");
    }
    println!("  added:  {}", item.date_added.format("%Y-%m-%d"));
    if !item.description.is_empty() {
        println!("  {}", item.description);
    }

    if item.kind.is_serial() {
        if item.seasons.is_empty() {
            println!("  No episode progress yet.");
        } else {
            for season in &item.seasons {
                let marker = if season.season_number == item.current_season {
                    "*"
                } else {
                    " "
                };
                println!(
                    " {marker}season {}: {}/{} episodes ({:.0}%)  watched: {:?}",
                    season.season_number,
                    season.watched_episodes.len(),
                    season.total_episodes,
                    season.percent(),
                    season.watched_episodes,
                );
            }
            if item.is_complete() {
                println!("  🎉 You've completed this series!");
            } else {
                println!(
                    "  Next up: season {}, episode {}",
                    item.current_season, item.current_episode
                );
            }
        }
    }
    Ok(())
}

pub fn run_remove(id: &str, list: ListName) -> color_eyre::Result<()> {
    let mut store = open_store()?;
    if !store.state().list(list).iter().any(|item| item.id == id) {
        println!("{id} is not on the {list} list; nothing removed.");
        return Ok(());
    }
    store.remove(id, list)?;
    println!("Removed {id} from {list}.");
    Ok(())
}

pub fn run_move(id: &str, from: ListName, to: ListName) -> color_eyre::Result<()> {
    let mut store = open_store()?;
    if !store.state().list(from).iter().any(|item| item.id == id) {
        println!("{id} is not on the {from} list; nothing moved.");
        return Ok(());
    }
    store.move_item(id, from, to)?;
    println!("Moved {id} from {from} to {to}.");
    Ok(())
}
