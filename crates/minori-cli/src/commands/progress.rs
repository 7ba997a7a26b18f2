use minori_core::progress::SeasonUpdate;

use super::open_store;

pub fn run_watch(id: &str, episode: u32) -> color_eyre::Result<()> {
    let mut store = open_store()?;
    if store.state().find(id).is_none() {
        println!("No saved item has id {id}.");
        return Ok(());
    }
    store.toggle_episode(id, episode)?;

    let item = store.state().find(id).expect("item was just updated");
    let season = item
        .current_season_progress()
        .expect("toggling materializes a season");
    let verb = if season.is_watched(episode) {
        "Marked"
    } else {
        "Unmarked"
    };
    println!(
        "{verb} episode {episode}. Season {}: {}/{} watched, next up episode {}.",
        item.current_season,
        season.watched_episodes.len(),
        season.total_episodes,
        item.current_episode,
    );
    if item.is_complete() {
        println!("🎉 You've completed this series!");
    }
    Ok(())
}

pub fn run_resize(id: &str, episodes: u32, seasons: Option<u32>) -> color_eyre::Result<()> {
    let mut store = open_store()?;
    let Some(item) = store.state().find(id) else {
        println!("No saved item has id {id}.");
        return Ok(());
    };
    let seasons = seasons.unwrap_or_else(|| item.seasons.len().max(1) as u32);

    store.resize_progress(id, episodes, seasons)?;

    let item = store.state().find(id).expect("item was just updated");
    println!(
        "Now tracking {} season(s); season {} has {} episodes.",
        item.seasons.len(),
        item.current_season,
        item.current_season_progress()
            .map(|s| s.total_episodes)
            .unwrap_or_default(),
    );
    Ok(())
}

pub fn run_set_season(
    id: &str,
    season: u32,
    watched: Vec<u32>,
    current: u32,
    episodes: Option<u32>,
    seasons: Option<u32>,
) -> color_eyre::Result<()> {
    let mut store = open_store()?;
    if store.state().find(id).is_none() {
        println!("No saved item has id {id}.");
        return Ok(());
    }
    store.update_season(
        id,
        SeasonUpdate {
            season_number: season,
            watched_episodes: watched,
            current_episode: current,
            total_episodes: episodes,
            total_seasons: seasons,
        },
    )?;

    let item = store.state().find(id).expect("item was just updated");
    let progress = item
        .current_season_progress()
        .expect("season was just written");
    println!(
        "Season {}: {}/{} watched ({:.0}%), next up episode {}.",
        season,
        progress.watched_episodes.len(),
        progress.total_episodes,
        progress.percent(),
        item.current_episode,
    );
    Ok(())
}
