//! Episode/season progress transitions.
//!
//! Pure functions over [`MediaItem`]; [`crate::store::WishlistStore`] is the
//! only caller that applies them to persisted state.

use crate::models::{MediaItem, SeasonProgress, DEFAULT_EPISODES_PER_SEASON};

/// A season-wise progress overwrite: the whole watched set for one season
/// plus the user's position, as collected by an episode-tracking view.
#[derive(Debug, Clone)]
pub struct SeasonUpdate {
    pub season_number: u32,
    pub watched_episodes: Vec<u32>,
    pub current_episode: u32,
    pub total_episodes: Option<u32>,
    pub total_seasons: Option<u32>,
}

/// Toggle one episode in the item's current season.
///
/// Marking an episode watched moves `current_episode` to the one after it;
/// unmarking rewinds to just past the highest episode still watched (or 1
/// when none remain), clamped to the season's episode count. Toggling the
/// same episode twice restores its watched-set membership but not
/// necessarily `current_episode`; that is expected, not a bug.
///
/// Episode numbers outside `[1, total_episodes]` are the caller's contract
/// violation; only `current_episode` is clamped here.
pub fn toggle_episode(item: &mut MediaItem, episode: u32) {
    ensure_seasons(item);
    let season_number = item.current_season.max(1);
    let idx = ensure_season(item, season_number);
    let season = &mut item.seasons[idx];
    let total = season.total_episodes;

    let next = match season.watched_episodes.binary_search(&episode) {
        Ok(pos) => {
            season.watched_episodes.remove(pos);
            match season.watched_episodes.last() {
                Some(&highest) => (highest + 1).min(total),
                None => 1,
            }
        }
        Err(pos) => {
            season.watched_episodes.insert(pos, episode);
            (episode + 1).min(total)
        }
    };
    item.current_episode = next;
}

/// Destructively resize the current season's episode count and the item's
/// season count. Watched episodes beyond the new ceiling and seasons beyond
/// the new count are dropped. This is a resize, not an archival operation.
/// Inputs of 0 are clamped to 1.
pub fn resize(item: &mut MediaItem, total_episodes: u32, total_seasons: u32) {
    let total_episodes = total_episodes.max(1);

    ensure_seasons(item);
    let season_number = item.current_season.max(1);
    let idx = ensure_season(item, season_number);
    let season = &mut item.seasons[idx];
    season.total_episodes = total_episodes;
    season.watched_episodes.retain(|&ep| ep <= total_episodes);
    item.current_episode = item.current_episode.clamp(1, total_episodes);

    set_season_count(item, total_seasons);
}

/// Overwrite one season's progress wholesale and move the user's position
/// to it.
///
/// `current_episode` is applied verbatim: unlike [`toggle_episode`] and
/// [`resize`] there is no clamp; callers are expected to have bounded it
/// already. Passing a `season_number` already present overwrites that
/// season; an unknown one is appended with default totals.
pub fn apply_season_update(item: &mut MediaItem, update: SeasonUpdate) {
    ensure_seasons(item);
    let season_number = update.season_number.max(1);
    let idx = ensure_season(item, season_number);

    let season = &mut item.seasons[idx];
    if let Some(total) = update.total_episodes {
        season.total_episodes = total.max(1);
    }
    let total = season.total_episodes;
    season.watched_episodes = normalize_watched(update.watched_episodes, total);

    if let Some(total_seasons) = update.total_seasons {
        set_season_count(item, total_seasons);
    }

    item.current_season = season_number;
    item.current_episode = update.current_episode;
}

/// Migrate a legacy flat-progress record into the season-aware shape.
///
/// Idempotent: an item that already has `seasons` passes through with only
/// leftover flat fields cleared and positions normalized to ≥ 1. An item
/// with no flat fields at all is not legacy-shaped and keeps its empty
/// `seasons` (they materialize lazily on the first progress update).
///
/// The flat shape cannot say how many episodes earlier seasons really had,
/// so every synthesized season except the first gets the default count
/// (a lossy approximation, accepted).
pub fn migrate(mut item: MediaItem) -> MediaItem {
    let legacy_total = item.total_episodes.take();
    let legacy_watched = item.watched_episodes.take();
    let legacy_seasons = item.total_seasons.take();

    if !item.seasons.is_empty()
        || !item.kind.is_serial()
        || (legacy_total.is_none() && legacy_watched.is_none() && legacy_seasons.is_none())
    {
        item.current_season = item.current_season.max(1);
        item.current_episode = item.current_episode.max(1);
        return item;
    }

    let total = legacy_total.unwrap_or(DEFAULT_EPISODES_PER_SEASON).max(1);
    let watched = normalize_watched(legacy_watched.unwrap_or_default(), total);

    let mut first = SeasonProgress::with_total(1, total);
    first.watched_episodes = watched;
    item.seasons.push(first);
    for n in 2..=legacy_seasons.unwrap_or(1) {
        item.seasons.push(SeasonProgress::new(n));
    }

    item.current_season = item.current_season.max(1);
    if item.current_episode == 0 {
        item.current_episode = item.seasons[0]
            .watched_episodes
            .last()
            .map(|&highest| (highest + 1).min(total))
            .unwrap_or(1);
    }
    item
}

/// Materialize `seasons` for an item that has none yet (first progress
/// update on a freshly added show): a single season 1 built from whatever
/// flat fields are still around, defaults otherwise.
fn ensure_seasons(item: &mut MediaItem) {
    if !item.seasons.is_empty() {
        return;
    }
    let total = item
        .total_episodes
        .take()
        .unwrap_or(DEFAULT_EPISODES_PER_SEASON)
        .max(1);
    let mut season = SeasonProgress::with_total(1, total);
    season.watched_episodes = normalize_watched(item.watched_episodes.take().unwrap_or_default(), total);
    item.seasons.push(season);
    item.total_seasons = None;
    item.current_season = item.current_season.max(1);
    item.current_episode = item.current_episode.max(1);
}

/// Index of the season numbered `season_number`, appending (and re-sorting)
/// a default one when the item doesn't have it yet.
fn ensure_season(item: &mut MediaItem, season_number: u32) -> usize {
    if let Some(idx) = item
        .seasons
        .iter()
        .position(|s| s.season_number == season_number)
    {
        return idx;
    }
    item.seasons.push(SeasonProgress::new(season_number));
    item.seasons.sort_by_key(|s| s.season_number);
    item.seasons
        .iter()
        .position(|s| s.season_number == season_number)
        .expect("season was just inserted")
}

/// Truncate trailing seasons or append empty default ones until the item
/// has exactly `total_seasons` of them.
fn set_season_count(item: &mut MediaItem, total_seasons: u32) {
    let count = total_seasons.max(1) as usize;
    if item.seasons.len() > count {
        item.seasons.truncate(count);
        return;
    }
    let mut next = item.seasons.last().map(|s| s.season_number + 1).unwrap_or(1);
    while item.seasons.len() < count {
        item.seasons.push(SeasonProgress::new(next));
        next += 1;
    }
}

/// Sort, dedup, and bound a watched set to `[1, total]`.
fn normalize_watched(mut episodes: Vec<u32>, total: u32) -> Vec<u32> {
    episodes.retain(|&ep| (1..=total).contains(&ep));
    episodes.sort_unstable();
    episodes.dedup();
    episodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;
    use chrono::Utc;

    fn fresh_show(total_episodes: u32) -> MediaItem {
        let mut item = bare_item();
        item.seasons = vec![SeasonProgress::with_total(1, total_episodes)];
        item.current_season = 1;
        item.current_episode = 1;
        item
    }

    fn bare_item() -> MediaItem {
        MediaItem {
            id: "anime_1".into(),
            kind: MediaKind::Anime,
            original_id: 1,
            title: "Show".into(),
            description: String::new(),
            poster: "p.jpg".into(),
            year: None,
            rating: None,
            date_added: Utc::now(),
            seasons: Vec::new(),
            current_season: 0,
            current_episode: 0,
            total_episodes: None,
            watched_episodes: None,
            total_seasons: None,
        }
    }

    fn watched(item: &MediaItem) -> &[u32] {
        &item.seasons[0].watched_episodes
    }

    #[test]
    fn test_toggle_marks_and_advances() {
        // 12 episodes, nothing watched, toggle(5).
        let mut item = fresh_show(12);
        toggle_episode(&mut item, 5);
        assert_eq!(watched(&item), &[5]);
        assert_eq!(item.current_episode, 6);
    }

    #[test]
    fn test_toggle_remove_rewinds_to_highest_remaining() {
        // toggle(5), toggle(12), then un-toggle(5): remaining [12],
        // max + 1 = 13 clamped to 12.
        let mut item = fresh_show(12);
        toggle_episode(&mut item, 5);
        toggle_episode(&mut item, 12);
        toggle_episode(&mut item, 5);
        assert_eq!(watched(&item), &[12]);
        assert_eq!(item.current_episode, 12);
    }

    #[test]
    fn test_toggle_remove_last_resets_to_one() {
        let mut item = fresh_show(12);
        toggle_episode(&mut item, 3);
        toggle_episode(&mut item, 3);
        assert!(watched(&item).is_empty());
        assert_eq!(item.current_episode, 1);
    }

    #[test]
    fn test_toggle_final_episode_clamps() {
        let mut item = fresh_show(12);
        toggle_episode(&mut item, 12);
        assert_eq!(item.current_episode, 12);
    }

    #[test]
    fn test_toggle_twice_restores_membership_not_position() {
        let mut item = fresh_show(12);
        toggle_episode(&mut item, 8);
        assert_eq!(item.current_episode, 9);
        toggle_episode(&mut item, 3);
        toggle_episode(&mut item, 3);
        // Membership of 3 restored...
        assert_eq!(watched(&item), &[8]);
        // ...but the position followed the highest remaining episode.
        assert_eq!(item.current_episode, 9);
    }

    #[test]
    fn test_toggle_materializes_seasons_lazily() {
        let mut item = bare_item();
        assert!(item.seasons.is_empty());
        toggle_episode(&mut item, 2);
        assert_eq!(item.seasons.len(), 1);
        assert_eq!(item.seasons[0].season_number, 1);
        assert_eq!(item.seasons[0].total_episodes, DEFAULT_EPISODES_PER_SEASON);
        assert_eq!(watched(&item), &[2]);
        assert_eq!(item.current_episode, 3);
    }

    #[test]
    fn test_resize_shrink_drops_out_of_range() {
        // Watched [3, 7, 12], shrink to 10 episodes.
        let mut item = fresh_show(24);
        item.seasons[0].watched_episodes = vec![3, 7, 12];
        item.current_episode = 13;
        resize(&mut item, 10, 1);
        assert_eq!(watched(&item), &[3, 7]);
        assert_eq!(item.seasons[0].total_episodes, 10);
        assert!(item.current_episode <= 10);
    }

    #[test]
    fn test_resize_clamps_zero_inputs() {
        let mut item = fresh_show(12);
        resize(&mut item, 0, 0);
        assert_eq!(item.seasons[0].total_episodes, 1);
        assert_eq!(item.seasons.len(), 1);
        assert_eq!(item.current_episode, 1);
    }

    #[test]
    fn test_resize_extends_and_truncates_seasons() {
        let mut item = fresh_show(12);
        resize(&mut item, 12, 3);
        assert_eq!(item.seasons.len(), 3);
        assert_eq!(item.seasons[1].season_number, 2);
        assert_eq!(item.seasons[2].total_episodes, DEFAULT_EPISODES_PER_SEASON);

        // Shrinking the season count drops trailing seasons, data and all.
        item.seasons[2].watched_episodes = vec![1];
        resize(&mut item, 12, 2);
        assert_eq!(item.seasons.len(), 2);
    }

    #[test]
    fn test_season_update_overwrites_existing() {
        let mut item = fresh_show(12);
        item.seasons[0].watched_episodes = vec![1, 2, 3];
        apply_season_update(
            &mut item,
            SeasonUpdate {
                season_number: 1,
                watched_episodes: vec![4, 2, 4],
                current_episode: 5,
                total_episodes: None,
                total_seasons: None,
            },
        );
        assert_eq!(watched(&item), &[2, 4]);
        assert_eq!(item.current_season, 1);
        assert_eq!(item.current_episode, 5);
    }

    #[test]
    fn test_season_update_refilters_on_new_total() {
        let mut item = fresh_show(24);
        apply_season_update(
            &mut item,
            SeasonUpdate {
                season_number: 1,
                watched_episodes: vec![1, 9, 20],
                current_episode: 10,
                total_episodes: Some(10),
                total_seasons: None,
            },
        );
        assert_eq!(watched(&item), &[1, 9]);
        assert_eq!(item.seasons[0].total_episodes, 10);
    }

    #[test]
    fn test_season_update_appends_unknown_season_sorted() {
        let mut item = fresh_show(12);
        item.seasons.push(SeasonProgress::new(4));
        apply_season_update(
            &mut item,
            SeasonUpdate {
                season_number: 2,
                watched_episodes: vec![1],
                current_episode: 2,
                total_episodes: None,
                total_seasons: None,
            },
        );
        let numbers: Vec<u32> = item.seasons.iter().map(|s| s.season_number).collect();
        assert_eq!(numbers, vec![1, 2, 4]);
        assert_eq!(item.current_season, 2);
        assert_eq!(item.seasons[1].watched_episodes, vec![1]);
        assert_eq!(item.seasons[1].total_episodes, DEFAULT_EPISODES_PER_SEASON);
    }

    #[test]
    fn test_season_update_does_not_clamp_position() {
        // Known asymmetry with toggle/resize: the position is trusted.
        let mut item = fresh_show(12);
        apply_season_update(
            &mut item,
            SeasonUpdate {
                season_number: 1,
                watched_episodes: vec![],
                current_episode: 99,
                total_episodes: None,
                total_seasons: None,
            },
        );
        assert_eq!(item.current_episode, 99);
    }

    #[test]
    fn test_migrate_legacy_flat_item() {
        // The old flat shape: {totalEpisodes: 24, watchedEpisodes: [1,2,3]}.
        let mut item = bare_item();
        item.kind = MediaKind::Tv;
        item.total_episodes = Some(24);
        item.watched_episodes = Some(vec![1, 2, 3]);

        let item = migrate(item);
        assert_eq!(item.seasons.len(), 1);
        assert_eq!(item.seasons[0].season_number, 1);
        assert_eq!(item.seasons[0].total_episodes, 24);
        assert_eq!(item.seasons[0].watched_episodes, vec![1, 2, 3]);
        assert_eq!(item.current_season, 1);
        assert_eq!(item.current_episode, 4);
        assert!(item.total_episodes.is_none());
        assert!(item.watched_episodes.is_none());
    }

    #[test]
    fn test_migrate_synthesizes_extra_seasons() {
        let mut item = bare_item();
        item.total_episodes = Some(24);
        item.watched_episodes = Some(vec![24, 1, 1]);
        item.total_seasons = Some(3);

        let item = migrate(item);
        assert_eq!(item.seasons.len(), 3);
        assert_eq!(item.seasons[0].watched_episodes, vec![1, 24]);
        // Real counts for the other seasons are unrecoverable.
        assert_eq!(item.seasons[1].total_episodes, DEFAULT_EPISODES_PER_SEASON);
        assert!(item.seasons[2].watched_episodes.is_empty());
        // Highest watched is the last episode; position clamps onto it.
        assert_eq!(item.current_episode, 24);
    }

    #[test]
    fn test_migrate_keeps_existing_position() {
        let mut item = bare_item();
        item.total_episodes = Some(24);
        item.watched_episodes = Some(vec![1, 2]);
        item.current_episode = 7;

        let item = migrate(item);
        assert_eq!(item.current_episode, 7);
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let mut item = bare_item();
        item.kind = MediaKind::Tv;
        item.total_episodes = Some(24);
        item.watched_episodes = Some(vec![1, 2, 3]);

        let once = migrate(item);
        let twice = migrate(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_migrate_skips_movies_and_fresh_items() {
        let mut movie = bare_item();
        movie.kind = MediaKind::Movie;
        movie.total_episodes = Some(5);
        let movie = migrate(movie);
        assert!(movie.seasons.is_empty());
        assert!(movie.total_episodes.is_none());

        // A new-shape show that never tracked progress stays seasonless.
        let fresh = migrate(bare_item());
        assert!(fresh.seasons.is_empty());
        assert_eq!(fresh.current_season, 1);
        assert_eq!(fresh.current_episode, 1);
    }

    #[test]
    fn test_watched_stays_bounded_under_mixed_ops() {
        // Every mutation must leave the watched set within [1, total].
        let mut item = fresh_show(12);
        toggle_episode(&mut item, 5);
        toggle_episode(&mut item, 11);
        toggle_episode(&mut item, 12);
        resize(&mut item, 8, 2);
        apply_season_update(
            &mut item,
            SeasonUpdate {
                season_number: 1,
                watched_episodes: vec![2, 8, 15],
                current_episode: 3,
                total_episodes: None,
                total_seasons: None,
            },
        );
        toggle_episode(&mut item, 4);
        for season in &item.seasons {
            assert!(season
                .watched_episodes
                .iter()
                .all(|&ep| (1..=season.total_episodes).contains(&ep)));
        }
    }
}
