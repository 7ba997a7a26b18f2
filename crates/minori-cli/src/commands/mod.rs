pub mod config;
pub mod lists;
pub mod progress;
pub mod random;
pub mod search;

use minori_core::config::AppConfig;
use minori_core::models::MediaItem;
use minori_core::store::WishlistStore;

/// Open the store at its configured location.
pub fn open_store() -> color_eyre::Result<WishlistStore> {
    let path = AppConfig::ensure_wishlist_path()?;
    Ok(WishlistStore::load(path))
}

/// One-line rendering of a saved item: id, title, year, rating, progress.
pub fn format_item_line(item: &MediaItem) -> String {
    let mut line = format!("{:<12} {}", item.id, item.title);
    if let Some(year) = &item.year {
        line.push_str(&format!(" ({year})"));
    }
    if let Some(rating) = item.rating {
        line.push_str(&format!("  ★ {rating:.1}"));
    }
    if item.kind.is_serial() && !item.seasons.is_empty() {
        let watched: usize = item.seasons.iter().map(|s| s.watched_episodes.len()).sum();
        let total: u32 = item.seasons.iter().map(|s| s.total_episodes).sum();
        line.push_str(&format!("  [{watched}/{total} eps, {:.0}%]", item.percent()));
    }
    line
}
