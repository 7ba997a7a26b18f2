use minori_api::catalog::{genre_by_key, GENRES};
use minori_api::{Catalog, KindSelector};
use minori_core::config::AppConfig;
use minori_core::models::{ListName, MediaKind};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{format_item_line, open_store};

pub async fn run_random(
    selector: KindSelector,
    genre: Option<&str>,
    from_watchlist: bool,
    add: bool,
) -> color_eyre::Result<()> {
    let genre = match genre {
        Some(key) => match genre_by_key(key) {
            Some(genre) => Some(genre),
            None => {
                let keys: Vec<&str> = GENRES.iter().map(|g| g.key).collect();
                println!("Unknown genre \"{key}\". Known genres: {}.", keys.join(", "));
                return Ok(());
            }
        },
        None => None,
    };

    if from_watchlist {
        return pick_from_watchlist(selector);
    }

    let kind = resolve_kind(selector);
    let config = AppConfig::load()?;
    let catalog = Catalog::from_config(&config);
    let pool = catalog.random_pool(kind, genre).await;

    let Some(pick) = pool.choose(&mut rand::thread_rng()).cloned() else {
        println!("Nothing to pick from right now.");
        return Ok(());
    };

    println!("🎬 {}", pick.title);
    if let Some(year) = &pick.year {
        println!("   {year}");
    }
    if let Some(rating) = pick.rating {
        println!("   ★ {rating:.1}");
    }
    println!("   {}", pick.description);
    println!("   id: {}", pick.id);

    if add {
        super::search::add_result(pick, ListName::ToWatch)?;
    }
    Ok(())
}

/// Re-roll among your own saved titles instead of discovering new ones.
fn pick_from_watchlist(selector: KindSelector) -> color_eyre::Result<()> {
    let store = open_store()?;
    let candidates: Vec<_> = store
        .state()
        .to_watch
        .iter()
        .filter(|item| selector.includes(item.kind))
        .collect();

    match candidates.choose(&mut rand::thread_rng()) {
        Some(item) => println!("Tonight's pick: {}", format_item_line(item)),
        None => println!("Your to-watch list has nothing of that kind."),
    }
    Ok(())
}

/// `All` means "surprise me": roll the kind too.
fn resolve_kind(selector: KindSelector) -> MediaKind {
    match selector {
        KindSelector::Movie => MediaKind::Movie,
        KindSelector::Tv => MediaKind::Tv,
        KindSelector::Anime => MediaKind::Anime,
        KindSelector::All => {
            let idx = rand::thread_rng().gen_range(0..MediaKind::ALL.len());
            MediaKind::ALL[idx]
        }
    }
}
