use minori_api::{Catalog, KindSelector, SearchResult};
use minori_core::config::AppConfig;
use minori_core::models::ListName;

use super::open_store;

pub async fn run_search(
    query: &str,
    selector: KindSelector,
    region: Option<&str>,
    add: Option<usize>,
    list: Option<ListName>,
) -> color_eyre::Result<()> {
    let config = AppConfig::load()?;
    let catalog = Catalog::from_config(&config);
    if !catalog.can_search(selector) {
        println!("No catalog is configured for that kind. Try `minori config set-tmdb-key <key>`.");
        return Ok(());
    }

    let results = catalog.search(query, selector, region).await;
    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (n, result) in results.iter().enumerate() {
        println!("{:>3}. {}", n + 1, format_result_line(result));
    }

    if let Some(n) = add {
        let Some(result) = results.get(n.wrapping_sub(1)) else {
            println!("\nThere is no result #{n} to add.");
            return Ok(());
        };
        add_result(result.clone(), list.unwrap_or(config.general.default_list))?;
    }

    Ok(())
}

fn format_result_line(result: &SearchResult) -> String {
    let mut line = format!("[{}] {}", result.kind, result.title);
    if let Some(year) = &result.year {
        line.push_str(&format!(" ({year})"));
    }
    if let Some(rating) = result.rating {
        line.push_str(&format!("  ★ {rating:.1}"));
    }
    line
}

pub(super) fn add_result(result: SearchResult, list: ListName) -> color_eyre::Result<()> {
    let mut store = open_store()?;
    let membership = store.membership(&result.id);
    if membership.anywhere() {
        let held = if membership.in_to_watch { "to-watch" } else { "watched" };
        println!("\n{} is already on your {held} list.", result.title);
        return Ok(());
    }
    let title = result.title.clone();
    store.add(result.into_media_item(), list)?;
    println!("\nAdded \"{title}\" to {list}.");
    Ok(())
}
