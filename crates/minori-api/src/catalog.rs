//! Fan-out across catalog providers.
//!
//! Provider failures are logged and collapse to empty result sets, so the
//! caller sees "no results" whether a provider is down or simply has no
//! matches. A response that arrives late still wins; there is no request
//! generation guard.

use minori_core::config::AppConfig;
use minori_core::models::MediaKind;
use rand::Rng;
use tracing::warn;

use crate::jikan::JikanClient;
use crate::tmdb::TmdbClient;
use crate::types::{KindSelector, SearchResult};

/// A discover-genre option. TMDB filters by genre id; Jikan has no genre
/// filter on the endpoints we use, so it falls back to a text search.
#[derive(Debug, Clone, Copy)]
pub struct Genre {
    pub key: &'static str,
    pub name: &'static str,
    pub tmdb_id: u32,
}

pub const GENRES: &[Genre] = &[
    Genre { key: "action", name: "Action", tmdb_id: 28 },
    Genre { key: "comedy", name: "Comedy", tmdb_id: 35 },
    Genre { key: "drama", name: "Drama", tmdb_id: 18 },
    Genre { key: "horror", name: "Horror", tmdb_id: 27 },
    Genre { key: "romance", name: "Romance", tmdb_id: 10749 },
    Genre { key: "scifi", name: "Sci-Fi", tmdb_id: 878 },
];

pub fn genre_by_key(key: &str) -> Option<&'static Genre> {
    GENRES.iter().find(|g| g.key == key)
}

/// Unified front over the per-provider clients.
pub struct Catalog {
    tmdb: Option<TmdbClient>,
    jikan: Option<JikanClient>,
    results_per_search: u32,
}

impl Catalog {
    /// Build from config: TMDB only when enabled and keyed, Jikan when
    /// enabled.
    pub fn from_config(config: &AppConfig) -> Self {
        let tmdb = if config.services.tmdb.enabled {
            match config.services.tmdb.api_key.clone() {
                Some(key) if !key.is_empty() => Some(TmdbClient::new(key)),
                _ => {
                    warn!("TMDB is enabled but has no api_key; movie/tv search is off");
                    None
                }
            }
        } else {
            None
        };
        let jikan = config.services.jikan.enabled.then(JikanClient::new);
        Self {
            tmdb,
            jikan,
            results_per_search: config.general.results_per_search.max(1),
        }
    }

    /// Search the selected catalogs. Missing clients and provider errors
    /// contribute empty sub-results rather than failing the whole search.
    pub async fn search(
        &self,
        query: &str,
        selector: KindSelector,
        region: Option<&str>,
    ) -> Vec<SearchResult> {
        let mut results = Vec::new();

        if selector.includes(MediaKind::Movie) {
            if let Some(tmdb) = &self.tmdb {
                match tmdb.search_movies(query, region).await {
                    Ok(items) => results.extend(items),
                    Err(e) => warn!("TMDB movie search failed: {e}"),
                }
            }
        }
        if selector.includes(MediaKind::Tv) {
            if let Some(tmdb) = &self.tmdb {
                match tmdb.search_tv(query).await {
                    Ok(items) => results.extend(items),
                    Err(e) => warn!("TMDB tv search failed: {e}"),
                }
            }
        }
        if selector.includes(MediaKind::Anime) {
            if let Some(jikan) = &self.jikan {
                match jikan.search_anime(query, self.results_per_search).await {
                    Ok(items) => results.extend(items),
                    Err(e) => warn!("Jikan search failed: {e}"),
                }
            }
        }

        results
    }

    /// A pool of currently popular titles to pick from at random: one
    /// random page of TMDB's popularity-sorted discover listing, or of
    /// Jikan's top-anime chart.
    pub async fn random_pool(&self, kind: MediaKind, genre: Option<&Genre>) -> Vec<SearchResult> {
        match kind {
            MediaKind::Anime => {
                let Some(jikan) = &self.jikan else {
                    return Vec::new();
                };
                let result = match genre {
                    // No genre filter on the chart; search by genre name.
                    Some(genre) => jikan.search_anime(genre.name, 25).await,
                    None => {
                        let page = rand::thread_rng().gen_range(1..=10);
                        jikan.top_anime(25, page).await
                    }
                };
                result.unwrap_or_else(|e| {
                    warn!("Jikan random pool failed: {e}");
                    Vec::new()
                })
            }
            MediaKind::Movie | MediaKind::Tv => {
                let Some(tmdb) = &self.tmdb else {
                    return Vec::new();
                };
                let page = rand::thread_rng().gen_range(1..=5);
                tmdb.discover(kind, genre.map(|g| g.tmdb_id), page)
                    .await
                    .unwrap_or_else(|e| {
                        warn!("TMDB random pool failed: {e}");
                        Vec::new()
                    })
            }
        }
    }

    /// Whether any provider is available for the selector.
    pub fn can_search(&self, selector: KindSelector) -> bool {
        match selector {
            KindSelector::Movie | KindSelector::Tv => self.tmdb.is_some(),
            KindSelector::Anime => self.jikan.is_some(),
            KindSelector::All => self.tmdb.is_some() || self.jikan.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_lookup() {
        assert_eq!(genre_by_key("horror").unwrap().tmdb_id, 27);
        assert_eq!(genre_by_key("drama").unwrap().tmdb_id, 18);
        assert!(genre_by_key("isekai").is_none());
    }

    #[test]
    fn test_catalog_without_tmdb_key() {
        let config = AppConfig::default();
        assert!(config.services.tmdb.api_key.is_none());
        let catalog = Catalog::from_config(&config);
        assert!(!catalog.can_search(KindSelector::Movie));
        assert!(catalog.can_search(KindSelector::Anime));
        assert!(catalog.can_search(KindSelector::All));
    }

    #[tokio::test]
    async fn test_search_with_no_providers_is_empty() {
        let mut config = AppConfig::default();
        config.services.tmdb.enabled = false;
        config.services.jikan.enabled = false;
        let catalog = Catalog::from_config(&config);
        let results = catalog.search("naruto", KindSelector::All, None).await;
        assert!(results.is_empty());
    }
}
