use minori_core::models::MediaKind;
use serde::Deserialize;

use crate::types::SearchResult;

const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Debug, Deserialize)]
pub struct TmdbResponse {
    pub results: Vec<TmdbItem>,
}

/// One row from a TMDB search, discover, or popular listing. Movies carry
/// `title`/`release_date`; TV shows carry `name`/`first_air_date`.
#[derive(Debug, Deserialize)]
pub struct TmdbItem {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: Option<f32>,
}

impl TmdbItem {
    /// Full poster URL, if the item has one.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{IMAGE_BASE_URL}{p}"))
    }

    /// Normalize into a [`SearchResult`]. Items without a poster are
    /// dropped (`None`): there is nothing to render for them.
    pub fn into_search_result(self, kind: MediaKind) -> Option<SearchResult> {
        let poster = self.poster_url()?;
        let date = match kind {
            MediaKind::Tv => self.first_air_date.as_deref(),
            _ => self.release_date.as_deref(),
        };
        let year = date
            .and_then(|d| d.split('-').next())
            .filter(|y| !y.is_empty())
            .map(str::to_string);

        Some(SearchResult {
            id: SearchResult::wishlist_id(kind, self.id),
            title: self
                .title
                .or(self.name)
                .unwrap_or_else(|| "Unknown Title".into()),
            description: self.overview,
            poster,
            kind,
            year,
            rating: self.vote_average.filter(|&r| r > 0.0),
            original_id: self.id,
        })
    }
}
