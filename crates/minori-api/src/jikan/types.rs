use minori_core::models::MediaKind;
use serde::Deserialize;

use crate::types::SearchResult;

#[derive(Debug, Deserialize)]
pub struct JikanResponse {
    pub data: Vec<JikanItem>,
}

#[derive(Debug, Deserialize)]
pub struct JikanItem {
    pub mal_id: u64,
    pub title: String,
    pub title_english: Option<String>,
    pub synopsis: Option<String>,
    pub images: Option<JikanImages>,
    pub aired: Option<JikanAired>,
    pub score: Option<f32>,
    pub episodes: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct JikanImages {
    pub jpg: Option<JikanImageSet>,
}

#[derive(Debug, Deserialize)]
pub struct JikanImageSet {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JikanAired {
    pub from: Option<String>,
}

impl JikanItem {
    /// Normalize into a [`SearchResult`]. Entries without a jpg poster are
    /// dropped (`None`).
    pub fn into_search_result(self) -> Option<SearchResult> {
        let poster = self
            .images
            .and_then(|i| i.jpg)
            .and_then(|j| j.image_url)
            .filter(|url| !url.is_empty())?;

        let title = self
            .title_english
            .filter(|t| !t.is_empty())
            .unwrap_or(self.title);
        let year = self
            .aired
            .and_then(|a| a.from)
            .and_then(|d| d.split('-').next().map(str::to_string))
            .filter(|y| !y.is_empty());

        Some(SearchResult {
            id: SearchResult::wishlist_id(MediaKind::Anime, self.mal_id),
            title,
            description: self
                .synopsis
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "No description available.".into()),
            poster,
            kind: MediaKind::Anime,
            year,
            rating: self.score,
            original_id: self.mal_id,
        })
    }
}
