use chrono::Utc;
use minori_core::models::{MediaItem, MediaKind};
use serde::{Deserialize, Serialize};

/// A normalized search result from any catalog provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// `"{kind}_{provider id}"`, the wishlist id this result would get.
    pub id: String,
    pub title: String,
    pub description: String,
    pub poster: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub original_id: u64,
}

impl SearchResult {
    pub fn wishlist_id(kind: MediaKind, original_id: u64) -> String {
        format!("{}_{}", kind.as_str(), original_id)
    }

    /// Convert into a fresh wishlist record. Movies never get progress
    /// fields; shows get theirs lazily on the first progress update. The
    /// store re-stamps `date_added` on insertion.
    pub fn into_media_item(self) -> MediaItem {
        MediaItem {
            id: self.id,
            kind: self.kind,
            original_id: self.original_id,
            title: self.title,
            description: self.description,
            poster: self.poster,
            year: self.year,
            rating: self.rating,
            date_added: Utc::now(),
            seasons: Vec::new(),
            current_season: 1,
            current_episode: 1,
            total_episodes: None,
            watched_episodes: None,
            total_seasons: None,
        }
    }
}

/// Which catalogs a search fans out to. `All` is its own case rather than
/// a sentinel smuggled through [`MediaKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindSelector {
    All,
    Movie,
    Tv,
    Anime,
}

impl KindSelector {
    pub fn includes(&self, kind: MediaKind) -> bool {
        match self {
            Self::All => true,
            Self::Movie => kind == MediaKind::Movie,
            Self::Tv => kind == MediaKind::Tv,
            Self::Anime => kind == MediaKind::Anime,
        }
    }
}

impl From<MediaKind> for KindSelector {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Movie => Self::Movie,
            MediaKind::Tv => Self::Tv,
            MediaKind::Anime => Self::Anime,
        }
    }
}
