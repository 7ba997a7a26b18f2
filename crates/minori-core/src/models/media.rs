use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Episode count assumed for a season the provider told us nothing about.
pub const DEFAULT_EPISODES_PER_SEASON: u32 = 12;

/// Kind of catalog media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
    Anime,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Anime => "anime",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "movie" => Some(Self::Movie),
            "tv" => Some(Self::Tv),
            "anime" => Some(Self::Anime),
            _ => None,
        }
    }

    /// Whether this kind carries episode/season progress.
    pub fn is_serial(&self) -> bool {
        matches!(self, Self::Tv | Self::Anime)
    }

    pub const ALL: &[MediaKind] = &[Self::Movie, Self::Tv, Self::Anime];
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-season progress: the episode count and the set of watched episodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonProgress {
    pub season_number: u32,
    pub total_episodes: u32,
    /// Semantically a set; kept sorted ascending so blobs are deterministic.
    #[serde(default)]
    pub watched_episodes: Vec<u32>,
}

impl SeasonProgress {
    /// A fresh season with the default episode count and nothing watched.
    pub fn new(season_number: u32) -> Self {
        Self::with_total(season_number, DEFAULT_EPISODES_PER_SEASON)
    }

    pub fn with_total(season_number: u32, total_episodes: u32) -> Self {
        Self {
            season_number,
            total_episodes: total_episodes.max(1),
            watched_episodes: Vec::new(),
        }
    }

    pub fn is_watched(&self, episode: u32) -> bool {
        self.watched_episodes.binary_search(&episode).is_ok()
    }

    /// Watched percentage for this season, 0–100.
    pub fn percent(&self) -> f32 {
        (self.watched_episodes.len() as f32 / self.total_episodes.max(1) as f32) * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.watched_episodes.len() as u32 >= self.total_episodes
    }
}

/// A saved wishlist record.
///
/// Legacy blobs (written before progress became season-aware) carry flat
/// `totalEpisodes`/`watchedEpisodes`/`totalSeasons` fields and may omit the
/// position fields entirely. Those are read here for migration
/// ([`crate::progress::migrate`]) and never written back; within the flat
/// fields and positions, `0` stands for "absent on disk" until migration
/// normalizes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// `"{kind}_{provider id}"`, unique across both lists.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Provider-native identifier, kept for re-fetches.
    pub original_id: u64,
    pub title: String,
    pub description: String,
    pub poster: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub date_added: DateTime<Utc>,
    /// Ordered by `season_number` ascending, numbers unique. Empty for
    /// movies; materialized lazily for shows on the first progress update.
    #[serde(default)]
    pub seasons: Vec<SeasonProgress>,
    #[serde(default)]
    pub current_season: u32,
    /// Next episode to watch within `current_season` (not a global index).
    #[serde(default)]
    pub current_episode: u32,
    #[serde(default, skip_serializing)]
    pub total_episodes: Option<u32>,
    #[serde(default, skip_serializing)]
    pub watched_episodes: Option<Vec<u32>>,
    #[serde(default, skip_serializing)]
    pub total_seasons: Option<u32>,
}

impl MediaItem {
    /// The season the user is currently progressing through, if tracked.
    pub fn current_season_progress(&self) -> Option<&SeasonProgress> {
        self.seasons
            .iter()
            .find(|s| s.season_number == self.current_season)
    }

    /// Watched percentage across every season, 0–100.
    pub fn percent(&self) -> f32 {
        let total: u32 = self.seasons.iter().map(|s| s.total_episodes).sum();
        if total == 0 {
            return 0.0;
        }
        let watched: usize = self.seasons.iter().map(|s| s.watched_episodes.len()).sum();
        (watched as f32 / total as f32) * 100.0
    }

    pub fn is_complete(&self) -> bool {
        !self.seasons.is_empty() && self.seasons.iter().all(|s| s.is_complete())
    }
}
