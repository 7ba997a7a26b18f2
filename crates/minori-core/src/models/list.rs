use serde::{Deserialize, Serialize};

use super::MediaItem;

/// The two wishlist buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListName {
    #[serde(rename = "toWatch")]
    ToWatch,
    #[serde(rename = "watched")]
    Watched,
}

impl ListName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToWatch => "toWatch",
            Self::Watched => "watched",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::ToWatch => Self::Watched,
            Self::Watched => Self::ToWatch,
        }
    }

    pub const ALL: &[ListName] = &[Self::ToWatch, Self::Watched];
}

impl std::fmt::Display for ListName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of both lists; also the persisted blob shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistState {
    #[serde(default)]
    pub to_watch: Vec<MediaItem>,
    #[serde(default)]
    pub watched: Vec<MediaItem>,
}

impl WishlistState {
    pub fn list(&self, name: ListName) -> &[MediaItem] {
        match name {
            ListName::ToWatch => &self.to_watch,
            ListName::Watched => &self.watched,
        }
    }

    pub(crate) fn list_mut(&mut self, name: ListName) -> &mut Vec<MediaItem> {
        match name {
            ListName::ToWatch => &mut self.to_watch,
            ListName::Watched => &mut self.watched,
        }
    }

    /// Find an item by id in either list.
    pub fn find(&self, id: &str) -> Option<&MediaItem> {
        self.to_watch
            .iter()
            .chain(self.watched.iter())
            .find(|item| item.id == id)
    }

    /// Total item count across both lists.
    pub fn len(&self) -> usize {
        self.to_watch.len() + self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_watch.is_empty() && self.watched.is_empty()
    }
}

/// Result of a membership query across both lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Membership {
    pub in_to_watch: bool,
    pub in_watched: bool,
}

impl Membership {
    pub fn anywhere(&self) -> bool {
        self.in_to_watch || self.in_watched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_name_str() {
        assert_eq!(ListName::ToWatch.as_str(), "toWatch");
        assert_eq!(ListName::Watched.as_str(), "watched");
        assert_eq!(ListName::ToWatch.other(), ListName::Watched);
    }

    #[test]
    fn test_state_serializes_with_blob_keys() {
        let state = WishlistState::default();
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("toWatch").is_some());
        assert!(json.get("watched").is_some());
    }

    #[test]
    fn test_missing_lists_default_empty() {
        let state: WishlistState = serde_json::from_str("{}").unwrap();
        assert!(state.is_empty());
    }
}
