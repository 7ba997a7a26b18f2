//! The wishlist store: sole owner of the two lists and the persisted blob.
//!
//! Every mutation goes through here so list exclusivity and persistence
//! atomicity hold. Mutations rewrite the whole blob synchronously before
//! returning; readers of [`WishlistStore::state`] never observe a
//! half-applied change.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::MinoriError;
use crate::models::{ListName, MediaItem, Membership, WishlistState};
use crate::progress::{self, SeasonUpdate};

/// JSON-blob-backed store for the two wishlist lists.
pub struct WishlistStore {
    path: PathBuf,
    state: WishlistState,
}

impl WishlistStore {
    /// Load the store from `path`, migrating legacy records in both lists.
    ///
    /// A missing file yields empty lists; so does an unreadable or corrupt
    /// one (logged, never surfaced; the lists restart empty rather than
    /// wedging every caller).
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<WishlistState>(&content) {
                Ok(state) => state,
                Err(e) => {
                    warn!("wishlist blob at {} is corrupt: {e}; starting empty", path.display());
                    WishlistState::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => WishlistState::default(),
            Err(e) => {
                warn!("cannot read wishlist blob at {}: {e}; starting empty", path.display());
                WishlistState::default()
            }
        };
        let state = migrate_state(state);
        Self { path, state }
    }

    /// Current snapshot of both lists.
    pub fn state(&self) -> &WishlistState {
        &self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `item` to `list`, stamping `date_added` now.
    ///
    /// No duplicate gate: the same id can be added twice. Callers are
    /// expected to consult [`WishlistStore::membership`] first; this
    /// matches how existing blobs were written.
    pub fn add(&mut self, mut item: MediaItem, list: ListName) -> Result<(), MinoriError> {
        item.date_added = Utc::now();
        self.state.list_mut(list).push(item);
        self.persist()
    }

    /// Remove `id` from `list`; an absent id is a silent no-op.
    pub fn remove(&mut self, id: &str, list: ListName) -> Result<(), MinoriError> {
        let target = self.state.list_mut(list);
        let before = target.len();
        target.retain(|item| item.id != id);
        if target.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Move `id` from one list to the other, keeping its `date_added`
    /// (a move is not a re-add). When the id is not in `from`, neither
    /// list changes.
    pub fn move_item(&mut self, id: &str, from: ListName, to: ListName) -> Result<(), MinoriError> {
        let source = self.state.list_mut(from);
        let Some(pos) = source.iter().position(|item| item.id == id) else {
            return Ok(());
        };
        let item = source.remove(pos);
        self.state.list_mut(to).push(item);
        self.persist()
    }

    /// Toggle one episode of the item's current season watched/unwatched.
    pub fn toggle_episode(&mut self, id: &str, episode: u32) -> Result<(), MinoriError> {
        self.with_item(id, |item| progress::toggle_episode(item, episode))
    }

    /// Resize the current season's episode count and the season count.
    pub fn resize_progress(
        &mut self,
        id: &str,
        total_episodes: u32,
        total_seasons: u32,
    ) -> Result<(), MinoriError> {
        self.with_item(id, |item| progress::resize(item, total_episodes, total_seasons))
    }

    /// Overwrite one season's progress wholesale.
    pub fn update_season(&mut self, id: &str, update: SeasonUpdate) -> Result<(), MinoriError> {
        self.with_item(id, |item| progress::apply_season_update(item, update))
    }

    /// Whether `id` is present in either list.
    pub fn membership(&self, id: &str) -> Membership {
        Membership {
            in_to_watch: self.state.to_watch.iter().any(|item| item.id == id),
            in_watched: self.state.watched.iter().any(|item| item.id == id),
        }
    }

    /// Apply `f` to the item with `id` wherever it lives, then persist.
    /// Unknown ids are a silent no-op, with no write either.
    fn with_item(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut MediaItem),
    ) -> Result<(), MinoriError> {
        let item = self
            .state
            .to_watch
            .iter_mut()
            .chain(self.state.watched.iter_mut())
            .find(|item| item.id == id);
        match item {
            Some(item) => {
                f(item);
                self.persist()
            }
            None => Ok(()),
        }
    }

    /// Serialize the whole two-list blob. Temp file + rename, so a crash
    /// mid-write leaves the previous blob intact.
    fn persist(&self) -> Result<(), MinoriError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.state)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!("persisted wishlist ({} items)", self.state.len());
        Ok(())
    }
}

/// Run legacy migration over both lists.
fn migrate_state(state: WishlistState) -> WishlistState {
    WishlistState {
        to_watch: state.to_watch.into_iter().map(progress::migrate).collect(),
        watched: state.watched.into_iter().map(progress::migrate).collect(),
    }
}
