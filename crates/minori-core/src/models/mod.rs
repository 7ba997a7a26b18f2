mod list;
mod media;

pub use list::{ListName, Membership, WishlistState};
pub use media::{MediaItem, MediaKind, SeasonProgress, DEFAULT_EPISODES_PER_SEASON};
