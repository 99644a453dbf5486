//! Domain types for the Wave catalog
//!
//! Songs, podcast episodes and the collections they are grouped into are
//! immutable once they enter the catalog and are shared through `Arc`.

mod album;
mod creator;
mod ids;
mod podcast;
mod song;
mod track;
mod user;

pub use album::Album;
pub use creator::{Announcement, Event, Merch};
pub use ids::{PlaylistKey, SongKey};
pub use podcast::{Episode, Podcast, PodcastRecord};
pub use song::Song;
pub use track::Track;
pub use user::{UserRecord, UserRole};
