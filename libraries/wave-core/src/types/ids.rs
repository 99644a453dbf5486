/// Identity keys for catalog and user-owned entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a song across the catalog.
///
/// Two albums may carry songs with the same title, so the artist is part of
/// the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SongKey {
    /// Song title
    pub name: String,
    /// Performing artist
    pub artist: String,
}

impl SongKey {
    /// Create a new song key
    pub fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
        }
    }
}

/// Identifies a playlist: names are unique per owner only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlaylistKey {
    /// Username of the creator
    pub owner: String,
    /// Playlist name
    pub name: String,
}

impl PlaylistKey {
    /// Create a new playlist key
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for PlaylistKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.owner)
    }
}
