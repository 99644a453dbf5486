/// Song domain type
use serde::{Deserialize, Serialize};

use super::SongKey;

/// A song from the library or from an artist's album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Song title
    pub name: String,

    /// Duration in seconds
    pub duration: u32,

    /// Album title
    pub album: String,

    /// Free-form tags used by search
    #[serde(default)]
    pub tags: Vec<String>,

    /// Lyrics (searchable, never rendered)
    #[serde(default)]
    pub lyrics: String,

    /// Genre
    pub genre: String,

    /// Release year
    pub release_year: i32,

    /// Performing artist
    pub artist: String,
}

impl Song {
    /// Create a song without tags or lyrics
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        genre: impl Into<String>,
        release_year: i32,
        duration: u32,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            album: album.into(),
            tags: Vec::new(),
            lyrics: String::new(),
            genre: genre.into(),
            release_year,
            artist: artist.into(),
        }
    }

    /// Identity key of this song
    pub fn key(&self) -> SongKey {
        SongKey::new(&self.name, &self.artist)
    }
}
