/// Album domain type
use std::sync::Arc;

use super::Song;

/// An album published by an artist
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    /// Album title
    pub name: String,

    /// Username of the publishing artist
    pub owner: String,

    /// Release year
    pub release_year: i32,

    /// Description shown on the artist page
    pub description: String,

    /// Songs in playback order
    pub songs: Vec<Arc<Song>>,
}

impl Album {
    /// Create a new album
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        release_year: i32,
        description: impl Into<String>,
        songs: Vec<Song>,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            release_year,
            description: description.into(),
            songs: songs.into_iter().map(Arc::new).collect(),
        }
    }
}
