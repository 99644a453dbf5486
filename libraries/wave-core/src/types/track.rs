/// Playable unit
use std::sync::Arc;

use super::{Episode, Song};

/// Anything the player can play: a song or a podcast episode
#[derive(Debug, Clone, PartialEq)]
pub enum Track {
    /// Song from the catalog
    Song(Arc<Song>),

    /// Podcast episode
    Episode(Arc<Episode>),
}

impl Track {
    /// Track title
    pub fn name(&self) -> &str {
        match self {
            Track::Song(song) => &song.name,
            Track::Episode(episode) => &episode.name,
        }
    }

    /// Duration in seconds
    pub fn duration(&self) -> u32 {
        match self {
            Track::Song(song) => song.duration,
            Track::Episode(episode) => episode.duration,
        }
    }

    /// The song, if this track is one
    pub fn as_song(&self) -> Option<&Arc<Song>> {
        match self {
            Track::Song(song) => Some(song),
            Track::Episode(_) => None,
        }
    }

    /// The episode, if this track is one
    pub fn as_episode(&self) -> Option<&Arc<Episode>> {
        match self {
            Track::Song(_) => None,
            Track::Episode(episode) => Some(episode),
        }
    }
}
