//! Playback sources
//!
//! What a session can load: a single song, a playlist, an album or a
//! podcast. Collections expand to their ordered track list.

use std::sync::Arc;
use wave_core::{Album, PlaylistKey, Podcast, Song, Track};

/// Kind of a loaded source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Song,
    Playlist,
    Album,
    Podcast,
}

/// Entity loaded into a session
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackSource {
    /// A single song
    Song(Arc<Song>),

    /// A user playlist; songs are captured when the playlist is loaded
    Playlist {
        key: PlaylistKey,
        songs: Vec<Arc<Song>>,
    },

    /// A published album
    Album(Arc<Album>),

    /// A podcast, played episode by episode
    Podcast(Arc<Podcast>),
}

impl PlaybackSource {
    /// Kind of this source
    pub fn kind(&self) -> SourceKind {
        match self {
            PlaybackSource::Song(_) => SourceKind::Song,
            PlaybackSource::Playlist { .. } => SourceKind::Playlist,
            PlaybackSource::Album(_) => SourceKind::Album,
            PlaybackSource::Podcast(_) => SourceKind::Podcast,
        }
    }

    /// Whether this is a playlist or an album
    pub fn is_collection(&self) -> bool {
        matches!(self.kind(), SourceKind::Playlist | SourceKind::Album)
    }

    /// Display name of the loaded entity
    pub fn name(&self) -> &str {
        match self {
            PlaybackSource::Song(song) => &song.name,
            PlaybackSource::Playlist { key, .. } => &key.name,
            PlaybackSource::Album(album) => &album.name,
            PlaybackSource::Podcast(podcast) => &podcast.name,
        }
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        match self {
            PlaybackSource::Song(_) => 1,
            PlaybackSource::Playlist { songs, .. } => songs.len(),
            PlaybackSource::Album(album) => album.songs.len(),
            PlaybackSource::Podcast(podcast) => podcast.episodes.len(),
        }
    }

    /// Whether the source has no tracks
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Track at a source index (source order, not shuffle order)
    pub fn track(&self, index: usize) -> Option<Track> {
        match self {
            PlaybackSource::Song(song) => (index == 0).then(|| Track::Song(Arc::clone(song))),
            PlaybackSource::Playlist { songs, .. } => songs.get(index).cloned().map(Track::Song),
            PlaybackSource::Album(album) => album.songs.get(index).cloned().map(Track::Song),
            PlaybackSource::Podcast(podcast) => {
                podcast.episodes.get(index).cloned().map(Track::Episode)
            }
        }
    }
}
