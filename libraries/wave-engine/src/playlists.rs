//! Playlist directory
//!
//! Playlists live in one arena; each owner keeps the indices of their own
//! playlists in creation order, which is what user-facing playlist ids
//! (1-based) refer to. The arena doubles as the global registry used by
//! search, follows and the top listing.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use wave_core::{PlaylistKey, Song};
use wave_playback::{PlaybackSource, Timestamp};

use crate::error::{EngineError, Result};

/// Who can see a playlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Listed in search and top listings
    #[default]
    Public,
    /// Only visible to its owner
    Private,
}

impl Visibility {
    fn flipped(self) -> Self {
        match self {
            Visibility::Public => Visibility::Private,
            Visibility::Private => Visibility::Public,
        }
    }
}

/// A user-created playlist
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Owner and name
    pub key: PlaylistKey,

    /// Songs in playback order, no two with the same name
    pub songs: Vec<Arc<Song>>,

    /// Visibility
    pub visibility: Visibility,

    /// Number of listeners following this playlist
    pub followers: u32,

    /// Timestamp of the `createPlaylist` command
    pub created_at: Timestamp,
}

impl Playlist {
    /// Snapshot of the playlist for loading into a session
    pub fn to_source(&self) -> PlaybackSource {
        PlaybackSource::Playlist {
            key: self.key.clone(),
            songs: self.songs.clone(),
        }
    }

    /// Whether `user` may see this playlist
    pub fn visible_to(&self, user: &str) -> bool {
        self.visibility == Visibility::Public || self.key.owner == user
    }
}

/// Outcome of a follow toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowChange {
    /// The user now follows the playlist
    Followed,
    /// The user no longer follows the playlist
    Unfollowed,
    /// Private playlist; nothing changed
    Refused,
}

/// Every playlist, indexed by owner
#[derive(Debug, Clone, Default)]
pub struct PlaylistDirectory {
    playlists: Vec<Playlist>,
    by_owner: HashMap<String, Vec<usize>>,
}

impl PlaylistDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a playlist for `owner`
    pub fn create(&mut self, owner: &str, name: &str, at: Timestamp) -> Result<PlaylistKey> {
        if self.find(owner, name).is_some() {
            return Err(EngineError::DuplicatePlaylist);
        }

        let key = PlaylistKey::new(owner, name);
        self.by_owner
            .entry(owner.to_string())
            .or_default()
            .push(self.playlists.len());
        self.playlists.push(Playlist {
            key: key.clone(),
            songs: Vec::new(),
            visibility: Visibility::Public,
            followers: 0,
            created_at: at,
        });

        debug!(owner, name, "Created playlist");
        Ok(key)
    }

    /// Look a playlist up by owner and name
    pub fn find(&self, owner: &str, name: &str) -> Option<&Playlist> {
        self.owned_by(owner).find(|playlist| playlist.key.name == name)
    }

    /// Look a playlist up by key
    pub fn get(&self, key: &PlaylistKey) -> Option<&Playlist> {
        self.find(&key.owner, &key.name)
    }

    /// Playlists of `owner` in creation order
    pub fn owned_by<'a>(&'a self, owner: &str) -> impl Iterator<Item = &'a Playlist> + 'a {
        self.by_owner
            .get(owner)
            .into_iter()
            .flatten()
            .map(|&index| &self.playlists[index])
    }

    /// Every playlist `user` may see, in creation order
    pub fn visible_to<'a>(&'a self, user: &'a str) -> impl Iterator<Item = &'a Playlist> + 'a {
        self.playlists
            .iter()
            .filter(move |playlist| playlist.visible_to(user))
    }

    /// Resolve a 1-based playlist id of `owner`
    fn by_id_mut(&mut self, owner: &str, id: usize) -> Option<&mut Playlist> {
        let index = *self.by_owner.get(owner)?.get(id.checked_sub(1)?)?;
        self.playlists.get_mut(index)
    }

    /// Add `song` to playlist `id` of `owner`, or remove the song with the
    /// same name if one is already there. Returns `true` when added.
    pub fn toggle_song(&mut self, owner: &str, id: usize, song: Arc<Song>) -> Result<bool> {
        let playlist = self
            .by_id_mut(owner, id)
            .ok_or(EngineError::PlaylistNotFound)?;

        match playlist.songs.iter().position(|s| s.name == song.name) {
            Some(index) => {
                playlist.songs.remove(index);
                Ok(false)
            }
            None => {
                playlist.songs.push(song);
                Ok(true)
            }
        }
    }

    /// Flip the visibility of playlist `id` of `owner`
    pub fn switch_visibility(&mut self, owner: &str, id: usize) -> Result<Visibility> {
        let playlist = self
            .by_id_mut(owner, id)
            .ok_or(EngineError::InvalidPlaylistId)?;
        playlist.visibility = playlist.visibility.flipped();
        Ok(playlist.visibility)
    }

    /// Follow or unfollow `key` on behalf of `user`.
    ///
    /// `following` is the user's own list of followed playlists; it and the
    /// follower count always change together.
    pub fn toggle_follow(
        &mut self,
        user: &str,
        following: &mut Vec<PlaylistKey>,
        key: &PlaylistKey,
    ) -> Result<FollowChange> {
        if key.owner == user {
            return Err(EngineError::SelfFollow);
        }

        let Some(playlist) = self
            .playlists
            .iter_mut()
            .find(|playlist| &playlist.key == key)
        else {
            return Err(EngineError::NotPlaylist);
        };

        if let Some(index) = following.iter().position(|followed| followed == key) {
            following.remove(index);
            playlist.followers = playlist.followers.saturating_sub(1);
            return Ok(FollowChange::Unfollowed);
        }

        if playlist.visibility == Visibility::Private {
            return Ok(FollowChange::Refused);
        }

        following.push(key.clone());
        playlist.followers += 1;
        Ok(FollowChange::Followed)
    }

    /// Public playlists with the most followers; ties keep creation order
    pub fn top_by_followers(&self, limit: usize) -> Vec<&Playlist> {
        let mut public: Vec<&Playlist> = self
            .playlists
            .iter()
            .filter(|playlist| playlist.visibility == Visibility::Public)
            .collect();
        public.sort_by(|a, b| b.followers.cmp(&a.followers));
        public.truncate(limit);
        public
    }
}
