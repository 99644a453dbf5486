//! Audio catalog
//!
//! The library of songs, albums and podcasts every session plays from.
//! Entries are shared through `Arc` and never change once inserted; only
//! the owning artist or host adds new albums and podcasts.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{Result, WaveError};
use crate::types::{Album, Podcast, PodcastRecord, Song, UserRecord};

/// Library snapshot as read from an input file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    /// Songs not attached to any published album
    #[serde(default)]
    pub songs: Vec<Song>,

    /// Podcasts with their episodes
    #[serde(default)]
    pub podcasts: Vec<PodcastRecord>,

    /// Accounts present before the first command
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// Read-mostly library of playable content
#[derive(Debug, Clone, Default)]
pub struct AudioCatalog {
    songs: Vec<Arc<Song>>,
    albums: Vec<Arc<Album>>,
    podcasts: Vec<Arc<Podcast>>,
}

impl AudioCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog from a library snapshot.
    ///
    /// Users are not part of the catalog; callers register them separately.
    pub fn from_library(library: Library) -> Self {
        Self {
            songs: library.songs.into_iter().map(Arc::new).collect(),
            albums: Vec::new(),
            podcasts: library
                .podcasts
                .into_iter()
                .map(|record| Arc::new(Podcast::from(record)))
                .collect(),
        }
    }

    /// All songs, library songs first, then album songs in publication order
    pub fn songs(&self) -> &[Arc<Song>] {
        &self.songs
    }

    /// All published albums
    pub fn albums(&self) -> &[Arc<Album>] {
        &self.albums
    }

    /// All podcasts
    pub fn podcasts(&self) -> &[Arc<Podcast>] {
        &self.podcasts
    }

    /// Albums published by an artist, oldest first
    pub fn albums_by<'a>(&'a self, artist: &'a str) -> impl Iterator<Item = &'a Arc<Album>> + 'a {
        self.albums.iter().filter(move |album| album.owner == artist)
    }

    /// Podcasts owned by a host, oldest first
    pub fn podcasts_by<'a>(&'a self, host: &'a str) -> impl Iterator<Item = &'a Arc<Podcast>> + 'a {
        self.podcasts.iter().filter(move |podcast| podcast.owner == host)
    }

    /// Songs performed by an artist
    pub fn songs_by<'a>(&'a self, artist: &'a str) -> impl Iterator<Item = &'a Arc<Song>> + 'a {
        self.songs.iter().filter(move |song| song.artist == artist)
    }

    /// Find a podcast by exact name
    pub fn find_podcast(&self, name: &str) -> Option<&Arc<Podcast>> {
        self.podcasts.iter().find(|podcast| podcast.name == name)
    }

    /// Publish an album.
    ///
    /// Rejects a second album with the same name from the same artist and an
    /// album listing the same song title twice. The album's songs join the
    /// catalog.
    pub fn add_album(&mut self, album: Album) -> Result<Arc<Album>> {
        if self.albums_by(&album.owner).any(|a| a.name == album.name) {
            return Err(WaveError::validation(format!(
                "{} has another album with the same name.",
                album.owner
            )));
        }

        let mut seen = HashSet::new();
        if !album.songs.iter().all(|song| seen.insert(song.name.as_str())) {
            return Err(WaveError::validation(format!(
                "{} has the same song at least twice in this album.",
                album.owner
            )));
        }

        self.songs.extend(album.songs.iter().cloned());
        let album = Arc::new(album);
        self.albums.push(Arc::clone(&album));
        Ok(album)
    }

    /// Publish a podcast; names are unique per host.
    pub fn add_podcast(&mut self, podcast: Podcast) -> Result<Arc<Podcast>> {
        if self.podcasts_by(&podcast.owner).any(|p| p.name == podcast.name) {
            return Err(WaveError::validation(format!(
                "{} has another podcast with the same name.",
                podcast.owner
            )));
        }

        let podcast = Arc::new(podcast);
        self.podcasts.push(Arc::clone(&podcast));
        Ok(podcast)
    }
}
