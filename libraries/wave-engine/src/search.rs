//! Search filters and result items
//!
//! A search returns at most `search_limit` hits; the listener then selects
//! one by its 1-based position.

use serde::Deserialize;
use std::sync::Arc;
use wave_core::{Album, PlaylistKey, Podcast, Song};

/// Catalog section a search runs over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Catalog songs
    Song,
    /// Playlists visible to the searcher
    Playlist,
    /// Podcasts
    Podcast,
    /// Albums
    Album,
    /// Registered artists
    Artist,
    /// Registered hosts
    Host,
}

/// Filters of a `search` command; absent filters match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Case-insensitive name prefix
    pub name: Option<String>,
    /// Exact album name
    pub album: Option<String>,
    /// Tags that must all be present
    pub tags: Option<Vec<String>>,
    /// Case-insensitive lyrics fragment
    pub lyrics: Option<String>,
    /// Genre, case-insensitive
    pub genre: Option<String>,
    /// `<YYYY` or `>YYYY`
    pub release_year: Option<String>,
    /// Exact artist name
    pub artist: Option<String>,
    /// Exact owner username
    pub owner: Option<String>,
    /// Description prefix
    pub description: Option<String>,
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value.to_lowercase().starts_with(&prefix.to_lowercase())
}

fn year_matches(year: i32, filter: &str) -> bool {
    let (op, bound) = filter.split_at(filter.find(|c: char| c.is_ascii_digit()).unwrap_or(0));
    let Ok(bound) = bound.trim().parse::<i32>() else {
        return false;
    };
    match op.trim() {
        "<" => year < bound,
        ">" => year > bound,
        "" | "=" => year == bound,
        _ => false,
    }
}

impl SearchFilters {
    fn name_matches(&self, name: &str) -> bool {
        self.name
            .as_deref()
            .map_or(true, |prefix| starts_with_ignore_case(name, prefix))
    }

    fn owner_matches(&self, owner: &str) -> bool {
        self.owner.as_deref().map_or(true, |wanted| wanted == owner)
    }

    /// Whether a song passes every filter
    pub fn matches_song(&self, song: &Song) -> bool {
        self.name_matches(&song.name)
            && self.album.as_deref().map_or(true, |album| album == song.album)
            && self.tags.as_ref().map_or(true, |tags| {
                tags.iter().all(|tag| song.tags.contains(tag))
            })
            && self.lyrics.as_deref().map_or(true, |fragment| {
                song.lyrics.to_lowercase().contains(&fragment.to_lowercase())
            })
            && self
                .genre
                .as_deref()
                .map_or(true, |genre| genre.eq_ignore_ascii_case(&song.genre))
            && self
                .release_year
                .as_deref()
                .map_or(true, |filter| year_matches(song.release_year, filter))
            && self.artist.as_deref().map_or(true, |artist| artist == song.artist)
    }

    /// Whether a playlist name and owner pass the filters
    pub fn matches_playlist(&self, key: &PlaylistKey) -> bool {
        self.name_matches(&key.name) && self.owner_matches(&key.owner)
    }

    /// Whether a podcast passes the filters
    pub fn matches_podcast(&self, podcast: &Podcast) -> bool {
        self.name_matches(&podcast.name) && self.owner_matches(&podcast.owner)
    }

    /// Whether an album passes the filters
    pub fn matches_album(&self, album: &Album) -> bool {
        self.name_matches(&album.name)
            && self.owner_matches(&album.owner)
            && self
                .description
                .as_deref()
                .map_or(true, |prefix| album.description.starts_with(prefix))
    }

    /// Whether a username passes the filters
    pub fn matches_user(&self, username: &str) -> bool {
        self.name_matches(username)
    }
}

/// One search result
#[derive(Debug, Clone, PartialEq)]
pub enum SearchHit {
    /// A catalog song
    Song(Arc<Song>),
    /// A playlist, resolved again when loaded
    Playlist(PlaylistKey),
    /// A podcast
    Podcast(Arc<Podcast>),
    /// An album
    Album(Arc<Album>),
    /// An artist's username
    Artist(String),
    /// A host's username
    Host(String),
}

impl SearchHit {
    /// Name shown in the result list
    pub fn name(&self) -> &str {
        match self {
            SearchHit::Song(song) => &song.name,
            SearchHit::Playlist(key) => &key.name,
            SearchHit::Podcast(podcast) => &podcast.name,
            SearchHit::Album(album) => &album.name,
            SearchHit::Artist(name) | SearchHit::Host(name) => name,
        }
    }
}

/// Search results and selection of one listener
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Results of the last search, until something is selected
    pub results: Option<Vec<SearchHit>>,

    /// Item picked by the last `select`, until loaded
    pub selection: Option<SearchHit>,
}

impl SearchState {
    /// Store fresh results, dropping any previous selection
    pub fn replace(&mut self, results: Vec<SearchHit>) {
        self.results = Some(results);
        self.selection = None;
    }

    /// Pick result `item` (1-based), consuming the result list
    pub fn select(&mut self, item: usize) -> Option<Option<&SearchHit>> {
        let results = self.results.take()?;
        self.selection = item
            .checked_sub(1)
            .and_then(|index| results.into_iter().nth(index));
        Some(self.selection.as_ref())
    }
}
