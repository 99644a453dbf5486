//! Page navigation history
//!
//! Every listener browses a stack of pages with a cursor. Entries hold only
//! identity keys (usernames), so rendering always reflects the live state of
//! the artist or host behind a page.

use std::fmt;
use wave_playback::{PlaybackSession, PlaybackSource};

/// Page a listener can visit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavigationEntry {
    /// Recommendations built from the listener's likes and follows
    Home,

    /// Everything the listener liked or followed
    LikedContent,

    /// An artist's albums, merch and events
    Artist(String),

    /// A host's podcasts and announcements
    Host(String),
}

impl NavigationEntry {
    /// Page type of this entry
    pub fn kind(&self) -> PageKind {
        match self {
            NavigationEntry::Home => PageKind::Home,
            NavigationEntry::LikedContent => PageKind::LikedContent,
            NavigationEntry::Artist(_) => PageKind::Artist,
            NavigationEntry::Host(_) => PageKind::Host,
        }
    }

    /// Build the entry for `kind`, resolving artist and host pages through
    /// the listener's last loaded source.
    ///
    /// An artist page follows the track under the cursor (so inside a
    /// shuffled playlist it is the artist of the song actually playing); a
    /// host page requires a podcast. Returns `None` when the page cannot be
    /// reached from what was loaded.
    pub fn resolve(kind: PageKind, session: &PlaybackSession) -> Option<Self> {
        match kind {
            PageKind::Home => Some(NavigationEntry::Home),
            PageKind::LikedContent => Some(NavigationEntry::LikedContent),
            PageKind::Artist => {
                let state = session.state()?;
                if matches!(state.source(), PlaybackSource::Podcast(_)) {
                    return None;
                }
                let track = state.current_track()?;
                Some(NavigationEntry::Artist(track.as_song()?.artist.clone()))
            }
            PageKind::Host => match session.last_source()? {
                PlaybackSource::Podcast(podcast) => {
                    Some(NavigationEntry::Host(podcast.owner.clone()))
                }
                _ => None,
            },
        }
    }
}

/// Page type named by the `changePage` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Home page
    Home,
    /// Liked content page
    LikedContent,
    /// Page of the artist currently listened to
    Artist,
    /// Page of the host currently listened to
    Host,
}

impl PageKind {
    /// Parse a page name as it appears in `changePage`
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Home" => Some(PageKind::Home),
            "LikedContent" => Some(PageKind::LikedContent),
            "Artist" => Some(PageKind::Artist),
            "Host" => Some(PageKind::Host),
            _ => None,
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKind::Home => "Home",
            PageKind::LikedContent => "LikedContent",
            PageKind::Artist => "Artist",
            PageKind::Host => "Host",
        };
        f.write_str(name)
    }
}

/// Page history with a cursor
///
/// Pushing appends and moves the cursor to the new entry; back and forward
/// only move the cursor, entries are never dropped.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    /// Visited pages, oldest first; never empty
    entries: Vec<NavigationEntry>,

    /// Index of the page on screen
    cursor: usize,
}

impl NavigationStack {
    /// Create a history showing the home page
    pub fn new() -> Self {
        Self {
            entries: vec![NavigationEntry::Home],
            cursor: 0,
        }
    }

    /// Visit a page
    pub fn push(&mut self, entry: NavigationEntry) {
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    /// Move to the previous page; `false` when already at the first one
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move to the following page; `false` when already at the last one
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Page on screen
    pub fn current(&self) -> &NavigationEntry {
        &self.entries[self.cursor]
    }

    /// Cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of visited pages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the home page is never dropped
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}
