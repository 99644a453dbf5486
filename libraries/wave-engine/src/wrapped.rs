//! Listening statistics ("wrapped")
//!
//! Every completed play bumps counters for the listener, for the artist of
//! a song and for the host of an episode. Reports list the top entries by
//! count, ties broken by name.

use serde::Serialize;
use std::collections::HashMap;
use wave_core::Track;

use crate::monetization::ListenRecord;

/// Play counts keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally(HashMap<String, u32>);

impl Tally {
    /// Count one play of `key`
    pub fn bump(&mut self, key: &str) {
        *self.0.entry(key.to_string()).or_default() += 1;
    }

    /// Plays of `key`
    pub fn count(&self, key: &str) -> u32 {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was counted
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest counts first, ties by ascending key, at most `limit` entries
    pub fn top(&self, limit: usize) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .0
            .iter()
            .map(|(key, &count)| (key.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(limit);
        entries
    }

    fn top_map(&self, limit: usize) -> serde_json::Map<String, serde_json::Value> {
        self.top(limit)
            .into_iter()
            .map(|(key, count)| (key.to_string(), count.into()))
            .collect()
    }
}

/// What one listener played
#[derive(Debug, Clone, Default)]
struct ListenerStats {
    artists: Tally,
    genres: Tally,
    songs: Tally,
    albums: Tally,
    episodes: Tally,
}

/// Who played one artist's songs
#[derive(Debug, Clone, Default)]
struct ArtistStats {
    albums: Tally,
    songs: Tally,
    fans: Tally,
}

/// Who played one host's episodes
#[derive(Debug, Clone, Default)]
struct HostStats {
    episodes: Tally,
    listeners: Tally,
}

/// Wrapped report of a listener
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerReport {
    /// Artist -> plays
    pub top_artists: serde_json::Map<String, serde_json::Value>,
    /// Genre -> plays
    pub top_genres: serde_json::Map<String, serde_json::Value>,
    /// Song -> plays
    pub top_songs: serde_json::Map<String, serde_json::Value>,
    /// Album -> plays
    pub top_albums: serde_json::Map<String, serde_json::Value>,
    /// Episode -> plays
    pub top_episodes: serde_json::Map<String, serde_json::Value>,
}

/// Wrapped report of an artist
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistReport {
    /// Album -> plays
    pub top_albums: serde_json::Map<String, serde_json::Value>,
    /// Song -> plays
    pub top_songs: serde_json::Map<String, serde_json::Value>,
    /// Most devoted listeners
    pub top_fans: Vec<String>,
    /// Distinct listeners
    pub listeners: usize,
}

/// Wrapped report of a host
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostReport {
    /// Episode -> plays
    pub top_episodes: serde_json::Map<String, serde_json::Value>,
    /// Distinct listeners
    pub listeners: usize,
}

/// Running counters for every user
#[derive(Debug, Clone)]
pub struct WrappedAggregator {
    limit: usize,
    listeners: HashMap<String, ListenerStats>,
    artists: HashMap<String, ArtistStats>,
    hosts: HashMap<String, HostStats>,
}

impl WrappedAggregator {
    /// Create an aggregator reporting `limit` entries per category
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            listeners: HashMap::new(),
            artists: HashMap::new(),
            hosts: HashMap::new(),
        }
    }

    /// Count a completed play
    pub fn record(&mut self, listen: &ListenRecord) {
        let stats = self.listeners.entry(listen.listener.clone()).or_default();

        match &listen.track {
            Track::Song(song) => {
                stats.artists.bump(&song.artist);
                stats.genres.bump(&song.genre);
                stats.songs.bump(&song.name);
                stats.albums.bump(&song.album);

                let artist = self.artists.entry(song.artist.clone()).or_default();
                artist.albums.bump(&song.album);
                artist.songs.bump(&song.name);
                artist.fans.bump(&listen.listener);
            }
            Track::Episode(episode) => {
                stats.episodes.bump(&episode.name);

                let host = self.hosts.entry(episode.owner.clone()).or_default();
                host.episodes.bump(&episode.name);
                host.listeners.bump(&listen.listener);
            }
        }
    }

    /// Report for a listener, `None` if they completed nothing
    pub fn listener_report(&self, username: &str) -> Option<ListenerReport> {
        let stats = self.listeners.get(username)?;
        let limit = self.limit;
        Some(ListenerReport {
            top_artists: stats.artists.top_map(limit),
            top_genres: stats.genres.top_map(limit),
            top_songs: stats.songs.top_map(limit),
            top_albums: stats.albums.top_map(limit),
            top_episodes: stats.episodes.top_map(limit),
        })
    }

    /// Report for an artist, `None` if nobody played their songs
    pub fn artist_report(&self, username: &str) -> Option<ArtistReport> {
        let stats = self.artists.get(username)?;
        Some(ArtistReport {
            top_albums: stats.albums.top_map(self.limit),
            top_songs: stats.songs.top_map(self.limit),
            top_fans: stats
                .fans
                .top(self.limit)
                .into_iter()
                .map(|(fan, _)| fan.to_string())
                .collect(),
            listeners: stats.fans.len(),
        })
    }

    /// Report for a host, `None` if nobody played their episodes
    pub fn host_report(&self, username: &str) -> Option<HostReport> {
        let stats = self.hosts.get(username)?;
        Some(HostReport {
            top_episodes: stats.episodes.top_map(self.limit),
            listeners: stats.listeners.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wave_core::{Episode, Song};

    fn song_listen(listener: &str, name: &str, artist: &str, genre: &str) -> ListenRecord {
        ListenRecord {
            listener: listener.into(),
            track: Track::Song(Arc::new(Song::new(name, artist, "Album", genre, 2000, 10))),
            premium: false,
        }
    }

    #[test]
    fn top_sorts_by_count_then_name() {
        let mut tally = Tally::default();
        for key in ["b", "a", "c", "b", "c", "d"] {
            tally.bump(key);
        }
        assert_eq!(tally.top(3), vec![("b", 2), ("c", 2), ("a", 1)]);
        assert_eq!(tally.count("d"), 1);
        assert_eq!(tally.count("zzz"), 0);
    }

    #[test]
    fn listener_report_is_ordered() {
        let mut wrapped = WrappedAggregator::new(5);
        wrapped.record(&song_listen("alice", "One", "x", "rock"));
        wrapped.record(&song_listen("alice", "Two", "y", "pop"));
        wrapped.record(&song_listen("alice", "Two", "y", "pop"));

        let report = wrapped.listener_report("alice").unwrap();
        let songs: Vec<&String> = report.top_songs.keys().collect();
        assert_eq!(songs, vec!["Two", "One"]);
        assert_eq!(report.top_genres["pop"], 2);
        assert!(report.top_episodes.is_empty());
        assert!(wrapped.listener_report("bob").is_none());
    }

    #[test]
    fn artist_and_host_reports() {
        let mut wrapped = WrappedAggregator::new(1);
        wrapped.record(&song_listen("alice", "One", "band", "rock"));
        wrapped.record(&song_listen("bob", "One", "band", "rock"));
        wrapped.record(&song_listen("bob", "Two", "band", "rock"));

        let report = wrapped.artist_report("band").unwrap();
        assert_eq!(report.top_fans, vec!["bob"]);
        assert_eq!(report.listeners, 2);
        assert_eq!(report.top_songs.len(), 1);

        let episode = Episode {
            name: "Pilot".into(),
            duration: 10,
            description: String::new(),
            podcast: "Talk".into(),
            owner: "host".into(),
        };
        wrapped.record(&ListenRecord {
            listener: "carol".into(),
            track: Track::Episode(Arc::new(episode)),
            premium: true,
        });
        let report = wrapped.host_report("host").unwrap();
        assert_eq!(report.listeners, 1);
        assert_eq!(report.top_episodes["Pilot"], 1);
    }
}
