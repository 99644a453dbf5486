//! Core types for playback sessions

use serde::{Deserialize, Serialize};

/// Seconds since the start of the command stream
pub type Timestamp = i64;

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the source ends
    #[default]
    None,

    /// Play the whole source one more time, then behave like `None`
    RepeatOnce,

    /// Loop the whole source forever
    RepeatAll,

    /// Loop the current track forever
    RepeatCurrent,
}

impl RepeatMode {
    /// Next mode in the `repeat` command cycle.
    ///
    /// Single songs and podcasts cycle None -> RepeatOnce -> RepeatCurrent;
    /// playlists and albums cycle None -> RepeatAll -> RepeatCurrent.
    pub fn cycle(self, collection: bool) -> Self {
        match (self, collection) {
            (RepeatMode::None, false) => RepeatMode::RepeatOnce,
            (RepeatMode::None, true) => RepeatMode::RepeatAll,
            (RepeatMode::RepeatOnce | RepeatMode::RepeatAll, _) => RepeatMode::RepeatCurrent,
            (RepeatMode::RepeatCurrent, _) => RepeatMode::None,
        }
    }

    /// Display name; `RepeatCurrent` reads differently for collections
    pub fn label(self, collection: bool) -> &'static str {
        match self {
            RepeatMode::None => "No Repeat",
            RepeatMode::RepeatOnce => "Repeat Once",
            RepeatMode::RepeatAll => "Repeat All",
            RepeatMode::RepeatCurrent if collection => "Repeat Current Song",
            RepeatMode::RepeatCurrent => "Repeat Infinite",
        }
    }
}

/// What happens to the shuffle order when `RepeatAll` wraps around
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShufflePolicy {
    /// Every pass replays the same permutation
    KeepOrder,

    /// Every pass draws a fresh permutation derived from the seed
    #[default]
    ReshuffleEachLoop,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Nothing was ever loaded
    Empty,

    /// Clock is running
    Playing,

    /// Clock is stopped by the user
    Paused,

    /// Source played out (or was ejected); only `load` restarts playback
    StoppedAtEnd,
}

/// Configuration for playback sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds moved by `skip_forward` / `skip_backward` (default: 90)
    pub skip_seconds: u32,

    /// Shuffle behaviour on `RepeatAll` wraparound (default: reshuffle)
    pub shuffle_policy: ShufflePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            skip_seconds: 90,
            shuffle_policy: ShufflePolicy::ReshuffleEachLoop,
        }
    }
}

/// Snapshot reported by the `status` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatus {
    /// Current track name, empty when nothing plays
    pub name: String,

    /// Seconds left in the current track
    pub remained_time: u32,

    /// Repeat mode display name
    pub repeat: String,

    /// Whether shuffle is enabled
    pub shuffle: bool,

    /// Whether the clock is stopped
    pub paused: bool,
}
