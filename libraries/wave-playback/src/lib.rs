//! Wave - Playback Sessions
//!
//! Per-user playback state driven by command timestamps rather than an
//! audio clock.
//!
//! This crate provides:
//! - Playback sources (song, playlist, album, podcast)
//! - Time advance with track-boundary crossing and listen reporting
//! - Seeded, reproducible shuffle (Fisher-Yates over source indices)
//! - Repeat modes (None, Once, All, Current)
//! - Pause/resume, fixed-size skips, next/previous
//! - Podcast resume points
//!
//! # Example: Advancing Time
//!
//! ```rust
//! use std::sync::Arc;
//! use wave_core::{Album, Song};
//! use wave_playback::{PlaybackSession, PlaybackSource, SessionConfig};
//!
//! let album = Album::new(
//!     "Debut",
//!     "band",
//!     2021,
//!     "",
//!     vec![
//!         Song::new("Intro", "band", "Debut", "rock", 2021, 60),
//!         Song::new("Hit", "band", "Debut", "rock", 2021, 180),
//!     ],
//! );
//!
//! let mut session = PlaybackSession::new(SessionConfig::default());
//! session.load(PlaybackSource::Album(Arc::new(album)), 0).unwrap();
//!
//! // 90 seconds later the intro has been listened to in full
//! let completed = session.advance_to(90);
//! assert_eq!(completed.len(), 1);
//! assert_eq!(session.current_track().unwrap().name(), "Hit");
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! # use std::sync::Arc;
//! # use wave_core::{Album, Song};
//! # use wave_playback::{PlaybackSession, PlaybackSource, RepeatMode};
//! # let songs = (0..5).map(|i| Song::new(format!("S{}", i), "band", "A", "rock", 2021, 100)).collect();
//! # let album = Arc::new(Album::new("A", "band", 2021, "", songs));
//! let mut session = PlaybackSession::default();
//! session.load(PlaybackSource::Album(album), 0).unwrap();
//!
//! // Same seed, same order
//! session.toggle_shuffle(42).unwrap();
//! session.set_repeat(RepeatMode::RepeatAll).unwrap();
//! ```

mod error;
mod session;
pub mod shuffle;
mod source;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use session::{PlaybackSession, PlaybackState};
pub use shuffle::Shuffle;
pub use source::{PlaybackSource, SourceKind};
pub use types::{
    PlayerStatus, RepeatMode, SessionConfig, SessionStatus, ShufflePolicy, Timestamp,
};
