//! Wave Core
//!
//! Catalog types, user roles and error handling shared by every Wave crate.
//!
//! This crate provides the read-mostly building blocks the session engine
//! works against:
//! - **Domain Types**: `Song`, `Episode`, `Podcast`, `Album`, `Track`, creator content
//! - **Catalog**: `AudioCatalog`, the library of songs, albums and podcasts
//! - **Error Handling**: Unified `WaveError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use wave_core::{AudioCatalog, Library, Song};
//!
//! let song = Song::new("Yellow", "Coldplay", "Parachutes", "rock", 2000, 266);
//! let catalog = AudioCatalog::from_library(Library {
//!     songs: vec![song],
//!     ..Default::default()
//! });
//!
//! assert_eq!(catalog.songs().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use catalog::{AudioCatalog, Library};
pub use error::{ErrorKind, Result, WaveError};
pub use types::{
    Album, Announcement, Episode, Event, Merch, PlaylistKey, Podcast, PodcastRecord, Song, SongKey,
    Track, UserRecord, UserRole,
};
