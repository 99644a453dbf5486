//! Error types for playback sessions

use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Source has no tracks (empty playlist or album)
    #[error("You can't load an empty audio collection!")]
    EmptySource,

    /// Nothing loaded, or the loaded source already played out
    #[error("No source loaded")]
    NothingLoaded,

    /// Shuffle requires a playlist or an album
    #[error("The loaded source is not a playlist or an album.")]
    NotCollection,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
