//! Error types for the session engine
//!
//! Every variant's display text is the message a rejected command reports
//! back; nothing here ever aborts the command stream.

use thiserror::Error;
use wave_core::{ErrorKind, WaveError};
use wave_playback::PlaybackError;

/// Engine errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Unknown user or role mismatch
    #[error(transparent)]
    Core(#[from] WaveError),

    /// Listener issued a command while offline
    #[error("{0} is offline.")]
    Offline(String),

    /// `addUser` with a name already registered under any role
    #[error("The username {0} is already taken.")]
    UsernameTaken(String),

    /// `select` without a preceding search
    #[error("Please conduct a search before making a selection.")]
    NoSearch,

    /// `select` past the end of the results
    #[error("The selected ID is too high.")]
    SelectionOutOfRange,

    /// `load` without a selection
    #[error("Please select a source before attempting to load.")]
    NothingSelected,

    /// Empty playlist or album
    #[error("You can't load an empty audio collection!")]
    EmptySource,

    /// Player command with nothing loaded
    #[error("Please load a source before {action}.")]
    NothingLoaded {
        /// What the user attempted, as it reads in the message
        action: &'static str,
    },

    /// Shuffle on a single song or podcast
    #[error("The loaded source is not a playlist or an album.")]
    NotCollection,

    /// Skip commands outside a podcast
    #[error("The loaded source is not a podcast.")]
    NotPodcast,

    /// Like or playlist edit while a podcast plays
    #[error("The loaded source is not a song.")]
    NotSong,

    /// Playlist id outside the user's playlists (`addRemoveInPlaylist`)
    #[error("The specified playlist does not exist.")]
    PlaylistNotFound,

    /// Playlist id outside the user's playlists (`switchVisibility`)
    #[error("The specified playlist ID is too high.")]
    InvalidPlaylistId,

    /// Owner already has a playlist with this name
    #[error("A playlist with the same name already exists.")]
    DuplicatePlaylist,

    /// Following a playlist the user owns
    #[error("You cannot follow or unfollow your own playlist.")]
    SelfFollow,

    /// `follow` without a selection
    #[error("Please select a source before following or unfollowing.")]
    NothingSelectedToFollow,

    /// `follow` on something other than a playlist
    #[error("The selected source is not a playlist.")]
    NotPlaylist,

    /// Navigation cursor at the first page
    #[error("There are no pages left to go back.")]
    NoPreviousPage,

    /// Navigation cursor at the last page
    #[error("There are no pages left to go forward.")]
    NoNextPage,

    /// Page name unknown, or not reachable from the last loaded source
    #[error("{0} is trying to access a non-existent page.")]
    WrongPageType(String),

    /// Artist already has an event with this name
    #[error("{0} has another event with the same name.")]
    DuplicateEvent(String),

    /// Event date is not a real `dd-mm-yyyy` date in range
    #[error("Event for {0} does not have a valid date.")]
    InvalidEventDate(String),

    /// Artist already sells merch with this name
    #[error("{0} has merchandise with the same name.")]
    DuplicateMerch(String),

    /// Merch with a negative price
    #[error("Price for merchandise can not be negative.")]
    NegativePrice,

    /// Host already posted an announcement with this name
    #[error("{0} has already added an announcement with this name.")]
    DuplicateAnnouncement(String),

    /// `buyPremium` on a premium listener
    #[error("{0} is already a premium user.")]
    AlreadyPremium(String),

    /// `cancelPremium` on a free listener
    #[error("{0} is not a premium user.")]
    NotPremium(String),

    /// `adBreak` while nothing plays
    #[error("{0} is not playing any music.")]
    NotPlaying(String),

    /// `buyMerch` with an unknown product name
    #[error("The merch {0} doesn't exist.")]
    MerchNotFound(String),

    /// `buyMerch` away from an artist page
    #[error("Cannot buy merch if you are not on the page of an artist.")]
    NotOnArtistPage,

    /// `wrapped` for a user nobody listened to
    #[error("No data to show for user {0}.")]
    NoWrappedData(String),
}

impl EngineError {
    /// Translate a session failure into the message for `action`
    pub fn playback(err: PlaybackError, action: &'static str) -> Self {
        match err {
            PlaybackError::EmptySource => Self::EmptySource,
            PlaybackError::NothingLoaded => Self::NothingLoaded { action },
            PlaybackError::NotCollection => Self::NotCollection,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(err) => err.kind(),
            Self::Offline(_)
            | Self::NoSearch
            | Self::NothingSelected
            | Self::NothingLoaded { .. }
            | Self::NothingSelectedToFollow
            | Self::NoPreviousPage
            | Self::NoNextPage
            | Self::AlreadyPremium(_)
            | Self::NotPremium(_)
            | Self::NotPlaying(_)
            | Self::NotOnArtistPage
            | Self::NoWrappedData(_) => ErrorKind::State,
            _ => ErrorKind::Validation,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
