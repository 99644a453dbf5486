//! Typed commands
//!
//! Input records look like `{"command": "search", "username": "alice",
//! "timestamp": 10, "type": "song", "filters": {...}}`: the `command` tag
//! selects the variant and the remaining fields are its payload.

use serde::Deserialize;
use wave_core::{Episode, Song, UserRole};
use wave_playback::Timestamp;

use crate::search::{SearchFilters, SearchKind};

/// One input record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandEnvelope {
    /// Issuing user; absent for global queries
    #[serde(default)]
    pub username: Option<String>,

    /// Seconds since the start of the run; never decreases
    pub timestamp: Timestamp,

    /// What to do
    #[serde(flatten)]
    pub command: Command,
}

impl CommandEnvelope {
    /// The synthetic last command of a run
    pub fn end_program(timestamp: Timestamp) -> Self {
        Self {
            username: None,
            timestamp,
            command: Command::EndProgram,
        }
    }
}

/// Every command the engine understands
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    // Search and playback
    Search {
        #[serde(rename = "type")]
        kind: SearchKind,
        #[serde(default)]
        filters: SearchFilters,
    },
    Select {
        item_number: usize,
    },
    Load,
    PlayPause,
    Repeat,
    Shuffle {
        #[serde(default)]
        seed: u64,
    },
    Forward,
    Backward,
    Like,
    Next,
    Prev,
    Status,

    // Playlists
    AddRemoveInPlaylist {
        playlist_id: usize,
    },
    CreatePlaylist {
        playlist_name: String,
    },
    SwitchVisibility {
        playlist_id: usize,
    },
    Follow,
    ShowPlaylists,

    // Listings
    ShowPreferredSongs,
    GetTop5Songs,
    GetTop5Playlists,
    GetTop5Albums,
    GetTop5Artists,

    // Accounts
    SwitchConnectionStatus,
    GetOnlineUsers,
    GetAllUsers,
    AddUser {
        #[serde(rename = "type", default)]
        role: UserRole,
        #[serde(default)]
        age: u32,
        #[serde(default)]
        city: String,
    },

    // Creator content
    AddAlbum {
        name: String,
        release_year: i32,
        #[serde(default)]
        description: String,
        songs: Vec<Song>,
    },
    ShowAlbums,
    AddEvent {
        name: String,
        #[serde(default)]
        description: String,
        date: String,
    },
    AddMerch {
        name: String,
        #[serde(default)]
        description: String,
        price: f64,
    },
    AddPodcast {
        name: String,
        episodes: Vec<Episode>,
    },
    ShowPodcasts,
    AddAnnouncement {
        name: String,
        #[serde(default)]
        description: String,
    },

    // Pages
    PrintCurrentPage,
    ChangePage {
        next_page: String,
    },
    PreviousPage,
    NextPage,

    // Monetization
    BuyPremium,
    CancelPremium,
    AdBreak {
        #[serde(default)]
        price: Option<f64>,
    },
    BuyMerch {
        name: String,
    },
    SeeMerch,
    Wrapped,
    EndProgram,
}

impl Command {
    /// Command name as it appears in input and output records
    pub fn name(&self) -> &'static str {
        match self {
            Command::Search { .. } => "search",
            Command::Select { .. } => "select",
            Command::Load => "load",
            Command::PlayPause => "playPause",
            Command::Repeat => "repeat",
            Command::Shuffle { .. } => "shuffle",
            Command::Forward => "forward",
            Command::Backward => "backward",
            Command::Like => "like",
            Command::Next => "next",
            Command::Prev => "prev",
            Command::Status => "status",
            Command::AddRemoveInPlaylist { .. } => "addRemoveInPlaylist",
            Command::CreatePlaylist { .. } => "createPlaylist",
            Command::SwitchVisibility { .. } => "switchVisibility",
            Command::Follow => "follow",
            Command::ShowPlaylists => "showPlaylists",
            Command::ShowPreferredSongs => "showPreferredSongs",
            Command::GetTop5Songs => "getTop5Songs",
            Command::GetTop5Playlists => "getTop5Playlists",
            Command::GetTop5Albums => "getTop5Albums",
            Command::GetTop5Artists => "getTop5Artists",
            Command::SwitchConnectionStatus => "switchConnectionStatus",
            Command::GetOnlineUsers => "getOnlineUsers",
            Command::GetAllUsers => "getAllUsers",
            Command::AddUser { .. } => "addUser",
            Command::AddAlbum { .. } => "addAlbum",
            Command::ShowAlbums => "showAlbums",
            Command::AddEvent { .. } => "addEvent",
            Command::AddMerch { .. } => "addMerch",
            Command::AddPodcast { .. } => "addPodcast",
            Command::ShowPodcasts => "showPodcasts",
            Command::AddAnnouncement { .. } => "addAnnouncement",
            Command::PrintCurrentPage => "printCurrentPage",
            Command::ChangePage { .. } => "changePage",
            Command::PreviousPage => "previousPage",
            Command::NextPage => "nextPage",
            Command::BuyPremium => "buyPremium",
            Command::CancelPremium => "cancelPremium",
            Command::AdBreak { .. } => "adBreak",
            Command::BuyMerch { .. } => "buyMerch",
            Command::SeeMerch => "seeMerch",
            Command::Wrapped => "wrapped",
            Command::EndProgram => "endProgram",
        }
    }
}
