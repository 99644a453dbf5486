//! Wave - Session Engine
//!
//! Replays a stream of timestamped user commands against a media library.
//!
//! This crate provides:
//! - `WorldState`: users, catalog, playlists, revenue and statistics
//! - Typed commands and one stateless handler per command
//! - Page navigation with live page rendering
//! - Premium/ad revenue attribution and the final artist ranking
//! - Wrapped (top-N) listening statistics
//!
//! # Example
//!
//! ```rust
//! use wave_core::{Library, Song, UserRecord, UserRole};
//! use wave_engine::{CommandEnvelope, Engine, EngineConfig};
//!
//! let library = Library {
//!     songs: vec![Song::new("Intro", "band", "Debut", "rock", 2021, 60)],
//!     podcasts: Vec::new(),
//!     users: vec![UserRecord {
//!         username: "alice".into(),
//!         age: 20,
//!         city: "Oslo".into(),
//!         role: UserRole::Listener,
//!     }],
//! };
//! let mut engine = Engine::new(EngineConfig::default(), library);
//!
//! let commands: Vec<CommandEnvelope> = serde_json::from_str(r#"[
//!     {"command": "search", "username": "alice", "timestamp": 1, "type": "song", "filters": {"name": "In"}},
//!     {"command": "select", "username": "alice", "timestamp": 2, "itemNumber": 1},
//!     {"command": "load", "username": "alice", "timestamp": 3}
//! ]"#).unwrap();
//!
//! let outputs = engine.run(commands);
//! assert_eq!(outputs[2].message.as_deref(), Some("Playback loaded successfully."));
//! assert_eq!(outputs.last().unwrap().command, "endProgram");
//! ```

pub mod command;
pub mod config;
mod engine;
pub mod error;
pub mod handlers;
pub mod monetization;
pub mod navigation;
pub mod output;
pub mod pages;
pub mod playlists;
pub mod search;
pub mod users;
pub mod world;
pub mod wrapped;

// Public exports
pub use command::{Command, CommandEnvelope};
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, Result};
pub use monetization::{ArtistRanking, ListenRecord, MonetizationLedger};
pub use navigation::{NavigationEntry, NavigationStack, PageKind};
pub use output::{CommandOutput, Reply};
pub use playlists::{Playlist, PlaylistDirectory, Visibility};
pub use world::WorldState;
pub use wrapped::WrappedAggregator;
