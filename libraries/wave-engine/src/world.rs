//! Engine state
//!
//! `WorldState` owns everything a command can touch. Handlers receive it by
//! mutable reference; there is no other shared state.

use std::collections::HashMap;
use tracing::{trace, warn};
use wave_core::{AudioCatalog, Library, Song, SongKey, UserRecord, UserRole};
use wave_playback::Timestamp;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::monetization::{ListenRecord, MonetizationLedger};
use crate::playlists::PlaylistDirectory;
use crate::users::UserDirectory;
use crate::wrapped::WrappedAggregator;

/// Everything the engine knows
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Run configuration
    pub config: EngineConfig,
    /// Songs, albums and podcasts
    pub catalog: AudioCatalog,
    /// Accounts
    pub users: UserDirectory,
    /// Playlists
    pub playlists: PlaylistDirectory,
    /// Revenue attribution
    pub ledger: MonetizationLedger,
    /// Listening statistics
    pub wrapped: WrappedAggregator,
    /// Global like count per song
    pub likes: HashMap<SongKey, u32>,
}

impl WorldState {
    /// Build the initial state from a library snapshot
    pub fn new(config: EngineConfig, mut library: Library) -> Self {
        let accounts = std::mem::take(&mut library.users);
        let mut world = Self {
            catalog: AudioCatalog::from_library(library),
            users: UserDirectory::new(),
            playlists: PlaylistDirectory::new(),
            ledger: MonetizationLedger::new(&config),
            wrapped: WrappedAggregator::new(config.top_limit),
            likes: HashMap::new(),
            config,
        };

        for record in accounts {
            if let Err(err) = world.register(record) {
                warn!(error = %err, "Skipping library user");
            }
        }
        world
    }

    /// Register an account
    pub fn register(&mut self, record: UserRecord) -> Result<UserRole> {
        let username = record.username.clone();
        let role = self.users.add(record, self.config.session_config())?;
        if role == UserRole::Artist {
            self.ledger.register_artist(&username);
        }
        Ok(role)
    }

    /// Settle every listener's session to `at`.
    ///
    /// Listeners advance in registration order; every completed track is
    /// attributed to revenue and statistics on the way. Offline listeners
    /// skip the elapsed time instead.
    pub fn advance_all(&mut self, at: Timestamp) {
        for listener in self.users.listeners_mut() {
            if !listener.online {
                listener.session.rebase(at);
                continue;
            }

            for track in listener.session.advance_to(at) {
                trace!(user = %listener.username, track = track.name(), "Completed track");
                let listen = ListenRecord {
                    listener: listener.username.clone(),
                    track,
                    premium: listener.premium,
                };
                self.ledger.record(&listen);
                self.wrapped.record(&listen);
            }
        }
    }

    /// Global like count of `song`
    pub fn like_count(&self, song: &Song) -> u32 {
        self.likes.get(&song.key()).copied().unwrap_or(0)
    }
}
