//! Registered accounts
//!
//! Accounts are kept per role in registration order (the order `getAllUsers`
//! reports them in); a name index resolves any username to its role.

use std::collections::HashMap;
use std::sync::Arc;
use wave_core::{Announcement, Event, Merch, PlaylistKey, Song, UserRecord, UserRole, WaveError};
use wave_playback::{PlaybackSession, SessionConfig};

use crate::error::{EngineError, Result};
use crate::navigation::NavigationStack;
use crate::search::SearchState;

/// A normal user: listens, browses and builds playlists
#[derive(Debug, Clone)]
pub struct Listener {
    /// Unique username
    pub username: String,
    /// Age in years
    pub age: u32,
    /// City of residence
    pub city: String,

    /// Subscribed to premium
    pub premium: bool,
    /// Connected; offline listeners' clocks are frozen
    pub online: bool,

    /// Player
    pub session: PlaybackSession,
    /// Page history
    pub pages: NavigationStack,
    /// Search results and selection
    pub search: SearchState,

    /// Liked songs in like order
    pub liked: Vec<Arc<Song>>,
    /// Followed playlists in follow order
    pub following: Vec<PlaylistKey>,
    /// Names of bought merch in purchase order
    pub merch: Vec<String>,
}

impl Listener {
    fn new(record: UserRecord, session: SessionConfig) -> Self {
        Self {
            username: record.username,
            age: record.age,
            city: record.city,
            premium: false,
            online: true,
            session: PlaybackSession::new(session),
            pages: NavigationStack::new(),
            search: SearchState::default(),
            liked: Vec::new(),
            following: Vec::new(),
            merch: Vec::new(),
        }
    }
}

/// An artist account and the content shown on its page
#[derive(Debug, Clone)]
pub struct ArtistProfile {
    /// Unique username
    pub username: String,
    /// Age in years
    pub age: u32,
    /// City of residence
    pub city: String,
    /// Announced events
    pub events: Vec<Event>,
    /// Merchandise on sale
    pub merch: Vec<Merch>,
}

/// A host account and its announcements
#[derive(Debug, Clone)]
pub struct HostProfile {
    /// Unique username
    pub username: String,
    /// Age in years
    pub age: u32,
    /// City of residence
    pub city: String,
    /// Announcements in posting order
    pub announcements: Vec<Announcement>,
}

/// Every registered account
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    listeners: Vec<Listener>,
    artists: Vec<ArtistProfile>,
    hosts: Vec<HostProfile>,
    index: HashMap<String, (UserRole, usize)>,
}

impl UserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account
    pub fn add(&mut self, record: UserRecord, session: SessionConfig) -> Result<UserRole> {
        if self.index.contains_key(&record.username) {
            return Err(EngineError::UsernameTaken(record.username));
        }

        let role = record.role;
        let slot = match role {
            UserRole::Listener => {
                self.listeners.push(Listener::new(record.clone(), session));
                self.listeners.len() - 1
            }
            UserRole::Artist => {
                self.artists.push(ArtistProfile {
                    username: record.username.clone(),
                    age: record.age,
                    city: record.city.clone(),
                    events: Vec::new(),
                    merch: Vec::new(),
                });
                self.artists.len() - 1
            }
            UserRole::Host => {
                self.hosts.push(HostProfile {
                    username: record.username.clone(),
                    age: record.age,
                    city: record.city.clone(),
                    announcements: Vec::new(),
                });
                self.hosts.len() - 1
            }
        };
        self.index.insert(record.username, (role, slot));
        Ok(role)
    }

    /// Role of `username`, if registered
    pub fn role(&self, username: &str) -> Option<UserRole> {
        self.index.get(username).map(|&(role, _)| role)
    }

    fn slot(&self, username: &str, expected: UserRole) -> Result<usize> {
        match self.index.get(username) {
            None => Err(WaveError::not_found(username).into()),
            Some(&(role, slot)) if role == expected => Ok(slot),
            Some(_) => Err(WaveError::wrong_role(username, expected).into()),
        }
    }

    /// Listener named `username`
    pub fn listener(&self, username: &str) -> Result<&Listener> {
        let slot = self.slot(username, UserRole::Listener)?;
        Ok(&self.listeners[slot])
    }

    /// Mutable listener named `username`
    pub fn listener_mut(&mut self, username: &str) -> Result<&mut Listener> {
        let slot = self.slot(username, UserRole::Listener)?;
        Ok(&mut self.listeners[slot])
    }

    /// Listener named `username`, rejected while offline
    pub fn online_listener_mut(&mut self, username: &str) -> Result<&mut Listener> {
        let listener = self.listener_mut(username)?;
        if listener.online {
            Ok(listener)
        } else {
            Err(EngineError::Offline(listener.username.clone()))
        }
    }

    /// Artist named `username`
    pub fn artist(&self, username: &str) -> Result<&ArtistProfile> {
        let slot = self.slot(username, UserRole::Artist)?;
        Ok(&self.artists[slot])
    }

    /// Mutable artist named `username`
    pub fn artist_mut(&mut self, username: &str) -> Result<&mut ArtistProfile> {
        let slot = self.slot(username, UserRole::Artist)?;
        Ok(&mut self.artists[slot])
    }

    /// Host named `username`
    pub fn host(&self, username: &str) -> Result<&HostProfile> {
        let slot = self.slot(username, UserRole::Host)?;
        Ok(&self.hosts[slot])
    }

    /// Mutable host named `username`
    pub fn host_mut(&mut self, username: &str) -> Result<&mut HostProfile> {
        let slot = self.slot(username, UserRole::Host)?;
        Ok(&mut self.hosts[slot])
    }

    /// Listeners in registration order
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Mutable listeners in registration order
    pub fn listeners_mut(&mut self) -> impl Iterator<Item = &mut Listener> {
        self.listeners.iter_mut()
    }

    /// Artists in registration order
    pub fn artists(&self) -> &[ArtistProfile] {
        &self.artists
    }

    /// Hosts in registration order
    pub fn hosts(&self) -> &[HostProfile] {
        &self.hosts
    }

    /// Every username: listeners, then artists, then hosts
    pub fn all_usernames(&self) -> Vec<&str> {
        self.listeners
            .iter()
            .map(|l| l.username.as_str())
            .chain(self.artists.iter().map(|a| a.username.as_str()))
            .chain(self.hosts.iter().map(|h| h.username.as_str()))
            .collect()
    }
}
