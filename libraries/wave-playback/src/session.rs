//! Playback session - the time-advance engine
//!
//! A session never runs a clock of its own. Every command carries a
//! timestamp and the session is settled to it with [`PlaybackSession::advance_to`]
//! before the command acts: the elapsed seconds are consumed against the
//! current track, crossing track boundaries according to the repeat and
//! shuffle settings. Each track played to its end is reported back so the
//! caller can attribute listens.

use std::collections::HashMap;
use tracing::{debug, trace};
use wave_core::Track;

use crate::{
    error::{PlaybackError, Result},
    shuffle::Shuffle,
    source::PlaybackSource,
    types::{PlayerStatus, RepeatMode, SessionConfig, SessionStatus, ShufflePolicy, Timestamp},
};

/// Loaded source and the player's position inside it
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    source: PlaybackSource,

    /// Play position in the sequence (index into the shuffle order when shuffled)
    cursor: usize,

    /// Seconds into the current track; always below its duration
    position: u32,

    paused: bool,
    shuffle: Option<Shuffle>,
    repeat: RepeatMode,

    /// Source played out or was ejected
    ended: bool,
}

impl PlaybackState {
    fn new(source: PlaybackSource) -> Self {
        Self {
            source,
            cursor: 0,
            position: 0,
            paused: false,
            shuffle: None,
            repeat: RepeatMode::None,
            ended: false,
        }
    }

    /// Loaded source
    pub fn source(&self) -> &PlaybackSource {
        &self.source
    }

    /// Play position in the sequence
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Seconds into the current track
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Whether the clock is stopped
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the source played out
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Shuffle state, present iff shuffle is enabled
    pub fn shuffle(&self) -> Option<&Shuffle> {
        self.shuffle.as_ref()
    }

    /// Index into the source of the track under the cursor
    pub fn source_index(&self) -> usize {
        self.shuffle
            .as_ref()
            .map_or(self.cursor, |shuffle| shuffle.source_index(self.cursor))
    }

    /// Track under the cursor.
    ///
    /// After the source played out this is the last track that was playing.
    pub fn current_track(&self) -> Option<Track> {
        self.source.track(self.source_index())
    }

    fn finish(&mut self) {
        self.ended = true;
        self.paused = true;
        self.position = 0;
    }

    /// Move the cursor past the current track.
    ///
    /// Returns `false` when the sequence is exhausted and the source stopped.
    fn step(&mut self, policy: ShufflePolicy) -> bool {
        if self.cursor + 1 < self.source.len() {
            self.cursor += 1;
            return true;
        }

        match self.repeat {
            RepeatMode::RepeatAll => {
                self.cursor = 0;
                if policy == ShufflePolicy::ReshuffleEachLoop {
                    if let Some(shuffle) = self.shuffle.as_mut() {
                        shuffle.reshuffle();
                    }
                }
                true
            }
            RepeatMode::RepeatOnce => {
                self.cursor = 0;
                self.repeat = RepeatMode::None;
                true
            }
            RepeatMode::None | RepeatMode::RepeatCurrent => {
                self.finish();
                false
            }
        }
    }

    /// Consume `budget` seconds of playing time, returning completed tracks.
    fn consume(&mut self, mut budget: u64, policy: ShufflePolicy) -> Vec<Track> {
        let mut completed = Vec::new();
        // Consecutive zero-length tracks; more than a full pass of them can never consume time
        let mut idle = 0usize;

        while !self.ended {
            let Some(track) = self.current_track() else {
                self.finish();
                break;
            };

            let duration = u64::from(track.duration());
            let remaining = duration.saturating_sub(u64::from(self.position));
            if budget < remaining {
                // budget < remaining <= u32::MAX
                self.position += budget as u32;
                break;
            }

            budget -= remaining;
            self.position = 0;

            if self.repeat == RepeatMode::RepeatCurrent {
                completed.push(track.clone());
                if duration > 0 {
                    let laps = budget / duration;
                    completed.extend(std::iter::repeat(track).take(laps as usize));
                    self.position = (budget % duration) as u32;
                }
                break;
            }

            completed.push(track);

            if remaining == 0 {
                idle += 1;
                if idle > self.source.len() {
                    self.finish();
                    break;
                }
            } else {
                idle = 0;
            }

            if !self.step(policy) {
                break;
            }
        }

        completed
    }
}

/// Where a listener left a podcast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bookmark {
    cursor: usize,
    position: u32,
}

/// Per-user playback state machine
///
/// States: Empty -> Playing (load), Playing <-> Paused (pause/resume),
/// Playing -> StoppedAtEnd (source played out), StoppedAtEnd -> Playing
/// (load only).
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    config: SessionConfig,
    state: Option<PlaybackState>,
    last_updated: Timestamp,

    /// Podcast name -> resume point
    bookmarks: HashMap<String, Bookmark>,
}

impl PlaybackSession {
    /// Create an empty session
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: None,
            last_updated: 0,
            bookmarks: HashMap::new(),
        }
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Lifecycle state
    pub fn status(&self) -> SessionStatus {
        match &self.state {
            None => SessionStatus::Empty,
            Some(state) if state.ended => SessionStatus::StoppedAtEnd,
            Some(state) if state.paused => SessionStatus::Paused,
            Some(_) => SessionStatus::Playing,
        }
    }

    /// Timestamp the session was last settled to
    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    /// Last loaded state, even if it already played out
    pub fn state(&self) -> Option<&PlaybackState> {
        self.state.as_ref()
    }

    /// Loaded state that has not played out yet
    pub fn active_state(&self) -> Option<&PlaybackState> {
        self.state.as_ref().filter(|state| !state.ended)
    }

    fn active_state_mut(&mut self) -> Result<&mut PlaybackState> {
        self.state
            .as_mut()
            .filter(|state| !state.ended)
            .ok_or(PlaybackError::NothingLoaded)
    }

    /// Last loaded source, even if it already played out
    pub fn last_source(&self) -> Option<&PlaybackSource> {
        self.state.as_ref().map(PlaybackState::source)
    }

    /// Whether a source is loaded and has not played out
    pub fn is_active(&self) -> bool {
        self.active_state().is_some()
    }

    /// Whether the clock is running
    pub fn is_playing(&self) -> bool {
        self.status() == SessionStatus::Playing
    }

    /// Track currently playing (or paused on)
    pub fn current_track(&self) -> Option<Track> {
        self.active_state().and_then(PlaybackState::current_track)
    }

    /// Replace the loaded source.
    ///
    /// Shuffle and repeat reset to their defaults and playback starts at the
    /// first track, except for podcasts, which resume where they were left.
    pub fn load(&mut self, source: PlaybackSource, at: Timestamp) -> Result<()> {
        if source.is_empty() {
            return Err(PlaybackError::EmptySource);
        }

        self.bookmark_current();

        let mut state = PlaybackState::new(source);
        if let PlaybackSource::Podcast(podcast) = &state.source {
            if let Some(bookmark) = self.bookmarks.remove(&podcast.name) {
                state.cursor = bookmark.cursor.min(podcast.episodes.len() - 1);
                state.position = bookmark.position;
            }
        }

        debug!(source = state.source.name(), at, "Loaded source");
        self.state = Some(state);
        self.last_updated = self.last_updated.max(at);
        Ok(())
    }

    /// Stop whatever is playing; the source stays as the last loaded one.
    pub fn eject(&mut self, at: Timestamp) {
        self.bookmark_current();
        if let Some(state) = self.state.as_mut() {
            state.finish();
        }
        self.last_updated = self.last_updated.max(at);
    }

    /// Settle the session to `at`, returning every track played to its end.
    ///
    /// Calling it again with the same timestamp is a no-op, and advancing in
    /// several steps ends in the same state as one jump.
    pub fn advance_to(&mut self, at: Timestamp) -> Vec<Track> {
        if at <= self.last_updated {
            return Vec::new();
        }

        let delta = (at - self.last_updated) as u64;
        self.last_updated = at;

        let policy = self.config.shuffle_policy;
        let Some(state) = self.state.as_mut() else {
            return Vec::new();
        };
        if state.paused || state.ended {
            return Vec::new();
        }

        let completed = state.consume(delta, policy);
        trace!(at, completed = completed.len(), "Advanced session");

        if state.ended {
            if let PlaybackSource::Podcast(podcast) = &state.source {
                self.bookmarks.remove(&podcast.name);
            }
        }

        completed
    }

    /// Move the clock to `at` without consuming time (offline users)
    pub fn rebase(&mut self, at: Timestamp) {
        self.last_updated = self.last_updated.max(at);
    }

    /// Stop the clock
    pub fn pause(&mut self) -> Result<()> {
        self.active_state_mut()?.paused = true;
        Ok(())
    }

    /// Restart the clock from `at`
    pub fn resume(&mut self, at: Timestamp) -> Result<()> {
        self.active_state_mut()?.paused = false;
        self.last_updated = self.last_updated.max(at);
        Ok(())
    }

    /// Pause when playing, resume when paused; returns the new paused flag
    pub fn toggle_pause(&mut self, at: Timestamp) -> Result<bool> {
        if self.active_state_mut()?.paused {
            self.resume(at)?;
            Ok(false)
        } else {
            self.pause()?;
            Ok(true)
        }
    }

    /// Set the repeat mode
    pub fn set_repeat(&mut self, mode: RepeatMode) -> Result<()> {
        self.active_state_mut()?.repeat = mode;
        Ok(())
    }

    /// Advance the repeat mode one step in its cycle
    pub fn cycle_repeat(&mut self) -> Result<RepeatMode> {
        let state = self.active_state_mut()?;
        state.repeat = state.repeat.cycle(state.source.is_collection());
        Ok(state.repeat)
    }

    /// Enable or disable shuffle; returns whether shuffle is now enabled.
    ///
    /// The current track stays current either way. Enabling reorders only
    /// the tracks after it, so the rest of the pass still plays each of them;
    /// disabling moves the cursor back to the track's place in source order.
    pub fn toggle_shuffle(&mut self, seed: u64) -> Result<bool> {
        let state = self.active_state_mut()?;
        if !state.source.is_collection() {
            return Err(PlaybackError::NotCollection);
        }

        let current = state.source_index();
        if state.shuffle.take().is_some() {
            state.cursor = current;
            return Ok(false);
        }

        let shuffle = Shuffle::from_cursor(state.source.len(), current, seed);
        state.cursor = shuffle.position_of(current);
        state.shuffle = Some(shuffle);
        Ok(true)
    }

    /// Jump forward by the configured skip, staying inside the current track
    pub fn skip_forward(&mut self) -> Result<()> {
        let skip = self.config.skip_seconds;
        let state = self.active_state_mut()?;
        let last_second = state
            .current_track()
            .map_or(0, |track| track.duration().saturating_sub(1));
        state.position = state.position.saturating_add(skip).min(last_second);
        Ok(())
    }

    /// Jump backward by the configured skip, stopping at the track start
    pub fn skip_backward(&mut self) -> Result<()> {
        let skip = self.config.skip_seconds;
        let state = self.active_state_mut()?;
        state.position = state.position.saturating_sub(skip);
        Ok(())
    }

    /// Move to the following track without counting the current one as
    /// listened. Returns `None` when the source ran out.
    pub fn next(&mut self) -> Result<Option<Track>> {
        let policy = self.config.shuffle_policy;
        let state = self.active_state_mut()?;
        state.position = 0;
        state.paused = false;

        if state.step(policy) {
            return Ok(state.current_track());
        }

        if let PlaybackSource::Podcast(podcast) = &state.source {
            let name = podcast.name.clone();
            self.bookmarks.remove(&name);
        }
        Ok(None)
    }

    /// Restart the current track, or step back one track when already at
    /// its start.
    pub fn previous(&mut self) -> Result<Option<Track>> {
        let state = self.active_state_mut()?;
        if state.position > 0 {
            state.position = 0;
        } else if state.cursor > 0 {
            state.cursor -= 1;
        }
        state.paused = false;
        Ok(state.current_track())
    }

    /// Snapshot for the `status` command
    pub fn player_status(&self) -> PlayerStatus {
        match self.active_state() {
            None => PlayerStatus {
                name: String::new(),
                remained_time: 0,
                repeat: RepeatMode::None.label(false).to_string(),
                shuffle: false,
                paused: true,
            },
            Some(state) => {
                let (name, duration) = state
                    .current_track()
                    .map(|track| (track.name().to_string(), track.duration()))
                    .unwrap_or_default();
                PlayerStatus {
                    name,
                    remained_time: duration.saturating_sub(state.position),
                    repeat: state
                        .repeat
                        .label(state.source.is_collection())
                        .to_string(),
                    shuffle: state.shuffle.is_some(),
                    paused: state.paused,
                }
            }
        }
    }

    fn bookmark_current(&mut self) {
        let Some(state) = self.state.as_ref().filter(|state| !state.ended) else {
            return;
        };
        if let PlaybackSource::Podcast(podcast) = &state.source {
            self.bookmarks.insert(
                podcast.name.clone(),
                Bookmark {
                    cursor: state.cursor,
                    position: state.position,
                },
            );
        }
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
