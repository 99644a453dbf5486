//! Player commands

use wave_playback::{PlaybackSource, Timestamp};

use crate::error::{EngineError, Result};
use crate::output::Reply;
use crate::world::WorldState;

/// Pause when playing, resume when paused
pub fn play_pause(world: &mut WorldState, user: &str, at: Timestamp) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    let paused = listener
        .session
        .toggle_pause(at)
        .map_err(|err| EngineError::playback(err, "attempting to pause or resume playback"))?;

    Ok(Reply::message(if paused {
        "Playback paused successfully."
    } else {
        "Playback resumed successfully."
    }))
}

/// Advance the repeat mode
pub fn repeat(world: &mut WorldState, user: &str) -> Result<Reply> {
    let session = &mut world.users.online_listener_mut(user)?.session;
    let mode = session
        .cycle_repeat()
        .map_err(|err| EngineError::playback(err, "setting the repeat status"))?;
    let collection = session
        .active_state()
        .is_some_and(|state| state.source().is_collection());

    Ok(Reply::message(format!(
        "Repeat mode changed to {}.",
        mode.label(collection).to_lowercase()
    )))
}

/// Enable or disable shuffle
pub fn shuffle(world: &mut WorldState, user: &str, seed: u64) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    let enabled = listener
        .session
        .toggle_shuffle(seed)
        .map_err(|err| EngineError::playback(err, "using the shuffle function"))?;

    Ok(Reply::message(if enabled {
        "Shuffle function activated successfully."
    } else {
        "Shuffle function deactivated successfully."
    }))
}

fn require_podcast(world: &mut WorldState, user: &str, action: &'static str) -> Result<()> {
    let listener = world.users.online_listener_mut(user)?;
    let state = listener
        .session
        .active_state()
        .ok_or(EngineError::NothingLoaded { action })?;
    match state.source() {
        PlaybackSource::Podcast(_) => Ok(()),
        _ => Err(EngineError::NotPodcast),
    }
}

/// Skip ahead inside the current episode
pub fn forward(world: &mut WorldState, user: &str) -> Result<Reply> {
    const ACTION: &str = "attempting to forward";
    require_podcast(world, user, ACTION)?;
    world
        .users
        .listener_mut(user)?
        .session
        .skip_forward()
        .map_err(|err| EngineError::playback(err, ACTION))?;
    Ok(Reply::message("Skipped forward successfully."))
}

/// Skip back inside the current episode
pub fn backward(world: &mut WorldState, user: &str) -> Result<Reply> {
    const ACTION: &str = "rewinding";
    require_podcast(world, user, ACTION)?;
    world
        .users
        .listener_mut(user)?
        .session
        .skip_backward()
        .map_err(|err| EngineError::playback(err, ACTION))?;
    Ok(Reply::message("Rewound successfully."))
}

/// Move to the following track
pub fn next(world: &mut WorldState, user: &str) -> Result<Reply> {
    const ACTION: &str = "skipping to the next track";
    let listener = world.users.online_listener_mut(user)?;
    let track = listener
        .session
        .next()
        .map_err(|err| EngineError::playback(err, ACTION))?
        .ok_or(EngineError::NothingLoaded { action: ACTION })?;

    Ok(Reply::message(format!(
        "Skipped to next track successfully. The current track is {}.",
        track.name()
    )))
}

/// Restart the current track or go back one
pub fn prev(world: &mut WorldState, user: &str) -> Result<Reply> {
    const ACTION: &str = "returning to the previous track";
    let listener = world.users.online_listener_mut(user)?;
    let track = listener
        .session
        .previous()
        .map_err(|err| EngineError::playback(err, ACTION))?
        .ok_or(EngineError::NothingLoaded { action: ACTION })?;

    Ok(Reply::message(format!(
        "Returned to previous track successfully. The current track is {}.",
        track.name()
    )))
}

/// Player snapshot
pub fn status(world: &mut WorldState, user: &str) -> Result<Reply> {
    let status = world.users.listener(user)?.session.player_status();
    Ok(Reply::Stats(
        serde_json::to_value(status).unwrap_or(serde_json::Value::Null),
    ))
}

/// Like or unlike the song playing
pub fn like(world: &mut WorldState, user: &str) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    let track = listener
        .session
        .current_track()
        .ok_or(EngineError::NothingLoaded {
            action: "liking or unliking",
        })?;
    let song = track.as_song().ok_or(EngineError::NotSong)?;
    let key = song.key();
    let likes = world.likes.entry(key.clone()).or_default();

    if let Some(index) = listener.liked.iter().position(|liked| liked.key() == key) {
        listener.liked.remove(index);
        *likes = likes.saturating_sub(1);
        Ok(Reply::message("Unlike registered successfully."))
    } else {
        listener.liked.push(song.clone());
        *likes += 1;
        Ok(Reply::message("Like registered successfully."))
    }
}
