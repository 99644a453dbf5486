//! Playlist commands

use serde::Serialize;
use wave_playback::{PlaybackSource, Timestamp};

use crate::error::{EngineError, Result};
use crate::output::Reply;
use crate::playlists::{FollowChange, Visibility};
use crate::search::SearchHit;
use crate::world::WorldState;

/// Add the playing song to a playlist, or remove it if already there
pub fn add_remove_in_playlist(world: &mut WorldState, user: &str, playlist_id: usize) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    let state = listener
        .session
        .active_state()
        .ok_or(EngineError::NothingLoaded {
            action: "adding to or removing from the playlist",
        })?;

    if !matches!(
        state.source(),
        PlaybackSource::Song(_) | PlaybackSource::Album(_)
    ) {
        return Err(EngineError::NotSong);
    }
    let song = state
        .current_track()
        .and_then(|track| track.as_song().cloned())
        .ok_or(EngineError::NotSong)?;

    if world.playlists.toggle_song(user, playlist_id, song)? {
        Ok(Reply::message("Successfully added to playlist."))
    } else {
        Ok(Reply::message("Successfully removed from playlist."))
    }
}

/// Create an empty public playlist
pub fn create_playlist(world: &mut WorldState, user: &str, at: Timestamp, name: &str) -> Result<Reply> {
    world.users.online_listener_mut(user)?;
    world.playlists.create(user, name, at)?;
    Ok(Reply::message("Playlist created successfully."))
}

/// Flip a playlist between public and private
pub fn switch_visibility(world: &mut WorldState, user: &str, playlist_id: usize) -> Result<Reply> {
    world.users.online_listener_mut(user)?;
    let visibility = world.playlists.switch_visibility(user, playlist_id)?;
    let label = match visibility {
        Visibility::Public => "public",
        Visibility::Private => "private",
    };
    Ok(Reply::message(format!(
        "Visibility status updated successfully to {}.",
        label
    )))
}

/// Follow or unfollow the selected playlist
pub fn follow(world: &mut WorldState, user: &str) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    let key = match &listener.search.selection {
        None => return Err(EngineError::NothingSelectedToFollow),
        Some(SearchHit::Playlist(key)) => key.clone(),
        Some(_) => return Err(EngineError::NotPlaylist),
    };

    match world
        .playlists
        .toggle_follow(user, &mut listener.following, &key)?
    {
        FollowChange::Followed => Ok(Reply::message("Playlist followed successfully.")),
        FollowChange::Unfollowed => Ok(Reply::message("Playlist unfollowed successfully.")),
        FollowChange::Refused => Ok(Reply::Silent),
    }
}

#[derive(Serialize)]
struct PlaylistSummary<'a> {
    name: &'a str,
    songs: Vec<&'a str>,
    visibility: Visibility,
    followers: u32,
}

/// The user's playlists in creation order
pub fn show_playlists(world: &mut WorldState, user: &str) -> Result<Reply> {
    world.users.listener(user)?;
    let summaries: Vec<PlaylistSummary<'_>> = world
        .playlists
        .owned_by(user)
        .map(|playlist| PlaylistSummary {
            name: &playlist.key.name,
            songs: playlist.songs.iter().map(|song| song.name.as_str()).collect(),
            visibility: playlist.visibility,
            followers: playlist.followers,
        })
        .collect();
    Ok(Reply::result(summaries))
}
