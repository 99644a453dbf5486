//! Listings and wrapped statistics

use std::cmp::Reverse;
use wave_core::{UserRole, WaveError};

use crate::error::{EngineError, Result};
use crate::output::Reply;
use crate::world::WorldState;

/// Names of the listener's liked songs
pub fn show_preferred_songs(world: &mut WorldState, user: &str) -> Result<Reply> {
    let listener = world.users.listener(user)?;
    let names: Vec<&str> = listener.liked.iter().map(|song| song.name.as_str()).collect();
    Ok(Reply::result(names))
}

/// Most liked songs; ties keep catalog order
pub fn top_songs(world: &WorldState) -> Reply {
    let mut songs: Vec<_> = world.catalog.songs().iter().collect();
    songs.sort_by_key(|song| Reverse(world.like_count(song)));
    let names: Vec<&str> = songs
        .into_iter()
        .take(world.config.top_limit)
        .map(|song| song.name.as_str())
        .collect();
    Reply::result(names)
}

/// Public playlists with the most followers
pub fn top_playlists(world: &WorldState) -> Reply {
    let names: Vec<&str> = world
        .playlists
        .top_by_followers(world.config.top_limit)
        .into_iter()
        .map(|playlist| playlist.key.name.as_str())
        .collect();
    Reply::result(names)
}

/// Albums with the most likes over their songs; ties by name
pub fn top_albums(world: &WorldState) -> Reply {
    let mut albums: Vec<(&str, u32)> = world
        .catalog
        .albums()
        .iter()
        .map(|album| {
            let likes = album.songs.iter().map(|song| world.like_count(song)).sum();
            (album.name.as_str(), likes)
        })
        .collect();
    albums.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let names: Vec<&str> = albums
        .into_iter()
        .take(world.config.top_limit)
        .map(|(name, _)| name)
        .collect();
    Reply::result(names)
}

/// Registered artists with the most likes over their songs; ties by name
pub fn top_artists(world: &WorldState) -> Reply {
    let mut artists: Vec<(&str, u32)> = world
        .users
        .artists()
        .iter()
        .map(|artist| {
            let likes = world
                .catalog
                .songs_by(&artist.username)
                .map(|song| world.like_count(song))
                .sum();
            (artist.username.as_str(), likes)
        })
        .collect();
    artists.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let names: Vec<&str> = artists
        .into_iter()
        .take(world.config.top_limit)
        .map(|(name, _)| name)
        .collect();
    Reply::result(names)
}

/// Wrapped report for any kind of user
pub fn wrapped(world: &mut WorldState, user: &str) -> Result<Reply> {
    let wrapped = &world.wrapped;
    let report = match world.users.role(user) {
        None => return Err(WaveError::not_found(user).into()),
        Some(UserRole::Listener) => wrapped.listener_report(user).map(Reply::result),
        Some(UserRole::Artist) => wrapped.artist_report(user).map(Reply::result),
        Some(UserRole::Host) => wrapped.host_report(user).map(Reply::result),
    };
    report.ok_or_else(|| EngineError::NoWrappedData(user.to_string()))
}
