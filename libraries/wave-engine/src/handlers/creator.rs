//! Artist and host content commands

use serde::Serialize;
use wave_core::{Album, Announcement, Episode, Event, Merch, Podcast, Song};

use crate::error::{EngineError, Result};
use crate::output::Reply;
use crate::world::WorldState;

/// Publish an album; its songs join the catalog
pub fn add_album(
    world: &mut WorldState,
    user: &str,
    name: &str,
    release_year: i32,
    description: &str,
    songs: &[Song],
) -> Result<Reply> {
    world.users.artist(user)?;
    world.catalog.add_album(Album::new(
        name,
        user,
        release_year,
        description,
        songs.to_vec(),
    ))?;
    Ok(Reply::message(format!(
        "{} has added new album successfully.",
        user
    )))
}

#[derive(Serialize)]
struct Listing<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    songs: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    episodes: Option<Vec<&'a str>>,
}

/// The artist's albums with their songs
pub fn show_albums(world: &mut WorldState, user: &str) -> Result<Reply> {
    world.users.artist(user)?;
    let albums: Vec<Listing<'_>> = world
        .catalog
        .albums_by(user)
        .map(|album| Listing {
            name: &album.name,
            songs: Some(album.songs.iter().map(|song| song.name.as_str()).collect()),
            episodes: None,
        })
        .collect();
    Ok(Reply::result(albums))
}

/// Announce an event on the artist page
pub fn add_event(
    world: &mut WorldState,
    user: &str,
    name: &str,
    description: &str,
    date: &str,
) -> Result<Reply> {
    let artist = world.users.artist_mut(user)?;
    if artist.events.iter().any(|event| event.name == name) {
        return Err(EngineError::DuplicateEvent(user.to_string()));
    }
    let event = Event::parse(name, description, date)
        .ok_or_else(|| EngineError::InvalidEventDate(user.to_string()))?;

    artist.events.push(event);
    Ok(Reply::message(format!(
        "{} has added new event successfully.",
        user
    )))
}

/// Put merchandise on sale
pub fn add_merch(
    world: &mut WorldState,
    user: &str,
    name: &str,
    description: &str,
    price: f64,
) -> Result<Reply> {
    let artist = world.users.artist_mut(user)?;
    if artist.merch.iter().any(|merch| merch.name == name) {
        return Err(EngineError::DuplicateMerch(user.to_string()));
    }
    if price < 0.0 {
        return Err(EngineError::NegativePrice);
    }

    artist.merch.push(Merch {
        name: name.to_string(),
        description: description.to_string(),
        price,
    });
    Ok(Reply::message(format!(
        "{} has added new merchandise successfully.",
        user
    )))
}

/// Publish a podcast
pub fn add_podcast(
    world: &mut WorldState,
    user: &str,
    name: &str,
    episodes: &[Episode],
) -> Result<Reply> {
    world.users.host(user)?;
    world
        .catalog
        .add_podcast(Podcast::new(name, user, episodes.to_vec()))?;
    Ok(Reply::message(format!(
        "{} has added new podcast successfully.",
        user
    )))
}

/// The host's podcasts with their episodes
pub fn show_podcasts(world: &mut WorldState, user: &str) -> Result<Reply> {
    world.users.host(user)?;
    let podcasts: Vec<Listing<'_>> = world
        .catalog
        .podcasts_by(user)
        .map(|podcast| Listing {
            name: &podcast.name,
            songs: None,
            episodes: Some(
                podcast
                    .episodes
                    .iter()
                    .map(|episode| episode.name.as_str())
                    .collect(),
            ),
        })
        .collect();
    Ok(Reply::result(podcasts))
}

/// Post an announcement on the host page
pub fn add_announcement(
    world: &mut WorldState,
    user: &str,
    name: &str,
    description: &str,
) -> Result<Reply> {
    let host = world.users.host_mut(user)?;
    if host.announcements.iter().any(|a| a.name == name) {
        return Err(EngineError::DuplicateAnnouncement(user.to_string()));
    }

    host.announcements.push(Announcement {
        name: name.to_string(),
        description: description.to_string(),
    });
    Ok(Reply::message(format!(
        "{} has successfully added new announcement.",
        user
    )))
}
