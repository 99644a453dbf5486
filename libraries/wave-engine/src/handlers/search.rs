//! `search`, `select` and `load`

use wave_playback::{PlaybackSource, Timestamp};

use crate::error::{EngineError, Result};
use crate::navigation::NavigationEntry;
use crate::output::Reply;
use crate::playlists::Playlist;
use crate::search::{SearchFilters, SearchHit, SearchKind};
use crate::world::WorldState;

/// Run a search; whatever was playing stops
pub fn search(
    world: &mut WorldState,
    user: &str,
    at: Timestamp,
    kind: SearchKind,
    filters: &SearchFilters,
) -> Result<Reply> {
    world.users.online_listener_mut(user)?.session.eject(at);

    let limit = world.config.search_limit;
    let hits: Vec<SearchHit> = match kind {
        SearchKind::Song => world
            .catalog
            .songs()
            .iter()
            .filter(|song| filters.matches_song(song))
            .take(limit)
            .cloned()
            .map(SearchHit::Song)
            .collect(),
        SearchKind::Album => world
            .catalog
            .albums()
            .iter()
            .filter(|album| filters.matches_album(album))
            .take(limit)
            .cloned()
            .map(SearchHit::Album)
            .collect(),
        SearchKind::Podcast => world
            .catalog
            .podcasts()
            .iter()
            .filter(|podcast| filters.matches_podcast(podcast))
            .take(limit)
            .cloned()
            .map(SearchHit::Podcast)
            .collect(),
        SearchKind::Playlist => world
            .playlists
            .visible_to(user)
            .filter(|playlist| filters.matches_playlist(&playlist.key))
            .take(limit)
            .map(|playlist| SearchHit::Playlist(playlist.key.clone()))
            .collect(),
        SearchKind::Artist => world
            .users
            .artists()
            .iter()
            .filter(|artist| filters.matches_user(&artist.username))
            .take(limit)
            .map(|artist| SearchHit::Artist(artist.username.clone()))
            .collect(),
        SearchKind::Host => world
            .users
            .hosts()
            .iter()
            .filter(|host| filters.matches_user(&host.username))
            .take(limit)
            .map(|host| SearchHit::Host(host.username.clone()))
            .collect(),
    };

    let names: Vec<String> = hits.iter().map(|hit| hit.name().to_string()).collect();
    world.users.listener_mut(user)?.search.replace(hits);

    Ok(Reply::Search {
        message: format!("Search returned {} results", names.len()),
        results: names,
    })
}

/// Pick a search result; artists and hosts open their page right away
pub fn select(world: &mut WorldState, user: &str, item: usize) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    let hit = listener
        .search
        .select(item)
        .ok_or(EngineError::NoSearch)?
        .cloned()
        .ok_or(EngineError::SelectionOutOfRange)?;

    let page = match &hit {
        SearchHit::Artist(name) => Some(NavigationEntry::Artist(name.clone())),
        SearchHit::Host(name) => Some(NavigationEntry::Host(name.clone())),
        _ => None,
    };

    match page {
        Some(page) => {
            listener.search.selection = None;
            listener.pages.push(page);
            Ok(Reply::message(format!("Successfully selected {}'s page.", hit.name())))
        }
        None => Ok(Reply::message(format!("Successfully selected {}.", hit.name()))),
    }
}

/// Load the selected source
pub fn load(world: &mut WorldState, user: &str, at: Timestamp) -> Result<Reply> {
    let listener = world.users.online_listener_mut(user)?;
    let hit = listener
        .search
        .selection
        .take()
        .ok_or(EngineError::NothingSelected)?;

    let source = match hit {
        SearchHit::Song(song) => PlaybackSource::Song(song),
        SearchHit::Album(album) => PlaybackSource::Album(album),
        SearchHit::Podcast(podcast) => PlaybackSource::Podcast(podcast),
        SearchHit::Playlist(key) => world
            .playlists
            .get(&key)
            .map(Playlist::to_source)
            .ok_or(EngineError::PlaylistNotFound)?,
        SearchHit::Artist(_) | SearchHit::Host(_) => return Err(EngineError::NothingSelected),
    };

    listener
        .session
        .load(source, at)
        .map_err(|err| EngineError::playback(err, "attempting to load"))?;
    Ok(Reply::message("Playback loaded successfully."))
}
