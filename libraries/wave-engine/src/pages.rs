//! Page rendering
//!
//! Pages are rendered on demand from live state: the listener's likes and
//! follows, and the current albums, merch, events, podcasts and
//! announcements of the artist or host behind the page.

use std::sync::Arc;
use wave_core::Song;

use crate::navigation::NavigationEntry;
use crate::users::Listener;
use crate::world::WorldState;

fn bracketed<I>(items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    format!("[{}]", items.into_iter().collect::<Vec<_>>().join(", "))
}

/// Render the page under the listener's navigation cursor
pub fn render_current(world: &WorldState, viewer: &Listener) -> String {
    render(world, viewer, viewer.pages.current())
}

/// Render `entry` as seen by `viewer`
pub fn render(world: &WorldState, viewer: &Listener, entry: &NavigationEntry) -> String {
    match entry {
        NavigationEntry::Home => home(world, viewer),
        NavigationEntry::LikedContent => liked_content(viewer),
        NavigationEntry::Artist(artist) => artist_page(world, artist),
        NavigationEntry::Host(host) => host_page(world, host),
    }
}

fn home(world: &WorldState, viewer: &Listener) -> String {
    let limit = world.config.top_limit;

    let mut liked: Vec<&Arc<Song>> = viewer.liked.iter().collect();
    liked.sort_by_key(|song| std::cmp::Reverse(world.like_count(song)));
    let songs = liked
        .into_iter()
        .take(limit)
        .map(|song| song.name.clone());

    let mut followed: Vec<(&str, u32)> = viewer
        .following
        .iter()
        .filter_map(|key| world.playlists.get(key))
        .map(|playlist| {
            let likes = playlist.songs.iter().map(|s| world.like_count(s)).sum();
            (playlist.key.name.as_str(), likes)
        })
        .collect();
    followed.sort_by_key(|&(_, likes)| std::cmp::Reverse(likes));
    let playlists = followed
        .into_iter()
        .take(limit)
        .map(|(name, _)| name.to_string());

    format!(
        "Liked songs:\n\t{}\n\nFollowed playlists:\n\t{}",
        bracketed(songs),
        bracketed(playlists)
    )
}

fn liked_content(viewer: &Listener) -> String {
    let songs = viewer
        .liked
        .iter()
        .map(|song| format!("{} - {}", song.name, song.artist));
    let playlists = viewer.following.iter().map(ToString::to_string);

    format!(
        "Liked songs:\n\t{}\n\nFollowed playlists:\n\t{}",
        bracketed(songs),
        bracketed(playlists)
    )
}

fn artist_page(world: &WorldState, artist: &str) -> String {
    let albums = world
        .catalog
        .albums_by(artist)
        .map(|album| album.name.clone());

    let (merch, events): (Vec<String>, Vec<String>) = match world.users.artist(artist) {
        Ok(profile) => (
            profile
                .merch
                .iter()
                .map(|m| format!("{} - {}:\n\t{}", m.name, m.price, m.description))
                .collect(),
            profile
                .events
                .iter()
                .map(|e| format!("{} - {}:\n\t{}", e.name, e.formatted_date(), e.description))
                .collect(),
        ),
        Err(_) => (Vec::new(), Vec::new()),
    };

    format!(
        "Albums:\n\t{}\n\nMerch:\n\t{}\n\nEvents:\n\t{}",
        bracketed(albums),
        bracketed(merch),
        bracketed(events)
    )
}

fn host_page(world: &WorldState, host: &str) -> String {
    let podcasts = world.catalog.podcasts_by(host).map(|podcast| {
        let episodes = podcast
            .episodes
            .iter()
            .map(|e| format!("{} - {}", e.name, e.description));
        format!("{}:\n\t{}\n", podcast.name, bracketed(episodes))
    });

    let announcements: Vec<String> = world
        .users
        .host(host)
        .map(|profile| {
            profile
                .announcements
                .iter()
                .map(|a| format!("{}:\n\t{}\n", a.name, a.description))
                .collect()
        })
        .unwrap_or_default();

    format!(
        "Podcasts:\n\t{}\n\nAnnouncements:\n\t{}",
        bracketed(podcasts),
        bracketed(announcements)
    )
}
