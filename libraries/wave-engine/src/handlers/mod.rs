//! Command handlers
//!
//! One stateless function per command: it receives the world, the issuing
//! user and the command timestamp (sessions are already settled to it) and
//! returns a reply or a rejection.

pub mod creator;
pub mod monetization;
pub mod pages;
pub mod player;
pub mod playlist;
pub mod search;
pub mod stats;
pub mod users;

use wave_playback::Timestamp;

use crate::command::Command;
use crate::error::Result;
use crate::output::Reply;
use crate::world::WorldState;

/// Route a command to its handler
pub fn dispatch(
    world: &mut WorldState,
    user: &str,
    at: Timestamp,
    command: &Command,
) -> Result<Reply> {
    match command {
        Command::Search { kind, filters } => search::search(world, user, at, *kind, filters),
        Command::Select { item_number } => search::select(world, user, *item_number),
        Command::Load => search::load(world, user, at),

        Command::PlayPause => player::play_pause(world, user, at),
        Command::Repeat => player::repeat(world, user),
        Command::Shuffle { seed } => player::shuffle(world, user, *seed),
        Command::Forward => player::forward(world, user),
        Command::Backward => player::backward(world, user),
        Command::Like => player::like(world, user),
        Command::Next => player::next(world, user),
        Command::Prev => player::prev(world, user),
        Command::Status => player::status(world, user),

        Command::AddRemoveInPlaylist { playlist_id } => {
            playlist::add_remove_in_playlist(world, user, *playlist_id)
        }
        Command::CreatePlaylist { playlist_name } => {
            playlist::create_playlist(world, user, at, playlist_name)
        }
        Command::SwitchVisibility { playlist_id } => {
            playlist::switch_visibility(world, user, *playlist_id)
        }
        Command::Follow => playlist::follow(world, user),
        Command::ShowPlaylists => playlist::show_playlists(world, user),

        Command::ShowPreferredSongs => stats::show_preferred_songs(world, user),
        Command::GetTop5Songs => Ok(stats::top_songs(world)),
        Command::GetTop5Playlists => Ok(stats::top_playlists(world)),
        Command::GetTop5Albums => Ok(stats::top_albums(world)),
        Command::GetTop5Artists => Ok(stats::top_artists(world)),
        Command::Wrapped => stats::wrapped(world, user),

        Command::SwitchConnectionStatus => users::switch_connection_status(world, user),
        Command::GetOnlineUsers => Ok(users::online_users(world)),
        Command::GetAllUsers => Ok(users::all_users(world)),
        Command::AddUser { role, age, city } => users::add_user(world, user, *role, *age, city),

        Command::AddAlbum {
            name,
            release_year,
            description,
            songs,
        } => creator::add_album(world, user, name, *release_year, description, songs),
        Command::ShowAlbums => creator::show_albums(world, user),
        Command::AddEvent {
            name,
            description,
            date,
        } => creator::add_event(world, user, name, description, date),
        Command::AddMerch {
            name,
            description,
            price,
        } => creator::add_merch(world, user, name, description, *price),
        Command::AddPodcast { name, episodes } => creator::add_podcast(world, user, name, episodes),
        Command::ShowPodcasts => creator::show_podcasts(world, user),
        Command::AddAnnouncement { name, description } => {
            creator::add_announcement(world, user, name, description)
        }

        Command::PrintCurrentPage => pages::print_current_page(world, user),
        Command::ChangePage { next_page } => pages::change_page(world, user, next_page),
        Command::PreviousPage => pages::previous_page(world, user),
        Command::NextPage => pages::next_page(world, user),

        Command::BuyPremium => monetization::buy_premium(world, user),
        Command::CancelPremium => monetization::cancel_premium(world, user),
        Command::AdBreak { price } => monetization::ad_break(world, user, *price),
        Command::BuyMerch { name } => monetization::buy_merch(world, user, name),
        Command::SeeMerch => monetization::see_merch(world, user),
        Command::EndProgram => Ok(monetization::end_program(world)),
    }
}
