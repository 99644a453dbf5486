//! Integration tests for the session engine
//!
//! Each test replays a command stream against a small library and checks
//! the result records.

use serde_json::{json, Value};
use wave_core::Library;
use wave_engine::{CommandOutput, Engine, EngineConfig};

// ===== Test Helpers =====

fn library() -> Library {
    serde_json::from_value(json!({
        "songs": [
            {"name": "A", "duration": 10, "album": "Alpha", "genre": "pop", "releaseYear": 2020, "artist": "first"},
            {"name": "B", "duration": 10, "album": "Beta", "genre": "rock", "releaseYear": 1999, "artist": "second"},
            {"name": "Hey Jude", "duration": 200, "album": "Singles", "genre": "rock", "releaseYear": 1968, "artist": "beatles"},
            {"name": "Help", "duration": 150, "album": "Help!", "genre": "rock", "releaseYear": 1965, "artist": "beatles"}
        ],
        "podcasts": [
            {"name": "Talk", "owner": "host", "episodes": [
                {"name": "Ep1", "duration": 600, "description": "pilot"},
                {"name": "Ep2", "duration": 600, "description": "sequel"}
            ]}
        ],
        "users": [
            {"username": "alice", "age": 20, "city": "Cluj", "type": "user"},
            {"username": "bob", "age": 22, "city": "Iasi", "type": "user"}
        ]
    }))
    .unwrap()
}

struct Harness {
    engine: Engine,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: Engine::new(config, library()),
        }
    }

    fn send(&mut self, command: Value) -> CommandOutput {
        self.engine.execute(serde_json::from_value(command).unwrap())
    }

    fn message(&mut self, command: Value) -> String {
        self.send(command).message.unwrap_or_default()
    }

    fn load_song(&mut self, user: &str, name: &str, at: i64) {
        self.send(json!({"command": "search", "username": user, "timestamp": at,
                         "type": "song", "filters": {"name": name}}));
        self.send(json!({"command": "select", "username": user, "timestamp": at, "itemNumber": 1}));
        assert_eq!(
            self.message(json!({"command": "load", "username": user, "timestamp": at})),
            "Playback loaded successfully."
        );
    }
}

// ===== Playlists =====

#[test]
fn playlist_lifecycle() {
    let mut h = Harness::new();

    assert_eq!(
        h.message(json!({"command": "createPlaylist", "username": "alice", "timestamp": 1, "playlistName": "P1"})),
        "Playlist created successfully."
    );
    assert_eq!(
        h.message(json!({"command": "createPlaylist", "username": "alice", "timestamp": 2, "playlistName": "P1"})),
        "A playlist with the same name already exists."
    );

    h.load_song("alice", "Hey", 3);
    assert_eq!(
        h.message(json!({"command": "addRemoveInPlaylist", "username": "alice", "timestamp": 4, "playlistId": 1})),
        "Successfully added to playlist."
    );
    assert_eq!(
        h.message(json!({"command": "addRemoveInPlaylist", "username": "alice", "timestamp": 5, "playlistId": 1})),
        "Successfully removed from playlist."
    );
    assert_eq!(
        h.message(json!({"command": "addRemoveInPlaylist", "username": "alice", "timestamp": 6, "playlistId": 2})),
        "The specified playlist does not exist."
    );

    assert_eq!(
        h.message(json!({"command": "switchVisibility", "username": "alice", "timestamp": 7, "playlistId": 1})),
        "Visibility status updated successfully to private."
    );
    assert_eq!(
        h.message(json!({"command": "switchVisibility", "username": "alice", "timestamp": 8, "playlistId": 1})),
        "Visibility status updated successfully to public."
    );
    assert_eq!(
        h.message(json!({"command": "switchVisibility", "username": "alice", "timestamp": 9, "playlistId": 5})),
        "The specified playlist ID is too high."
    );

    h.send(json!({"command": "search", "username": "alice", "timestamp": 10,
                  "type": "playlist", "filters": {"name": "P"}}));
    h.send(json!({"command": "select", "username": "alice", "timestamp": 11, "itemNumber": 1}));
    assert_eq!(
        h.message(json!({"command": "follow", "username": "alice", "timestamp": 12})),
        "You cannot follow or unfollow your own playlist."
    );

    let output = h.send(json!({"command": "showPlaylists", "username": "alice", "timestamp": 13}));
    assert_eq!(
        output.result,
        Some(json!([{"name": "P1", "songs": [], "visibility": "public", "followers": 0}]))
    );
}

#[test]
fn follow_and_unfollow_restore_state() {
    let mut h = Harness::new();
    h.send(json!({"command": "createPlaylist", "username": "alice", "timestamp": 1, "playlistName": "Road"}));

    let search = json!({"command": "search", "username": "bob", "timestamp": 2,
                        "type": "playlist", "filters": {"owner": "alice"}});
    assert_eq!(h.send(search).results, Some(json!(["Road"])));
    h.send(json!({"command": "select", "username": "bob", "timestamp": 3, "itemNumber": 1}));

    assert_eq!(
        h.message(json!({"command": "follow", "username": "bob", "timestamp": 4})),
        "Playlist followed successfully."
    );
    let top = h.send(json!({"command": "getTop5Playlists", "timestamp": 5}));
    assert_eq!(top.result, Some(json!(["Road"])));
    assert_eq!(
        h.message(json!({"command": "follow", "username": "bob", "timestamp": 6})),
        "Playlist unfollowed successfully."
    );

    let output = h.send(json!({"command": "showPlaylists", "username": "alice", "timestamp": 7}));
    assert_eq!(output.result.unwrap()[0]["followers"], 0);
}

#[test]
fn private_playlists_are_hidden_and_cannot_be_followed() {
    let mut h = Harness::new();
    h.send(json!({"command": "createPlaylist", "username": "alice", "timestamp": 1, "playlistName": "Secret"}));
    h.send(json!({"command": "search", "username": "bob", "timestamp": 2,
                  "type": "playlist", "filters": {"name": "Sec"}}));
    h.send(json!({"command": "select", "username": "bob", "timestamp": 3, "itemNumber": 1}));
    h.send(json!({"command": "switchVisibility", "username": "alice", "timestamp": 4, "playlistId": 1}));

    let output = h.send(json!({"command": "follow", "username": "bob", "timestamp": 5}));
    assert_eq!(output.message, None);

    let output = h.send(json!({"command": "search", "username": "bob", "timestamp": 6,
                               "type": "playlist", "filters": {"name": "Sec"}}));
    assert_eq!(output.message.as_deref(), Some("Search returned 0 results"));
}

// ===== Player =====

#[test]
fn player_commands_require_a_source() {
    let mut h = Harness::new();
    assert_eq!(
        h.message(json!({"command": "load", "username": "alice", "timestamp": 1})),
        "Please select a source before attempting to load."
    );
    assert_eq!(
        h.message(json!({"command": "select", "username": "alice", "timestamp": 1, "itemNumber": 1})),
        "Please conduct a search before making a selection."
    );
    assert_eq!(
        h.message(json!({"command": "playPause", "username": "alice", "timestamp": 1})),
        "Please load a source before attempting to pause or resume playback."
    );
    assert_eq!(
        h.message(json!({"command": "like", "username": "alice", "timestamp": 1})),
        "Please load a source before liking or unliking."
    );
    assert_eq!(
        h.message(json!({"command": "next", "username": "alice", "timestamp": 1})),
        "Please load a source before skipping to the next track."
    );
}

#[test]
fn status_tracks_elapsed_time() {
    let mut h = Harness::new();
    h.load_song("alice", "Hey", 10);

    let status = h.send(json!({"command": "status", "username": "alice", "timestamp": 60}));
    assert_eq!(
        status.stats,
        Some(json!({"name": "Hey Jude", "remainedTime": 150, "repeat": "No Repeat",
                    "shuffle": false, "paused": false}))
    );

    assert_eq!(
        h.message(json!({"command": "playPause", "username": "alice", "timestamp": 70})),
        "Playback paused successfully."
    );
    assert_eq!(
        h.message(json!({"command": "playPause", "username": "alice", "timestamp": 500})),
        "Playback resumed successfully."
    );
    let status = h.send(json!({"command": "status", "username": "alice", "timestamp": 510}));
    assert_eq!(status.stats.unwrap()["remainedTime"], 130);

    assert_eq!(
        h.message(json!({"command": "repeat", "username": "alice", "timestamp": 511})),
        "Repeat mode changed to repeat once."
    );
    assert_eq!(
        h.message(json!({"command": "shuffle", "username": "alice", "timestamp": 512, "seed": 3})),
        "The loaded source is not a playlist or an album."
    );
    assert_eq!(
        h.message(json!({"command": "forward", "username": "alice", "timestamp": 513})),
        "The loaded source is not a podcast."
    );
}

#[test]
fn podcasts_skip_and_resume() {
    let mut h = Harness::new();
    h.send(json!({"command": "search", "username": "alice", "timestamp": 0,
                  "type": "podcast", "filters": {"name": "talk"}}));
    h.send(json!({"command": "select", "username": "alice", "timestamp": 0, "itemNumber": 1}));
    h.send(json!({"command": "load", "username": "alice", "timestamp": 0}));

    assert_eq!(
        h.message(json!({"command": "forward", "username": "alice", "timestamp": 10})),
        "Skipped forward successfully."
    );
    let status = h.send(json!({"command": "status", "username": "alice", "timestamp": 10}));
    assert_eq!(status.stats.unwrap()["remainedTime"], 500);

    assert_eq!(
        h.message(json!({"command": "backward", "username": "alice", "timestamp": 20})),
        "Rewound successfully."
    );

    // Leave the podcast for a song, then come back
    h.load_song("alice", "Help", 30);
    h.send(json!({"command": "search", "username": "alice", "timestamp": 40,
                  "type": "podcast", "filters": {"owner": "host"}}));
    h.send(json!({"command": "select", "username": "alice", "timestamp": 40, "itemNumber": 1}));
    h.send(json!({"command": "load", "username": "alice", "timestamp": 40}));
    let status = h.send(json!({"command": "status", "username": "alice", "timestamp": 40}));
    assert_eq!(
        status.stats,
        Some(json!({"name": "Ep1", "remainedTime": 570, "repeat": "No Repeat",
                    "shuffle": false, "paused": false}))
    );

    assert_eq!(
        h.message(json!({"command": "next", "username": "alice", "timestamp": 41})),
        "Skipped to next track successfully. The current track is Ep2."
    );
    assert_eq!(
        h.message(json!({"command": "prev", "username": "alice", "timestamp": 45})),
        "Returned to previous track successfully. The current track is Ep2."
    );
    assert_eq!(
        h.message(json!({"command": "prev", "username": "alice", "timestamp": 45})),
        "Returned to previous track successfully. The current track is Ep1."
    );
}

#[test]
fn likes_feed_the_top_listings() {
    let mut h = Harness::new();
    h.load_song("alice", "Help", 0);
    assert_eq!(
        h.message(json!({"command": "like", "username": "alice", "timestamp": 1})),
        "Like registered successfully."
    );
    h.load_song("bob", "Help", 2);
    h.send(json!({"command": "like", "username": "bob", "timestamp": 3}));

    let top = h.send(json!({"command": "getTop5Songs", "timestamp": 4}));
    assert_eq!(top.result, Some(json!(["Help", "A", "B", "Hey Jude"])));

    assert_eq!(
        h.message(json!({"command": "like", "username": "bob", "timestamp": 5})),
        "Unlike registered successfully."
    );
    let liked = h.send(json!({"command": "showPreferredSongs", "username": "alice", "timestamp": 6}));
    assert_eq!(liked.result, Some(json!(["Help"])));
}

// ===== Users =====

#[test]
fn offline_listeners_are_frozen() {
    let mut h = Harness::new();
    h.load_song("alice", "Hey", 0);

    assert_eq!(
        h.message(json!({"command": "switchConnectionStatus", "username": "alice", "timestamp": 50})),
        "alice has changed status successfully."
    );
    assert_eq!(
        h.message(json!({"command": "playPause", "username": "alice", "timestamp": 60})),
        "alice is offline."
    );
    let online = h.send(json!({"command": "getOnlineUsers", "timestamp": 70}));
    assert_eq!(online.result, Some(json!(["bob"])));

    h.send(json!({"command": "switchConnectionStatus", "username": "alice", "timestamp": 1000}));
    let status = h.send(json!({"command": "status", "username": "alice", "timestamp": 1010}));
    assert_eq!(status.stats.unwrap()["remainedTime"], 140);
}

#[test]
fn accounts_and_roles() {
    let mut h = Harness::new();
    assert_eq!(
        h.message(json!({"command": "addUser", "username": "dj", "timestamp": 1,
                         "type": "artist", "age": 30, "city": "Oslo"})),
        "The username dj has been added successfully."
    );
    assert_eq!(
        h.message(json!({"command": "addUser", "username": "alice", "timestamp": 2, "type": "host"})),
        "The username alice is already taken."
    );
    h.send(json!({"command": "addUser", "username": "radio", "timestamp": 3, "type": "host"}));

    let all = h.send(json!({"command": "getAllUsers", "timestamp": 4}));
    assert_eq!(all.result, Some(json!(["alice", "bob", "dj", "radio"])));

    assert_eq!(
        h.message(json!({"command": "addMerch", "username": "alice", "timestamp": 5,
                         "name": "Cap", "description": "", "price": 5})),
        "alice is not an artist."
    );
    assert_eq!(
        h.message(json!({"command": "addAnnouncement", "username": "dj", "timestamp": 6,
                         "name": "News", "description": ""})),
        "dj is not a host."
    );
    assert_eq!(
        h.message(json!({"command": "switchConnectionStatus", "username": "dj", "timestamp": 7})),
        "dj is not a normal user."
    );
    assert_eq!(
        h.message(json!({"command": "like", "username": "carol", "timestamp": 8})),
        "The username carol doesn't exist."
    );
}

#[test]
fn creator_content_validation() {
    let mut h = Harness::new();
    h.send(json!({"command": "addUser", "username": "dj", "timestamp": 0, "type": "artist"}));
    h.send(json!({"command": "addUser", "username": "radio", "timestamp": 0, "type": "host"}));

    let album = json!({"command": "addAlbum", "username": "dj", "timestamp": 1, "name": "Night",
                       "releaseYear": 2022, "description": "debut",
                       "songs": [{"name": "Glow", "duration": 100, "album": "Night",
                                  "genre": "house", "releaseYear": 2022, "artist": "dj"}]});
    assert_eq!(h.message(album.clone()), "dj has added new album successfully.");
    assert_eq!(h.message(album), "dj has another album with the same name.");
    let albums = h.send(json!({"command": "showAlbums", "username": "dj", "timestamp": 2}));
    assert_eq!(albums.result, Some(json!([{"name": "Night", "songs": ["Glow"]}])));

    assert_eq!(
        h.message(json!({"command": "addEvent", "username": "dj", "timestamp": 3,
                         "name": "Gig", "description": "live", "date": "31-02-2023"})),
        "Event for dj does not have a valid date."
    );
    assert_eq!(
        h.message(json!({"command": "addEvent", "username": "dj", "timestamp": 4,
                         "name": "Gig", "description": "live", "date": "28-02-2023"})),
        "dj has added new event successfully."
    );
    assert_eq!(
        h.message(json!({"command": "addEvent", "username": "dj", "timestamp": 5,
                         "name": "Gig", "description": "again", "date": "01-03-2023"})),
        "dj has another event with the same name."
    );
    assert_eq!(
        h.message(json!({"command": "addMerch", "username": "dj", "timestamp": 6,
                         "name": "Shirt", "description": "black", "price": -1})),
        "Price for merchandise can not be negative."
    );

    assert_eq!(
        h.message(json!({"command": "addPodcast", "username": "radio", "timestamp": 7, "name": "Morning",
                         "episodes": [{"name": "M1", "duration": 300, "description": "first"}]})),
        "radio has added new podcast successfully."
    );
    let podcasts = h.send(json!({"command": "showPodcasts", "username": "radio", "timestamp": 8}));
    assert_eq!(podcasts.result, Some(json!([{"name": "Morning", "episodes": ["M1"]}])));
    assert_eq!(
        h.message(json!({"command": "addAnnouncement", "username": "radio", "timestamp": 9,
                         "name": "News", "description": "new season"})),
        "radio has successfully added new announcement."
    );
    assert_eq!(
        h.message(json!({"command": "addAnnouncement", "username": "radio", "timestamp": 10,
                         "name": "News", "description": "again"})),
        "radio has already added an announcement with this name."
    );

    // New album songs are searchable
    let search = h.send(json!({"command": "search", "username": "alice", "timestamp": 11,
                               "type": "song", "filters": {"artist": "dj"}}));
    assert_eq!(search.results, Some(json!(["Glow"])));
}

// ===== Pages =====

#[test]
fn navigation_history() {
    let mut h = Harness::new();
    assert_eq!(
        h.message(json!({"command": "previousPage", "username": "alice", "timestamp": 1})),
        "There are no pages left to go back."
    );
    assert_eq!(
        h.message(json!({"command": "changePage", "username": "alice", "timestamp": 2, "nextPage": "LikedContent"})),
        "alice accessed LikedContent successfully."
    );
    assert_eq!(
        h.message(json!({"command": "changePage", "username": "alice", "timestamp": 3, "nextPage": "Home"})),
        "alice accessed Home successfully."
    );
    assert_eq!(
        h.message(json!({"command": "previousPage", "username": "alice", "timestamp": 4})),
        "The user alice has navigated successfully to the previous page."
    );
    assert_eq!(
        h.message(json!({"command": "printCurrentPage", "username": "alice", "timestamp": 5})),
        "Liked songs:\n\t[]\n\nFollowed playlists:\n\t[]"
    );
    assert_eq!(
        h.message(json!({"command": "nextPage", "username": "alice", "timestamp": 6})),
        "The user alice has navigated successfully to the next page."
    );
    assert_eq!(
        h.message(json!({"command": "nextPage", "username": "alice", "timestamp": 7})),
        "There are no pages left to go forward."
    );
    assert_eq!(
        h.message(json!({"command": "changePage", "username": "alice", "timestamp": 8, "nextPage": "Settings"})),
        "alice is trying to access a non-existent page."
    );
}

#[test]
fn artist_and_host_pages_follow_the_loaded_source() {
    let mut h = Harness::new();
    h.send(json!({"command": "addUser", "username": "beatles", "timestamp": 0, "type": "artist"}));
    h.send(json!({"command": "addMerch", "username": "beatles", "timestamp": 0,
                  "name": "Poster", "description": "Abbey Road", "price": 15}));

    assert_eq!(
        h.message(json!({"command": "changePage", "username": "alice", "timestamp": 1, "nextPage": "Artist"})),
        "alice is trying to access a non-existent page."
    );

    h.load_song("alice", "Help", 2);
    assert_eq!(
        h.message(json!({"command": "changePage", "username": "alice", "timestamp": 3, "nextPage": "Artist"})),
        "alice accessed Artist successfully."
    );
    assert_eq!(
        h.message(json!({"command": "printCurrentPage", "username": "alice", "timestamp": 4})),
        "Albums:\n\t[]\n\nMerch:\n\t[Poster - 15:\n\tAbbey Road]\n\nEvents:\n\t[]"
    );
    assert_eq!(
        h.message(json!({"command": "changePage", "username": "alice", "timestamp": 5, "nextPage": "Host"})),
        "alice is trying to access a non-existent page."
    );

    h.send(json!({"command": "search", "username": "alice", "timestamp": 6,
                  "type": "podcast", "filters": {"name": "Talk"}}));
    h.send(json!({"command": "select", "username": "alice", "timestamp": 6, "itemNumber": 1}));
    h.send(json!({"command": "load", "username": "alice", "timestamp": 6}));
    assert_eq!(
        h.message(json!({"command": "changePage", "username": "alice", "timestamp": 7, "nextPage": "Host"})),
        "alice accessed Host successfully."
    );
    assert_eq!(
        h.message(json!({"command": "printCurrentPage", "username": "alice", "timestamp": 8})),
        "Podcasts:\n\t[Talk:\n\t[Ep1 - pilot, Ep2 - sequel]\n]\n\nAnnouncements:\n\t[]"
    );
}

#[test]
fn selecting_an_artist_opens_the_page() {
    let mut h = Harness::new();
    h.send(json!({"command": "addUser", "username": "second", "timestamp": 0, "type": "artist"}));
    h.send(json!({"command": "search", "username": "alice", "timestamp": 1,
                  "type": "artist", "filters": {"name": "sec"}}));
    assert_eq!(
        h.message(json!({"command": "select", "username": "alice", "timestamp": 2, "itemNumber": 1})),
        "Successfully selected second's page."
    );
    assert_eq!(
        h.message(json!({"command": "load", "username": "alice", "timestamp": 3})),
        "Please select a source before attempting to load."
    );
    assert_eq!(
        h.message(json!({"command": "printCurrentPage", "username": "alice", "timestamp": 4})),
        "Albums:\n\t[]\n\nMerch:\n\t[]\n\nEvents:\n\t[]"
    );
}

// ===== Monetization =====

#[test]
fn premium_pool_splits_by_plays() {
    let mut h = Harness::new();
    h.send(json!({"command": "addUser", "username": "first", "timestamp": 0, "type": "artist"}));
    h.send(json!({"command": "addUser", "username": "second", "timestamp": 0, "type": "artist"}));
    assert_eq!(
        h.message(json!({"command": "buyPremium", "username": "alice", "timestamp": 0})),
        "alice bought the subscription successfully."
    );
    assert_eq!(
        h.message(json!({"command": "buyPremium", "username": "alice", "timestamp": 0})),
        "alice is already a premium user."
    );

    // A twice (repeat once), then B once
    h.load_song("alice", "A", 1);
    assert_eq!(
        h.message(json!({"command": "repeat", "username": "alice", "timestamp": 2})),
        "Repeat mode changed to repeat once."
    );
    h.load_song("alice", "B", 30);

    let end = h.send(json!({"command": "endProgram", "timestamp": 100}));
    assert_eq!(
        end.result,
        Some(json!({
            "first": {"merchRevenue": 0.0, "songRevenue": 666666.67, "ranking": 0, "mostProfitableSong": "A"},
            "second": {"merchRevenue": 0.0, "songRevenue": 333333.33, "ranking": 1, "mostProfitableSong": "B"}
        }))
    );
}

#[test]
fn cancelling_premium_closes_the_window() {
    let mut h = Harness::new();
    h.send(json!({"command": "addUser", "username": "first", "timestamp": 0, "type": "artist"}));
    h.send(json!({"command": "addUser", "username": "second", "timestamp": 0, "type": "artist"}));
    assert_eq!(
        h.message(json!({"command": "cancelPremium", "username": "alice", "timestamp": 0})),
        "alice is not a premium user."
    );
    h.send(json!({"command": "buyPremium", "username": "alice", "timestamp": 0}));
    h.load_song("alice", "A", 1);
    assert_eq!(
        h.message(json!({"command": "cancelPremium", "username": "alice", "timestamp": 20})),
        "alice cancelled the subscription successfully."
    );
    h.send(json!({"command": "buyPremium", "username": "alice", "timestamp": 21}));
    h.load_song("alice", "B", 22);

    let end = h.send(json!({"command": "endProgram", "timestamp": 100}));
    let result = end.result.unwrap();
    assert_eq!(result["first"]["songRevenue"], 1_000_000.0);
    assert_eq!(result["second"]["songRevenue"], 1_000_000.0);
}

#[test]
fn ads_and_merch() {
    let mut h = Harness::new();
    h.send(json!({"command": "addUser", "username": "first", "timestamp": 0, "type": "artist"}));
    h.send(json!({"command": "addMerch", "username": "first", "timestamp": 0,
                  "name": "Mug", "description": "ceramic", "price": 12.5}));

    assert_eq!(
        h.message(json!({"command": "adBreak", "username": "bob", "timestamp": 1, "price": 400})),
        "bob is not playing any music."
    );
    h.load_song("bob", "A", 2);
    assert_eq!(
        h.message(json!({"command": "adBreak", "username": "bob", "timestamp": 3, "price": 400})),
        "Ad inserted successfully."
    );

    assert_eq!(
        h.message(json!({"command": "buyMerch", "username": "bob", "timestamp": 4, "name": "Mug"})),
        "Cannot buy merch if you are not on the page of an artist."
    );
    h.send(json!({"command": "changePage", "username": "bob", "timestamp": 5, "nextPage": "Artist"}));
    assert_eq!(
        h.message(json!({"command": "buyMerch", "username": "bob", "timestamp": 6, "name": "Cup"})),
        "The merch Cup doesn't exist."
    );
    assert_eq!(
        h.message(json!({"command": "buyMerch", "username": "bob", "timestamp": 7, "name": "Mug"})),
        "bob has added new merch successfully."
    );
    let merch = h.send(json!({"command": "seeMerch", "username": "bob", "timestamp": 8}));
    assert_eq!(merch.result, Some(json!(["Mug"])));

    let end = h.send(json!({"command": "endProgram", "timestamp": 50}));
    assert_eq!(
        end.result,
        Some(json!({
            "first": {"merchRevenue": 12.5, "songRevenue": 400.0, "ranking": 0, "mostProfitableSong": "A"}
        }))
    );
}

#[test]
fn only_registered_artists_are_ranked() {
    let mut h = Harness::new();
    h.send(json!({"command": "addUser", "username": "first", "timestamp": 0, "type": "artist"}));

    // Free listens with no ad: "first" played but earned nothing
    h.load_song("bob", "A", 1);
    h.load_song("alice", "B", 1);

    let end = h.send(json!({"command": "endProgram", "timestamp": 100}));
    assert_eq!(
        end.result,
        Some(json!({
            "first": {"merchRevenue": 0.0, "songRevenue": 0.0, "ranking": 0, "mostProfitableSong": "N/A"}
        }))
    );
    let rendered = serde_json::to_string(&end.result).unwrap();
    assert!(rendered.contains("\"songRevenue\":0.0"));
    assert!(!rendered.contains("-0.0"));
}

// ===== Wrapped =====

#[test]
fn wrapped_reports() {
    let mut h = Harness::new();
    h.send(json!({"command": "addUser", "username": "beatles", "timestamp": 0, "type": "artist"}));
    h.load_song("alice", "Help", 0);
    h.load_song("bob", "Help", 0);
    h.send(json!({"command": "repeat", "username": "bob", "timestamp": 1}));
    h.send(json!({"command": "repeat", "username": "bob", "timestamp": 1}));

    let alice = h.send(json!({"command": "wrapped", "username": "alice", "timestamp": 400}));
    assert_eq!(
        alice.result,
        Some(json!({
            "topArtists": {"beatles": 1},
            "topGenres": {"rock": 1},
            "topSongs": {"Help": 1},
            "topAlbums": {"Help!": 1},
            "topEpisodes": {}
        }))
    );

    let artist = h.send(json!({"command": "wrapped", "username": "beatles", "timestamp": 400}));
    assert_eq!(
        artist.result,
        Some(json!({
            "topAlbums": {"Help!": 3},
            "topSongs": {"Help": 3},
            "topFans": ["bob", "alice"],
            "listeners": 2
        }))
    );

    h.send(json!({"command": "addUser", "username": "carol", "timestamp": 401}));
    assert_eq!(
        h.message(json!({"command": "wrapped", "username": "carol", "timestamp": 402})),
        "No data to show for user carol."
    );
}
