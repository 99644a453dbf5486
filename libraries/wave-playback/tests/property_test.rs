//! Property-based tests for playback sessions
//!
//! Uses proptest to verify the time-advance invariants across many random
//! sources, modes and timestamp splits.

use proptest::prelude::*;
use std::sync::Arc;
use wave_core::{Album, Song, Track};
use wave_playback::{PlaybackSession, PlaybackSource, RepeatMode, SessionConfig, ShufflePolicy};

// ===== Helpers =====

fn arbitrary_album() -> impl Strategy<Value = PlaybackSource> {
    prop::collection::vec(1u32..300, 1..12).prop_map(|durations| {
        let songs = durations
            .into_iter()
            .enumerate()
            .map(|(i, d)| Song::new(format!("Song {}", i), "Artist", "Album", "pop", 2020, d))
            .collect();
        PlaybackSource::Album(Arc::new(Album::new("Album", "Artist", 2020, "", songs)))
    })
}

fn arbitrary_repeat() -> impl Strategy<Value = RepeatMode> {
    prop_oneof![
        Just(RepeatMode::None),
        Just(RepeatMode::RepeatOnce),
        Just(RepeatMode::RepeatAll),
        Just(RepeatMode::RepeatCurrent),
    ]
}

fn arbitrary_policy() -> impl Strategy<Value = ShufflePolicy> {
    prop_oneof![
        Just(ShufflePolicy::KeepOrder),
        Just(ShufflePolicy::ReshuffleEachLoop),
    ]
}

fn prepared_session(
    source: PlaybackSource,
    repeat: RepeatMode,
    shuffle_seed: Option<u64>,
    policy: ShufflePolicy,
) -> PlaybackSession {
    let mut session = PlaybackSession::new(SessionConfig {
        shuffle_policy: policy,
        ..Default::default()
    });
    session.load(source, 0).unwrap();
    session.set_repeat(repeat).unwrap();
    if let Some(seed) = shuffle_seed {
        session.toggle_shuffle(seed).unwrap();
    }
    session
}

fn names(tracks: &[Track]) -> Vec<String> {
    tracks.iter().map(|t| t.name().to_string()).collect()
}

// ===== Property Tests =====

proptest! {
    /// Property: advancing in steps ends in the same state, with the same
    /// listens, as one jump to the final timestamp
    #[test]
    fn stepwise_advance_equals_single_jump(
        source in arbitrary_album(),
        repeat in arbitrary_repeat(),
        shuffle_seed in proptest::option::of(any::<u64>()),
        policy in arbitrary_policy(),
        mut steps in prop::collection::vec(0i64..2_000, 1..10),
    ) {
        steps.sort_unstable();
        let end = *steps.last().unwrap();

        let mut stepped = prepared_session(source.clone(), repeat, shuffle_seed, policy);
        let mut stepped_listens = Vec::new();
        for &at in &steps {
            stepped_listens.extend(stepped.advance_to(at));
        }

        let mut jumped = prepared_session(source, repeat, shuffle_seed, policy);
        let jumped_listens = jumped.advance_to(end);

        prop_assert_eq!(stepped.state(), jumped.state());
        prop_assert_eq!(stepped.status(), jumped.status());
        prop_assert_eq!(names(&stepped_listens), names(&jumped_listens));
    }

    /// Property: a second advance to the same timestamp changes nothing
    #[test]
    fn advance_is_idempotent(
        source in arbitrary_album(),
        repeat in arbitrary_repeat(),
        at in 0i64..5_000,
    ) {
        let mut session = prepared_session(source, repeat, None, ShufflePolicy::KeepOrder);
        session.advance_to(at);
        let settled = session.state().cloned();

        prop_assert!(session.advance_to(at).is_empty());
        prop_assert_eq!(session.state().cloned(), settled);
    }

    /// Property: toggling shuffle never changes the current track or position
    #[test]
    fn shuffle_toggle_preserves_current_track(
        source in arbitrary_album(),
        seed in any::<u64>(),
        at in 0i64..1_000,
    ) {
        let mut session = prepared_session(source, RepeatMode::RepeatAll, None, ShufflePolicy::KeepOrder);
        session.advance_to(at);
        let track = session.current_track();
        let position = session.state().unwrap().position();

        session.toggle_shuffle(seed).unwrap();
        prop_assert_eq!(session.current_track(), track.clone());
        prop_assert_eq!(session.state().unwrap().position(), position);

        session.toggle_shuffle(seed).unwrap();
        prop_assert_eq!(session.current_track(), track);
        prop_assert_eq!(session.state().unwrap().position(), position);
    }

    /// Property: position always stays inside the current track
    #[test]
    fn position_stays_below_duration(
        source in arbitrary_album(),
        repeat in arbitrary_repeat(),
        at in 0i64..10_000,
    ) {
        let mut session = prepared_session(source, repeat, None, ShufflePolicy::KeepOrder);
        session.advance_to(at);

        if let Some(track) = session.current_track() {
            prop_assert!(session.state().unwrap().position() < track.duration());
        }
    }
}
