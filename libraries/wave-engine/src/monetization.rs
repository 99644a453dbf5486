//! Revenue attribution
//!
//! Listens are grouped per listener into windows. A premium window (from
//! `buyPremium` until `cancelPremium` or program end) shares one fixed pool
//! across its songs; a free window (from one ad to the next) shares the ad
//! price. Within a window every play is worth the same amount, so a song's
//! share is proportional to how often it was played. Merchandise revenue is
//! tracked independently and settlement ranks artists by both.
//!
//! Only registered artist accounts are credited and ranked. Songs by other
//! artists still count toward a window's plays, but their share is not paid.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, info};
use wave_core::{SongKey, Track};

use crate::config::EngineConfig;

/// Revenue label when an artist earned nothing from songs
pub const NO_SONG: &str = "N/A";

/// One completed play, as reported by a session advance
#[derive(Debug, Clone, PartialEq)]
pub struct ListenRecord {
    /// Who listened
    pub listener: String,
    /// What was played to its end
    pub track: Track,
    /// Whether the listener was premium when the track ended
    pub premium: bool,
}

type PlayCounts = BTreeMap<SongKey, u32>;

/// Running revenue of one artist
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistAccount {
    /// Sum of merchandise purchase prices
    pub merch_revenue: f64,
    /// Song name -> credited revenue
    pub song_revenue: BTreeMap<String, f64>,
    /// Whether any of the artist's songs was ever played to its end
    pub played: bool,
}

impl ArtistAccount {
    fn total_song_revenue(&self) -> f64 {
        self.song_revenue.values().fold(0.0, |total, revenue| total + revenue)
    }

    /// Song with strictly the highest revenue; ties go to the smallest name
    fn most_profitable_song(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (name, &revenue) in &self.song_revenue {
            if best.map_or(true, |(_, top)| revenue > top) {
                best = Some((name, revenue));
            }
        }
        best.filter(|&(_, revenue)| revenue > 0.0)
            .map(|(name, _)| name)
    }
}

/// Final standing of one artist
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistRanking {
    /// Artist username
    pub artist: String,
    /// Merchandise revenue, rounded to cents
    pub merch_revenue: f64,
    /// Song revenue, rounded to cents
    pub song_revenue: f64,
    /// Position in the ranking, 0 = highest
    pub ranking: usize,
    /// Best-earning song, `None` without song revenue
    pub most_profitable_song: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RankingReport<'a> {
    merch_revenue: f64,
    song_revenue: f64,
    ranking: usize,
    most_profitable_song: &'a str,
}

/// Ordered `artist -> {merchRevenue, songRevenue, ranking, mostProfitableSong}`
pub fn ranking_payload(rankings: &[ArtistRanking]) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    for entry in rankings {
        let report = RankingReport {
            merch_revenue: entry.merch_revenue,
            song_revenue: entry.song_revenue,
            ranking: entry.ranking,
            most_profitable_song: entry.most_profitable_song.as_deref().unwrap_or(NO_SONG),
        };
        payload.insert(
            entry.artist.clone(),
            serde_json::to_value(report).unwrap_or_default(),
        );
    }
    serde_json::Value::Object(payload)
}

/// Round half up to two decimals
pub fn round_cents(amount: f64) -> f64 {
    // Adding zero turns -0.0 into 0.0
    (amount * 100.0).round() / 100.0 + 0.0
}

/// Accumulates listens and purchases until settlement
#[derive(Debug, Clone)]
pub struct MonetizationLedger {
    premium_pool: f64,
    ad_interval: Option<u32>,
    default_ad_price: f64,

    accounts: BTreeMap<String, ArtistAccount>,

    /// Open premium windows per listener
    premium_plays: BTreeMap<String, PlayCounts>,

    /// Free plays since the last ad per listener
    free_plays: BTreeMap<String, PlayCounts>,

    /// Ads requested by `adBreak`, played after the current track
    pending_ads: BTreeMap<String, f64>,
}

impl MonetizationLedger {
    /// Create an empty ledger
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            premium_pool: config.premium_pool,
            ad_interval: config.ad_interval,
            default_ad_price: config.default_ad_price,
            accounts: BTreeMap::new(),
            premium_plays: BTreeMap::new(),
            free_plays: BTreeMap::new(),
            pending_ads: BTreeMap::new(),
        }
    }

    /// Open an account for a newly registered artist
    pub fn register_artist(&mut self, artist: &str) {
        self.accounts.entry(artist.to_string()).or_default();
    }

    /// Account of `artist`, if one was opened
    pub fn account(&self, artist: &str) -> Option<&ArtistAccount> {
        self.accounts.get(artist)
    }

    /// Attribute a completed play and fire any ad that was waiting for it
    pub fn record(&mut self, listen: &ListenRecord) {
        if let Some(song) = listen.track.as_song() {
            if let Some(account) = self.accounts.get_mut(&song.artist) {
                account.played = true;
            }

            let window = if listen.premium {
                &mut self.premium_plays
            } else {
                &mut self.free_plays
            };
            let plays = window.entry(listen.listener.clone()).or_default();
            *plays.entry(song.key()).or_default() += 1;

            if !listen.premium {
                let since_ad: u32 = plays.values().sum();
                if self.ad_interval.is_some_and(|n| n > 0 && since_ad >= n) {
                    self.pending_ads
                        .entry(listen.listener.clone())
                        .or_insert(self.default_ad_price);
                }
            }
        }

        if let Some(price) = self.pending_ads.remove(&listen.listener) {
            self.play_ad(&listen.listener, price);
        }
    }

    /// Queue an ad after the listener's current track
    pub fn schedule_ad(&mut self, listener: &str, price: f64) {
        self.pending_ads.insert(listener.to_string(), price);
    }

    /// Split `price` over the listener's free plays since the previous ad
    fn play_ad(&mut self, listener: &str, price: f64) {
        let plays = self.free_plays.remove(listener).unwrap_or_default();
        debug!(listener, price, songs = plays.len(), "Ad played");
        self.credit(&plays, price);
    }

    /// Close the listener's premium window, sharing the pool over its plays
    pub fn close_premium_window(&mut self, listener: &str) {
        if let Some(plays) = self.premium_plays.remove(listener) {
            debug!(listener, songs = plays.len(), "Settled premium window");
            let pool = self.premium_pool;
            self.credit(&plays, pool);
        }
    }

    fn credit(&mut self, plays: &PlayCounts, amount: f64) {
        let total: u32 = plays.values().sum();
        if total == 0 {
            return;
        }

        for (song, &count) in plays {
            let Some(account) = self.accounts.get_mut(&song.artist) else {
                continue;
            };
            let share = amount * f64::from(count) / f64::from(total);
            *account.song_revenue.entry(song.name.clone()).or_default() += share;
        }
    }

    /// Credit a merchandise purchase
    pub fn record_merch(&mut self, artist: &str, price: f64) {
        if let Some(account) = self.accounts.get_mut(artist) {
            account.merch_revenue += price;
        }
    }

    /// Close every open premium window and rank the artists.
    ///
    /// Artists without revenue of either kind and without a single play are
    /// left out. Order: merch revenue, then song revenue (both descending),
    /// then username.
    pub fn settle(&mut self) -> Vec<ArtistRanking> {
        let open: Vec<String> = self.premium_plays.keys().cloned().collect();
        for listener in open {
            self.close_premium_window(&listener);
        }

        let mut rankings: Vec<ArtistRanking> = self
            .accounts
            .iter()
            .filter_map(|(artist, account)| {
                let song_revenue = round_cents(account.total_song_revenue());
                let merch_revenue = round_cents(account.merch_revenue);
                if song_revenue == 0.0 && merch_revenue == 0.0 && !account.played {
                    return None;
                }
                Some(ArtistRanking {
                    artist: artist.clone(),
                    merch_revenue,
                    song_revenue,
                    ranking: 0,
                    most_profitable_song: account.most_profitable_song().map(str::to_string),
                })
            })
            .collect();

        rankings.sort_by(|a, b| {
            b.merch_revenue
                .partial_cmp(&a.merch_revenue)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.song_revenue
                        .partial_cmp(&a.song_revenue)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.artist.cmp(&b.artist))
        });
        for (position, entry) in rankings.iter_mut().enumerate() {
            entry.ranking = position;
        }

        info!(artists = rankings.len(), "Settled revenue");
        rankings
    }
}
