/// Engine configuration
use serde::{Deserialize, Serialize};
use wave_playback::{SessionConfig, ShufflePolicy};

/// Tunables for a simulation run.
///
/// Every field has a default, so an empty TOML file (or none at all) yields
/// the stock engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Seconds moved by `forward` / `backward`
    #[serde(default = "default_skip_seconds")]
    pub skip_seconds: u32,

    /// Length of every top-N listing (pages, top commands, wrapped)
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,

    /// Maximum number of search results
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Revenue shared by the songs of one premium subscription window
    #[serde(default = "default_premium_pool")]
    pub premium_pool: f64,

    /// Insert an ad automatically after this many free-tier songs
    #[serde(default)]
    pub ad_interval: Option<u32>,

    /// Price of automatically inserted ads
    #[serde(default = "default_ad_price")]
    pub default_ad_price: f64,

    /// Shuffle behaviour when a repeat-all source wraps around
    #[serde(default)]
    pub shuffle_policy: ShufflePolicy,
}

impl EngineConfig {
    /// Configuration for a newly created listener session
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            skip_seconds: self.skip_seconds,
            shuffle_policy: self.shuffle_policy,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            skip_seconds: default_skip_seconds(),
            top_limit: default_top_limit(),
            search_limit: default_search_limit(),
            premium_pool: default_premium_pool(),
            ad_interval: None,
            default_ad_price: default_ad_price(),
            shuffle_policy: ShufflePolicy::default(),
        }
    }
}

fn default_skip_seconds() -> u32 {
    90
}

fn default_top_limit() -> usize {
    5
}

fn default_search_limit() -> usize {
    5
}

fn default_premium_pool() -> f64 {
    1_000_000.0
}

fn default_ad_price() -> f64 {
    1000.0
}
