/// Podcast domain types
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single podcast episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub name: String,

    /// Duration in seconds
    pub duration: u32,

    /// Description shown on the host page
    #[serde(default)]
    pub description: String,

    /// Podcast this episode belongs to (filled in by `Podcast::new`)
    #[serde(skip)]
    pub podcast: String,

    /// Host owning the podcast (filled in by `Podcast::new`)
    #[serde(skip)]
    pub owner: String,
}

/// A podcast: an ordered list of episodes owned by a host
#[derive(Debug, Clone, PartialEq)]
pub struct Podcast {
    /// Podcast title
    pub name: String,

    /// Username of the host
    pub owner: String,

    /// Episodes in playback order
    pub episodes: Vec<Arc<Episode>>,
}

impl Podcast {
    /// Create a podcast, stamping each episode with its podcast and owner
    pub fn new(name: impl Into<String>, owner: impl Into<String>, episodes: Vec<Episode>) -> Self {
        let name = name.into();
        let owner = owner.into();
        let episodes = episodes
            .into_iter()
            .map(|mut episode| {
                episode.podcast.clone_from(&name);
                episode.owner.clone_from(&owner);
                Arc::new(episode)
            })
            .collect();

        Self {
            name,
            owner,
            episodes,
        }
    }
}

/// Podcast as it appears in a library file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodcastRecord {
    /// Podcast title
    pub name: String,
    /// Username of the host
    pub owner: String,
    /// Episodes in playback order
    pub episodes: Vec<Episode>,
}

impl From<PodcastRecord> for Podcast {
    fn from(record: PodcastRecord) -> Self {
        Podcast::new(record.name, record.owner, record.episodes)
    }
}
