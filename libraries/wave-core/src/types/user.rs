/// User role types
use serde::{Deserialize, Serialize};

/// Account type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Normal user: listens, builds playlists, browses pages
    #[default]
    #[serde(rename = "user")]
    Listener,

    /// Publishes albums, events and merchandise
    Artist,

    /// Publishes podcasts and announcements
    Host,
}

impl UserRole {
    /// Role name with indefinite article, as used in rejection messages
    pub fn article_name(self) -> &'static str {
        match self {
            UserRole::Listener => "a normal user",
            UserRole::Artist => "an artist",
            UserRole::Host => "a host",
        }
    }
}

/// User as it appears in a library file or an `addUser` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique username
    pub username: String,

    /// Age in years
    #[serde(default)]
    pub age: u32,

    /// City of residence
    #[serde(default)]
    pub city: String,

    /// Account type (defaults to a normal user)
    #[serde(rename = "type", default)]
    pub role: UserRole,
}
