//! Result records
//!
//! Every command yields exactly one `CommandOutput`. Handlers produce a
//! [`Reply`]; the engine wraps it with the command name, user and
//! timestamp.

use serde::Serialize;
use serde_json::Value;
use wave_playback::Timestamp;

/// What a handler has to say
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Human-readable outcome
    Message(String),

    /// Search outcome with the names of the hits
    Search {
        /// "Search returned N results"
        message: String,
        /// Hit names in result order
        results: Vec<String>,
    },

    /// Player snapshot (`status`)
    Stats(Value),

    /// Query payload
    Result(Value),

    /// Accepted without comment
    Silent,
}

impl Reply {
    /// Reply with a message
    pub fn message(text: impl Into<String>) -> Self {
        Reply::Message(text.into())
    }

    /// Reply with a serialized payload
    pub fn result(payload: impl Serialize) -> Self {
        Reply::Result(serde_json::to_value(payload).unwrap_or(Value::Null))
    }
}

/// One output record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOutput {
    /// Command name
    pub command: String,

    /// Issuing user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Command timestamp
    pub timestamp: Timestamp,

    /// Outcome or rejection message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Search hits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,

    /// Player snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Value>,

    /// Query payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl CommandOutput {
    /// Record with only the identifying fields set
    pub fn new(command: &str, user: Option<String>, timestamp: Timestamp) -> Self {
        Self {
            command: command.to_string(),
            user,
            timestamp,
            message: None,
            results: None,
            stats: None,
            result: None,
        }
    }

    /// Fill in a handler reply
    pub fn with_reply(mut self, reply: Reply) -> Self {
        match reply {
            Reply::Message(text) => self.message = Some(text),
            Reply::Search { message, results } => {
                self.message = Some(message);
                self.results = Some(results.into());
            }
            Reply::Stats(stats) => self.stats = Some(stats),
            Reply::Result(result) => self.result = Some(result),
            Reply::Silent => {}
        }
        self
    }

    /// Fill in a rejection message
    pub fn with_error(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }
}
