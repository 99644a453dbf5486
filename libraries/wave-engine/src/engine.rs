//! Command loop
//!
//! Commands run strictly one after another. Before a command acts, every
//! listener's session is settled to its timestamp, so time-dependent state
//! (finished tracks, due ads) is current when the handler looks at it.

use tracing::debug;
use wave_core::Library;

use crate::command::{Command, CommandEnvelope};
use crate::config::EngineConfig;
use crate::handlers;
use crate::output::CommandOutput;
use crate::world::WorldState;

/// Session engine
#[derive(Debug, Clone)]
pub struct Engine {
    world: WorldState,
}

impl Engine {
    /// Create an engine over a library snapshot
    pub fn new(config: EngineConfig, library: Library) -> Self {
        Self {
            world: WorldState::new(config, library),
        }
    }

    /// Current state
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Execute one command.
    ///
    /// Never fails: a rejected command reports its reason in the message.
    pub fn execute(&mut self, envelope: CommandEnvelope) -> CommandOutput {
        let CommandEnvelope {
            username,
            timestamp,
            command,
        } = envelope;

        self.world.advance_all(timestamp);

        let user = username.as_deref().unwrap_or_default();
        let output = CommandOutput::new(command.name(), username.clone(), timestamp);
        match handlers::dispatch(&mut self.world, user, timestamp, &command) {
            Ok(reply) => {
                debug!(command = command.name(), user, timestamp, "Command executed");
                output.with_reply(reply)
            }
            Err(err) => {
                debug!(
                    command = command.name(),
                    user,
                    timestamp,
                    kind = ?err.kind(),
                    reason = %err,
                    "Command rejected"
                );
                output.with_error(err.to_string())
            }
        }
    }

    /// Execute a whole run.
    ///
    /// A run always ends with `endProgram`; one is appended at the last
    /// timestamp when the input does not carry it.
    pub fn run<I>(&mut self, commands: I) -> Vec<CommandOutput>
    where
        I: IntoIterator<Item = CommandEnvelope>,
    {
        let mut outputs = Vec::new();
        let mut last_timestamp = 0;
        let mut ended = false;

        for envelope in commands {
            last_timestamp = envelope.timestamp;
            ended = envelope.command == Command::EndProgram;
            outputs.push(self.execute(envelope));
        }

        if !ended {
            outputs.push(self.execute(CommandEnvelope::end_program(last_timestamp)));
        }
        outputs
    }
}
