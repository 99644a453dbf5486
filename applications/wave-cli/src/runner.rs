/// Batch runs: read a library and a command stream, write the results
use crate::error::{CliError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use wave_core::Library;
use wave_engine::{CommandEnvelope, CommandOutput, Engine, EngineConfig};

/// Inputs and outputs of one run
#[derive(Debug, Clone)]
pub struct RunFiles {
    pub library: PathBuf,
    pub commands: PathBuf,
    /// Results go to stdout when unset
    pub output: Option<PathBuf>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the initial library
pub fn read_library(path: &Path) -> Result<Library> {
    let library: Library = read_json(path)?;
    tracing::info!(
        songs = library.songs.len(),
        podcasts = library.podcasts.len(),
        users = library.users.len(),
        "Loaded library from {}",
        path.display()
    );
    Ok(library)
}

/// Read the command stream.
///
/// Entries the engine does not understand are logged and skipped; the rest
/// of the stream still runs.
pub fn read_commands(path: &Path) -> Result<Vec<CommandEnvelope>> {
    let raw: Vec<Value> = read_json(path)?;
    let total = raw.len();

    let commands: Vec<CommandEnvelope> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let name = value
                .get("command")
                .and_then(Value::as_str)
                .unwrap_or("<missing>")
                .to_string();
            match serde_json::from_value(value) {
                Ok(command) => Some(command),
                Err(e) => {
                    tracing::warn!(index, command = %name, "Skipping command: {}", e);
                    None
                }
            }
        })
        .collect();

    tracing::info!(
        accepted = commands.len(),
        skipped = total - commands.len(),
        "Loaded commands from {}",
        path.display()
    );
    Ok(commands)
}

/// Run `commands` against `library` and return one record per command
pub fn simulate(
    config: EngineConfig,
    library: Library,
    commands: Vec<CommandEnvelope>,
) -> Vec<CommandOutput> {
    let mut engine = Engine::new(config, library);
    engine.run(commands)
}

/// Pretty-printed JSON array of the result records
pub fn render(outputs: &[CommandOutput]) -> Result<String> {
    Ok(serde_json::to_string_pretty(outputs)?)
}

/// Read both inputs, run them and write the results.
///
/// Returns the number of result records written.
pub fn run(config: EngineConfig, files: &RunFiles) -> Result<usize> {
    let library = read_library(&files.library)?;
    let commands = read_commands(&files.commands)?;

    let outputs = simulate(config, library, commands);
    let rendered = render(&outputs)?;

    match &files.output {
        Some(path) => {
            fs::write(path, rendered + "\n").map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!("Wrote {} results to {}", outputs.len(), path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(outputs.len())
}
