/// Wave - streaming session simulator
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wave_cli::{config, runner, RunFiles};

#[derive(Parser)]
#[command(name = "wave")]
#[command(about = "Replay a command stream against a streaming library", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a command file and write the results
    Run {
        /// Library JSON (songs, podcasts, users)
        #[arg(short, long)]
        library: PathBuf,
        /// Command stream JSON
        #[arg(short, long)]
        commands: PathBuf,
        /// Where to write the results (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Configuration file path
        #[arg(long = "config")]
        config_file: Option<PathBuf>,
    },
    /// Print the effective configuration as TOML
    ShowConfig {
        /// Configuration file path
        #[arg(long = "config")]
        config_file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout may carry the results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wave_cli=info,wave_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            library,
            commands,
            output,
            config_file,
        } => {
            let engine_config =
                config::load(config_file.as_deref()).context("Failed to load configuration")?;
            let files = RunFiles {
                library,
                commands,
                output,
            };
            let written = runner::run(engine_config, &files)
                .with_context(|| format!("Run of {} failed", files.commands.display()))?;
            tracing::debug!(written, "Run complete");
        }
        Commands::ShowConfig { config_file } => {
            let engine_config =
                config::load(config_file.as_deref()).context("Failed to load configuration")?;
            print!("{}", config::to_toml(&engine_config)?);
        }
    }

    Ok(())
}
