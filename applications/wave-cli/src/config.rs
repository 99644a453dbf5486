/// Engine configuration loading
use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use wave_engine::EngineConfig;

/// Default configuration file, read from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "wave.toml";

/// Load configuration from a file and the environment.
///
/// Sources, later ones winning:
/// 1. `path`, or `wave.toml` in the working directory if it exists
/// 2. `WAVE_*` environment variables (`WAVE_TOP_LIMIT=3`)
pub fn load(path: Option<&Path>) -> Result<EngineConfig> {
    let mut settings = config::Config::builder();

    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "config file {} not found",
                    path.display()
                )));
            }
            settings = settings.add_source(config::File::from(path.to_path_buf()));
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                settings = settings.add_source(config::File::from(default_path));
            }
        }
    }

    // Field names contain underscores, so nesting uses a double one
    settings = settings.add_source(
        config::Environment::with_prefix("WAVE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config: EngineConfig = settings.build()?.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

/// Reject settings the engine cannot run with
pub fn validate(config: &EngineConfig) -> Result<()> {
    if config.top_limit == 0 {
        return Err(CliError::Config("top_limit must be at least 1".to_string()));
    }
    if config.search_limit == 0 {
        return Err(CliError::Config(
            "search_limit must be at least 1".to_string(),
        ));
    }
    if !config.premium_pool.is_finite() || config.premium_pool < 0.0 {
        return Err(CliError::Config(format!(
            "premium_pool must be a non-negative amount, got {}",
            config.premium_pool
        )));
    }
    if !config.default_ad_price.is_finite() || config.default_ad_price < 0.0 {
        return Err(CliError::Config(format!(
            "default_ad_price must be a non-negative amount, got {}",
            config.default_ad_price
        )));
    }
    Ok(())
}

/// Render `config` the way it would be written to `wave.toml`
pub fn to_toml(config: &EngineConfig) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::Config(e.to_string()))
}
