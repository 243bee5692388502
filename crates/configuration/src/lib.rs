use crate::error::ConfigError;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Environment, File};
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DatabaseSettings, LogFormat, LoggingSettings};

/// Prefix for environment overrides, e.g. `WORKDAY__DATABASE__HOST`.
pub const ENV_PREFIX: &str = "WORKDAY";

/// Loads the application configuration from a TOML file.
///
/// This function is the primary entry point for this crate. It reads the file,
/// layers `WORKDAY__*` environment variables on top, deserializes the result
/// into our strongly-typed `Config` struct and validates it.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading configuration");

    let builder = config::Config::builder()
        .add_source(File::from(path))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    finish(builder)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Config, ConfigError> {
    let config = builder.build()?.try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}
