use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the employee database lives and how to authenticate against it.
///
/// Every field is required; there are no defaults.
#[derive(Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Network address of the server, including the port (e.g. "db:3306").
    pub host: String,
    pub user: String,
    pub password: String,
    /// Name of the database (schema) that holds the `employee` table.
    pub database: String,
}

// Hand-written so the password never ends up in logs.
impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

/// Controls the tracing subscriber installed by the binary.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive, used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Rejects values that deserialize fine but cannot describe a usable database.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let db = &self.database;
        for (key, value) in [
            ("database.host", &db.host),
            ("database.user", &db.user),
            ("database.database", &db.database),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "`{key}` must not be empty"
                )));
            }
        }
        Ok(())
    }
}
