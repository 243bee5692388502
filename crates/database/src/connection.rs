use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::{AnyPool, any::AnyPoolOptions};
use std::fmt;
use tracing::info;

/// The connection target derived from `DatabaseSettings`.
///
/// Fields are interpolated verbatim: nothing is escaped, so a user, password
/// or database name containing `@`, `/` or `:` yields an undefined target.
#[derive(Clone, PartialEq, Eq)]
pub struct DataSource {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DataSource {
    pub fn new(settings: &DatabaseSettings) -> Self {
        Self {
            host: settings.host.clone(),
            user: settings.user.clone(),
            password: settings.password.clone(),
            database: settings.database.clone(),
        }
    }

    /// The URL handed to the MySQL driver.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}/{}",
            self.user, self.password, self.host, self.database
        )
    }
}

impl From<&DatabaseSettings> for DataSource {
    fn from(settings: &DatabaseSettings) -> Self {
        Self::new(settings)
    }
}

/// Renders the classic `user:password@tcp(host)/database` descriptor.
impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}@tcp({})/{}",
            self.user, self.password, self.host, self.database
        )
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSource")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

/// Opens a handle to the employee database described by `settings`.
///
/// The pool is opened eagerly, so a malformed target, an unreachable host or
/// rejected credentials surface here as `DbError::ConnectionError`. Pool sizing
/// is left at the driver defaults. The caller owns the returned handle and
/// should `close()` it when finished.
pub async fn connect(settings: &DatabaseSettings) -> Result<AnyPool, DbError> {
    let source = DataSource::from(settings);
    info!(
        host = %source.host,
        user = %source.user,
        database = %source.database,
        "connecting to employee database"
    );
    open(&source.url(), AnyPoolOptions::new()).await
}

/// Opens a handle from an already-built driver URL (`mysql://…`, `sqlite:…`).
pub async fn open(url: &str, options: AnyPoolOptions) -> Result<AnyPool, DbError> {
    // The `Any` pool dispatches on the URL scheme; register the drivers this
    // crate is built with before the first connection attempt.
    sqlx::any::install_default_drivers();

    options.connect(url).await.map_err(DbError::ConnectionError)
}
