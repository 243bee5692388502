use thiserror::Error;

/// Every failure the data-access layer can report.
///
/// Each variant keeps the original driver error as its source; nothing is
/// retried or translated on the way out.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Failed to write to the database: {0}")]
    WriteError(#[source] sqlx::Error),

    #[error("Failed to read from the database: {0}")]
    ReadError(#[source] sqlx::Error),

    #[error("Failed to initialize the database schema: {0}")]
    SchemaError(#[source] sqlx::Error),
}
