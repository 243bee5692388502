//! DDL for bootstrapping the `employee` table.
//!
//! These are create-if-missing scripts, not migrations: running them against
//! an existing table is a no-op.

/// MySQL / MariaDB schema:
/// - `id` BIGINT AUTO_INCREMENT primary key, assigned by the server
/// - the four text columns are mandatory
pub const MYSQL_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS employee (
    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    firstname VARCHAR(255) NOT NULL,
    lastname VARCHAR(255) NOT NULL,
    role VARCHAR(255) NOT NULL,
    password VARCHAR(255) NOT NULL
);
"#;

/// SQLite equivalent, used for embedded and in-memory databases.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS employee (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    firstname TEXT NOT NULL,
    lastname TEXT NOT NULL,
    role TEXT NOT NULL,
    password TEXT NOT NULL
);
"#;

/// Splits a DDL script into individual statements; sqlx executes one at a time.
pub fn statements(ddl: &str) -> impl Iterator<Item = &str> {
    ddl.split(';').map(str::trim).filter(|s| !s.is_empty())
}
