//! # Workday Database Crate
//!
//! This crate is the application's data-access layer for employee records.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. The rest of the application sees
//!   `Employee` values and a small closed set of errors.
//! - **Explicit handles:** `connect` builds the driver handle from settings and
//!   the caller passes it to `EmployeeRepository`; there is no global
//!   connection.
//! - **Driver-agnostic:** The handle is an `sqlx` `Any` pool. Production talks
//!   to MySQL/MariaDB; tests run the same queries on in-memory SQLite.
//!
//! ## Public API
//!
//! - `connect` / `open`: establish the connection pool.
//! - `DataSource`: the connection target derived from configuration.
//! - `EmployeeRepository`: `insert_employee`, `find_all_employees` and
//!   `init_schema`.
//! - `DbError`: `ConnectionError`, `WriteError`, `ReadError`, `SchemaError`.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod schema;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, open, DataSource};
pub use error::DbError;
pub use repository::{EmployeeRepository, InsertReceipt};
pub use sqlx::{AnyPool, any::AnyPoolOptions};
