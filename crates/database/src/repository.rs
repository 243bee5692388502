use crate::error::DbError;
use crate::schema;
use core_types::Employee;
use sqlx::AnyPool;
use tracing::debug;

/// Every field is bound through a bare placeholder, so the stored values are
/// exactly the ones passed in.
pub const INSERT_EMPLOYEE: &str =
    "INSERT INTO employee (firstname, lastname, role, password) VALUES (?, ?, ?, ?)";

/// Columns are listed explicitly and decoded by name, so extra columns added
/// to the table are ignored rather than treated as a decode failure.
pub const SELECT_ALL_EMPLOYEES: &str =
    "SELECT id, firstname, lastname, role, password FROM employee";

const SQLITE_BACKEND: &str = "SQLite";
const SQLITE_LAST_INSERT_ID: &str = "SELECT last_insert_rowid() AS id";

/// What the storage engine reported for a successful insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertReceipt {
    /// The id the engine assigned to the new row.
    pub id: u64,
    /// Always 1 for a single-row insert.
    pub rows_affected: u64,
}

/// The `EmployeeRepository` provides the data-access operations for the
/// `employee` table. It holds nothing but the connection handle, so it is
/// cheap to clone and share across tasks.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: AnyPool,
}

impl EmployeeRepository {
    /// Creates a new `EmployeeRepository` on top of an open handle.
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Creates the `employee` table if it does not exist yet.
    ///
    /// `ddl` is one of the scripts in [`crate::schema`], matching the backend
    /// the pool was opened against.
    pub async fn init_schema(&self, ddl: &str) -> Result<(), DbError> {
        for stmt in schema::statements(ddl) {
            sqlx::query(stmt)
                .execute(&self.pool)
                .await
                .map_err(DbError::SchemaError)?;
        }
        Ok(())
    }

    /// Inserts one employee and returns the engine-assigned id.
    ///
    /// `employee.id` is ignored. Driver failures are returned as
    /// `DbError::WriteError` without any retry.
    pub async fn insert_employee(&self, employee: &Employee) -> Result<InsertReceipt, DbError> {
        // The id lookup must run on the same connection as the insert.
        let mut conn = self.pool.acquire().await.map_err(DbError::WriteError)?;

        let result = sqlx::query(INSERT_EMPLOYEE)
            .bind(employee.firstname.as_str())
            .bind(employee.lastname.as_str())
            .bind(employee.role.as_str())
            .bind(employee.password.as_str())
            .execute(&mut *conn)
            .await
            .map_err(DbError::WriteError)?;

        // MySQL reports the generated id with the result; SQLite through the
        // `Any` driver does not, so ask the connection for it.
        let raw_id = match result.last_insert_id() {
            Some(id) => Some(id),
            None if conn.backend_name() == SQLITE_BACKEND => Some(
                sqlx::query_scalar::<_, i64>(SQLITE_LAST_INSERT_ID)
                    .fetch_one(&mut *conn)
                    .await
                    .map_err(DbError::WriteError)?,
            ),
            None => None,
        };

        let id = raw_id
            .and_then(|id| u64::try_from(id).ok())
            .ok_or_else(|| {
                DbError::WriteError(sqlx::Error::Protocol(
                    "insert did not report a generated id".to_string(),
                ))
            })?;

        let receipt = InsertReceipt {
            id,
            rows_affected: result.rows_affected(),
        };
        debug!(id = receipt.id, rows_affected = receipt.rows_affected, "inserted employee");
        Ok(receipt)
    }

    /// Fetches every employee, in whatever order the engine returns them.
    ///
    /// If any row fails to decode the whole call fails with
    /// `DbError::ReadError`; no partial list is returned.
    pub async fn find_all_employees(&self) -> Result<Vec<Employee>, DbError> {
        let employees = sqlx::query_as::<_, Employee>(SELECT_ALL_EMPLOYEES)
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::ReadError)?;

        debug!(count = employees.len(), "fetched employees");
        Ok(employees)
    }
}
