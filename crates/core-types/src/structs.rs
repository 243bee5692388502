use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single employee record as stored in the `employee` table.
///
/// The value is a detached copy of the row: it holds no reference to the
/// connection that produced it. `id` is assigned by the storage engine on
/// insert and is ignored when the record is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    #[sqlx(try_from = "i64")]
    pub id: u64,
    pub firstname: String,
    pub lastname: String,
    /// Free-form job title; no enumeration is enforced.
    pub role: String,
    /// Stored as given, in plain text.
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Employee {
    /// Builds a record that has not been persisted yet (`id` is 0).
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        role: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            firstname: firstname.into(),
            lastname: lastname.into(),
            role: role.into(),
            password: password.into(),
        }
    }
}
