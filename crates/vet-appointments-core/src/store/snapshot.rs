//! Collection snapshot persistence.
//!
//! The collection is written as one serialized value under a fixed key,
//! mirroring the string-keyed device storage the mobile app uses.

use rusqlite::{params, OptionalExtension};

use super::{Store, StoreResult};

/// Storage key for the serialized appointment collection.
const APPOINTMENTS_KEY: &str = "appointments";

impl Store {
    /// Persist the serialized appointment collection, replacing any
    /// previous snapshot.
    pub fn save_snapshot(&self, serialized: &str) -> StoreResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO app_state (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')
            "#,
            params![APPOINTMENTS_KEY, serialized],
        )?;
        Ok(())
    }

    /// Read the serialized appointment collection, if one has been saved.
    pub fn load_snapshot(&self) -> StoreResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?",
                [APPOINTMENTS_KEY],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Delete the stored snapshot. Returns whether one existed.
    pub fn clear_snapshot(&self) -> StoreResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM app_state WHERE key = ?", [APPOINTMENTS_KEY])?;
        Ok(rows_affected > 0)
    }
}
