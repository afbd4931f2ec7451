// Preferences service
// Boolean flags that survive restarts, stored in the local SQLite file

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::services::database::Database;

/// Set when the user has switched a seasonal theme off
pub const FORCE_DEFAULT_THEME: &str = "forceDefaultTheme";

const TRUE_VALUE: &str = "true";

pub struct PreferencesService<'a> {
    db: &'a Database,
}

impl<'a> PreferencesService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// True only when `key` is stored with the value `"true"`
    pub fn get_flag(&self, key: &str) -> Result<bool> {
        let value: Option<String> = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .context(format!("Failed to read preference '{}'", key))?;

        Ok(value.as_deref() == Some(TRUE_VALUE))
    }

    pub fn set_flag(&self, key: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT INTO preferences (key, value, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
                params![key, TRUE_VALUE],
            )
            .context(format!("Failed to store preference '{}'", key))?;
        Ok(())
    }

    pub fn clear_flag(&self, key: &str) -> Result<()> {
        self.db
            .connection()
            .execute("DELETE FROM preferences WHERE key = ?1", [key])
            .context(format!("Failed to clear preference '{}'", key))?;
        Ok(())
    }

    pub fn prefers_default_theme(&self) -> Result<bool> {
        self.get_flag(FORCE_DEFAULT_THEME)
    }
}
