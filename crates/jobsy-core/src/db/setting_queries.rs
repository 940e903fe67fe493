//! Key/value settings queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SETTING_SQL: &str = "SELECT value FROM settings WHERE key = ?1";
const UPSERT_SETTING_SQL: &str = "INSERT INTO settings (key, value, updated_at) \
     VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_SETTING_SQL: &str = "DELETE FROM settings WHERE key = ?1";
const SELECT_ALL_SETTINGS_SQL: &str = "SELECT key, value FROM settings ORDER BY key";
const DELETE_ALL_SETTINGS_SQL: &str = "DELETE FROM settings";

impl super::Database {
    /// Reads a setting, `None` when absent.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SETTING_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read setting")
    }

    /// Inserts or replaces a setting.
    pub fn set_setting(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_SETTING_SQL, params![key, value, now])
            .db_context("Failed to write setting")?;
        Ok(())
    }

    /// Deletes a setting. Returns whether it existed.
    pub fn remove_setting(&mut self, key: &str) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_SETTING_SQL, params![key])
            .db_context("Failed to delete setting")?;
        Ok(removed > 0)
    }

    /// All settings ordered by key.
    pub fn list_settings(&self) -> Result<Vec<(String, String)>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_SETTINGS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .db_context("Failed to query settings")?;

        let settings = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read settings")?;
        Ok(settings)
    }

    /// Deletes every setting. Returns how many were removed.
    pub fn clear_settings(&mut self) -> Result<usize> {
        self.connection
            .execute(DELETE_ALL_SETTINGS_SQL, [])
            .db_context("Failed to clear settings")
    }
}
