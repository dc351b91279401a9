use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use tracing::debug;

use crate::model::SimulationInput;
use crate::session::migrations::BASE_MIGRATION;
use crate::session::{StoredInput, SESSION_KEY};

/// Single-slot handoff between the configure step and the results step.
/// Every save replaces the previous input.
pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed creating session directory: {}", parent.display())
            })?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("failed opening session store: {}", path.display()))?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.migrate()?;
        Ok(store)
    }

    pub fn migrate(&self) -> Result<()> {
        self.conn.execute_batch(BASE_MIGRATION)?;
        Ok(())
    }

    pub fn save(&self, input: &SimulationInput) -> Result<StoredInput> {
        let stored = StoredInput {
            input: *input,
            saved_at: Utc::now(),
        };
        self.conn.execute(
            r#"
INSERT INTO session_slots(slot_key, input_json, saved_at)
VALUES (?1, ?2, ?3)
ON CONFLICT(slot_key) DO UPDATE SET
    input_json = excluded.input_json,
    saved_at = excluded.saved_at
"#,
            params![
                SESSION_KEY,
                serde_json::to_string(&stored.input)?,
                stored.saved_at.to_rfc3339()
            ],
        )?;
        debug!("saved session input under {SESSION_KEY}");
        Ok(stored)
    }

    pub fn load(&self) -> Result<Option<StoredInput>> {
        let mut stmt = self.conn.prepare(
            r#"
SELECT input_json, saved_at
FROM session_slots
WHERE slot_key = ?1
"#,
        )?;
        let result = stmt.query_row(params![SESSION_KEY], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        });
        let (json, saved_at_raw) = match result {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let input: SimulationInput = serde_json::from_str(&json)
            .with_context(|| format!("stored session input is malformed: {json}"))?;
        let saved_at = DateTime::parse_from_rfc3339(&saved_at_raw)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());
        Ok(Some(StoredInput { input, saved_at }))
    }

    /// Returns whether a stored input was removed.
    pub fn clear(&self) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM session_slots WHERE slot_key = ?1",
            params![SESSION_KEY],
        )?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{SimulationInput, SyncType};
    use crate::session::store::SessionStore;

    #[test]
    fn empty_slot_loads_as_none() {
        let store = SessionStore::in_memory().expect("open store");
        assert!(store.load().expect("load").is_none());
        assert!(!store.clear().expect("clear"));
    }

    #[test]
    fn last_write_wins() {
        let store = SessionStore::in_memory().expect("open store");
        store.save(&SimulationInput::default()).expect("first save");
        let second = SimulationInput::default().with_sync_type(SyncType::Partial);
        store.save(&second).expect("second save");

        let loaded = store.load().expect("load").expect("slot populated");
        assert_eq!(loaded.input, second);
    }

    #[test]
    fn persists_across_reopen_and_clears() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/session.db");
        {
            let store = SessionStore::open(&path).expect("open store");
            store.save(&SimulationInput::default()).expect("save");
        }
        let store = SessionStore::open(&path).expect("reopen store");
        assert!(store.load().expect("load").is_some());
        assert!(store.clear().expect("clear"));
        assert!(store.load().expect("load").is_none());
    }
}
