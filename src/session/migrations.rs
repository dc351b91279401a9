pub const BASE_MIGRATION: &str = r#"
CREATE TABLE IF NOT EXISTS session_slots (
    slot_key TEXT PRIMARY KEY,
    input_json TEXT NOT NULL,
    saved_at TEXT NOT NULL
);
"#;
