use rusqlite::{Connection, Result};

pub fn initialize(conn: &Connection) -> Result<()> {
    // One row per sessionStorage-style entry
    conn.execute(
        "CREATE TABLE IF NOT EXISTS session_entries (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_session_entries_updated
         ON session_entries(updated_at)",
        [],
    )?;

    Ok(())
}
