use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result};

/// Insert or replace the value stored under `key`
pub fn set_entry(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO session_entries (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn get_entry(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM session_entries WHERE key = ?1",
        [key],
        |row| row.get(0),
    )
    .optional()
}

pub fn delete_entry(conn: &Connection, key: &str) -> Result<bool> {
    let rows_affected = conn.execute("DELETE FROM session_entries WHERE key = ?1", [key])?;
    Ok(rows_affected > 0)
}

/// All keys, oldest write first
pub fn list_keys(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT key FROM session_entries ORDER BY updated_at ASC, key ASC")?;
    let keys = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>>>()?;
    Ok(keys)
}

pub fn clear_entries(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM session_entries", [])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        schema::initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn test_set_entry_upserts() {
        let conn = setup();
        set_entry(&conn, "project_1", "{}").unwrap();
        set_entry(&conn, "project_1", "{\"a\":1}").unwrap();

        assert_eq!(get_entry(&conn, "project_1").unwrap().as_deref(), Some("{\"a\":1}"));
        assert_eq!(list_keys(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_and_clear() {
        let conn = setup();
        set_entry(&conn, "a", "1").unwrap();
        set_entry(&conn, "b", "2").unwrap();

        assert!(delete_entry(&conn, "a").unwrap());
        assert!(!delete_entry(&conn, "a").unwrap());
        assert_eq!(clear_entries(&conn).unwrap(), 1);
        assert!(get_entry(&conn, "b").unwrap().is_none());
    }
}
