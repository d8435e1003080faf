//! `kv_entries` schema setup.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;
use std::cmp::Ordering;

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

const KV_ENTRIES_SQL: &str = include_str!("kv_entries.sql");

/// Creates `kv_entries` on fresh files and stamps the schema version.
///
/// # Errors
/// - `SchemaTooNew` when the file carries a version above [`SCHEMA_VERSION`].
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    let found = schema_version(conn)?;
    match found.cmp(&SCHEMA_VERSION) {
        Ordering::Greater => Err(DbError::SchemaTooNew {
            found,
            supported: SCHEMA_VERSION,
        }),
        Ordering::Equal => Ok(()),
        Ordering::Less => {
            let tx = conn.unchecked_transaction()?;
            tx.execute_batch(KV_ENTRIES_SQL)?;
            tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            tx.commit()?;
            Ok(())
        }
    }
}

/// Reads `PRAGMA user_version`.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
