use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// One-time schema setup for a freshly opened connection.
///
/// Waits briefly on a locked file instead of failing at once, then applies
/// every pending migration. Safe to call on an up-to-date database.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    run_pending_migrations(conn)?;
    Ok(())
}
