use crate::ui::messages::{success, warning};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name = ?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `entries` table and its lookup indexes.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            date            TEXT NOT NULL,
            merchant_name   TEXT NOT NULL,
            item            TEXT NOT NULL,
            weight          REAL NOT NULL,
            unit            TEXT NOT NULL,
            price_per_unit  REAL NOT NULL,
            cost            REAL NOT NULL,
            paid            REAL NOT NULL,
            due             REAL NOT NULL,
            created_at      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_pair_date ON entries(merchant_name, item, date);
        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        [Local::now().to_rfc3339().as_str(), version, message],
    )?;
    Ok(())
}

/// Import rows from the `dairy_entry` table written by the first version of
/// the ledger (column `m_name`, timestamps as `YYYY-MM-DD HH:MM:SS[.ffffff]`).
/// The legacy table is kept as `dairy_entry_legacy`.
fn migrate_import_legacy_entries(conn: &Connection) -> Result<()> {
    let version = "20240601_0001_import_dairy_entry";

    if migration_applied(conn, version)? || !table_exists(conn, "dairy_entry")? {
        return Ok(());
    }

    warning("Legacy 'dairy_entry' table detected, importing rows...");

    // rolled back on drop if any statement fails
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(
        r#"
        INSERT INTO entries
            (date, merchant_name, item, weight, unit, price_per_unit, cost, paid, due, created_at)
        SELECT
            date, m_name, item, weight, unit, price_per_unit, cost, paid, due,
            CASE
                WHEN created_at IS NULL THEN date || 'T00:00:00.000000Z'
                WHEN length(created_at) = 19 THEN replace(created_at, ' ', 'T') || '.000000Z'
                ELSE replace(created_at, ' ', 'T') || 'Z'
            END
        FROM dairy_entry
        ORDER BY id ASC;

        ALTER TABLE dairy_entry RENAME TO dairy_entry_legacy;
        "#,
    )?;

    let imported: i64 =
        tx.query_row("SELECT COUNT(*) FROM dairy_entry_legacy", [], |row| row.get(0))?;

    mark_applied(
        &tx,
        version,
        &format!("Imported {} rows from dairy_entry", imported),
    )?;
    tx.commit()?;

    success(format!(
        "Migration applied: {} → imported {} legacy entries",
        version, imported
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Entries table and indexes
    create_entries_table(conn)?;

    // 3) Rows from the first version of the ledger
    migrate_import_legacy_entries(conn)?;

    Ok(())
}
