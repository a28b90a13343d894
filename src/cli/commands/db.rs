use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Stored cost may differ from weight × price by at most this much.
const COST_TOLERANCE: f64 = 0.005;

pub fn handle(cmd: &Commands, cfg: &Config, pool: &DbPool) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if *migrate {
        info("Applying pending migrations…");
        run_pending_migrations(&pool.conn)?;
        success("Ledger schema is up to date.");
    }

    if *show_info {
        stats::print_db_info(pool, &cfg.currency)?;
    }

    if *check {
        check_integrity(pool)?;
        check_costs(pool)?;
    }

    if *vacuum {
        info("Compacting database file…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}

fn check_integrity(pool: &DbPool) -> AppResult<()> {
    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if integrity == "ok" {
        success("Integrity check passed.");
    } else {
        warning(format!("Integrity check failed: {integrity}"));
    }
    Ok(())
}

/// Entries whose stored cost no longer matches weight × price.
fn check_costs(pool: &DbPool) -> AppResult<()> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, date, merchant_name, item FROM entries
         WHERE ABS(cost - weight * price_per_unit) > ?1
         ORDER BY date, id",
    )?;
    let rows = stmt.query_map([COST_TOLERANCE], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
        ))
    })?;

    let mut mismatches = 0usize;
    for r in rows {
        let (id, date, merchant, item) = r?;
        warning(format!(
            "entry {id} ({date} {merchant} / {item}): cost differs from weight × price"
        ));
        mismatches += 1;
    }

    if mismatches == 0 {
        success("Entry costs are consistent.");
    }
    Ok(())
}
