use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::money;
use std::fs;

pub fn print_db_info(pool: &DbPool, currency: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, pool.path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL ENTRIES / MERCHANTS
    //
    let (count, merchants): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), COUNT(DISTINCT merchant_name) FROM entries",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );
    println!("{}• Merchants:{} {}", CYAN, RESET, merchants);

    //
    // 3) DATE RANGE
    //
    let (first_date, last_date): (Option<String>, Option<String>) = pool.conn.query_row(
        "SELECT MIN(date), MAX(date) FROM entries",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) OUTSTANDING
    //
    let outstanding: f64 = pool.conn.query_row(
        "SELECT COALESCE(SUM(due), 0.0) FROM entries WHERE due > 0",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Outstanding due:{} {}",
        CYAN,
        RESET,
        money(currency, outstanding)
    );

    println!();
    Ok(())
}
