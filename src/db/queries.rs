use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::settlement::MerchantDue;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ENTRY_COLUMNS: &str = "id, date, merchant_name, item, weight, unit, price_per_unit, \
                             cost, paid, due, created_at";

/// Optional filters for entry listings and exports.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub merchant: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

fn date_to_db(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn map_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        date,
        merchant_name: row.get("merchant_name")?,
        item: row.get("item")?,
        weight: row.get("weight")?,
        unit: row.get("unit")?,
        price_per_unit: row.get("price_per_unit")?,
        cost: row.get("cost")?,
        paid: row.get("paid")?,
        due: row.get("due")?,
        created_at: row.get("created_at")?,
    })
}

fn collect(rows: impl Iterator<Item = Result<Entry>>) -> AppResult<Vec<Entry>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new entry (the `id` field is ignored) and return the assigned id.
pub fn insert_entry(conn: &Connection, e: &Entry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries
            (date, merchant_name, item, weight, unit, price_per_unit, cost, paid, due, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            date_to_db(&e.date),
            e.merchant_name,
            e.item,
            e.weight,
            e.unit,
            e.price_per_unit,
            e.cost,
            e.paid,
            e.due,
            e.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    let sql = format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1");
    Ok(conn.query_row(&sql, [id], map_row).optional()?)
}

/// Most recently created entry of a (merchant, item) pair on a given date.
pub fn latest_entry_for(
    conn: &Connection,
    date: &NaiveDate,
    merchant: &str,
    item: &str,
) -> AppResult<Option<Entry>> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE date = ?1 AND merchant_name = ?2 AND item = ?3
         ORDER BY created_at DESC, id DESC
         LIMIT 1"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt
        .query_row(params![date_to_db(date), merchant, item], map_row)
        .optional()?)
}

/// Entries of a merchant that still carry a due, oldest first.
pub fn outstanding_entries(conn: &Connection, merchant: &str) -> AppResult<Vec<Entry>> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE merchant_name = ?1 AND due > 0
         ORDER BY date ASC, created_at ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([merchant], map_row)?;
    collect(rows)
}

/// Only `paid` and `due` may change after creation.
pub fn update_paid_due(conn: &Connection, id: i64, paid: f64, due: f64) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE entries SET paid = ?1, due = ?2 WHERE id = ?3",
        params![paid, due, id],
    )?;
    if changed != 1 {
        return Err(AppError::Other(format!("entry {} not found", id)));
    }
    Ok(())
}

/// All entries of a date in creation order.
pub fn entries_on(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<Entry>> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE date = ?1
         ORDER BY created_at ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([date_to_db(date)], map_row)?;
    collect(rows)
}

/// Newest first, as shown by `list`.
pub fn list_entries(conn: &Connection, filter: &EntryFilter) -> AppResult<Vec<Entry>> {
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE (?1 IS NULL OR merchant_name = ?1)
           AND (?2 IS NULL OR date >= ?2)
           AND (?3 IS NULL OR date <= ?3)
         ORDER BY date DESC, created_at DESC, id DESC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![
            filter.merchant,
            filter.from.as_ref().map(date_to_db),
            filter.to.as_ref().map(date_to_db),
        ],
        map_row,
    )?;
    collect(rows)
}

/// Merchants whose entries add up to a positive due.
pub fn merchant_dues(conn: &Connection) -> AppResult<Vec<MerchantDue>> {
    let mut stmt = conn.prepare(
        "SELECT merchant_name, SUM(due) AS total_due
         FROM entries
         GROUP BY merchant_name
         HAVING SUM(due) > 0
         ORDER BY merchant_name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(MerchantDue {
            merchant: row.get(0)?,
            total_due: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
