//! Due carry-forward.
//!
//! The due of a new entry is the running balance of its (merchant, item)
//! pair: the latest due recorded for that pair on the previous calendar day,
//! plus the new cost, minus what was paid now.
//!
//! Only the immediately preceding day is consulted. A gap of two or more days
//! starts the pair again from zero, even if an older entry is still unpaid.

use crate::db::queries::latest_entry_for;
use crate::errors::AppResult;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Due carried into `entry_date` for a pair, 0.0 when the previous day has no entry.
pub fn carried_due(
    conn: &Connection,
    entry_date: NaiveDate,
    merchant_name: &str,
    item: &str,
) -> AppResult<f64> {
    let Some(previous_date) = entry_date.pred_opt() else {
        return Ok(0.0);
    };

    Ok(latest_entry_for(conn, &previous_date, merchant_name, item)?
        .map(|e| e.due)
        .unwrap_or(0.0))
}

/// `previous_due + cost - paid`. Read only; the caller stores the entry.
pub fn compute_due(
    conn: &Connection,
    entry_date: NaiveDate,
    merchant_name: &str,
    item: &str,
    cost: f64,
    paid: f64,
) -> AppResult<f64> {
    let previous_due = carried_due(conn, entry_date, merchant_name, item)?;
    Ok(previous_due + cost - paid)
}
