//! Daily profit/loss summary.

use crate::db::queries::entries_on;
use crate::errors::AppResult;
use crate::models::summary::{DailySummary, SummaryOutcome};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::collections::HashMap;

/// Totals for `report_date`, or `NoData` when nothing was recorded that day.
///
/// `due` is a running balance, so for dues only the newest entry of each
/// (merchant, item) pair counts.
pub fn summarize(
    conn: &Connection,
    report_date: NaiveDate,
    total_cash_income: f64,
) -> AppResult<SummaryOutcome> {
    let entries = entries_on(conn, &report_date)?;

    if entries.is_empty() {
        return Ok(SummaryOutcome::NoData { date: report_date });
    }

    let total_cost: f64 = entries.iter().map(|e| e.cost).sum();
    let total_paid: f64 = entries.iter().map(|e| e.paid).sum();

    // entries come in creation order, later ones overwrite earlier ones
    let mut latest_due: HashMap<(&str, &str), f64> = HashMap::new();
    for e in &entries {
        latest_due.insert((e.merchant_name.as_str(), e.item.as_str()), e.due);
    }
    let total_dues_today: f64 = latest_due.values().sum();

    Ok(SummaryOutcome::Report(DailySummary {
        date: report_date,
        total_cost,
        total_paid,
        total_cash_income,
        profit_loss: total_cash_income - total_cost,
        total_dues_today,
    }))
}
