use crate::core::due::compute_due;
use crate::db::log::audit;
use crate::db::queries::insert_entry;
use crate::errors::AppResult;
use crate::models::entry::{Entry, NewEntry, now_timestamp};
use rusqlite::Connection;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate, derive cost and due, persist, and return the stored entry.
    pub fn apply(conn: &Connection, req: NewEntry) -> AppResult<Entry> {
        req.validate()?;

        let merchant_name = req.merchant_name.trim().to_string();
        let item = req.item.trim().to_string();
        let unit = req.unit.trim().to_string();
        let cost = req.cost();

        // lookup, insert and audit line share one transaction
        let tx = conn.unchecked_transaction()?;
        let due = compute_due(&tx, req.date, &merchant_name, &item, cost, req.paid)?;

        let mut entry = Entry {
            id: 0,
            date: req.date,
            merchant_name,
            item,
            weight: req.weight,
            unit,
            price_per_unit: req.price_per_unit,
            cost,
            paid: req.paid,
            due,
            created_at: now_timestamp(),
        };

        entry.id = insert_entry(&tx, &entry)?;
        audit(
            &tx,
            "add",
            &format!("{} / {}", entry.merchant_name, entry.item),
            &format!(
                "Entry {} on {}: cost {:.2}, paid {:.2}, due {:.2}",
                entry.id,
                entry.date_str(),
                entry.cost,
                entry.paid,
                entry.due
            ),
        )?;
        tx.commit()?;

        Ok(entry)
    }
}
