use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, Utc};
use serde::Serialize;

/// Format used for `entries.created_at`.
/// UTC with microseconds, so that text ordering equals chronological ordering.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,        // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub merchant_name: String,  // ⇔ entries.merchant_name
    pub item: String,           // ⇔ entries.item (catalog name, plain text)
    pub weight: f64,            // ⇔ entries.weight
    pub unit: String,           // ⇔ entries.unit
    pub price_per_unit: f64,    // ⇔ entries.price_per_unit
    pub cost: f64,              // ⇔ entries.cost
    pub paid: f64,              // ⇔ entries.paid (updated by settlement)
    pub due: f64,               // ⇔ entries.due (updated by settlement)
    pub created_at: String,     // ⇔ entries.created_at (TEXT, see CREATED_AT_FORMAT)
}

impl Entry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// A transaction as received from the command line, before cost and due
/// are derived.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub merchant_name: String,
    pub item: String,
    pub weight: f64,
    pub unit: String,
    pub price_per_unit: f64,
    pub paid: f64,
}

impl NewEntry {
    pub fn cost(&self) -> f64 {
        self.price_per_unit * self.weight
    }

    /// Reject out-of-range input before anything touches the database.
    pub fn validate(&self) -> AppResult<()> {
        let merchant_len = self.merchant_name.trim().chars().count();
        if !(2..=100).contains(&merchant_len) {
            return Err(AppError::Validation(format!(
                "merchant name must be 2-100 characters, got '{}'",
                self.merchant_name
            )));
        }

        let item_len = self.item.trim().chars().count();
        if item_len == 0 || item_len > 100 {
            return Err(AppError::Validation(
                "item name must be 1-100 characters".into(),
            ));
        }

        let unit_len = self.unit.trim().chars().count();
        if unit_len == 0 || unit_len > 50 {
            return Err(AppError::Validation("unit must be 1-50 characters".into()));
        }

        if !self.weight.is_finite() || self.weight < 0.01 {
            return Err(AppError::Validation(format!(
                "weight must be at least 0.01, got {}",
                self.weight
            )));
        }

        if !self.price_per_unit.is_finite() || self.price_per_unit < 0.0 {
            return Err(AppError::Validation(format!(
                "price per unit must be non-negative, got {}",
                self.price_per_unit
            )));
        }

        if !self.paid.is_finite() || self.paid < 0.0 {
            return Err(AppError::Validation(format!(
                "paid amount must be non-negative, got {}",
                self.paid
            )));
        }

        Ok(())
    }
}

pub fn now_timestamp() -> String {
    Utc::now().format(CREATED_AT_FORMAT).to_string()
}
