// src/export/model.rs

use crate::models::entry::Entry;
use serde::Serialize;

/// Flat row used by CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub merchant_name: String,
    pub item: String,
    pub weight: f64,
    pub unit: String,
    pub price_per_unit: f64,
    pub cost: f64,
    pub paid: f64,
    pub due: f64,
    pub created_at: String,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            merchant_name: e.merchant_name.clone(),
            item: e.item.clone(),
            weight: e.weight,
            unit: e.unit.clone(),
            price_per_unit: e.price_per_unit,
            cost: e.cost,
            paid: e.paid,
            due: e.due,
            created_at: e.created_at.clone(),
        }
    }
}
