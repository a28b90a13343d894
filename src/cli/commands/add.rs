use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::catalog;
use crate::models::entry::NewEntry;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::formatting::quantity;
use crate::utils::money;

/// Record a purchase transaction.
pub fn handle(cmd: &Commands, cfg: &Config, pool: &DbPool) -> AppResult<()> {
    if let Commands::Add {
        date,
        merchant,
        item,
        weight,
        paid,
        unit,
        price,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Resolve item against the catalog (not enforced)
        //
        let item_name = match catalog::canonical_name(item) {
            Some(name) => name.to_string(),
            None => {
                warning(format!("'{}' is not in the product catalog.", item.trim()));
                item.clone()
            }
        };

        //
        // 3. Price: explicit, or catalog reference price
        //
        let price_per_unit = match price.or_else(|| catalog::price_of(&item_name)) {
            Some(p) => p,
            None => {
                return Err(AppError::Validation(format!(
                    "no --price given and '{}' has no catalog price",
                    item_name
                )));
            }
        };

        //
        // 4. Unit (default from config)
        //
        let unit = unit.clone().unwrap_or_else(|| cfg.default_unit.clone());

        //
        // 5. Execute logic
        //
        let entry = AddLogic::apply(
            &pool.conn,
            NewEntry {
                date: d,
                merchant_name: merchant.clone(),
                item: item_name,
                weight: *weight,
                unit,
                price_per_unit,
                paid: *paid,
            },
        )?;

        success(format!(
            "Entry {} added: {} / {} on {}",
            entry.id,
            entry.merchant_name,
            entry.item,
            entry.date_str()
        ));
        println!(
            "   {} {} × {} = cost: {} | paid: {} | due: {}",
            quantity(entry.weight),
            entry.unit,
            money(&cfg.currency, entry.price_per_unit),
            money(&cfg.currency, entry.cost),
            money(&cfg.currency, entry.paid),
            money(&cfg.currency, entry.due),
        );
    }

    Ok(())
}
