use crate::config::Config;
use crate::core::settle::outstanding_by_merchant;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config, pool: &DbPool) -> AppResult<()> {
    let dues = outstanding_by_merchant(&pool.conn)?;

    if dues.is_empty() {
        info("No outstanding dues.");
        return Ok(());
    }

    let mut table = Table::new(
        vec![Column::left("Merchant"), Column::right("Total due")],
        &cfg.separator_char,
    );
    for d in &dues {
        table.add_row(vec![d.merchant.clone(), money(&cfg.currency, d.total_due)]);
    }

    println!("💰 Merchants with outstanding dues:\n");
    print!("{}", table.render());
    Ok(())
}
