use crate::config::Config;
use crate::errors::AppResult;
use crate::models::catalog::DAIRY_PRODUCTS;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut table = Table::new(
        vec![Column::left("Item"), Column::right("Unit price")],
        &cfg.separator_char,
    );

    for (name, price) in DAIRY_PRODUCTS {
        table.add_row(vec![name.to_string(), money(&cfg.currency, price)]);
    }

    println!("🥛 Product catalog:\n");
    print!("{}", table.render());
    Ok(())
}
