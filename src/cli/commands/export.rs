use crate::cli::parser::Commands;
use crate::core::export::ExportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        ExportLogic::export(&pool.conn, format, file, range, *force)?;
    }
    Ok(())
}
