use crate::cli::commands::{records_table, resolve_line};
use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { line } = cmd {
        let line = resolve_line(line.as_deref(), &ctx.cfg)?;
        let records = ctx.store.list(line)?;

        if records.is_empty() {
            info(format!("No records for {}.", line.label()));
            return Ok(());
        }

        header(format!("{} · {} rows", line.label(), records.len()));
        print!("{}", records_table(&records).render());
    }
    Ok(())
}
