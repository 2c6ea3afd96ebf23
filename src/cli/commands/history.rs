use crate::cli::commands::{records_table, resolve_line};
use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

/// Per-car drill-down: every row recorded for one car.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::History { line, car } = cmd {
        let line = resolve_line(line.as_deref(), &ctx.cfg)?;
        let records = ctx.store.find(line, car.trim())?;

        if records.is_empty() {
            info(format!("No records for car {} on {}.", car, line.label()));
            return Ok(());
        }

        header(format!("{} · car {}", line.label(), car));
        print!("{}", records_table(&records).render());
    }
    Ok(())
}
