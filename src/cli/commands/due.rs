use crate::cli::commands::{parse_date_arg, records_table, resolve_line};
use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::core::eligibility::EligibilityWindow;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::date;

/// Cars due for the 3-month reduction on a line.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Due { line, date: reference, scope } = cmd {
        let line = resolve_line(line.as_deref(), &ctx.cfg)?;
        let reference = parse_date_arg(reference.as_deref())?.unwrap_or_else(date::today);
        let window = EligibilityWindow::new(reference, ctx.cfg.lookback_months);

        let due = ctx.due(line, reference, *scope)?;

        if due.is_empty() {
            success(format!(
                "No cars on {} due for reduction (turned on or before {}).",
                line.label(),
                date::format_compact(&window.cutoff())
            ));
            return Ok(());
        }

        header(format!(
            "{} · due for 2mm reduction · turned on or before {}",
            line.label(),
            date::format_compact(&window.cutoff())
        ));
        print!("{}", records_table(&due).render());
    }
    Ok(())
}
